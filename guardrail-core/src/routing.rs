// Routing system for dispatching requests through constraints and guards

use crate::logging::debug;
use crate::{Error, Guard, GuardContext, HttpRequest, HttpResponse};
use crate::route_constraint::{RouteConstraint, RouteConstraints};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// A route handler function type
pub type HandlerFn = Arc<
    dyn Fn(
            HttpRequest,
        ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, Error>> + Send>>
        + Send
        + Sync,
>;

/// HTTP methods
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    DELETE,
    PATCH,
    HEAD,
    OPTIONS,
}

impl HttpMethod {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "GET" => Some(HttpMethod::GET),
            "POST" => Some(HttpMethod::POST),
            "PUT" => Some(HttpMethod::PUT),
            "DELETE" => Some(HttpMethod::DELETE),
            "PATCH" => Some(HttpMethod::PATCH),
            "HEAD" => Some(HttpMethod::HEAD),
            "OPTIONS" => Some(HttpMethod::OPTIONS),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::HEAD => "HEAD",
            HttpMethod::OPTIONS => "OPTIONS",
        }
    }
}

/// Route definition: method, path pattern, handler, and the guards and
/// constraints registered against it
pub struct Route {
    pub method: HttpMethod,
    pub path: String,
    handler: HandlerFn,
    guards: Vec<Arc<dyn Guard>>,
    constraints: RouteConstraints,
}

impl Route {
    pub fn new(method: HttpMethod, path: impl Into<String>, handler: HandlerFn) -> Self {
        Self {
            method,
            path: path.into(),
            handler,
            guards: Vec::new(),
            constraints: RouteConstraints::new(),
        }
    }

    /// Register a guard on this route. Guards run in registration order.
    pub fn guard(mut self, guard: Arc<dyn Guard>) -> Self {
        self.guards.push(guard);
        self
    }

    /// Declare a typed constraint for a path parameter
    pub fn constrain(
        mut self,
        name: impl Into<String>,
        constraint: Box<dyn RouteConstraint>,
    ) -> Self {
        self.constraints = self.constraints.add(name, constraint);
        self
    }
}

/// Router for managing routes and dispatching requests
///
/// Dispatch order per request: bind query parameters, match the path, bind
/// path parameters, check route constraints, run guards, invoke the handler.
/// The first failing step short-circuits with an error; `respond` renders
/// that error as a response whose body is the bare error message.
#[derive(Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Add a route to the router
    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Dispatch a request to the matching route
    pub async fn route(&self, mut request: HttpRequest) -> Result<HttpResponse, Error> {
        let (path, query) = split_path_query(&request.path);
        let path = path.to_string();

        if let Some(query) = query {
            request.query_params.extend(parse_query_string(query));
        }

        let mut path_matched = false;
        for route in &self.routes {
            let Some(params) = match_path(&route.path, &path) else {
                continue;
            };
            if route.method.as_str() != request.method {
                path_matched = true;
                continue;
            }

            request.path_params = params;
            route.constraints.check(&request.path_params)?;

            if !route.guards.is_empty() {
                let context = GuardContext::new(request.clone());
                for guard in &route.guards {
                    if !guard.can_activate(&context).await? {
                        debug!(path = %route.path, "guard rejected request");
                        return Err(Error::Forbidden("Access denied".to_string()));
                    }
                }
            }

            return (route.handler)(request).await;
        }

        if path_matched {
            Err(Error::MethodNotAllowed(format!(
                "{} {}",
                request.method, path
            )))
        } else {
            Err(Error::RouteNotFound(format!("{} {}", request.method, path)))
        }
    }

    /// Dispatch a request, rendering any error as a response
    pub async fn respond(&self, request: HttpRequest) -> HttpResponse {
        match self.route(request).await {
            Ok(response) => response,
            Err(err) => Self::error_response(&err),
        }
    }

    /// Render an error as a response carrying the bare message as its body
    pub fn error_response(err: &Error) -> HttpResponse {
        HttpResponse::new(err.status_code()).with_text(err.message())
    }
}

/// Split a request path into its path and optional query-string parts
fn split_path_query(raw: &str) -> (&str, Option<&str>) {
    match raw.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (raw, None),
    }
}

/// Match a route path pattern against a request path
/// Returns Some(params) if matched, None otherwise
fn match_path(pattern: &str, path: &str) -> Option<HashMap<String, String>> {
    let pattern_parts: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let path_parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    if pattern_parts.len() != path_parts.len() {
        return None;
    }

    let mut params = HashMap::new();

    for (pattern_part, path_part) in pattern_parts.iter().zip(path_parts.iter()) {
        if let Some(param_name) = pattern_part.strip_prefix(':') {
            params.insert(param_name.to_string(), path_part.to_string());
        } else if pattern_part != path_part {
            return None;
        }
    }

    Some(params)
}

/// Parse a query string into a map of parameters
fn parse_query_string(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter_map(|part| {
            let mut split = part.splitn(2, '=');
            let key = split.next()?;
            if key.is_empty() {
                return None;
            }
            let value = split.next().unwrap_or("");
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

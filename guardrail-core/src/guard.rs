// Guards for route protection

use crate::{Error, HttpRequest};
use async_trait::async_trait;
use std::sync::Arc;

/// Execution context for guards
pub struct GuardContext {
    pub request: HttpRequest,
}

impl GuardContext {
    pub fn new(request: HttpRequest) -> Self {
        Self { request }
    }

    pub fn get_header(&self, name: &str) -> Option<&String> {
        self.request.headers.get(name)
    }

    pub fn get_param(&self, name: &str) -> Option<&String> {
        self.request.path_params.get(name)
    }

    pub fn get_query(&self, name: &str) -> Option<&String> {
        self.request.query_params.get(name)
    }
}

/// Guard trait for protecting routes
///
/// A guard runs before the route handler. Returning `Ok(true)` lets the
/// pipeline continue; `Ok(false)` or `Err` short-circuits dispatch and the
/// error is rendered as the response.
#[async_trait]
pub trait Guard: Send + Sync {
    /// Determine if the request can proceed
    async fn can_activate(&self, context: &GuardContext) -> Result<bool, Error>;
}

/// A guard that requires every guard in a list to pass
pub struct MultiGuard {
    guards: Vec<Arc<dyn Guard>>,
}

impl MultiGuard {
    pub fn new(guards: Vec<Arc<dyn Guard>>) -> Self {
        Self { guards }
    }
}

#[async_trait]
impl Guard for MultiGuard {
    async fn can_activate(&self, context: &GuardContext) -> Result<bool, Error> {
        for guard in &self.guards {
            if !guard.can_activate(context).await? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Guard built from a plain predicate
pub struct CustomGuard<F>
where
    F: Fn(&GuardContext) -> Result<bool, Error> + Send + Sync,
{
    predicate: F,
}

impl<F> CustomGuard<F>
where
    F: Fn(&GuardContext) -> Result<bool, Error> + Send + Sync,
{
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

#[async_trait]
impl<F> Guard for CustomGuard<F>
where
    F: Fn(&GuardContext) -> Result<bool, Error> + Send + Sync,
{
    async fn can_activate(&self, context: &GuardContext) -> Result<bool, Error> {
        (self.predicate)(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with_query(name: &str, value: &str) -> HttpRequest {
        let mut request = HttpRequest::new("GET", "/test");
        request
            .query_params
            .insert(name.to_string(), value.to_string());
        request
    }

    #[tokio::test]
    async fn test_custom_guard_pass() {
        let guard = CustomGuard::new(|ctx| Ok(ctx.get_query("token").is_some()));
        let context = GuardContext::new(request_with_query("token", "abc"));

        assert!(guard.can_activate(&context).await.unwrap());
    }

    #[tokio::test]
    async fn test_custom_guard_error() {
        let guard = CustomGuard::new(|ctx| match ctx.get_query("token") {
            Some(_) => Ok(true),
            None => Err(Error::Unauthorized("missing token".to_string())),
        });
        let context = GuardContext::new(HttpRequest::new("GET", "/test"));

        assert!(guard.can_activate(&context).await.is_err());
    }

    #[tokio::test]
    async fn test_multi_guard_all_must_pass() {
        let always: Arc<dyn Guard> = Arc::new(CustomGuard::new(|_| Ok(true)));
        let never: Arc<dyn Guard> = Arc::new(CustomGuard::new(|_| Ok(false)));

        let context = GuardContext::new(HttpRequest::new("GET", "/test"));

        let passing = MultiGuard::new(vec![always.clone(), always.clone()]);
        assert!(passing.can_activate(&context).await.unwrap());

        let failing = MultiGuard::new(vec![always, never]);
        assert!(!failing.can_activate(&context).await.unwrap());
    }
}

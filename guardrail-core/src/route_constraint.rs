//! Route constraints for typed parameter extraction
//!
//! Constraints validate path parameters at the routing boundary, before guards
//! or handlers run. A route that declares a parameter as integer-typed never
//! hands a malformed value further down the pipeline.
//!
//! # Examples
//!
//! ```
//! use guardrail_core::{IntConstraint, RouteConstraints};
//!
//! let constraints = RouteConstraints::new().add("id", Box::new(IntConstraint));
//! ```

use crate::Error;
use std::collections::HashMap;

/// Trait for validating route parameters
pub trait RouteConstraint: Send + Sync {
    /// Validate a parameter value
    ///
    /// Returns Ok(()) if valid, Err with a descriptive message if invalid
    fn validate(&self, value: &str) -> Result<(), String>;

    /// Get a description of this constraint (for error messages)
    fn description(&self) -> &str;
}

/// Validates that a parameter is a valid signed integer
#[derive(Debug, Clone)]
pub struct IntConstraint;

impl RouteConstraint for IntConstraint {
    fn validate(&self, value: &str) -> Result<(), String> {
        value
            .parse::<i64>()
            .map(|_| ())
            .map_err(|_| format!("'{}' is not a valid integer", value))
    }

    fn description(&self) -> &str {
        "integer"
    }
}

/// Validates that a parameter is a valid unsigned integer
#[derive(Debug, Clone)]
pub struct UIntConstraint;

impl RouteConstraint for UIntConstraint {
    fn validate(&self, value: &str) -> Result<(), String> {
        value
            .parse::<u64>()
            .map(|_| ())
            .map_err(|_| format!("'{}' is not a valid unsigned integer", value))
    }

    fn description(&self) -> &str {
        "unsigned integer"
    }
}

/// Constraint set for a route, keyed by parameter name
#[derive(Default)]
pub struct RouteConstraints {
    constraints: HashMap<String, Box<dyn RouteConstraint>>,
}

impl RouteConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a constraint for a named parameter
    pub fn add(mut self, name: impl Into<String>, constraint: Box<dyn RouteConstraint>) -> Self {
        self.constraints.insert(name.into(), constraint);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Check every constrained parameter against the bound values.
    ///
    /// A parameter with a constraint but no bound value fails the check.
    pub fn check(&self, params: &HashMap<String, String>) -> Result<(), Error> {
        for (name, constraint) in &self.constraints {
            match params.get(name) {
                Some(value) => constraint
                    .validate(value)
                    .map_err(Error::BadRequest)?,
                None => {
                    return Err(Error::BadRequest(format!(
                        "missing {} parameter '{}'",
                        constraint.description(),
                        name
                    )));
                }
            }
        }
        Ok(())
    }
}

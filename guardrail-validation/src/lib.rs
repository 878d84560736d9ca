//! Argument validation for Guardrail routes
//!
//! Provides a loosely-typed view of a request's bound arguments, rules that
//! check them, and a guard that runs rules in the routing pipeline before the
//! handler.
//!
//! # Examples
//!
//! ## Checking a rule directly
//!
//! ```
//! use guardrail_validation::{ArgumentRule, NonZeroInt, RequestArguments, ValidationOutcome};
//!
//! let rule = NonZeroInt::new("y");
//!
//! let mut arguments = RequestArguments::new();
//! arguments.insert("y", "5");
//! assert_eq!(rule.check(&arguments), ValidationOutcome::Proceed);
//!
//! arguments.insert("y", "0");
//! assert_eq!(
//!     rule.check(&arguments),
//!     ValidationOutcome::Reject("y cannot be 0".to_string())
//! );
//! ```
//!
//! ## Guarding a route
//!
//! ```no_run
//! use std::sync::Arc;
//! use guardrail_core::{HttpMethod, HttpResponse, Route};
//! use guardrail_validation::{ArgumentGuard, NonZeroInt};
//!
//! let route = Route::new(
//!     HttpMethod::GET,
//!     "/div/:x/:y",
//!     Arc::new(|_req| Box::pin(async { Ok(HttpResponse::ok()) })),
//! )
//! .guard(Arc::new(ArgumentGuard::new(NonZeroInt::new("y"))));
//! ```

mod arguments;
mod guard;
mod outcome;
mod rules;

pub use arguments::*;
pub use guard::*;
pub use outcome::*;
pub use rules::*;

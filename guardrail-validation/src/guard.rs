// Guard bridging argument rules into the routing pipeline

use crate::{ArgumentRule, RequestArguments, ValidationOutcome};
use async_trait::async_trait;
use guardrail_core::logging::debug;
use guardrail_core::{Error, Guard, GuardContext};

/// Runs an argument rule before the route handler.
///
/// The guard gathers the request's bound path and query parameters into
/// [`RequestArguments`], checks the rule, and maps a rejection to
/// `Error::BadRequest` carrying the rejection message. The router renders
/// that as a 400 response whose body is the message verbatim.
pub struct ArgumentGuard {
    rule: Box<dyn ArgumentRule>,
}

impl ArgumentGuard {
    pub fn new(rule: impl ArgumentRule + 'static) -> Self {
        Self {
            rule: Box::new(rule),
        }
    }
}

#[async_trait]
impl Guard for ArgumentGuard {
    async fn can_activate(&self, context: &GuardContext) -> Result<bool, Error> {
        let arguments = RequestArguments::from_request(&context.request);
        match self.rule.check(&arguments) {
            ValidationOutcome::Proceed => Ok(true),
            ValidationOutcome::Reject(message) => {
                debug!(
                    rule = self.rule.name(),
                    %message,
                    "argument validation rejected request"
                );
                Err(Error::BadRequest(message))
            }
        }
    }
}

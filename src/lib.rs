// Guardrail - explicit route guards and argument validation for HTTP pipelines
//
// This library wires guards, middleware, and typed route constraints into a
// small routing pipeline, with a validation layer for loosely-typed request
// arguments.

// Re-export core functionality
pub use guardrail_core::*;

// Re-export the validation layer
pub use guardrail_validation::*;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        ArgumentGuard,
        ArgumentRule,
        Error,
        Guard,
        GuardContext,
        HttpMethod,
        HttpRequest,
        HttpResponse,
        Json,
        Middleware,
        MiddlewareChain,
        NonZeroInt,
        RequestArguments,
        RequestLoggingMiddleware,
        Route,
        Router,
        RuleSet,
        ValidationOutcome,
    };
}

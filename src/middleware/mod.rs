//! Tower middleware wrapping the request pipeline.
//!
//! # Middleware Order
//! Layers added to the router later sit further out. Request flows:
//! outermost → innermost → handler; response flows back the other way.
//!
//! Order used by the application (outermost first):
//! 1. LoggingLayer - one log line per request with the final status
//! 2. ErrorHandlingLayer - converts panics into the opaque 500 response
//! 3. AuthLayer - bearer-token check (only when tokens are configured)
//!
//! Logging sits outside the error boundary so its line also fires for
//! requests that fail downstream.

pub mod auth;
pub mod error_handling;
pub mod logging;

pub use auth::{AuthLayer, StaticTokenValidator, TokenValidator};
pub use error_handling::ErrorHandlingLayer;
pub use logging::LoggingLayer;

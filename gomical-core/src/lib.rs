//! Core types and helpers for the gomical garbage-schedule clients.

/// Wire envelope shared by the lookup and admin APIs.
pub mod envelope;
/// Error type returned by the API clients.
pub mod error;
/// Domain models, weekdays, and localized labels.
pub mod model;
/// Week rotation and weekday-to-date resolution.
pub mod week;

pub use envelope::*;
pub use error::*;
pub use model::*;
pub use week::*;

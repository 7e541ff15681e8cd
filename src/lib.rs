// ============================================================================
// Activity Board Library
// ============================================================================
//
// The domain core of the board: the `Activity` record and the in-memory
// `Repository` it lives in, plus the form bridge that turns raw field text
// into stored records. Everything here is UI-free; the terminal front end
// lives in the binary.

pub mod error;
pub mod form;
pub mod models;
pub mod repository;

// Re-export main types for convenience
pub use error::{FormError, Result};
pub use form::{FormInput, submit};
pub use models::Activity;
pub use repository::Repository;

use thiserror::Error;

/// The one domain error in the system.
///
/// Collection operations are total (create/list/delete cannot fail), so the
/// only thing that can go wrong is a form submission with missing required
/// fields. Callers handle it locally: the message is shown to the user and
/// the submission is dropped, never propagated as a process failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// At least one of the three required fields was empty after trimming.
    #[error("please complete all fields")]
    IncompleteForm,
}

pub type Result<T> = std::result::Result<T, FormError>;

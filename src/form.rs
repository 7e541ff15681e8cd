use crate::error::{FormError, Result};
use crate::models::Activity;
use crate::repository::Repository;

/// Raw text captured from the three entry-form fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub title: String,
    pub description: String,
    pub image_url: String,
}

impl FormInput {
    pub fn new(title: &str, description: &str, image_url: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            image_url: image_url.to_string(),
        }
    }
}

/// Bridge a form submission into the repository.
///
/// Trims surrounding whitespace from all three fields and rejects the
/// submission if any of them comes out empty; the repository is untouched in
/// that case. Otherwise the trimmed values are stored as a new record, which
/// is returned so the caller can react to it.
pub fn submit(repository: &mut Repository, input: FormInput) -> Result<Activity> {
    let title = input.title.trim();
    let description = input.description.trim();
    let image_url = input.image_url.trim();

    if title.is_empty() || description.is_empty() || image_url.is_empty() {
        tracing::debug!("form submission rejected: missing required fields");
        return Err(FormError::IncompleteForm);
    }

    Ok(repository.create(
        title.to_string(),
        description.to_string(),
        image_url.to_string(),
    ))
}

use crate::{
    error::{Error, Result},
    model::mongodb::Id,
};

/// A required, non-blank text field.
pub(super) fn required<'a>(value: &'a Option<String>, label: &str) -> Result<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(Error::Validation(format!("{label} is required"))),
    }
}

/// A required record ID, parsed from its hex string form.
pub(super) fn required_id(value: &Option<String>, label: &str) -> Result<Id> {
    required(value, label)?
        .parse()
        .map_err(|_| Error::Validation(format!("Malformed {}", label.to_lowercase())))
}

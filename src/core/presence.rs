//! Field presence rules for optional output fields.
//!
//! A key that appears in a rendered document always carries a meaningful
//! value: blank text and empty collections are left out entirely.

/// True when the value exists and is not blank after trimming.
pub fn include_scalar<S: AsRef<str>>(value: Option<S>) -> bool {
    value.is_some_and(|v| !v.as_ref().trim().is_empty())
}

/// True when the collection has at least one element.
pub fn include_collection<T>(values: &[T]) -> bool {
    !values.is_empty()
}

/// Returns the value only when [`include_scalar`] accepts it.
pub fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| include_scalar(Some(v)))
}

//! Helper functions for building constrained types
//!
//! Each helper is generic over the newtype it produces, so a smart constructor
//! only has to name its field, its bounds and its tuple constructor.

use regex::Regex;
use rust_decimal::Decimal;

use super::error::ValidationError;

/// Creates a string type with a maximum length constraint
///
/// Length is counted in characters, not bytes, so accented city or customer
/// names are measured the way a user would count them.
///
/// # Errors
///
/// Returns [`ValidationError`] when the input is empty or longer than
/// `max_length` characters.
///
/// # Examples
///
/// ```
/// use storefront_checkout::simple_types::constrained_type::create_string;
///
/// #[derive(Debug, PartialEq)]
/// struct Name(String);
///
/// assert!(create_string("Name", Name, 10, "Mohammédia").is_ok());
/// assert!(create_string("Name", Name, 10, "").is_err());
/// ```
pub fn create_string<T, F>(
    field_name: &str,
    constructor: F,
    max_length: usize,
    value: &str,
) -> Result<T, ValidationError>
where
    F: FnOnce(String) -> T,
{
    if value.is_empty() {
        Err(ValidationError::new(field_name, "Must not be empty"))
    } else if value.chars().count() > max_length {
        Err(ValidationError::new(
            field_name,
            &format!("Must not be more than {max_length} chars"),
        ))
    } else {
        Ok(constructor(value.to_string()))
    }
}

/// Creates an optional string type, returning `None` for an empty input
///
/// # Errors
///
/// Returns [`ValidationError`] when the input exceeds `max_length` characters.
pub fn create_string_option<T, F>(
    field_name: &str,
    constructor: F,
    max_length: usize,
    value: &str,
) -> Result<Option<T>, ValidationError>
where
    F: FnOnce(String) -> T,
{
    if value.is_empty() {
        Ok(None)
    } else {
        create_string(field_name, constructor, max_length, value).map(Some)
    }
}

/// Creates an integer type with range constraints
///
/// # Errors
///
/// Returns [`ValidationError`] when the input is outside `min_value..=max_value`.
pub fn create_integer<T, F>(
    field_name: &str,
    constructor: F,
    min_value: u32,
    max_value: u32,
    value: u32,
) -> Result<T, ValidationError>
where
    F: FnOnce(u32) -> T,
{
    if value < min_value {
        Err(ValidationError::new(
            field_name,
            &format!("Must not be less than {min_value}"),
        ))
    } else if value > max_value {
        Err(ValidationError::new(
            field_name,
            &format!("Must not be greater than {max_value}"),
        ))
    } else {
        Ok(constructor(value))
    }
}

/// Creates a decimal type with range constraints
///
/// # Errors
///
/// Returns [`ValidationError`] when the input is outside `min_value..=max_value`.
pub fn create_decimal<T, F>(
    field_name: &str,
    constructor: F,
    min_value: Decimal,
    max_value: Decimal,
    value: Decimal,
) -> Result<T, ValidationError>
where
    F: FnOnce(Decimal) -> T,
{
    if value < min_value {
        Err(ValidationError::new(
            field_name,
            &format!("Must not be less than {min_value}"),
        ))
    } else if value > max_value {
        Err(ValidationError::new(
            field_name,
            &format!("Must not be greater than {max_value}"),
        ))
    } else {
        Ok(constructor(value))
    }
}

/// Creates a string type that must match a regular expression
///
/// The pattern is used as given; callers anchor it with `^...$` when the whole
/// value has to match.
///
/// # Errors
///
/// Returns [`ValidationError`] when the input is empty or does not match.
pub fn create_like<T, F>(
    field_name: &str,
    constructor: F,
    pattern: &Regex,
    value: &str,
) -> Result<T, ValidationError>
where
    F: FnOnce(String) -> T,
{
    if value.is_empty() {
        Err(ValidationError::new(field_name, "Must not be empty"))
    } else if pattern.is_match(value) {
        Ok(constructor(value.to_string()))
    } else {
        Err(ValidationError::new(
            field_name,
            &format!("'{value}' must match the pattern '{}'", pattern.as_str()),
        ))
    }
}

//! String constrained types
//!
//! `String50`, `EmailAddress`, `CityName`, `Password` and `PhoneNumber`.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use super::constrained_type;
use super::error::ValidationError;

// =============================================================================
// String50
// =============================================================================

/// Non-empty string of at most 50 characters
///
/// Used for product names and customer names.
///
/// # Examples
///
/// ```
/// use storefront_checkout::simple_types::String50;
///
/// let name = String50::create("FullName", "Amina Alaoui").unwrap();
/// assert_eq!(name.value(), "Amina Alaoui");
///
/// assert!(String50::create("FullName", "").is_err());
/// assert!(String50::create("FullName", &"a".repeat(51)).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct String50(String);

const STRING50_MAX_LENGTH: usize = 50;

impl String50 {
    /// Creates a `String50`
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the value is empty or longer than 50 chars.
    pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
        constrained_type::create_string(field_name, String50, STRING50_MAX_LENGTH, value)
    }

    /// Returns the inner string
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// EmailAddress
// =============================================================================

/// Syntactically plausible email address
///
/// Requires a local part, an `@`, and a domain containing a dot. Whether the
/// mailbox exists is the job of the verification email, not of this type.
///
/// # Examples
///
/// ```
/// use storefront_checkout::simple_types::EmailAddress;
///
/// assert!(EmailAddress::create("Email", "client@boutique.ma").is_ok());
/// assert!(EmailAddress::create("Email", "client@boutique").is_err());
/// assert!(EmailAddress::create("Email", "client boutique.ma").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("Invalid email regex pattern")
});

const EMAIL_MAX_LENGTH: usize = 254;

impl EmailAddress {
    /// Creates an `EmailAddress`
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the value is empty, longer than 254 chars
    /// or not shaped like an email address.
    pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
        if value.chars().count() > EMAIL_MAX_LENGTH {
            return Err(ValidationError::new(
                field_name,
                &format!("Must not be more than {EMAIL_MAX_LENGTH} chars"),
            ));
        }
        constrained_type::create_like(field_name, EmailAddress, &EMAIL_PATTERN, value)
    }

    /// Returns the inner string
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// CityName
// =============================================================================

/// Delivery or account city, stored trimmed
///
/// # Examples
///
/// ```
/// use storefront_checkout::simple_types::CityName;
///
/// let city = CityName::create("City", "  Mohammédia ").unwrap();
/// assert_eq!(city.value(), "Mohammédia");
///
/// assert!(CityName::create("City", "   ").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CityName(String);

const CITY_NAME_MAX_LENGTH: usize = 100;

impl CityName {
    /// Creates a `CityName` from raw input, trimming surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if nothing is left after trimming or the
    /// trimmed value is longer than 100 chars.
    pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
        constrained_type::create_string(field_name, CityName, CITY_NAME_MAX_LENGTH, value.trim())
    }

    /// Like [`CityName::create`], but blank input yields `None`
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the trimmed value is longer than 100 chars.
    pub fn create_option(field_name: &str, value: &str) -> Result<Option<Self>, ValidationError> {
        constrained_type::create_string_option(
            field_name,
            CityName,
            CITY_NAME_MAX_LENGTH,
            value.trim(),
        )
    }

    /// Returns the inner string
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

// =============================================================================
// Password
// =============================================================================

/// Account password accepted at registration
///
/// 8 to 128 characters with at least one letter and one digit. The value is
/// never echoed back in error messages or `Debug` output.
///
/// # Examples
///
/// ```
/// use storefront_checkout::simple_types::Password;
///
/// assert!(Password::create("Password", "souk2024!").is_ok());
/// assert!(Password::create("Password", "short1").is_err());
/// assert!(Password::create("Password", "onlyletters").is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 8;
    const MAX_LENGTH: usize = 128;

    /// Creates a `Password`
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the length is outside `8..=128` or the
    /// value lacks a letter or a digit.
    pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
        let length = value.chars().count();
        if length < Self::MIN_LENGTH {
            Err(ValidationError::new(
                field_name,
                &format!("Must be at least {} chars", Self::MIN_LENGTH),
            ))
        } else if length > Self::MAX_LENGTH {
            Err(ValidationError::new(
                field_name,
                &format!("Must not be more than {} chars", Self::MAX_LENGTH),
            ))
        } else if !value.chars().any(char::is_alphabetic) {
            Err(ValidationError::new(field_name, "Must contain a letter"))
        } else if !value.chars().any(|character| character.is_ascii_digit()) {
            Err(ValidationError::new(field_name, "Must contain a digit"))
        } else {
            Ok(Self(value.to_string()))
        }
    }

    /// Returns the inner string
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Password(***)")
    }
}

// =============================================================================
// PhoneNumber
// =============================================================================

/// Contact phone number
///
/// Digits with optional leading `+` and `space`, `.` or `-` separators,
/// 9 to 20 characters overall.
///
/// # Examples
///
/// ```
/// use storefront_checkout::simple_types::PhoneNumber;
///
/// assert!(PhoneNumber::create("Phone", "+212 6 12 34 56 78").is_ok());
/// assert!(PhoneNumber::create("Phone", "0612345678").is_ok());
/// assert!(PhoneNumber::create("Phone", "call me").is_err());
/// assert_eq!(PhoneNumber::create_option("Phone", "").unwrap(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[0-9][0-9 .\-]{7,18}[0-9]$").expect("Invalid phone regex pattern")
});

impl PhoneNumber {
    /// Creates a `PhoneNumber`
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the value is empty or malformed.
    pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
        constrained_type::create_like(field_name, PhoneNumber, &PHONE_PATTERN, value)
    }

    /// Like [`PhoneNumber::create`], but empty input yields `None`
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a non-empty value is malformed.
    pub fn create_option(field_name: &str, value: &str) -> Result<Option<Self>, ValidationError> {
        if value.is_empty() {
            Ok(None)
        } else {
            Self::create(field_name, value).map(Some)
        }
    }

    /// Returns the inner string
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // EmailAddress
    // =========================================================================

    #[rstest]
    #[case("client@boutique.ma", true)]
    #[case("first.last+promo@mail.example.com", true)]
    #[case("", false)]
    #[case("client@", false)]
    #[case("@boutique.ma", false)]
    #[case("client@boutique", false)]
    #[case("cli ent@boutique.ma", false)]
    #[case("a@b@c.ma", false)]
    fn test_email_address(#[case] value: &str, #[case] accepted: bool) {
        assert_eq!(EmailAddress::create("Email", value).is_ok(), accepted);
    }

    #[rstest]
    fn test_email_address_too_long() {
        let value = format!("{}@boutique.ma", "a".repeat(250));

        let error = EmailAddress::create("Email", &value).unwrap_err();

        assert_eq!(error.message, "Must not be more than 254 chars");
    }

    // =========================================================================
    // CityName
    // =========================================================================

    #[rstest]
    fn test_city_name_trims() {
        let city = CityName::create("City", "\tCasablanca  ").unwrap();

        assert_eq!(city.value(), "Casablanca");
        assert_eq!(city.to_string(), "Casablanca");
    }

    #[rstest]
    #[case("", None)]
    #[case("   ", None)]
    #[case(" Rabat ", Some("Rabat"))]
    fn test_city_name_create_option(#[case] value: &str, #[case] expected: Option<&str>) {
        let city = CityName::create_option("City", value).unwrap();

        assert_eq!(city.as_ref().map(CityName::value), expected);
    }

    // =========================================================================
    // Password
    // =========================================================================

    #[rstest]
    #[case("abc1234", "Must be at least 8 chars")]
    #[case("abcdefgh", "Must contain a digit")]
    #[case("12345678", "Must contain a letter")]
    fn test_password_rejections(#[case] value: &str, #[case] message: &str) {
        let error = Password::create("Password", value).unwrap_err();

        assert_eq!(error.message, message);
        assert!(!error.to_string().contains(value));
    }

    #[rstest]
    fn test_password_too_long() {
        let value = format!("a1{}", "x".repeat(127));

        assert!(Password::create("Password", &value).is_err());
    }

    #[rstest]
    fn test_password_debug_is_redacted() {
        let password = Password::create("Password", "secret123").unwrap();

        assert_eq!(format!("{password:?}"), "Password(***)");
    }

    // =========================================================================
    // PhoneNumber
    // =========================================================================

    #[rstest]
    #[case("+212612345678", true)]
    #[case("05 22 12 34 56", true)]
    #[case("06.12.34.56.78", true)]
    #[case("1234", false)]
    #[case("+212 6 12 34 56 78 90 12 34", false)]
    #[case("06-12-34-56-7a", false)]
    fn test_phone_number(#[case] value: &str, #[case] accepted: bool) {
        assert_eq!(PhoneNumber::create("Phone", value).is_ok(), accepted);
    }
}

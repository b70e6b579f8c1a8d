//! Registration validation schema
//!
//! Every field is checked independently and all failures are returned
//! together, so the form can highlight each bad field in one round trip.
//!
//! | Field | Rule |
//! |-------|------|
//! | `FullName` | trimmed, 1 to 50 chars |
//! | `Email` | trimmed, lower-cased, `local@domain.tld`, at most 254 chars |
//! | `Password` | 8 to 128 chars, a letter and a digit |
//! | `PasswordConfirmation` | equal to `Password` |
//! | `Phone` | optional, digits with `+`, space, `.` or `-` |
//! | `City` | optional, trimmed, at most 100 chars |

use super::unvalidated::UnvalidatedRegistration;
use super::validated::ValidatedRegistration;
use crate::simple_types::{
    CityName, EmailAddress, Password, PhoneNumber, String50, ValidationError,
};

const FULL_NAME_FIELD: &str = "FullName";
const EMAIL_FIELD: &str = "Email";
const PASSWORD_FIELD: &str = "Password";
const PASSWORD_CONFIRMATION_FIELD: &str = "PasswordConfirmation";
const PHONE_FIELD: &str = "Phone";
const CITY_FIELD: &str = "City";

/// Validates a sign-up form
///
/// # Errors
///
/// Returns every [`ValidationError`] found, in form order.
///
/// # Examples
///
/// ```
/// use storefront_checkout::registration::{UnvalidatedRegistration, validate_registration};
///
/// let form = UnvalidatedRegistration::new(
///     " Salma Idrissi ".to_string(),
///     "Salma@Example.MA".to_string(),
///     "medina2024".to_string(),
///     "medina2024".to_string(),
///     "0612345678".to_string(),
///     "Mohammédia".to_string(),
/// );
///
/// let registration = validate_registration(&form).unwrap();
/// assert_eq!(registration.full_name().value(), "Salma Idrissi");
/// assert_eq!(registration.email().value(), "salma@example.ma");
///
/// let broken = UnvalidatedRegistration::new(
///     String::new(),
///     "nope".to_string(),
///     "medina2024".to_string(),
///     "medina2025".to_string(),
///     String::new(),
///     String::new(),
/// );
/// let errors = validate_registration(&broken).unwrap_err();
/// let fields: Vec<&str> = errors.iter().map(|error| error.field_name.as_str()).collect();
/// assert_eq!(fields, vec!["FullName", "Email", "PasswordConfirmation"]);
/// ```
pub fn validate_registration(
    form: &UnvalidatedRegistration,
) -> Result<ValidatedRegistration, Vec<ValidationError>> {
    let full_name = to_full_name(form.full_name());
    let email = to_email(form.email());
    let password = Password::create(PASSWORD_FIELD, form.password());
    let confirmation = check_password_confirmation(form.password(), form.password_confirmation());
    let phone = PhoneNumber::create_option(PHONE_FIELD, form.phone().trim());
    let city = CityName::create_option(CITY_FIELD, form.city());

    match (full_name, email, password, confirmation, phone, city) {
        (Ok(full_name), Ok(email), Ok(password), Ok(()), Ok(phone), Ok(city)) => Ok(
            ValidatedRegistration::new(full_name, email, password, phone, city),
        ),
        (full_name, email, password, confirmation, phone, city) => Err([
            full_name.err(),
            email.err(),
            password.err(),
            confirmation.err(),
            phone.err(),
            city.err(),
        ]
        .into_iter()
        .flatten()
        .collect()),
    }
}

/// Trims and validates the full name
///
/// # Errors
///
/// Returns `ValidationError` if the trimmed name is empty or over 50 chars.
pub fn to_full_name(full_name: &str) -> Result<String50, ValidationError> {
    String50::create(FULL_NAME_FIELD, full_name.trim())
}

/// Trims, lower-cases and validates the email address
///
/// # Errors
///
/// Returns `ValidationError` if the normalized value is not an email address.
pub fn to_email(email: &str) -> Result<EmailAddress, ValidationError> {
    EmailAddress::create(EMAIL_FIELD, &email.trim().to_lowercase())
}

/// Checks that the confirmation repeats the password exactly
///
/// # Errors
///
/// Returns `ValidationError` on mismatch.
pub fn check_password_confirmation(
    password: &str,
    password_confirmation: &str,
) -> Result<(), ValidationError> {
    if password == password_confirmation {
        Ok(())
    } else {
        Err(ValidationError::new(
            PASSWORD_CONFIRMATION_FIELD,
            "Must match the password",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn form(
        full_name: &str,
        email: &str,
        password: &str,
        password_confirmation: &str,
        phone: &str,
        city: &str,
    ) -> UnvalidatedRegistration {
        UnvalidatedRegistration::new(
            full_name.to_string(),
            email.to_string(),
            password.to_string(),
            password_confirmation.to_string(),
            phone.to_string(),
            city.to_string(),
        )
    }

    fn valid_form() -> UnvalidatedRegistration {
        form(
            "Karim Tazi",
            "karim@example.ma",
            "atlas2024",
            "atlas2024",
            "+212 6 11 22 33 44",
            "Rabat",
        )
    }

    fn error_fields(errors: &[ValidationError]) -> Vec<&str> {
        errors.iter().map(|error| error.field_name.as_str()).collect()
    }

    #[rstest]
    fn test_valid_registration() {
        let registration = validate_registration(&valid_form()).unwrap();

        assert_eq!(registration.full_name().value(), "Karim Tazi");
        assert_eq!(registration.email().value(), "karim@example.ma");
        assert_eq!(registration.password().value(), "atlas2024");
        assert_eq!(
            registration.phone().map(PhoneNumber::value),
            Some("+212 6 11 22 33 44")
        );
        assert_eq!(registration.city().map(CityName::value), Some("Rabat"));
    }

    #[rstest]
    fn test_optional_fields_may_be_blank() {
        let registration = validate_registration(&form(
            "Karim Tazi",
            "karim@example.ma",
            "atlas2024",
            "atlas2024",
            "  ",
            "  ",
        ))
        .unwrap();

        assert!(registration.phone().is_none());
        assert!(registration.city().is_none());
    }

    #[rstest]
    fn test_email_is_normalized() {
        assert_eq!(
            to_email("  Karim@Example.MA ").unwrap().value(),
            "karim@example.ma"
        );
    }

    #[rstest]
    fn test_all_errors_are_accumulated() {
        let errors = validate_registration(&form(
            "   ",
            "karim-at-example",
            "short",
            "different",
            "phone?",
            &"x".repeat(101),
        ))
        .unwrap_err();

        assert_eq!(
            error_fields(&errors),
            vec![
                "FullName",
                "Email",
                "Password",
                "PasswordConfirmation",
                "Phone",
                "City"
            ]
        );
    }

    #[rstest]
    #[case("Karim", "atlas2024", "atlas2024", None)]
    #[case("Karim", "atlas2024", "Atlas2024", Some("PasswordConfirmation"))]
    #[case("Karim", "atlas", "atlas", Some("Password"))]
    #[case("", "atlas2024", "atlas2024", Some("FullName"))]
    fn test_single_field_failures(
        #[case] full_name: &str,
        #[case] password: &str,
        #[case] confirmation: &str,
        #[case] failing_field: Option<&str>,
    ) {
        let result = validate_registration(&form(
            full_name,
            "karim@example.ma",
            password,
            confirmation,
            "",
            "",
        ));

        match failing_field {
            None => assert!(result.is_ok()),
            Some(field) => assert_eq!(error_fields(&result.unwrap_err()), vec![field]),
        }
    }

    #[rstest]
    fn test_check_password_confirmation_message() {
        let error = check_password_confirmation("atlas2024", "atlas2023").unwrap_err();

        assert_eq!(error.to_string(), "PasswordConfirmation: Must match the password");
    }

    #[rstest]
    fn test_unvalidated_debug_hides_passwords() {
        let debug = format!("{:?}", valid_form());

        assert!(!debug.contains("atlas2024"));
        assert!(debug.contains("karim@example.ma"));
    }
}

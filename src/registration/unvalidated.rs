//! Raw registration form input
//!
//! Holds exactly what the sign-up form submitted. Nothing is checked here;
//! [`validate_registration`](super::validate_registration) does that.

/// Sign-up form as submitted
///
/// # Examples
///
/// ```
/// use storefront_checkout::registration::UnvalidatedRegistration;
///
/// let form = UnvalidatedRegistration::new(
///     "Youssef Benali".to_string(),
///     "youssef@example.ma".to_string(),
///     "atlas2024".to_string(),
///     "atlas2024".to_string(),
///     String::new(),
///     "Casablanca".to_string(),
/// );
/// assert_eq!(form.full_name(), "Youssef Benali");
/// assert_eq!(form.phone(), "");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct UnvalidatedRegistration {
    full_name: String,
    email: String,
    password: String,
    password_confirmation: String,
    phone: String,
    city: String,
}

impl UnvalidatedRegistration {
    /// Creates a new form value; `phone` and `city` may be empty
    #[must_use]
    pub const fn new(
        full_name: String,
        email: String,
        password: String,
        password_confirmation: String,
        phone: String,
        city: String,
    ) -> Self {
        Self {
            full_name,
            email,
            password,
            password_confirmation,
            phone,
            city,
        }
    }

    /// Submitted full name
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Submitted email address
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Submitted password
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Submitted password confirmation
    #[must_use]
    pub fn password_confirmation(&self) -> &str {
        &self.password_confirmation
    }

    /// Submitted phone number, empty if omitted
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Submitted city, empty if omitted
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }
}

impl std::fmt::Debug for UnvalidatedRegistration {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("UnvalidatedRegistration")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"***")
            .field("password_confirmation", &"***")
            .field("phone", &self.phone)
            .field("city", &self.city)
            .finish()
    }
}

//! Registration that passed every rule

use crate::simple_types::{CityName, EmailAddress, Password, PhoneNumber, String50};

/// Sign-up data ready to be persisted by the account store
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedRegistration {
    full_name: String50,
    email: EmailAddress,
    password: Password,
    phone: Option<PhoneNumber>,
    city: Option<CityName>,
}

impl ValidatedRegistration {
    /// Assembles a validated registration from already validated parts
    #[must_use]
    pub const fn new(
        full_name: String50,
        email: EmailAddress,
        password: Password,
        phone: Option<PhoneNumber>,
        city: Option<CityName>,
    ) -> Self {
        Self {
            full_name,
            email,
            password,
            phone,
            city,
        }
    }

    /// Customer full name, trimmed
    #[must_use]
    pub const fn full_name(&self) -> &String50 {
        &self.full_name
    }

    /// Login email, trimmed and lower-cased
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Password as entered
    #[must_use]
    pub const fn password(&self) -> &Password {
        &self.password
    }

    /// Optional contact phone
    #[must_use]
    pub const fn phone(&self) -> Option<&PhoneNumber> {
        self.phone.as_ref()
    }

    /// Optional default delivery city
    #[must_use]
    pub const fn city(&self) -> Option<&CityName> {
        self.city.as_ref()
    }
}

//! Account registration validation
//!
//! - [`UnvalidatedRegistration`] - raw sign-up form
//! - [`ValidatedRegistration`] - typed, checked registration
//! - [`validate_registration`] - the schema, accumulating every field error

mod unvalidated;
mod validated;
mod validation;

pub use unvalidated::UnvalidatedRegistration;
pub use validated::ValidatedRegistration;
pub use validation::{check_password_confirmation, to_email, to_full_name, validate_registration};

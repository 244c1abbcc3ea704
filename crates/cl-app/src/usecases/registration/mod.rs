//! Four-step citizen registration
//! 四步注册流程

mod validation;
mod wizard;

pub use validation::{build_profile, validate_step, FieldError};
pub use wizard::{RegistrationForm, RegistrationStep, RegistrationWizard};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("{} field(s) need attention: {}", .0.len(), join(.0))]
    Invalid(Vec<FieldError>),

    #[error("registration can only be submitted from the verification step (currently at {0})")]
    NotAtVerification(RegistrationStep),
}

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

use std::fmt;
use std::sync::Arc;

use tracing::{info, info_span, warn};

use crate::navigation::Route;
use crate::usecases::profile_store::ProfileStore;

use super::validation::{build_profile, validate_step};
use super::RegistrationError;

/// Raw form input exactly as typed or selected. Choice fields hold the
/// option value (`"male"`, `"bpl"`, `"higher-secondary"`, ...), empty when
/// nothing is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub pincode: String,
    pub district: String,
    pub income_group: String,
    pub caste: String,
    pub education: String,
    pub aadhaar: String,
    pub pan: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RegistrationStep {
    PersonalInfo,
    LocationIncome,
    EducationId,
    Verification,
}

impl RegistrationStep {
    pub const ALL: [RegistrationStep; 4] = [
        RegistrationStep::PersonalInfo,
        RegistrationStep::LocationIncome,
        RegistrationStep::EducationId,
        RegistrationStep::Verification,
    ];

    /// 1-based position shown in the progress bar.
    pub fn number(self) -> u8 {
        match self {
            RegistrationStep::PersonalInfo => 1,
            RegistrationStep::LocationIncome => 2,
            RegistrationStep::EducationId => 3,
            RegistrationStep::Verification => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            RegistrationStep::PersonalInfo => "Personal Info",
            RegistrationStep::LocationIncome => "Location & Income",
            RegistrationStep::EducationId => "Education & ID",
            RegistrationStep::Verification => "Verification",
        }
    }

    fn next(self) -> Self {
        match self {
            RegistrationStep::PersonalInfo => RegistrationStep::LocationIncome,
            RegistrationStep::LocationIncome => RegistrationStep::EducationId,
            RegistrationStep::EducationId | RegistrationStep::Verification => {
                RegistrationStep::Verification
            }
        }
    }

    fn prev(self) -> Self {
        match self {
            RegistrationStep::PersonalInfo | RegistrationStep::LocationIncome => {
                RegistrationStep::PersonalInfo
            }
            RegistrationStep::EducationId => RegistrationStep::LocationIncome,
            RegistrationStep::Verification => RegistrationStep::EducationId,
        }
    }
}

impl fmt::Display for RegistrationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} ({})", self.number(), self.title())
    }
}

/// Registration flow state.
///
/// ## Behavior / 行为
/// - `next` only advances when the current step's fields are valid
/// - `next`/`prev` clamp at the first and last step
/// - `submit` validates the whole form, saves the profile and returns the
///   route to show afterwards
///
/// Nothing is persisted before `submit`, so an abandoned wizard leaves no
/// partial profile behind.
pub struct RegistrationWizard {
    profiles: Arc<ProfileStore>,
    form: RegistrationForm,
    step: RegistrationStep,
}

impl RegistrationWizard {
    pub fn new(profiles: Arc<ProfileStore>) -> Self {
        Self {
            profiles,
            form: RegistrationForm::default(),
            step: RegistrationStep::PersonalInfo,
        }
    }

    pub fn step(&self) -> RegistrationStep {
        self.step
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RegistrationForm {
        &mut self.form
    }

    pub fn next(&mut self) -> Result<RegistrationStep, RegistrationError> {
        let errors = validate_step(&self.form, self.step);
        if !errors.is_empty() {
            return Err(RegistrationError::Invalid(errors));
        }
        self.step = self.step.next();
        Ok(self.step)
    }

    pub fn prev(&mut self) -> RegistrationStep {
        self.step = self.step.prev();
        self.step
    }

    pub fn submit(&mut self) -> Result<Route, RegistrationError> {
        let _span = info_span!("usecase.registration.submit").entered();

        if self.step != RegistrationStep::Verification {
            return Err(RegistrationError::NotAtVerification(self.step));
        }

        let profile = build_profile(&self.form).map_err(RegistrationError::Invalid)?;
        let district = profile.district.clone();

        if !self.profiles.save(profile) {
            warn!("Registration completed but could not be persisted");
        }
        info!(district = %district, "Citizen registered");

        Ok(Route::Schemes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::storage;

    fn wizard() -> RegistrationWizard {
        let (_, store) = storage();
        RegistrationWizard::new(Arc::new(ProfileStore::new(store)))
    }

    fn fill_personal(form: &mut RegistrationForm) {
        form.name = "Lakshmi".to_string();
        form.age = "41".to_string();
        form.gender = "female".to_string();
    }

    fn fill_location(form: &mut RegistrationForm) {
        form.pincode = "625001".to_string();
        form.district = "Madurai".to_string();
        form.income_group = "mig".to_string();
        form.caste = "st".to_string();
    }

    fn fill_education(form: &mut RegistrationForm) {
        form.education = "diploma".to_string();
        form.aadhaar = "111122223333".to_string();
    }

    #[test]
    fn test_next_blocks_on_invalid_step() {
        let mut w = wizard();

        let err = w.next().unwrap_err();

        assert!(matches!(err, RegistrationError::Invalid(ref e) if e.len() == 3));
        assert_eq!(w.step(), RegistrationStep::PersonalInfo);
    }

    #[test]
    fn test_navigation_clamps() {
        let mut w = wizard();
        assert_eq!(w.prev(), RegistrationStep::PersonalInfo);

        fill_personal(w.form_mut());
        fill_location(w.form_mut());
        fill_education(w.form_mut());
        w.next().unwrap();
        w.next().unwrap();
        assert_eq!(w.next().unwrap(), RegistrationStep::Verification);
        assert_eq!(w.next().unwrap(), RegistrationStep::Verification);
        assert_eq!(w.prev(), RegistrationStep::EducationId);
    }

    #[test]
    fn test_submit_requires_verification_step() {
        let mut w = wizard();
        fill_personal(w.form_mut());

        assert_eq!(
            w.submit(),
            Err(RegistrationError::NotAtVerification(RegistrationStep::PersonalInfo))
        );
    }

    #[test]
    fn test_submit_saves_profile_and_routes_to_schemes() {
        let (_, store) = storage();
        let profiles = Arc::new(ProfileStore::new(store));
        let mut w = RegistrationWizard::new(profiles.clone());

        fill_personal(w.form_mut());
        w.next().unwrap();
        fill_location(w.form_mut());
        w.next().unwrap();
        fill_education(w.form_mut());
        w.next().unwrap();

        assert_eq!(w.submit(), Ok(Route::Schemes));

        let saved = profiles.load().unwrap();
        assert_eq!(saved.name, "Lakshmi");
        assert_eq!(saved.age, 41);
        assert!(saved.is_registered);
    }

    #[test]
    fn test_nothing_saved_before_submit() {
        let (_, store) = storage();
        let profiles = Arc::new(ProfileStore::new(store));
        let mut w = RegistrationWizard::new(profiles.clone());

        fill_personal(w.form_mut());
        w.next().unwrap();

        assert_eq!(profiles.load(), None);
    }

    #[test]
    fn test_step_display() {
        assert_eq!(
            RegistrationStep::LocationIncome.to_string(),
            "step 2 (Location & Income)"
        );
    }
}

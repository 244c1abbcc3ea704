use std::str::FromStr;
use std::sync::OnceLock;

use cl_core::profile::{Caste, EducationLevel, Gender, IncomeGroup, Profile};
use regex::Regex;
use thiserror::Error;

use super::wizard::{RegistrationForm, RegistrationStep};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

const MIN_AGE: u8 = 1;
const MAX_AGE: u8 = 120;

fn pincode_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{6}$").expect("static regex"))
}

fn aadhaar_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{12}$").expect("static regex"))
}

fn pan_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("static regex"))
}

/// Parsed field values, collected while checking.
#[derive(Default)]
struct Checked {
    age: Option<u8>,
    gender: Option<Gender>,
    income_group: Option<IncomeGroup>,
    caste: Option<Caste>,
    education: Option<EducationLevel>,
    pan: Option<String>,
}

struct Checker<'a> {
    form: &'a RegistrationForm,
    errors: Vec<FieldError>,
    checked: Checked,
}

impl<'a> Checker<'a> {
    fn new(form: &'a RegistrationForm) -> Self {
        Self {
            form,
            errors: Vec::new(),
            checked: Checked::default(),
        }
    }

    fn required_choice<T: FromStr>(&mut self, field: &'static str, raw: &str) -> Option<T> {
        let raw = raw.trim();
        if raw.is_empty() {
            self.errors.push(FieldError::new(field, "please select an option"));
            return None;
        }
        match raw.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                self.errors
                    .push(FieldError::new(field, format!("{raw:?} is not a valid choice")));
                None
            }
        }
    }

    fn pattern(&mut self, field: &'static str, raw: &str, re: &Regex, message: &str) {
        if !re.is_match(raw.trim()) {
            self.errors.push(FieldError::new(field, message));
        }
    }

    fn personal_info(&mut self) {
        let form = self.form;
        if form.name.trim().is_empty() {
            self.errors.push(FieldError::new("name", "name is required"));
        }

        match form.age.trim().parse::<u8>() {
            Ok(age) if (MIN_AGE..=MAX_AGE).contains(&age) => self.checked.age = Some(age),
            _ => self.errors.push(FieldError::new(
                "age",
                format!("age must be a whole number from {MIN_AGE} to {MAX_AGE}"),
            )),
        }

        self.checked.gender = self.required_choice("gender", &form.gender);
    }

    fn location_income(&mut self) {
        let form = self.form;
        self.pattern("pincode", &form.pincode, pincode_re(), "pincode must be 6 digits");
        if form.district.trim().is_empty() {
            self.errors.push(FieldError::new("district", "district is required"));
        }
        self.checked.income_group = self.required_choice("incomeGroup", &form.income_group);

        // Caste is optional; an empty selection means "not stated".
        if !form.caste.trim().is_empty() {
            self.checked.caste = self.required_choice("caste", &form.caste);
        }
    }

    fn education_id(&mut self) {
        let form = self.form;
        self.checked.education = self.required_choice("education", &form.education);
        self.pattern("aadhaar", &form.aadhaar, aadhaar_re(), "Aadhaar must be 12 digits");

        let pan = form.pan.trim();
        if !pan.is_empty() {
            if pan_re().is_match(pan) {
                self.checked.pan = Some(pan.to_string());
            } else {
                self.errors.push(FieldError::new(
                    "pan",
                    "PAN must look like ABCDE1234F (uppercase)",
                ));
            }
        }
    }

    fn step(&mut self, step: RegistrationStep) {
        match step {
            RegistrationStep::PersonalInfo => self.personal_info(),
            RegistrationStep::LocationIncome => self.location_income(),
            RegistrationStep::EducationId => self.education_id(),
            RegistrationStep::Verification => {}
        }
    }
}

/// Field errors for the fields shown on `step`. Empty means the step is valid.
pub fn validate_step(form: &RegistrationForm, step: RegistrationStep) -> Vec<FieldError> {
    let mut checker = Checker::new(form);
    checker.step(step);
    checker.errors
}

/// Validate every field and build a registered [`Profile`].
pub fn build_profile(form: &RegistrationForm) -> Result<Profile, Vec<FieldError>> {
    let mut checker = Checker::new(form);
    for step in RegistrationStep::ALL {
        checker.step(step);
    }

    let Checker {
        errors, checked, ..
    } = checker;

    match checked {
        Checked {
            age: Some(age),
            gender: Some(gender),
            income_group: Some(income_group),
            education: Some(education),
            caste,
            pan,
        } if errors.is_empty() => Ok(Profile {
            name: form.name.trim().to_string(),
            age,
            gender,
            pincode: form.pincode.trim().to_string(),
            district: form.district.trim().to_string(),
            income_group,
            caste,
            education,
            aadhaar: form.aadhaar.trim().to_string(),
            pan,
            is_registered: true,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegistrationForm {
        RegistrationForm {
            name: "Arun Raj".to_string(),
            age: "22".to_string(),
            gender: "male".to_string(),
            pincode: "641001".to_string(),
            district: "Coimbatore".to_string(),
            income_group: "lmig".to_string(),
            caste: String::new(),
            education: "higher-secondary".to_string(),
            aadhaar: "987654321098".to_string(),
            pan: String::new(),
        }
    }

    fn fields(errors: &[FieldError]) -> Vec<&'static str> {
        errors.iter().map(|e| e.field).collect()
    }

    #[test]
    fn test_filled_form_builds_registered_profile() {
        let profile = build_profile(&filled()).unwrap();

        assert_eq!(profile.age, 22);
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.income_group, IncomeGroup::Lmig);
        assert_eq!(profile.education, EducationLevel::HigherSecondary);
        assert_eq!(profile.caste, None);
        assert_eq!(profile.pan, None);
        assert!(profile.is_registered);
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let errors = build_profile(&RegistrationForm::default()).unwrap_err();

        assert_eq!(
            fields(&errors),
            vec!["name", "age", "gender", "pincode", "district", "incomeGroup", "education", "aadhaar"]
        );
    }

    #[test]
    fn test_age_bounds() {
        for (age, ok) in [("0", false), ("1", true), ("120", true), ("121", false), ("abc", false)] {
            let form = RegistrationForm {
                age: age.to_string(),
                ..filled()
            };
            assert_eq!(
                validate_step(&form, RegistrationStep::PersonalInfo).is_empty(),
                ok,
                "age {age}"
            );
        }
    }

    #[test]
    fn test_pincode_and_aadhaar_need_exact_digit_count() {
        let form = RegistrationForm {
            pincode: "64100".to_string(),
            aadhaar: "9876 5432 1098".to_string(),
            ..filled()
        };

        assert_eq!(
            fields(&validate_step(&form, RegistrationStep::LocationIncome)),
            vec!["pincode"]
        );
        assert_eq!(
            fields(&validate_step(&form, RegistrationStep::EducationId)),
            vec!["aadhaar"]
        );
    }

    #[test]
    fn test_pan_is_optional_but_checked_when_given() {
        let good = RegistrationForm {
            pan: "ABCDE1234F".to_string(),
            ..filled()
        };
        assert_eq!(build_profile(&good).unwrap().pan.as_deref(), Some("ABCDE1234F"));

        let lowercase = RegistrationForm {
            pan: "abcde1234f".to_string(),
            ..filled()
        };
        assert_eq!(fields(&build_profile(&lowercase).unwrap_err()), vec!["pan"]);
    }

    #[test]
    fn test_optional_caste_must_still_be_known() {
        let sc = RegistrationForm {
            caste: "sc".to_string(),
            ..filled()
        };
        assert_eq!(build_profile(&sc).unwrap().caste, Some(Caste::Sc));

        let unknown = RegistrationForm {
            caste: "xyz".to_string(),
            ..filled()
        };
        assert_eq!(fields(&build_profile(&unknown).unwrap_err()), vec!["caste"]);
    }

    #[test]
    fn test_verification_step_has_no_fields() {
        assert!(validate_step(&RegistrationForm::default(), RegistrationStep::Verification).is_empty());
    }
}

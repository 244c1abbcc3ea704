use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Registered citizen record.
///
/// Field names serialize in camelCase so the persisted JSON keeps the shape
/// the portal has always written (`incomeGroup`, `isRegistered`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    /// 1..=120, enforced by the registration form.
    pub age: u8,
    pub gender: Gender,
    /// Six ASCII digits.
    pub pincode: String,
    pub district: String,
    pub income_group: IncomeGroup,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caste: Option<Caste>,
    pub education: EducationLevel,
    /// Twelve ASCII digits.
    pub aadhaar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pan: Option<String>,
    pub is_registered: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Household income bracket, as declared at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeGroup {
    /// Below poverty line
    Bpl,
    /// Lower middle income group
    Lmig,
    /// Middle income group
    Mig,
    /// Higher middle income group
    Hmig,
    /// High income group
    Hig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Caste {
    General,
    Sc,
    St,
    Obc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EducationLevel {
    NoFormal,
    Primary,
    Secondary,
    HigherSecondary,
    Diploma,
    Undergraduate,
    Postgraduate,
    Doctorate,
}

/// Raised when a form value does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! string_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($ty::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($ty::$variant),)+
                    other => Err(UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

string_enum!(Gender, "gender", {
    Male => "male",
    Female => "female",
    Other => "other",
});

string_enum!(IncomeGroup, "income group", {
    Bpl => "bpl",
    Lmig => "lmig",
    Mig => "mig",
    Hmig => "hmig",
    Hig => "hig",
});

string_enum!(Caste, "caste", {
    General => "general",
    Sc => "sc",
    St => "st",
    Obc => "obc",
});

string_enum!(EducationLevel, "education level", {
    NoFormal => "no-formal",
    Primary => "primary",
    Secondary => "secondary",
    HigherSecondary => "higher-secondary",
    Diploma => "diploma",
    Undergraduate => "undergraduate",
    Postgraduate => "postgraduate",
    Doctorate => "doctorate",
});

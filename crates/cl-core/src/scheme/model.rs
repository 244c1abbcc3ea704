use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::profile::{Caste, IncomeGroup, UnknownVariant};

/// Government benefit programme listed in the portal.
///
/// Schemes are reference data: built once at start-up and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scheme {
    pub id: String,
    pub name: String,
    pub description: String,
    /// A scheme is open to a citizen who satisfies ANY of these tags.
    pub eligibility: Vec<RequirementTag>,
    pub benefits: String,
    pub category: SchemeCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_deadline: Option<NaiveDate>,
    /// Display amount, e.g. `₹5,00,000`.
    pub estimated_benefit: String,
    #[serde(rename = "applicants")]
    pub applicant_count: u64,
}

impl Scheme {
    /// Rupee value of [`Scheme::estimated_benefit`], ignoring the currency
    /// sign and Indian digit grouping. `None` when the text has no digits.
    pub fn estimated_benefit_rupees(&self) -> Option<u64> {
        let digits: String = self
            .estimated_benefit
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        digits.parse().ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemeCategory {
    Agriculture,
    Healthcare,
    Education,
    Housing,
    Employment,
}

impl SchemeCategory {
    pub const ALL: &'static [SchemeCategory] = &[
        SchemeCategory::Agriculture,
        SchemeCategory::Healthcare,
        SchemeCategory::Education,
        SchemeCategory::Housing,
        SchemeCategory::Employment,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SchemeCategory::Agriculture => "Agriculture",
            SchemeCategory::Healthcare => "Healthcare",
            SchemeCategory::Education => "Education",
            SchemeCategory::Housing => "Housing",
            SchemeCategory::Employment => "Employment",
        }
    }
}

impl fmt::Display for SchemeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemeCategory {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SchemeCategory::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "scheme category",
                value: s.to_string(),
            })
    }
}

/// Category selector used by the scheme list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(SchemeCategory),
}

impl FromStr for CategoryFilter {
    type Err = UnknownVariant;

    /// `"all"` selects every category; anything else must name one exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

/// Symbolic eligibility criterion attached to a scheme.
///
/// Tags the engine has no rule for are kept verbatim as [`RequirementTag::Other`]
/// so the catalog can still display them; they never match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequirementTag {
    Income(IncomeGroup),
    Caste(Caste),
    /// Age 35 or below.
    Youth,
    /// Age 25 or below.
    Student,
    Other(String),
}

impl RequirementTag {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "youth" => RequirementTag::Youth,
            "student" => RequirementTag::Student,
            "sc" => RequirementTag::Caste(Caste::Sc),
            "st" => RequirementTag::Caste(Caste::St),
            "obc" => RequirementTag::Caste(Caste::Obc),
            other => match other.parse::<IncomeGroup>() {
                Ok(group) => RequirementTag::Income(group),
                Err(_) => RequirementTag::Other(other.to_string()),
            },
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RequirementTag::Income(group) => group.as_str(),
            RequirementTag::Caste(caste) => caste.as_str(),
            RequirementTag::Youth => "youth",
            RequirementTag::Student => "student",
            RequirementTag::Other(tag) => tag,
        }
    }
}

impl From<String> for RequirementTag {
    fn from(value: String) -> Self {
        RequirementTag::parse(&value)
    }
}

impl From<&str> for RequirementTag {
    fn from(value: &str) -> Self {
        RequirementTag::parse(value)
    }
}

impl From<RequirementTag> for String {
    fn from(value: RequirementTag) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for RequirementTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Display preferences persisted alongside the profile

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::profile::UnknownVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// Languages the counsel chat and speech input are offered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    #[default]
    En,
    Ta,
    Hi,
    Te,
    Kn,
    Ml,
}

impl LanguageCode {
    pub const ALL: &'static [LanguageCode] = &[
        LanguageCode::En,
        LanguageCode::Ta,
        LanguageCode::Hi,
        LanguageCode::Te,
        LanguageCode::Kn,
        LanguageCode::Ml,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Ta => "ta",
            LanguageCode::Hi => "hi",
            LanguageCode::Te => "te",
            LanguageCode::Kn => "kn",
            LanguageCode::Ml => "ml",
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageCode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "language code",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code_is_persisted_as_bare_code() {
        assert_eq!(serde_json::to_string(&LanguageCode::Ta).unwrap(), r#""ta""#);
        assert_eq!("ml".parse::<LanguageCode>(), Ok(LanguageCode::Ml));
        assert!("fr".parse::<LanguageCode>().is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(LanguageCode::default(), LanguageCode::En);
        assert_eq!(Theme::default(), Theme::System);
    }
}

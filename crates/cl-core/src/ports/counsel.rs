//! Legal counsel responder port
//!
//! The chat widget hands the citizen's question to whatever responder the
//! application was wired with. Speech input and read-aloud stay in the
//! presentation layer; only text crosses this port.

use crate::preferences::LanguageCode;

/// A single question put to the counsel responder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounselQuery<'a> {
    pub text: &'a str,
    pub language: LanguageCode,
}

pub trait CounselPort: Send + Sync {
    /// Produce the reply text for `query`.
    fn respond(&self, query: &CounselQuery<'_>) -> String;

    /// Opening message shown when the conversation is empty.
    fn greeting(&self) -> String;
}

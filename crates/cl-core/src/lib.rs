//! # cl-core
//!
//! Core domain models and business logic for CiviLink.
//!
//! This crate contains pure business logic without any infrastructure dependencies.
//! Storage backends, clocks and the counsel responder are reached through
//! [`ports`].

// Public module exports
pub mod chat;
pub mod education;
pub mod ports;
pub mod preferences;
pub mod profile;
pub mod scheme;
pub mod storage;

// Re-export commonly used types at the crate root
pub use chat::{ChatHistory, ChatMessage, ChatRole};
pub use education::EducationProgress;
pub use preferences::{LanguageCode, Theme};
pub use profile::{Caste, EducationLevel, Gender, IncomeGroup, Profile};
pub use scheme::{CategoryFilter, RequirementTag, Scheme, SchemeCategory};
pub use storage::{StorageAdapter, StorageChange, StorageKey, CURRENT_STORAGE_VERSION};

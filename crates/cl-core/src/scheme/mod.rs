//! Scheme catalog and eligibility engine

mod catalog;
mod eligibility;
mod model;
mod summary;

pub use catalog::{default_catalog, find_scheme};
pub use eligibility::{filter_catalog, is_eligible, STUDENT_MAX_AGE, YOUTH_MAX_AGE};
pub use model::{CategoryFilter, RequirementTag, Scheme, SchemeCategory};
pub use summary::SchemeSummary;

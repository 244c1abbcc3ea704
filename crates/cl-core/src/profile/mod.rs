//! Citizen profile domain models
//!
//! A [`Profile`] is either absent (the citizen has not registered yet) or a
//! complete record with `is_registered == true`. There is no persisted
//! partially-registered state: the registration wizard builds the whole
//! record before handing it to the profile store.

mod model;

pub use model::{Caste, EducationLevel, Gender, IncomeGroup, Profile, UnknownVariant};

#[cfg(test)]
pub(crate) use model::fixtures;

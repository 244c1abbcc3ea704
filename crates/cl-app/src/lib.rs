//! CiviLink Application Orchestration Layer
//!
//! This crate contains the portal's use cases and the [`AppContext`] that
//! owns them for the lifetime of a session.

pub mod context;
pub mod deps;
pub mod navigation;
pub mod usecases;

pub use context::AppContext;
pub use deps::AppDeps;
pub use navigation::Route;

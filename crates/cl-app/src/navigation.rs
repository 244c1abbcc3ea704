//! Navigation targets handed back to the presentation layer.
//!
//! Use cases never drive a router themselves; they return the [`Route`] the
//! caller should move to.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Register,
    Schemes,
}

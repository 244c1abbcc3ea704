//! Startup sequence run once per session, after wiring.

use chrono::{DateTime, Utc};
use cl_app::AppContext;
use cl_infra::storage::MigrationOutcome;
use cl_infra::StorageMigrator;
use tracing::{info, info_span};

/// What happened while starting the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupReport {
    pub migration: MigrationOutcome,
    /// Last visit recorded by the previous session, if any.
    pub previous_visit: Option<DateTime<Utc>>,
    pub this_visit: DateTime<Utc>,
    pub registered: bool,
}

/// Bring storage up to date, then stamp this visit.
pub fn run_startup(context: &AppContext, migrator: &StorageMigrator) -> StartupReport {
    let _span = info_span!("bootstrap.startup").entered();

    let migration = migrator.run(context.storage());
    let previous_visit = context.preferences().last_visit();
    let this_visit = context.preferences().touch_last_visit();
    let registered = context.profiles().is_registered();

    info!(
        ?migration,
        previous_visit = ?previous_visit,
        registered,
        "Session started"
    );

    StartupReport {
        migration,
        previous_visit,
        this_visit,
        registered,
    }
}

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use cl_core::ports::ClockPort;
use cl_core::profile::{Caste, EducationLevel, Gender, IncomeGroup, Profile};
use cl_core::storage::StorageAdapter;
use cl_infra::SharedMemoryStore;

pub fn storage() -> (SharedMemoryStore, StorageAdapter) {
    let shared = SharedMemoryStore::new();
    let adapter = StorageAdapter::new(Arc::new(shared.open_handle()));
    (shared, adapter)
}

/// Adapter over a store with no room left; every write fails.
pub fn full_storage() -> StorageAdapter {
    StorageAdapter::new(Arc::new(SharedMemoryStore::with_quota(0).open_handle()))
}

pub fn profile() -> Profile {
    Profile {
        name: "Meena Kumari".to_string(),
        age: 30,
        gender: Gender::Female,
        pincode: "600001".to_string(),
        district: "Chennai".to_string(),
        income_group: IncomeGroup::Bpl,
        caste: Some(Caste::Obc),
        education: EducationLevel::Undergraduate,
        aadhaar: "123412341234".to_string(),
        pan: None,
        is_registered: true,
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at(y: i32, m: u32, d: u32) -> Arc<Self> {
        Arc::new(Self(
            Utc.with_ymd_and_hms(y, m, d, 9, 30, 0)
                .single()
                .unwrap_or_else(Utc::now),
        ))
    }
}

impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

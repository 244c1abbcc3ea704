//! # Application Dependencies / 应用依赖
//!
//! Parameter grouping for [`AppContext`](crate::AppContext) construction.
//! Not a builder: no defaults, no hidden logic.

use std::sync::Arc;

use cl_core::ports::{ClockPort, CounselPort, KeyValueStorePort};

/// Application dependency grouping (non-Builder, just parameter grouping)
/// 应用依赖分组（非 Builder，仅参数打包）
pub struct AppDeps {
    // Storage dependencies / 存储依赖
    pub store: Arc<dyn KeyValueStorePort>,

    // Counsel dependencies / 法律咨询依赖
    pub counsel: Arc<dyn CounselPort>,

    // System dependencies / 系统依赖
    pub clock: Arc<dyn ClockPort>,
}

pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::DashboardConfig;

pub use adapters::{HttpReportSource, InMemoryPage};
pub use app::{render_dashboard, DashboardRun};
pub use crate::core::{
    compare_cell::CompareCellLoader,
    dashboard::{Dashboard, DashboardSummary},
    line_graph::LineGraphLoader,
};
pub use utils::error::{ReportError, Result};

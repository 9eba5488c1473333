pub mod chart;
pub mod compare_cell;
pub mod dashboard;
pub mod envelope;
pub mod line_graph;

pub use crate::domain::model::{ReportKey, ReportResponse, Widget, WidgetHandles, WidgetKind};
pub use crate::domain::ports::{ChartRenderer, ConfigProvider, DomSurface, RenderSurface, ReportSource};
pub use crate::domain::render::{RenderOp, RenderPlan};
pub use crate::utils::error::Result;

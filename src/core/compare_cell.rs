use crate::core::envelope::decode_report;
use crate::domain::model::{Change, CompareData, ReportKey, ReportResponse, WidgetHandles};
use crate::domain::ports::ReportSource;
use crate::domain::render::{RenderOp, RenderPlan, ERROR_TEXT_CLASS};
use crate::utils::error::Result;

pub const UP_ICON: &str = r#"<span class="glyphicon glyphicon-arrow-up"></span>"#;
pub const DOWN_ICON: &str = r#"<span class="glyphicon glyphicon-arrow-down"></span>"#;
pub const WARNING_ICON: &str = r#"<span class="glyphicon glyphicon-warning-sign"></span> &nbsp;&nbsp;"#;

pub const UP_CELL_CLASS: &str = "up-cell";
pub const DOWN_CELL_CLASS: &str = "down-cell";
pub const NEUTRAL_CELL_CLASS: &str = "gray-cell";

/// The trend class goes on the table cell two levels above the value element.
pub const CELL_ANCESTOR_LEVELS: usize = 2;

/// Fetches a single comparison value and writes it with a trend indicator.
pub struct CompareCellLoader<S: ReportSource> {
    source: S,
}

impl<S: ReportSource> CompareCellLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn fetch(&self, key: &ReportKey) -> Result<ReportResponse<CompareData>> {
        let body = self.source.fetch(key).await?;
        decode_report(key, &body)
    }

    pub async fn load(&self, key: &ReportKey, handles: &WidgetHandles) -> Result<RenderPlan> {
        let response = self.fetch(key).await?;
        Ok(plan(handles, response))
    }
}

/// Icon markup and cell class for a trend.
pub fn trend(change: Change) -> (&'static str, &'static str) {
    match change {
        Change::Decrease => (DOWN_ICON, DOWN_CELL_CLASS),
        Change::Increase => (UP_ICON, UP_CELL_CLASS),
        Change::None => ("", NEUTRAL_CELL_CLASS),
    }
}

/// Render instructions for one comparison response.
pub fn plan(handles: &WidgetHandles, response: ReportResponse<CompareData>) -> RenderPlan {
    let mut plan = RenderPlan::new();

    match response {
        ReportResponse::Success(data) => {
            let (icon, class) = trend(data.change);
            plan.push(RenderOp::AddAncestorClass {
                target: handles.mount.clone(),
                levels: CELL_ANCESTOR_LEVELS,
                class: class.to_string(),
            })
            .push(RenderOp::SetContent {
                target: handles.mount.clone(),
                html: format!("{}{}", data.data, icon),
            });
        }
        ReportResponse::Error(error) => {
            plan.push(RenderOp::AddClass {
                target: handles.error_info.clone(),
                class: ERROR_TEXT_CLASS.to_string(),
            })
            .push(RenderOp::SetContent {
                target: handles.error_info.clone(),
                html: format!("{}{}", WARNING_ICON, error.message),
            });
        }
    }

    plan
}

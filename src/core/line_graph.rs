use crate::core::chart::ChartSpec;
use crate::core::envelope::decode_report;
use crate::domain::model::{LineGraphData, ReportKey, ReportResponse, WidgetHandles};
use crate::domain::ports::ReportSource;
use crate::domain::render::{RenderOp, RenderPlan, ERROR_TEXT_CLASS};
use crate::utils::error::Result;

/// Fetches a time-series report and draws it as a line chart with its rolling average.
pub struct LineGraphLoader<S: ReportSource> {
    source: S,
}

impl<S: ReportSource> LineGraphLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn fetch(&self, key: &ReportKey) -> Result<ReportResponse<LineGraphData>> {
        let body = self.source.fetch(key).await?;
        decode_report(key, &body)
    }

    pub async fn load(&self, key: &ReportKey, handles: &WidgetHandles) -> Result<RenderPlan> {
        let response = self.fetch(key).await?;
        Ok(plan(handles, response))
    }
}

/// Render instructions for one line-graph response.
pub fn plan(handles: &WidgetHandles, response: ReportResponse<LineGraphData>) -> RenderPlan {
    let mut plan = RenderPlan::new();

    match response {
        ReportResponse::Success(data) => {
            if data.labels.len() != data.data.len() || data.data.len() != data.data_average.len()
            {
                tracing::debug!(
                    "Series lengths differ at {}: labels={}, data={}, average={}",
                    handles.mount,
                    data.labels.len(),
                    data.data.len(),
                    data.data_average.len()
                );
            }
            plan.push(RenderOp::DrawChart {
                mount: handles.mount.clone(),
                spec: ChartSpec::line_with_average(data),
            });
        }
        ReportResponse::Error(error) => {
            plan.push(RenderOp::SetContent {
                target: handles.error_info.clone(),
                html: error.message,
            })
            .push(RenderOp::AddClass {
                target: handles.error_info.clone(),
                class: ERROR_TEXT_CLASS.to_string(),
            });
        }
    }

    plan
}

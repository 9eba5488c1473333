use crate::adapters::{HttpReportSource, InMemoryPage};
use crate::core::dashboard::{Dashboard, DashboardSummary};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DashboardRun {
    pub page: InMemoryPage,
    pub summary: DashboardSummary,
}

/// Fetch every configured widget from the reporting API and render it into a fresh page.
pub async fn render_dashboard<C: ConfigProvider>(config: &C) -> Result<DashboardRun> {
    let widgets = config.widgets()?;
    let source = HttpReportSource::new(config.base_url())?;

    tracing::info!(
        "🚀 Loading {} widgets from {}",
        widgets.len(),
        source.base_url()
    );

    let dashboard = Dashboard::new(Arc::new(source))
        .report_transport_errors(config.report_transport_errors());

    let mut page = InMemoryPage::new();
    let summary = dashboard.run(&widgets, &mut page).await;

    Ok(DashboardRun { page, summary })
}

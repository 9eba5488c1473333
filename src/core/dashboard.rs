use crate::core::compare_cell::CompareCellLoader;
use crate::core::line_graph::LineGraphLoader;
use crate::domain::model::{Widget, WidgetKind};
use crate::domain::ports::{RenderSurface, ReportSource};
use crate::domain::render::RenderPlan;
use crate::utils::error::{ReportError, Result};
use serde::Serialize;
use std::sync::Arc;
use tokio::task::JoinSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub rendered: usize,
    pub transport_failures: usize,
    pub failed: usize,
}

impl DashboardSummary {
    pub fn total(&self) -> usize {
        self.rendered + self.transport_failures + self.failed
    }
}

/// Loads a set of widgets concurrently and applies their render plans to a surface.
///
/// Transport failures leave the widget untouched and are not reported unless
/// `report_transport_errors` is enabled. Any other failure is logged.
#[derive(Clone)]
pub struct Dashboard {
    source: Arc<dyn ReportSource>,
    report_transport_errors: bool,
}

impl Dashboard {
    pub fn new(source: Arc<dyn ReportSource>) -> Self {
        Self {
            source,
            report_transport_errors: false,
        }
    }

    pub fn report_transport_errors(mut self, enabled: bool) -> Self {
        self.report_transport_errors = enabled;
        self
    }

    pub async fn load_widget(&self, widget: &Widget) -> Result<RenderPlan> {
        load_widget(self.source.clone(), widget).await
    }

    /// Load one widget and apply it. Returns whether anything was rendered.
    pub async fn render_widget<P: RenderSurface + ?Sized>(
        &self,
        widget: &Widget,
        surface: &mut P,
    ) -> bool {
        let mut summary = DashboardSummary::default();
        let result = self.load_widget(widget).await;
        self.settle(widget, result, surface, &mut summary);
        summary.rendered == 1
    }

    pub async fn run<P: RenderSurface + ?Sized>(
        &self,
        widgets: &[Widget],
        surface: &mut P,
    ) -> DashboardSummary {
        let mut tasks = JoinSet::new();
        for widget in widgets.iter().cloned() {
            let source = self.source.clone();
            tasks.spawn(async move {
                let result = load_widget(source, &widget).await;
                (widget, result)
            });
        }

        let mut summary = DashboardSummary::default();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((widget, result)) => self.settle(&widget, result, surface, &mut summary),
                Err(e) => {
                    tracing::error!("❌ Widget task failed: {}", e);
                    summary.failed += 1;
                }
            }
        }

        tracing::info!(
            "📊 Dashboard loaded: {} rendered, {} unreachable, {} failed",
            summary.rendered,
            summary.transport_failures,
            summary.failed
        );
        summary
    }

    fn settle<P: RenderSurface + ?Sized>(
        &self,
        widget: &Widget,
        result: Result<RenderPlan>,
        surface: &mut P,
        summary: &mut DashboardSummary,
    ) {
        match result {
            Ok(plan) => {
                tracing::debug!(
                    "Applying {} render ops for {} widget {}",
                    plan.len(),
                    widget.kind,
                    widget.key
                );
                plan.apply(surface);
                summary.rendered += 1;
            }
            Err(e) if e.is_transport() => {
                if self.report_transport_errors {
                    tracing::warn!("⚠️ Report {} unreachable: {}", widget.key, e);
                }
                summary.transport_failures += 1;
            }
            Err(e) => {
                report_failure(widget, &e);
                summary.failed += 1;
            }
        }
    }
}

async fn load_widget(source: Arc<dyn ReportSource>, widget: &Widget) -> Result<RenderPlan> {
    match widget.kind {
        WidgetKind::Line => {
            LineGraphLoader::new(source)
                .load(&widget.key, &widget.handles)
                .await
        }
        WidgetKind::Compare => {
            CompareCellLoader::new(source)
                .load(&widget.key, &widget.handles)
                .await
        }
    }
}

fn report_failure(widget: &Widget, error: &ReportError) {
    tracing::error!(
        "❌ {} widget {} failed: {} (Category: {:?}, Severity: {:?})",
        widget.kind,
        widget.key,
        error,
        error.category(),
        error.severity()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::page::InMemoryPage;
    use crate::core::compare_cell::{UP_ICON, WARNING_ICON};
    use crate::domain::model::ReportKey;
    use crate::domain::render::ERROR_TEXT_CLASS;
    use async_trait::async_trait;
    use std::collections::HashMap;

    /// Serves canned bodies by path; unknown paths behave like an unreachable server.
    struct CannedSource {
        bodies: HashMap<String, String>,
    }

    impl CannedSource {
        fn new(entries: &[(&str, serde_json::Value)]) -> Arc<Self> {
            let bodies = entries
                .iter()
                .map(|(path, value)| {
                    // 模擬 API 的雙重 JSON 編碼
                    let body = serde_json::to_string(&value.to_string()).unwrap();
                    (path.to_string(), body)
                })
                .collect();
            Arc::new(Self { bodies })
        }
    }

    #[async_trait]
    impl ReportSource for CannedSource {
        async fn fetch(&self, key: &ReportKey) -> Result<String> {
            self.bodies
                .get(&key.path())
                .cloned()
                .ok_or_else(|| ReportError::HttpStatus {
                    status: 503,
                    url: key.path(),
                })
        }
    }

    fn widget(spec: &str) -> Widget {
        spec.parse().unwrap()
    }

    #[tokio::test]
    async fn test_run_renders_each_widget() {
        let source = CannedSource::new(&[
            (
                "/api/reports/signups/weekly",
                serde_json::json!({"status": "success", "data": {"data": "42%", "change": "increase"}}),
            ),
            (
                "/api/reports/revenue/daily",
                serde_json::json!({"status": "success", "data": {
                    "labels": ["a", "b"], "label": "Revenue", "data": [1.0, 2.0],
                    "label_average": "Avg", "data_average": [1.0, 1.5]
                }}),
            ),
        ]);

        let dashboard = Dashboard::new(source);
        let mut page = InMemoryPage::new();
        let summary = dashboard
            .run(
                &[widget("compare:signups/weekly"), widget("line:revenue/daily")],
                &mut page,
            )
            .await;

        assert_eq!(summary.rendered, 2);
        assert_eq!(
            page.content("signups_weekly"),
            Some(format!("42%{}", UP_ICON).as_str())
        );
        assert!(page.ancestor_has_class("signups_weekly", 2, "up-cell"));
        assert_eq!(page.chart("revenue_daily").unwrap().datasets.len(), 2);
    }

    #[tokio::test]
    async fn test_transport_failure_leaves_page_untouched() {
        let dashboard = Dashboard::new(CannedSource::new(&[]));
        let mut page = InMemoryPage::new();

        let summary = dashboard
            .run(&[widget("line:signups/weekly")], &mut page)
            .await;

        assert_eq!(summary.transport_failures, 1);
        assert_eq!(summary.failed, 0);
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_response_is_counted_as_failure() {
        let source = CannedSource::new(&[(
            "/api/reports/signups/weekly",
            serde_json::json!({"status": "success", "data": {"labels": ["a"]}}),
        )]);
        let dashboard = Dashboard::new(source);
        let mut page = InMemoryPage::new();

        let summary = dashboard
            .run(&[widget("line:signups/weekly")], &mut page)
            .await;

        assert_eq!(summary.failed, 1);
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_render_widget_is_idempotent() {
        let source = CannedSource::new(&[(
            "/api/reports/signups/weekly",
            serde_json::json!({"status": "error", "data": {"message": "no data"}}),
        )]);
        let dashboard = Dashboard::new(source);
        let compare = widget("compare:signups/weekly");

        let mut page = InMemoryPage::new();
        assert!(dashboard.render_widget(&compare, &mut page).await);
        let first = page.clone();
        assert!(dashboard.render_widget(&compare, &mut page).await);

        assert_eq!(
            page.element("signups_weekly_error_info"),
            first.element("signups_weekly_error_info")
        );
        assert_eq!(
            page.content("signups_weekly_error_info"),
            Some(format!("{}no data", WARNING_ICON).as_str())
        );
        assert!(page.has_class("signups_weekly_error_info", ERROR_TEXT_CLASS));
        assert!(page.element("signups_weekly").is_none());
    }
}

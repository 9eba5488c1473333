use crate::core::chart::ChartSpec;
use crate::domain::model::{ElementId, ReportKey, Widget};
use crate::utils::error::Result;
use async_trait::async_trait;

/// HTTP collaborator: returns the raw body of `GET /api/reports/{type}/{period}`.
#[async_trait]
pub trait ReportSource: Send + Sync {
    async fn fetch(&self, key: &ReportKey) -> Result<String>;
}

/// DOM collaborator.
pub trait DomSurface {
    fn set_content(&mut self, id: &ElementId, html: &str);
    fn add_class(&mut self, id: &ElementId, class: &str);
    /// `levels = 1` is the parent, `2` the grandparent.
    fn add_ancestor_class(&mut self, id: &ElementId, levels: usize, class: &str);
}

/// Charting collaborator. Rendering at a mount point replaces any chart already there.
pub trait ChartRenderer {
    fn render_chart(&mut self, mount: &ElementId, spec: &ChartSpec);
}

pub trait RenderSurface: DomSurface + ChartRenderer {}

impl<T: DomSurface + ChartRenderer> RenderSurface for T {}

#[async_trait]
impl<T: ReportSource + ?Sized> ReportSource for std::sync::Arc<T> {
    async fn fetch(&self, key: &ReportKey) -> Result<String> {
        (**self).fetch(key).await
    }
}

/// Settings a dashboard run needs, whichever front end supplied them.
pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn widgets(&self) -> Result<Vec<Widget>>;
    fn report_transport_errors(&self) -> bool;
}

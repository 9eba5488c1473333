use crate::core::chart::ChartSpec;
use crate::domain::model::ElementId;
use crate::domain::ports::{ChartRenderer, DomSurface};
use crate::utils::error::Result;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ElementState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub classes: BTreeSet<String>,
    /// Classes added to ancestors, keyed by how many levels up.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub ancestor_classes: BTreeMap<usize, BTreeSet<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartSpec>,
}

/// Records every DOM and chart update so the final page state can be inspected or printed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InMemoryPage {
    elements: BTreeMap<ElementId, ElementState>,
    #[serde(skip)]
    chart_renders: usize,
}

impl InMemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element(&self, id: &str) -> Option<&ElementState> {
        self.elements.get(&ElementId::new(id))
    }

    pub fn content(&self, id: &str) -> Option<&str> {
        self.element(id).and_then(|e| e.content.as_deref())
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.element(id)
            .map(|e| e.classes.contains(class))
            .unwrap_or(false)
    }

    pub fn ancestor_has_class(&self, id: &str, levels: usize, class: &str) -> bool {
        self.element(id)
            .and_then(|e| e.ancestor_classes.get(&levels))
            .map(|classes| classes.contains(class))
            .unwrap_or(false)
    }

    pub fn chart(&self, id: &str) -> Option<&ChartSpec> {
        self.element(id).and_then(|e| e.chart.as_ref())
    }

    /// Charts currently mounted.
    pub fn chart_count(&self) -> usize {
        self.elements.values().filter(|e| e.chart.is_some()).count()
    }

    /// Total render calls, including ones that replaced an earlier chart.
    pub fn chart_renders(&self) -> usize {
        self.chart_renders
    }

    /// Final page state as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn entry(&mut self, id: &ElementId) -> &mut ElementState {
        self.elements.entry(id.clone()).or_default()
    }
}

impl DomSurface for InMemoryPage {
    fn set_content(&mut self, id: &ElementId, html: &str) {
        self.entry(id).content = Some(html.to_string());
    }

    fn add_class(&mut self, id: &ElementId, class: &str) {
        self.entry(id).classes.insert(class.to_string());
    }

    fn add_ancestor_class(&mut self, id: &ElementId, levels: usize, class: &str) {
        self.entry(id)
            .ancestor_classes
            .entry(levels)
            .or_default()
            .insert(class.to_string());
    }
}

impl ChartRenderer for InMemoryPage {
    fn render_chart(&mut self, mount: &ElementId, spec: &ChartSpec) {
        self.chart_renders += 1;
        self.entry(mount).chart = Some(spec.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chart::{ChartKind, ChartSpec};

    #[test]
    fn test_records_dom_updates() {
        let mut page = InMemoryPage::new();
        let id = ElementId::new("signups_weekly");

        page.set_content(&id, "1");
        page.set_content(&id, "2");
        page.add_class(&id, "a");
        page.add_class(&id, "a");
        page.add_ancestor_class(&id, 2, "up-cell");

        assert_eq!(page.content("signups_weekly"), Some("2"));
        assert_eq!(page.element("signups_weekly").unwrap().classes.len(), 1);
        assert!(page.ancestor_has_class("signups_weekly", 2, "up-cell"));
        assert!(!page.ancestor_has_class("signups_weekly", 1, "up-cell"));
        assert!(!page.has_class("missing", "a"));

        let json: serde_json::Value =
            serde_json::from_str(&page.to_json_pretty().unwrap()).unwrap();
        assert_eq!(json["elements"]["signups_weekly"]["content"], "2");
        assert_eq!(
            json["elements"]["signups_weekly"]["ancestor_classes"]["2"][0],
            "up-cell"
        );
    }

    #[test]
    fn test_chart_replaces_previous() {
        let mut page = InMemoryPage::new();
        let mount = ElementId::new("signups_weekly");
        let spec = ChartSpec {
            kind: ChartKind::Line,
            labels: vec![],
            datasets: vec![],
        };

        page.render_chart(&mount, &spec);
        page.render_chart(&mount, &spec);

        assert_eq!(page.chart_count(), 1);
        assert_eq!(page.chart_renders(), 2);
    }
}

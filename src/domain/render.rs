use crate::core::chart::ChartSpec;
use crate::domain::model::ElementId;
use crate::domain::ports::RenderSurface;
use serde::Serialize;

/// Class marking an error panel.
pub const ERROR_TEXT_CLASS: &str = "small-error-text";

/// One DOM or chart update.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RenderOp {
    DrawChart { mount: ElementId, spec: ChartSpec },
    SetContent { target: ElementId, html: String },
    AddClass { target: ElementId, class: String },
    AddAncestorClass {
        target: ElementId,
        levels: usize,
        class: String,
    },
}

/// Ordered render instructions produced from a single report response.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RenderPlan {
    ops: Vec<RenderOp>,
}

impl RenderPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, op: RenderOp) -> &mut Self {
        self.ops.push(op);
        self
    }

    pub fn ops(&self) -> &[RenderOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn charts(&self) -> impl Iterator<Item = (&ElementId, &ChartSpec)> {
        self.ops.iter().filter_map(|op| match op {
            RenderOp::DrawChart { mount, spec } => Some((mount, spec)),
            _ => None,
        })
    }

    pub fn apply<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        for op in &self.ops {
            match op {
                RenderOp::DrawChart { mount, spec } => surface.render_chart(mount, spec),
                RenderOp::SetContent { target, html } => surface.set_content(target, html),
                RenderOp::AddClass { target, class } => surface.add_class(target, class),
                RenderOp::AddAncestorClass {
                    target,
                    levels,
                    class,
                } => surface.add_ancestor_class(target, *levels, class),
            }
        }
    }
}

impl IntoIterator for RenderPlan {
    type Item = RenderOp;
    type IntoIter = std::vec::IntoIter<RenderOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

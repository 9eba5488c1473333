//! Declarative line-chart configuration handed to the charting collaborator.
//!
//! Field names serialize in the camelCase form chart libraries expect.

use crate::domain::model::LineGraphData;
use serde::{Deserialize, Serialize};

pub const PRIMARY_COLOR: &str = "rgba(75,192,192,1)";
pub const PRIMARY_FILL_COLOR: &str = "rgba(75,192,192,0.1)";
pub const POINT_BACKGROUND_COLOR: &str = "#fff";
pub const POINT_HOVER_BORDER_COLOR: &str = "rgba(220,220,220,1)";
pub const AVERAGE_COLOR: &str = "rgba(192,192,75,1)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub fill: bool,
    #[serde(flatten)]
    pub style: DatasetStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    pub border_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_cap_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash_offset: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_border_width: Option<u32>,
    pub point_radius: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hit_radius: Option<u32>,
}

impl DatasetStyle {
    /// Filled teal area with visible points.
    pub fn primary() -> Self {
        Self {
            background_color: Some(PRIMARY_FILL_COLOR.to_string()),
            border_color: PRIMARY_COLOR.to_string(),
            border_cap_style: Some("butt".to_string()),
            border_dash: Some(Vec::new()),
            border_dash_offset: Some(0.0),
            point_border_color: Some(PRIMARY_COLOR.to_string()),
            point_background_color: Some(POINT_BACKGROUND_COLOR.to_string()),
            point_border_width: Some(1),
            point_hover_radius: Some(5),
            point_hover_background_color: Some(PRIMARY_COLOR.to_string()),
            point_hover_border_color: Some(POINT_HOVER_BORDER_COLOR.to_string()),
            point_hover_border_width: Some(2),
            point_radius: 5,
            point_hit_radius: Some(10),
        }
    }

    /// Plain line, no points.
    pub fn average() -> Self {
        Self {
            border_color: AVERAGE_COLOR.to_string(),
            point_radius: 0,
            ..Self::default()
        }
    }
}

impl ChartSpec {
    /// Actual values as a filled series plus the rolling average as a plain line.
    pub fn line_with_average(data: LineGraphData) -> Self {
        let LineGraphData {
            labels,
            label,
            data,
            label_average,
            data_average,
        } = data;

        Self {
            kind: ChartKind::Line,
            labels,
            datasets: vec![
                Dataset {
                    label,
                    data,
                    fill: true,
                    style: DatasetStyle::primary(),
                },
                Dataset {
                    label: label_average,
                    data: data_average,
                    fill: false,
                    style: DatasetStyle::average(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LineGraphData {
        LineGraphData {
            labels: vec!["Mon".into(), "Tue".into(), "Wed".into()],
            label: "Signups".into(),
            data: vec![3.0, 5.0, 4.0],
            label_average: "3 day average".into(),
            data_average: vec![3.0, 4.0, 4.0],
        }
    }

    #[test]
    fn test_line_with_average_datasets() {
        let spec = ChartSpec::line_with_average(sample());

        assert_eq!(spec.kind, ChartKind::Line);
        assert_eq!(spec.labels.len(), 3);
        assert_eq!(spec.datasets.len(), 2);

        let primary = &spec.datasets[0];
        assert!(primary.fill);
        assert_eq!(primary.label, "Signups");
        assert_eq!(primary.style.border_color, PRIMARY_COLOR);
        assert_eq!(primary.style.point_radius, 5);

        let average = &spec.datasets[1];
        assert!(!average.fill);
        assert_eq!(average.label, "3 day average");
        assert_eq!(average.style.border_color, AVERAGE_COLOR);
        assert_eq!(average.style.point_radius, 0);
    }

    #[test]
    fn test_serializes_chart_config_shape() {
        let value = serde_json::to_value(ChartSpec::line_with_average(sample())).unwrap();

        assert_eq!(value["type"], "line");
        assert_eq!(value["datasets"][0]["backgroundColor"], PRIMARY_FILL_COLOR);
        assert_eq!(value["datasets"][0]["borderCapStyle"], "butt");
        assert_eq!(value["datasets"][0]["pointHitRadius"], 10);
        assert_eq!(value["datasets"][1]["pointRadius"], 0);
        assert!(value["datasets"][1].get("backgroundColor").is_none());
    }
}

//! Chart domain — the line series handed to the renderer and its presentation options.

use crate::domain::conversion::HistoricalRate;
use serde::{Deserialize, Serialize};

/// A single point on the rate chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// x-axis label (the backend's date string).
    pub label: String,
    pub value: f64,
}

/// Ordered series drawn as one line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn new(points: Vec<ChartPoint>) -> Self {
        Self { points }
    }

    pub fn from_history(history: &[HistoricalRate]) -> Self {
        Self {
            points: history
                .iter()
                .map(|h| ChartPoint {
                    label: h.date.clone(),
                    value: h.rate,
                })
                .collect(),
        }
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|p| p.label.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    /// y-axis domain `(0, max)`, floored at zero even when every rate is
    /// negative. `None` for an empty series.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values()
            .fold(None, |max: Option<f64>, v| Some(max.map_or(v, |m| m.max(v))))
            .map(|max| (0.0, max))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// What happens to the chart shown on screen when a conversion fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartFailurePolicy {
    /// Keep the last successfully rendered series.
    #[default]
    Retain,
    /// Clear the chart and forget the last result.
    Clear,
}

/// Presentation options for the rate chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub dataset_label: String,
    pub x_title: String,
    pub y_title: String,
    pub fill: bool,
    /// CSS color of the line.
    pub border_color: String,
    pub border_width: f32,
    /// Bezier curve tension, 0 draws straight segments.
    pub tension: f32,
    pub point_radius: f32,
    pub show_legend: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            dataset_label: "7 Days History".to_string(),
            x_title: "Time".to_string(),
            y_title: "Rate".to_string(),
            fill: true,
            border_color: "#007bff".to_string(),
            border_width: 1.0,
            tension: 0.1,
            point_radius: 1.0,
            show_legend: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history() -> Vec<HistoricalRate> {
        [("2023-05-01", 0.84), ("2023-05-02", 0.91), ("2023-05-03", 0.86)]
            .iter()
            .map(|(date, rate)| HistoricalRate {
                date: date.to_string(),
                rate: *rate,
            })
            .collect()
    }

    #[test]
    fn test_from_history_keeps_order() {
        let series = ChartSeries::from_history(&history());
        assert_eq!(series.len(), 3);
        let labels: Vec<&str> = series.labels().collect();
        assert_eq!(labels, vec!["2023-05-01", "2023-05-02", "2023-05-03"]);
        assert_eq!(series.points()[1].value, 0.91);
    }

    #[test]
    fn test_value_range_starts_at_zero() {
        let series = ChartSeries::from_history(&history());
        assert_eq!(series.value_range(), Some((0.0, 0.91)));
        assert_eq!(ChartSeries::default().value_range(), None);
    }

    #[test]
    fn test_value_range_keeps_zero_floor_for_negative_rates() {
        let series = ChartSeries::from_history(&[
            HistoricalRate { date: "2024-01-01".into(), rate: -2.0 },
            HistoricalRate { date: "2024-01-02".into(), rate: -1.0 },
        ]);
        assert_eq!(series.value_range(), Some((0.0, -1.0)));
    }

    #[test]
    fn test_default_options() {
        let options = ChartOptions::default();
        assert_eq!(options.dataset_label, "7 Days History");
        assert_eq!(options.x_title, "Time");
        assert_eq!(options.y_title, "Rate");
        assert!(options.fill);
    }
}

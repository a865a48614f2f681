//! Nexus Score visualisations.

use std::f64::consts::PI;
use std::fmt::Write as _;

use serde::Deserialize;

use super::data::{ProgressBarProps, clamp_percent, progress_bar};
use super::format_number;
use crate::markup::{Markup, el};
use crate::render::{PropBag, TemplateSet};

/// Radar radius in SVG units.
pub const RADAR_RADIUS: f64 = 100.0;
const CENTER: f64 = 130.0;
const VIEWBOX: f64 = CENTER * 2.0;

/// One scored category.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScoreCategory {
    pub label: String,
    pub score: f64,
    /// Maximum attainable score; zero means `score` is already a percentage.
    pub max: f64,
}

impl ScoreCategory {
    /// Share of the maximum, clamped to 0..=100.
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.max > 0.0 {
            clamp_percent(self.score / self.max * 100.0)
        } else {
            clamp_percent(self.score)
        }
    }
}

/// Score data fed to the charts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScoreData {
    pub total_score: f64,
    pub max_score: f64,
    /// Tier name, e.g. `Gold`.
    pub tier: String,
    pub categories: Vec<ScoreCategory>,
}

/// Props for `nexus-score-charts`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoreChartsProps {
    pub score_data: ScoreData,
}

/// Polygon vertex for category `index` of `count` at `percent`.
///
/// Angles start at the top and run clockwise; the radius scales with the
/// clamped percentage. Coordinates are relative to the chart centre.
#[must_use]
pub fn radar_point(index: usize, count: usize, percent: f64) -> (f64, f64) {
    if count == 0 {
        return (0.0, 0.0);
    }
    #[allow(clippy::cast_precision_loss)]
    let angle = 2.0 * PI * index as f64 / count as f64 - PI / 2.0;
    let radius = RADAR_RADIUS * clamp_percent(percent) / 100.0;
    (radius * angle.cos(), radius * angle.sin())
}

fn points_attr(count: usize, percent_at: impl Fn(usize) -> f64) -> String {
    let mut points = String::new();
    for i in 0..count {
        let (x, y) = radar_point(i, count, percent_at(i));
        if !points.is_empty() {
            points.push(' ');
        }
        let _ = write!(points, "{:.2},{:.2}", CENTER + x, CENTER + y);
    }
    points
}

/// The radar chart as inline SVG markup.
#[must_use]
pub fn radar_chart(categories: &[ScoreCategory]) -> Markup {
    let count = categories.len();
    if count < 3 {
        return Markup::empty();
    }

    let rings = [25.0, 50.0, 75.0, 100.0].map(|level| {
        el("polygon")
            .class("nexus-radar__ring")
            .attr("points", points_attr(count, |_| level))
    });

    let axes = (0..count).map(|i| {
        let (x, y) = radar_point(i, count, 100.0);
        el("line")
            .class("nexus-radar__axis")
            .attr("x1", format!("{CENTER:.2}"))
            .attr("y1", format!("{CENTER:.2}"))
            .attr("x2", format!("{:.2}", CENTER + x))
            .attr("y2", format!("{:.2}", CENTER + y))
    });

    let labels = categories.iter().enumerate().map(|(i, category)| {
        // Labels sit just outside the outer ring.
        let (x, y) = radar_point(i, count, 100.0);
        let (x, y) = (x * 1.15, y * 1.15);
        let anchor = if x.abs() < 1.0 {
            "middle"
        } else if x > 0.0 {
            "start"
        } else {
            "end"
        };
        el("text")
            .class("nexus-radar__label")
            .attr("x", format!("{:.2}", CENTER + x))
            .attr("y", format!("{:.2}", CENTER + y))
            .attr("text-anchor", anchor)
            .text(category.label.as_str())
    });

    let area = el("polygon")
        .class("nexus-radar__area")
        .attr("points", points_attr(count, |i| categories[i].percent()));

    el("svg")
        .class("nexus-radar")
        .attr("viewBox", format!("0 0 {VIEWBOX} {VIEWBOX}"))
        .attr("role", "img")
        .attr("aria-label", "Score by category")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .children(rings)
        .children(axes)
        .child(area)
        .children(labels)
        .into()
}

pub fn score_charts(props: &ScoreChartsProps) -> Markup {
    let data = &props.score_data;
    let summary = el("div")
        .class("nexus-score-charts__summary")
        .child(
            el("span")
                .class("nexus-score-charts__total")
                .text(format_number(data.total_score)),
        )
        .child((data.max_score > 0.0).then(|| {
            Markup::from(
                el("span")
                    .class("nexus-score-charts__max")
                    .text(format!("/ {}", format_number(data.max_score))),
            )
        }))
        .child((!data.tier.is_empty()).then(|| {
            Markup::from(el("span").class("nexus-score-charts__tier").text(data.tier.as_str()))
        }));

    let breakdown = el("div")
        .class("nexus-score-charts__breakdown")
        .children(data.categories.iter().map(|category| {
            progress_bar(&ProgressBarProps {
                percent: category.percent(),
                label: category.label.clone(),
                ..ProgressBarProps::default()
            })
        }));

    el("div")
        .class("nexus-score-charts")
        .child(summary)
        .child(el("div").class("nexus-score-charts__radar").child(radar_chart(&data.categories)))
        .child(breakdown)
        .into()
}

pub(super) fn register(set: &mut TemplateSet) {
    set.register("nexus-score-charts", |bag: &PropBag| score_charts(&bag.decode()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn first_axis_points_up() {
        assert!(close(radar_point(0, 4, 100.0), (0.0, -RADAR_RADIUS)));
        assert!(close(radar_point(1, 4, 100.0), (RADAR_RADIUS, 0.0)));
        assert!(close(radar_point(2, 4, 50.0), (0.0, RADAR_RADIUS / 2.0)));
    }

    #[test]
    fn radius_is_clamped() {
        assert!(close(radar_point(0, 3, 250.0), radar_point(0, 3, 100.0)));
        assert!(close(radar_point(1, 3, -10.0), (0.0, 0.0)));
    }

    #[test]
    fn category_percent_uses_max() {
        let category = ScoreCategory {
            label: "Engagement".into(),
            score: 150.0,
            max: 200.0,
        };
        assert_eq!(category.percent(), 75.0);
    }

    #[test]
    fn charts_render_radar_for_three_or_more_categories() {
        let props: ScoreChartsProps = PropBag::from(json!({
            "scoreData": {
                "total_score": 720,
                "max_score": 1000,
                "tier": "Gold",
                "categories": [
                    {"label": "Engagement", "score": 80},
                    {"label": "Quality", "score": 60},
                    {"label": "Volunteering", "score": 90},
                    {"label": "Activity", "score": 40}
                ]
            }
        }))
        .decode();
        let html = score_charts(&props).to_string();
        assert!(html.contains("<svg class=\"nexus-radar\""));
        assert!(html.contains("nexus-radar__area"));
        // First vertex: straight up at 80% of the radius.
        assert!(html.contains("points=\"130.00,50.00 "));
        assert_eq!(html.matches("role=\"progressbar\"").count(), 4);
        assert!(html.contains("/ 1000"));
    }

    #[test]
    fn too_few_categories_skip_the_radar() {
        let props = ScoreChartsProps {
            score_data: ScoreData {
                categories: vec![ScoreCategory::default(), ScoreCategory::default()],
                ..ScoreData::default()
            },
        };
        assert!(!score_charts(&props).to_string().contains("<svg"));
    }
}

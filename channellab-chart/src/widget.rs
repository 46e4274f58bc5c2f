//! Chart widget - cumulative strategy log return against date
//!
//! Displays:
//! - Cumulative return curve (primary, green)
//! - Zero baseline when it falls inside the y range
//! - Date labels on x, log-return labels on y

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget},
};

use crate::curve::{CumulativeCurve, LEGEND, X_LABEL, Y_LABEL};
use crate::theme::Theme;

pub struct CumulativeReturnChart<'a> {
    curve: &'a CumulativeCurve,
    theme: &'a Theme,
}

impl<'a> CumulativeReturnChart<'a> {
    pub fn new(curve: &'a CumulativeCurve, theme: &'a Theme) -> Self {
        Self { curve, theme }
    }
}

impl<'a> Widget for CumulativeReturnChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let data: Vec<(f64, f64)> = self
            .curve
            .timestamps()
            .iter()
            .zip(self.curve.values())
            .map(|(t, &v)| (t.and_utc().timestamp() as f64, v))
            .collect();

        let (x_min, x_max) = match (data.first(), data.last()) {
            (Some(first), Some(last)) if last.0 > first.0 => (first.0, last.0),
            (Some(first), _) => (first.0 - 1.0, first.0 + 1.0),
            _ => (0.0, 1.0),
        };

        let y_min = data.iter().map(|&(_, v)| v).fold(f64::INFINITY, f64::min);
        let y_max = data.iter().map(|&(_, v)| v).fold(f64::NEG_INFINITY, f64::max);
        let (y_lower, y_upper) = if y_min.is_finite() && y_max.is_finite() {
            let range = y_max - y_min;
            let pad = if range > 0.0 { range * 0.05 } else { 0.01 };
            (y_min - pad, y_max + pad)
        } else {
            (-0.01, 0.01)
        };

        // Zero baseline stands in for a horizontal grid line.
        let baseline = [(x_min, 0.0), (x_max, 0.0)];

        let mut datasets = vec![Dataset::default()
            .name(LEGEND)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(self.theme.line))
            .data(&data)];
        if y_lower < 0.0 && y_upper > 0.0 {
            datasets.push(
                Dataset::default()
                    .marker(symbols::Marker::Dot)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(self.theme.grid))
                    .data(&baseline),
            );
        }

        let x_labels = self.x_labels();
        let y_mid = (y_lower + y_upper) / 2.0;
        let y_labels = vec![
            Span::raw(format!("{y_lower:.3}")),
            Span::raw(format!("{y_mid:.3}")),
            Span::raw(format!("{y_upper:.3}")),
        ];

        let border_color = self
            .curve
            .final_value()
            .map_or(self.theme.accent, |v| self.theme.outcome_color(v));

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title(format!(" {} ", self.curve.title()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .style(Style::default().bg(self.theme.background)),
            )
            .x_axis(
                Axis::default()
                    .title(Span::styled(
                        X_LABEL,
                        Style::default().fg(self.theme.text_secondary),
                    ))
                    .style(Style::default().fg(self.theme.grid))
                    .bounds([x_min, x_max])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title(Span::styled(
                        Y_LABEL,
                        Style::default().fg(self.theme.text_secondary),
                    ))
                    .style(Style::default().fg(self.theme.grid))
                    .bounds([y_lower, y_upper])
                    .labels(y_labels),
            );

        chart.render(area, buf);
    }
}

impl CumulativeReturnChart<'_> {
    /// First, middle and last dates of the curve.
    fn x_labels(&self) -> Vec<Span<'static>> {
        let ts = self.curve.timestamps();
        if ts.is_empty() {
            return vec![Span::raw("")];
        }
        [ts[0], ts[ts.len() / 2], ts[ts.len() - 1]]
            .iter()
            .map(|t| Span::raw(t.format("%Y-%m-%d").to_string()))
            .collect()
    }
}

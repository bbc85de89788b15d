use crate::app::state::AppState;
use crate::data::stored::Emphasis;
use crate::render::mohr::{mohr_circle, CircleMark};
use crate::spectral::measure::{Measurement, Measurements};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine, Points};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

const FALLBACK_Y: [f64; 2] = [-2.0, 5.0];
const ANNOTATION_STEP: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartBounds {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

/// One unit of headroom around every plotted value.
pub fn chart_bounds(measurements: &Measurements) -> ChartBounds {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    let mut max_len = 0usize;

    for m in measurements.iter() {
        max_len = max_len.max(m.original.len());
        let values = m
            .original
            .samples()
            .iter()
            .chain(m.magnitudes.iter())
            .chain(m.heights.iter());
        for &v in values {
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }

    if max_len == 0 {
        return ChartBounds { x: [-1.0, 1.0], y: FALLBACK_Y };
    }
    ChartBounds {
        x: [-1.0, max_len as f64],
        y: [lo - 1.0, hi + 1.0],
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    if area.width < 4 || area.height < 4 {
        return;
    }
    let bounds = chart_bounds(&app.measurements);
    let title = format!(" SFT magnitude spectrum [{}] ", app.config.policy.as_label());

    let mut base = Style::default().fg(app.theme.color_subtext());
    if !app.config.transparent_background {
        base = base.bg(app.theme.color_base());
    }

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title(title).style(base))
        .marker(Marker::Braille)
        .x_bounds(bounds.x)
        .y_bounds(bounds.y)
        .paint(|ctx| {
            for (index, m) in app.measurements.iter().enumerate() {
                paint_measurement(ctx, app, index, m, &bounds);
                ctx.layer();
            }
        });
    f.render_widget(canvas, area);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Original,
    Magnitude,
    Height,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stroke {
    Line,
    Markers,
}

#[derive(Debug, Clone, PartialEq)]
struct Series {
    role: Role,
    stroke: Stroke,
    coords: Vec<(f64, f64)>,
}

/// Draw order for one measurement, bottom to top.
fn series(m: &Measurement) -> Vec<Series> {
    let original = points(m.original.samples());
    let heights = points(&m.heights);

    let mut out = vec![
        Series { role: Role::Original, stroke: Stroke::Line, coords: original.clone() },
        Series { role: Role::Original, stroke: Stroke::Markers, coords: original },
        Series { role: Role::Magnitude, stroke: Stroke::Line, coords: points(&m.magnitudes) },
    ];
    // only important series get a connected height curve
    if m.emphasis == Emphasis::Important {
        out.push(Series { role: Role::Height, stroke: Stroke::Line, coords: heights.clone() });
    }
    out.push(Series { role: Role::Height, stroke: Stroke::Markers, coords: heights });
    out
}

fn paint_measurement(
    ctx: &mut Context,
    app: &AppState,
    index: usize,
    m: &Measurement,
    bounds: &ChartBounds,
) {
    let pair = app.color_pair(index);

    if app.config.show_circles {
        let circle_color = app.theme.color_circle();
        for (i, (&h, &x)) in m.heights.iter().zip(m.original.samples()).enumerate() {
            let c = mohr_circle(i as f64, h, x);
            ctx.draw(&Circle {
                x: c.center.0,
                y: c.center.1,
                radius: c.radius,
                color: circle_color,
            });
            let [(x1, y1), (x2, y2)] = c.diameter;
            ctx.draw(&CanvasLine { x1, y1, x2, y2, color: circle_color });
            match c.mark {
                CircleMark::Spokes => ctx.draw(&Points { coords: &c.diameter, color: circle_color }),
                CircleMark::CenterDot => ctx.draw(&Points { coords: &[c.center], color: circle_color }),
            }
        }
    }

    for s in series(m) {
        let color = match s.role {
            Role::Original => app.theme.color(pair.neon),
            Role::Magnitude => app.theme.color(pair.dark),
            Role::Height => app.theme.color_peak(),
        };
        match s.stroke {
            Stroke::Line => polyline(ctx, &s.coords, color),
            Stroke::Markers => ctx.draw(&Points { coords: &s.coords, color }),
        }
    }

    if let Some(ts) = &m.timestamps {
        let y = bounds.y[0] + 0.5 + index as f64 * ANNOTATION_STEP;
        let last = m.original.len().saturating_sub(1) as f64;
        let style = Style::default().fg(app.theme.color_annotation());
        ctx.print(0.0, y, Span::styled(format!("▼ Start: {}", ts.start), style));
        ctx.print(last, y, Span::styled(format!("▼ End: {}", ts.end), style));
    }
}

fn points(values: &[f64]) -> Vec<(f64, f64)> {
    values.iter().enumerate().map(|(i, &v)| (i as f64, v)).collect()
}

fn polyline(ctx: &mut Context, pts: &[(f64, f64)], color: Color) {
    for w in pts.windows(2) {
        ctx.draw(&CanvasLine {
            x1: w[0].0,
            y1: w[0].1,
            x2: w[1].0,
            y2: w[1].1,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::signal::Signal;
    use crate::data::stored::{stored_signals, StoredSignal};
    use crate::spectral::measure::measure;
    use crate::spectral::policy::PolicyVariant;

    #[test]
    fn bounds_pad_the_data_by_one() {
        let set = vec![StoredSignal::new("ramp", Signal::new([0.0, 1.0, 2.0]).unwrap())];
        let out = measure(&set, PolicyVariant::Mirror.policy());
        let b = chart_bounds(&out);
        assert_eq!(b.x, [-1.0, 3.0]);

        let all: Vec<f64> = out
            .iter()
            .flat_map(|m| {
                m.original
                    .samples()
                    .iter()
                    .chain(&m.magnitudes)
                    .chain(&m.heights)
                    .copied()
                    .collect::<Vec<_>>()
            })
            .collect();
        let lo = all.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = all.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(b.y, [lo - 1.0, hi + 1.0]);
    }

    #[test]
    fn every_original_signal_is_connected() {
        let out = measure(&stored_signals().unwrap(), PolicyVariant::Mirror.policy());
        for m in out.iter() {
            let plan = series(m);
            for stroke in [Stroke::Line, Stroke::Markers] {
                assert!(plan.iter().any(|s| s.role == Role::Original && s.stroke == stroke));
            }
            let original = plan.iter().find(|s| s.role == Role::Original).unwrap();
            assert_eq!(original.coords.len(), m.original.len());
            assert_eq!(original.coords[1], (1.0, m.original.samples()[1]));
        }
    }

    #[test]
    fn height_curve_only_for_important_series() {
        let out = measure(&stored_signals().unwrap(), PolicyVariant::Mirror.policy());
        for m in out.iter() {
            let connected = series(m)
                .iter()
                .any(|s| s.role == Role::Height && s.stroke == Stroke::Line);
            assert_eq!(connected, m.emphasis == Emphasis::Important);
            assert_eq!(series(m).last().map(|s| s.stroke), Some(Stroke::Markers));
        }
    }

    #[test]
    fn empty_set_uses_fallback_bounds() {
        let b = chart_bounds(&Measurements::default());
        assert_eq!(b.y, FALLBACK_Y);
    }

    #[test]
    fn stored_bounds_cover_the_longest_signal() {
        let out = measure(&stored_signals().unwrap(), PolicyVariant::Expand.policy());
        let b = chart_bounds(&out);
        assert_eq!(b.x, [-1.0, 20.0]);
        assert!(b.y[0] <= -2.0);
        assert!(b.y[1] >= 6.0);
    }
}

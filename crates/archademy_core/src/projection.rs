//! Chart projection: pure scene construction for the step-curve chart
//!
//! Maps domain values (dollars, percent) onto a fixed logical pixel canvas
//! and describes everything the chart shows as plain data. [`render`] is a
//! pure function of the simulator input plus static configuration; painting
//! the returned [`Scene`] is the terminal layer's job. Pixel y grows
//! downward, matching the SVG-style surface the geometry is modeled on.

use crate::config::SimulatorConfig;
use crate::rules::{self, MemberTier};
use crate::series::{self, StepPoint};
use crate::simulator::SimulationInput;

/// Number of intervals between labeled ticks on the amount axis
const X_TICK_DIVISIONS: u32 = 4;
/// Spacing of labeled ticks on the percent axis
const Y_TICK_STEP: f64 = 5.0;
/// Vertical drop of amount tick labels below the x axis, pixels
const X_TICK_LABEL_DROP: f64 = 14.0;
/// Gap between percent tick labels and the y axis, pixels
const Y_TICK_LABEL_GAP: f64 = 6.0;

// ============================================================================
// Geometry
// ============================================================================

/// Logical canvas dimensions and margins, in pixels
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        ChartGeometry {
            width: 400.0,
            height: 200.0,
            margin_top: 20.0,
            margin_right: 30.0,
            margin_bottom: 40.0,
            margin_left: 50.0,
        }
    }
}

impl ChartGeometry {
    pub fn plot_left(&self) -> f64 {
        self.margin_left
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.margin_right
    }

    pub fn plot_top(&self) -> f64 {
        self.margin_top
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.margin_bottom
    }

    pub fn plot_width(&self) -> f64 {
        self.plot_right() - self.plot_left()
    }

    pub fn plot_height(&self) -> f64 {
        self.plot_bottom() - self.plot_top()
    }
}

/// Affine transforms from domain space onto the canvas.
///
/// Derived from the geometry and the axis domains; recomputed whenever
/// either changes (for the rule lab both are constant, so every frame sees
/// the same mapping).
#[derive(Debug, Clone)]
pub struct Viewport {
    geometry: ChartGeometry,
    amount_max: f64,
    percent_max: f64,
}

impl Viewport {
    pub fn new(geometry: ChartGeometry, amount_max: f64, percent_max: f64) -> Self {
        Viewport {
            geometry,
            amount_max,
            percent_max,
        }
    }

    /// Pixel x for a dollar amount
    pub fn x(&self, amount: f64) -> f64 {
        self.geometry.plot_left() + amount / self.amount_max * self.geometry.plot_width()
    }

    /// Pixel y for a discount percent (y grows downward)
    pub fn y(&self, percent: f64) -> f64 {
        self.geometry.plot_bottom() - percent / self.percent_max * self.geometry.plot_height()
    }

    pub fn geometry(&self) -> &ChartGeometry {
        &self.geometry
    }
}

// ============================================================================
// Scene description
// ============================================================================

/// Visual weight of a plotted curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Emphasized,
    Muted,
}

/// A straight segment in pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

/// A text label anchored at a pixel position.
///
/// Amount labels anchor at their center below the x axis; percent labels
/// anchor at their right edge beside the y axis.
#[derive(Debug, Clone, PartialEq)]
pub struct TickLabel {
    pub at: (f64, f64),
    pub text: String,
}

/// One tier's step curve as a pixel-space polyline, jump corners included
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePath {
    pub tier: MemberTier,
    pub emphasis: Emphasis,
    pub points: Vec<(f64, f64)>,
}

/// The live-input marker, in pixel and domain coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub at: (f64, f64),
    pub amount: u32,
    pub percent: u8,
}

/// Everything the chart shows, in logical pixel space
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub geometry: ChartGeometry,
    /// x axis then y axis
    pub axes: [Segment; 2],
    /// Horizontal grid lines, one per nonzero percent tick
    pub grid: Vec<Segment>,
    pub x_ticks: Vec<TickLabel>,
    pub y_ticks: Vec<TickLabel>,
    /// Standard tier first, premium second; paint muted curves first so the
    /// emphasized one stays on top
    pub curves: [CurvePath; 2],
    /// Vertical guide from the x axis up to the marker, drawn dashed
    pub guide: Segment,
    pub marker: Marker,
}

// ============================================================================
// Rendering
// ============================================================================

/// Build the complete chart scene for the given input.
///
/// Pure: identical arguments produce an identical scene, so redrawing is
/// idempotent. The selected tier's curve is emphasized and the other muted;
/// the marker and guide track the live input.
pub fn render(input: SimulationInput, config: &SimulatorConfig, geometry: &ChartGeometry) -> Scene {
    let amount_max = config.domain_max as f64;
    let viewport = Viewport::new(geometry.clone(), amount_max, config.percent_max);

    let origin = (viewport.x(0.0), viewport.y(0.0));
    let axes = [
        Segment {
            from: origin,
            to: (viewport.x(amount_max), viewport.y(0.0)),
        },
        Segment {
            from: origin,
            to: (viewport.x(0.0), viewport.y(config.percent_max)),
        },
    ];

    let x_tick_step = amount_max / X_TICK_DIVISIONS as f64;
    let x_ticks = (0..=X_TICK_DIVISIONS)
        .map(|i| {
            let amount = i as f64 * x_tick_step;
            TickLabel {
                at: (
                    viewport.x(amount),
                    geometry.plot_bottom() + X_TICK_LABEL_DROP,
                ),
                text: format!("${}", amount.round() as i64),
            }
        })
        .collect();

    let y_tick_count = (config.percent_max / Y_TICK_STEP).floor() as u32;
    let mut y_ticks = Vec::with_capacity(y_tick_count as usize + 1);
    let mut grid = Vec::with_capacity(y_tick_count as usize);
    for i in 0..=y_tick_count {
        let percent = i as f64 * Y_TICK_STEP;
        y_ticks.push(TickLabel {
            at: (
                geometry.plot_left() - Y_TICK_LABEL_GAP,
                viewport.y(percent),
            ),
            text: format!("{}%", percent.round() as i64),
        });
        // The zero line is the x axis itself
        if i > 0 {
            grid.push(Segment {
                from: (geometry.plot_left(), viewport.y(percent)),
                to: (geometry.plot_right(), viewport.y(percent)),
            });
        }
    }

    let selected = input.tier();
    let curves = MemberTier::ALL.map(|tier| {
        let samples = series::generate_steps(tier, amount_max, config.sample_step);
        CurvePath {
            tier,
            emphasis: if tier == selected {
                Emphasis::Emphasized
            } else {
                Emphasis::Muted
            },
            points: step_path(&samples, &viewport),
        }
    });

    let percent = rules::evaluate(input.amount() as f64, selected);
    let marker_at = (viewport.x(input.amount() as f64), viewport.y(percent as f64));
    let guide = Segment {
        from: (marker_at.0, viewport.y(0.0)),
        to: marker_at,
    };
    let marker = Marker {
        at: marker_at,
        amount: input.amount(),
        percent,
    };

    Scene {
        geometry: geometry.clone(),
        axes,
        grid,
        x_ticks,
        y_ticks,
        curves,
        guide,
        marker,
    }
}

/// Project a sampled series into a hold-last-value polyline.
///
/// Between samples the curve holds the previous value; at a threshold it
/// rises vertically. Collinear runs collapse to their endpoints, so the
/// path stays small no matter how fine the sampling.
fn step_path(samples: &[StepPoint], viewport: &Viewport) -> Vec<(f64, f64)> {
    let mut path: Vec<(f64, f64)> = Vec::new();
    let Some(first) = samples.first() else {
        return path;
    };

    path.push((viewport.x(first.x), viewport.y(first.y)));
    let mut held = first.y;
    for point in &samples[1..] {
        if (point.y - held).abs() > f64::EPSILON {
            path.push((viewport.x(point.x), viewport.y(held)));
            path.push((viewport.x(point.x), viewport.y(point.y)));
            held = point.y;
        }
    }

    if let Some(last) = samples.last() {
        let end = (viewport.x(last.x), viewport.y(held));
        if path.last() != Some(&end) {
            path.push(end);
        }
    }

    path
}

use std::fmt::Write as _;

use crate::domain::random::RandomSource;

pub const VIEW_WIDTH: f64 = 500.0;
pub const VIEW_HEIGHT: f64 = 300.0;
pub const POINT_COUNT: usize = 20;
pub const START_Y: f64 = 150.0;
pub const WALK_SPAN: f64 = 40.0;
pub const MIN_Y: f64 = 50.0;
pub const MAX_Y: f64 = 250.0;
pub const CHART_REFRESH_MS: u32 = 10_000;
pub const DRAW_DELAY_MS: u32 = 500;

/// Value Object - one sample of the decorative series in SVG user units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

impl ChartPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Random-walk series spanning the full view width, clamped to the plot band.
pub fn generate_points(rng: &mut dyn RandomSource) -> Vec<ChartPoint> {
    let mut y = START_Y;
    (0..POINT_COUNT)
        .map(|i| {
            let x = i as f64 / (POINT_COUNT - 1) as f64 * VIEW_WIDTH;
            y = (y + rng.centered(WALK_SPAN)).clamp(MIN_Y, MAX_Y);
            ChartPoint::new(x, y)
        })
        .collect()
}

/// Smooth curve through `points`: one cubic per segment with both control points
/// a third of the horizontal span in, each level with its own endpoint.
pub fn line_path(points: &[ChartPoint]) -> String {
    let Some(first) = points.first() else {
        return String::new();
    };

    let mut path = format!("M {} {}", first.x, first.y);
    for pair in points.windows(2) {
        let (prev, curr) = (pair[0], pair[1]);
        let third = (curr.x - prev.x) / 3.0;
        let _ = write!(
            path,
            " C {} {}, {} {}, {} {}",
            prev.x + third,
            prev.y,
            curr.x - third,
            curr.y,
            curr.x,
            curr.y
        );
    }
    path
}

/// The line path closed down to the bottom edge of the view box.
pub fn area_path(points: &[ChartPoint]) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };

    let mut path = line_path(points);
    let _ = write!(path, " L {} {} L {} {} Z", last.x, VIEW_HEIGHT, first.x, VIEW_HEIGHT);
    path
}

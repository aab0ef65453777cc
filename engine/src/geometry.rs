//! Random points for graphics code
//!
//! Scatter plots, particle spawns and jittered sample grids all need
//! "N points somewhere in this rectangle". Each point consumes two outputs,
//! x first, so a seed pins down the whole layout.

use serde::{Deserialize, Serialize};

use crate::rng::Mt64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle given by origin and size
///
/// A negative width or height extends from the origin in the negative
/// direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn min_x(&self) -> f64 {
        self.x.min(self.x + self.width)
    }

    pub fn max_x(&self) -> f64 {
        self.x.max(self.x + self.width)
    }

    pub fn min_y(&self) -> f64 {
        self.y.min(self.y + self.height)
    }

    pub fn max_y(&self) -> f64 {
        self.y.max(self.y + self.height)
    }
}

/// Uniform random point inside `rect`
pub fn random_point(rng: &mut Mt64, rect: &Rect) -> Point {
    let x = rect.x + rng.next_f64() * rect.width;
    let y = rect.y + rng.next_f64() * rect.height;
    Point { x, y }
}

/// `count` uniform random points inside `rect`
///
/// # Example
/// ```
/// use mt64_core_rs::geometry::{random_points, Rect};
/// use mt64_core_rs::Mt64;
///
/// let mut rng = Mt64::new(7);
/// let bounds = Rect::new(0.0, 0.0, 640.0, 480.0);
/// let points = random_points(&mut rng, 100, &bounds);
///
/// assert_eq!(points.len(), 100);
/// assert!(points.iter().all(|p| p.x >= 0.0 && p.x < 640.0));
/// ```
pub fn random_points(rng: &mut Mt64, count: usize, rect: &Rect) -> Vec<Point> {
    (0..count).map(|_| random_point(rng, rect)).collect()
}

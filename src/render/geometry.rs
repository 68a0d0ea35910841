//! Geometry kernel: angle math, arcs, and annular sectors.
//!
//! Angles are degrees, 0° along +x, increasing clockwise on screen.

use glam::dvec2;

use crate::errors::GeometryError;
use crate::types::{Angle, Length, Point};

use super::svg::fmt_num;

/// Degrees to radians.
#[inline]
pub fn to_radian(angle: Angle) -> f64 {
    angle.to_radians()
}

/// The point `radius` away from `origin` in direction `angle`.
pub fn point_on_circle(origin: Point, radius: Length, angle: Angle) -> Point {
    let theta = to_radian(angle);
    origin + dvec2(radius.raw() * theta.cos(), radius.raw() * theta.sin())
}

/// How an arc segment joins the path that precedes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcDrawMode {
    /// Start a new subpath at the arc's start point.
    Move,
    /// Draw a straight line from the current point to the arc's start.
    LineTo,
}

/// A single circular arc segment.
///
/// Both endpoints lie `radius` from the origin it was built around; the
/// origin itself is not stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub start: Point,
    pub stop: Point,
    pub radius: Length,
    pub start_angle: Angle,
    pub stop_angle: Angle,
    /// Set iff the angular span exceeds 180°.
    pub large_arc: bool,
    /// Set iff start angle < stop angle (clockwise on screen).
    pub sweep: bool,
}

impl Arc {
    /// SVG x-axis-rotation; circles never rotate.
    pub const X_AXIS_ROTATION: u8 = 0;

    /// SVG path fragment for this arc, e.g. `M 10,0 A 10,10 0 0 1 0,10 `.
    pub fn path(&self, mode: ArcDrawMode) -> String {
        let lead = match mode {
            ArcDrawMode::Move => 'M',
            ArcDrawMode::LineTo => 'L',
        };
        let r = fmt_num(self.radius.raw());
        format!(
            "{lead} {},{} A {r},{r} {} {} {} {},{} ",
            fmt_num(self.start.x),
            fmt_num(self.start.y),
            Self::X_AXIS_ROTATION,
            u8::from(self.large_arc),
            u8::from(self.sweep),
            fmt_num(self.stop.x),
            fmt_num(self.stop.y),
        )
    }
}

/// Closed annular sector: outer arc forward, inner arc backward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionalArc {
    pub outer: Arc,
    pub inner: Arc,
}

impl DimensionalArc {
    /// Closed SVG path data for the sector.
    pub fn path(&self) -> String {
        let mut d = self.outer.path(ArcDrawMode::Move);
        d.push_str(&self.inner.path(ArcDrawMode::LineTo));
        d.push('Z');
        d
    }

    /// Centre of the sector: mid radius, mid angle.
    pub fn centroid(&self, origin: Point) -> Point {
        let radius = self.outer.radius.midpoint(self.inner.radius);
        let angle = Angle((self.outer.start_angle.raw() + self.outer.stop_angle.raw()) / 2.0);
        point_on_circle(origin, radius, angle)
    }
}

/// Build an arc from `start_angle` to `stop_angle`.
///
/// Zero-length arcs, non-finite angles and non-positive radii are rejected.
pub fn build_arc(
    origin: Point,
    radius: Length,
    start_angle: Angle,
    stop_angle: Angle,
) -> Result<Arc, GeometryError> {
    let radius = Length::try_positive(radius.raw())
        .map_err(|_| GeometryError::InvalidRadius { value: radius.raw() })?;
    let finite = |angle: Angle| {
        Angle::try_new(angle.raw())
            .map_err(|_| GeometryError::NonFiniteAngle { angle: angle.raw() })
    };
    let start_angle = finite(start_angle)?;
    let stop_angle = finite(stop_angle)?;
    if start_angle == stop_angle {
        return Err(GeometryError::DegenerateArc {
            angle: start_angle.raw(),
        });
    }

    Ok(Arc {
        start: point_on_circle(origin, radius, start_angle),
        stop: point_on_circle(origin, radius, stop_angle),
        radius,
        start_angle,
        stop_angle,
        large_arc: start_angle.span_to(stop_angle) > 180.0,
        sweep: start_angle < stop_angle,
    })
}

/// Build an annular sector. The inner arc runs `stop -> start` so the
/// outline closes without crossing itself.
pub fn build_dimensional_arc(
    origin: Point,
    inner_radius: Length,
    outer_radius: Length,
    start_angle: Angle,
    stop_angle: Angle,
) -> Result<DimensionalArc, GeometryError> {
    if inner_radius >= outer_radius {
        return Err(GeometryError::InvertedRadii {
            inner: inner_radius.raw(),
            outer: outer_radius.raw(),
        });
    }

    let outer = build_arc(origin, outer_radius, start_angle, stop_angle)?;
    let inner = build_arc(origin, inner_radius, stop_angle, start_angle)?;
    Ok(DimensionalArc { outer, inner })
}

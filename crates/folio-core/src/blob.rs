//! Liquid-blob point field.
//!
//! A ring of control points anchored to a circle, each pulled toward a
//! drifting rest position by a damped spring and pushed away by the pointer.
//! The field is platform-free: callers feed it a shared clock in
//! milliseconds and an optional pointer position in logical view units.

use glam::DVec2;

use crate::constants::*;

/// One vertex of the blob outline.
#[derive(Clone, Copy, Debug)]
pub struct ControlPoint {
    pub pos: DVec2,
    /// Rest position on the anchor circle. Drift and springs reference this,
    /// so the point never wanders off even after heavy pointer abuse.
    pub origin: DVec2,
    pub vel: DVec2,
    /// Ring angle in radians, fixed at construction.
    pub angle: f64,
}

/// Tuning for one [`BlobField`]. [`Default`] matches the page's hero blob.
#[derive(Clone, Debug)]
pub struct BlobConfig {
    pub center: DVec2,
    pub radius: f64,
    pub point_count: usize,
    /// Fraction of velocity shed each frame, in `(0, 1)`.
    pub viscosity: f64,
    /// Spring pull toward the rest position per frame, in `(0, 1)`.
    pub elasticity: f64,
    pub influence_radius: f64,
    pub repulse_strength: f64,
    pub drift_amplitude: f64,
    /// Per-axis multipliers applied to the ring angle inside the drift
    /// oscillators. Unequal values keep neighbouring points out of sync.
    pub drift_freq: DVec2,
    pub phase_per_ms: f64,
    /// Logical size of the drawing surface. Pointer coordinates are
    /// rescaled into this space before they reach the field.
    pub view_extent: DVec2,
}

impl Default for BlobConfig {
    fn default() -> Self {
        Self {
            center: BLOB_CENTER,
            radius: BLOB_RADIUS,
            point_count: BLOB_POINT_COUNT,
            viscosity: BLOB_VISCOSITY,
            elasticity: BLOB_ELASTICITY,
            influence_radius: POINTER_INFLUENCE_RADIUS,
            repulse_strength: POINTER_REPULSE_STRENGTH,
            drift_amplitude: DRIFT_AMPLITUDE,
            drift_freq: DVec2::new(DRIFT_FREQ_X, DRIFT_FREQ_Y),
            phase_per_ms: PHASE_PER_MS,
            view_extent: VIEW_EXTENT,
        }
    }
}

pub struct BlobField {
    config: BlobConfig,
    points: Vec<ControlPoint>,
}

impl BlobField {
    pub fn new(config: BlobConfig) -> Self {
        let n = config.point_count;
        let mut points = Vec::with_capacity(n);
        for i in 0..n {
            let angle = i as f64 / n as f64 * std::f64::consts::TAU;
            let pos = config.center + DVec2::new(angle.cos(), angle.sin()) * config.radius;
            points.push(ControlPoint {
                pos,
                origin: pos,
                vel: DVec2::ZERO,
                angle,
            });
        }
        Self { config, points }
    }

    pub fn config(&self) -> &BlobConfig {
        &self.config
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Advance every point by one frame.
    ///
    /// `now_ms` is the shared clock; `pointer` is the pointer position in
    /// logical view units, or `None` while the pointer is idle or has never
    /// moved. One call integrates one Euler step, so the simulation speed
    /// follows the caller's frame rate just like the page it drives.
    pub fn tick(&mut self, now_ms: f64, pointer: Option<DVec2>) {
        let t = now_ms * self.config.phase_per_ms;
        for pt in &mut self.points {
            let drift = DVec2::new(
                (pt.angle * self.config.drift_freq.x + t).cos(),
                (pt.angle * self.config.drift_freq.y + t).sin(),
            ) * self.config.drift_amplitude;

            if let Some(p) = pointer {
                let away = pt.pos - p;
                let dist = away.length();
                if dist < self.config.influence_radius {
                    // Linear falloff: full strength on top of the pointer,
                    // nothing at the influence boundary.
                    let falloff = (self.config.influence_radius - dist) / self.config.influence_radius;
                    pt.vel += away.normalize_or_zero() * falloff * self.config.repulse_strength;
                }
            }

            let rest = pt.origin + drift;
            pt.vel += (rest - pt.pos) * self.config.elasticity;
            pt.vel *= 1.0 - self.config.viscosity;
            pt.pos += pt.vel;
        }
    }
}

/// Pointer state shared between the input wiring and the frame loop.
///
/// The pointer only repels while "fresh": each recorded move arms a deadline
/// [`POINTER_IDLE_MS`] ahead, and [`PointerField::sample`] returns `None`
/// once the clock passes it. Re-arming replaces the previous deadline.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerField {
    pos: DVec2,
    idle_deadline_ms: Option<f64>,
}

impl PointerField {
    pub fn record(&mut self, pos: DVec2, now_ms: f64) {
        self.pos = pos;
        self.idle_deadline_ms = Some(now_ms + POINTER_IDLE_MS);
    }

    pub fn active(&self, now_ms: f64) -> bool {
        matches!(self.idle_deadline_ms, Some(deadline) if now_ms < deadline)
    }

    /// Position to feed [`BlobField::tick`], or `None` while idle.
    pub fn sample(&self, now_ms: f64) -> Option<DVec2> {
        self.active(now_ms).then_some(self.pos)
    }
}

/// Rescale a CSS-pixel offset inside the rendered surface to logical view
/// units. A degenerate surface maps everything to the view centre.
pub fn view_point(css_offset: DVec2, rendered_size: DVec2, extent: DVec2) -> DVec2 {
    if rendered_size.x <= 0.0 || rendered_size.y <= 0.0 {
        return extent * 0.5;
    }
    DVec2::new(
        css_offset.x * extent.x / rendered_size.x,
        css_offset.y * extent.y / rendered_size.y,
    )
}

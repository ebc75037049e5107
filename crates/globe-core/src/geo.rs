//! Geographic points and the sphere math used to place them on the globe.
//!
//! The globe is a unit sphere with +Y through the north pole and the prime
//! meridian on +Z. Latitude and longitude are kept in degrees as `f64`; the
//! render-facing helpers return `glam::Vec3` in `f32`.

use crate::constants::{FALLBACK_LAT, FALLBACK_LNG, RANDOM_LAT_SPAN, RANDOM_LNG_SPAN};
use glam::{Quat, Vec3};
use rand::Rng;
use std::f32::consts::PI;

/// Location reported when the platform cannot provide one.
pub const FALLBACK_LOCATION: GeoPoint = GeoPoint {
    lat: FALLBACK_LAT,
    lng: FALLBACK_LNG,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Random point with latitude in [-80, 80] and longitude in [-180, 180].
    ///
    /// Latitude is uniform in degrees, not by surface area.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let lat = (rng.gen::<f64>() - 0.5) * RANDOM_LAT_SPAN;
        let lng = (rng.gen::<f64>() - 0.5) * RANDOM_LNG_SPAN;
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }

    /// Position on the unit sphere.
    pub fn to_unit_vec3(&self) -> Vec3 {
        let lat = (self.lat as f32).to_radians();
        let lng = (self.lng as f32).to_radians();
        Vec3::new(lat.cos() * lng.sin(), lat.sin(), lat.cos() * lng.cos())
    }

    /// Great-circle angle between two points in radians.
    pub fn angle_to(&self, other: &GeoPoint) -> f32 {
        self.to_unit_vec3()
            .dot(other.to_unit_vec3())
            .clamp(-1.0, 1.0)
            .acos()
    }
}

/// Spherical interpolation between two unit vectors.
///
/// Antipodal inputs rotate about an arbitrary axis perpendicular to `a`.
pub fn slerp_unit(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    let angle = a.dot(b).clamp(-1.0, 1.0).acos();
    if angle < 1e-5 {
        return a;
    }
    let mut axis = a.cross(b).normalize_or_zero();
    if axis == Vec3::ZERO {
        axis = a.any_orthonormal_vector();
    }
    Quat::from_axis_angle(axis, angle * t) * a
}

/// Point along the flight arc at progress `t` in [0, 1].
///
/// The arc follows the great circle and rises to `1 + lift` at its midpoint,
/// scaled by how far apart the endpoints are so short hops stay low.
pub fn arc_point(start: &GeoPoint, end: &GeoPoint, t: f32, lift: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    let dir = slerp_unit(start.to_unit_vec3(), end.to_unit_vec3(), t);
    let span = (start.angle_to(end) / PI).clamp(0.2, 1.0);
    dir * (1.0 + lift * span * (PI * t).sin())
}

/// Evenly spread `n` points over the unit sphere (golden-angle spiral).
pub fn fibonacci_sphere(n: usize) -> Vec<Vec3> {
    let golden = PI * (3.0 - 5.0_f32.sqrt());
    (0..n)
        .map(|i| {
            let y = 1.0 - 2.0 * (i as f32 + 0.5) / n as f32;
            let r = (1.0 - y * y).max(0.0).sqrt();
            let theta = golden * i as f32;
            Vec3::new(r * theta.sin(), y, r * theta.cos())
        })
        .collect()
}

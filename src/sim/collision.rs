//! Slice geometry: does the newest trail segment cut an object?
//!
//! Only the single latest trail segment is tested against each object per
//! tick. A very fast trail can tunnel past an object between two older
//! samples; that trade of completeness for per-tick cost is intentional.

use glam::Vec2;

/// True if the segment `a`-`b` touches the circle at `center` with `radius`.
///
/// A hit is either an endpoint inside the circle, or the perpendicular foot
/// of the center onto the segment (clamped to the segment) inside the
/// circle. Contact at exactly the radius counts as a hit; the same rule
/// applies to endpoints and the foot.
pub fn segment_hits_circle(a: Vec2, b: Vec2, center: Vec2, radius: f32) -> bool {
    if a.distance(center) <= radius || b.distance(center) <= radius {
        return true;
    }

    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        // Degenerate segment: the endpoint checks above already decided.
        return false;
    }

    let t = ((center - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    let foot = a + ab * t;
    foot.distance(center) <= radius
}

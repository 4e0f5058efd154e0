const N1: f64 = 7.5625;
const D1: f64 = 2.75;

/// Maps linear progress in `[0, 1]` to bounce-out progress: a deceleration
/// into three diminishing bounces before settling at 1. Input outside the
/// range is clamped first.
pub fn bounce_out(fraction: f64) -> f64 {
    let t = fraction.clamp(0.0, 1.0);
    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

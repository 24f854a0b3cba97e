//! Numeric helpers: extents, range mapping, tick generation and number formatting

use super::Point;

/// Find the minimum and maximum of a sequence of values
///
/// Returns `(0.0, 0.0)` for an empty sequence.
pub fn find_min_max(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }

    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
            (min.min(v), max.max(v))
        })
}

/// Map a value linearly from one range onto another
///
/// A degenerate source range (`from_min == from_max`) maps every value to
/// `to_min`.
pub fn map_range(value: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> f64 {
    if from_min == from_max {
        return to_min;
    }

    let ratio = (value - from_min) / (from_max - from_min);
    to_min + ratio * (to_max - to_min)
}

/// Upper bound on the tick count a caller may ask for
pub const MAX_TICK_TARGET: usize = 100;

/// Generate human-friendly tick values covering `[min, max]`
///
/// The step is a 1, 2 or 5 multiple of a power of ten chosen so that roughly
/// `target_count` ticks cover the range; the target is capped at
/// [`MAX_TICK_TARGET`]. The first tick is `min` rounded down
/// to a step multiple and the last is `max` rounded up.
pub fn calculate_ticks(min: f64, max: f64, target_count: usize) -> Vec<f64> {
    let range = max - min;
    if range == 0.0 || !range.is_finite() {
        return vec![min];
    }
    let (min, max) = if min > max { (max, min) } else { (min, max) };

    let segments = target_count.clamp(2, MAX_TICK_TARGET) - 1;
    let step = nice_step(range.abs() / segments as f64);
    if !step.is_finite() || step <= 0.0 {
        return vec![min];
    }

    let nice_min = (min / step).floor() * step;
    let nice_max = (max / step).ceil() * step;
    let count = ((nice_max - nice_min) / step).round() as usize;
    let decimals = step_decimals(step);

    (0..=count)
        .map(|i| round_to(nice_min + i as f64 * step, decimals))
        .collect()
}

/// Round a raw step up to the nearest 1/2/5/10 multiple of its power of ten
fn nice_step(raw_step: f64) -> f64 {
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;

    let nice = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Number of decimal places needed to represent multiples of `step` exactly
fn step_decimals(step: f64) -> i32 {
    (-step.log10().floor()).clamp(0.0, 15.0) as i32
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let rounded = (value * factor).round() / factor;
    // avoid emitting "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Format a number for tick and value labels
///
/// Values below 10 keep one decimal, values below 1000 none; larger values
/// are abbreviated with a `k`, `M` or `B` suffix and one decimal.
pub fn format_number(num: f64) -> String {
    let num = if num == 0.0 { 0.0 } else { num };
    let abs = num.abs();

    if abs < 1_000.0 {
        if abs < 10.0 {
            format!("{:.1}", num)
        } else {
            format!("{:.0}", num)
        }
    } else if abs < 1_000_000.0 {
        format!("{:.1}k", num / 1_000.0)
    } else if abs < 1_000_000_000.0 {
        format!("{:.1}M", num / 1_000_000.0)
    } else {
        format!("{:.1}B", num / 1_000_000_000.0)
    }
}

/// Point on a circle at `angle` radians (standard parametrization)
pub fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

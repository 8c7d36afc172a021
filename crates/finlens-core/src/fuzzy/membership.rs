//! Membership functions and hedges
//!
//! All functions take and return degrees in [0, 1]. Plateaus and peaks are
//! tested before the support edges, so shoulder shapes like
//! `trapezoidal(x, 0.0, 0.0, 0.7, 0.95)` are fully true at their outer edge.

/// Restrict a value to [0, 1]
pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Triangular membership peaking at `b`
///
/// Requires `a <= b <= c`.
pub fn triangular(x: f64, a: f64, b: f64, c: f64) -> f64 {
    if x == b {
        return 1.0;
    }
    if x <= a || x >= c {
        return 0.0;
    }
    if x < b {
        (x - a) / (b - a)
    } else {
        (c - x) / (c - b)
    }
}

/// Trapezoidal membership with a plateau on `[b, c]`
///
/// Requires `a <= b <= c <= d`.
pub fn trapezoidal(x: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    if b <= x && x <= c {
        return 1.0;
    }
    if x <= a || x >= d {
        return 0.0;
    }
    if x < b {
        (x - a) / (b - a)
    } else {
        (d - x) / (d - c)
    }
}

/// "Somewhat" hedge: lifts mid-range degrees toward 1
pub fn hedge_somewhat(m: f64) -> f64 {
    m.powf(0.8)
}

/// "Very" hedge: pushes mid-range degrees toward 0
pub fn hedge_very(m: f64) -> f64 {
    m * m
}

/// Fuzzy OR across rule outputs
pub(crate) fn any_of(rules: &[f64]) -> f64 {
    rules.iter().copied().fold(0.0, f64::max)
}

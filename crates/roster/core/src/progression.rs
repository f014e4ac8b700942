//! Level progression formulas.
//!
//! Level thresholds grow quadratically: reaching level `n` takes
//! `50 * n * (n + 1)` experience in total.

/// Level reached with `experience` points.
///
/// Both the float-to-integer conversion and the division truncate toward zero.
/// Negative experience makes the square root NaN, which converts to 0.
pub fn current_level(experience: i32) -> i32 {
    let root = (2500.0 + 200.0 * f64::from(experience)).sqrt();
    (root - 50.0) as i32 / 100
}

/// Experience still missing to leave `level`, given `experience` points.
///
/// Arithmetic wraps on overflow instead of panicking.
pub fn until_next_level(level: i32, experience: i32) -> i32 {
    50i32
        .wrapping_mul(level.wrapping_add(1))
        .wrapping_mul(level.wrapping_add(2))
        .wrapping_sub(experience)
}

//! USGA-style handicap conversion and per-hole stroke allocation.
//!
//! Allocation is fully deterministic: given a course handicap and the hole
//! difficulty rankings, the strokes received on each hole involve no
//! randomness at all.

use crate::constants::{ALLOCATION_FIRST_PASS, STANDARD_SLOPE};
use crate::numbers::round_f64_to_i32;

/// Convert a handicap index to a course handicap for the given slope rating.
///
/// `round(handicap_index * slope_rating / 113)`, the standard slope
/// conversion; 113 is the USGA neutral slope.
#[must_use]
pub fn course_handicap(handicap_index: f64, slope_rating: i32) -> i32 {
    round_f64_to_i32(handicap_index * f64::from(slope_rating) / STANDARD_SLOPE)
}

/// Strokes received on one hole, given the golfer's course handicap and the
/// hole's difficulty ranking (1 = hardest).
///
/// A hole receives one stroke when its ranking is within the course
/// handicap. Once every hole has one stroke (course handicap above 18), the
/// hardest holes receive a second. Never more than two.
#[must_use]
pub fn strokes_received(course_handicap: i32, hole_handicap: i32) -> i32 {
    if course_handicap > ALLOCATION_FIRST_PASS
        && hole_handicap <= course_handicap - ALLOCATION_FIRST_PASS
    {
        return 2;
    }
    if hole_handicap <= course_handicap { 1 } else { 0 }
}

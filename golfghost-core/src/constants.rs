//! Centralized tuning constants for GolfGhost scoring logic.
//!
//! These values define the deterministic math for the core simulation.
//! Keeping them together ensures that scoring can only be adjusted via
//! code changes reviewed in version control, rather than through external
//! JSON assets.

// Course geometry ----------------------------------------------------------
pub const HOLES_PER_ROUND: usize = 18;
pub(crate) const HOLES_PER_ROUND_F64: f64 = 18.0;

// Handicap system ----------------------------------------------------------
pub(crate) const STANDARD_SLOPE: f64 = 113.0;
pub(crate) const ALLOCATION_FIRST_PASS: i32 = 18;
pub(crate) const HANDICAP_INDEX_MIN: f64 = 0.0;
pub(crate) const HANDICAP_INDEX_MAX: f64 = 54.0;

// Score synthesis ----------------------------------------------------------
pub(crate) const ROUND_VARIANCE_STD: f64 = 1.2;
pub(crate) const HOLE_VARIANCE_STD: f64 = 1.1;
pub(crate) const HARD_HOLE_RANK_MAX: i32 = 6;
pub(crate) const EASY_HOLE_RANK_MIN: i32 = 13;
pub(crate) const HARD_HOLE_ADJUST: f64 = 0.3;
pub(crate) const EASY_HOLE_ADJUST: f64 = -0.2;
pub(crate) const MAX_STROKES_UNDER_PAR: i32 = 1;
pub(crate) const MAX_STROKES_OVER_PAR: i32 = 6;

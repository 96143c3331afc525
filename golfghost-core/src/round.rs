//! Ghost golfer round generation.
//!
//! A [`GhostGolfer`] binds a handicap index to one course's rating data and
//! produces an 18-hole scorecard. Stroke allocation is deterministic
//! (see [`crate::handicap`]); the gross scores combine the allocation-derived
//! expectation with seeded round-level and hole-level variance.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    EASY_HOLE_ADJUST, EASY_HOLE_RANK_MIN, HANDICAP_INDEX_MAX, HANDICAP_INDEX_MIN,
    HARD_HOLE_ADJUST, HARD_HOLE_RANK_MAX, HOLE_VARIANCE_STD, HOLES_PER_ROUND,
    HOLES_PER_ROUND_F64, MAX_STROKES_OVER_PAR, MAX_STROKES_UNDER_PAR, ROUND_VARIANCE_STD,
};
use crate::course::Course;
use crate::handicap::{course_handicap, strokes_received};
use crate::numbers::round_f64_to_i32;
use crate::rngs::{RoundRngs, gauss};

/// Errors raised when generation input is out of domain.
///
/// Rejected before any computation; a partial scorecard is never produced.
#[derive(Debug, Error, PartialEq)]
pub enum GenerateError {
    #[error("handicap index must be a finite number")]
    NonFiniteHandicap,
    #[error("handicap index must be between {min} and {max} (got {value})")]
    HandicapOutOfRange { min: f64, max: f64, value: f64 },
}

/// Score for a single hole, emitted in play order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleScore {
    pub hole: u8,
    pub par: i32,
    pub gross_score: i32,
    pub strokes_received: i32,
    pub net_score: i32,
}

/// A synthetic golfer bound to one course for a single simulation.
///
/// Ephemeral by design: construct, generate, discard. The course data is
/// borrowed read-only for the lifetime of the golfer.
#[derive(Debug, Clone)]
pub struct GhostGolfer<'a> {
    handicap_index: f64,
    course_handicap: i32,
    par_values: &'a [i32; HOLES_PER_ROUND],
    hole_handicaps: &'a [i32; HOLES_PER_ROUND],
}

impl<'a> GhostGolfer<'a> {
    /// Bind a handicap index to a validated course.
    ///
    /// # Errors
    ///
    /// Returns an error if the handicap index is not finite or lies outside
    /// the 0.0-54.0 GHIN domain.
    pub fn new(handicap_index: f64, course: &'a Course) -> Result<Self, GenerateError> {
        if !handicap_index.is_finite() {
            return Err(GenerateError::NonFiniteHandicap);
        }
        if !(HANDICAP_INDEX_MIN..=HANDICAP_INDEX_MAX).contains(&handicap_index) {
            return Err(GenerateError::HandicapOutOfRange {
                min: HANDICAP_INDEX_MIN,
                max: HANDICAP_INDEX_MAX,
                value: handicap_index,
            });
        }
        Ok(Self {
            handicap_index,
            course_handicap: course_handicap(handicap_index, course.slope_rating),
            par_values: &course.par_values,
            hole_handicaps: &course.hole_handicaps,
        })
    }

    /// The GHIN-style index this golfer was constructed with.
    #[must_use]
    pub const fn handicap_index(&self) -> f64 {
        self.handicap_index
    }

    /// Total strokes allocated across the round for this course.
    #[must_use]
    pub const fn course_handicap(&self) -> i32 {
        self.course_handicap
    }

    /// Generate one 18-hole scorecard in play order.
    ///
    /// One round-level offset is drawn per call and shared by all holes;
    /// each hole additionally draws its own offset. Gross scores are clamped
    /// to `[par - 1, par + 6]`; net scores are not separately clamped.
    #[must_use]
    pub fn generate_round(&self, rngs: &RoundRngs) -> Vec<HoleScore> {
        let strokes_per_hole = f64::from(self.course_handicap) / HOLES_PER_ROUND_F64;
        let round_offset = gauss(&mut *rngs.round(), 0.0, ROUND_VARIANCE_STD);

        let mut hole_rng = rngs.hole();
        let mut scores = Vec::with_capacity(HOLES_PER_ROUND);
        for (hole, (&par, &ranking)) in
            (1u8..).zip(self.par_values.iter().zip(self.hole_handicaps))
        {
            let received = strokes_received(self.course_handicap, ranking);
            let hole_offset = gauss(&mut *hole_rng, 0.0, HOLE_VARIANCE_STD);
            let adjustment = if ranking <= HARD_HOLE_RANK_MAX {
                HARD_HOLE_ADJUST
            } else if ranking >= EASY_HOLE_RANK_MIN {
                EASY_HOLE_ADJUST
            } else {
                0.0
            };

            let raw = f64::from(par)
                + strokes_per_hole
                + round_offset / HOLES_PER_ROUND_F64
                + hole_offset
                + adjustment;
            let gross_score = round_f64_to_i32(raw)
                .clamp(par - MAX_STROKES_UNDER_PAR, par + MAX_STROKES_OVER_PAR);

            scores.push(HoleScore {
                hole,
                par,
                gross_score,
                strokes_received: received,
                net_score: gross_score - received,
            });
        }
        scores
    }
}

/// Convenience wrapper: validate the index, bind the course, generate once.
///
/// # Errors
///
/// Returns an error if the handicap index is out of domain.
pub fn generate(
    handicap_index: f64,
    course: &Course,
    rngs: &RoundRngs,
) -> Result<Vec<HoleScore>, GenerateError> {
    GhostGolfer::new(handicap_index, course).map(|golfer| golfer.generate_round(rngs))
}

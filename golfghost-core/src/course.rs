//! Course records and catalog validation.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::HOLES_PER_ROUND;

/// Errors raised when a course record violates the catalog invariants.
///
/// Validation stops at the first violation; callers always receive a single
/// failure naming the offending field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },
    #[error("{field} must have exactly {expected} entries (got {actual})")]
    WrongLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Unvalidated course data as edited by a caller or read from storage.
///
/// Every field is optional so that incomplete records survive
/// deserialization and can be reported precisely by [`CourseInput::validate`].
/// Unknown fields are tolerated on read and dropped on the next save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CourseInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tee_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slope_rating: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub par_values: Option<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hole_handicaps: Option<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yardages: Option<Vec<i32>>,
}

impl CourseInput {
    /// Check the record against the catalog invariants without consuming it.
    ///
    /// # Errors
    ///
    /// Returns the first missing field or length violation encountered, in
    /// field order: `tee_name`, `course_rating`, `slope_rating`,
    /// `par_values`, `hole_handicaps`, `yardages`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        Course::from_input(self).map(|_| ())
    }
}

/// A validated course record.
///
/// The fixed-length arrays carry the 18-hole invariant in the type: a value
/// of this type can only be produced by [`Course::from_input`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub tee_name: String,
    pub course_rating: f64,
    pub slope_rating: i32,
    pub par_values: [i32; HOLES_PER_ROUND],
    /// Difficulty ranking per hole; lower value = harder hole = allocated
    /// strokes first. Permutation-like, but uniqueness is not enforced.
    pub hole_handicaps: [i32; HOLES_PER_ROUND],
    pub yardages: [i32; HOLES_PER_ROUND],
}

impl Course {
    /// Validate an input record and promote it to a catalog record.
    ///
    /// # Errors
    ///
    /// Returns the first missing field or length violation encountered.
    pub fn from_input(input: &CourseInput) -> Result<Self, ValidationError> {
        let tee_name = require(input.tee_name.as_ref(), "tee_name")?;
        let course_rating = require(input.course_rating.as_ref(), "course_rating")?;
        let slope_rating = require(input.slope_rating.as_ref(), "slope_rating")?;
        let par_values = require(input.par_values.as_deref(), "par_values")?;
        let hole_handicaps = require(input.hole_handicaps.as_deref(), "hole_handicaps")?;
        let yardages = require(input.yardages.as_deref(), "yardages")?;

        Ok(Self {
            tee_name: tee_name.clone(),
            course_rating: *course_rating,
            slope_rating: *slope_rating,
            par_values: per_hole("par_values", par_values)?,
            hole_handicaps: per_hole("hole_handicaps", hole_handicaps)?,
            yardages: per_hole("yardages", yardages)?,
        })
    }

    /// Demote the record back to the editable input shape.
    #[must_use]
    pub fn to_input(&self) -> CourseInput {
        CourseInput {
            tee_name: Some(self.tee_name.clone()),
            course_rating: Some(self.course_rating),
            slope_rating: Some(self.slope_rating),
            par_values: Some(self.par_values.to_vec()),
            hole_handicaps: Some(self.hole_handicaps.to_vec()),
            yardages: Some(self.yardages.to_vec()),
        }
    }

    /// Total par across the 18 holes.
    #[must_use]
    pub fn total_par(&self) -> i32 {
        self.par_values.iter().sum()
    }

    /// Total yardage across the 18 holes.
    #[must_use]
    pub fn total_yardage(&self) -> i32 {
        self.yardages.iter().sum()
    }

    /// Display label combining a catalog name with the tee set.
    #[must_use]
    pub fn display_label(&self, name: &str) -> String {
        format!("{name} ({})", self.tee_name)
    }
}

fn require<T>(value: Option<T>, field: &'static str) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingField { field })
}

fn per_hole(
    field: &'static str,
    values: &[i32],
) -> Result<[i32; HOLES_PER_ROUND], ValidationError> {
    values
        .try_into()
        .map_err(|_| ValidationError::WrongLength {
            field,
            expected: HOLES_PER_ROUND,
            actual: values.len(),
        })
}

//! GolfGhost Core
//!
//! Platform-agnostic scoring and course-catalog logic for GolfGhost.
//! This crate provides the ghost-golfer simulation and the course data
//! contract without UI or platform-specific dependencies: presentation
//! layers own rendering, aggregation, and seeding choices, and call in
//! through [`CourseStore`] and [`GhostGolfer`].

pub mod constants;
pub mod course;
pub mod handicap;
pub mod numbers;
pub mod presets;
pub mod rngs;
pub mod round;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use course::{Course, CourseInput, ValidationError};
pub use handicap::{course_handicap, strokes_received};
pub use presets::preset_catalog;
pub use rngs::{CountingRng, RoundRngs, gauss};
pub use round::{GenerateError, GhostGolfer, HoleScore, generate};
pub use storage::{CatalogStorage, JsonFileStore, RawCatalog, StorageError};
pub use store::{CourseStore, StoreError};

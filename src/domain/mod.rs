//! Domain layer containing the resolution engine.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (confidence, screens, validation errors)
//! - `extraction` - Pure text extractors for numbers, exercises, dates and muscle groups
//! - `intent` - Pattern registry, scoring and the deterministic router
//! - `detectors` - Screen-scoped rule chains
//! - `calculators` - Estimated one-rep max and percentage math

pub mod calculators;
pub mod detectors;
pub mod extraction;
pub mod foundation;
pub mod intent;

//! Inspection form normalization
//!
//! Turns loosely typed inspection form state into the transfer object the
//! records backend accepts:
//!
//! - [`date`]: dates in any accepted shape become `yyyy-mm-dd` or nothing
//! - [`prune`]: empty optional structure is removed recursively
//! - [`compose`]: applicant and office fragments are selected and assembled
//!
//! Every step is pure and infallible; malformed input degrades to omitted
//! fields rather than errors.

pub mod compose;
pub mod date;
pub mod extractors;
pub mod prune;

use inspection_types::{InspectionDto, RawFormValues};
use serde_json::{Map, Value};

pub use compose::{build_dto, compose, normalize_applicant_type};
pub use date::{canonicalize, canonicalize_str};
pub use prune::{prune, prune_object};

/// DtoComposer entry point
pub struct DtoComposer;

impl DtoComposer {
    pub fn new() -> Self {
        Self
    }

    /// Pruned payload ready for submission
    pub fn compose(&self, raw: &RawFormValues) -> Map<String, Value> {
        compose::compose(raw)
    }

    /// Typed object before pruning
    pub fn build(&self, raw: &RawFormValues) -> InspectionDto {
        compose::build_dto(raw)
    }
}

impl Default for DtoComposer {
    fn default() -> Self {
        Self::new()
    }
}

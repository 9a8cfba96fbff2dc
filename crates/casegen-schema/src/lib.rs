//! Canonical data model for the casegen pipeline.
//!
//! Defines parsed test cases and their drafts, the provider and format
//! enums, and the aggregated run record handed to renderers and exporters.
//! All other crates depend on these types.

pub mod case;
pub mod provider;
pub mod run;

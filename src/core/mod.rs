// Core algorithm exports
pub mod filters;
pub mod location;
pub mod matcher;
pub mod scoring;

pub use filters::Exclusions;
pub use location::{extract_region_and_postal, ParsedLocation};
pub use matcher::{EventMatchResult, GlobalMatchResult, Matcher};
pub use scoring::{calculate_match_score, shared_skills};

//! Core helpers shared by the store and the CLI.
//!
//! Input validation and deadline parsing live here so both layers apply the
//! same rules.

mod datetime;
pub mod validate;

pub use datetime::{parse_deadline, parse_deadline_from};
pub use validate::{
    normalize_description, validate_deadline, validate_description, validate_id, DEADLINE_YEARS,
    MAX_DESCRIPTION_LEN,
};

#![deny(unsafe_code)]

pub mod aggregate;
pub mod flag;
pub mod matcher;
pub mod reference;
pub mod value;

pub use aggregate::{Aggregate, aggregate_readings, format_match_rate};
pub use flag::{CRITICAL_HIGH_FACTOR, CRITICAL_LOW_FACTOR, calculate_flag};
pub use matcher::{NameMatch, match_reading_name, normalize_name};
pub use reference::{Reference, ReferenceSet};
pub use value::parse_numeric_value;

//! Input collection and validation
//!
//! Pure validators for dates, amounts, categories and descriptions, plus an
//! [`InputCollector`] that re-prompts until the answer validates.

pub mod collector;
pub mod validate;

pub use collector::InputCollector;
pub use validate::{parse_amount, parse_category, parse_date, parse_description};

//! Bad-character substring search.
//!
//! Text and pattern are trimmed and upper-cased, then a window the size of
//! the pattern slides across the text comparing right to left. On mismatch
//! the window advances by an amount looked up in a [`ShiftTable`] built from
//! the pattern alone.
//!
//! ```
//! let result = badchar::search("  Hello World  ", "world");
//! assert!(result.found());
//! assert_eq!(result.shift(), Some(6));
//! ```

pub mod batch;
pub mod config;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod prompt;
pub mod report;
pub mod shift_table;

pub use config::{SearchConfig, TablePolicy};
pub use engine::{search, MatchResult, SearchStats, Searcher};
pub use error::{BatchError, ConfigError, PromptError, SearchError};
pub use shift_table::{advance_for, ShiftTable};

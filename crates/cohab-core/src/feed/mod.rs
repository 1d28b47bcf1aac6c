//! Text feed of occupancy records.
//!
//! # Format
//!
//! ```text
//! house;people in;people out
//! Elm St;Alice,Bob;-
//! Elm St;Carol;Bob
//! ```
//!
//! - The first line is a header and is skipped unless
//!   [`FeedFormat::skip_header`] is off.
//! - Blank lines and lines starting with `#` are ignored.
//! - Every other line has exactly three fields. Names within a field are
//!   comma-separated and trimmed; an empty field means nobody.

pub mod parser;

pub use parser::{parse_feed, parse_record};

/// Separators and header handling for a feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedFormat {
    pub field_separator: char,
    pub name_separator: char,
    pub skip_header: bool,
}

impl Default for FeedFormat {
    fn default() -> Self {
        Self {
            field_separator: ';',
            name_separator: ',',
            skip_header: true,
        }
    }
}

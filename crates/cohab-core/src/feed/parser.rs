//! Line parser for occupancy feeds.
//!
//! Parsing only checks record shape. Whether a move-out makes sense is
//! decided later by the occupancy rules, which see the whole history.

use tracing::debug;

use super::FeedFormat;
use crate::error::CohabError;
use crate::model::OccupancyEvent;

const FIELD_COUNT: usize = 3;

/// Parse one feed line into an event.
///
/// `line_no` is 1-based and only used for diagnostics. Returns `Ok(None)` for
/// blank and comment lines.
///
/// # Errors
///
/// Returns [`CohabError::Parse`] if the line does not have exactly three
/// fields or the house field is empty.
pub fn parse_record(
    line_no: usize,
    line: &str,
    format: &FeedFormat,
) -> Result<Option<OccupancyEvent>, CohabError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = trimmed.split(format.field_separator).collect();
    if fields.len() != FIELD_COUNT {
        return Err(CohabError::Parse {
            line: line_no,
            reason: format!(
                "expected {FIELD_COUNT} fields separated by '{}', found {}",
                format.field_separator,
                fields.len()
            ),
        });
    }

    let house = fields[0].trim();
    if house.is_empty() {
        return Err(CohabError::Parse {
            line: line_no,
            reason: "empty house name".to_string(),
        });
    }

    let event = OccupancyEvent::new(
        house,
        split_names(fields[1], format.name_separator),
        split_names(fields[2], format.name_separator),
    )
    .at_line(line_no);
    Ok(Some(event))
}

/// Parse a whole feed.
///
/// # Errors
///
/// Stops at the first malformed record and returns its [`CohabError::Parse`].
pub fn parse_feed(input: &str, format: &FeedFormat) -> Result<Vec<OccupancyEvent>, CohabError> {
    let skip = usize::from(format.skip_header);
    let mut events = Vec::new();
    for (i, line) in input.lines().enumerate().skip(skip) {
        if let Some(event) = parse_record(i + 1, line, format)? {
            events.push(event);
        }
    }
    debug!(events = events.len(), "parsed feed");
    Ok(events)
}

fn split_names(field: &str, separator: char) -> Vec<&str> {
    field
        .split(separator)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}

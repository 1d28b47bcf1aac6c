use serde::{Deserialize, Serialize};

/// One record of the occupancy log.
///
/// Names are applied in order: all `incoming` first, then all `outgoing`.
/// Either list may contain the sentinel `"-"`, which is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyEvent {
    pub house: String,
    pub incoming: Vec<String>,
    pub outgoing: Vec<String>,
    /// 1-based source line, when the event came from a text feed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl OccupancyEvent {
    pub fn new<I, O, S, T>(house: impl Into<String>, incoming: I, outgoing: O) -> Self
    where
        I: IntoIterator<Item = S>,
        O: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            house: house.into(),
            incoming: incoming.into_iter().map(Into::into).collect(),
            outgoing: outgoing.into_iter().map(Into::into).collect(),
            line: None,
        }
    }

    /// Attach the source line this event was read from.
    #[must_use]
    pub const fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Event with only move-ins.
    pub fn move_in<I, S>(house: impl Into<String>, incoming: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(house, incoming, Vec::<String>::new())
    }
}

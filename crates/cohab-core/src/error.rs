use std::fmt;

/// Machine-readable error codes for scripts consuming CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigReadError,
    ConfigParseError,
    FeedParseError,
    InconsistentState,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ConfigReadError => "E1001",
            Self::ConfigParseError => "E1002",
            Self::FeedParseError => "E2001",
            Self::InconsistentState => "E2002",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ConfigReadError => "Config file unreadable",
            Self::ConfigParseError => "Config file parse error",
            Self::FeedParseError => "Malformed occupancy record",
            Self::InconsistentState => "Move-out of a non-occupant",
        }
    }

    /// Optional remediation hint that can be surfaced to operators.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::ConfigReadError => {
                Some("Check the --config path, or drop it to use ./cohab.toml or defaults.")
            }
            Self::ConfigParseError => Some("Fix syntax in the config file and retry."),
            Self::FeedParseError => {
                Some("Each record needs three fields: house;people in;people out.")
            }
            Self::InconsistentState => Some(
                "Check your input data: the person must move in to the house before moving out.",
            ),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.message())
    }
}

/// Errors raised while turning an occupancy log into a graph.
///
/// Every variant is fatal for the current build: the pipeline stops at the
/// offending record and no graph is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CohabError {
    /// A move-out named someone who is not a current occupant of the house.
    #[error("{}tried to remove {person}, who wasn't a member of {house}", line_prefix(.line))]
    InconsistentState {
        person: String,
        house: String,
        /// 1-based source line of the offending record, when known.
        line: Option<usize>,
    },

    /// A feed record could not be turned into an occupancy event.
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

impl CohabError {
    /// The stable code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InconsistentState { .. } => ErrorCode::InconsistentState,
            Self::Parse { .. } => ErrorCode::FeedParseError,
        }
    }
}

#[allow(clippy::ref_option)]
fn line_prefix(line: &Option<usize>) -> String {
    line.map_or_else(String::new, |n| format!("line {n}: "))
}

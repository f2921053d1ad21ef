//! Handler outcomes and the dispatcher's reply wrapper.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// What a handler produces: a plain message or a tabular result.
///
/// The dispatcher never inspects the payload, only the tag. Renderers and
/// structured-output consumers switch on the tag as well - a single-row
/// table is observably different from a message, so nothing downstream has
/// to sniff strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Outcome {
    /// A plain text message.
    Message(String),
    /// Zero or more rows destined for tabular rendering.
    Table(Grid),
}

impl Outcome {
    /// Creates a message outcome.
    pub fn message(text: impl Into<String>) -> Self {
        Outcome::Message(text.into())
    }

    /// Creates a tabular outcome.
    pub fn table(grid: Grid) -> Self {
        Outcome::Table(grid)
    }

    /// Returns the message text, if this is a message.
    pub fn as_message(&self) -> Option<&str> {
        match self {
            Outcome::Message(text) => Some(text),
            Outcome::Table(_) => None,
        }
    }

    /// Returns the grid, if this is a table.
    pub fn as_table(&self) -> Option<&Grid> {
        match self {
            Outcome::Message(_) => None,
            Outcome::Table(grid) => Some(grid),
        }
    }

    /// True for message outcomes.
    pub fn is_message(&self) -> bool {
        matches!(self, Outcome::Message(_))
    }

    /// True for tabular outcomes.
    pub fn is_table(&self) -> bool {
        matches!(self, Outcome::Table(_))
    }
}

/// The display value [`process`](crate::Dispatcher::process) hands back.
///
/// `Brief` is the handler outcome, unchanged. `Verbose` carries the literal
/// input line alongside it so renderers can show both - as two lines of
/// text, or as an echo paragraph above a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "display", rename_all = "lowercase")]
pub enum Reply {
    /// Brief mode: the outcome alone.
    Brief {
        /// The handler's result.
        outcome: Outcome,
    },
    /// Verbose mode: the input line echoed alongside the outcome.
    Verbose {
        /// The literal input line as typed.
        command: String,
        /// The handler's result.
        outcome: Outcome,
    },
}

impl Reply {
    /// The underlying handler outcome, whichever the wrapping.
    pub fn outcome(&self) -> &Outcome {
        match self {
            Reply::Brief { outcome } => outcome,
            Reply::Verbose { outcome, .. } => outcome,
        }
    }

    /// The echoed input line, present only on verbose replies.
    pub fn echo(&self) -> Option<&str> {
        match self {
            Reply::Brief { .. } => None,
            Reply::Verbose { command, .. } => Some(command),
        }
    }

    /// True when this reply carries the verbose echo.
    pub fn is_verbose(&self) -> bool {
        matches!(self, Reply::Verbose { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let message = Outcome::message("hello");
        assert_eq!(message.as_message(), Some("hello"));
        assert!(message.is_message());
        assert!(message.as_table().is_none());

        let table = Outcome::table(Grid::from_rows(vec![vec!["a".into()]]));
        assert!(table.is_table());
        assert_eq!(table.as_table().unwrap().len(), 1);
    }

    #[test]
    fn test_message_serializes_tagged() {
        let json = serde_json::to_string(&Outcome::message("hi")).unwrap();
        assert_eq!(json, r#"{"kind":"message","value":"hi"}"#);
    }

    #[test]
    fn test_table_serializes_tagged() {
        let table = Outcome::table(Grid::from_rows(vec![vec!["a".into(), "b".into()]]));
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"kind":"table","value":[["a","b"]]}"#);
    }

    #[test]
    fn test_reply_exposes_structure() {
        let brief = Reply::Brief {
            outcome: Outcome::message("done"),
        };
        assert!(!brief.is_verbose());
        assert_eq!(brief.echo(), None);
        assert_eq!(brief.outcome().as_message(), Some("done"));

        let verbose = Reply::Verbose {
            command: "view".into(),
            outcome: Outcome::message("done"),
        };
        assert!(verbose.is_verbose());
        assert_eq!(verbose.echo(), Some("view"));
    }

    #[test]
    fn test_reply_serializes_tagged() {
        let verbose = Reply::Verbose {
            command: "mode".into(),
            outcome: Outcome::message("Mode set to verbose"),
        };
        let json = serde_json::to_string(&verbose).unwrap();
        assert!(json.starts_with(r#"{"display":"verbose""#));
        assert!(json.contains(r#""command":"mode""#));
    }
}

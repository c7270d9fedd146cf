//! Diagnostics for skipped description lines.

use std::fmt;
use thiserror::Error;

/// Why (part of) a description line had no effect.
///
/// Warnings never abort parsing; they only explain what was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseWarning {
    #[error("line is not a recognized directive")]
    Unrecognized,

    #[error("start state {name:?} has not been declared")]
    UnknownStartState { name: String },

    #[error("accept state {name:?} has not been declared")]
    UnknownAcceptState { name: String },

    #[error("transition must have the form `from, symbol -> to`")]
    MalformedTransition,

    #[error("transition source {name:?} has not been declared")]
    UnknownSource { name: String },

    #[error("transition target {name:?} has not been declared")]
    UnknownTarget { name: String },

    #[error("transition has an empty symbol")]
    EmptySymbol,
}

/// A [`ParseWarning`] together with the line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineWarning {
    /// 1-based line number
    pub line: usize,
    /// The trimmed line text
    pub text: String,
    pub warning: ParseWarning,
}

impl fmt::Display for LineWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} ({})", self.line, self.warning, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_warning_display_includes_position_and_text() {
        let warning = LineWarning {
            line: 4,
            text: "Start state: q9".to_string(),
            warning: ParseWarning::UnknownStartState {
                name: "q9".to_string(),
            },
        };
        assert_eq!(
            warning.to_string(),
            "line 4: start state \"q9\" has not been declared (Start state: q9)"
        );
    }
}

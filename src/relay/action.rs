use std::fmt;
use std::str::FromStr;

use super::error::RelayError;

/// The transformation a user asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Translate,
    Paraphrase,
    Summarize,
    Grammar,
    Tone,
    Keywords,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Translate,
        Action::Paraphrase,
        Action::Summarize,
        Action::Grammar,
        Action::Tone,
        Action::Keywords,
    ];

    /// Wire name, as sent by clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Translate => "translate",
            Action::Paraphrase => "paraphrase",
            Action::Summarize => "summarize",
            Action::Grammar => "grammar",
            Action::Tone => "tone",
            Action::Keywords => "keywords",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = RelayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| RelayError::InvalidAction(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_wire_name() {
        for action in Action::ALL {
            assert_eq!(action.as_str().parse::<Action>().unwrap(), action);
        }
    }

    #[test]
    fn rejects_unknown_and_differently_cased_names() {
        for name in ["", "Translate", "shout", "keyword"] {
            assert!(matches!(name.parse::<Action>(), Err(RelayError::InvalidAction(_))));
        }
    }
}

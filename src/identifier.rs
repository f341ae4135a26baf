//! Classification of raw input into chat or game account identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::{InvalidReason, LinkError};

/// Length of a canonical hyphenated UUID.
pub const UUID_LEN: usize = 36;

/// Which namespace an identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    /// Numeric chat-platform (Discord) account ID.
    Chat,
    /// UUID-shaped game (Minecraft) account ID.
    Game,
}

/// A chat-platform account ID: decimal digits that fit in a `u64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatAccountId {
    value: u64,
    raw: String,
}

impl ChatAccountId {
    /// The parsed numeric value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.value
    }

    /// The input exactly as supplied, leading zeros included.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

/// A game account ID in hyphenated UUID shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameAccountId(String);

impl GameAccountId {
    /// The input exactly as supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A classified identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    /// Chat-platform account ID.
    Chat(ChatAccountId),
    /// Game account UUID.
    Game(GameAccountId),
}

impl Identifier {
    /// Classify a raw input string.
    ///
    /// Hyphenated input must be exactly 36 characters to count as a game
    /// account UUID. Anything else must parse as an unsigned 64-bit decimal.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::InvalidIdentifier`] when neither shape matches.
    pub fn classify(input: &str) -> Result<Self, LinkError> {
        let invalid = |reason| LinkError::InvalidIdentifier { input: input.to_string(), reason };

        if input.contains('-') {
            if input.len() == UUID_LEN {
                return Ok(Self::Game(GameAccountId(input.to_string())));
            }
            return Err(invalid(InvalidReason::HyphenatedWrongLength { len: input.len() }));
        }

        // `u64::from_str` accepts a leading '+', the account ID format does not.
        if !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(InvalidReason::NotNumeric));
        }
        let value = input.parse::<u64>().map_err(|_| invalid(InvalidReason::NotNumeric))?;
        Ok(Self::Chat(ChatAccountId { value, raw: input.to_string() }))
    }

    /// The namespace this identifier belongs to.
    #[must_use]
    pub fn kind(&self) -> IdentifierKind {
        match self {
            Self::Chat(_) => IdentifierKind::Chat,
            Self::Game(_) => IdentifierKind::Game,
        }
    }

    /// The identifier text sent to the service.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Chat(id) => id.as_str(),
            Self::Game(id) => id.as_str(),
        }
    }
}

impl FromStr for Identifier {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::classify(s)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(input: &str) -> InvalidReason {
        match Identifier::classify(input) {
            Err(LinkError::InvalidIdentifier { reason, .. }) => reason,
            other => panic!("expected InvalidIdentifier for {input:?}, got {other:?}"),
        }
    }

    #[test]
    fn digit_strings_up_to_twenty_long_are_chat_ids() {
        for len in 1..=20 {
            let input = "1".repeat(len);
            let id = Identifier::classify(&input).unwrap();
            assert_eq!(id.kind(), IdentifierKind::Chat, "length {len}");
        }
        let max = u64::MAX.to_string();
        assert_eq!(max.len(), 20);
        assert_eq!(Identifier::classify(&max).unwrap().kind(), IdentifierKind::Chat);
    }

    #[test]
    fn chat_id_keeps_value_and_text() {
        let Identifier::Chat(id) = Identifier::classify("217617036749176833").unwrap() else {
            panic!("expected chat id");
        };
        assert_eq!(id.value(), 217_617_036_749_176_833);
        assert_eq!(id.as_str(), "217617036749176833");
    }

    #[test]
    fn leading_zeros_are_preserved() {
        let id = Identifier::classify("007").unwrap();
        assert_eq!(id.to_string(), "007");
    }

    #[test]
    fn canonical_uuid_is_game_id() {
        let id = Identifier::classify("c3e4a469-2e9d-4cb1-be1b-80fedf40e71b").unwrap();
        assert_eq!(id.kind(), IdentifierKind::Game);
        assert_eq!(id.as_str(), "c3e4a469-2e9d-4cb1-be1b-80fedf40e71b");
    }

    #[test]
    fn any_hyphenated_36_char_string_is_game_id() {
        let inputs =
            ["-".repeat(36), format!("{}-", "x".repeat(35)), format!("a-{}", " ".repeat(34))];
        for input in inputs {
            assert_eq!(Identifier::classify(&input).unwrap().kind(), IdentifierKind::Game);
        }
    }

    #[test]
    fn hyphenated_strings_of_other_lengths_fail() {
        for len in [1, 2, 20, 32, 35, 37, 64] {
            let input = format!("-{}", "a".repeat(len - 1));
            assert_eq!(reason(&input), InvalidReason::HyphenatedWrongLength { len });
        }
    }

    #[test]
    fn undashed_uuid_is_not_numeric() {
        assert_eq!(reason("c3e4a4692e9d4cb1be1b80fedf40e71b"), InvalidReason::NotNumeric);
    }

    #[test]
    fn non_numeric_inputs_fail() {
        for input in ["", "abc", "12a", "+12", " 12", "1.5", "18446744073709551616"] {
            assert_eq!(reason(input), InvalidReason::NotNumeric, "input {input:?}");
        }
    }

    #[test]
    fn from_str_matches_classify() {
        let parsed: Identifier = "42".parse().unwrap();
        assert_eq!(parsed, Identifier::classify("42").unwrap());
        assert!("nope".parse::<Identifier>().is_err());
    }
}

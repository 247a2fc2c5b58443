//! Normalizes raw input tokens into canonical [`EntryId`]s.

use crate::constants::ENTRY_ID_LEN;
use crate::errors::{AppError, AppResult};
use crate::models::EntryId;

/// Parses a single token.
///
/// A token is accepted when it is exactly four ASCII alphanumeric characters and at least one
/// of them is not a decimal digit, so purely numeric tokens such as `1234` are rejected.
/// The returned identifier is lowercased.
///
/// The ASCII alphanumeric requirement is deliberately stricter than a bare length and
/// non-digit check: tokens like `1a-c` are rejected too, so the shard slice always falls on
/// character boundaries and no separator reaches a remote path.
pub fn parse_entry_id(token: &str) -> Option<EntryId> {
    let well_formed = token.len() == ENTRY_ID_LEN
        && token.bytes().all(|b| b.is_ascii_alphanumeric())
        && token.bytes().any(|b| !b.is_ascii_digit());

    well_formed.then(|| EntryId::from_canonical(token.to_ascii_lowercase()))
}

/// Validates a whole batch of tokens, preserving order.
///
/// # Errors
///
/// Returns `InvalidIdentifier` for the first offending token, carrying its 1-based position.
/// Nothing is returned for the rest of the batch in that case.
pub fn validate_ids<S: AsRef<str>>(tokens: &[S]) -> AppResult<Vec<EntryId>> {
    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            let token = token.as_ref();
            parse_entry_id(token).ok_or_else(|| AppError::InvalidIdentifier {
                position: i + 1,
                token: token.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_tokens_are_lowercased() {
        let ids = validate_ids(&["1ABC", "abcd", "4HhB"]).unwrap();
        let ids: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["1abc", "abcd", "4hhb"]);
    }

    #[test]
    fn all_digit_token_is_rejected() {
        assert!(parse_entry_id("1234").is_none());
        assert!(parse_entry_id("0000").is_none());
    }

    #[test]
    fn wrong_length_is_rejected() {
        for token in ["", "1ab", "1abcd", "abcdefgh"] {
            assert!(parse_entry_id(token).is_none(), "{token} should be rejected");
        }
    }

    #[test]
    fn separators_are_rejected() {
        assert!(parse_entry_id("a/bc").is_none());
        assert!(parse_entry_id("1a-c").is_none());
        assert!(parse_entry_id("..ab").is_none());
        assert!(parse_entry_id("1ab\u{e9}").is_none());
    }

    #[test]
    fn reports_first_offending_position() {
        let err = validate_ids(&["1abc", "2ab", "1234"]).unwrap_err();
        match err {
            AppError::InvalidIdentifier { position, token } => {
                assert_eq!(position, 2);
                assert_eq!(token, "2ab");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn numeric_token_position_is_reported() {
        let err = validate_ids(&["1abc", "4hhb", "1234"]).unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidIdentifier { position: 3, .. }
        ));
    }

    #[test]
    fn empty_batch_is_valid() {
        let tokens: [&str; 0] = [];
        assert!(validate_ids(&tokens).unwrap().is_empty());
    }
}

//! Positional arguments of `/mem` and `/del`

use crate::error::VocabError;
use std::num::IntErrorKind;
use vocabulary_types::WordId;

/// Parse whitespace-separated 1-based positions, each within `1..=max_number`.
///
/// An empty argument string is rejected like a non-numeric one. Integers too
/// large for `i64` are still integers and fail the range check.
pub fn parse_positions(args: &str, max_number: usize) -> Result<Vec<usize>, VocabError> {
    let mut parsed = Vec::new();
    let mut overflowed = false;
    for token in args.split_whitespace() {
        match token.parse::<i64>() {
            Ok(position) => parsed.push(position),
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                overflowed = true;
            }
            Err(_) => return Err(VocabError::parse("Indexes should be numbers")),
        }
    }

    if parsed.is_empty() && !overflowed {
        return Err(VocabError::parse("Indexes should be numbers"));
    }

    let out_of_range = overflowed
        || parsed
            .iter()
            .any(|&position| position < 1 || position > max_number as i64);
    if out_of_range {
        return Err(VocabError::parse(format!(
            "Indexes should be numbers from 1 to {}",
            max_number
        )));
    }

    Ok(parsed.into_iter().map(|p| p as usize).collect())
}

/// Split `ids` into those at the given positions and the rest, keeping order
pub fn split_by_positions(ids: &[WordId], positions: &[usize]) -> (Vec<WordId>, Vec<WordId>) {
    let mut picked = Vec::new();
    let mut rest = Vec::new();
    for (index, id) in ids.iter().enumerate() {
        if positions.contains(&(index + 1)) {
            picked.push(*id);
        } else {
            rest.push(*id);
        }
    }
    (picked, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: Result<Vec<usize>, VocabError>) -> String {
        match result {
            Err(VocabError::Parse(msg)) => msg,
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_positions_keep_input_order() {
        assert_eq!(parse_positions("3 1 2", 5).unwrap(), vec![3, 1, 2]);
        assert_eq!(parse_positions("  5 ", 5).unwrap(), vec![5]);
        assert_eq!(parse_positions("2 2", 3).unwrap(), vec![2, 2]);
    }

    #[test]
    fn test_non_numeric_token() {
        assert_eq!(message(parse_positions("1 two", 5)), "Indexes should be numbers");
        assert_eq!(message(parse_positions("1.5", 5)), "Indexes should be numbers");
    }

    #[test]
    fn test_empty_args() {
        assert_eq!(message(parse_positions("", 5)), "Indexes should be numbers");
        assert_eq!(message(parse_positions("   ", 5)), "Indexes should be numbers");
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            message(parse_positions("0 2", 5)),
            "Indexes should be numbers from 1 to 5"
        );
        assert_eq!(
            message(parse_positions("6", 5)),
            "Indexes should be numbers from 1 to 5"
        );
        assert_eq!(
            message(parse_positions("-1", 5)),
            "Indexes should be numbers from 1 to 5"
        );
        assert_eq!(
            message(parse_positions("99999999999999999999", 5)),
            "Indexes should be numbers from 1 to 5"
        );
        assert_eq!(
            message(parse_positions("1 -99999999999999999999", 5)),
            "Indexes should be numbers from 1 to 5"
        );
    }

    #[test]
    fn test_non_numeric_token_wins_over_overflow() {
        assert_eq!(
            message(parse_positions("99999999999999999999 x", 5)),
            "Indexes should be numbers"
        );
    }

    #[test]
    fn test_no_list_shown() {
        assert_eq!(
            message(parse_positions("1", 0)),
            "Indexes should be numbers from 1 to 0"
        );
    }

    #[test]
    fn test_split_by_positions() {
        let ids = vec![10, 20, 30, 40];
        let (picked, rest) = split_by_positions(&ids, &[3, 1]);
        assert_eq!(picked, vec![10, 30]);
        assert_eq!(rest, vec![20, 40]);
    }
}

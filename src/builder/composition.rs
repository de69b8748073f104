use std::str::FromStr;

use crate::{
    misc::log::targets::{self},
    structures::{pool::Pool, target::Target, Label},
    types::err::{self, ErrorKind},
};

/// Reads `label=count` pairs from a string, in order.
///
/// Counts are read as signed integers, so negative counts are left for a pool or target to reject.
///
/// ```rust
/// # use hat_draw::builder::parse_composition;
/// # use hat_draw::types::err::{ErrorKind, ParseError};
/// let pairs = parse_composition("red=5,\n green=-2").unwrap();
/// assert_eq!(pairs, vec![("red".to_string(), 5), ("green".to_string(), -2)]);
///
/// assert_eq!(parse_composition(" , "), Err(ErrorKind::Parse(ParseError::Empty)));
/// assert_eq!(parse_composition("red=5 green"), Err(ErrorKind::Parse(ParseError::Pair(1))));
/// ```
pub fn parse_composition(text: &str) -> Result<Vec<(Label, i64)>, ErrorKind> {
    let mut pairs = Vec::default();

    let items = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|item| !item.is_empty());

    for (position, item) in items.enumerate() {
        let Some((label, count)) = item.split_once('=') else {
            log::debug!(target: targets::PARSE, "No '=' in {item}");
            return Err(ErrorKind::from(err::ParseError::Pair(position)));
        };

        if label.is_empty() {
            return Err(ErrorKind::from(err::ParseError::Pair(position)));
        }

        let count = match count.parse::<i64>() {
            Ok(count) => count,
            Err(_) => {
                log::debug!(target: targets::PARSE, "Count of {label} is not an integer: {count}");
                return Err(ErrorKind::from(err::ParseError::Pair(position)));
            }
        };

        pairs.push((label.to_string(), count));
    }

    if pairs.is_empty() {
        return Err(ErrorKind::from(err::ParseError::Empty));
    }

    Ok(pairs)
}

impl FromStr for Pool {
    type Err = ErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pool::new(parse_composition(s)?)
    }
}

impl FromStr for Target {
    type Err = ErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::new(parse_composition(s)?)
    }
}

#[cfg(test)]
mod composition_tests {
    use super::*;

    #[test]
    fn mixed_separators() {
        let pairs = parse_composition("a=1,b=2\tc=3 ,, d=0").unwrap();
        let labels = pairs.iter().map(|(label, _)| label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn malformed_pairs() {
        assert_eq!(
            parse_composition("=3"),
            Err(ErrorKind::Parse(err::ParseError::Pair(0)))
        );
        assert_eq!(
            parse_composition("red=5 blue=many"),
            Err(ErrorKind::Parse(err::ParseError::Pair(1)))
        );
        assert_eq!(
            parse_composition("red=5=5"),
            Err(ErrorKind::Parse(err::ParseError::Pair(0)))
        );
    }

    #[test]
    fn pool_from_str_keeps_pool_errors() {
        assert_eq!(
            "red=0".parse::<Pool>(),
            Err(ErrorKind::InvalidArgument(err::InvalidArgument::EmptyPool))
        );
        assert!(matches!(
            "red=-1".parse::<Pool>(),
            Err(ErrorKind::InvalidArgument(
                err::InvalidArgument::NegativeCount { .. }
            ))
        ));
    }
}

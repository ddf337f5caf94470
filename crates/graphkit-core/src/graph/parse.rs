//! Whitespace-separated token reader for the serialized edge-list format:
//! `V`, `E`, then `E` pairs (unweighted) or triples (weighted).

use std::iter::Peekable;
use std::str::SplitWhitespace;

use crate::error::{GraphError, Result};

pub(crate) struct Tokens<'a> {
    inner: Peekable<SplitWhitespace<'a>>,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_whitespace().peekable(),
        }
    }

    /// No tokens left
    pub(crate) fn is_exhausted(&mut self) -> bool {
        self.inner.peek().is_none()
    }

    /// Fails on any token past the last one the format declares
    pub(crate) fn expect_end(&mut self) -> Result<()> {
        match self.inner.next() {
            None => Ok(()),
            Some(token) => Err(GraphError::parse(
                "edge list",
                format!("unexpected trailing token `{}`", token),
            )),
        }
    }

    fn next_token(&mut self, context: &str) -> Result<&'a str> {
        self.inner
            .next()
            .ok_or_else(|| GraphError::parse(context, "unexpected end of input"))
    }

    fn next_integer(&mut self, context: &str) -> Result<i64> {
        let token = self.next_token(context)?;
        token
            .parse::<i64>()
            .map_err(|_| GraphError::parse(context, format!("expected integer, found `{}`", token)))
    }

    /// A count such as `V` or `E`; negative values are rejected.
    pub(crate) fn next_count(&mut self, context: &str) -> Result<usize> {
        let value = self.next_integer(context)?;
        usize::try_from(value)
            .map_err(|_| GraphError::invalid_value(context, format!("{} (must be non-negative)", value)))
    }

    /// An edge endpoint; range against `V` is checked by `add_edge`.
    pub(crate) fn next_vertex(&mut self) -> Result<usize> {
        self.next_count("vertex")
    }

    pub(crate) fn next_weight(&mut self) -> Result<f64> {
        let token = self.next_token("weight")?;
        token
            .parse::<f64>()
            .map_err(|_| GraphError::parse("weight", format!("expected number, found `{}`", token)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_across_lines() {
        let mut tokens = Tokens::new("3\n2\n0 1\n  1 2 0.25\n");
        assert_eq!(tokens.next_count("V").unwrap(), 3);
        assert_eq!(tokens.next_count("E").unwrap(), 2);
        assert_eq!(tokens.next_vertex().unwrap(), 0);
        assert_eq!(tokens.next_vertex().unwrap(), 1);
        assert_eq!(tokens.next_vertex().unwrap(), 1);
        assert_eq!(tokens.next_vertex().unwrap(), 2);
        assert_eq!(tokens.next_weight().unwrap(), 0.25);
        assert!(tokens.is_exhausted());
        assert!(tokens.expect_end().is_ok());
    }

    #[test]
    fn test_trailing_token_is_parse_error() {
        let mut tokens = Tokens::new("1 2 3");
        assert_eq!(tokens.next_count("V").unwrap(), 1);
        assert_eq!(tokens.next_count("E").unwrap(), 2);
        assert!(matches!(
            tokens.expect_end(),
            Err(GraphError::Parse { .. })
        ));
    }

    #[test]
    fn test_negative_count_is_invalid_value() {
        let err = Tokens::new("-4").next_count("number of vertices").unwrap_err();
        assert!(matches!(err, GraphError::InvalidValue { .. }));
    }

    #[test]
    fn test_missing_and_garbage_tokens() {
        assert!(matches!(
            Tokens::new("").next_count("V"),
            Err(GraphError::Parse { .. })
        ));
        assert!(matches!(
            Tokens::new("x").next_vertex(),
            Err(GraphError::Parse { .. })
        ));
        assert!(matches!(
            Tokens::new("heavy").next_weight(),
            Err(GraphError::Parse { .. })
        ));
    }
}

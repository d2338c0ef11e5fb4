//! Parser for the bracketed IP-range allowlist grammar.
//!
//! The allowlist is written as `[[lo,hi],[lo,hi],...]`: a top-level bracket
//! pair enclosing zero or more two-address entries, with whitespace
//! insignificant everywhere. `[[0.0.0.0,255.255.255.255]]` allows every
//! address.

use crate::application::error::MalformedRangeError;

/// An inclusive IPv4 address range.
///
/// Both bounds are kept as the raw dotted-decimal text they were written as;
/// octet validation is out of scope here and callers may layer stricter
/// checks on top. A range can only be built by the parser, from exactly two
/// tokens, and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpRange {
    lower: String,
    upper: String,
}

impl IpRange {
    fn new(lower: String, upper: String) -> Self {
        Self { lower, upper }
    }

    /// Lower bound of the range, verbatim from the source text.
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Upper bound of the range, verbatim from the source text.
    pub fn upper(&self) -> &str {
        &self.upper
    }
}

/// Parse an allowlist like `[[1.2.3.4,1.2.3.8],[7.6.5.4,7.6.9.9]]` into
/// ranges in source order. A well-formed empty list `[]` yields an empty vec.
///
/// Fails with [`MalformedRangeError`] when any entry does not contain exactly
/// two non-empty address tokens, or when the bracket structure itself is
/// broken.
pub fn parse_ip_range_list(text: &str) -> Result<Vec<IpRange>, MalformedRangeError> {
    // The grammar is whitespace-insensitive, not whitespace-sensitive at
    // specific positions: strip uniformly before scanning.
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    Scanner::new(&compact).parse()
}

/// Single-pass scanner over the whitespace-stripped character sequence.
struct Scanner<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
        }
    }

    fn parse(mut self) -> Result<Vec<IpRange>, MalformedRangeError> {
        self.expect('[')?;
        let mut ranges = Vec::new();
        if self.eat(']') {
            return self.finish(ranges);
        }
        loop {
            ranges.push(self.entry()?);
            if self.eat(',') {
                continue;
            }
            self.expect(']')?;
            return self.finish(ranges);
        }
    }

    /// One `[addr,addr]` entry. A third token is an arity error, not the
    /// start of a new entry.
    fn entry(&mut self) -> Result<IpRange, MalformedRangeError> {
        self.expect('[')?;
        let lower = self.token()?;
        self.expect(',')?;
        let upper = self.token()?;
        self.expect(']')?;
        Ok(IpRange::new(lower, upper))
    }

    /// A run of non-delimiter characters; an empty run is malformed.
    fn token(&mut self) -> Result<String, MalformedRangeError> {
        let mut out = String::new();
        while let Some(&c) = self.chars.peek() {
            if c == ',' || c == '[' || c == ']' {
                break;
            }
            out.push(c);
            self.chars.next();
        }
        if out.is_empty() {
            return Err(MalformedRangeError);
        }
        Ok(out)
    }

    fn expect(&mut self, want: char) -> Result<(), MalformedRangeError> {
        if self.eat(want) {
            Ok(())
        } else {
            Err(MalformedRangeError)
        }
    }

    fn eat(&mut self, want: char) -> bool {
        if self.chars.peek() == Some(&want) {
            self.chars.next();
            true
        } else {
            false
        }
    }

    /// The top-level list must account for the whole input; trailing text is
    /// malformed.
    fn finish(mut self, ranges: Vec<IpRange>) -> Result<Vec<IpRange>, MalformedRangeError> {
        if self.chars.next().is_some() {
            return Err(MalformedRangeError);
        }
        Ok(ranges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_parses_to_no_ranges() {
        assert_eq!(parse_ip_range_list("[]").unwrap(), Vec::new());
        assert_eq!(parse_ip_range_list(" [ ] ").unwrap(), Vec::new());
    }

    #[test]
    fn single_token_entry_is_rejected() {
        assert!(parse_ip_range_list("[[1.2.3.4]]").is_err());
    }

    #[test]
    fn three_token_entry_is_rejected() {
        assert!(parse_ip_range_list("[[1.2.3.4,5.6.7.8,9.9.9.9]]").is_err());
    }

    #[test]
    fn empty_tokens_are_rejected() {
        assert!(parse_ip_range_list("[[,]]").is_err());
        assert!(parse_ip_range_list("[[1.2.3.4,]]").is_err());
        assert!(parse_ip_range_list("[[ , 1.2.3.4]]").is_err());
    }

    #[test]
    fn unbalanced_brackets_are_rejected() {
        assert!(parse_ip_range_list("[[1.2.3.4,5.6.7.8]").is_err());
        assert!(parse_ip_range_list("[1.2.3.4,5.6.7.8]]").is_err());
        assert!(parse_ip_range_list("").is_err());
    }

    #[test]
    fn trailing_text_is_rejected() {
        assert!(parse_ip_range_list("[[1.2.3.4,5.6.7.8]]x").is_err());
        assert!(parse_ip_range_list("[[1.2.3.4,5.6.7.8]],").is_err());
    }

    #[test]
    fn tokens_are_not_octet_validated() {
        // Addresses pass through verbatim; stricter validation is a caller
        // concern.
        let list = parse_ip_range_list("[[999.0.0.1,not-an-ip]]").unwrap();
        assert_eq!(list[0].lower(), "999.0.0.1");
        assert_eq!(list[0].upper(), "not-an-ip");
    }
}

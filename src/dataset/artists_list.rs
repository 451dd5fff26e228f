//! Codec for the `artists_list` column.
//!
//! Lists are written as JSON arrays of strings. On read, JSON arrays are
//! accepted as well as bracketed lists of single or double quoted literals
//! (`['A', "B's"]`), which is how older track tables store the column. The
//! reader never evaluates the text; anything that is not one of those two
//! shapes is rejected.

use std::{collections::HashSet, iter::Peekable, str::Chars};

use serde::Serializer;

use super::DatasetError;

/// Encodes a list of artist names as a JSON array.
pub fn encode(names: &[String]) -> Result<String, DatasetError> {
    serde_json::to_string(names).map_err(|e| DatasetError::ArtistList {
        input: format!("{:?}", names),
        reason: e.to_string(),
    })
}

/// `serialize_with` hook for CSV rows.
pub fn serialize<S: Serializer>(names: &[String], serializer: S) -> Result<S::Ok, S::Error> {
    let encoded = encode(names).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&encoded)
}

/// Decodes a stored artist list.
pub fn decode(raw: &str) -> Result<Vec<String>, DatasetError> {
    let trimmed = raw.trim();
    if let Ok(names) = serde_json::from_str::<Vec<String>>(trimmed) {
        return Ok(names);
    }

    ListParser::new(trimmed)
        .parse()
        .map_err(|reason| DatasetError::ArtistList {
            input: raw.to_string(),
            reason,
        })
}

/// Resolves the credited artists of one row.
///
/// The structured list wins when it is present and decodes; otherwise the
/// display string is split on commas. Names are trimmed, empty names dropped
/// and a name repeated within the row is kept once, at its first position.
pub fn resolve(artists_list: Option<&str>, artist: &str) -> Vec<String> {
    let structured = artists_list
        .filter(|raw| !raw.trim().is_empty())
        .and_then(|raw| decode(raw).ok());

    let names = structured.unwrap_or_else(|| artist.split(',').map(str::to_string).collect());

    let mut seen = HashSet::new();
    names
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty() && seen.insert(name.clone()))
        .collect()
}

struct ListParser<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> ListParser<'a> {
    fn new(input: &'a str) -> Self {
        ListParser {
            chars: input.chars().peekable(),
        }
    }

    fn parse(mut self) -> Result<Vec<String>, String> {
        self.expect('[')?;
        let mut names = Vec::new();

        self.skip_whitespace();
        if self.chars.peek() == Some(&']') {
            self.chars.next();
            return self.finish(names);
        }

        loop {
            self.skip_whitespace();
            names.push(self.quoted()?);
            self.skip_whitespace();
            match self.chars.next() {
                Some(',') => {
                    // trailing comma before the closing bracket
                    self.skip_whitespace();
                    if self.chars.peek() == Some(&']') {
                        self.chars.next();
                        return self.finish(names);
                    }
                }
                Some(']') => return self.finish(names),
                Some(c) => return Err(format!("unexpected character '{}'", c)),
                None => return Err("unterminated list".to_string()),
            }
        }
    }

    fn quoted(&mut self) -> Result<String, String> {
        let quote = match self.chars.next() {
            Some(q @ ('\'' | '"')) => q,
            Some(c) => return Err(format!("expected a quoted name, found '{}'", c)),
            None => return Err("unterminated list".to_string()),
        };

        let mut name = String::new();
        loop {
            match self.chars.next() {
                Some('\\') => name.push(self.escape()?),
                Some(c) if c == quote => return Ok(name),
                Some(c) => name.push(c),
                None => return Err("unterminated string".to_string()),
            }
        }
    }

    /// Escapes as written by Python's `repr` of a string. Anything else is an
    /// error.
    fn escape(&mut self) -> Result<char, String> {
        match self.chars.next() {
            Some(c @ ('\\' | '\'' | '"')) => Ok(c),
            Some('n') => Ok('\n'),
            Some('t') => Ok('\t'),
            Some('r') => Ok('\r'),
            Some('x') => self.code_point(2),
            Some('u') => self.code_point(4),
            Some('U') => self.code_point(8),
            Some(c) => Err(format!("unsupported escape '\\{}'", c)),
            None => Err("unterminated escape".to_string()),
        }
    }

    fn code_point(&mut self, digits: usize) -> Result<char, String> {
        let mut value = 0u32;
        for _ in 0..digits {
            let digit = self
                .chars
                .next()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| format!("expected {} hex digits in escape", digits))?;
            value = value * 16 + digit;
        }
        char::from_u32(value).ok_or_else(|| format!("invalid code point {:#x}", value))
    }

    fn expect(&mut self, expected: char) -> Result<(), String> {
        match self.chars.next() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(format!("expected '{}', found '{}'", expected, c)),
            None => Err(format!("expected '{}', found end of input", expected)),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.chars.peek().is_some_and(|c| c.is_whitespace()) {
            self.chars.next();
        }
    }

    fn finish(mut self, names: Vec<String>) -> Result<Vec<String>, String> {
        self.skip_whitespace();
        match self.chars.next() {
            None => Ok(names),
            Some(c) => Err(format!("trailing character '{}' after list", c)),
        }
    }
}

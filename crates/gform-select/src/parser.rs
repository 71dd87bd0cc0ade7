//! Selector scanner.
//!
//! The grammar is deliberately small:
//!
//! ```text
//! selector  := chain ("," chain)*
//! chain     := compound (WS compound)*
//! compound  := (tag | "*")? ("#" ident | "." ident | "[" ident "=" value "]")*
//! ```

use crate::error::{Result, SelectorError};
use crate::selector::{Chain, Compound, Selector};

/// Parses a full selector string into its alternatives.
pub fn parse_selector(input: &str) -> Result<Selector> {
    let alternatives = input
        .split(',')
        .filter(|alternative| !alternative.trim().is_empty())
        .map(parse_chain)
        .collect::<Result<Vec<_>>>()?;

    if alternatives.is_empty() {
        return Err(SelectorError::Empty);
    }

    Ok(Selector { alternatives })
}

fn parse_chain(input: &str) -> Result<Chain> {
    let steps = input
        .split_whitespace()
        .map(|step| CompoundScanner::new(step).scan())
        .collect::<Result<Vec<_>>>()?;

    if steps.is_empty() {
        return Err(SelectorError::Empty);
    }

    Ok(Chain { steps })
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Scans one whitespace-free compound.
struct CompoundScanner<'a> {
    /// The compound source.
    input: &'a str,
    /// The current byte position.
    pos: usize,
}

impl<'a> CompoundScanner<'a> {
    const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consumes characters while `pred` holds and returns them.
    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
        &self.input[start..self.pos]
    }

    fn scan(mut self) -> Result<Compound> {
        let mut compound = Compound::default();

        match self.peek() {
            Some('*') => {
                self.advance();
            }
            Some(c) if c.is_ascii_alphabetic() => {
                let tag = self.take_while(|c| c.is_ascii_alphanumeric() || c == '-');
                compound.tag = Some(tag.to_ascii_lowercase());
            }
            _ => {}
        }

        while let Some(c) = self.peek() {
            match c {
                '#' => {
                    let id = self.scan_ident('#')?;
                    // first id wins
                    compound.id.get_or_insert(id);
                }
                '.' => {
                    let class = self.scan_ident('.')?;
                    compound.classes.push(class);
                }
                '[' => {
                    let (name, value) = self.scan_attribute()?;
                    compound.attributes.insert(name, value);
                }
                _ => {
                    return Err(SelectorError::UnexpectedChar {
                        ch: c,
                        pos: self.pos,
                        compound: self.input.to_string(),
                    });
                }
            }
        }

        Ok(compound)
    }

    /// Scans `prefix ident`.
    fn scan_ident(&mut self, prefix: char) -> Result<String> {
        let pos = self.pos;
        self.advance(); // prefix
        let ident = self.take_while(is_ident_char);
        if ident.is_empty() {
            return Err(SelectorError::MissingIdentifier {
                prefix,
                pos,
                compound: self.input.to_string(),
            });
        }
        Ok(ident.to_string())
    }

    /// Scans `[name=value]`.
    fn scan_attribute(&mut self) -> Result<(String, String)> {
        self.advance(); // [
        let name = self.take_while(is_ident_char).to_string();

        if self.peek() != Some('=') {
            return Err(if self.peek().is_none() {
                SelectorError::UnterminatedAttribute(self.input.to_string())
            } else {
                SelectorError::MissingAttributeValue {
                    name,
                    compound: self.input.to_string(),
                }
            });
        }
        if name.is_empty() {
            return Err(SelectorError::MissingIdentifier {
                prefix: '[',
                pos: self.pos,
                compound: self.input.to_string(),
            });
        }
        self.advance(); // =

        let raw = self.take_while(|c| c != ']');
        if self.advance() != Some(']') {
            return Err(SelectorError::UnterminatedAttribute(self.input.to_string()));
        }

        let value = unquote(raw);
        if value.is_empty() {
            return Err(SelectorError::MissingAttributeValue {
                name,
                compound: self.input.to_string(),
            });
        }

        Ok((name, value.to_string()))
    }
}

/// Strips one pair of matching single or double quotes.
fn unquote(raw: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = raw
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    raw
}

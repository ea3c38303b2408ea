use std::fmt;

use serde::Serialize;

/// A whitespace-delimited word. Equality looks at the text only, so the same
/// word at different offsets compares equal.
#[derive(Clone, Copy, Debug, Eq, Serialize)]
pub struct Token<'a> {
    /// Text of the token
    pub text: &'a str,
    /// Byte index of the start of the token in the original text. End is defined by length of text.
    pub start: usize,
}

impl<'a> PartialEq for Token<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl<'a> fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

#[derive(Debug)]
pub struct TokenParser<'a> {
    source: &'a str,
    position: usize,
}

impl<'a> TokenParser<'a> {
    pub fn parse(text: &'a str) -> TokenParser<'a> {
        TokenParser {
            source: text,
            position: 0,
        }
    }
}

impl<'a> Iterator for TokenParser<'a> {
    type Item = Token<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        let rest_of_text = &self.source[self.position..];
        let skipped = rest_of_text
            .chars()
            .take_while(|c| c.is_whitespace())
            .map(char::len_utf8)
            .sum::<usize>();
        let start = self.position + skipped;
        let len = self.source[start..]
            .chars()
            .take_while(|c| !c.is_whitespace())
            .map(char::len_utf8)
            .sum::<usize>();
        if len == 0 {
            self.position = self.source.len();
            return None;
        }
        self.position = start + len;
        Some(Token {
            text: &self.source[start..self.position],
            start,
        })
    }
}

pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    TokenParser::parse(text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_any_whitespace() {
        let tokens = tokenize("  the cat\tsat\n\non  ");
        let texts: Vec<_> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["the", "cat", "sat", "on"]);
        let starts: Vec<_> = tokens.iter().map(|t| t.start).collect();
        assert_eq!(starts, vec![2, 6, 10, 15]);
    }

    #[test]
    fn empty_and_blank_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \n\t ").is_empty());
    }

    #[test]
    fn multibyte_offsets() {
        let tokens = tokenize("Österreich über alles");
        assert_eq!(tokens[1].text, "über");
        assert_eq!(tokens[1].start, "Österreich ".len());
    }

    #[test]
    fn equality_ignores_offset() {
        let left = tokenize("cat");
        let right = tokenize("   cat");
        assert_eq!(left, right);
        assert_ne!(tokenize("Cat"), left);
    }
}

use std::ops::Range;

pub type TokenWithRange<'a> = (&'a str, Range<usize>);

/// Splits a line into whitespace-separated tokens, keeping track of where
/// each one lives in the original string so errors can point at it.
pub struct Tokenizer<'a> {
    string: &'a str,
    index: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(string: &'a str) -> Self {
        Tokenizer { string, index: 0 }
    }

    fn remaining(&self) -> &'a str {
        &self.string[self.index..]
    }

    fn chomp_leading_whitespace(&mut self) {
        let remaining = self.remaining();
        let trimmed = remaining.trim_start();
        self.index += remaining.len() - trimmed.len();
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = TokenWithRange<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.chomp_leading_whitespace();
        let remaining = self.remaining();
        if remaining.is_empty() {
            return None;
        }
        let len = remaining
            .find(char::is_whitespace)
            .unwrap_or(remaining.len());
        let start = self.index;
        self.index += len;
        Some((&remaining[..len], start..self.index))
    }
}

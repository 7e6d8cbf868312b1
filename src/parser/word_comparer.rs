use crate::parser::QueryParser;

/// Case-insensitive keyword matcher. A space inside the keyword matches a run
/// of one or more whitespace chars, so `GROUP BY` also accepts `group\n  by`.
/// The postfix options decide what may follow the keyword.
#[derive(Debug, Default)]
pub struct WordComparer {
    pub word: Vec<char>,
    whitespace_postfix: bool,
    full_block_delimiter_postfix: bool,
    eof: bool,
    delimiter: Option<char>,
    optional_postfix: Vec<char>,
}

impl WordComparer {
    pub fn new(word: &str) -> Self {
        let word: Vec<char> = word.to_uppercase().chars().collect();
        Self {
            word,
            whitespace_postfix: false,
            full_block_delimiter_postfix: false,
            eof: false,
            delimiter: None,
            optional_postfix: vec![],
        }
    }

    pub fn is_block_delimiter(ch: char) -> bool {
        ch.is_whitespace()
    }

    pub fn is_any_delimiter(ch: char) -> bool {
        ch == ',' || ch == '(' || ch == ')' || ch == '=' || Self::is_block_delimiter(ch)
    }

    /// Offset just past the keyword text under the cursor, postfix excluded.
    fn word_end(&self, parser: &QueryParser) -> Option<usize> {
        let at = |offset: usize| parser.text_v.get(parser.position + offset).copied();

        let mut offset = 0;
        for expected in self.word.iter() {
            let ch = at(offset)?;
            if *expected == ' ' {
                if !Self::is_block_delimiter(ch) {
                    return None;
                }
                while at(offset).is_some_and(Self::is_block_delimiter) {
                    offset += 1;
                }
                continue;
            }
            if *expected != ch.to_ascii_uppercase() {
                return None;
            }
            offset += 1;
        }

        Some(offset)
    }

    fn accepts_postfix(&self, next: Option<char>) -> bool {
        let Some(next) = next else {
            return self.eof;
        };

        if self.delimiter.is_none() && !self.full_block_delimiter_postfix && !self.whitespace_postfix &&
            self.optional_postfix.is_empty() {
            return true;
        }

        if self.delimiter == Some(next) {
            return true;
        }

        if self.full_block_delimiter_postfix && Self::is_any_delimiter(next) {
            return true;
        }

        if self.whitespace_postfix && Self::is_block_delimiter(next) {
            return true;
        }

        self.optional_postfix.contains(&next)
    }

    fn matched_end(&self, parser: &QueryParser) -> Option<usize> {
        let end = self.word_end(parser)?;
        let next = parser.text_v.get(parser.position + end).copied();

        self.accepts_postfix(next).then_some(end)
    }

    pub fn compare(&self, parser: &QueryParser) -> bool {
        self.matched_end(parser).is_some()
    }

    /// Chars the keyword spans at the cursor, or 0 when it does not match.
    pub fn matched_length(&self, parser: &QueryParser) -> usize {
        self.matched_end(parser).unwrap_or(0)
    }

    pub fn with_eof(mut self) -> Self { self.eof = true; self }
    pub fn with_whitespace_postfix(mut self) -> Self { self.whitespace_postfix = true; self }
    pub fn with_any_delimiter_postfix(mut self) -> Self { self.full_block_delimiter_postfix = true; self }
    pub fn with_delimiter(mut self, delimiter: char) -> Self { self.delimiter = Some(delimiter); self }
    pub fn with_optional_postfix(mut self, value: char) -> Self { self.optional_postfix.push(value); self }
}

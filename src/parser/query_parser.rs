use crate::{
    parser::{ParseError, Phase, QueryComparers},
    request::Grammar,
};

/// Char cursor over one query text, shared by every clause parser.
#[derive(Debug, Default)]
pub struct QueryParser {
    pub position: usize,
    pub length: usize,
    pub text_v: Vec<char>,
    pub phase: Phase,
    pub text: String,
    pub grammar: Grammar,

    pub comparers: QueryComparers,
}

impl QueryParser {
    pub fn new(query: &str, grammar: Grammar) -> Self {
        let text_v: Vec<char> = query.chars().collect();
        Self {
            position: 0,
            length: text_v.len(),
            text_v,
            text: query.to_string(),
            grammar,
            comparers: QueryComparers::new(),
            ..Default::default()
        }
    }

    pub fn eof(&self) -> bool {
        self.position >= self.length
    }

    pub fn current(&self) -> char {
        if self.position < self.length {
            return self.text_v[self.position];
        }

        '\0'
    }

    pub fn peek(&self, ahead: usize) -> char {
        if self.position + ahead < self.length {
            return self.text_v[self.position + ahead];
        }

        '\0'
    }

    pub fn next(&mut self) {
        self.position += 1;
    }

    pub fn next_non_whitespace(&mut self) {
        while self.current().is_whitespace() {
            self.next();
        }
    }

    pub fn jump(&mut self, ahead: usize) {
        self.position = (self.position + ahead).min(self.length);
    }

    pub fn text_from_range(&self, start: usize, end: usize) -> String {
        let end = end.min(self.length);
        let start = start.min(end);
        self.text_v[start..end].iter().collect()
    }

    pub fn text_from_pivot(&self, pivot: usize) -> String {
        self.text_from_range(pivot, self.position)
    }

    /// Skips whitespace and moves to the next clause if its keyword is under
    /// the cursor. The keyword itself is left for the clause parser.
    pub fn check_next_phase(&mut self) -> bool {
        self.next_non_whitespace();

        if self.eof() {
            self.phase = Phase::EOF;
            return true;
        }

        if self.phase < Phase::Options && self.comparers.option.compare(self) {
            self.phase = Phase::Options;
            return true;
        }

        if self.phase < Phase::LimitAndOffset &&
            (self.comparers.limit.compare(self) || self.comparers.offset.compare(self) ||
                self.comparers.top.compare(self)) {
            self.phase = Phase::LimitAndOffset;
            return true;
        }

        if self.phase < Phase::OrderBy && self.comparers.order_by.compare(self) {
            self.phase = Phase::OrderBy;
            return true;
        }

        if self.phase < Phase::Having && self.comparers.having.compare(self) {
            self.phase = Phase::Having;
            return true;
        }

        if self.phase < Phase::Aggregates && self.comparers.group_by.compare(self) {
            self.phase = Phase::Aggregates;
            return true;
        }

        if self.phase < Phase::Criteria && self.comparers.r#where.compare(self) {
            self.phase = Phase::Criteria;
            return true;
        }

        if self.phase < Phase::Collections && self.comparers.from.compare(self) {
            self.phase = Phase::Collections;
            return true;
        }

        false
    }

    /// Ends a clause: anything but the start of a later clause is an error.
    pub fn expect_next_phase(&mut self, clause: &str) -> Result<(), ParseError> {
        let pivot = self.position;
        if self.check_next_phase() {
            return Ok(());
        }

        ParseError::new(&format!("Unexpected token after {}", clause), pivot, self).err()
    }

    /// Consumes a single expected char, skipping leading whitespace.
    pub fn expect_char(&mut self, expected: char, message: &str) -> Result<(), ParseError> {
        self.next_non_whitespace();
        if self.current() != expected {
            return ParseError::new(message, self.position, self).err();
        }
        self.next();
        Ok(())
    }
}

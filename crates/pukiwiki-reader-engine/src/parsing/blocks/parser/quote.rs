use crate::{
    error::ParseError,
    parsing::blocks::{
        kinds::QuoteSyntax,
        types::{Quote, Statement},
    },
};

use super::StatementParser;

impl StatementParser<'_> {
    /// Parses a quote at the level given by the marker run at entry.
    ///
    /// Lines without a marker continue the quote lazily. A run starting
    /// with `<` drops the rest of its line and closes the quote.
    pub(super) fn parse_quote(&mut self) -> Result<Statement, ParseError> {
        let start = self.cur.pos();
        let level = self
            .cur
            .take_while(QuoteSyntax::is_marker)
            .map_or(0, str::len);
        self.cur.set_pos(start);

        let mut content = vec![];
        loop {
            let run_start = self.cur.pos();
            match self.cur.take_while(QuoteSyntax::is_marker) {
                Some(run) if run.starts_with(QuoteSyntax::CLOSE) => {
                    self.discard_rest_of_line();
                    break;
                }
                Some(run) if run.len() == level => {
                    self.cur.skip_whitespace();
                    if self.cur.eof() || self.cur.is_at('\n') {
                        self.discard_rest_of_line();
                    } else if let Some(statement) = self.parse_statement(false)? {
                        content.push(statement);
                    }
                }
                Some(run) if run.len() > level => {
                    self.cur.set_pos(run_start);
                    content.push(self.parse_quote()?);
                }
                Some(_) => {
                    self.cur.set_pos(run_start);
                    break;
                }
                None => match self.parse_statement(false)? {
                    Some(statement) => content.push(statement),
                    None => break,
                },
            }

            if self.cur.eof() || self.cur.is_at('\n') {
                break;
            }
        }

        Ok(Statement::Quote(Quote::new(level, content)?))
    }
}

use crate::{
    error::ParseError,
    parsing::{
        blocks::{
            kinds::{ListSyntax, ParagraphSyntax, Separator, StatementPrefix},
            types::{List, Statement},
        },
        inline::{Expression, kinds::Comment, parse_line},
    },
};

use super::StatementParser;

impl StatementParser<'_> {
    /// Parses a list whose kind is the first marker and whose level is the
    /// length of the marker run at entry.
    ///
    /// A longer run opens a nested list inside the current item; a shorter
    /// run or a run of the other kind at this level ends the list.
    pub(super) fn parse_list(&mut self) -> Result<Statement, ParseError> {
        let start = self.cur.pos();
        let run = self
            .cur
            .take_while(ListSyntax::is_marker)
            .ok_or_else(|| self.cur.expected(&["+", "-"]))?;
        let ordered = run.starts_with(ListSyntax::ORDERED);
        let level = run.len();
        self.cur.set_pos(start);

        let mut items = vec![];
        // Inline text of the item being built, one part per source line.
        let mut pending: Vec<Expression> = vec![];

        loop {
            while self.cur.starts_with(Comment::PREFIX) {
                self.cur.take_until_any(&["\n"], true)?;
            }
            match self.cur.current() {
                None | Some('\n') => break,
                Some(Separator::MARK) if self.at_separator() => break,
                Some(c) if ListSyntax::is_marker(c) => {
                    let run_start = self.cur.pos();
                    let run = self.cur.take_while(ListSyntax::is_marker).unwrap_or_default();

                    if run.len() == level && run.starts_with(ListSyntax::marker(ordered)) {
                        seal_item(&mut items, &mut pending);
                        self.cur.skip_whitespace();
                        if self.cur.is_at('\n') {
                            self.cur.advance();
                            continue;
                        }
                        if self.cur.is_at(ParagraphSyntax::FORCE) {
                            // Parsed as a forced paragraph on the next turn.
                            continue;
                        }
                        pending.push(parse_line(&mut self.cur)?);
                        if self.cur.advance().is_none() {
                            break;
                        }
                    } else if run.len() > level {
                        self.cur.set_pos(run_start);
                        let nested = self.parse_list()?;
                        items.push(attach(&mut pending, nested));
                    } else {
                        self.cur.set_pos(run_start);
                        break;
                    }
                }
                c if StatementPrefix::is_prefix(c) => {
                    let Some(block) = self.parse_statement(false)? else {
                        break;
                    };
                    items.push(attach(&mut pending, block));
                }
                Some(_) => {
                    // Continuation of the current item's text.
                    if !pending.is_empty() {
                        pending.push(Expression::Plain("\n".to_string()));
                    }
                    pending.push(parse_line(&mut self.cur)?);
                    if self.cur.advance().is_none() {
                        break;
                    }
                }
            }
        }
        seal_item(&mut items, &mut pending);

        Ok(Statement::List(List::new(level, ordered, items)?))
    }
}

/// Moves any pending inline text into a new item.
fn seal_item(items: &mut Vec<Statement>, pending: &mut Vec<Expression>) {
    if !pending.is_empty() {
        items.push(Statement::Inline(Expression::from_parts(std::mem::take(pending))));
    }
}

/// Makes `block` an item, prefixed by any pending inline text.
fn attach(pending: &mut Vec<Expression>, block: Statement) -> Statement {
    if pending.is_empty() {
        block
    } else {
        Statement::Composite(vec![
            Statement::Inline(Expression::from_parts(std::mem::take(pending))),
            block,
        ])
    }
}

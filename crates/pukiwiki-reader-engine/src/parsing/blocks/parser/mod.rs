use crate::{
    error::ParseError,
    parsing::{
        cursor::Cursor,
        inline::{Expression, kinds::Comment, kinds::PluginCall, parse_inline_until, parse_line},
    },
};

use super::{
    kinds::{
        BlockPluginSyntax, HeadingSyntax, ListSyntax, ParagraphSyntax, Preformatted, QuoteSyntax,
        Separator, StatementPrefix, TableSyntax, Title,
    },
    types::{Alignment, BlockPlugin, Heading, Paragraph, Statement},
};

mod list;
mod quote;
mod table;

/// Recursive-descent parser for block statements.
///
/// Holds the cursor for the whole text plus the document title once a
/// `TITLE:` line has been seen. Container blocks (lists, quotes) call back
/// into [`StatementParser::parse_statement`] for their nested content.
pub struct StatementParser<'a> {
    cur: Cursor<'a>,
    title: Option<String>,
}

impl<'a> StatementParser<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            cur: Cursor::new(text),
            title: None,
        }
    }

    /// Parses every top-level statement to the end of the text.
    pub fn parse_all(mut self) -> Result<(Vec<Statement>, Option<String>), ParseError> {
        let mut statements = vec![];
        while let Some(statement) = self.next_statement()? {
            statements.push(statement);
        }
        Ok((statements, self.title))
    }

    /// Parses the next top-level statement, or `None` at the end of the text.
    pub fn next_statement(&mut self) -> Result<Option<Statement>, ParseError> {
        self.parse_statement(true)
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Skips blank and comment lines, then dispatches on the first character.
    ///
    /// A `TITLE:` line is only recognised at the top level, and only once.
    pub(super) fn parse_statement(&mut self, top_level: bool) -> Result<Option<Statement>, ParseError> {
        loop {
            self.skip_blank_and_comment_lines()?;
            if self.cur.eof() {
                return Ok(None);
            }
            if top_level && self.title.is_none() && self.cur.matches_ahead(&[Title::PREFIX], false)? {
                self.cur.take_literal(Title::PREFIX)?;
                let title = self.cur.take_until_any(&["\n"], true)?;
                self.title = Some(title.trim().to_string());
                continue;
            }
            break;
        }

        log::trace!(
            "statement at {}:{} starts with {:?}",
            self.cur.line(),
            self.cur.column(),
            self.cur.current()
        );

        let statement = match self.cur.current() {
            Some(BlockPluginSyntax::PREFIX) => self.parse_block_plugin()?,
            Some(HeadingSyntax::MARK) => self.parse_heading()?,
            Some(Separator::MARK) if self.at_separator() => self.parse_separator()?,
            Some(c) if ListSyntax::is_marker(c) => self.parse_list()?,
            Some(Preformatted::INDENT) => self.parse_preformatted()?,
            Some(TableSyntax::SEPARATOR) => self.parse_table()?,
            Some(QuoteSyntax::OPEN) => self.parse_quote()?,
            _ => self.parse_paragraph()?,
        };
        Ok(Some(statement))
    }

    fn skip_blank_and_comment_lines(&mut self) -> Result<(), ParseError> {
        loop {
            if self.cur.is_at('\n') {
                self.cur.advance();
            } else if self.cur.starts_with(Comment::PREFIX) {
                self.cur.take_until_any(&["\n"], true)?;
            } else {
                return Ok(());
            }
        }
    }

    fn at_separator(&self) -> bool {
        (0..Separator::MIN_LENGTH).all(|i| self.cur.peek(i) == Some(Separator::MARK))
    }

    /// `*** content [#anchor]`
    fn parse_heading(&mut self) -> Result<Statement, ParseError> {
        let level = self
            .cur
            .take_while(|c| c == HeadingSyntax::MARK)
            .map_or(0, str::len);
        self.cur.skip_whitespace();

        // `[[` opens a link, so only a single `[` ends the content.
        let content = parse_inline_until(&mut self.cur, &|c| {
            let anchor_at = |offset: usize| c.peek(offset) == Some('[') && c.peek(offset + 1) != Some('[');
            Ok(anchor_at(0)
                || (c.current().is_some_and(|ch| ch != '\n' && ch.is_whitespace()) && anchor_at(1)))
        })?;

        self.cur.skip_whitespace();
        let anchor = if self.cur.starts_with(HeadingSyntax::ANCHOR_OPEN) {
            self.cur.take_literal(HeadingSyntax::ANCHOR_OPEN)?;
            let raw = self
                .cur
                .take_until_any(&[HeadingSyntax::ANCHOR_CLOSE, "\n"], false)?;
            self.cur.take_literal(HeadingSyntax::ANCHOR_CLOSE)?;
            Some(raw.trim_start_matches(HeadingSyntax::ANCHOR_PREFIX).to_string())
        } else {
            None
        };
        self.discard_rest_of_line();

        Ok(Statement::Heading(Heading::new(level, content, anchor)?))
    }

    fn parse_separator(&mut self) -> Result<Statement, ParseError> {
        let length = self
            .cur
            .take_while(|c| c == Separator::MARK)
            .map_or(0, str::len);
        self.discard_rest_of_line();
        Ok(Statement::Separator { length })
    }

    fn parse_preformatted(&mut self) -> Result<Statement, ParseError> {
        let mut lines = vec![];
        while self.cur.is_at(Preformatted::INDENT) {
            self.cur.advance();
            lines.push(self.take_rest_of_line());
        }
        Ok(Statement::Preformatted(lines.join("\n")))
    }

    /// `#name`, `#name(args)`, optionally followed by a `{{` ... `}}` body.
    fn parse_block_plugin(&mut self) -> Result<Statement, ParseError> {
        self.cur.advance();
        let name = self
            .cur
            .take_until_any(
                &[
                    BlockPluginSyntax::ARGS_OPEN,
                    BlockPluginSyntax::BODY_OPEN,
                    "\n",
                ],
                false,
            )?
            .to_string();

        let args = if self.cur.starts_with(BlockPluginSyntax::ARGS_OPEN) {
            self.cur.advance();
            let raw = self
                .cur
                .take_until_any(&[BlockPluginSyntax::ARGS_CLOSE], true)?;
            Some(PluginCall::split_args(raw))
        } else {
            None
        };

        let body = if self.cur.matches_ahead(&[BlockPluginSyntax::BODY_OPEN], false)? {
            self.cur.take_literal(BlockPluginSyntax::BODY_OPEN)?;
            if self.cur.starts_with(BlockPluginSyntax::EMPTY_BODY_CLOSE) {
                self.cur.take_literal(BlockPluginSyntax::EMPTY_BODY_CLOSE)?;
                Some(String::new())
            } else {
                let body = self
                    .cur
                    .take_until_any(&[BlockPluginSyntax::BODY_CLOSE], true)?;
                Some(body.to_string())
            }
        } else {
            None
        };
        self.discard_rest_of_line();

        Ok(Statement::Plugin(BlockPlugin { name, args, body }))
    }

    /// Lines of inline content, up to a blank line or a line opening another block.
    fn parse_paragraph(&mut self) -> Result<Statement, ParseError> {
        let mut alignment = None;
        if self.cur.is_at(ParagraphSyntax::FORCE) {
            self.cur.advance();
            self.cur.skip_whitespace();
        } else if self.cur.matches_ahead(&ParagraphSyntax::ALIGNMENTS, false)? {
            let keyword = self.cur.take_until_any(&[":"], true)?;
            alignment = Alignment::from_keyword(keyword);
        }

        let mut parts = vec![];
        loop {
            let line = parse_line(&mut self.cur)?;
            if !parts.is_empty() {
                parts.push(Expression::Plain("\n".to_string()));
            }
            parts.push(line);

            if self.cur.eof() {
                break;
            }
            self.cur.take_literal("\n")?;
            while self.cur.starts_with(Comment::PREFIX) {
                self.cur.take_until_any(&["\n"], true)?;
            }
            if self.cur.eof()
                || self.cur.is_at('\n')
                || StatementPrefix::is_prefix(self.cur.current())
            {
                break;
            }
        }

        Ok(Statement::Paragraph(Paragraph {
            alignment,
            content: Expression::from_parts(parts),
        }))
    }

    /// Consumes through the end of the line, returning the text before the newline.
    fn take_rest_of_line(&mut self) -> &'a str {
        let rest = self.cur.take_while(|c| c != '\n').unwrap_or_default();
        if self.cur.is_at('\n') {
            self.cur.advance();
        }
        rest
    }

    fn discard_rest_of_line(&mut self) {
        self.take_rest_of_line();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::types::BlockPlugin;
    use pretty_assertions::assert_eq;

    pub(super) fn parse(text: &str) -> Vec<Statement> {
        StatementParser::new(text).parse_all().unwrap().0
    }

    pub(super) fn plain(s: &str) -> Expression {
        Expression::Plain(s.to_string())
    }

    #[test]
    fn heading_with_anchor() {
        let statements = parse("** Section [#sec] ignored\n");
        assert_eq!(
            statements,
            vec![Statement::Heading(
                Heading::new(2, plain("Section"), Some("sec".into())).unwrap()
            )]
        );
    }

    #[test]
    fn heading_without_anchor() {
        let Statement::Heading(heading) = &parse("*Title\n")[0] else {
            panic!("expected heading");
        };
        assert_eq!(heading.level(), 1);
        assert_eq!(heading.content, plain("Title"));
        assert_eq!(heading.anchor, None);
    }

    #[test]
    fn single_bracket_ends_heading_content() {
        assert_eq!(
            parse("* a [b]\n"),
            vec![Statement::Heading(Heading::new(1, plain("a"), Some("b".into())).unwrap())]
        );

        let err = StatementParser::new("* a [b\n").parse_all().unwrap_err();
        assert!(matches!(
            err,
            ParseError::TokenExpected { ref found, ref expected, .. }
                if found == "NEWLINE" && expected == &["]"]
        ));
    }

    #[test]
    fn double_bracket_in_heading_is_a_link() {
        let Statement::Heading(heading) = &parse("** See [[Page]] [#s]\n")[0] else {
            panic!("expected heading");
        };
        assert_eq!(heading.anchor.as_deref(), Some("s"));
        assert!(matches!(
            &heading.content,
            Expression::Composite(parts) if matches!(parts.last(), Some(Expression::Link(_)))
        ));
    }

    #[test]
    fn heading_too_deep_is_invalid() {
        let err = StatementParser::new("**** deep\n").parse_all().unwrap_err();
        assert!(matches!(err, ParseError::InvalidStructure(_)));
    }

    #[test]
    fn separator_keeps_length() {
        assert_eq!(parse("-----\n"), vec![Statement::Separator { length: 5 }]);
    }

    #[test]
    fn preformatted_lines_are_unindented_once() {
        assert_eq!(
            parse(" fn main() {\n   body\n }\nafter\n")[0],
            Statement::Preformatted("fn main() {\n  body\n}".into())
        );
    }

    #[test]
    fn block_plugin_forms() {
        assert_eq!(
            parse("#contents\n#include(Page, notitle)\n#code(rust){{\nlet x = 1;\n}}\n"),
            vec![
                Statement::Plugin(BlockPlugin {
                    name: "contents".into(),
                    args: None,
                    body: None,
                }),
                Statement::Plugin(BlockPlugin {
                    name: "include".into(),
                    args: Some(vec!["Page".into(), "notitle".into()]),
                    body: None,
                }),
                Statement::Plugin(BlockPlugin {
                    name: "code".into(),
                    args: Some(vec!["rust".into()]),
                    body: Some("let x = 1;".into()),
                }),
            ]
        );
    }

    #[test]
    fn block_plugin_with_empty_body() {
        let expected = Statement::Plugin(BlockPlugin {
            name: "code".into(),
            args: None,
            body: Some(String::new()),
        });
        assert_eq!(parse("#code{{\n}}\n"), vec![expected.clone()]);
        assert_eq!(parse("#code{{\n\n}}\n"), vec![expected]);
    }

    #[test]
    fn paragraph_lines_are_joined() {
        assert_eq!(
            parse("one\ntwo\n\nthree\n"),
            vec![
                Statement::Paragraph(Paragraph {
                    alignment: None,
                    content: Expression::Composite(vec![plain("one"), plain("\n"), plain("two")]),
                }),
                Statement::Paragraph(Paragraph {
                    alignment: None,
                    content: plain("three"),
                }),
            ]
        );
    }

    #[test]
    fn paragraph_stops_before_block_prefix() {
        let statements = parse("text\n*Heading\n");
        assert_eq!(statements.len(), 2);
        assert!(matches!(statements[1], Statement::Heading(_)));
    }

    #[test]
    fn aligned_and_forced_paragraphs() {
        assert_eq!(
            parse("CENTER:middle\n\n~-not a list\n"),
            vec![
                Statement::Paragraph(Paragraph {
                    alignment: Some(Alignment::Center),
                    content: plain("middle"),
                }),
                Statement::Paragraph(Paragraph {
                    alignment: None,
                    content: plain("-not a list"),
                }),
            ]
        );
    }

    #[test]
    fn comment_between_paragraph_lines_is_dropped() {
        assert_eq!(
            parse("a\n// note\n\nb\n").len(),
            2,
            "a blank line after a comment still ends the paragraph"
        );
    }

    #[test]
    fn title_is_taken_once_at_top_level() {
        let (statements, title) = StatementParser::new("TITLE: Front\nTITLE:again\n")
            .parse_all()
            .unwrap();
        assert_eq!(title.as_deref(), Some("Front"));
        assert_eq!(
            statements,
            vec![Statement::Paragraph(Paragraph {
                alignment: None,
                content: plain("TITLE:again"),
            })]
        );
    }

    #[test]
    fn colon_line_is_a_paragraph() {
        assert!(matches!(parse(":term|desc\n")[0], Statement::Paragraph(_)));
    }

    #[test]
    fn empty_text_has_no_statements() {
        assert_eq!(parse(""), vec![]);
        assert_eq!(parse("\n\n// only a comment\n"), vec![]);
    }
}

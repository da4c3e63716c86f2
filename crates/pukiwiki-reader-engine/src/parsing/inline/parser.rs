use crate::{error::ParseError, parsing::cursor::Cursor, render::WikiNode};

use super::{
    kinds::{Bold, Comment, Italic, LinkSyntax, Note, PluginCall, Strike},
    types::{Expression, InlinePlugin, Link},
};

/// Predicate deciding where a construct's content ends.
pub type StopAt<'f> = &'f dyn Fn(&Cursor<'_>) -> Result<bool, ParseError>;

/// Parses inline content up to the end of the current line.
pub fn parse_line(cur: &mut Cursor<'_>) -> Result<Expression, ParseError> {
    parse_inline_until(cur, &|_| Ok(false))
}

/// Parses inline content until the end of input, a newline, or `stop` holds.
///
/// Consecutive ordinary characters are batched into one `Plain` node. When
/// called at the start of a line, any `//` comment lines are skipped first.
///
/// # Returns
/// A single node when only one was produced, otherwise a `Composite`;
/// [`Expression::empty`] when nothing was consumed.
pub fn parse_inline_until(
    cur: &mut Cursor<'_>,
    stop: StopAt<'_>,
) -> Result<Expression, ParseError> {
    if stop(cur)? {
        return Ok(Expression::empty());
    }

    if cur.at_line_start() {
        while cur.starts_with(Comment::PREFIX) {
            cur.take_until_any(&["\n"], true)?;
        }
    }

    let mut out = vec![];
    let mut text = String::new();

    // Helper to flush accumulated text as a Plain node
    fn flush_text(out: &mut Vec<Expression>, text: &mut String) {
        if !text.is_empty() {
            out.push(Expression::Plain(std::mem::take(text)));
        }
    }

    while let Some(c) = cur.current() {
        if c == '\n' {
            break;
        }
        match parse_single(cur)? {
            Some(node) => {
                flush_text(&mut out, &mut text);
                out.push(node);
            }
            None => {
                text.push(c);
                cur.advance();
            }
        }
        if stop(cur)? {
            break;
        }
    }

    flush_text(&mut out, &mut text);
    Ok(Expression::from_parts(out))
}

/// Dispatches on lookahead to the construct starting at the cursor, if any.
///
/// The bold arm is tested before the italic arm and its mark is a prefix of
/// the italic mark, so `'''` always opens bold.
fn parse_single(cur: &mut Cursor<'_>) -> Result<Option<Expression>, ParseError> {
    let node = match cur.current() {
        Some('\'') if cur.starts_with(Bold::MARK) => {
            Expression::Bold(Box::new(parse_enclosed(cur, Bold::MARK, Bold::MARK)?))
        }
        Some('\'') if cur.starts_with(Italic::MARK) => {
            Expression::Italic(Box::new(parse_enclosed(cur, Italic::MARK, Italic::MARK)?))
        }
        Some('%') if cur.starts_with(Strike::MARK) => {
            Expression::Strike(Box::new(parse_enclosed(cur, Strike::MARK, Strike::MARK)?))
        }
        Some('(') if cur.starts_with(Note::OPEN) => {
            Expression::Note(Box::new(parse_enclosed(cur, Note::OPEN, Note::CLOSE)?))
        }
        Some('[') if cur.starts_with(LinkSyntax::OPEN) => parse_link(cur)?,
        Some(PluginCall::PREFIX) if cur.peek(1).is_some_and(PluginCall::starts_name) => {
            parse_plugin(cur)?
        }
        _ => return Ok(None),
    };
    Ok(Some(node))
}

/// Parses `open`, nested inline content, then `close`.
fn parse_enclosed(
    cur: &mut Cursor<'_>,
    open: &str,
    close: &str,
) -> Result<Expression, ParseError> {
    cur.take_literal(open)?;
    let content = parse_inline_until(cur, &|c| c.matches_ahead(&[close], true))?;
    cur.take_literal(close)?;
    Ok(content)
}

/// Parses `[[content]]` or `[[label>target]]`.
///
/// Without an explicit label the target is the content's own markup.
fn parse_link(cur: &mut Cursor<'_>) -> Result<Expression, ParseError> {
    cur.take_literal(LinkSyntax::OPEN)?;

    let content = parse_inline_until(cur, &|c| {
        c.matches_ahead(&[LinkSyntax::LABEL, LinkSyntax::CLOSE], true)
    })?;

    let raw_target = if cur.starts_with(LinkSyntax::LABEL) {
        cur.take_literal(LinkSyntax::LABEL)?;
        cur.take_until_any(&[LinkSyntax::CLOSE], false)?.to_string()
    } else {
        content.serialize()
    };
    cur.take_literal(LinkSyntax::CLOSE)?;

    Ok(Expression::Link(Link::new(content, &raw_target)))
}

/// Parses `&name(args){body};` where the argument list and body are optional.
fn parse_plugin(cur: &mut Cursor<'_>) -> Result<Expression, ParseError> {
    cur.take_literal("&")?;

    let name = cur
        .take_until_any(
            &[
                PluginCall::ARGS_OPEN,
                PluginCall::BODY_OPEN,
                PluginCall::TERMINATOR,
                "\n",
            ],
            false,
        )?
        .to_string();

    let args = if cur.starts_with(PluginCall::ARGS_OPEN) {
        cur.skip(1);
        let raw = cur.take_until_any(&[PluginCall::ARGS_CLOSE], true)?;
        Some(PluginCall::split_args(raw))
    } else {
        None
    };

    let content = if cur.starts_with(PluginCall::BODY_OPEN) {
        cur.skip(1);
        let body = parse_inline_until(cur, &|c| Ok(c.starts_with(PluginCall::BODY_CLOSE)))?;
        cur.take_literal(PluginCall::BODY_CLOSE)?;
        Some(Box::new(body))
    } else {
        None
    };

    cur.take_literal(PluginCall::TERMINATOR)?;

    Ok(Expression::Plugin(InlinePlugin {
        name,
        args,
        content,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Expression {
        parse_line(&mut Cursor::new(s)).unwrap()
    }

    fn plain(s: &str) -> Expression {
        Expression::Plain(s.to_string())
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(parse("hello world"), plain("hello world"));
    }

    #[test]
    fn text_is_batched_around_constructs() {
        assert_eq!(
            parse("a ''b'' c"),
            Expression::Composite(vec![
                plain("a "),
                Expression::Bold(Box::new(plain("b"))),
                plain(" c"),
            ])
        );
    }

    #[test]
    fn stops_at_newline() {
        let mut cur = Cursor::new("first\nsecond");
        assert_eq!(parse_line(&mut cur).unwrap(), plain("first"));
        assert_eq!(cur.current(), Some('\n'));
    }

    #[test]
    fn triple_quote_opens_bold() {
        // `'''` matches the bold mark first; the third quote becomes content.
        assert_eq!(
            parse("'''x'''"),
            Expression::Composite(vec![
                Expression::Bold(Box::new(plain("'x"))),
                plain("'"),
            ])
        );
    }

    #[test]
    fn strike_and_note() {
        assert_eq!(parse("%%gone%%"), Expression::Strike(Box::new(plain("gone"))));
        assert_eq!(parse("((note))"), Expression::Note(Box::new(plain("note"))));
    }

    #[test]
    fn nested_constructs() {
        assert_eq!(
            parse("''%%x%%''"),
            Expression::Bold(Box::new(Expression::Strike(Box::new(plain("x")))))
        );
    }

    #[test]
    fn link_without_label_uses_content_as_target() {
        let Expression::Link(link) = parse("[[FrontPage#top]]") else {
            panic!("expected Link");
        };
        assert_eq!(*link.content, plain("FrontPage#top"));
        assert_eq!(link.target, "FrontPage");
        assert_eq!(link.anchor.as_deref(), Some("top"));
        assert_eq!(link.interwiki, None);
    }

    #[test]
    fn link_with_label() {
        let Expression::Link(link) = parse("[[''Home''>wiki:FrontPage]]") else {
            panic!("expected Link");
        };
        assert_eq!(*link.content, Expression::Bold(Box::new(plain("Home"))));
        assert_eq!(link.target, "FrontPage");
        assert_eq!(link.interwiki.as_deref(), Some("wiki"));
    }

    #[test]
    fn plugin_with_args_and_body() {
        assert_eq!(
            parse("&color(red, blue){''hi''};"),
            Expression::Plugin(InlinePlugin {
                name: "color".into(),
                args: Some(vec!["red".into(), "blue".into()]),
                content: Some(Box::new(Expression::Bold(Box::new(plain("hi"))))),
            })
        );
    }

    #[test]
    fn bare_plugin() {
        assert_eq!(
            parse("a&br;b"),
            Expression::Composite(vec![
                plain("a"),
                Expression::Plugin(InlinePlugin {
                    name: "br".into(),
                    args: None,
                    content: None,
                }),
                plain("b"),
            ])
        );
    }

    #[test]
    fn ampersand_before_space_is_text() {
        assert_eq!(parse("a & b"), plain("a & b"));
    }

    #[test]
    fn unterminated_plugin_is_an_error() {
        let err = parse_line(&mut Cursor::new("&br\n")).unwrap_err();
        assert!(matches!(err, ParseError::TokenExpected { ref found, .. } if found == "NEWLINE"));
    }

    #[test]
    fn unclosed_bold_is_an_error() {
        let err = parse_line(&mut Cursor::new("''open\n")).unwrap_err();
        assert_eq!(
            err,
            ParseError::TokenExpected {
                found: "NEWLINE".into(),
                expected: vec!["''".into()],
                line: 1,
                column: 7,
            }
        );
    }

    #[test]
    fn comment_lines_are_skipped_at_line_start() {
        let mut cur = Cursor::new("// one\n// two\ntext");
        assert_eq!(parse_line(&mut cur).unwrap(), plain("text"));
    }

    #[test]
    fn slashes_mid_line_are_text() {
        assert_eq!(parse("see http://x"), plain("see http://x"));
    }

    #[test]
    fn stop_predicate_is_checked_first() {
        let mut cur = Cursor::new("|rest");
        let expr = parse_inline_until(&mut cur, &|c| Ok(c.is_at('|'))).unwrap();
        assert!(expr.is_empty());
        assert_eq!(cur.pos(), 0);
    }
}

/// A parsed inline node.
///
/// Children are owned by value; a node is never mutated once its parser returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// Text that isn't part of any special construct.
    Plain(String),
    /// `''text''`
    Bold(Box<Expression>),
    /// `'''text'''`
    Italic(Box<Expression>),
    /// `%%text%%`
    Strike(Box<Expression>),
    /// `((text))`, a footnote.
    Note(Box<Expression>),
    /// `[[label>target]]` or `[[target]]`.
    Link(Link),
    /// `&name(args){content};`
    Plugin(InlinePlugin),
    /// A run of inline nodes rendered back to back.
    Composite(Vec<Expression>),
}

/// A wiki link with its target already split into parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Display label.
    pub content: Box<Expression>,
    /// Page or URL without the interwiki prefix and anchor.
    pub target: String,
    /// Text before the first `:` of the raw target, if any.
    pub interwiki: Option<String>,
    /// Text after the first `#` of the target, if any.
    pub anchor: Option<String>,
}

/// An inline plugin call such as `&color(red){text};`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlinePlugin {
    pub name: String,
    /// Comma-separated, whitespace-trimmed arguments; `None` when no parentheses were given.
    pub args: Option<Vec<String>>,
    /// Body between braces, parsed as inline content.
    pub content: Option<Box<Expression>>,
}

impl Expression {
    /// An expression that renders and serializes to nothing.
    pub fn empty() -> Self {
        Expression::Composite(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Expression::Composite(children) => children.iter().all(Expression::is_empty),
            Expression::Plain(text) => text.is_empty(),
            _ => false,
        }
    }

    /// Collapses a list of parts: none gives [`Expression::empty`], one gives the part itself.
    pub fn from_parts(mut parts: Vec<Expression>) -> Self {
        match parts.len() {
            0 => Expression::empty(),
            1 => parts.remove(0),
            _ => Expression::Composite(parts),
        }
    }
}

impl Link {
    /// Builds a link from its label and the raw target text.
    ///
    /// The raw target is split on the first `:` into an interwiki prefix (only
    /// when a `:` is present), then the remainder on the first `#` into the
    /// target and an anchor.
    pub fn new(content: Expression, raw_target: &str) -> Self {
        let (interwiki, rest) = match raw_target.split_once(':') {
            Some((prefix, rest)) => (Some(prefix.to_string()), rest),
            None => (None, raw_target),
        };
        let (target, anchor) = match rest.split_once('#') {
            Some((target, anchor)) => (target.to_string(), Some(anchor.to_string())),
            None => (rest.to_string(), None),
        };
        Self {
            content: Box::new(content),
            target,
            interwiki,
            anchor,
        }
    }

    /// The target as written in markup, with prefix and anchor restored.
    pub fn raw_target(&self) -> String {
        let mut raw = String::new();
        if let Some(prefix) = &self.interwiki {
            raw.push_str(prefix);
            raw.push(':');
        }
        raw.push_str(&self.target);
        if let Some(anchor) = &self.anchor {
            raw.push('#');
            raw.push_str(anchor);
        }
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("FrontPage", None, "FrontPage", None)]
    #[case("FrontPage#top", None, "FrontPage", Some("top"))]
    #[case("wiki:Page", Some("wiki"), "Page", None)]
    #[case("wiki:Page#sec", Some("wiki"), "Page", Some("sec"))]
    #[case("#local", None, "", Some("local"))]
    #[case("a:b:c#d#e", Some("a"), "b:c", Some("d#e"))]
    fn link_target_is_split(
        #[case] raw: &str,
        #[case] interwiki: Option<&str>,
        #[case] target: &str,
        #[case] anchor: Option<&str>,
    ) {
        let link = Link::new(Expression::Plain(raw.into()), raw);
        assert_eq!(link.interwiki.as_deref(), interwiki);
        assert_eq!(link.target, target);
        assert_eq!(link.anchor.as_deref(), anchor);
        assert_eq!(link.raw_target(), raw);
    }

    #[test]
    fn from_parts_collapses() {
        assert_eq!(Expression::from_parts(vec![]), Expression::empty());
        assert_eq!(
            Expression::from_parts(vec![Expression::Plain("x".into())]),
            Expression::Plain("x".into())
        );
        assert!(matches!(
            Expression::from_parts(vec![
                Expression::Plain("x".into()),
                Expression::Plain("y".into())
            ]),
            Expression::Composite(ref parts) if parts.len() == 2
        ));
    }

    #[test]
    fn empty_detection() {
        assert!(Expression::empty().is_empty());
        assert!(Expression::Plain(String::new()).is_empty());
        assert!(!Expression::Bold(Box::new(Expression::empty())).is_empty());
    }
}

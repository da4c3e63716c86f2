/// Inline plugin call syntax, `&name(arg, arg){body};`.
pub struct PluginCall;

impl PluginCall {
    pub const PREFIX: char = '&';
    pub const ARGS_OPEN: &'static str = "(";
    pub const ARGS_CLOSE: &'static str = ")";
    pub const ARG_SEPARATOR: char = ',';
    pub const BODY_OPEN: &'static str = "{";
    pub const BODY_CLOSE: &'static str = "}";
    pub const TERMINATOR: &'static str = ";";

    /// Whether `c` may follow `&` to start a plugin name.
    ///
    /// `#` is allowed so that character references like `&#9731;` reach the
    /// entity handler.
    pub fn starts_name(c: char) -> bool {
        c.is_alphanumeric() || c == '_' || c == '#'
    }

    /// Splits a raw argument list on commas and trims each argument.
    pub fn split_args(raw: &str) -> Vec<String> {
        raw.split(Self::ARG_SEPARATOR)
            .map(|arg| arg.trim().to_string())
            .collect()
    }
}

pub struct BlockPluginSyntax;

impl BlockPluginSyntax {
    pub const PREFIX: char = '#';
    pub const ARGS_OPEN: &'static str = "(";
    pub const ARGS_CLOSE: &'static str = ")";
    /// Opens a raw body; must end its line.
    pub const BODY_OPEN: &'static str = "{{\n";
    /// Closes a raw body; must start its line.
    pub const BODY_CLOSE: &'static str = "\n}}";
    /// Closes an empty body, directly after `BODY_OPEN`.
    pub const EMPTY_BODY_CLOSE: &'static str = "}}";
}

/// The default bound on nesting, see [ParserConfig::max_depth].
///
/// Low enough that parsing, printing and dropping the deepest accepted tree fit in the 2 MiB stack
/// of a spawned thread, in debug builds too.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options controlling the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    max_depth: usize,
    allow_trailing_semicolon: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_trailing_semicolon: false,
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of grammar rules that may be nested. Every operator of a `+ -` or
    /// `* /` chain counts as one more level, so this also bounds the depth of the syntax tree.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Accept a `;` directly before `end`, `until` or the end of input
    pub fn with_trailing_semicolon(mut self, allow: bool) -> Self {
        self.allow_trailing_semicolon = allow;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn allow_trailing_semicolon(&self) -> bool {
        self.allow_trailing_semicolon
    }
}

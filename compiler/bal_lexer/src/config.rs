//! Lexer configuration.

use bal_lexer_core::DEFAULT_MAX_DEPTH;

/// Environment variable overriding [`LexerConfig::max_nesting_depth`].
pub const MAX_DEPTH_ENV: &str = "BAL_LEXER_MAX_DEPTH";

/// Tunables for one lexer run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LexerConfig {
    /// Maximum mode-stack depth, the `DEFAULT` floor included. An opener
    /// that would go deeper is an error token and opens nothing.
    pub max_nesting_depth: u32,
    /// Whether [`lex`](crate::lex) keeps whitespace, newline and comment
    /// tokens. The streaming [`Lexer`](crate::Lexer) always yields them.
    pub keep_trivia: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_DEPTH,
            keep_trivia: true,
        }
    }
}

impl LexerConfig {
    #[must_use]
    pub fn with_max_nesting_depth(mut self, depth: u32) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    #[must_use]
    pub fn with_keep_trivia(mut self, keep: bool) -> Self {
        self.keep_trivia = keep;
        self
    }

    /// Defaults, with `BAL_LEXER_MAX_DEPTH` applied when it is set and
    /// parses as a positive integer.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(MAX_DEPTH_ENV).ok().as_deref())
    }

    fn from_env_value(max_depth: Option<&str>) -> Self {
        let config = Self::default();
        match max_depth.map(str::trim).map(str::parse::<u32>) {
            Some(Ok(depth)) if depth > 0 => config.with_max_nesting_depth(depth),
            Some(_) => {
                tracing::debug!(
                    value = max_depth.unwrap_or_default(),
                    "ignoring invalid {MAX_DEPTH_ENV}"
                );
                config
            }
            None => config,
        }
    }
}

// Color scale module
// Ordered color tokens from lowest to highest intensity

use serde::{Deserialize, Serialize};

/// Neutral token used for out-of-range cells and for an empty scale.
pub const NEUTRAL_COLOR: &str = "#ebedf0";

/// GitHub contribution greens, low to high.
pub const DEFAULT_COLOR_SCHEME: [&str; 5] = ["#ebedf0", "#c6e48b", "#7bc96f", "#239a3b", "#196127"];

/// Ordered sequence of opaque color tokens.
///
/// Tokens are not interpreted; an empty scale is valid and maps every value to
/// the neutral token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorScale {
    tokens: Vec<String>,
}

impl ColorScale {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn empty() -> Self {
        Self { tokens: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    pub fn first(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    /// Highest-intensity token
    pub fn last(&self) -> Option<&str> {
        self.tokens.last().map(String::as_str)
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR_SCHEME)
    }
}

impl From<Vec<String>> for ColorScale {
    fn from(tokens: Vec<String>) -> Self {
        Self { tokens }
    }
}

use std::fmt;

const SUPPORTED_FORMATS: &str = "\
Supported formats for string input are:

- #rgb
- #rrggbb
- #rrggbbaa
- rgb(r, g, b)       (0 <= rgb <= 255)
- rgba(r, g, b, a)   (0 <= rgb <= 255, 0 <= a <= 1)

Supported formats for array input are:

- [r, g, b]          (0 <= rgb <= 255)
- [r, g, b, a]       (0 <= rgb <= 255, 0 <= a <= 1)

Keyword/system colors are not supported (nor consistent across environments).";

/// A color value that matches none of the recognized input shapes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnsupportedFormat {
    input: String,
}

impl UnsupportedFormat {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self { input: input.into() }
    }

    /// Rendering of the rejected input: the original string, or `[r, g, b]`
    /// for numeric tuples.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for UnsupportedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Expected color to be in a supported format, actual: {}.\n\n{}",
            self.input, SUPPORTED_FORMATS
        )
    }
}

impl std::error::Error for UnsupportedFormat {}

use std::fmt::{Display, Formatter, Result as FormatResult};
use std::panic::Location as PanicLocation;

/// Source position where an error value was constructed.
///
/// Captured through `#[track_caller]` so the position points at the code that
/// raised the error rather than at the error constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorLocation {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl ErrorLocation {
    pub const fn from(location: &'static PanicLocation<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }

    /// Final path component of the source file (`"mod.rs"` for `"src/api_client/mod.rs"`).
    pub fn file_name(&self) -> &'static str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file)
    }
}

impl Display for ErrorLocation {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        write!(formatter, "[{}:{}:{}]", self.file, self.line, self.column)
    }
}

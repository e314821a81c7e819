//! Output formatting for scan results.

pub mod json;
pub mod text;

/// Output formatting options.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Also show the outermost-only view of the report.
    pub outermost: bool,
    /// Single-line JSON.
    pub compact: bool,
}

impl FormatOptions {
    /// Options that include the outermost view.
    pub fn with_outermost(mut self, outermost: bool) -> Self {
        self.outermost = outermost;
        self
    }

    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }
}

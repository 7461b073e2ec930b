use is_terminal::IsTerminal;

/// Display formatting options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub enable_color: bool,
    /// Maximum characters for free-form cells such as run results
    pub truncate_text: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            enable_color: false,
            truncate_text: 40,
        }
    }
}

impl FormatOptions {
    /// Colour only when stdout is a terminal, `NO_COLOR` is unset and the
    /// config allows it.
    pub fn for_stdout(color_allowed: bool) -> Self {
        let enable_color = color_allowed
            && std::env::var_os("NO_COLOR").is_none()
            && std::io::stdout().is_terminal();
        Self {
            enable_color,
            ..Self::default()
        }
    }
}

//! Shortcut labels shown in help text

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Section navigation shortcut displays
pub const NEXT_SECTION_SHORTCUT: &str = "Ctrl+N";
pub const PREV_SECTION_SHORTCUT: &str = "Ctrl+P";

/// Copy link shortcut display (Ctrl+C is quit)
pub const COPY_SHORTCUT: &str = "c";

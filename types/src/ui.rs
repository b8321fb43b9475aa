//! Presentation options shared between the engine and the TUI.

use serde::{Deserialize, Serialize};

/// User-facing rendering toggles, resolved from configuration at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiOptions {
    /// Use ASCII-only glyphs for lines, icons, and spinners.
    pub ascii_only: bool,
    /// Use a high-contrast color palette.
    pub high_contrast: bool,
    /// Disable the line-reveal animation and spinner motion.
    pub reduced_motion: bool,
}

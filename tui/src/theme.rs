//! Color theme and glyphs for the hexcast TUI.
//!
//! Dark slate palette with a gold primary and sky accents, plus an optional
//! high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use hexcast_types::ui::UiOptions;

/// Default palette constants.
mod colors {
    use super::Color;

    // === Backgrounds (slate) ===
    pub const BG_DARK: Color = Color::Rgb(17, 24, 39);
    pub const BG_PANEL: Color = Color::Rgb(31, 41, 55);
    pub const BG_POPUP: Color = Color::Rgb(40, 52, 70);
    pub const BG_BORDER: Color = Color::Rgb(75, 85, 99);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(243, 244, 246);
    pub const TEXT_SECONDARY: Color = Color::Rgb(209, 213, 219);
    pub const TEXT_MUTED: Color = Color::Rgb(140, 148, 160);

    // === Primary/Brand ===
    pub const PRIMARY: Color = Color::Rgb(250, 204, 21); // gold
    pub const ACCENT: Color = Color::Rgb(125, 211, 252); // sky

    // === Semantic ===
    pub const SUCCESS: Color = Color::Rgb(134, 239, 172);
    pub const WARNING: Color = Color::Rgb(251, 191, 36);
    pub const ERROR: Color = Color::Rgb(248, 113, 113);

    // === Cast lines ===
    pub const LINE: Color = Color::Rgb(229, 231, 235);
    pub const LINE_CHANGING: Color = Color::Rgb(250, 204, 21);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_popup: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub line: Color,
    pub line_changing: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_popup: colors::BG_POPUP,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            accent: colors::ACCENT,
            success: colors::SUCCESS,
            warning: colors::WARNING,
            error: colors::ERROR,
            line: colors::LINE,
            line_changing: colors::LINE_CHANGING,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_popup: Color::Black,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            primary: Color::Yellow,
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            line: Color::White,
            line_changing: Color::Yellow,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for lines, icons, and spinners.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    /// Solid (yang) cast line.
    pub line_solid: &'static str,
    /// Broken (yin) cast line.
    pub line_broken: &'static str,
    /// Slot for a line not yet revealed.
    pub line_pending: &'static str,
    /// Marker for an old yang line (changing).
    pub changing_yang: &'static str,
    /// Marker for an old yin line (changing).
    pub changing_yin: &'static str,
    pub bullet: &'static str,
    pub selected: &'static str,
    pub scroll_hint: &'static str,
    pub spinner_frames: &'static [&'static str],
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAMES_ASCII: &[&str] = &["|", "/", "-", "\\"];

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            line_solid: "=========",
            line_broken: "===   ===",
            line_pending: ". . . . .",
            changing_yang: "o",
            changing_yin: "x",
            bullet: "*",
            selected: ">",
            scroll_hint: "^/v",
            spinner_frames: SPINNER_FRAMES_ASCII,
        }
    } else {
        Glyphs {
            line_solid: "━━━━━━━━━",
            line_broken: "━━━   ━━━",
            line_pending: "· · · · ·",
            changing_yang: "○",
            changing_yin: "✕",
            bullet: "•",
            selected: "▸",
            scroll_hint: "↑/↓",
            spinner_frames: SPINNER_FRAMES,
        }
    }
}

/// When `reduced_motion` is enabled, returns a static glyph instead of cycling.
#[must_use]
pub fn spinner_frame(tick: u64, options: UiOptions) -> &'static str {
    let frames = glyphs(options).spinner_frames;
    if options.reduced_motion {
        return frames[0];
    }
    frames[(tick / 4) as usize % frames.len()]
}

/// Shared style helpers.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn subtitle(palette: &Palette) -> Style {
        Style::default().fg(palette.accent)
    }

    #[must_use]
    pub fn hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn error(palette: &Palette) -> Style {
        Style::default().fg(palette.error)
    }
}

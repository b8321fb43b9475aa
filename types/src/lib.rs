//! Core domain types for hexcast.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

mod ids;
pub mod ui;

pub use ids::CastId;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// Lines
// ============================================================================

/// Visual kind of a cast line: solid (yang) or broken (yin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    Solid,
    Broken,
}

impl LineKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            LineKind::Solid => "solid",
            LineKind::Broken => "broken",
        }
    }
}

/// A toss value outside the three-coin range 6..=9.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("toss value {0} is outside the three-coin range 6..=9")]
pub struct InvalidTossValue(pub u8);

/// One classified line of a hexagram, produced by a single three-coin trial.
///
/// The only way to build a `Line` is [`Line::from_toss_value`], so kind,
/// value, and changing flag are always mutually consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Line {
    kind: LineKind,
    value: u8,
    changing: bool,
}

impl Line {
    /// Classify the sum of one three-coin trial.
    ///
    /// - 6: old yin - broken, changing
    /// - 7: young yang - solid
    /// - 8: young yin - broken
    /// - 9: old yang - solid, changing
    pub fn from_toss_value(value: u8) -> Result<Self, InvalidTossValue> {
        let (kind, changing) = match value {
            6 => (LineKind::Broken, true),
            7 => (LineKind::Solid, false),
            8 => (LineKind::Broken, false),
            9 => (LineKind::Solid, true),
            other => return Err(InvalidTossValue(other)),
        };
        Ok(Self {
            kind,
            value,
            changing,
        })
    }

    #[must_use]
    pub const fn kind(&self) -> LineKind {
        self.kind
    }

    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    #[must_use]
    pub const fn is_changing(&self) -> bool {
        self.changing
    }

    #[must_use]
    pub const fn is_solid(&self) -> bool {
        matches!(self.kind, LineKind::Solid)
    }
}

// ============================================================================
// Trigrams
// ============================================================================

/// The eight trigram identities of the Ba Gua.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrigramId {
    Qian,
    Kun,
    Zhen,
    Xun,
    Kan,
    Li,
    Gen,
    Dui,
}

impl TrigramId {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TrigramId::Qian => "qian",
            TrigramId::Kun => "kun",
            TrigramId::Zhen => "zhen",
            TrigramId::Xun => "xun",
            TrigramId::Kan => "kan",
            TrigramId::Li => "li",
            TrigramId::Gen => "gen",
            TrigramId::Dui => "dui",
        }
    }

    /// Parse a trigram id from its lowercase name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "qian" => Some(TrigramId::Qian),
            "kun" => Some(TrigramId::Kun),
            "zhen" => Some(TrigramId::Zhen),
            "xun" => Some(TrigramId::Xun),
            "kan" => Some(TrigramId::Kan),
            "li" => Some(TrigramId::Li),
            "gen" => Some(TrigramId::Gen),
            "dui" => Some(TrigramId::Dui),
            _ => None,
        }
    }

    #[must_use]
    pub fn all() -> &'static [TrigramId] {
        &[
            TrigramId::Qian,
            TrigramId::Kun,
            TrigramId::Zhen,
            TrigramId::Xun,
            TrigramId::Kan,
            TrigramId::Li,
            TrigramId::Gen,
            TrigramId::Dui,
        ]
    }
}

impl fmt::Display for TrigramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three-line configuration of a trigram, bottom to top.
///
/// `true` is a solid (yang) line, `false` a broken (yin) line. The three
/// booleans pack into a 3-bit key (bottom is bit 0), giving each of the
/// eight possible configurations a distinct slot in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineTriple {
    bottom: bool,
    middle: bool,
    top: bool,
}

impl LineTriple {
    /// Number of distinct line configurations (2^3).
    pub const COUNT: usize = 8;

    #[must_use]
    pub const fn new(bottom: bool, middle: bool, top: bool) -> Self {
        Self {
            bottom,
            middle,
            top,
        }
    }

    /// 3-bit table key in `0..8`; bottom line is the least significant bit.
    #[must_use]
    pub const fn key(&self) -> usize {
        (self.bottom as usize) | ((self.middle as usize) << 1) | ((self.top as usize) << 2)
    }

    /// Inverse of [`LineTriple::key`].
    #[must_use]
    pub const fn from_key(key: usize) -> Option<Self> {
        if key >= Self::COUNT {
            return None;
        }
        Some(Self {
            bottom: key & 0b001 != 0,
            middle: key & 0b010 != 0,
            top: key & 0b100 != 0,
        })
    }

    #[must_use]
    pub const fn bottom(&self) -> bool {
        self.bottom
    }

    #[must_use]
    pub const fn middle(&self) -> bool {
        self.middle
    }

    #[must_use]
    pub const fn top(&self) -> bool {
        self.top
    }
}

impl fmt::Display for LineTriple {
    /// Renders bottom-to-top as yang/yin digits, e.g. `101`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for solid in [self.bottom, self.middle, self.top] {
            f.write_str(if solid { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Musical interpretation prose attached to a trigram.
///
/// Opaque payload from the content table; the cast engine never inspects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MusicalElements {
    pub scales_melody: &'static str,
    pub texture: &'static str,
    pub polyrhythm: &'static str,
}

/// SuperCollider sketches attached to a trigram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuperColliderIdeas {
    pub concept: &'static str,
    pub synth_example: &'static str,
    pub pattern_example: &'static str,
}

/// One of the eight fixed trigram records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Trigram {
    pub id: TrigramId,
    /// Spanish display name, e.g. "Cielo".
    pub name: &'static str,
    /// Chinese character and romanization, e.g. "乾 Qián".
    pub chinese_name: &'static str,
    /// Unicode trigram glyph, e.g. "☰".
    pub symbol: &'static str,
    pub lines: LineTriple,
    pub musical: MusicalElements,
    pub ideas: SuperColliderIdeas,
}

// ============================================================================
// Hexagrams
// ============================================================================

/// The fully resolved result of one cast: six classified lines and the two
/// trigrams they project onto.
///
/// Lines are stored in trial order (index 0 is the bottom line). Indices
/// 0..=2 are the lower trigram, 3..=5 the upper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hexagram {
    pub lines: [Line; 6],
    pub lower: Trigram,
    pub upper: Trigram,
}

impl Hexagram {
    /// Projection of lines 0..=2 to the lower trigram's configuration.
    #[must_use]
    pub fn lower_triple(&self) -> LineTriple {
        LineTriple::new(
            self.lines[0].is_solid(),
            self.lines[1].is_solid(),
            self.lines[2].is_solid(),
        )
    }

    /// Projection of lines 3..=5 to the upper trigram's configuration.
    #[must_use]
    pub fn upper_triple(&self) -> LineTriple {
        LineTriple::new(
            self.lines[3].is_solid(),
            self.lines[4].is_solid(),
            self.lines[5].is_solid(),
        )
    }
}

// ============================================================================
// API Keys
// ============================================================================

/// An API key for the narration service.
///
/// Wrapped so the secret never appears in `Debug` output or logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn expose_secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiKey, InvalidTossValue, Line, LineKind, LineTriple, TrigramId};

    #[test]
    fn line_classification_table() {
        let old_yin = Line::from_toss_value(6).unwrap();
        assert_eq!(old_yin.kind(), LineKind::Broken);
        assert!(old_yin.is_changing());

        let young_yang = Line::from_toss_value(7).unwrap();
        assert_eq!(young_yang.kind(), LineKind::Solid);
        assert!(!young_yang.is_changing());

        let young_yin = Line::from_toss_value(8).unwrap();
        assert_eq!(young_yin.kind(), LineKind::Broken);
        assert!(!young_yin.is_changing());

        let old_yang = Line::from_toss_value(9).unwrap();
        assert_eq!(old_yang.kind(), LineKind::Solid);
        assert!(old_yang.is_changing());
    }

    #[test]
    fn line_rejects_out_of_range_values() {
        assert_eq!(Line::from_toss_value(5), Err(InvalidTossValue(5)));
        assert_eq!(Line::from_toss_value(10), Err(InvalidTossValue(10)));
        assert_eq!(Line::from_toss_value(0), Err(InvalidTossValue(0)));
    }

    #[test]
    fn line_value_preserved() {
        for value in 6..=9 {
            assert_eq!(Line::from_toss_value(value).unwrap().value(), value);
        }
    }

    #[test]
    fn triple_key_round_trips() {
        for key in 0..LineTriple::COUNT {
            let triple = LineTriple::from_key(key).unwrap();
            assert_eq!(triple.key(), key);
        }
        assert!(LineTriple::from_key(8).is_none());
    }

    #[test]
    fn triple_key_is_bottom_first() {
        assert_eq!(LineTriple::new(true, false, false).key(), 0b001);
        assert_eq!(LineTriple::new(false, true, false).key(), 0b010);
        assert_eq!(LineTriple::new(false, false, true).key(), 0b100);
    }

    #[test]
    fn triple_display_is_bottom_to_top() {
        assert_eq!(LineTriple::new(true, false, true).to_string(), "101");
    }

    #[test]
    fn trigram_id_parse_round_trips() {
        for id in TrigramId::all() {
            assert_eq!(TrigramId::parse(id.as_str()), Some(*id));
        }
        assert_eq!(TrigramId::parse("QIAN"), Some(TrigramId::Qian));
        assert_eq!(TrigramId::parse("unknown"), None);
    }

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::new("AIza-secret");
        let formatted = format!("{key:?}");
        assert!(!formatted.contains("secret"));
        assert_eq!(key.expose_secret(), "AIza-secret");
    }
}

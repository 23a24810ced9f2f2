// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// You can get the unicode symbols for the drawings here:
// - <https://symbl.cc/en/unicode/blocks/box-drawing/>
// - <https://symbl.cc/en/unicode/blocks/miscellaneous-symbols/>

use strum_macros::{Display, EnumIter, EnumString};

/// Trailing glyph that is painted inside the box when the field is in the error state.
pub const ERROR_GLYPH: &str = "⚠";

pub const SPACER: &str = " ";

/// Which set of box drawing glyphs is used to paint the outline of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
pub enum BorderStyle {
    /// `╭─╮ │ ╰─╯`
    #[default]
    Rounded,
    /// `┏━┓ ┃ ┗━┛`, used for the error variant.
    Heavy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum BorderGlyphCharacter {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Horizontal,
    Vertical,
}

impl BorderGlyphCharacter {
    #[must_use]
    pub fn as_str(self, style: BorderStyle) -> &'static str {
        use BorderGlyphCharacter::{BottomLeft, BottomRight, Horizontal, TopLeft,
                                   TopRight, Vertical};
        match style {
            BorderStyle::Rounded => match self {
                TopLeft => "╭",
                TopRight => "╮",
                BottomLeft => "╰",
                BottomRight => "╯",
                Horizontal => "─",
                Vertical => "│",
            },
            BorderStyle::Heavy => match self {
                TopLeft => "┏",
                TopRight => "┓",
                BottomLeft => "┗",
                BottomRight => "┛",
                Horizontal => "━",
                Vertical => "┃",
            },
        }
    }
}

//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

use crate::consts::{CSI, ESC};
use crate::parser::read_parameters;
use crate::{SgrConfig, SgrError, SgrResult};
use bitflags::bitflags;

/// The resolved graphic rendition of a single character.
///
/// A `Style` is a plain `Copy` value. The scanner hands out a fresh snapshot
/// with every character, so a style held by the caller never changes when the
/// scanner processes later sequences.
///
/// # Default Values
///
/// The default style has no attributes and both colors [`Color::Unset`]:
///
/// ```rust
/// use ansisgr::{Color, Style};
///
/// let style = Style::default();
/// assert_eq!(style.foreground(), Color::Unset);
/// assert_eq!(style.background(), Color::Unset);
/// assert!(!style.bold());
/// ```
///
/// # Reset vs. Untouched
///
/// A full reset (`\x1b[0m`) does not return a style to its default. Both colors
/// become [`Color::DEFAULT`] (`Sixteen(0)`), which reports as set, so a
/// consumer can tell "explicitly reset to the terminal default" apart from
/// "never mentioned".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    /// Foreground color of the text.
    ///
    /// | Code         | Description      |
    /// |--------------|------------------|
    /// | `30`–`37`    | Basic            |
    /// | `90`–`97`    | Bright           |
    /// | `38;5;n`     | 8-bit indexed    |
    /// | `38;2;r;g;b` | 24-bit RGB       |
    /// | `39`         | Terminal default |
    foreground: Color,
    /// Background color of the text.
    ///
    /// | Code         | Description      |
    /// |--------------|------------------|
    /// | `40`–`47`    | Basic            |
    /// | `100`–`107`  | Bright           |
    /// | `48;5;n`     | 8-bit indexed    |
    /// | `48;2;r;g;b` | 24-bit RGB       |
    /// | `49`         | Terminal default |
    background: Color,
    /// Text attributes.
    attributes: Attributes,
}

impl Style {
    /// Parses exactly one complete SGR sequence and applies it to a default style.
    ///
    /// Unlike [`StyledChars`](crate::StyledChars), this is strict: the input
    /// must start with `ESC [`, contain only digits and separators, and end
    /// with the terminating `m`.
    ///
    /// ```rust
    /// use ansisgr::{Color, Style};
    ///
    /// let style = Style::from_sgr("\x1b[1;38;5;45m").unwrap();
    /// assert!(style.bold());
    /// assert_eq!(style.foreground(), Color::TwoFiftySix(45));
    /// ```
    pub fn from_sgr(sequence: &str) -> SgrResult<Style> {
        let mut chars = sequence.char_indices();
        match (chars.next(), chars.next()) {
            (Some((_, ESC)), Some((_, CSI))) => {}
            _ => return Err(SgrError::MissingIntroducer { position: 0 }),
        }

        let mut params = Vec::new();
        read_parameters(&mut chars, &mut params, &SgrConfig::default(), 0)?;
        if let Some((position, _)) = chars.next() {
            return Err(SgrError::TrailingInput { position });
        }

        let mut style = Style::default();
        style.apply(&params);
        Ok(style)
    }

    /// Applies a list of SGR parameters to this style.
    ///
    /// An empty list behaves like `[0]`. Unknown codes and malformed extended
    /// colors are ignored without affecting the rest of the list.
    pub fn apply(&mut self, params: &[u32]) {
        crate::sgr::interpret(self, params);
    }

    /// Applies code `0`: clears every attribute and sets both colors to
    /// [`Color::DEFAULT`].
    pub fn reset(&mut self) {
        self.foreground = Color::DEFAULT;
        self.background = Color::DEFAULT;
        self.attributes = Attributes::empty();
    }

    /// Returns `true` if no sequence has touched this style.
    pub fn is_default(&self) -> bool {
        *self == Style::default()
    }

    /// Foreground color.
    pub fn foreground(&self) -> Color {
        self.foreground
    }

    /// Background color.
    pub fn background(&self) -> Color {
        self.background
    }

    /// All active attributes.
    pub fn attributes(&self) -> Attributes {
        self.attributes
    }

    pub fn bold(&self) -> bool {
        self.attributes.contains(Attributes::BOLD)
    }

    pub fn dim(&self) -> bool {
        self.attributes.contains(Attributes::DIM)
    }

    pub fn italic(&self) -> bool {
        self.attributes.contains(Attributes::ITALIC)
    }

    pub fn underline(&self) -> bool {
        self.attributes.contains(Attributes::UNDERLINE)
    }

    pub fn blink(&self) -> bool {
        self.attributes.contains(Attributes::BLINK)
    }

    pub fn reverse(&self) -> bool {
        self.attributes.contains(Attributes::REVERSE)
    }

    pub fn invisible(&self) -> bool {
        self.attributes.contains(Attributes::INVISIBLE)
    }

    pub fn strikethrough(&self) -> bool {
        self.attributes.contains(Attributes::STRIKETHROUGH)
    }

    pub(crate) fn set_foreground(&mut self, color: Color) {
        self.foreground = color;
    }

    pub(crate) fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    pub(crate) fn insert(&mut self, attributes: Attributes) {
        self.attributes.insert(attributes);
    }

    pub(crate) fn remove(&mut self, attributes: Attributes) {
        self.attributes.remove(attributes);
    }
}

bitflags! {
    /// Boolean text attributes toggled by SGR codes.
    ///
    /// | Set | Clear | Attribute     |
    /// |-----|-------|---------------|
    /// | `1` | `22`  | Bold          |
    /// | `2` | `22`  | Dim           |
    /// | `3` | `23`  | Italic        |
    /// | `4` | `24`  | Underline     |
    /// | `5` | `25`  | Blink         |
    /// | `7` | `27`  | Reverse       |
    /// | `8` | `28`  | Invisible     |
    /// | `9` | `29`  | Strikethrough |
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Attributes: u8 {
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const REVERSE = 1 << 5;
        const INVISIBLE = 1 << 6;
        const STRIKETHROUGH = 1 << 7;
    }
}

/// Wire encoding of a [`Color`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Never set
    #[default]
    None,
    /// Basic and bright colors (`30`–`37`, `90`–`97`, `40`–`47`, `100`–`107`)
    Sixteen,
    /// Indexed palette (`38;5;n`, `48;5;n`)
    TwoFiftySix,
    /// 24-bit color (`38;2;r;g;b`, `48;2;r;g;b`)
    Rgb,
}

/// A foreground or background color as it appeared on the wire.
///
/// # Examples
///
/// ```rust
/// use ansisgr::{Color, ColorMode};
///
/// let color = Color::Rgb(0x00, 0x33, 0x66);
/// assert_eq!(color.mode(), ColorMode::Rgb);
/// assert_eq!(color.value(), 0x003366);
/// assert_eq!(color.rgb(), Some((0x00, 0x33, 0x66)));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    /// Not mentioned by any sequence so far.
    #[default]
    Unset,
    /// Raw 16-color SGR code, or `0` for the terminal default.
    Sixteen(u8),
    /// Palette index.
    TwoFiftySix(u8),
    /// Red, green and blue channels.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Color produced by a reset (`0`, `39`, `49`): the terminal default.
    pub const DEFAULT: Color = Color::Sixteen(0);

    /// Builds an RGB color from a packed `0xRRGGBB` value. Bits above the low
    /// 24 are ignored.
    pub fn from_packed(value: u32) -> Color {
        let [_, red, green, blue] = value.to_be_bytes();
        Color::Rgb(red, green, blue)
    }

    /// Returns the wire encoding of this color.
    pub fn mode(&self) -> ColorMode {
        match self {
            Color::Unset => ColorMode::None,
            Color::Sixteen(_) => ColorMode::Sixteen,
            Color::TwoFiftySix(_) => ColorMode::TwoFiftySix,
            Color::Rgb(..) => ColorMode::Rgb,
        }
    }

    /// Returns the numeric value of this color.
    ///
    /// The SGR code for [`Color::Sixteen`], the palette index for
    /// [`Color::TwoFiftySix`], the packed `0xRRGGBB` value for [`Color::Rgb`],
    /// and `0` for [`Color::Unset`].
    pub fn value(&self) -> u32 {
        match *self {
            Color::Unset => 0,
            Color::Sixteen(code) => u32::from(code),
            Color::TwoFiftySix(index) => u32::from(index),
            Color::Rgb(red, green, blue) => u32::from_be_bytes([0, red, green, blue]),
        }
    }

    /// Returns `true` for every color except [`Color::Unset`], including an
    /// explicit reset to the terminal default.
    pub fn is_set(&self) -> bool {
        !matches!(self, Color::Unset)
    }

    /// Returns the channels of an RGB color.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        match *self {
            Color::Rgb(red, green, blue) => Some((red, green, blue)),
            _ => None,
        }
    }

    /// Red channel of an RGB color.
    pub fn red(&self) -> Option<u8> {
        self.rgb().map(|(red, _, _)| red)
    }

    /// Green channel of an RGB color.
    pub fn green(&self) -> Option<u8> {
        self.rgb().map(|(_, green, _)| green)
    }

    /// Blue channel of an RGB color.
    pub fn blue(&self) -> Option<u8> {
        self.rgb().map(|(_, _, blue)| blue)
    }
}

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
use crate::{SgrConfig, Style};
use std::iter::FusedIterator;
use std::str::CharIndices;
use tracing::trace;

/// Returns an iterator over the characters of `input` paired with their style.
///
/// Shorthand for [`StyledChars::new`].
pub fn styled_chars(input: &str) -> StyledChars<'_> {
    StyledChars::new(input)
}

/// An iterator that decodes text interleaved with SGR escape sequences into
/// `(char, Style)` pairs.
///
/// `StyledChars` walks its input one code point at a time. Literal characters
/// are yielded together with a snapshot of the running style; complete SGR
/// sequences (`ESC [ params m`) update the running style and yield nothing.
///
/// Malformed input is never an error:
/// - An `ESC` not followed by `[` is dropped on its own; the next character is
///   ordinary text.
/// - A sequence containing anything other than digits, `;` and the final `m`
///   is dropped from the `ESC` through the offending character, and scanning
///   resumes right after it.
/// - A sequence cut off by the end of the input is dropped.
/// - Unknown codes and out-of-range extended colors are ignored without
///   affecting the other codes of the same sequence.
///
/// Every discarded sequence is reported as a `trace` event.
///
/// # Examples
///
/// ```rust
/// use ansisgr::{Color, StyledChars};
///
/// let mut chars = StyledChars::new("a\x1b[1;31mb");
///
/// let (ch, style) = chars.next().unwrap();
/// assert_eq!(ch, 'a');
/// assert!(style.is_default());
///
/// let (ch, style) = chars.next().unwrap();
/// assert_eq!(ch, 'b');
/// assert!(style.bold());
/// assert_eq!(style.foreground(), Color::Sixteen(31));
///
/// assert_eq!(chars.next(), None);
/// ```
#[derive(Clone, Debug)]
pub struct StyledChars<'a> {
    /// Scan cursor over the unconsumed input.
    chars: CharIndices<'a>,
    /// Running style, applied to every literal character.
    style: Style,
    /// Parameter buffer reused across sequences.
    params: Vec<u32>,
    config: SgrConfig,
}

impl<'a> StyledChars<'a> {
    /// Creates a scanner over `input` with the default configuration.
    pub fn new(input: &'a str) -> StyledChars<'a> {
        StyledChars::with_config(input, SgrConfig::default())
    }

    /// Creates a scanner over `input` with an explicit configuration.
    pub fn with_config(input: &'a str, config: SgrConfig) -> StyledChars<'a> {
        StyledChars {
            chars: input.char_indices(),
            style: Style::default(),
            params: Vec::new(),
            config,
        }
    }

    /// The running style, i.e. the style the next literal character will carry
    /// unless a sequence changes it first.
    pub fn style(&self) -> Style {
        self.style
    }

    /// The unconsumed remainder of the input.
    pub fn as_str(&self) -> &'a str {
        self.chars.as_str()
    }

    /// Consumes the sequence following an `ESC` at `start`.
    fn escape(&mut self, start: usize) {
        let mut lookahead = self.chars.clone();
        match lookahead.next() {
            Some((_, CSI)) => {
                self.chars = lookahead;
                match read_parameters(&mut self.chars, &mut self.params, &self.config, start) {
                    Ok(()) => self.style.apply(&self.params),
                    Err(error) => {
                        trace!(start, %error, "discarding malformed SGR sequence");
                    }
                }
            }
            _ => trace!(start, "discarding lone escape"),
        }
    }
}

impl Iterator for StyledChars<'_> {
    type Item = (char, Style);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (position, ch) = self.chars.next()?;
            if ch == ESC {
                self.escape(position);
            } else {
                return Some((ch, self.style));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.chars.as_str().len()))
    }
}

impl FusedIterator for StyledChars<'_> {}

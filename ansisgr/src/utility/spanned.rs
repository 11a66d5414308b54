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

use crate::{SgrConfig, Style, StyledChars};
use std::iter::FusedIterator;

/// Returns an iterator over the runs of equally styled text in `input`.
///
/// Shorthand for [`StyledSpans::new`].
pub fn styled_spans(input: &str) -> StyledSpans<'_> {
    StyledSpans::new(input)
}

/// A run of consecutive characters sharing one style.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    text: String,
    style: Style,
}

impl Span {
    /// The characters of this run. Never empty.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The style shared by every character of this run.
    pub fn style(&self) -> Style {
        self.style
    }

    /// Consumes the span, returning its text.
    pub fn into_text(self) -> String {
        self.text
    }
}

/// An iterator that groups the output of [`StyledChars`] into [`Span`]s.
///
/// A new span starts whenever the style of the next character differs from
/// the current one. Sequences that leave the style unchanged (`\x1b[1m` on
/// already bold text, or a malformed sequence) do not split a span.
///
/// # Examples
///
/// ```rust
/// use ansisgr::styled_spans;
///
/// let spans: Vec<_> = styled_spans("foo\x1b[1mbar\x1b[1mbaz").collect();
/// assert_eq!(spans.len(), 2);
/// assert_eq!(spans[0].text(), "foo");
/// assert_eq!(spans[1].text(), "barbaz");
/// assert!(spans[1].style().bold());
/// ```
#[derive(Clone, Debug)]
pub struct StyledSpans<'a> {
    chars: StyledChars<'a>,
    /// First character of the next span, read while closing the previous one.
    pending: Option<(char, Style)>,
}

impl<'a> StyledSpans<'a> {
    /// Creates a span iterator over `input` with the default configuration.
    pub fn new(input: &'a str) -> StyledSpans<'a> {
        StyledSpans::from(StyledChars::new(input))
    }

    /// Creates a span iterator over `input` with an explicit configuration.
    pub fn with_config(input: &'a str, config: SgrConfig) -> StyledSpans<'a> {
        StyledSpans::from(StyledChars::with_config(input, config))
    }
}

impl<'a> From<StyledChars<'a>> for StyledSpans<'a> {
    fn from(chars: StyledChars<'a>) -> Self {
        StyledSpans {
            chars,
            pending: None,
        }
    }
}

impl Iterator for StyledSpans<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Self::Item> {
        let (first, style) = self.pending.take().or_else(|| self.chars.next())?;

        let mut text = String::from(first);
        for (ch, next_style) in self.chars.by_ref() {
            if next_style != style {
                self.pending = Some((ch, next_style));
                break;
            }
            text.push(ch);
        }

        Some(Span { text, style })
    }
}

impl FusedIterator for StyledSpans<'_> {}

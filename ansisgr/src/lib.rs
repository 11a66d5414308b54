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

//! Decodes text interleaved with ANSI Select Graphic Rendition (SGR) escape
//! sequences into `(char, Style)` pairs.
//!
//! ```rust
//! use ansisgr::{Color, styled_chars};
//!
//! for (ch, style) in styled_chars("a\x1b[1;31;40mb\x1b[0;4;38;5;45;48;2;0;51;102mc") {
//!     if let Some((red, green, blue)) = style.background().rgb() {
//!         println!("{ch}: background ({red}, {green}, {blue})");
//!     }
//!     if style.foreground() == Color::Sixteen(31) {
//!         println!("{ch}: red");
//!     }
//! }
//! ```

mod config;
mod consts;
mod parser;
mod result;
mod scanner;
mod sgr;
mod style;
pub mod utility;

pub use self::config::SgrConfig;
pub use self::result::{SgrError, SgrResult};
pub use self::scanner::{StyledChars, styled_chars};
pub use self::style::{Attributes, Color, ColorMode, Style};
pub use self::utility::{Span, StyledSpans, strip_sgr, styled_spans};

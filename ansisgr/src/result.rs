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

//! Error types for the ansisgr crate.
//!
//! The scanner itself never surfaces these errors; a malformed sequence is
//! discarded and scanning continues. They are returned by the strict
//! single-sequence API ([`Style::from_sgr`](crate::Style::from_sgr)) and are
//! carried in trace events when the scanner drops input.

use thiserror::Error;

/// Result type alias for operations that may fail with an [`SgrError`].
pub type SgrResult<T> = Result<T, SgrError>;

/// Syntax errors encountered while reading an SGR sequence.
///
/// All positions are byte offsets into the scanned input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SgrError {
    /// The input does not begin with `ESC [`.
    #[error("missing control sequence introducer at position {position}")]
    MissingIntroducer {
        /// Byte position where `ESC [` was expected
        position: usize,
    },

    /// A character other than a digit, `;` or `m` appeared in the parameter list.
    ///
    /// Everything from the introducer through `found` is discarded.
    #[error("unexpected character {found:?} at position {position} in SGR parameters")]
    UnexpectedCharacter {
        /// Byte position of the offending character
        position: usize,
        /// The offending character
        found: char,
    },

    /// Input ended before the terminating `m`.
    #[error("unterminated SGR sequence starting at position {start}")]
    Unterminated {
        /// Byte position of the `ESC` that opened the sequence
        start: usize,
    },

    /// The parameter list grew past the configured limit.
    #[error("SGR sequence exceeds {max} parameters")]
    TooManyParameters {
        /// The configured maximum
        max: usize,
    },

    /// Characters follow the terminating `m` of a sequence parsed in isolation.
    #[error("trailing input at position {position} after SGR sequence")]
    TrailingInput {
        /// Byte position of the first trailing character
        position: usize,
    },
}

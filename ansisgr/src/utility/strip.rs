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

use crate::StyledChars;
use crate::consts::ESC;
use std::borrow::Cow;

/// Removes SGR sequences from a string.
///
/// The result is exactly the text [`StyledChars`] would yield for `str`,
/// including the way malformed sequences are dropped: `ESC [ 1 ; x m` loses
/// everything through the `x`, so the trailing `m` survives.
///
/// # Performance
///
/// If the input contains no escape character it is returned borrowed and
/// nothing is allocated.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use ansisgr::strip_sgr;
///
/// assert_eq!(strip_sgr("\x1b[1;31mRed Text\x1b[0m"), "Red Text");
/// assert!(matches!(strip_sgr("Plain Text"), Cow::Borrowed(_)));
/// assert_eq!(strip_sgr("a\x1b[38;5;xmb"), "amb");
/// ```
pub fn strip_sgr(str: &str) -> Cow<'_, str> {
    if !str.contains(ESC) {
        return Cow::Borrowed(str);
    }

    let mut result = String::with_capacity(str.len());
    result.extend(StyledChars::new(str).map(|(ch, _)| ch));
    Cow::Owned(result)
}

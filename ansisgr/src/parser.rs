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

use crate::consts::{PARAMETER_SEPARATOR, SGR_TERMINATOR};
use crate::{SgrConfig, SgrError, SgrResult};
use std::str::CharIndices;

/// Reads the parameter list of an SGR sequence.
///
/// `chars` must be positioned just after `ESC [`; `start` is the byte position
/// of that `ESC` and is only used for error reporting. On success `params`
/// holds the parameters in order and `chars` is positioned just after the
/// terminating `m`. A bare `ESC [ m` yields an empty list.
///
/// On failure every character up to and including the offending one has been
/// consumed from `chars`, so the caller resumes scanning right after it.
///
/// Digits accumulate with saturation. A saturated value is larger than any
/// code, palette index or channel, so it is rejected later like any other
/// out-of-range value.
pub(crate) fn read_parameters(
    chars: &mut CharIndices<'_>,
    params: &mut Vec<u32>,
    config: &SgrConfig,
    start: usize,
) -> SgrResult<()> {
    params.clear();

    // `None` until a digit is seen since the last separator
    let mut current: Option<u32> = None;

    for (position, ch) in chars.by_ref() {
        if let Some(digit) = ch.to_digit(10) {
            let value = current.unwrap_or(0);
            current = Some(value.saturating_mul(10).saturating_add(digit));
            continue;
        }

        match ch {
            PARAMETER_SEPARATOR => {
                push_parameter(params, current.take().unwrap_or(0), config)?;
            }
            SGR_TERMINATOR => {
                if current.is_some() || !params.is_empty() {
                    push_parameter(params, current.unwrap_or(0), config)?;
                }
                return Ok(());
            }
            found => return Err(SgrError::UnexpectedCharacter { position, found }),
        }
    }

    Err(SgrError::Unterminated { start })
}

fn push_parameter(params: &mut Vec<u32>, value: u32, config: &SgrConfig) -> SgrResult<()> {
    if !config.allows(params.len() + 1) {
        return Err(SgrError::TooManyParameters {
            max: config.max_parameters.unwrap_or(params.len()),
        });
    }
    params.push(value);
    Ok(())
}

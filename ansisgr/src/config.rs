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

/// Scanner Configuration
///
/// The default configuration accepts SGR sequences of any length. Untrusted
/// input can be bounded with [`SgrConfig::bounded`], in which case a sequence
/// carrying more parameters than allowed is treated as malformed and discarded.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct SgrConfig {
    /// Maximum number of parameters accepted in a single SGR sequence
    pub max_parameters: Option<usize>,
}

impl SgrConfig {
    /// Accept sequences of any length
    pub fn unbounded() -> SgrConfig {
        SgrConfig {
            max_parameters: None,
        }
    }

    /// Accept at most `max_parameters` parameters per sequence
    pub fn bounded(max_parameters: usize) -> SgrConfig {
        SgrConfig {
            max_parameters: Some(max_parameters),
        }
    }

    /// Replace the parameter limit
    pub fn with_max_parameters(mut self, max_parameters: Option<usize>) -> SgrConfig {
        self.max_parameters = max_parameters;
        self
    }

    /// Returns `true` if `count` parameters are within the configured limit.
    pub(crate) fn allows(&self, count: usize) -> bool {
        self.max_parameters.is_none_or(|max| count <= max)
    }
}

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

/// Escape character that introduces every ANSI sequence.
pub const ESC: char = '\x1b';

/// Second character of a Control Sequence Introducer (`ESC [`).
pub const CSI: char = '[';

/// Separates parameters inside an SGR sequence.
pub const PARAMETER_SEPARATOR: char = ';';

/// Final character of a Select Graphic Rendition sequence.
pub const SGR_TERMINATOR: char = 'm';

/// Extended color submode selecting an indexed 256-color palette entry (`38;5;n`).
pub const SUBMODE_INDEXED: u32 = 5;

/// Extended color submode selecting a 24-bit RGB value (`38;2;r;g;b`).
pub const SUBMODE_RGB: u32 = 2;

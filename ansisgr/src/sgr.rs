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

use crate::consts::{SUBMODE_INDEXED, SUBMODE_RGB};
use crate::style::{Attributes, Color, Style};
use tracing::trace;

/// Which color an extended color construct (`38`/`48`) writes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Target {
    Foreground,
    Background,
}

/// Interpreter states.
///
/// Every extended color construct either completes or aborts back into
/// `TopLevel`; an abort never skips the rest of the parameter list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Dispatching ordinary SGR codes.
    TopLevel,
    /// After `38`/`48`, expecting `5` or `2`.
    Submode(Target),
    /// After `38;5`/`48;5`, expecting a palette index.
    Index(Target),
    /// After `38;2`/`48;2`, expecting red.
    Red(Target),
    /// Expecting green.
    Green(Target, u8),
    /// Expecting blue.
    Blue(Target, u8, u8),
}

/// Applies `params` to `style` left to right.
pub(crate) fn interpret(style: &mut Style, params: &[u32]) {
    if params.is_empty() {
        style.reset();
        return;
    }

    let mut state = State::TopLevel;
    for &param in params {
        state = match state {
            State::TopLevel => dispatch(style, param),
            State::Submode(target) => match param {
                SUBMODE_INDEXED => State::Index(target),
                SUBMODE_RGB => State::Red(target),
                submode => {
                    trace!(submode, "ignoring unknown extended color submode");
                    State::TopLevel
                }
            },
            State::Index(target) => {
                match channel(param) {
                    Some(index) => set_color(style, target, Color::TwoFiftySix(index)),
                    None => trace!(index = param, "ignoring out of range palette index"),
                }
                State::TopLevel
            }
            State::Red(target) => match channel(param) {
                Some(red) => State::Green(target, red),
                None => abort_rgb(param),
            },
            State::Green(target, red) => match channel(param) {
                Some(green) => State::Blue(target, red, green),
                None => abort_rgb(param),
            },
            State::Blue(target, red, green) => match channel(param) {
                Some(blue) => {
                    set_color(style, target, Color::Rgb(red, green, blue));
                    State::TopLevel
                }
                None => abort_rgb(param),
            },
        };
    }

    if state != State::TopLevel {
        trace!(?state, "ignoring truncated extended color");
    }
}

/// Handles a single top-level SGR code and returns the next state.
fn dispatch(style: &mut Style, code: u32) -> State {
    match code {
        0 => style.reset(),

        1 => style.insert(Attributes::BOLD),
        2 => style.insert(Attributes::DIM),
        3 => style.insert(Attributes::ITALIC),
        4 => style.insert(Attributes::UNDERLINE),
        5 => style.insert(Attributes::BLINK),
        7 => style.insert(Attributes::REVERSE),
        8 => style.insert(Attributes::INVISIBLE),
        9 => style.insert(Attributes::STRIKETHROUGH),

        22 => style.remove(Attributes::BOLD | Attributes::DIM),
        23 => style.remove(Attributes::ITALIC),
        24 => style.remove(Attributes::UNDERLINE),
        25 => style.remove(Attributes::BLINK),
        27 => style.remove(Attributes::REVERSE),
        28 => style.remove(Attributes::INVISIBLE),
        29 => style.remove(Attributes::STRIKETHROUGH),

        30..=37 | 90..=97 => style.set_foreground(Color::Sixteen(code as u8)),
        39 => style.set_foreground(Color::DEFAULT),
        40..=47 | 100..=107 => style.set_background(Color::Sixteen(code as u8)),
        49 => style.set_background(Color::DEFAULT),

        38 => return State::Submode(Target::Foreground),
        48 => return State::Submode(Target::Background),

        _ => trace!(code, "ignoring unsupported SGR code"),
    }
    State::TopLevel
}

fn set_color(style: &mut Style, target: Target, color: Color) {
    match target {
        Target::Foreground => style.set_foreground(color),
        Target::Background => style.set_background(color),
    }
}

/// Narrows a palette index or RGB channel to `0..=255`.
fn channel(param: u32) -> Option<u8> {
    u8::try_from(param).ok()
}

fn abort_rgb(value: u32) -> State {
    trace!(channel = value, "ignoring out of range RGB channel");
    State::TopLevel
}

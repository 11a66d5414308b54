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

//! Integration tests for StyledChars over complete inputs

use ansisgr::{Attributes, Color, ColorMode, Style, StyledChars, strip_sgr, styled_spans};

/// Expected character and style for one yielded item.
#[derive(Clone, Copy, Debug)]
struct Expect {
    ch: char,
    foreground: Color,
    background: Color,
    attributes: Attributes,
}

impl Expect {
    fn plain(ch: char) -> Expect {
        Expect {
            ch,
            foreground: Color::Unset,
            background: Color::Unset,
            attributes: Attributes::empty(),
        }
    }

    fn fg(mut self, color: Color) -> Expect {
        self.foreground = color;
        self
    }

    fn bg(mut self, color: Color) -> Expect {
        self.background = color;
        self
    }

    fn attrs(mut self, attributes: Attributes) -> Expect {
        self.attributes = attributes;
        self
    }
}

fn plain(text: &str) -> Vec<Expect> {
    text.chars().map(Expect::plain).collect()
}

fn assert_scan(input: &str, expected: &[Expect]) {
    let actual: Vec<(char, Style)> = StyledChars::new(input).collect();
    assert_eq!(
        actual.len(),
        expected.len(),
        "input {input:?} yielded {actual:?}"
    );

    for (index, ((ch, style), want)) in actual.iter().zip(expected).enumerate() {
        assert_eq!(*ch, want.ch, "input {input:?} item {index}");
        assert_eq!(
            style.foreground(),
            want.foreground,
            "input {input:?} item {index} foreground"
        );
        assert_eq!(
            style.background(),
            want.background,
            "input {input:?} item {index} background"
        );
        assert_eq!(
            style.attributes(),
            want.attributes,
            "input {input:?} item {index} attributes"
        );
        assert_eq!(style.bold(), want.attributes.contains(Attributes::BOLD));
        assert_eq!(style.dim(), want.attributes.contains(Attributes::DIM));
        assert_eq!(style.italic(), want.attributes.contains(Attributes::ITALIC));
        assert_eq!(
            style.underline(),
            want.attributes.contains(Attributes::UNDERLINE)
        );
        assert_eq!(style.blink(), want.attributes.contains(Attributes::BLINK));
        assert_eq!(style.reverse(), want.attributes.contains(Attributes::REVERSE));
        assert_eq!(
            style.invisible(),
            want.attributes.contains(Attributes::INVISIBLE)
        );
        assert_eq!(
            style.strikethrough(),
            want.attributes.contains(Attributes::STRIKETHROUGH)
        );
    }
}

#[test]
fn test_no_colors() {
    assert_scan("foo", &plain("foo"));
}

#[test]
fn test_sixteen_colors() {
    let first = |ch| {
        Expect::plain(ch)
            .fg(Color::Sixteen(30))
            .bg(Color::Sixteen(41))
    };
    let second = |ch| {
        Expect::plain(ch)
            .fg(Color::Sixteen(90))
            .bg(Color::Sixteen(101))
    };
    assert_scan(
        "foo\x1b[30;41mbar\x1b[90;101mbaz",
        &[
            Expect::plain('f'),
            Expect::plain('o'),
            Expect::plain('o'),
            first('b'),
            first('a'),
            first('r'),
            second('b'),
            second('a'),
            second('z'),
        ],
    );
}

#[test]
fn test_sixteen_colors_with_unsupported_code() {
    // 441 is not a color; only the background change is lost
    let first = |ch| Expect::plain(ch).fg(Color::Sixteen(30));
    let second = |ch| {
        Expect::plain(ch)
            .fg(Color::Sixteen(90))
            .bg(Color::Sixteen(101))
    };
    assert_scan(
        "foo\x1b[30;441mbar\x1b[90;101mbaz",
        &[
            Expect::plain('f'),
            Expect::plain('o'),
            Expect::plain('o'),
            first('b'),
            first('a'),
            first('r'),
            second('b'),
            second('a'),
            second('z'),
        ],
    );
}

#[test]
fn test_indexed_colors() {
    let styled = |ch| {
        Expect::plain(ch)
            .fg(Color::TwoFiftySix(117))
            .bg(Color::TwoFiftySix(104))
    };
    assert_scan(
        "foo\x1b[38;5;117;48;5;104mbar",
        &[
            Expect::plain('f'),
            Expect::plain('o'),
            Expect::plain('o'),
            styled('b'),
            styled('a'),
            styled('r'),
        ],
    );

    // Low palette indices stay indexed colors
    let styled = |ch| {
        Expect::plain(ch)
            .fg(Color::TwoFiftySix(1))
            .bg(Color::TwoFiftySix(2))
    };
    assert_scan(
        "\x1b[38;5;1;48;5;2mbar",
        &[styled('b'), styled('a'), styled('r')],
    );
}

#[test]
fn test_rgb_colors() {
    let styled = |ch| {
        Expect::plain(ch)
            .fg(Color::from_packed(0x99ff99))
            .bg(Color::from_packed(0x990033))
    };
    assert_scan(
        "foo\x1b[38;2;153;255;153;48;2;153;0;51mbar",
        &[
            Expect::plain('f'),
            Expect::plain('o'),
            Expect::plain('o'),
            styled('b'),
            styled('a'),
            styled('r'),
        ],
    );

    let (_, style) = StyledChars::new("\x1b[38;2;153;255;153ma").next().unwrap();
    let foreground = style.foreground();
    assert_eq!(foreground.mode(), ColorMode::Rgb);
    assert_eq!(foreground.value(), 0x99ff99);
    assert_eq!(foreground.red(), Some(153));
    assert_eq!(foreground.green(), Some(255));
    assert_eq!(foreground.blue(), Some(153));
}

#[test]
fn test_single_attributes() {
    let cases = [
        ("\x1b[1ma", Attributes::BOLD),
        ("\x1b[2ma", Attributes::DIM),
        ("\x1b[3ma", Attributes::ITALIC),
        ("\x1b[4ma", Attributes::UNDERLINE),
        ("\x1b[5ma", Attributes::BLINK),
        ("\x1b[7ma", Attributes::REVERSE),
        ("\x1b[8ma", Attributes::INVISIBLE),
        ("\x1b[9ma", Attributes::STRIKETHROUGH),
    ];
    for (input, attribute) in cases {
        assert_scan(input, &[Expect::plain('a').attrs(attribute)]);
    }
}

#[test]
fn test_attribute_resets() {
    for input in [
        "\x1b[1;22ma",
        "\x1b[2;22ma",
        "\x1b[3;23ma",
        "\x1b[4;24ma",
        "\x1b[5;25ma",
        "\x1b[7;27ma",
        "\x1b[8;28ma",
        "\x1b[9;29ma",
    ] {
        assert_scan(input, &plain("a"));
    }
}

#[test]
fn test_full_reset() {
    assert_scan(
        "\x1b[1;30;40;0ma",
        &[Expect::plain('a').fg(Color::DEFAULT).bg(Color::DEFAULT)],
    );
}

#[test]
fn test_default_colors() {
    assert_scan(
        "\x1b[31ma\x1b[39mb",
        &[
            Expect::plain('a').fg(Color::Sixteen(31)),
            Expect::plain('b').fg(Color::DEFAULT),
        ],
    );
    assert_scan(
        "\x1b[41ma\x1b[49mb",
        &[
            Expect::plain('a').bg(Color::Sixteen(41)),
            Expect::plain('b').bg(Color::DEFAULT),
        ],
    );
}

#[test]
fn test_multiple_attributes() {
    assert_scan(
        "\x1b[1;3ma",
        &[Expect::plain('a').attrs(Attributes::BOLD | Attributes::ITALIC)],
    );
    assert_scan(
        "\x1b[32;1;3ma",
        &[Expect::plain('a')
            .fg(Color::Sixteen(32))
            .attrs(Attributes::BOLD | Attributes::ITALIC)],
    );
}

#[test]
fn test_broken_escape() {
    assert_scan("a\x1b", &plain("a"));
    assert_scan("a\x1bb", &plain("ab"));
}

#[test]
fn test_ignored_code() {
    assert_scan("a\x1b[6mb", &plain("ab"));
}

#[test]
fn test_non_digit_in_indexed_color() {
    assert_scan("a\x1b[38;5;xmb\x1b[48;5;ymc", &plain("ambmc"));
}

#[test]
fn test_missing_palette_index() {
    assert_scan("a\x1b[38;5mb\x1b[48;5mc", &plain("abc"));
}

#[test]
fn test_non_digit_in_rgb_color() {
    assert_scan("a\x1b[38;2;10;20;xmb\x1b[48;2;30;y;40mc", &plain("amb;40mc"));
}

#[test]
fn test_missing_rgb_channels() {
    assert_scan("a\x1b[38;2mb\x1b[48;2mc", &plain("abc"));
}

#[test]
fn test_unknown_submode_then_valid_codes() {
    assert_scan(
        "a\x1b[38;3;1;38;5;80mb",
        &[
            Expect::plain('a'),
            Expect::plain('b')
                .fg(Color::TwoFiftySix(80))
                .attrs(Attributes::BOLD),
        ],
    );
}

#[test]
fn test_out_of_range_palette_index() {
    assert_scan("a\x1b[38;5;300mb", &plain("ab"));
}

#[test]
fn test_out_of_range_rgb_channel() {
    assert_scan(
        "a\x1b[38;2;300;1;20;48;2;300;10;20mb",
        &[Expect::plain('a'), Expect::plain('b').attrs(Attributes::BOLD)],
    );
}

#[test]
fn test_mixed_codes() {
    assert_scan(
        "\x1b[1;2;38;5;200;3;48;2;70;80;90ma",
        &[Expect::plain('a')
            .fg(Color::TwoFiftySix(200))
            .bg(Color::from_packed(0x46505a))
            .attrs(Attributes::BOLD | Attributes::DIM | Attributes::ITALIC)],
    );
}

#[test]
fn test_reset_then_extended_colors() {
    assert_scan(
        "\x1b[1;31;40ma\x1b[0;4;38;5;45;48;2;0;51;102mb",
        &[
            Expect::plain('a')
                .fg(Color::Sixteen(31))
                .bg(Color::Sixteen(40))
                .attrs(Attributes::BOLD),
            Expect::plain('b')
                .fg(Color::TwoFiftySix(45))
                .bg(Color::from_packed(0x003366))
                .attrs(Attributes::UNDERLINE),
        ],
    );
}

#[test]
fn test_bad_blue_channel_reinterpreted() {
    // 38;2;10;38;500 aborts at 500, then 32 sets the foreground and 20 is ignored
    assert_scan(
        "\x1b[38;2;10;38;500;32;20ma",
        &[Expect::plain('a').fg(Color::Sixteen(32))],
    );
}

#[test]
fn test_empty_parameters() {
    assert_scan(
        "a\x1b[mb",
        &[
            Expect::plain('a'),
            Expect::plain('b').fg(Color::DEFAULT).bg(Color::DEFAULT),
        ],
    );

    let bare: Vec<_> = StyledChars::new("\x1b[1;31m\x1b[mx").collect();
    let zero: Vec<_> = StyledChars::new("\x1b[1;31m\x1b[0mx").collect();
    assert_eq!(bare, zero);
}

#[test]
fn test_truncated_extended_color() {
    assert_scan("\x1b[38ma", &plain("a"));
}

#[test]
fn test_presence_of_colors() {
    let items: Vec<_> = StyledChars::new("a\x1b[39mb").collect();
    assert!(!items[0].1.foreground().is_set());
    assert!(items[1].1.foreground().is_set());
    assert_eq!(items[1].1.foreground().mode(), ColorMode::Sixteen);
    assert_eq!(items[1].1.foreground().value(), 0);
    assert!(!items[1].1.background().is_set());
}

#[test]
fn test_strict_parse_matches_scanner() {
    let sequence = "\x1b[0;4;38;5;45;48;2;0;51;102m";
    let strict = Style::from_sgr(sequence).unwrap();
    let (_, scanned) = StyledChars::new(&format!("{sequence}x")).next().unwrap();
    assert_eq!(strict, scanned);
}

#[test]
fn test_utilities_agree_with_scanner() {
    let input = "a\x1b[1mbc\x1b[38;5;xmd\x1b[0mef";
    let chars: String = StyledChars::new(input).map(|(ch, _)| ch).collect();
    assert_eq!(strip_sgr(input), chars);

    let joined: String = styled_spans(input).map(|span| span.into_text()).collect();
    assert_eq!(joined, chars);

    let spans: Vec<_> = styled_spans(input).collect();
    assert_eq!(spans.len(), 3);
    assert_eq!(spans[0].text(), "a");
    assert_eq!(spans[1].text(), "bcmd");
    assert!(spans[1].style().bold());
    assert_eq!(spans[2].text(), "ef");
}

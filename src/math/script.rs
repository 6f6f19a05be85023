// Copyright (c) 2025 Mathdown Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Mathdown contributors

//! Unicode subscript and superscript transliteration.
//!
//! Unicode only encodes scripts for a subset of Latin letters, so characters
//! without a glyph are passed through unchanged.

fn subscript_char(c: char) -> Option<char> {
    let glyph = match c {
        '0' => '₀',
        '1' => '₁',
        '2' => '₂',
        '3' => '₃',
        '4' => '₄',
        '5' => '₅',
        '6' => '₆',
        '7' => '₇',
        '8' => '₈',
        '9' => '₉',
        '+' => '₊',
        '-' => '₋',
        '=' => '₌',
        '(' => '₍',
        ')' => '₎',
        'a' => 'ₐ',
        'e' => 'ₑ',
        'i' => 'ᵢ',
        'o' => 'ₒ',
        'u' => 'ᵤ',
        'x' => 'ₓ',
        _ => return None,
    };
    Some(glyph)
}

fn superscript_char(c: char) -> Option<char> {
    let glyph = match c {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        '+' => '⁺',
        '-' => '⁻',
        '=' => '⁼',
        '(' => '⁽',
        ')' => '⁾',
        'a' => 'ᵃ',
        'b' => 'ᵇ',
        'c' => 'ᶜ',
        'd' => 'ᵈ',
        'e' => 'ᵉ',
        'f' => 'ᶠ',
        'g' => 'ᵍ',
        'h' => 'ʰ',
        'i' => 'ⁱ',
        'j' => 'ʲ',
        'k' => 'ᵏ',
        'l' => 'ˡ',
        'm' => 'ᵐ',
        'n' => 'ⁿ',
        'o' => 'ᵒ',
        'p' => 'ᵖ',
        'r' => 'ʳ',
        's' => 'ˢ',
        't' => 'ᵗ',
        'u' => 'ᵘ',
        'v' => 'ᵛ',
        'w' => 'ʷ',
        'x' => 'ˣ',
        'y' => 'ʸ',
        'z' => 'ᶻ',
        _ => return None,
    };
    Some(glyph)
}

pub fn to_subscript(text: &str) -> String {
    text.chars().map(|c| subscript_char(c).unwrap_or(c)).collect()
}

pub fn to_superscript(text: &str) -> String {
    text.chars().map(|c| superscript_char(c).unwrap_or(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_and_signs() {
        assert_eq!(to_subscript("i=1"), "ᵢ₌₁");
        assert_eq!(to_superscript("(n+1)"), "⁽ⁿ⁺¹⁾");
        assert_eq!(to_subscript("-2"), "₋₂");
    }

    #[test]
    fn test_unmapped_pass_through() {
        // no subscript glyph for `n`, no superscript glyph for `q` or `π`
        assert_eq!(to_subscript("n"), "n");
        assert_eq!(to_superscript("q"), "q");
        assert_eq!(to_superscript("iπ"), "ⁱπ");
        assert_eq!(to_subscript(""), "");
    }
}

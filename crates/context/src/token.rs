//! Token estimation utilities.
//!
//! Approximates how BPE tokenizers split mixed Chinese/Latin prose without
//! shipping a vocabulary:
//!
//! - each CJK ideograph costs 1.5 units
//! - each maximal run of Latin letters/digits costs 1 unit, whatever its length
//! - punctuation, whitespace and everything else is free
//!
//! The ideograph total is rounded up, so a single ideograph costs 2.

/// Estimate the size of a text fragment in budget units.
pub fn estimate_tokens(text: &str) -> usize {
    let mut ideographs = 0usize;
    let mut latin_runs = 0usize;
    let mut in_run = false;

    for c in text.chars() {
        if is_ideograph(c) {
            ideographs += 1;
            in_run = false;
        } else if is_latin_alphanumeric(c) {
            if !in_run {
                latin_runs += 1;
                in_run = true;
            }
        } else {
            in_run = false;
        }
    }

    (ideographs * 3).div_ceil(2) + latin_runs
}

fn is_ideograph(c: char) -> bool {
    matches!(
        c,
        '\u{3007}'                    // Ideographic number zero
            | '\u{3400}'..='\u{4DBF}'     // Extension A
            | '\u{4E00}'..='\u{9FFF}'   // Unified Ideographs
            | '\u{F900}'..='\u{FAFF}'   // Compatibility Ideographs
            | '\u{20000}'..='\u{2EE5F}' // Extensions B-F, I
            | '\u{2F800}'..='\u{2FA1F}' // Compatibility Ideographs Supplement
            | '\u{30000}'..='\u{323AF}' // Extensions G-H
    )
}

fn is_latin_alphanumeric(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || (c.is_alphabetic()
            && matches!(c, '\u{00C0}'..='\u{024F}' | '\u{1E00}'..='\u{1EFF}'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rarer_ideograph_blocks_are_counted() {
        // 〇, Extension H, Extension I, Compatibility Supplement
        for c in ['\u{3007}', '\u{31350}', '\u{2EBF0}', '\u{2F800}'] {
            assert_eq!(estimate_tokens(&c.to_string()), 2, "{:X}", c as u32);
        }
        assert_eq!(estimate_tokens("二〇二六"), 6);
    }

    #[test]
    fn empty_string_is_zero() {
        assert_eq!(estimate_tokens(""), 0);
    }

    #[test]
    fn whitespace_and_punctuation_are_free() {
        assert_eq!(estimate_tokens("   \n\t"), 0);
        assert_eq!(estimate_tokens("... !? ——"), 0);
    }

    #[test]
    fn six_ideographs_cost_nine() {
        assert_eq!(estimate_tokens("天地玄黄宇宙"), 9);
    }

    #[test]
    fn odd_ideograph_count_rounds_up() {
        assert_eq!(estimate_tokens("剑"), 2);
        assert_eq!(estimate_tokens("长剑出"), 5);
    }

    #[test]
    fn latin_runs_count_once_each() {
        assert_eq!(estimate_tokens("hello world"), 2);
        assert_eq!(estimate_tokens("supercalifragilistic"), 1);
        assert_eq!(estimate_tokens("level 42, gate-7"), 4);
    }

    #[test]
    fn accented_letters_stay_in_the_run() {
        assert_eq!(estimate_tokens("café naïve"), 2);
    }

    #[test]
    fn mixed_script() {
        // two Latin runs, three ideographs (4.5 rounded up)
        assert_eq!(estimate_tokens("Lin林月Yue说"), 1 + 1 + 5);
    }

    #[test]
    fn ideographs_break_latin_runs() {
        assert_eq!(estimate_tokens("abc中def"), 2 + 2);
    }
}

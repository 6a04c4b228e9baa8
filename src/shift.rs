const ALPHABET_LEN: i64 = 26;

/// Zero-based position of `c` relative to `'a'`.
///
/// Not clamped: characters outside `'a'..='z'` give positions outside `0..26`
/// (uppercase and digits go negative).
pub fn position(c: char) -> i64 {
    c as i64 - 'a' as i64
}

/// Lowercase letter at `index`, wrapping with a true modulo so negative
/// indices land back inside the alphabet.
pub fn letter_at(index: i64) -> char {
    let wrapped = index.rem_euclid(ALPHABET_LEN) as u8;
    (b'a' + wrapped) as char
}

/// Shift `c` back by `shift` positions.
pub fn unshift(c: char, shift: i64) -> char {
    letter_at(position(c) - shift)
}

#[cfg(test)]
mod tests {
    use super::{letter_at, position, unshift};

    #[test]
    fn positions_of_lowercase() {
        assert_eq!(position('a'), 0);
        assert_eq!(position('m'), 12);
        assert_eq!(position('z'), 25);
    }

    #[test]
    fn positions_outside_alphabet() {
        assert_eq!(position('A'), -32);
        assert_eq!(position('0'), -49);
        assert_eq!(position('{'), 26);
    }

    #[test]
    fn letter_at_wraps_both_ways() {
        assert_eq!(letter_at(0), 'a');
        assert_eq!(letter_at(25), 'z');
        assert_eq!(letter_at(26), 'a');
        assert_eq!(letter_at(-1), 'z');
        assert_eq!(letter_at(-27), 'z');
        assert_eq!(letter_at(-52), 'a');
    }

    #[test]
    fn unshift_wrap_around() {
        assert_eq!(unshift('a', 3), 'x');
        assert_eq!(unshift('c', 3), 'z');
        assert_eq!(unshift('d', 3), 'a');
        assert_eq!(unshift('q', 0), 'q');
        assert_eq!(unshift('q', 26), 'q');
    }

    #[test]
    fn unshift_always_lands_in_alphabet() {
        for c in ['A', 'Z', '0', '9', ' ', '!', '~'] {
            for shift in [0i64, 1, 13, 25] {
                let out = unshift(c, shift);
                assert!(out.is_ascii_lowercase(), "{c:?} shifted by {shift} gave {out:?}");
            }
        }
    }
}

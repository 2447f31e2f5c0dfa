//! Character set composition for password generation.

use super::PasswordOptions;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SPECIAL: &str = r#"!@#$%^&*()_-+=|;:"<>.?/"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digits,
    Special,
}

impl CharClass {
    pub const fn chars(self) -> &'static str {
        match self {
            Self::Lowercase => LOWERCASE,
            Self::Uppercase => UPPERCASE,
            Self::Digits => DIGITS,
            Self::Special => SPECIAL,
        }
    }
}

/// Optional classes in concatenation order, each gated by one option flag.
const OPTIONAL_CLASSES: [(CharClass, fn(&PasswordOptions) -> bool); 3] = [
    (CharClass::Uppercase, |o: &PasswordOptions| o.include_uppercase),
    (CharClass::Digits, |o: &PasswordOptions| o.include_numbers),
    (CharClass::Special, |o: &PasswordOptions| o.include_special_chars),
];

/// Classes selected by `options`. Lowercase is always first.
pub fn classes(options: &PasswordOptions) -> Vec<CharClass> {
    std::iter::once(CharClass::Lowercase)
        .chain(
            OPTIONAL_CLASSES
                .iter()
                .filter(|(_, enabled)| enabled(options))
                .map(|(class, _)| *class),
        )
        .collect()
}

/// Build the candidate pool for `options`. Never empty.
pub fn build(options: &PasswordOptions) -> Vec<char> {
    classes(options)
        .into_iter()
        .flat_map(|class| class.chars().chars())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn opts(upper: bool, numbers: bool, special: bool) -> PasswordOptions {
        PasswordOptions {
            length: 10,
            include_uppercase: upper,
            include_numbers: numbers,
            include_special_chars: special,
        }
    }

    #[test]
    fn lowercase_only_by_default_flags() {
        let chars = build(&opts(false, false, false));
        assert_eq!(chars.iter().collect::<String>(), LOWERCASE);
    }

    #[test]
    fn every_flag_combination_has_no_duplicates_and_contains_lowercase() {
        for bits in 0u8..8 {
            let o = opts(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0);
            let chars = build(&o);
            assert!(chars.len() >= 26);

            let unique: HashSet<char> = chars.iter().copied().collect();
            assert_eq!(unique.len(), chars.len(), "duplicates for {o:?}");
            assert!(LOWERCASE.chars().all(|c| unique.contains(&c)));
        }
    }

    #[test]
    fn numbers_flag_adds_each_digit_once() {
        let chars = build(&opts(false, true, false));
        for d in DIGITS.chars() {
            assert_eq!(chars.iter().filter(|&&c| c == d).count(), 1);
        }
        assert_eq!(chars.len(), 36);
    }

    #[test]
    fn all_flags_concatenate_in_fixed_order() {
        let o = opts(true, true, true);
        assert_eq!(
            classes(&o),
            vec![
                CharClass::Lowercase,
                CharClass::Uppercase,
                CharClass::Digits,
                CharClass::Special
            ]
        );
        let expected = format!("{LOWERCASE}{UPPERCASE}{DIGITS}{SPECIAL}");
        assert_eq!(build(&o).iter().collect::<String>(), expected);
    }

    #[test]
    fn special_set_is_the_fixed_punctuation_list() {
        let chars = build(&opts(false, false, true));
        assert_eq!(chars.len(), 26 + SPECIAL.chars().count());
        assert!(chars.contains(&'"'));
        assert!(!chars.contains(&'A'));
    }
}

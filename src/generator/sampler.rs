use rand::seq::IndexedRandom;

use super::{PasswordOptions, alphabet};

/// Draw `length` characters uniformly, with replacement, from `alphabet`.
///
/// Uses the thread-local RNG; no cryptographic guarantee is made.
/// An empty alphabet yields an empty string.
pub fn sample(alphabet: &[char], length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .filter_map(|_| alphabet.choose(&mut rng).copied())
        .collect()
}

/// Compose the alphabet for `options` and sample `options.length` characters.
pub fn generate(options: &PasswordOptions) -> String {
    let chars = alphabet::build(options);
    sample(&chars, options.length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn zero_length_is_empty() {
        let chars = alphabet::build(&PasswordOptions::default());
        assert_eq!(sample(&chars, 0), "");
    }

    #[test]
    fn output_has_exact_length_and_stays_in_alphabet() {
        let chars: Vec<char> = "xyz09".chars().collect();
        for length in [1, 5, 37, 200] {
            let out = sample(&chars, length);
            assert_eq!(out.chars().count(), length);
            assert!(out.chars().all(|c| chars.contains(&c)));
        }
    }

    #[test]
    fn length_is_not_clamped_to_slider_range() {
        let opts = PasswordOptions {
            length: 2,
            ..PasswordOptions::default()
        };
        assert_eq!(generate(&opts).len(), 2);

        let opts = PasswordOptions {
            length: 120,
            ..PasswordOptions::default()
        };
        assert_eq!(generate(&opts).len(), 120);
    }

    #[test]
    fn uppercase_only_options_yield_ascii_letters() {
        let opts = PasswordOptions {
            length: 8,
            include_uppercase: true,
            include_numbers: false,
            include_special_chars: false,
        };
        for _ in 0..100 {
            let out = generate(&opts);
            assert_eq!(out.len(), 8);
            assert!(out.chars().all(|c| c.is_ascii_alphabetic()));
        }
    }

    #[test]
    fn empty_alphabet_yields_empty_string() {
        assert_eq!(sample(&[], 12), "");
    }

    #[test]
    fn single_char_alphabet_repeats() {
        assert_eq!(sample(&['q'], 4), "qqqq");
    }

    #[test]
    fn draws_are_spread_evenly_over_the_alphabet() {
        const DRAWS: usize = 100_000;
        let chars = alphabet::build(&PasswordOptions {
            length: 0,
            include_uppercase: false,
            include_numbers: false,
            include_special_chars: false,
        });
        assert_eq!(chars.len(), 26);

        let out = sample(&chars, DRAWS);
        let mut counts: HashMap<char, usize> = HashMap::new();
        for c in out.chars() {
            *counts.entry(c).or_default() += 1;
        }

        assert_eq!(counts.len(), 26, "some letters never drawn");
        let expected = DRAWS as f64 / 26.0;
        for (c, n) in &counts {
            let n = *n as f64;
            assert!(
                (n - expected).abs() <= expected * 0.2,
                "{c} drawn {n} times, expected about {expected:.0}"
            );
        }
    }

    #[test]
    fn consecutive_draws_are_not_constant() {
        let chars = alphabet::build(&PasswordOptions::default());
        let out = sample(&chars, 1_000);
        let first = out.chars().next().unwrap();
        assert!(out.chars().any(|c| c != first));
    }
}

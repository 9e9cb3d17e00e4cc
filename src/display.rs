// src/display.rs
//! Pure formatting helpers for the console. No simulation state in here.

/// Thousands-separated rendering, e.g. `1234567` -> `"1,234,567"`.
pub fn format_currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Short-scale unit table, largest first.
const UNITS: &[(u128, &str)] = &[
    (10u128.pow(33), "decillion"),
    (10u128.pow(30), "nonillion"),
    (10u128.pow(27), "octillion"),
    (10u128.pow(24), "septillion"),
    (10u128.pow(21), "sextillion"),
    (10u128.pow(18), "quintillion"),
    (10u128.pow(15), "quadrillion"),
    (10u128.pow(12), "trillion"),
    (10u128.pow(9), "billion"),
    (10u128.pow(6), "million"),
    (10u128.pow(3), "thousand"),
];

/// Spell a number in grouped short-scale units, walking the table from the
/// largest threshold down: `1_234_000_000` -> `"1 billion 234 million"`.
pub fn number_to_words(mut number: u128) -> String {
    if number == 0 {
        return "0".to_string();
    }
    let mut parts = Vec::new();
    for &(value, unit) in UNITS {
        if number >= value {
            parts.push(format!("{} {}", number / value, unit));
            number %= value;
        }
    }
    if number > 0 {
        parts.push(number.to_string());
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_grouping() {
        assert_eq!(format_currency(0), "0");
        assert_eq!(format_currency(999), "999");
        assert_eq!(format_currency(1_000), "1,000");
        assert_eq!(format_currency(1_000_000), "1,000,000");
        assert_eq!(format_currency(1_234_567_890), "1,234,567,890");
        assert_eq!(format_currency(-12_345), "-12,345");
    }

    #[test]
    fn words_for_small_numbers() {
        assert_eq!(number_to_words(0), "0");
        assert_eq!(number_to_words(999), "999");
        assert_eq!(number_to_words(1_000), "1 thousand");
        assert_eq!(number_to_words(1_001), "1 thousand 1");
    }

    #[test]
    fn words_skip_empty_groups() {
        assert_eq!(number_to_words(1_000_000), "1 million");
        assert_eq!(number_to_words(1_000_000_000), "1 billion");
        assert_eq!(
            number_to_words(1_234_000_000),
            "1 billion 234 million"
        );
        assert_eq!(
            number_to_words(2_000_000_123),
            "2 billion 123"
        );
    }

    #[test]
    fn words_reach_the_top_of_the_table() {
        assert_eq!(
            number_to_words(10u128.pow(33) * 5),
            "5 decillion"
        );
        assert_eq!(
            number_to_words(10u128.pow(33) + 10u128.pow(3)),
            "1 decillion 1 thousand"
        );
        // u128::MAX is about 340 undecillion; it still renders, just with a
        // large decillion count.
        assert!(number_to_words(u128::MAX).starts_with("340282 decillion"));
    }
}

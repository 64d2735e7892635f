//! Sanction sentence extraction

use regex::Regex;
use std::sync::LazyLock;

/// "On <Month> <d>, <yyyy>, [the] <Actor> imposed sanctions ... ." and variants
static SANCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:On|From|Since|In)\s+[A-Za-z]+\s+\d{1,2},?\s+\d{4},?\s+(?:the\s+)?[A-Z][A-Za-z\s,]+?\s+(?:imposed|introduced|applied)\s+sanctions[^.]*\.",
    )
    .expect("valid regex")
});

/// Collects every sanction sentence in the text, verbatim and without repeats,
/// in order of first appearance
pub fn extract_sanctions(text: &str) -> Vec<String> {
    let mut sanctions: Vec<String> = Vec::new();

    for found in SANCTION_RE.find_iter(text) {
        let sentence = found.as_str().trim();
        if !sentence.is_empty() && !sanctions.iter().any(|s| s == sentence) {
            sanctions.push(sentence.to_string());
        }
    }

    sanctions
}

#[cfg(test)]
mod tests {
    use super::*;

    const EU: &str = "On January 5, 2023, the European Union imposed sanctions on this vessel.";

    #[test]
    fn test_sentence_captured_verbatim() {
        let text = format!("Sanctions\n{}\n", EU);
        assert_eq!(extract_sanctions(&text), vec![EU.to_string()]);
    }

    #[test]
    fn test_repeated_sentence_not_duplicated() {
        let text = format!("{}\nSome other text.\n{}\n", EU, EU);
        assert_eq!(extract_sanctions(&text), vec![EU.to_string()]);
    }

    #[test]
    fn test_order_of_appearance() {
        let uk = "Since May 9, 2024 the United Kingdom applied sanctions against the tanker.";
        let us = "From December 20, 2024, United States introduced sanctions.";
        let text = format!("{}\n{}\n{}\n", uk, EU, us);
        assert_eq!(
            extract_sanctions(&text),
            vec![uk.to_string(), EU.to_string(), us.to_string()]
        );
    }

    #[test]
    fn test_no_sanctions() {
        assert!(extract_sanctions("The vessel was renamed in 2022.").is_empty());
    }
}

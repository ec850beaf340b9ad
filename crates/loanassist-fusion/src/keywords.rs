//! Keyword derivation for the store arm.

/// Tokens at or below this length are dropped from keyword filters.
pub const MIN_TOKEN_LEN: usize = 2;

/// Derive keyword search tokens from free query text.
///
/// Splits on whitespace, lowercases, strips surrounding punctuation, and
/// keeps tokens longer than [`MIN_TOKEN_LEN`] characters. An empty result
/// means the keyword arm has nothing to search for; it must never fall
/// back to matching everything.
pub fn query_tokens(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|token| token.chars().count() > MIN_TOKEN_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_for_emi_query() {
        let tokens = query_tokens("How much EMI does Karthik need to pay?");
        assert_eq!(
            tokens,
            vec!["how", "much", "emi", "does", "karthik", "need", "pay"]
        );
    }

    #[test]
    fn test_short_tokens_dropped() {
        assert!(query_tokens("is it ok").is_empty());
    }

    #[test]
    fn test_interior_apostrophe_kept() {
        let tokens = query_tokens("What is Shay's EMI");
        assert!(tokens.contains(&"shay's".to_string()));
    }

    #[test]
    fn test_empty_text() {
        assert!(query_tokens("").is_empty());
        assert!(query_tokens("   ").is_empty());
    }

    #[test]
    fn test_punctuation_only_word_dropped() {
        assert!(query_tokens("??? -- !!").is_empty());
    }
}

//! Post-render verification

use crate::template::grammar::{PlaceholderGrammar, TokenVariant};
use std::collections::BTreeSet;

/// Finds placeholder tokens that survived rendering
///
/// Matches any name, not only known keys: whatever still looks like a token
/// after rendering is by definition unresolved.
#[derive(Debug, Clone)]
pub struct RenderVerifier {
    grammar: PlaceholderGrammar,
}

impl RenderVerifier {
    pub fn new(grammar: PlaceholderGrammar) -> Self {
        Self { grammar }
    }

    /// Distinct literal tokens of either syntax found in `rendered`
    pub fn find_unresolved(&self, rendered: &str) -> BTreeSet<String> {
        [TokenVariant::Plain, TokenVariant::Encoded]
            .into_iter()
            .flat_map(|variant| self.grammar.match_all(rendered, variant))
            .map(|token| token.full.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::grammar::Delimiters;

    fn verifier() -> RenderVerifier {
        RenderVerifier::new(PlaceholderGrammar::new(&Delimiters::default()).unwrap())
    }

    #[test]
    fn test_unknown_plain_token() {
        let found = verifier().find_unresolved("Hello {{UNKNOWN}}!");
        assert_eq!(found, BTreeSet::from(["{{UNKNOWN}}".to_string()]));
    }

    #[test]
    fn test_fully_resolved_text() {
        assert!(verifier().find_unresolved("Hi Ana, bal=5&lt;6.").is_empty());
    }

    #[test]
    fn test_unknown_encoded_token() {
        let found = verifier().find_unresolved("Hi Ana, bal={{||BAL||}}.");
        assert_eq!(found, BTreeSet::from(["{{||BAL||}}".to_string()]));
    }

    #[test]
    fn test_repeated_tokens_reported_once() {
        let found = verifier().find_unresolved("{{A}} {{A}} {{||B||}} {{||B||}} {{A}}");
        assert_eq!(
            found,
            BTreeSet::from(["{{A}}".to_string(), "{{||B||}}".to_string()])
        );
    }

    #[test]
    fn test_non_placeholder_braces_ignored() {
        let found = verifier().find_unresolved("fn main() {{ }} {{a b}} {{}}");
        assert!(found.is_empty());
    }
}

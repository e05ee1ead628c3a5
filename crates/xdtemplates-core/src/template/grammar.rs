//! Placeholder grammar
//!
//! Two token syntaxes share one inner-name alphabet (`[0-9a-zA-Z-]+`):
//!
//! - **Plain**: `{{NAME}}`, replaced with the raw value
//! - **Encoded**: `{{||NAME||}}`, replaced with the HTML-escaped value
//!
//! Both matchers are built by the same function from a `(prefix, postfix)`
//! pair, so the accepted name alphabet cannot drift between the variants.

use crate::error::{Result, XdTemplatesError};
use regex::Regex;

/// Default prefix for plain placeholders
pub const DEFAULT_PREFIX: &str = "{{";
/// Default postfix for plain placeholders
pub const DEFAULT_POSTFIX: &str = "}}";
/// Default prefix for HTML-encoded placeholders
pub const DEFAULT_ENCODED_PREFIX: &str = "{{||";
/// Default postfix for HTML-encoded placeholders
pub const DEFAULT_ENCODED_POSTFIX: &str = "||}}";

/// Inner-name alphabet shared by both token syntaxes
pub const NAME_PATTERN: &str = "[0-9a-zA-Z-]+";

/// Which of the two token syntaxes a placeholder uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenVariant {
    Plain,
    Encoded,
}

impl TokenVariant {
    /// Substitution order: encoded tokens contain the plain delimiters as
    /// substrings, so they must be consumed first.
    pub const SUBSTITUTION_ORDER: [TokenVariant; 2] = [TokenVariant::Encoded, TokenVariant::Plain];
}

/// A prefix/postfix pair wrapping a placeholder name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterPair {
    pub prefix: String,
    pub postfix: String,
}

impl DelimiterPair {
    pub fn new(prefix: impl Into<String>, postfix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            postfix: postfix.into(),
        }
    }

    /// Build the literal token for `name`, e.g. `{{name}}`
    pub fn wrap(&self, name: &str) -> String {
        let mut token = String::with_capacity(self.prefix.len() + name.len() + self.postfix.len());
        token.push_str(&self.prefix);
        token.push_str(name);
        token.push_str(&self.postfix);
        token
    }
}

/// The active delimiter pairs for one render job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    pub plain: DelimiterPair,
    pub encoded: DelimiterPair,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            plain: DelimiterPair::new(DEFAULT_PREFIX, DEFAULT_POSTFIX),
            encoded: DelimiterPair::new(DEFAULT_ENCODED_PREFIX, DEFAULT_ENCODED_POSTFIX),
        }
    }
}

impl Delimiters {
    /// Create delimiters, rejecting empty prefixes or postfixes
    ///
    /// # Errors
    ///
    /// Returns `InvalidDelimiters` if any part is empty or if both variants
    /// use the exact same pair.
    pub fn new(plain: DelimiterPair, encoded: DelimiterPair) -> Result<Self> {
        for (label, pair) in [("plain", &plain), ("encoded", &encoded)] {
            if pair.prefix.is_empty() || pair.postfix.is_empty() {
                return Err(XdTemplatesError::InvalidDelimiters(format!(
                    "{} prefix and postfix must not be empty",
                    label
                )));
            }
        }

        if plain == encoded {
            return Err(XdTemplatesError::InvalidDelimiters(format!(
                "plain and encoded delimiters are identical ('{}' ... '{}')",
                plain.prefix, plain.postfix
            )));
        }

        Ok(Self { plain, encoded })
    }

    pub fn pair(&self, variant: TokenVariant) -> &DelimiterPair {
        match variant {
            TokenVariant::Plain => &self.plain,
            TokenVariant::Encoded => &self.encoded,
        }
    }
}

/// A placeholder found in text. Borrowed from the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderToken<'t> {
    pub variant: TokenVariant,
    /// Full literal match including delimiters
    pub full: &'t str,
    /// Inner name
    pub name: &'t str,
}

/// Compiled matchers for both token syntaxes
#[derive(Debug, Clone)]
pub struct PlaceholderGrammar {
    plain: Regex,
    encoded: Regex,
}

impl PlaceholderGrammar {
    /// Compile the matchers for the given delimiters
    ///
    /// # Errors
    ///
    /// Returns `InvalidDelimiters` if a matcher cannot be built.
    pub fn new(delimiters: &Delimiters) -> Result<Self> {
        Ok(Self {
            plain: matcher(&delimiters.plain)?,
            encoded: matcher(&delimiters.encoded)?,
        })
    }

    /// Iterate over every `variant` token in `text`, left to right
    pub fn match_all<'g, 't>(
        &'g self,
        text: &'t str,
        variant: TokenVariant,
    ) -> impl Iterator<Item = PlaceholderToken<'t>> + 'g
    where
        't: 'g,
    {
        let regex = match variant {
            TokenVariant::Plain => &self.plain,
            TokenVariant::Encoded => &self.encoded,
        };

        regex.captures_iter(text).filter_map(move |caps| {
            let full = caps.get(0)?.as_str();
            let name = caps.get(1)?.as_str();
            Some(PlaceholderToken {
                variant,
                full,
                name,
            })
        })
    }
}

/// Check whether `name` is a valid placeholder name
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

/// Build a matcher for `prefix + NAME + postfix`, capturing NAME
fn matcher(pair: &DelimiterPair) -> Result<Regex> {
    let pattern = format!(
        "{}({}){}",
        regex::escape(&pair.prefix),
        NAME_PATTERN,
        regex::escape(&pair.postfix)
    );

    Regex::new(&pattern).map_err(|e| {
        XdTemplatesError::InvalidDelimiters(format!(
            "cannot build matcher for '{}' ... '{}': {}",
            pair.prefix, pair.postfix, e
        ))
    })
}

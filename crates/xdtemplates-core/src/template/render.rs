//! Template rendering - literal token replacement

use crate::template::grammar::{Delimiters, TokenVariant};
use crate::variables::VariableStore;
use std::borrow::Cow;

/// Applies a [`VariableStore`] to template text
///
/// For every variable, in store order, the encoded token (`{{||KEY||}}`) is
/// replaced with the HTML-escaped value, then the plain token (`{{KEY}}`) with
/// the raw value. Replacement is exact and case-sensitive. Tokens with no
/// matching variable are left untouched.
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    delimiters: Delimiters,
}

impl TemplateRenderer {
    pub fn new(delimiters: Delimiters) -> Self {
        Self { delimiters }
    }

    pub fn render(&self, template: &str, variables: &VariableStore) -> String {
        let mut output = template.to_string();

        for (key, value) in variables.iter() {
            for variant in TokenVariant::SUBSTITUTION_ORDER {
                let token = self.delimiters.pair(variant).wrap(key);
                if !output.contains(&token) {
                    continue;
                }

                let replacement = match variant {
                    TokenVariant::Encoded => escape_html(value),
                    TokenVariant::Plain => Cow::Borrowed(value),
                };
                output = output.replace(&token, &replacement);
            }
        }

        output
    }
}

/// Render `template` with the default delimiters
pub fn render(template: &str, variables: &VariableStore) -> String {
    TemplateRenderer::new(Delimiters::default()).render(template, variables)
}

/// HTML-entity-escape a value
///
/// Escapes `& < > " '` and encodes U+00A0..=U+00FF as decimal references.
pub fn escape_html(value: &str) -> Cow<'_, str> {
    if !value.chars().any(needs_escape) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 16);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '\u{a0}'..='\u{ff}' => {
                escaped.push_str("&#");
                escaped.push_str(&(c as u32).to_string());
                escaped.push(';');
            }
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

fn needs_escape(c: char) -> bool {
    matches!(c, '&' | '<' | '>' | '"' | '\'' | '\u{a0}'..='\u{ff}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::grammar::DelimiterPair;

    fn store(pairs: &[(&str, &str)]) -> VariableStore {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_render_without_placeholders_is_unchanged() {
        let variables = store(&[("NAME", "Ana")]);
        let template = "No tokens here.\n{ single } braces }}";
        assert_eq!(render(template, &variables), template);
    }

    #[test]
    fn test_render_encoded_value() {
        let variables = store(&[("GREETING", r#"Hello, "World""#)]);
        assert_eq!(
            render("{{||GREETING||}}", &variables),
            "Hello, &quot;World&quot;"
        );
    }

    #[test]
    fn test_render_plain_value() {
        let variables = store(&[("GREETING", r#"Hello, "World""#)]);
        assert_eq!(render("{{GREETING}}", &variables), r#"Hello, "World""#);
    }

    #[test]
    fn test_render_both_forms_of_same_key() {
        let variables = store(&[("X", "a<b")]);
        assert_eq!(
            render("[{{||X||}}] [{{X}}] [{{||X||}}]", &variables),
            "[a&lt;b] [a<b] [a&lt;b]"
        );
    }

    #[test]
    fn test_render_every_occurrence() {
        let variables = store(&[("N", "1")]);
        assert_eq!(render("{{N}}{{N}} {{N}}", &variables), "11 1");
    }

    #[test]
    fn test_render_is_case_sensitive() {
        let variables = store(&[("name", "ana")]);
        assert_eq!(render("{{NAME}} {{name}}", &variables), "{{NAME}} ana");
    }

    #[test]
    fn test_render_leaves_unknown_tokens() {
        let variables = store(&[("NAME", "Ana")]);
        assert_eq!(
            render("Hi {{NAME}}, bal={{||BAL||}}.", &variables),
            "Hi Ana, bal={{||BAL||}}."
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let variables = store(&[("NAME", "Ana"), ("BAL", "5<6")]);
        let once = render("Hi {{NAME}}, bal={{||BAL||}}.", &variables);
        let twice = render(&once, &variables);
        assert_eq!(once, "Hi Ana, bal=5&lt;6.");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_render_applies_variables_in_order() {
        // A value containing a later key's token is substituted by that key.
        let variables = store(&[("A", "{{B}}"), ("B", "b")]);
        assert_eq!(render("{{A}}", &variables), "b");

        let variables = store(&[("B", "b"), ("A", "{{B}}")]);
        assert_eq!(render("{{A}}", &variables), "{{B}}");
    }

    #[test]
    fn test_render_custom_delimiters() {
        let delimiters = Delimiters::new(
            DelimiterPair::new("<%", "%>"),
            DelimiterPair::new("<%=", "=%>"),
        )
        .unwrap();
        let renderer = TemplateRenderer::new(delimiters);
        let variables = store(&[("V", "&")]);

        assert_eq!(
            renderer.render("<%V%> <%=V=%> {{V}}", &variables),
            "& &amp; {{V}}"
        );
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert!(matches!(escape_html("plain"), Cow::Borrowed(_)));
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_latin1_range() {
        assert_eq!(escape_html("caf\u{e9}"), "caf&#233;");
        assert_eq!(escape_html("a\u{a0}b"), "a&#160;b");
        // Outside U+00A0..=U+00FF passes through
        assert_eq!(escape_html("\u{20ac}"), "\u{20ac}");
    }
}

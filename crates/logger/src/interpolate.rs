//! crates/logger/src/interpolate.rs
//! Placeholder substitution over message templates.

use std::borrow::Cow;

use crate::context::LogContext;

/// Substitutes `{key}` placeholders in `template` using `context`.
///
/// The template is scanned once, left to right. At each position the
/// placeholder patterns of convertible context entries are tried in
/// insertion order; the first match is replaced and the scan resumes after
/// the replacement, so substituted text is never re-scanned. Entries whose
/// value has no textual form contribute no pattern, which leaves their
/// placeholder literal, and placeholders with no matching key stay literal
/// as well.
pub(crate) fn interpolate(template: &str, context: &LogContext) -> String {
    let replacements: Vec<(String, Cow<'_, str>)> = context
        .iter()
        .filter_map(|(key, value)| value.as_text().map(|text| (format!("{{{key}}}"), text)))
        .collect();

    if replacements.is_empty() {
        return template.to_owned();
    }

    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    'scan: while !rest.is_empty() {
        if rest.as_bytes()[0] == b'{' {
            for (pattern, replacement) in &replacements {
                if let Some(tail) = rest.strip_prefix(pattern.as_str()) {
                    output.push_str(replacement);
                    rest = tail;
                    continue 'scan;
                }
            }
        }

        let step = rest.chars().next().map_or(1, char::len_utf8);
        output.push_str(&rest[..step]);
        rest = &rest[step..];
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ContextValue;

    #[test]
    fn substitutes_matching_placeholders() {
        let context = LogContext::new().with("user", "Bob");
        assert_eq!(
            interpolate("hello {user}", &context),
            "hello Bob"
        );
    }

    #[test]
    fn unmatched_placeholders_stay_literal() {
        let context = LogContext::new().with("user", "Bob");
        assert_eq!(
            interpolate("{nothing} for {user}", &context),
            "{nothing} for Bob"
        );
    }

    #[test]
    fn dotted_keys_are_plain_text() {
        let context = LogContext::new().with("foo.bar", "Bar");
        assert_eq!(interpolate("value: {foo.bar}", &context), "value: Bar");
    }

    #[test]
    fn braces_around_literals_are_preserved() {
        let context = LogContext::new().with("user", "Bob").with("foo.bar", "Bar");
        assert_eq!(
            interpolate("{Message {nothing} {user} {foo.bar} a}", &context),
            "{Message {nothing} Bob Bar a}"
        );
    }

    #[test]
    fn unconvertible_values_leave_placeholders_untouched() {
        let context = LogContext::new()
            .with("null", ContextValue::Null)
            .with("handle", ContextValue::Handle)
            .with("nested", ContextValue::Seq(vec![ContextValue::Int(1)]));

        assert_eq!(
            interpolate("{null} {handle} {nested}", &context),
            "{null} {handle} {nested}"
        );
    }

    #[test]
    fn substituted_text_is_not_rescanned() {
        let context = LogContext::new()
            .with("first", "{second}")
            .with("second", "oops");

        assert_eq!(interpolate("{first} {second}", &context), "{second} oops");
    }

    #[test]
    fn empty_context_returns_the_template_verbatim() {
        assert_eq!(
            interpolate("nothing to do", &LogContext::new()),
            "nothing to do"
        );
    }

    #[test]
    fn repeated_placeholders_are_all_replaced() {
        let context = LogContext::new().with("n", 3);
        assert_eq!(interpolate("{n} + {n} = 6", &context), "3 + 3 = 6");
    }

    #[test]
    fn multibyte_text_survives_the_scan() {
        let context = LogContext::new().with("who", "wörld");
        assert_eq!(interpolate("héllo {who} 🎉", &context), "héllo wörld 🎉");
    }
}

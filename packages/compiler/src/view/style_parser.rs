//! Tokenizer for literal `style` attribute values.

/// Parses the string representation of a style attribute into property/value pairs.
///
/// Returns a flat `[name, value, name, value, ...]` vector rather than a map, so the order of
/// declarations in the source is retained. Property names are hyphenated. Quoted and
/// parenthesized sections (`url(...)`, `calc(...)`) may contain `:` and `;` without splitting a
/// declaration, and an unterminated final declaration is accepted.
pub fn parse(value: &str) -> Vec<String> {
    let mut styles = Vec::new();

    let mut paren_depth: i32 = 0;
    let mut quote: Option<char> = None;
    let mut prop_start = 0;
    let mut value_start: Option<usize> = None;
    let mut current_prop: Option<String> = None;
    let mut prev: Option<char> = None;

    for (i, ch) in value.char_indices() {
        let escaped = prev == Some('\\');
        match ch {
            '(' => paren_depth += 1,
            ')' => paren_depth -= 1,
            '\'' | '"' => match quote {
                None => quote = Some(ch),
                Some(open) if open == ch && !escaped => quote = None,
                _ => {}
            },
            ':' if current_prop.is_none() && paren_depth == 0 && quote.is_none() => {
                current_prop = Some(hyphenate(value[prop_start..i].trim()));
                value_start = Some(i + 1);
            }
            ';' if current_prop.is_some()
                && value_start.is_some()
                && paren_depth == 0
                && quote.is_none() =>
            {
                if let (Some(prop), Some(start)) = (current_prop.take(), value_start.take()) {
                    styles.push(prop);
                    styles.push(value[start..i].trim().to_string());
                    prop_start = i + 1;
                }
            }
            _ => {}
        }
        prev = Some(ch);
    }

    if let (Some(prop), Some(start)) = (current_prop, value_start) {
        styles.push(prop);
        styles.push(value[start..].trim().to_string());
    }

    styles
}

/// Converts a camelCased style property name to its hyphenated form.
pub fn hyphenate(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut prev_lower = false;
    for ch in value.chars() {
        if prev_lower && ch.is_ascii_uppercase() {
            result.push('-');
        }
        prev_lower = ch.is_ascii_lowercase();
        result.push(ch.to_ascii_lowercase());
    }
    result
}

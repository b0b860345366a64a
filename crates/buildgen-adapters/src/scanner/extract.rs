//! Named-entry extractors for recognised resource files.
//!
//! Each extractor returns candidate ids in document order. Candidates are not
//! validated here; the collector decides which ones become entries.

use buildgen_core::domain::{CssOptions, JsonOptions, ScanOptions};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Extractor {
    Css(CssOptions),
    Properties,
    Json(JsonOptions),
}

impl Extractor {
    /// Pick the extractor for `file_name`, if its kind is enabled.
    pub(crate) fn for_file(file_name: &str, options: &ScanOptions) -> Option<Self> {
        let (_, extension) = file_name.rsplit_once('.')?;
        match extension.to_ascii_lowercase().as_str() {
            "css" => {
                let css = options.css;
                (css.class_selectors || css.id_selectors || css.element_selectors)
                    .then_some(Self::Css(css))
            }
            "properties" => options.properties.enabled.then_some(Self::Properties),
            "json" => options.json.enabled.then_some(Self::Json(options.json)),
            _ => None,
        }
    }

    /// # Errors
    ///
    /// A reason string when the content cannot be parsed: malformed JSON, or
    /// a bad `\uXXXX` escape in a properties key.
    pub(crate) fn extract(&self, content: &str) -> Result<Vec<String>, String> {
        match self {
            Self::Css(options) => Ok(css_selectors(content, options)),
            Self::Properties => property_keys(content),
            Self::Json(options) => json_keys(content, options),
        }
    }
}

// ── CSS ──────────────────────────────────────────────────────────────────────

/// At-rules whose block holds descriptors or keyframes, never selectors.
/// Every other block (style rules included) is searched for nested rules.
const OPAQUE_AT_RULES: &[&str] = &[
    "font-face",
    "page",
    "counter-style",
    "property",
    "font-feature-values",
    "font-palette-values",
    "viewport",
    "position-try",
];

fn is_opaque_at_rule(name: &str) -> bool {
    name.ends_with("keyframes") || OPAQUE_AT_RULES.contains(&name)
}

fn css_selectors(content: &str, options: &CssOptions) -> Vec<String> {
    let source = strip_css_comments(content);
    let mut out = Vec::new();
    let mut prelude = String::new();
    let mut quote: Option<char> = None;
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            prelude.push(c);
            if c == '\\' {
                prelude.extend(chars.next());
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            // Escaped characters are never structural; `selectors_in` decodes them.
            '\\' => {
                prelude.push(c);
                prelude.extend(chars.next());
            }
            '"' | '\'' => {
                quote = Some(c);
                prelude.push(c);
            }
            '{' => {
                let text = prelude.trim();
                if let Some(at_rule) = text.strip_prefix('@') {
                    let name = at_rule
                        .split(|c: char| c.is_whitespace() || c == '(')
                        .next()
                        .unwrap_or_default()
                        .to_ascii_lowercase();
                    if is_opaque_at_rule(&name) {
                        skip_block(&mut chars);
                    }
                } else {
                    selectors_in(text, options, &mut out);
                }
                prelude.clear();
            }
            // End of a block, a declaration, or a statement like `@import ...;`.
            '}' | ';' => prelude.clear(),
            c => prelude.push(c),
        }
    }

    out
}

fn strip_css_comments(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut rest = content;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

/// Consume up to and including the `}` matching an already consumed `{`.
fn skip_block(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
    let mut depth = 1usize;
    let mut quote: Option<char> = None;
    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(_), '\\') => {
                chars.next();
            }
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '{') => depth += 1,
            (None, '}') => {
                depth -= 1;
                if depth == 0 {
                    return;
                }
            }
            (None, _) => {}
        }
    }
}

fn is_css_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

fn selectors_in(prelude: &str, options: &CssOptions, out: &mut Vec<String>) {
    let chars: Vec<char> = prelude.chars().collect();
    let mut i = 0;
    // True at the start of a compound selector, where a type selector may appear.
    let mut compound_start = true;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '.' | '#' => {
                let (name, next) = read_name(&chars, i + 1);
                let wanted = if c == '.' {
                    options.class_selectors
                } else {
                    options.id_selectors
                };
                if wanted && !name.is_empty() {
                    push_unique(out, name);
                }
                i = next;
                compound_start = false;
            }
            ':' => {
                // Pseudo-class or pseudo-element name; its arguments are
                // scanned like any other selector text.
                let start = if chars.get(i + 1) == Some(&':') { i + 2 } else { i + 1 };
                let (_, next) = read_name(&chars, start);
                i = next;
                compound_start = false;
            }
            '[' => {
                while i < chars.len() && chars[i] != ']' {
                    i += 1;
                }
                i += 1;
                compound_start = false;
            }
            '"' | '\'' => {
                i += 1;
                while i < chars.len() && chars[i] != c {
                    i += 1;
                }
                i += 1;
            }
            ',' | '>' | '+' | '~' | '(' | ')' => {
                i += 1;
                compound_start = true;
            }
            c if c.is_whitespace() => {
                i += 1;
                compound_start = true;
            }
            c if compound_start && (c.is_alphabetic() || c == '_') => {
                let (name, next) = read_name(&chars, i);
                if options.element_selectors {
                    push_unique(out, name);
                }
                i = next;
                compound_start = false;
            }
            _ => {
                i += 1;
                compound_start = false;
            }
        }
    }
}

/// Read an identifier starting at `start`, decoding CSS escapes
/// (`\:` → `:`, `\31 ` → `1`).
fn read_name(chars: &[char], start: usize) -> (String, usize) {
    let mut name = String::new();
    let mut i = start;
    while i < chars.len() {
        let c = chars[i];
        if c == '\\' {
            let Some(&next) = chars.get(i + 1) else { break };
            if next == '\n' {
                break;
            }
            let hex_len = chars[i + 1..]
                .iter()
                .take(6)
                .take_while(|c| c.is_ascii_hexdigit())
                .count();
            if hex_len == 0 {
                name.push(next);
                i += 2;
                continue;
            }
            let digits: String = chars[i + 1..i + 1 + hex_len].iter().collect();
            let decoded = u32::from_str_radix(&digits, 16)
                .ok()
                .filter(|&code| code != 0)
                .and_then(char::from_u32)
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            name.push(decoded);
            i += 1 + hex_len;
            // One whitespace character terminates a hex escape.
            if chars.get(i).is_some_and(|c| c.is_whitespace()) {
                i += 1;
            }
        } else if is_css_name_char(c) {
            name.push(c);
            i += 1;
        } else {
            break;
        }
    }
    (name, i)
}

fn push_unique(out: &mut Vec<String>, name: String) {
    if !out.contains(&name) {
        out.push(name);
    }
}

// ── Properties ───────────────────────────────────────────────────────────────

/// Keys of a Java-style `.properties` file, in file order.
///
/// # Errors
///
/// A reason naming the line when a key holds a malformed `\uXXXX` escape.
fn property_keys(content: &str) -> Result<Vec<String>, String> {
    let mut keys = Vec::new();
    let mut lines = content.lines().enumerate();

    while let Some((index, line)) = lines.next() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }

        let key = property_key(trimmed).map_err(|e| format!("line {}: {e}", index + 1))?;
        if let Some(key) = key {
            push_unique(&mut keys, key);
        }

        // Skip continuation lines of the value.
        let mut current = line;
        while ends_with_continuation(current) {
            match lines.next() {
                Some((_, next)) => current = next,
                None => break,
            }
        }
    }

    Ok(keys)
}

fn property_key(line: &str) -> Result<Option<String>, String> {
    let mut key = String::new();
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('t') => key.push('\t'),
                Some('n') => key.push('\n'),
                Some('r') => key.push('\r'),
                Some('f') => key.push('\u{c}'),
                Some('u') => key.push(unicode_escape(&mut chars)?),
                Some(other) => key.push(other),
                None => break,
            },
            '=' | ':' => break,
            c if c.is_whitespace() => break,
            c => key.push(c),
        }
    }
    Ok((!key.is_empty()).then_some(key))
}

/// Decode the digits after `\u`, joining a surrogate pair written as two
/// consecutive escapes.
fn unicode_escape(chars: &mut std::str::Chars<'_>) -> Result<char, String> {
    let high = utf16_unit(chars)?;
    if !(0xD800..=0xDBFF).contains(&high) {
        return char::from_u32(u32::from(high))
            .ok_or_else(|| format!("unpaired surrogate \\u{high:04X}"));
    }

    let mut rest = chars.clone();
    if !(rest.next() == Some('\\') && rest.next() == Some('u')) {
        return Err(format!("unpaired surrogate \\u{high:04X}"));
    }
    let low = utf16_unit(&mut rest)?;
    *chars = rest;
    char::decode_utf16([high, low])
        .next()
        .and_then(Result::ok)
        .ok_or_else(|| format!("invalid surrogate pair \\u{high:04X}\\u{low:04X}"))
}

fn utf16_unit(chars: &mut std::str::Chars<'_>) -> Result<u16, String> {
    let digits: String = chars.by_ref().take(4).collect();
    if digits.len() == 4 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        u16::from_str_radix(&digits, 16).map_err(|e| e.to_string())
    } else {
        Err(format!("malformed \\uXXXX escape '\\u{digits}'"))
    }
}

fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

// ── JSON ─────────────────────────────────────────────────────────────────────

fn json_keys(content: &str, options: &JsonOptions) -> Result<Vec<String>, String> {
    let value: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
    let mut keys = Vec::new();
    if let Value::Object(_) = value {
        collect_json_keys(&value, options, &mut keys);
    }
    Ok(keys)
}

fn collect_json_keys(value: &Value, options: &JsonOptions, out: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                push_unique(out, key.clone());
                match nested {
                    Value::Object(_) if options.recursive => {
                        collect_json_keys(nested, options, out);
                    }
                    Value::Array(_) if options.arrays => collect_json_keys(nested, options, out),
                    _ => {}
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                match item {
                    Value::Object(_) if options.recursive => collect_json_keys(item, options, out),
                    Value::Array(_) if options.arrays => collect_json_keys(item, options, out),
                    _ => {}
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn css(content: &str, options: CssOptions) -> Vec<String> {
        css_selectors(content, &options)
    }

    #[test]
    fn css_defaults_take_classes_and_ids() {
        let sheet = r#"
            /* .commented { } */
            .text-field, #hyperlink > .label:hover { color: red; }
            button.primary { content: "}"; }
            .text-field { margin: 0 }
        "#;
        assert_eq!(
            css(sheet, CssOptions::default()),
            ["text-field", "hyperlink", "label", "primary"]
        );
    }

    #[test]
    fn css_element_selectors_are_opt_in() {
        let options = CssOptions {
            class_selectors: false,
            id_selectors: false,
            element_selectors: true,
        };
        assert_eq!(
            css("button.primary, div > span::before { }", options),
            ["button", "div", "span"]
        );
    }

    #[test]
    fn css_at_rules() {
        let sheet = r#"
            @import url("base.css");
            @charset "utf-8";
            @font-face { font-family: x; src: url(.woff); }
            @media (max-width: 600px) {
                .compact { padding: 0 }
            }
            @keyframes spin { from { opacity: 0 } to { opacity: 1 } }
            .after { }
        "#;
        assert_eq!(css(sheet, CssOptions::default()), ["compact", "after"]);
    }

    #[test]
    fn css_escapes_are_decoded() {
        let sheet = r#".sm\:flex { } .w-1\/2 { } .\31 0x { } .plain\-name { } #a\62 c { }"#;
        assert_eq!(
            css(sheet, CssOptions::default()),
            ["sm:flex", "w-1/2", "10x", "plain-name", "abc"]
        );
    }

    #[test]
    fn css_nested_rules_are_searched() {
        let sheet = r#"
            .card {
                color: red;
                .title { font-weight: bold; }
                &:hover .icon { }
                &.active { }
            }
            @scope (.panel) {
                .body { }
            }
            @supports (display: grid) {
                @media (min-width: 10px) {
                    .grid { }
                }
            }
            .after { }
        "#;
        assert_eq!(
            css(sheet, CssOptions::default()),
            ["card", "title", "icon", "active", "body", "grid", "after"]
        );
    }

    #[test]
    fn css_quoted_braces_do_not_end_blocks() {
        let sheet = r#".a { content: "} .fake {"; } .b::after { content: '\'}'; } .c { }"#;
        assert_eq!(css(sheet, CssOptions::default()), ["a", "b", "c"]);
    }

    #[test]
    fn css_descriptor_blocks_are_skipped() {
        let sheet = r#"
            @-webkit-keyframes pulse { from { opacity: 0 } }
            @page :first { margin: 1in; @top-left { content: ".x" } }
            @property --size { syntax: '<length>'; inherits: false; }
            .kept { }
        "#;
        assert_eq!(css(sheet, CssOptions::default()), ["kept"]);
    }

    #[test]
    fn css_ignores_attribute_and_pseudo_contents() {
        let sheet = r#"a[href$=".pdf"]:not(.external) { }"#;
        assert_eq!(css(sheet, CssOptions::default()), ["external"]);
    }

    #[test]
    fn properties_keys_in_order() {
        let content = "# comment\n! also comment\n\ntitle = Hello\nsub\\ title: x\nlong=first \\\n    continued\nlast\n";
        assert_eq!(property_keys(content).unwrap(), ["title", "sub title", "long", "last"]);
    }

    #[test]
    fn properties_keys_decode_unicode_escapes() {
        let content = "caf\\u00e9=coffee\nsmile\\uD83D\\uDE00=x\ntab\\tkey=y\n";
        assert_eq!(
            property_keys(content).unwrap(),
            ["caf\u{e9}", "smile\u{1F600}", "tab\tkey"]
        );
    }

    #[test]
    fn properties_malformed_unicode_escape_is_an_error() {
        let err = property_keys("ok=1\nbad\\u12G4=2\n").unwrap_err();
        assert!(err.starts_with("line 2:"), "{err}");
        assert!(property_keys("lone\\uD83D=x").is_err());
        assert!(property_keys("short\\u12").is_err());
    }

    #[test]
    fn json_top_level_by_default() {
        let content = r#"{"name": "x", "nested": {"inner": 1}, "list": [{"item": 1}]}"#;
        let keys = json_keys(content, &JsonOptions::default()).unwrap();
        assert_eq!(keys, ["name", "nested", "list"]);
    }

    #[test]
    fn json_recursive_walks_objects_and_arrays() {
        let options = JsonOptions {
            recursive: true,
            ..JsonOptions::default()
        };
        let content = r#"{"name": "x", "nested": {"inner": 1}, "list": [{"item": 1}, [{"deep": 2}]]}"#;
        let keys = json_keys(content, &options).unwrap();
        assert_eq!(keys, ["name", "nested", "inner", "list", "item", "deep"]);
    }

    #[test]
    fn json_errors_are_reported() {
        assert!(json_keys("{ nope", &JsonOptions::default()).is_err());
        assert!(json_keys("[1, 2]", &JsonOptions::default()).unwrap().is_empty());
    }

    #[test]
    fn extractor_selection() {
        let options = ScanOptions::default();
        assert!(matches!(
            Extractor::for_file("Theme.CSS", &options),
            Some(Extractor::Css(_))
        ));
        assert_eq!(
            Extractor::for_file("strings.properties", &options),
            Some(Extractor::Properties)
        );
        assert_eq!(Extractor::for_file("logo.png", &options), None);
        assert_eq!(Extractor::for_file("README", &options), None);

        let mut disabled = ScanOptions::default();
        disabled.properties.enabled = false;
        disabled.json.enabled = false;
        assert_eq!(Extractor::for_file("a.properties", &disabled), None);
        assert_eq!(Extractor::for_file("a.json", &disabled), None);
        assert!(matches!(
            Extractor::for_file("a.json", &options),
            Some(Extractor::Json(_))
        ));
    }
}

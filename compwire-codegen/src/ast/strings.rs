//! String literal and identifier helpers.

use serde_json::Value;

/// ECMAScript reserved words (strict mode) plus the TypeScript-only
/// words that break `export const <name>` declarations.
const RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Quote a string as a JavaScript string literal.
///
/// Uses JSON escaping, which is a valid subset of JS string syntax.
pub fn js_string(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}

/// Check whether `name` is a plain ASCII JavaScript identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Check whether `name` is a reserved word.
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Render an object literal key, quoting it when it is not an identifier.
pub fn object_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        js_string(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_escapes() {
        assert_eq!(js_string("components/foo"), "\"components/foo\"");
        assert_eq!(js_string("a\"b"), "\"a\\\"b\"");
        assert_eq!(js_string("C:\\p\\Foo.vue"), "\"C:\\\\p\\\\Foo.vue\"");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("FooBar"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("$store"));
        assert!(is_identifier("Card2"));
        assert!(!is_identifier("2Card"));
        assert!(!is_identifier("foo-bar"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn test_reserved_words() {
        assert!(is_reserved_word("default"));
        assert!(is_reserved_word("class"));
        assert!(!is_reserved_word("Default"));
    }

    #[test]
    fn test_object_key() {
        assert_eq!(object_key("Foo"), "Foo");
        assert_eq!(object_key("foo-bar"), "\"foo-bar\"");
    }
}

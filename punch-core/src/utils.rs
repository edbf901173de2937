//! Shared string utilities for code generation.

/// Uppercase the first character (e.g., "userSettings" -> "UserSettings")
pub fn ucfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Check if a string is an ASCII identifier (letter or underscore, then
/// letters, digits, or underscores)
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Check if a string is a class reference: identifiers joined by `\`, with
/// an optional leading `\` (e.g., "\App\Mailer")
pub fn is_class_name(s: &str) -> bool {
    let name = s.strip_prefix('\\').unwrap_or(s);
    !name.is_empty() && name.split('\\').all(is_identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ucfirst() {
        assert_eq!(ucfirst("userSettings"), "UserSettings");
        assert_eq!(ucfirst("Foo"), "Foo");
        assert_eq!(ucfirst("_private"), "_private");
        assert_eq!(ucfirst("x"), "X");
        assert_eq!(ucfirst(""), "");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("name"));
        assert!(is_identifier("_name"));
        assert!(is_identifier("max_size2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("max-size"));
        assert!(!is_identifier("naïve"));
    }

    #[test]
    fn test_is_class_name() {
        assert!(is_class_name("DateTime"));
        assert!(is_class_name("\\DateTime"));
        assert!(is_class_name("App\\Config\\Mailer"));
        assert!(!is_class_name("\\"));
        assert!(!is_class_name("App\\\\Mailer"));
        assert!(!is_class_name("App\\"));
        assert!(!is_class_name("int[]"));
    }
}

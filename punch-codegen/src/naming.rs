//! Class naming derived from config file names.

use std::sync::LazyLock;

use punchcard_core::{NameDerivationError, ucfirst};
use regex::Regex;

/// Suffix appended to every derived class name.
pub const CONFIG_SUFFIX: &str = "Config";

// First `/<identifier>.php` occurrence wins.
static FILE_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/(?P<name>[A-Za-z_][A-Za-z0-9_]*)\.php").expect("file name pattern is valid")
});

/// Extract the base identifier from a file name (`config/app.php` -> `app`).
pub fn short_file_name(file_name: &str) -> Result<&str, NameDerivationError> {
    FILE_NAME_PATTERN
        .captures(file_name)
        .and_then(|caps| caps.name("name"))
        .map(|m| m.as_str())
        .ok_or_else(|| NameDerivationError::new(file_name))
}

/// Derive the config class name from a file name.
///
/// `path/to/userSettings.php` becomes `UserSettingsConfig`. A file name
/// without a path separator before the identifier does not match.
pub fn derive_class_name(file_name: &str) -> Result<String, NameDerivationError> {
    let short = short_file_name(file_name)?;
    Ok(format!("{}{}", ucfirst(short), CONFIG_SUFFIX))
}

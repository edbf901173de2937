//! Snapshot tests for PHP code generation.
//!
//! These tests verify that the generated PHP code matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::str::FromStr;

use punchcard_codegen_php::{Generator, LanguageCodegen};
use punchcard_manifest::Manifest;

/// Generate code from a manifest and return files in manifest order.
fn generate_files(manifest_toml: &str) -> Vec<(String, String)> {
    let manifest = Manifest::from_str(manifest_toml).expect("Failed to parse manifest");
    let generator = Generator::new(&manifest);
    let files = generator.preview().expect("Generation failed");

    files.into_iter().map(|f| (f.path, f.content)).collect()
}

/// Get a specific file from the generated output.
fn get_file<'a>(files: &'a [(String, String)], path: &str) -> Option<&'a str> {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
}

#[test]
fn test_user_settings_class() {
    let files = generate_files(
        r#"
        [output]
        namespace = "App\\Config"

        [[class]]
        file = "path/to/userSettings.php"
        parameters = [
            { name = "name", type = "string" },
            { name = "tags", type = "array" },
        ]
        "#,
    );

    let class = get_file(&files, "UserSettingsConfig.php").expect("Class file not found");
    insta::assert_snapshot!(class, @r"
<?php

declare(strict_types=1);

namespace App\Config;

final class UserSettingsConfig
{
    private string $name;

    /**
     * @var string[]
     */
    private array $tags = [];

    public static function create()
    {
        return new self();
    }

    public function name(string $name): self
    {
        $this->name = $name;
        return $this;
    }

    public function tags(array $tags): self
    {
        $this->tags = $tags;
        return $this;
    }

    public function toArray(): array
    {
        return ['name' => $this->name, 'tags' => $this->tags];
    }
}
");
}

#[test]
fn test_empty_class() {
    let files = generate_files(
        r#"
        [[class]]
        file = "a/Foo.php"
        "#,
    );

    let class = get_file(&files, "FooConfig.php").expect("Class file not found");
    insta::assert_snapshot!(class, @r"
<?php

declare(strict_types=1);

final class FooConfig
{
    public static function create()
    {
        return new self();
    }

    public function toArray(): array
    {
        return [];
    }
}
");
}

#[test]
fn test_scalar_and_class_types() {
    let files = generate_files(
        r#"
        [[class]]
        file = "config/mail.php"
        parameters = [
            { name = "port", type = "int" },
            { name = "timeout", type = "float" },
            { name = "secure", type = "bool" },
            { name = "transport", type = "\\App\\Mail\\Transport" },
        ]
        "#,
    );

    let class = get_file(&files, "MailConfig.php").expect("Class file not found");
    insta::assert_snapshot!(class, @r"
<?php

declare(strict_types=1);

final class MailConfig
{
    private int $port;

    private float $timeout;

    private bool $secure;

    private \App\Mail\Transport $transport;

    public static function create()
    {
        return new self();
    }

    public function port(int $port): self
    {
        $this->port = $port;
        return $this;
    }

    public function timeout(float $timeout): self
    {
        $this->timeout = $timeout;
        return $this;
    }

    public function secure(bool $secure): self
    {
        $this->secure = $secure;
        return $this;
    }

    public function transport(\App\Mail\Transport $transport): self
    {
        $this->transport = $transport;
        return $this;
    }

    public function toArray(): array
    {
        return ['port' => $this->port, 'timeout' => $this->timeout, 'secure' => $this->secure, 'transport' => $this->transport];
    }
}
");
}

#[test]
fn test_one_file_per_class() {
    let files = generate_files(
        r#"
        [[class]]
        file = "config/app.php"

        [[class]]
        file = "config/database.php"
        parameters = [{ name = "dsn", type = "string" }]
        "#,
    );

    let paths: Vec<&str> = files.iter().map(|(p, _)| p.as_str()).collect();
    assert_eq!(paths, vec!["AppConfig.php", "DatabaseConfig.php"]);

    let database = get_file(&files, "DatabaseConfig.php").expect("Class file not found");
    assert!(database.contains("final class DatabaseConfig\n"));
    assert!(!database.contains("namespace"));
}

#[test]
fn test_blank_lines_are_not_indented() {
    let files = generate_files(
        r#"
        [[class]]
        file = "config/app.php"
        parameters = [{ name = "debug", type = "bool" }]
        "#,
    );

    let class = get_file(&files, "AppConfig.php").expect("Class file not found");
    assert!(class.lines().all(|line| line.is_empty() || !line.trim().is_empty()));
    assert!(class.ends_with("}\n"));
}

use std::fs::File;
use std::io::Write;
use stencil::constants::IGNORE_FILE;
use stencil::ignore::parse_ignore_file;
use tempfile::TempDir;

#[test]
fn test_parse_ignore_file() {
    let temp_dir = TempDir::new().unwrap();
    let ignore_path = temp_dir.path().join(IGNORE_FILE);

    // Test without .stencilignore
    let glob_set = parse_ignore_file(&ignore_path).unwrap();
    assert!(glob_set.is_match("**/.DS_Store")); // Default pattern
    assert!(glob_set.is_match(".git"));

    // Test with .stencilignore
    let mut file = File::create(&ignore_path).unwrap();
    writeln!(file, "*.pyc\n# a comment\n\n__pycache__").unwrap();

    let glob_set = parse_ignore_file(&ignore_path).unwrap();
    assert!(glob_set.is_match("file.pyc"));
    assert!(glob_set.is_match("__pycache__"));
    assert!(!glob_set.is_match("# a comment"));
    assert!(glob_set.is_match("**/.DS_Store")); // Default pattern still works
}

#[test]
fn test_invalid_pattern_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let ignore_path = temp_dir.path().join(IGNORE_FILE);

    let mut file = File::create(&ignore_path).unwrap();
    writeln!(file, "a[").unwrap();

    assert!(parse_ignore_file(&ignore_path).is_err());
}

use notify_core::config::NotifierConfig;
use notify_core::error::ConfigError;

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

/// **VALUE**: A config file on disk loads end to end.
///
/// **WHY THIS MATTERS**: This is the path every invocation takes before touching stdin.
///
/// **BUG THIS CATCHES**: Would catch `load()` and `from_toml_str()` drifting apart.
#[test]
fn given_valid_file_when_loading_then_returns_config() {
    // GIVEN: A config file
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[webhook]\nurl = \"https://hooks.slack.com/services/\"\nsecret = \"T/B/X\"\n\n[lookup]\npublic_ip = true"
    )
    .unwrap();

    // WHEN: Loading
    let config = NotifierConfig::load(file.path()).unwrap();

    // THEN: Values are read
    assert_eq!(
        config.webhook.endpoint().expose(),
        "https://hooks.slack.com/services/T/B/X"
    );
    assert!(config.lookup.public_ip);
}

#[test]
fn given_missing_file_when_loading_then_returns_read_error() {
    let path = Path::new("/nonexistent/slackbot/config.toml");

    let result = NotifierConfig::load(path);

    match result {
        Err(ConfigError::ReadError { path: got, .. }) => assert_eq!(got, path),
        other => panic!("Expected read error, got {other:?}"),
    }
}

/// **VALUE**: Malformed TOML reports the file path.
///
/// **WHY THIS MATTERS**: Operators may have several candidate config files; the error
/// must say which one is broken.
///
/// **BUG THIS CATCHES**: Would catch the path being dropped from `ParseError`.
#[test]
fn given_malformed_file_when_loading_then_parse_error_names_path() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "webhook = [unterminated").unwrap();

    let result = NotifierConfig::load(file.path());

    match result {
        Err(err @ ConfigError::ParseError { .. }) => {
            assert!(err.to_string().contains(&file.path().display().to_string()));
        }
        other => panic!("Expected parse error, got {other:?}"),
    }
}

//! Tests for database path resolution
//!
//! Environment-variable tests are serialized because they mutate
//! process-wide state.

use reg_common::config::{
    database_from_config_file, resolve_database_path, DATABASE_ENV_VAR, DEFAULT_DATABASE,
};
use serial_test::serial;
use std::io::Write;
use std::path::PathBuf;

#[test]
#[serial]
fn cli_argument_has_highest_priority() {
    std::env::set_var(DATABASE_ENV_VAR, "/env/reg.sqlite");

    let path = resolve_database_path(Some("/cli/reg.sqlite")).unwrap();
    assert_eq!(path, PathBuf::from("/cli/reg.sqlite"));

    std::env::remove_var(DATABASE_ENV_VAR);
}

#[test]
#[serial]
fn environment_variable_beats_the_default() {
    std::env::set_var(DATABASE_ENV_VAR, "/env/reg.sqlite");

    let path = resolve_database_path(None).unwrap();
    assert_eq!(path, PathBuf::from("/env/reg.sqlite"));

    std::env::remove_var(DATABASE_ENV_VAR);
}

#[test]
#[serial]
fn falls_back_to_the_compiled_default() {
    std::env::remove_var(DATABASE_ENV_VAR);

    // No CLI argument and no env var; unless the machine running the
    // tests has a reg config file installed, this lands on the default.
    let path = resolve_database_path(None).unwrap();
    if path != PathBuf::from(DEFAULT_DATABASE) {
        // A real config file answered; nothing further to assert here.
        return;
    }
    assert_eq!(path, PathBuf::from(DEFAULT_DATABASE));
}

#[test]
fn config_file_database_key_is_read() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "database = \"/data/catalog.sqlite\"").unwrap();

    let path = database_from_config_file(file.path()).unwrap();
    assert_eq!(path, PathBuf::from("/data/catalog.sqlite"));
}

#[test]
fn config_file_without_database_key_is_ignored() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "port = 5000").unwrap();

    assert_eq!(database_from_config_file(file.path()), None);
}

#[test]
fn unreadable_or_malformed_config_file_is_ignored() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "this is not toml = = =").unwrap();

    assert_eq!(database_from_config_file(file.path()), None);
    assert_eq!(
        database_from_config_file(&PathBuf::from("/nonexistent/config.toml")),
        None
    );
}

use std::{env, fs, path::PathBuf};

use devapps::config::{ConfigError, load_env_from};

// Fresh file under the system temp dir, unique per test
fn env_file(name: &str, content: &[u8]) -> PathBuf {
    let dir = env::temp_dir().join(format!("devapps-config-{}-{}", std::process::id(), name));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(".env");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_missing_env_file_is_tolerated() {
    let path = env::temp_dir().join(format!("devapps-config-{}-absent/.env", std::process::id()));
    assert!(load_env_from(&path).is_ok());
}

#[test]
fn test_valid_env_file_sets_variables() {
    let path = env_file("valid", b"DEVAPPS_TEST_VALID_URL=https://api.example.com/\n");

    load_env_from(&path).unwrap();

    assert_eq!(
        env::var("DEVAPPS_TEST_VALID_URL").unwrap(),
        "https://api.example.com/"
    );
}

#[test]
fn test_malformed_env_file_is_an_error() {
    let path = env_file(
        "malformed",
        b"BROKEN LINE WITHOUT EQUALS\nDEVAPPS_TEST_MALFORMED_URL=https://api.example.com/\n",
    );

    let err = load_env_from(&path).unwrap_err();

    match &err {
        ConfigError::Parse { path: reported, .. } => assert_eq!(reported, &path),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().contains(".env"));
}

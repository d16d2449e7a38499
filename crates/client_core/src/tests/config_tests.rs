use super::*;

use std::{
    collections::HashMap,
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn temp_settings_file(contents: &str) -> std::path::PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("langid_settings_test_{suffix}.toml"));
    fs::write(&path, contents).expect("write settings");
    path
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn defaults_point_at_local_service_without_timeout() {
    let settings = load_settings_from(Path::new("/nonexistent/langid.toml"), env_from(&[]));
    assert_eq!(settings, ClientSettings::default());
    assert_eq!(settings.endpoint, "http://localhost:5000/predict");
    assert_eq!(settings.request_timeout_secs, None);
    assert_eq!(settings.resubmit_policy, ResubmitPolicy::Supersede);
}

#[test]
fn file_values_override_defaults() {
    let path = temp_settings_file(
        r#"
endpoint = "https://langid.example.com/predict"
request_timeout_secs = 15
resubmit_policy = "ignore_while_pending"
"#,
    );

    let settings = load_settings_from(&path, env_from(&[]));
    fs::remove_file(&path).expect("cleanup");

    assert_eq!(settings.endpoint, "https://langid.example.com/predict");
    assert_eq!(settings.request_timeout_secs, Some(15));
    assert_eq!(settings.resubmit_policy, ResubmitPolicy::IgnoreWhilePending);
}

#[test]
fn environment_overrides_file_and_app_prefix_wins() {
    let path = temp_settings_file(r#"endpoint = "http://file:1/predict""#);

    let settings = load_settings_from(
        &path,
        env_from(&[
            ("LANGID_ENDPOINT", "http://env:2/predict"),
            ("APP__ENDPOINT", "http://app:3/predict"),
            ("APP__REQUEST_TIMEOUT_SECS", "5"),
            ("APP__RESUBMIT_POLICY", "ignore"),
        ]),
    );
    fs::remove_file(&path).expect("cleanup");

    assert_eq!(settings.endpoint, "http://app:3/predict");
    assert_eq!(settings.request_timeout_secs, Some(5));
    assert_eq!(settings.resubmit_policy, ResubmitPolicy::IgnoreWhilePending);
}

#[test]
fn malformed_values_are_ignored() {
    let path = temp_settings_file("endpoint = [not toml");

    let settings = load_settings_from(
        &path,
        env_from(&[
            ("APP__REQUEST_TIMEOUT_SECS", "soon"),
            ("APP__RESUBMIT_POLICY", "queue"),
        ]),
    );
    fs::remove_file(&path).expect("cleanup");

    assert_eq!(settings, ClientSettings::default());
}

#[test]
fn zero_timeout_means_no_timeout() {
    let settings = load_settings_from(
        Path::new("/nonexistent/langid.toml"),
        env_from(&[("APP__REQUEST_TIMEOUT_SECS", "0")]),
    );
    assert_eq!(settings.request_timeout_secs, None);
}

#[test]
fn zero_timeout_in_file_means_no_timeout() {
    let path = temp_settings_file("request_timeout_secs = 0");

    let settings = load_settings_from(&path, env_from(&[]));
    fs::remove_file(&path).expect("cleanup");

    assert_eq!(settings.request_timeout_secs, None);
}

#[test]
fn validates_http_endpoints() {
    let url = validate_endpoint(" http://localhost:5000/predict ").expect("valid");
    assert_eq!(url.path(), "/predict");
    assert!(validate_endpoint("https://langid.example.com/predict").is_ok());
}

#[test]
fn rejects_unusable_endpoints() {
    assert!(validate_endpoint("localhost:5000/predict").is_err());
    assert!(validate_endpoint("ftp://example.com/predict").is_err());
    let err = validate_endpoint("not a url").expect_err("must fail");
    assert!(err.to_string().contains("invalid classification endpoint"));
}

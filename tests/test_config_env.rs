use recipe_search::load_config;
use std::env;
use std::io::Write;
use std::time::Duration;

const OVERRIDES: [(&str, &str); 2] = [
    ("RECIPE_SEARCH__API__APP_ID", "env-id"),
    ("RECIPE_SEARCH__TIMEOUT_SECS", "7"),
];

#[test]
fn test_environment_overrides_file() {
    let path = env::temp_dir().join(format!("recipe-search-env-{}.toml", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        "timeout_secs = 30\n\n[api]\nbase_url = \"http://localhost:9999/search\"\napp_id = \"file-id\"\napp_key = \"file-key\""
    )
    .unwrap();

    // Save the env vars so they can be restored afterwards
    let originals: Vec<_> = OVERRIDES
        .iter()
        .map(|(name, _)| (*name, env::var(name).ok()))
        .collect();
    for (name, value) in OVERRIDES {
        env::set_var(name, value);
    }

    let result = load_config(path.to_str());

    for (name, original) in originals {
        match original {
            Some(value) => env::set_var(name, value),
            None => env::remove_var(name),
        }
    }
    std::fs::remove_file(&path).ok();

    let config = result.unwrap();
    assert_eq!(config.api.app_id.as_deref(), Some("env-id"));
    assert_eq!(config.timeout(), Some(Duration::from_secs(7)));
    // Keys without an override keep the file's values
    assert_eq!(config.api.app_key.as_deref(), Some("file-key"));
    assert_eq!(config.api.base_url, "http://localhost:9999/search");
}

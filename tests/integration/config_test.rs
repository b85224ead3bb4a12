use crate::appsync;
use predicates::prelude::*;

#[test]
fn config_show_defaults() {
    // No config file present, so every value is a default
    let tmp = tempfile::tempdir().unwrap();
    appsync(tmp.path(), tmp.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded config files: (none)"))
        .stdout(predicate::str::contains("Resolved settings:"))
        .stdout(predicate::str::contains("pull.format: text <- default"))
        .stdout(predicate::str::contains(
            "pull.project_lookup: enclosing <- default",
        ))
        .stdout(predicate::str::contains(
            "directory.api_token: (unset) <- default",
        ));
}

#[test]
fn config_show_with_user_config() {
    let tmp = tempfile::tempdir().unwrap();
    let config_path = tmp.path().join("config.toml");
    std::fs::write(
        &config_path,
        r#"
[directory]
base_url = "https://directory.internal/api"
api_token = "s3cr3t"

[pull]
format = "json"
"#,
    )
    .unwrap();

    appsync(tmp.path(), tmp.path())
        .env("APPSYNC_CONFIG", &config_path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"))
        .stdout(predicate::str::contains(
            "directory.base_url: https://directory.internal/api <- user config",
        ))
        .stdout(predicate::str::contains("pull.format: json <- user config"))
        .stdout(predicate::str::contains("s3cr3t").not());
}

#[test]
fn config_show_env_overrides() {
    let tmp = tempfile::tempdir().unwrap();
    appsync(tmp.path(), tmp.path())
        .env("APPSYNC_PROJECT_LOOKUP", "exact")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "pull.project_lookup: exact <- env var (APPSYNC_PROJECT_LOOKUP)",
        ));
}

#[test]
fn invalid_user_config_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let config_path = tmp.path().join("config.toml");
    std::fs::write(&config_path, "[pull]\nformat = \"yaml\"\n").unwrap();

    appsync(tmp.path(), tmp.path())
        .env("APPSYNC_CONFIG", &config_path)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid pull.format"));
}

#[test]
fn config_show_reports_project_at_path() {
    let tmp = tempfile::tempdir().unwrap();
    let project = tmp.path().join("eggcorn");
    std::fs::create_dir_all(project.join("functions")).unwrap();
    std::fs::write(
        project.join("config.json"),
        r#"{"config_version":20210101,"app_id":"eggcorn-abcde","group_id":"60aa"}"#,
    )
    .unwrap();

    appsync(tmp.path(), tmp.path())
        .args(["config", "show", "--path", "eggcorn/functions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project for"))
        .stdout(predicate::str::contains("eggcorn/functions:"))
        .stdout(predicate::str::contains("config.json"))
        .stdout(predicate::str::contains("config_version: 20210101"))
        .stdout(predicate::str::contains("app_id: eggcorn-abcde"));

    appsync(tmp.path(), tmp.path())
        .env("APPSYNC_PROJECT_LOOKUP", "exact")
        .args(["config", "show", "--path", "eggcorn/functions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  (none)"));
}

#[test]
fn config_show_without_path_uses_working_directory() {
    let tmp = tempfile::tempdir().unwrap();
    appsync(tmp.path(), tmp.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  (none)"));
}

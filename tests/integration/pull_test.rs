use crate::{appsync, spawn_directory_server};
use predicates::prelude::*;

const PROJECT_JSON: &str =
    r#"{"config_version":20210101,"app_id":"eggcorn-abcde","name":"eggcorn","group_id":"60aa"}"#;

const APPS_JSON: &str = r#"[
  {"_id":"5f1a","group_id":"60aa","client_app_id":"eggcorn-abcde","name":"eggcorn"},
  {"_id":"5f2b","group_id":"60aa","client_app_id":"other-fghij","name":"other"}
]"#;

#[test]
fn pull_outside_project_fails() {
    let tmp = tempfile::tempdir().unwrap();
    appsync(tmp.path(), tmp.path())
        .args(["pull", "--project-lookup", "exact"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project not found"));
}

#[test]
fn pull_with_conflicting_version_fails() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("app_config.json"), PROJECT_JSON).unwrap();

    appsync(tmp.path(), tmp.path())
        .args(["pull", "--config-version", "20200603"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config version mismatch"));
}

#[test]
fn pull_rejects_unknown_version_flag() {
    let tmp = tempfile::tempdir().unwrap();
    appsync(tmp.path(), tmp.path())
        .args(["pull", "--config-version", "20190101"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported config version"));
}

#[test]
fn pull_into_new_directory_needs_no_lookup() {
    let tmp = tempfile::tempdir().unwrap();
    appsync(tmp.path(), tmp.path())
        .args(["pull", "--local", "fresh/app", "--project-lookup", "exact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fresh/app"))
        .stdout(predicate::str::contains("Config version: 20210101"))
        .stdout(predicate::str::contains("No source app selected"));
}

#[cfg(unix)]
#[test]
fn pull_expands_home_in_local_flag() {
    let tmp = tempfile::tempdir().unwrap();
    let home = tmp.path().join("home");
    std::fs::create_dir_all(&home).unwrap();
    let expected = home.join("my/project/root");

    appsync(tmp.path(), &home)
        .args([
            "pull",
            "--target",
            "~/my/project/root",
            "--project-lookup",
            "exact",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "\"target\": \"{}\"",
            expected.display()
        )));
}

#[test]
fn pull_inside_project_resolves_bound_app() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("app_config.json"), PROJECT_JSON).unwrap();
    let base_url = spawn_directory_server("/groups/60aa/apps", APPS_JSON);

    appsync(tmp.path(), tmp.path())
        .args(["pull", "--base-url", &base_url, "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"from\": \"eggcorn-abcde\""))
        .stdout(predicate::str::contains("\"app_version\": 20210101"))
        .stdout(predicate::str::contains("\"group_id\": \"60aa\""))
        .stdout(predicate::str::contains("\"app_id\": \"5f1a\""));
}

#[test]
fn pull_from_named_app_uses_env_base_url() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("app_config.json"), PROJECT_JSON).unwrap();
    let base_url = spawn_directory_server("/apps", APPS_JSON);

    appsync(tmp.path(), tmp.path())
        .env("APPSYNC_BASE_URL", &base_url)
        .args(["pull", "--remote", "other"])
        .assert()
        .success()
        .stdout(predicate::str::contains("From:           other"))
        .stdout(predicate::str::contains("App ID:   5f2b"));
}

#[test]
fn pull_with_ambiguous_app_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let base_url = spawn_directory_server(
        "/apps",
        r#"[
  {"_id":"5f1a","group_id":"60aa","client_app_id":"eggcorn-abcde","name":"eggcorn"},
  {"_id":"6a9c","group_id":"70bb","client_app_id":"eggcorn-zzzzz","name":"eggcorn"}
]"#,
    );

    appsync(tmp.path(), tmp.path())
        .args([
            "pull",
            "--local",
            "new-app",
            "--from",
            "eggcorn",
            "--base-url",
            &base_url,
            "--project-lookup",
            "exact",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ambiguous app"));
}

#[test]
fn pull_with_unknown_app_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let base_url = spawn_directory_server("/groups/60aa/apps", "[]");

    appsync(tmp.path(), tmp.path())
        .args([
            "pull",
            "--local",
            "new-app",
            "--remote",
            "missing",
            "--project",
            "60aa",
            "--base-url",
            &base_url,
            "--project-lookup",
            "exact",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("App not found"))
        .stderr(predicate::str::contains("app 'missing' in project '60aa'"));
}

#[test]
fn pull_reports_directory_http_errors() {
    let tmp = tempfile::tempdir().unwrap();
    let base_url = spawn_directory_server("/somewhere-else", "[]");

    appsync(tmp.path(), tmp.path())
        .args([
            "pull",
            "--local",
            "new-app",
            "--remote",
            "eggcorn",
            "--base-url",
            &base_url,
            "--project-lookup",
            "exact",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP 404"));
}

#[test]
fn pull_reads_declared_version_from_config_json() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("config.json"), PROJECT_JSON).unwrap();
    let base_url = spawn_directory_server("/groups/60aa/apps", APPS_JSON);

    appsync(tmp.path(), tmp.path())
        .args(["pull", "--base-url", &base_url, "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"app_version\": 20210101"))
        .stdout(predicate::str::contains("\"app_id\": \"5f1a\""));
}

#[test]
fn pull_keeps_explicit_local_inside_a_project() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("app_config.json"), PROJECT_JSON).unwrap();
    let expected = tmp.path().join("new-app");

    appsync(tmp.path(), tmp.path())
        .args(["pull", "--local", "new-app", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "\"target\": \"{}\"",
            expected.display()
        )))
        .stdout(predicate::str::contains("\"from\": null"));
}

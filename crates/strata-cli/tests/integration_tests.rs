//! Integration tests for the `strata` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// `strata` running inside `dir`, isolated from the host's config and env.
fn strata(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("strata");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("STRATA_TEMPLATES_DIR")
        .env_remove("STRATA_DEFAULTS__PROFILE")
        .env_remove("STRATA_DEFAULTS__LAYERS")
        .write_stdin("");
    cmd
}

#[test]
fn help_lists_commands() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("skeleton"))
        .stdout(predicate::str::contains("feature"))
        .stdout(predicate::str::contains("templates"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn skeleton_creates_directory_tree() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .arg("skeleton")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Clean Architecture generated successfully!",
        ));

    for dir in [
        "lib/data/models",
        "lib/domain/usecases",
        "lib/presentation/shared/widgets",
    ] {
        assert!(temp.path().join(dir).is_dir(), "{dir} missing");
    }
}

#[test]
fn domain_layer_for_todo() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["feature", "todo", "--layer", "domain"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Domain layer files for todo feature generated successfully.",
        ))
        .stdout(predicate::str::contains(
            "\u{2713} created  lib/domain/entities/todo.dart",
        ));

    let entity = fs::read_to_string(temp.path().join("lib/domain/entities/todo.dart")).unwrap();
    assert!(entity.contains("class Todo"));
    assert!(
        temp.path()
            .join("lib/domain/usecases/get_todos_usecase.dart")
            .is_file()
    );
}

#[test]
fn second_run_skips_existing_files() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["feature", "todo", "--layer", "data"])
        .assert()
        .success();

    let model = temp.path().join("lib/data/models/todo_model.dart");
    fs::write(&model, "edited by hand").unwrap();

    strata(temp.path())
        .args(["feature", "todo", "--layer", "data"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\u{2022} skipped (exists)  lib/data/models/todo_model.dart",
        ))
        .stdout(predicate::str::contains("created").not());

    assert_eq!(fs::read_to_string(&model).unwrap(), "edited by hand");
}

#[test]
fn padded_name_is_rejected_like_dry_run() {
    let temp = TempDir::new().unwrap();
    for args in [
        ["feature", " todo", "--layer", "domain"],
        ["feature", " todo", "--dry-run", "--layer=domain"],
    ] {
        strata(temp.path()).args(args).assert().code(2);
    }

    assert!(!temp.path().join("lib").exists());
}

#[test]
fn invalid_name_is_a_user_error() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["feature", "7up", "--layer", "domain"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Invalid feature name"))
        .stderr(predicate::str::contains("7up"));

    assert!(!temp.path().join("lib").exists());
}

#[test]
fn missing_root_is_not_found() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["feature", "todo", "--all-layers", "--root", "absent"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("absent"));
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["feature", "todo", "--layer", "domain", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "+ lib/domain/entities/todo.dart  (domain/entity)",
        ));

    assert!(!temp.path().join("lib").exists());
}

#[test]
fn missing_name_without_terminal_fails() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["feature", "--layer", "domain"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Enter feature name:"));
}

#[test]
fn profile_from_environment() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .env("STRATA_DEFAULTS__PROFILE", "flat")
        .args(["feature", "order", "--layer", "data"])
        .assert()
        .success();

    assert!(
        temp.path()
            .join("lib/data/datasources/order_remote_data_source.dart")
            .is_file()
    );
}

#[test]
fn json_output_is_a_report_array() {
    let temp = TempDir::new().unwrap();
    let out = strata(temp.path())
        .args([
            "--output-format",
            "json",
            "feature",
            "category",
            "--all-layers",
            "--profile",
            "pluralized",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let reports: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let reports = reports.as_array().unwrap();
    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0]["layer"], "data");
    assert_eq!(reports[0]["feature"], "category");
    assert!(
        reports
            .iter()
            .flat_map(|r| r["files"].as_array().unwrap())
            .all(|f| f["status"] == "created")
    );
    assert!(
        temp.path()
            .join("lib/presentation/features/categorys/screens/categorys_screen.dart")
            .is_file()
    );
}

#[test]
fn templates_json_lists_builtins() {
    let temp = TempDir::new().unwrap();
    let out = strata(temp.path())
        .args(["templates", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let templates: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let ids: Vec<&str> = templates
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids.len(), 11);
    assert!(ids.contains(&"domain/entity"));
    assert!(ids.contains(&"data/remote_data_source_impl"));
}

#[test]
fn project_template_overrides_builtin() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".strata/templates/domain");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("entity.template"), "// custom FEATURE_NAME\n").unwrap();

    strata(temp.path())
        .args(["feature", "todo", "--layer", "domain"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("lib/domain/entities/todo.dart")).unwrap(),
        "// custom Todo\n"
    );
}

#[test]
fn config_init_then_get() {
    let temp = TempDir::new().unwrap();
    let cfg = temp.path().join("strata.toml");

    strata(temp.path())
        .args(["config", "init", "--config"])
        .arg(&cfg)
        .assert()
        .success();
    assert!(cfg.is_file());

    strata(temp.path())
        .args(["config", "init", "--config"])
        .arg(&cfg)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    strata(temp.path())
        .args(["--config"])
        .arg(&cfg)
        .args(["config", "get", "defaults.profile"])
        .assert()
        .success()
        .stdout("per-feature\n");
}

#[test]
fn missing_config_file_is_a_configuration_error() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["--config", "nope.toml", "templates"])
        .assert()
        .code(4);
}

#[test]
fn config_path_points_into_config_dir() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strata"))
        .stdout(predicate::str::ends_with("config.toml\n"));
}

#[test]
fn shell_completions() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strata"));
}

#[test]
fn quiet_suppresses_report() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["-q", "feature", "todo", "--layer", "domain"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

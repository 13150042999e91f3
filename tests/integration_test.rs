use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn projboard_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_projboard"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn shell_session(args: &[&str], input: &str) -> Output {
    let mut child = projboard_cmd()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    child.wait_with_output().unwrap()
}

#[test]
fn test_shell_is_default_command() {
    let output = shell_session(&[], "add Build shed | Backyard shed project | 3\nboard\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Created project 001"));
    assert!(stdout.contains("ACTIVE PROJECTS"));
    assert!(stdout.contains("Build shed"));
    assert!(stdout.contains("3 persons assigned"));
}

#[test]
fn test_full_board_workflow() {
    let output = shell_session(
        &["shell"],
        "add Build shed | Backyard shed project | 3\n\
         add Paint fence | Two coats of white | 1\n\
         move 1 finished\n\
         move 1 finished\n\
         list finished\n\
         list active\n",
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Moved project 001"));
    assert!(stdout.contains("is already finished"));

    let finished = stdout.split("FINISHED PROJECTS").nth(1).unwrap();
    let finished = finished.split("ACTIVE PROJECTS").next().unwrap();
    assert!(finished.contains("Build shed"));
    assert!(!finished.contains("Paint fence"));

    let active = stdout.rsplit("ACTIVE PROJECTS").next().unwrap();
    assert!(active.contains("Paint fence"));
    assert!(active.contains("1 person assigned"));
}

#[test]
fn test_shell_reports_invalid_input_and_continues() {
    let output = shell_session(
        &["shell"],
        "add | tiny | 7\nmove nonexistent active\nadd Garden | Plant tomatoes | 2\nlist --json\n",
    );

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid input, please try again!"));
    assert!(stderr.contains("Project not found: nonexistent"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json_start = stdout.find('[').unwrap();
    let projects: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();
    assert_eq!(projects.as_array().unwrap().len(), 1);
    assert_eq!(projects[0]["title"], "Garden");
    assert_eq!(projects[0]["status"], "active");
    assert_eq!(projects[0]["people"], 2);
}

#[test]
fn test_run_script_prints_board() {
    let tmp = TempDir::new().unwrap();
    let script = tmp.path().join("board.txt");
    fs::write(
        &script,
        "# weekend plans\n\
         add Build shed | Backyard shed project | 3\n\
         add Clean garage | Sort the boxes | 2\n\
         move 2 finished\n",
    )
    .unwrap();

    let output = projboard_cmd()
        .args(["run", script.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Created project"));
    let finished = stdout.split("FINISHED PROJECTS").nth(1).unwrap();
    assert!(finished.contains("Clean garage"));
    assert!(!finished.contains("Build shed"));
}

#[test]
fn test_run_script_echo_prints_command_output() {
    let tmp = TempDir::new().unwrap();
    let script = tmp.path().join("board.txt");
    fs::write(
        &script,
        "add Build shed | Backyard shed project | 3\nlist active\n",
    )
    .unwrap();

    let output = projboard_cmd()
        .args(["run", script.to_str().unwrap(), "--echo"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Created project 001"));
    assert_eq!(stdout.matches("ACTIVE PROJECTS").count(), 2);
}

#[test]
fn test_run_echo_conflicts_with_json() {
    let tmp = TempDir::new().unwrap();
    let script = tmp.path().join("board.txt");
    fs::write(&script, "").unwrap();

    let output = projboard_cmd()
        .args(["run", script.to_str().unwrap(), "--echo", "--json"])
        .output()
        .unwrap();

    assert!(!output.status.success());
}

#[test]
fn test_run_script_json() {
    let tmp = TempDir::new().unwrap();
    let script = tmp.path().join("board.txt");
    fs::write(
        &script,
        "add Build shed | Backyard shed project | 3\nmove 1 finished\n",
    )
    .unwrap();

    let output = projboard_cmd()
        .args(["run", script.to_str().unwrap(), "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let projects: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(projects[0]["title"], "Build shed");
    assert_eq!(projects[0]["status"], "finished");
}

#[test]
fn test_run_strict_fails_on_bad_line() {
    let tmp = TempDir::new().unwrap();
    let script = tmp.path().join("board.txt");
    fs::write(&script, "add Good | Valid description | 2\nfrobnicate\n").unwrap();

    let output = projboard_cmd()
        .args(["run", script.to_str().unwrap(), "--strict"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown command: frobnicate"));
}

#[test]
fn test_run_missing_script_fails() {
    let tmp = TempDir::new().unwrap();
    let output = projboard_cmd()
        .args(["run", tmp.path().join("missing.txt").to_str().unwrap()])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot open script"));
}

#[test]
fn test_check_valid_input() {
    let output = projboard_cmd()
        .args([
            "check",
            "--title",
            "Build shed",
            "--description",
            "Backyard shed project",
            "--people",
            "1",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Valid: Build shed"));
    assert!(stdout.contains("1 person assigned"));
}

#[test]
fn test_check_invalid_input_json() {
    let output = projboard_cmd()
        .args([
            "check",
            "--title",
            "",
            "--description",
            "shed",
            "--people",
            "-1",
            "--json",
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["valid"], false);
    let errors = report["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 3);
    assert!(errors[0].as_str().unwrap().starts_with("title"));
    assert!(errors[1].as_str().unwrap().starts_with("description"));
    assert!(errors[2].as_str().unwrap().starts_with("people"));
}

#[test]
fn test_config_file_changes_rules() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("board.yaml");
    fs::write(
        &config,
        "rules:\n  people:\n    required: true\n    min: 1\n    max: 10\n",
    )
    .unwrap();

    let args = |people: &'static str| {
        vec![
            "--config".to_string(),
            config.to_str().unwrap().to_string(),
            "check".to_string(),
            "--title".to_string(),
            "Crew".to_string(),
            "--description".to_string(),
            "Big team project".to_string(),
            "--people".to_string(),
            people.to_string(),
        ]
    };

    let output = projboard_cmd().args(args("8")).output().unwrap();
    assert!(output.status.success());

    let output = projboard_cmd().args(args("11")).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_missing_config_file_fails() {
    let tmp = TempDir::new().unwrap();
    let output = shell_session(
        &["--config", tmp.path().join("nope.yaml").to_str().unwrap()],
        "",
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config file not found"));
}

use std::io::Write;
use std::process::Command;

fn jprof() -> Command {
    Command::new(env!("CARGO_BIN_EXE_jprof"))
}

fn config_file(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create config file");
    file.write_all(contents.as_bytes()).expect("Failed to write config file");
    file
}

#[test]
fn test_default_invocation_printed() {
    let output = jprof().output().expect("Failed to run jprof");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8");
    assert_eq!(stdout.trim(), "-e itimer -i 10000000 --alloc 512k --lock 10ms -L INFO -j 2048 --clock tsc");
}

#[test]
fn test_toml_config_json_output() {
    let file = config_file(
        ".toml",
        r#"
        [profiling_config]
        event = "cpu"
        include = ["com/acme/*"]
        "#,
    );
    let output = jprof()
        .arg(file.path())
        .args(["--format", "json"])
        .output()
        .expect("Failed to run jprof");
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).expect("Invalid JSON");
    assert_eq!(parsed["interval"], "60s");
    assert_eq!(parsed["flags"][0], serde_json::json!({"name": "-e", "value": "cpu"}));
    let include = parsed["flags"]
        .as_array()
        .unwrap()
        .iter()
        .find(|flag| flag["name"] == "-I")
        .expect("include flag missing");
    assert_eq!(include["value"], "com/acme/*");
}

#[test]
fn test_invalid_event_exit_code() {
    let file = config_file(".json", r#"{"profiling_config": {"event": "alloc"}}"#);
    let output = jprof().arg(file.path()).arg("--check").output().expect("Failed to run jprof");
    assert_eq!(output.status.code(), Some(65));
    let stderr = String::from_utf8(output.stderr).expect("Invalid UTF-8");
    assert!(stderr.contains("invalid event: 'alloc'. Event must be one of 'itimer', 'cpu' or 'wall'"));
}

#[test]
fn test_strict_rejects_what_default_accepts() {
    let file = config_file(".json", r#"{"profiling_config": {"lock": "eventually"}}"#);

    let output = jprof().arg(file.path()).arg("--check").output().expect("Failed to run jprof");
    assert!(output.status.success());

    let output = jprof()
        .arg(file.path())
        .args(["--check", "--strict"])
        .output()
        .expect("Failed to run jprof");
    assert_eq!(output.status.code(), Some(65));
}

#[test]
fn test_missing_file_exit_code() {
    let output = jprof().arg("/nonexistent/jprof.toml").output().expect("Failed to run jprof");
    assert_eq!(output.status.code(), Some(66));
}

#[test]
fn test_pid_prints_start_and_stop() {
    let file = config_file(".json", r#"{"dist": "/opt/async-profiler", "tmp_dir": "/var/tmp"}"#);
    let output = jprof()
        .arg(file.path())
        .args(["--pid", "4242", "--quiet"])
        .output()
        .expect("Failed to run jprof");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("/opt/async-profiler/bin/asprof -f /var/tmp/asprof-"));
    assert!(lines[0].ends_with("start --timeout 60 4242"));
    assert!(lines[1].starts_with("/opt/async-profiler/bin/asprof stop -o jfr"));
}

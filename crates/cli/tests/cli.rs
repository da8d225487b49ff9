//! Integration tests for the tfdock binary
//!
//! Each test runs the built executable with an isolated HOME so a user config file
//! cannot change the output.

use serde_json::{json, Value};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn tfdock(home: &Path, args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tfdock"))
        .args(args)
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Should spawn tfdock");

    {
        let mut pipe = child.stdin.take().expect("stdin is piped");
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).expect("Should write stdin");
        }
    }

    child.wait_with_output().expect("Should wait for tfdock")
}

fn state_with(resources: Value) -> String {
    json!({
        "format_version": "1.0",
        "values": {
            "root_module": {
                "resources": resources,
                "child_modules": [
                    {
                        "address": "module.backend",
                        "resources": [
                            {
                                "address": "module.backend.docker_container.api",
                                "type": "docker_container",
                                "values": {
                                    "name": "api",
                                    "image": "registry.example.com/team/api:1.2.3",
                                    "must_run": true,
                                    "ports": [
                                        { "external": 9090, "internal": 9090, "protocol": "udp", "ip": "10.0.0.5" }
                                    ],
                                    "network_data": [
                                        { "network_name": "backend", "ip_address": "172.18.0.3" }
                                    ]
                                }
                            }
                        ]
                    }
                ]
            }
        }
    })
    .to_string()
}

fn web_state(must_run: bool, ports: Value) -> String {
    state_with(json!([
        {
            "address": "docker_container.web",
            "type": "docker_container",
            "values": { "name": "web", "must_run": must_run, "ports": ports }
        }
    ]))
}

fn write_state(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("state.json");
    std::fs::write(&path, content).expect("Should write state file");
    path.display().to_string()
}

#[test]
fn test_tree_report_from_file() {
    let home = TempDir::new().unwrap();
    let state = web_state(
        true,
        json!([{ "external": 80, "internal": 80, "protocol": "tcp", "ip": "0.0.0.0" }]),
    );
    let path = write_state(&home, &state);

    let output = tfdock(home.path(), &[&path, "--no-color"], None);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains('\x1b'));
    assert!(stdout.contains("├─ Total: 2 containers"));
    assert!(stdout.contains("root/web"));
    assert!(stdout.contains("├─ Status: ● RUNNING"));
    assert!(stdout.contains("http://localhost:80 (80:80 [TCP])"));
    assert!(stdout.contains("backend/api"));
    assert!(stdout.contains("api: http://10.0.0.5:9090 [UDP]"));
    assert!(stdout.find("backend/api").unwrap() < stdout.find("root/web").unwrap());
}

#[test]
fn test_colored_output_strips_to_plain() {
    let home = TempDir::new().unwrap();
    let state = web_state(true, json!([{ "external": 8080, "internal": 80 }]));

    let colored = tfdock(home.path(), &[], Some(&state));
    let plain = tfdock(home.path(), &["--no-color"], Some(&state));
    assert!(colored.status.success());
    assert!(plain.status.success());

    let colored = String::from_utf8(colored.stdout).unwrap();
    let plain = String::from_utf8(plain.stdout).unwrap();
    assert!(colored.contains('\x1b'));
    assert_eq!(tfdock_core::render::strip_ansi(&colored), plain);
}

#[test]
fn test_stopped_without_ports() {
    let home = TempDir::new().unwrap();
    let state = json!({
        "values": {
            "root_module": {
                "resources": [
                    { "type": "docker_container", "values": { "name": "web", "must_run": false } }
                ]
            }
        }
    })
    .to_string();

    let output = tfdock(home.path(), &["--no-color"], Some(&state));
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("├─ Status: ● STOPPED"));
    assert!(!stdout.contains("Endpoints:"));
    assert!(stdout.contains("└─ Network: N/A"));
    assert!(stdout.contains("No external endpoints available"));
}

#[test]
fn test_json_output() {
    let home = TempDir::new().unwrap();
    let state = web_state(
        true,
        json!([
            { "external": 80, "internal": 80, "protocol": "tcp", "ip": "0.0.0.0" },
            { "internal": 443 }
        ]),
    );

    let output = tfdock(home.path(), &["--json", "--no-color"], Some(&state));
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(value["summary"]["total_containers"], 2);
    assert_eq!(value["summary"]["running_containers"], 2);

    // extraction order: root resources first
    let web = &value["containers"][0];
    assert_eq!(web["name"], "web");
    assert_eq!(web["module"], "root");
    assert_eq!(web["endpoints"].as_array().unwrap().len(), 1);
    assert_eq!(web["endpoints"][0]["url"], "http://localhost:80");

    let api = &value["containers"][1];
    assert_eq!(api["module"], "backend");
    assert_eq!(api["image"], "registry.example.com/team/api:1.2.3");
    assert_eq!(api["endpoints"][0]["protocol"], "udp");
}

#[test]
fn test_missing_file() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("nope.json");

    let output = tfdock(home.path(), &[missing.to_str().unwrap()], None);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("not found"));
}

#[test]
fn test_invalid_json() {
    let home = TempDir::new().unwrap();
    let path = write_state(&home, "{ \"values\": ");

    let from_file = tfdock(home.path(), &[&path], None);
    assert_eq!(from_file.status.code(), Some(1));
    assert!(String::from_utf8(from_file.stderr)
        .unwrap()
        .contains("Invalid JSON in file"));

    let from_stdin = tfdock(home.path(), &[], Some("not json"));
    assert_eq!(from_stdin.status.code(), Some(1));
    assert!(String::from_utf8(from_stdin.stderr)
        .unwrap()
        .contains("Invalid JSON input"));
}

#[test]
fn test_missing_root_module() {
    let home = TempDir::new().unwrap();
    let output = tfdock(home.path(), &["--json"], Some(r#"{"values": {}}"#));
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("values.root_module"));
}

#[test]
fn test_config_file_defaults() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".tfdock");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[output]\njson = true\n\n[report]\nurl_scheme = \"https\"\n",
    )
    .unwrap();

    let state = web_state(true, json!([{ "external": 443, "internal": 443 }]));
    let output = tfdock(home.path(), &[], Some(&state));
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).expect("config enables JSON");
    assert_eq!(value["containers"][0]["endpoints"][0]["url"], "https://localhost:443");
}

use assert_cmd::Command;

fn scratch_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("wgspiral-cli-{}-{}", std::process::id(), name))
}

#[test]
fn test_subcommand_options() {
    let mut cmd = Command::cargo_bin("wgspiral").unwrap();

    let output = cmd.assert().failure().get_output().clone();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Waveguide spiral delay-line generator"));
    assert!(stderr.contains("Usage: wgspiral"));
    assert!(stderr.contains("run      Solve a spiral from a config file and save its waypoints"));
    assert!(stderr.contains("example  Print an example spiral config file"));
}

#[test]
fn example_prints_yaml() {
    let mut cmd = Command::cargo_bin("wgspiral").unwrap();

    let output = cmd.arg("example").assert().success().get_output().clone();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("width: 1000.0"));
    assert!(stdout.contains("length: 10000.0"));
    assert!(stdout.contains("bend_radius: 50.0"));
}

#[test]
fn run_writes_spiral_json() {
    let cfg_file = scratch_path("run.yaml");
    let output_path = scratch_path("run.json");
    std::fs::write(&cfg_file, concat!(
        "template:\n",
        "  bend_radius: 50\n",
        "width: 1000\n",
        "height: 1000\n",
        "length: 10000\n",
        "parity: left\n",
        "center: {x: 100, y: -20}\n",
    )).unwrap();

    let mut cmd = Command::cargo_bin("wgspiral").unwrap();
    cmd.arg("run")
        .arg(&cfg_file)
        .arg("--output")
        .arg(&output_path)
        .assert()
        .success();

    let spiral: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(spiral["loops"], 2);
    assert_eq!(spiral["waypoints"].as_array().unwrap().len(), 16);
    assert_eq!(spiral["portlist"]["input"]["direction"], "SOUTH");
    assert_eq!(spiral["portlist"]["output"]["direction"], "NORTH");
    assert_eq!(spiral["spec"]["parity"], "left");
    assert_eq!(spiral["rendered"]["renderer"], "Bend");

    // Left parity puts the ports on the right edge: x = 100 + 500.
    assert_eq!(spiral["portlist"]["input"]["port"]["x"], 600.0);

    let rendered_length = spiral["rendered"]["length"].as_f64().unwrap();
    assert!((rendered_length - 10050.0).abs() < 1e-6);

    let _ = std::fs::remove_file(cfg_file);
    let _ = std::fs::remove_file(output_path);
}

#[test]
fn run_rejects_short_length() {
    let cfg_file = scratch_path("short.json");
    std::fs::write(&cfg_file, r#"{"width": 1000, "height": 1000, "length": 5000}"#).unwrap();

    let mut cmd = Command::cargo_bin("wgspiral").unwrap();
    let output = cmd.arg("run").arg(&cfg_file).assert().failure().get_output().clone();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("too small"), "{}", stderr);

    let _ = std::fs::remove_file(cfg_file);
}

#[test]
fn run_rejects_unknown_fields() {
    let cfg_file = scratch_path("typo.toml");
    std::fs::write(&cfg_file, "width = 1000.0\nheight = 1000.0\nlength = 10000.0\nspaceing = 20.0\n").unwrap();

    let mut cmd = Command::cargo_bin("wgspiral").unwrap();
    cmd.arg("run").arg(&cfg_file).assert().failure();

    let _ = std::fs::remove_file(cfg_file);
}

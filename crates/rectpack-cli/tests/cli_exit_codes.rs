use std::process::Command;

fn rectpack() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rectpack"))
}

#[test]
fn no_args_writes_packed_png_in_cwd() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = rectpack()
        .current_dir(dir.path())
        .output()
        .expect("spawn rectpack");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(out.status.success(), "stderr: {stderr}");

    let stdout = String::from_utf8(out.stdout).expect("utf8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 100);
    for (i, line) in lines.iter().enumerate() {
        let prefix = format!("id: {} [", i + 1);
        assert!(line.starts_with(&prefix), "unexpected line {line:?}");
        assert!(line.contains("] packed at (") || line.ends_with("] unable to pack"));
    }

    let img = image::open(dir.path().join("packed.png")).expect("decode png");
    assert_eq!((img.width(), img.height()), (256, 256));
    assert_eq!(img.color(), image::ColorType::Rgba8);
}

#[test]
fn unwritable_output_exits_with_one() {
    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().join("missing").join("packed.png");
    let out = rectpack()
        .args(["--seed", "42", "--output"])
        .arg(&target)
        .output()
        .expect("spawn rectpack");
    assert_eq!(out.status.code(), Some(1));

    let stdout = String::from_utf8(out.stdout).expect("utf8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 101);
    assert_eq!(
        lines[100],
        format!("failed to write image output to {}", target.display())
    );
    assert!(!target.exists());
}

#[test]
fn same_seed_same_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    let run = || {
        rectpack()
            .current_dir(dir.path())
            .args(["--seed", "7", "-q"])
            .output()
            .expect("spawn rectpack")
    };
    let a = run();
    let b = run();
    assert!(a.status.success() && b.status.success());
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn print_config_exits_without_writing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = rectpack()
        .current_dir(dir.path())
        .arg("--print-config")
        .output()
        .expect("spawn rectpack");
    assert!(out.status.success());
    let cfg: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json config");
    assert_eq!(cfg["canvas_width"], 256);
    assert_eq!(cfg["node_budget"], 256);
    assert_eq!(cfg["output"], "packed.png");
    assert!(!dir.path().join("packed.png").exists());
}

#[test]
fn packing_flags_reach_the_config() {
    let out = rectpack()
        .args(["--heuristic", "bf"])
        .args(["--sort-order", "area_desc"])
        .args(["--outline", "thin"])
        .args(["--print-config", "--print-config-format", "yaml"])
        .output()
        .expect("spawn rectpack");
    assert!(out.status.success());
    let cfg: serde_yaml::Value = serde_yaml::from_slice(&out.stdout).expect("yaml config");
    assert_eq!(cfg["heuristic"].as_str(), Some("best_fit"));
    assert_eq!(cfg["sort_order"].as_str(), Some("area_desc"));
    assert_eq!(cfg["outline"].as_str(), Some("thin"));
}

#[test]
fn thin_outline_run_writes_png() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = rectpack()
        .current_dir(dir.path())
        .args(["--seed", "3", "--outline", "thin", "-q"])
        .output()
        .expect("spawn rectpack");
    assert!(out.status.success());
    let img = image::open(dir.path().join("packed.png")).expect("decode png");
    assert_eq!((img.width(), img.height()), (256, 256));
}

#[test]
fn unknown_heuristic_exits_with_one() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = rectpack()
        .current_dir(dir.path())
        .args(["--heuristic", "diagonal"])
        .output()
        .expect("spawn rectpack");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("unknown skyline heuristic"), "stderr: {stderr}");
    assert!(!dir.path().join("packed.png").exists());
}

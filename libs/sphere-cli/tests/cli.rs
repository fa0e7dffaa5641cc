//! End-to-end runs of the `sphere-mesh` binary.

use std::process::Command;

fn sphere_mesh() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sphere-mesh"))
}

#[test]
fn uv_then_inspect() {
    let dir = tempfile::tempdir().unwrap();
    let status = sphere_mesh()
        .args(["uv", "--slices", "6", "--stacks", "4", "--radius", "2", "--out"])
        .arg(dir.path())
        .status()
        .unwrap();
    assert!(status.success());

    let output = sphere_mesh()
        .args(["inspect", "--kind", "quads", "--dir"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("vertices: 20"), "{stdout}");
    assert!(stdout.contains("quad cells: 12"), "{stdout}");
}

#[test]
fn inspect_reports_dangling_index() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("points"), "0 0 0\n1 0 0\n0 1 0\n").unwrap();
    std::fs::write(dir.path().join("triangles"), "0 1 2\n0 1 7\n").unwrap();

    let output = sphere_mesh()
        .args(["inspect", "--kind", "triangles", "--dir"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
}

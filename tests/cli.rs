//! Command-line behaviour

use std::fs;
use std::process::Command;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dfd-illustrator"))
}

#[test]
fn test_writes_named_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let status = cli()
        .args(["demos/jadwal.toml", "demos/kegiatan.toml", "--output-dir"])
        .arg(dir.path())
        .status()
        .unwrap();
    assert!(status.success());

    let jadwal = fs::read_to_string(dir.path().join("JagaKampung_DFD_Level2_Jadwal.drawio")).unwrap();
    let kegiatan =
        fs::read_to_string(dir.path().join("JagaKampung_DFD_Level2_Kegiatan.drawio")).unwrap();
    assert!(jadwal.starts_with("<mxfile"));
    assert!(kegiatan.contains("dfd2-kegiatan"));
}

#[test]
fn test_output_name_from_file_stem() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("orders.toml");
    fs::write(
        &input,
        "name = \"Orders\"\n[[processes]]\nid = \"p1\"\nlabel = \"Take order\"\n",
    )
    .unwrap();

    let status = cli()
        .arg(&input)
        .arg("-o")
        .arg(dir.path())
        .status()
        .unwrap();
    assert!(status.success());
    assert!(dir.path().join("orders.drawio").exists());
}

#[test]
fn test_stdout_mode() {
    let output = cli()
        .args(["demos/kegiatan.toml", "--stdout"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(r#"<mxCell id="title""#));
}

#[test]
fn test_unwritable_destination_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does/not/exist");
    let output = cli()
        .arg("demos/jadwal.toml")
        .arg("-o")
        .arg(&missing)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error writing"));
}

#[test]
fn test_strict_rejects_dangling_flow() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.toml");
    fs::write(
        &input,
        "name = \"Broken\"\n[[processes]]\nid = \"p1\"\nlabel = \"P\"\n[[flows]]\nsource = \"p1\"\ntarget = \"p2\"\nlabel = \"x\"\n",
    )
    .unwrap();

    let lenient = cli().arg(&input).arg("-o").arg(dir.path()).status().unwrap();
    assert!(lenient.success());

    let strict = cli()
        .arg(&input)
        .arg("-o")
        .arg(dir.path())
        .arg("--strict")
        .output()
        .unwrap();
    assert!(!strict.status.success());
    let stderr = String::from_utf8(strict.stderr).unwrap();
    assert!(stderr.contains("undefined identifier 'p2'"));
    assert!(stderr.contains("did you mean: p1?"));
}

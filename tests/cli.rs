use std::fs;
use std::process::Command;

use cheatsheet::fonts;

const FONTS_MISSING_NOTICE: &str =
    "no usable fonts found. Set CHEATSHEET_FONTS_DIR or copy assets/fonts next to the binary.";

fn cheatsheet_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_cheatsheet"))
}

#[test]
fn missing_sections_file_exits_with_code_one() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let output_path = dir.path().join("never.pdf");

    let output = cheatsheet_command()
        .arg("--title")
        .arg("T")
        .arg("--sections")
        .arg(dir.path().join("does-not-exist.json"))
        .arg("--output")
        .arg(&output_path)
        .output()
        .expect("run binary");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("sections file not found"),
        "unexpected stderr: {}",
        stderr
    );
    assert!(!output_path.exists(), "no output file may be created");
}

#[test]
fn malformed_json_fails_with_error_chain() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let sections_path = dir.path().join("sections.json");
    fs::write(&sections_path, "{this is not json").expect("write sections file");

    let output = cheatsheet_command()
        .arg("-t")
        .arg("T")
        .arg("-s")
        .arg(&sections_path)
        .output()
        .expect("run binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "unexpected stderr: {}", stderr);
}

#[test]
fn round_trip_creates_the_requested_pdf() {
    if !fonts::default_fonts_available() {
        eprintln!(
            "Skipping round_trip_creates_the_requested_pdf: {}",
            FONTS_MISSING_NOTICE
        );
        return;
    }

    let dir = tempfile::tempdir().expect("create temp dir");
    let sections_path = dir.path().join("sections.json");
    fs::write(
        &sections_path,
        r#"[{"heading": "H", "items": ["x", "y"]}]"#,
    )
    .expect("write sections file");
    let output_path = dir.path().join("out.pdf");

    let output = cheatsheet_command()
        .arg("-t")
        .arg("T")
        .arg("-s")
        .arg(&sections_path)
        .arg("-o")
        .arg(&output_path)
        .output()
        .expect("run binary");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Created cheatsheet:"),
        "unexpected stdout: {}",
        stdout
    );
    let metadata = fs::metadata(&output_path).expect("output file exists");
    assert!(metadata.len() > 0);
}

#[test]
fn output_defaults_are_documented_in_help() {
    let output = cheatsheet_command().arg("--help").output().expect("run binary");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("cheatsheet.pdf"), "default output path in help");
    assert!(stdout.contains("--sections"));
}

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

#[test]
fn help_works() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("snbt"))
        .arg("--help")
        .assert()
        .success();
    Ok(())
}

#[test]
fn compound_file_to_json() -> Result<(), Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{{id:276s, Count:1b, ids:[I;1,2], Name:\"Sword\"}}")?;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("snbt"))
        .arg(tmp.path())
        .output()?;
    assert!(output.status.success());
    let out = String::from_utf8(output.stdout)?;
    let v_out: serde_json::Value = serde_json::from_str(&out)?;
    assert_eq!(
        v_out,
        serde_json::json!({"id": 276, "Count": 1, "ids": [1, 2], "Name": "Sword"})
    );
    Ok(())
}

#[test]
fn expect_compound_rejects_list() -> Result<(), Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "[1,2]")?;

    Command::new(assert_cmd::cargo::cargo_bin!("snbt"))
        .arg("--expect")
        .arg("compound")
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed SNBT"));
    Ok(())
}

#[test]
fn type_mismatch_fails() -> Result<(), Box<dyn std::error::Error>> {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("snbt"))
        .write_stdin("[B;1,2]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("mismatch"));
    Ok(())
}

#[test]
fn stdin_list_pretty() -> Result<(), Box<dyn std::error::Error>> {
    let output = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("snbt"))
        .args(["--expect", "list", "--pretty", "--intern-values"])
        .write_stdin("[a, a, 'b c']")
        .output()?;
    assert!(output.status.success());
    let v_out: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(v_out, serde_json::json!(["a", "a", "b c"]));
    Ok(())
}

use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::{NamedTempFile, TempDir};

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_docdump")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn stdout_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

fn decode_utf16(bytes: &[u8]) -> String {
    assert_eq!(&bytes[..2], &[0xFF, 0xFE], "missing UTF-16LE BOM");
    let units: Vec<u16> = bytes[2..]
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).unwrap()
}

// -- stdout --

#[test]
fn stdout_matches_expected_dump() {
    let expected = std::fs::read_to_string(fixture_path("Geo.expected.txt")).unwrap();

    let assert = cmd().arg(fixture_path("Geo.json")).assert().success();
    assert_eq!(stdout_of(&assert), expected);
}

#[test]
fn point_block_from_example() {
    let assert = cmd().arg(fixture_path("Geo.json")).assert().success();
    let output = stdout_of(&assert);
    assert!(output.starts_with(
        "Point - A 2D point.\n\n{\n\t\"x\":<Number>,\n\t\"y\":<Number>\n}\n\nx <Number>: Horizontal coordinate.\ny <Number>: ??\n"
    ));
}

#[test]
fn closures_and_empty_types_are_skipped() {
    let assert = cmd().arg(fixture_path("Geo.json")).assert().success();
    let output = stdout_of(&assert);
    assert!(!output.contains("DisplayClass"));
    assert!(!output.contains("Internal - "));
}

// -- output file --

#[test]
fn output_file_is_utf16_with_bom() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("Geo.txt");

    cmd()
        .arg(fixture_path("Geo.json"))
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let expected = std::fs::read_to_string(fixture_path("Geo.expected.txt")).unwrap();
    let bytes = std::fs::read(&out).unwrap();
    assert_eq!(decode_utf16(&bytes), expected);
}

#[test]
fn output_file_utf8() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("Geo.txt");

    cmd()
        .arg(fixture_path("Geo.json"))
        .args(["-o", out.to_str().unwrap()])
        .args(["--encoding", "utf8"])
        .assert()
        .success();

    let expected = std::fs::read_to_string(fixture_path("Geo.expected.txt")).unwrap();
    assert_eq!(std::fs::read_to_string(&out).unwrap(), expected);
}

// -- filters --

#[test]
fn namespace_filter() {
    let assert = cmd()
        .arg(fixture_path("Geo.json"))
        .args(["--namespace", "Geo.Tools"])
        .assert()
        .success();
    let output = stdout_of(&assert);
    assert!(output.starts_with("Exporter - Writes shapes to disk.\n"));
    assert!(!output.contains("Point - "));
    assert_eq!(output.matches(&"-".repeat(91)).count(), 1);
}

// -- formats --

#[test]
fn json_format() {
    let assert = cmd()
        .arg(fixture_path("Geo.json"))
        .args(["-f", "json"])
        .assert()
        .success();
    let value: serde_json::Value = serde_json::from_str(&stdout_of(&assert)).unwrap();
    let docs = value.as_array().unwrap();
    assert_eq!(docs.len(), 6);
    assert_eq!(docs[0]["full_name"], "Geo.Model.Point");
    assert!(docs[0]["table"][1]["description"].is_null());

    let color = docs.iter().find(|d| d["name"] == "Color").unwrap();
    assert_eq!(color["sample"][2]["value"]["kind"], "enum_value");
    assert_eq!(color["sample"][2]["value"]["value"], 4);
}

#[test]
fn invalid_format_fails() {
    cmd()
        .arg(fixture_path("Geo.json"))
        .args(["-f", "html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn list_members_in_document_order() {
    let assert = cmd()
        .arg(fixture_path("Geo.json"))
        .arg("--list-members")
        .assert()
        .success();
    let output = stdout_of(&assert);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "Geo.Model.Point");
    assert_eq!(lines[1], "Geo.Model.Point.x");
    assert_eq!(
        lines[2],
        "Geo.Model.Point.Point(System.Int32 x, System.Int32 y)"
    );
    assert_eq!(lines[3], "Geo.Model.Point.Offset(Geo.Model.Point delta)");
    assert!(!output.contains("Geometry model."));
    assert_eq!(lines.len(), 17);
}

#[test]
fn list_members_json() {
    let assert = cmd()
        .arg(fixture_path("Geo.json"))
        .args(["--list-members", "-f", "json"])
        .assert()
        .success();
    let value: serde_json::Value = serde_json::from_str(&stdout_of(&assert)).unwrap();
    let ctor = &value[2];
    assert_eq!(ctor["kind"], "method");
    assert_eq!(ctor["parameters"][1]["name"], "y");
    assert_eq!(ctor["parameters"][1]["type_name"], "System.Int32");
}

#[test]
fn list_members_rejects_unknown_format() {
    cmd()
        .arg(fixture_path("Geo.json"))
        .args(["--list-members", "-f", "html"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unknown format: html"));
}

// -- explicit doc file --

#[test]
fn explicit_xml_path() {
    let mut xml = NamedTempFile::with_suffix(".xml").unwrap();
    xml.write_all(
        br#"<doc><members>
            <member name="T:Geo.Tools.Exporter"><summary>Custom docs.</summary></member>
            <member name="P:Geo.Tools.Exporter.Path"><summary>Target file.</summary></member>
        </members></doc>"#,
    )
    .unwrap();

    let assert = cmd()
        .arg(fixture_path("Geo.json"))
        .args(["--xml", xml.path().to_str().unwrap()])
        .args(["--namespace", "Geo.Tools"])
        .assert()
        .success();
    let output = stdout_of(&assert);
    assert!(output.starts_with("Exporter - Custom docs.\n"));
    assert!(output.contains("Path <String>: Target file.\n"));
}

// -- failures --

#[test]
fn missing_doc_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let metadata = dir.path().join("Lonely.json");
    std::fs::write(&metadata, r#"{ "types": [] }"#).unwrap();
    let out = dir.path().join("Lonely.txt");

    cmd()
        .arg(metadata.to_str().unwrap())
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no XML documentation file exists"));

    assert!(!out.exists(), "no partial output on failure");
}

#[test]
fn output_overwriting_input_is_rejected() {
    cmd()
        .arg(fixture_path("Geo.json"))
        .args(["-o", &fixture_path("Geo.xml")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid argument `output`"));
}

#[test]
fn malformed_metadata_fails() {
    let dir = TempDir::new().unwrap();
    let metadata = dir.path().join("Broken.json");
    std::fs::write(&metadata, "{ \"types\": [ { \"namespace\": \"Geo\" } ] }").unwrap();
    std::fs::write(dir.path().join("Broken.xml"), "<doc><members/></doc>").unwrap();

    cmd()
        .arg(metadata.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load metadata"));
}

//! Integration tests for the dynkin CLI
//!
//! These tests drive the compiled binary and check what it prints.

use std::io::Write;
use std::process::{Command, Output};

fn dynkin(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dynkin"))
        .args(args)
        .output()
        .expect("Failed to execute dynkin")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "dynkin failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Test that the CLI can be invoked
#[test]
fn test_cli_help() {
    let output = dynkin(&["--help"]);
    let text = stdout(&output);
    assert!(text.contains("Dynkin diagrams of affine type C root systems"));
    for command in ["ascii", "latex", "edges", "info"] {
        assert!(text.contains(command), "help mentions {command}");
    }
}

#[test]
fn test_ascii_rank_four() {
    let output = dynkin(&["ascii", "C4~"]);
    assert_eq!(stdout(&output), "O=>=O---O---O=<=O\n0   1   2   3   4\n");
}

#[test]
fn test_ascii_rank_one() {
    let output = dynkin(&["ascii", "['C', 1, 1]"]);
    assert_eq!(stdout(&output), "O<=>O\n0   1\n");
}

#[test]
fn test_ascii_dual_and_offset() {
    let output = dynkin(&["ascii", "C4~", "--dual", "--offset", "2"]);
    assert_eq!(stdout(&output), "O=<=O---O---O=>=O\n2   3   4   5   6\n");
}

#[test]
fn test_ascii_custom_labels() {
    let output = dynkin(&["ascii", "C2~", "--labels", "a,b,c"]);
    assert_eq!(stdout(&output), "O=>=O=<=O\na   b   c\n");
}

#[test]
fn test_ascii_rejects_bad_labels() {
    let output = dynkin(&["ascii", "C2~", "--labels", "a,b"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no label given for node 2"));

    let output = dynkin(&["ascii", "C2~", "--labels", "a,b,a"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("is assigned to both node 0 and node 2"));
}

#[test]
fn test_rank_zero_is_rejected() {
    let output = dynkin(&["ascii", "C0~"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid rank 0"));
}

#[test]
fn test_huge_rank_is_rejected() {
    let output = dynkin(&["ascii", "C18446744073709551615~"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid rank 18446744073709551615"));
    assert!(!stderr.contains("panicked"));
}

#[test]
fn test_mark_special_node_flags() {
    let output = dynkin(&[
        "--mark-special-node",
        "both",
        "--special-node-str",
        "X",
        "ascii",
        "C3~",
    ]);
    assert_eq!(stdout(&output), "X=>=O---O=<=O\n0   1   2   3\n");

    let output = dynkin(&["--mark-special-node", "latex", "latex", "C3~"]);
    assert!(stdout(&output).contains("\\draw[fill=black] (0, 0) circle (.25cm)"));

    let output = dynkin(&["--mark-special-node", "sometimes", "ascii", "C3~"]);
    assert!(!output.status.success());
}

#[test]
fn test_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mark_special_node = \"printing\"").unwrap();
    writeln!(file, "special_node_str = \"@\"").unwrap();
    let path = file.path().to_str().unwrap();

    let output = dynkin(&["--config", path, "ascii", "C2~"]);
    assert_eq!(stdout(&output), "@=>=O=<=O\n0   1   2\n");

    // Flags win over the file.
    let output = dynkin(&["--config", path, "--special-node-str", "#", "ascii", "C2~"]);
    assert_eq!(stdout(&output), "#=>=O=<=O\n0   1   2\n");
}

#[test]
fn test_latex_dual_flag() {
    let plain = stdout(&dynkin(&["latex", "C4~"]));
    let dual = stdout(&dynkin(&["latex", "C4~", "--dual"]));
    assert!(plain.contains("\\draw[shift={(1.2, 0)}, rotate=0]"));
    assert!(dual.contains("\\draw[shift={(0.8, 0)}, rotate=180]"));
    assert!(plain.contains("\\pgftransformxshift{2 cm}"));
    assert_eq!(plain.lines().count(), dual.lines().count());
}

#[test]
fn test_edges() {
    let output = dynkin(&["edges", "C3~"]);
    assert_eq!(
        stdout(&output),
        "(0, 1, 2)\n(1, 0, 1)\n(1, 2, 1)\n(2, 1, 1)\n(2, 3, 1)\n(3, 2, 2)\n"
    );
}

#[test]
fn test_edges_json() {
    let output = dynkin(&["edges", "C1~", "--json"]);
    let text = stdout(&output);
    assert!(text.contains("\"source\": 0"));
    assert!(text.contains("\"label\": 2"));
    assert_eq!(text.matches("\"label\": 2").count(), 2);
}

#[test]
fn test_info() {
    let output = dynkin(&["info", "C2~"]);
    let text = stdout(&output);
    assert!(text.contains("type:             ['C', 2, 1]"));
    assert!(text.contains("compact:          C2~"));
    assert!(text.contains("classical:        ['C', 2]"));
    assert!(text.contains("dual:             ['C', 2, 1]^*"));
    assert!(text.contains("simply laced:     false"));
    assert!(text.contains("  2 -1  0\n -2  2 -2\n  0 -1  2\n"));
}

#[test]
fn test_info_dual_latex_name() {
    let output = dynkin(&["info", "C4~*"]);
    assert!(stdout(&output).contains("latex:            C_{4}^{(1)\\vee}\n"));
}

//! Integration tests for the vanguard engine binary.
//!
//! Drives full protocol sessions by spawning the engine process, sending
//! commands via stdin, and verifying stdout responses.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

/// Sends a sequence of commands to the engine and collects stdout lines.
fn run_engine(commands: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_vanguard");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start vanguard");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        writeln!(stdin, "{}", cmd).unwrap();
    }
    stdin.flush().unwrap();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    assert!(status.success());
    lines
}

fn lines_starting_with<'a>(lines: &'a [String], prefix: &str) -> Vec<&'a String> {
    lines.iter().filter(|l| l.starts_with(prefix)).collect()
}

#[test]
fn handshake_lists_options() {
    let lines = run_engine(&["vanguard", "quit"]);

    assert!(lines.iter().any(|l| l == "id name vanguard"));
    let option_lines = lines_starting_with(&lines, "option ");
    assert_eq!(option_lines.len(), 4);
    for opt in &option_lines {
        assert!(opt.contains("type "), "option line missing type: {}", opt);
    }
    assert_eq!(lines.last().map(String::as_str), Some("vanguardok"));
}

#[test]
fn isready_response() {
    let lines = run_engine(&["isready", "quit"]);
    assert_eq!(lines, vec!["readyok".to_string()]);
}

#[test]
fn unknown_and_empty_lines_are_ignored() {
    let lines = run_engine(&["foobar", "", "  ", "armies", "isready", "quit"]);
    assert_eq!(lines, vec!["readyok".to_string()]);
}

#[test]
fn go_finds_best_route() {
    let lines = run_engine(&[
        "setoption name StrengthLevel value 1",
        "armies friendly_sword10,enemy_axe12,friendly_sword10",
        "go",
        "quit",
    ]);

    let info = lines_starting_with(&lines, "info ");
    assert_eq!(info.len(), 1);
    assert!(info[0].starts_with("info orderings 6 score 9 time "));

    let steps = lines_starting_with(&lines, "step ");
    assert_eq!(
        steps,
        vec![
            "step friendly_sword10 + friendly_sword10 = friendly_sword27",
            "step friendly_sword27 - enemy_axe12 = friendly_sword9",
        ]
    );

    assert_eq!(
        lines.last().map(String::as_str),
        Some("bestroute friendly_sword10,friendly_sword10,enemy_axe12 score 9")
    );
}

#[test]
fn go_is_the_same_single_and_multi_threaded() {
    let armies = "armies friendly_axe4 friendly_axe41 enemy_sword11 enemy_axe31 enemy_bow12 enemy_any21";
    let single = run_engine(&["setoption name Threads value 1", armies, "go", "quit"]);
    let multi = run_engine(&["setoption name Threads value 6", armies, "go", "quit"]);

    let strip_time = |lines: &[String]| -> Vec<String> {
        lines
            .iter()
            .map(|l| match l.find(" time ") {
                Some(i) if l.starts_with("info ") => l[..i].to_string(),
                _ => l.clone(),
            })
            .collect()
    };
    assert_eq!(strip_time(&single), strip_time(&multi));
    assert!(single[0].starts_with("info orderings 720 "));
}

#[test]
fn go_without_armies_reports_error() {
    let lines = run_engine(&["go", "armies friendly_axe4", "clear", "go", "quit"]);
    assert_eq!(
        lines,
        vec!["error route is empty".to_string(), "error route is empty".to_string()]
    );
}

#[test]
fn add_extends_the_army_set() {
    let lines = run_engine(&["armies friendly_axe4", "add friendly_axe4", "go", "quit"]);
    assert_eq!(
        lines.last().map(String::as_str),
        Some("bestroute friendly_axe4,friendly_axe4 score 8")
    );
}

#[test]
fn malformed_tokens_are_reported_and_ignored() {
    let lines = run_engine(&[
        "armies enemy_bow12",
        "armies friendly_axe",
        "add neutral_bow3",
        "go",
        "quit",
    ]);
    assert_eq!(lines[0], "error army token 'friendly_axe' has no size");
    assert!(lines[1].starts_with("error army token 'neutral_bow3' has no alignment"));
    assert_eq!(
        lines.last().map(String::as_str),
        Some("bestroute enemy_bow12 score -12")
    );
}

#[test]
fn demo_set_is_capped_by_max_armies() {
    let lines = run_engine(&["setoption name MaxArmies value 9", "demo", "go", "quit"]);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("error 10 armies exceeds the limit of 9"));
}

#[test]
fn score_reduces_given_order() {
    let lines = run_engine(&[
        "score friendly_axe4,enemy_bow12,enemy_sword11,enemy_bow12,enemy_axe31,friendly_axe41,enemy_any21",
        "quit",
    ]);
    assert_eq!(
        lines,
        vec![
            "step friendly_axe4 - enemy_bow12 = enemy_bow9",
            "step enemy_bow9 + enemy_sword11 = enemy_sword20",
            "step enemy_sword20 + enemy_bow12 = enemy_sword32",
            "step enemy_sword32 + enemy_axe31 = enemy_sword63",
            "step enemy_sword63 - friendly_axe41 = enemy_sword1",
            "step enemy_sword1 + enemy_any21 = enemy_any22",
            "score -22",
        ]
    );
}

#[test]
fn json_output_mode() {
    let lines = run_engine(&[
        "setoption name Output value json",
        "armies friendly_axe4,friendly_axe4",
        "go",
        "score enemy_bow12,friendly_axe4",
        "quit",
    ]);
    assert_eq!(lines.len(), 2);

    let go: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(go["orderings"], 2);
    assert_eq!(go["trace"]["score"], 8);
    assert_eq!(go["trace"]["route"][0]["unit_type"], "axe");

    let score: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
    assert_eq!(score["score"], -9);
    assert_eq!(score["steps"][0]["interaction"], "battle");
    assert_eq!(score["result"]["alignment"], "enemy");
}

#[test]
fn commands_after_quit_are_not_processed() {
    let lines = run_engine(&["isready", "quit", "isready"]);
    assert_eq!(lines, vec!["readyok".to_string()]);
}

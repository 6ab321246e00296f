//! End-to-end tests running the `finger` binary against fixture files.
//!
//! The session table, account database, device directory and mail spool are
//! all pointed into a temp directory through `FINGER_*` variables.

use std::fs::{self, File, FileTimes, Permissions};
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::process::{Command, Output};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tempfile::TempDir;

const RECORD_SIZE: usize = 384;
const USER_PROCESS: i16 = 7;

fn finger_binary() -> String {
    env!("CARGO_BIN_EXE_finger").to_string()
}

/// One glibc utmp record.
fn utmp_record(user: &str, line: &str, host: &str, login: SystemTime) -> Vec<u8> {
    let tv_sec = i32::try_from(login.duration_since(UNIX_EPOCH).unwrap().as_secs()).unwrap();
    let mut buf = vec![0u8; RECORD_SIZE];
    buf[0..2].copy_from_slice(&USER_PROCESS.to_ne_bytes());
    buf[8..8 + line.len()].copy_from_slice(line.as_bytes());
    buf[44..44 + user.len()].copy_from_slice(user.as_bytes());
    buf[76..76 + host.len()].copy_from_slice(host.as_bytes());
    buf[340..344].copy_from_slice(&tv_sec.to_ne_bytes());
    buf
}

fn touch(path: &Path, accessed: SystemTime, modified: SystemTime) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let file = File::create(path).unwrap();
    file.set_times(FileTimes::new().set_accessed(accessed).set_modified(modified))
        .unwrap();
    fs::set_permissions(path, Permissions::from_mode(0o600)).unwrap();
}

/// Alice on the console (logged in 125s ago) and on pts/1 (idle ten minutes),
/// with a plan file and a read mailbox. Bob has an account but no session.
fn fixture() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let now = SystemTime::now();
    let console_login = now - Duration::from_secs(125);

    let home = root.join("home/alice");
    fs::create_dir_all(&home).unwrap();
    fs::write(home.join(".plan"), "Ship the release.\n  Then sleep.\n").unwrap();

    fs::write(
        root.join("passwd"),
        format!(
            "root:x:0:0:root:/root:/bin/bash\n\
             alice:x:1000:1000:Alice Smith,Room 4,5551234567:{}:/bin/bash\n\
             bob:x:1001:1001:Bob:{}:/bin/zsh\n",
            home.display(),
            root.join("home/bob").display(),
        ),
    )
    .unwrap();

    let mut utmp = utmp_record("alice", "console", "", console_login);
    utmp.extend(utmp_record("alice", "pts/1", "10.0.0.5", console_login));
    fs::write(root.join("utmp"), utmp).unwrap();

    touch(
        &root.join("dev/pts/1"),
        now - Duration::from_secs(600),
        console_login,
    );
    touch(&root.join("mail/alice"), console_login, console_login);

    temp
}

fn finger(temp: &TempDir, args: &[&str]) -> Output {
    let root = temp.path();
    Command::new(finger_binary())
        .args(args)
        .env("HOME", root)
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("RUST_LOG")
        .env("TZ", "UTC")
        .env("FINGER_UTMP_PATH", root.join("utmp"))
        .env("FINGER_PASSWD_PATH", root.join("passwd"))
        .env("FINGER_DEVICE_DIR", root.join("dev"))
        .env("FINGER_MAIL_DIR", root.join("mail"))
        .output()
        .expect("failed to run finger")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "finger should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn short_listing_shows_every_session() {
    let temp = fixture();
    let out = stdout(&finger(&temp, &["-s"]));
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 3, "header plus two sessions: {out}");
    assert!(lines[0].starts_with("Login"));
    assert!(lines[1].starts_with("alice           Alice Smith     *console  2"));
    assert!(lines[2].starts_with("alice           Alice Smith     *pts/1    10"));
}

#[test]
fn detailed_user_report_includes_mail_and_plan() {
    let temp = fixture();
    let out = stdout(&finger(&temp, &["alice"]));

    assert!(out.contains("Login: alice"));
    assert!(out.contains("Name: Alice Smith"));
    assert!(out.contains("Office: Room 4, 555-123-4567"));
    assert!(out.contains("on console,       idle 0:02 (messages off)"));
    assert!(out.contains("on pts/1 from 10.0.0.5,       idle 0:10 (messages off)"));
    assert!(out.contains("Mail last read"));
    assert!(out.contains("Plan:\nShip the release.\n  Then sleep.\n"));
}

#[test]
fn no_extras_skips_mail_and_plan() {
    let temp = fixture();
    let out = stdout(&finger(&temp, &["-m", "alice"]));

    assert!(out.contains("Login: alice"));
    assert!(!out.contains("Mail"));
    assert!(!out.contains("Plan"));
}

#[test]
fn user_without_session_was_never_logged_in() {
    let temp = fixture();
    let out = stdout(&finger(&temp, &["bob"]));

    assert!(out.contains("Login: bob"));
    assert!(out.contains("Never logged in."));
    assert!(out.contains("No Mail."));
    assert!(out.contains("No Plan."));
}

#[test]
fn detailed_listing_reports_alice_once() {
    let temp = fixture();
    let out = stdout(&finger(&temp, &["-ls"]));

    assert_eq!(out.matches("Login: alice").count(), 1);
    assert_eq!(out.matches("On since").count(), 1);
}

#[test]
fn unknown_user_is_reported_on_stderr() {
    let temp = fixture();
    let output = finger(&temp, &["carol"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("finger: carol: no such user."));
}

#[test]
fn conflicting_flags_print_usage() {
    let temp = fixture();
    let output = finger(&temp, &["-lp"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Usage: finger [-lmps] [user ...]\n"
    );
}

#[test]
fn json_output_parses_as_records() {
    let temp = fixture();
    let out = stdout(&finger(&temp, &["--json", "alice"]));
    let records: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["idle_time_label"], "2");
    assert_eq!(records[0]["office_phone"], "555-123-4567");
    assert_eq!(records[1]["terminal"], "pts/1");
    assert_eq!(records[1]["messages_enabled"], false);
}

#[test]
fn missing_session_table_lists_nobody() {
    let temp = fixture();
    fs::remove_file(temp.path().join("utmp")).unwrap();
    let out = stdout(&finger(&temp, &[]));

    assert_eq!(out.lines().count(), 1);
    assert!(out.starts_with("Login"));
}

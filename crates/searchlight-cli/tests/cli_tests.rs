use assert_cmd::Command;
use regex::Regex;
use serde_json::Value;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

struct TestContext {
    _dir: TempDir,
    gsc_path: PathBuf,
    ga4_path: PathBuf,
    daily_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let gsc_path = dir.path().join("gsc.csv");
        let ga4_path = dir.path().join("ga4.csv");
        let daily_path = dir.path().join("daily.csv");

        // 1. GSC export (blank position on the blog row)
        let mut gsc = File::create(&gsc_path).unwrap();
        writeln!(gsc, "page,clicks,impressions,ctr,position").unwrap();
        writeln!(gsc, "https://s.com/pricing/,20,2000,0.01,8").unwrap();
        writeln!(gsc, "https://s.com/blog,9,300,0.03,").unwrap();

        // 2. GA4 export
        let mut ga4 = File::create(&ga4_path).unwrap();
        writeln!(
            ga4,
            "pagePath,sessions,engagedSessions,averageSessionDuration,conversions"
        )
        .unwrap();
        writeln!(ga4, "/pricing,150,140,20,2").unwrap();
        writeln!(ga4, "/guide,200,50,10,0").unwrap();

        // 3. Daily series, 30 days of 1.0
        let mut daily = File::create(&daily_path).unwrap();
        writeln!(daily, "date,value").unwrap();
        for day in 1..=30 {
            writeln!(daily, "2024-01-{:02},1", day).unwrap();
        }

        Self {
            _dir: dir,
            gsc_path,
            ga4_path,
            daily_path,
        }
    }
}

fn strip_ansi(s: &str) -> String {
    let re = Regex::new(r"\x1b\[[0-9;]*m").unwrap();
    re.replace_all(s, "").to_string()
}

fn searchlight() -> Command {
    let mut cmd = Command::cargo_bin("searchlight").unwrap();
    cmd.env_remove("CACHE_TTL_SECONDS");
    cmd
}

#[test]
fn test_score_json_output() {
    let ctx = TestContext::new();

    let output = searchlight()
        .args([
            "score",
            "--gsc",
            ctx.gsc_path.to_str().unwrap(),
            "--ga4",
            ctx.ga4_path.to_str().unwrap(),
            "--json",
        ])
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "STDERR:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    let board: Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = board.as_array().unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["pagePath"], "/pricing");
    assert_eq!(entries[0]["priority"], 70);
    assert_eq!(entries[1]["pagePath"], "/guide");
    assert_eq!(entries[1]["priority"], 40);
}

#[test]
fn test_score_table_and_top_n() {
    let ctx = TestContext::new();

    let output = searchlight()
        .args([
            "score",
            "--gsc",
            ctx.gsc_path.to_str().unwrap(),
            "--ga4",
            ctx.ga4_path.to_str().unwrap(),
            "--top-n",
            "1",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
    assert!(stdout.contains("UPDATE PRIORITIES (1 pages)"));
    assert!(stdout.contains("/pricing"));
    assert!(!stdout.contains("/guide"));
    assert!(stdout.contains("optimize meta description"));
}

#[test]
fn test_score_requires_an_input() {
    let output = searchlight().args(["score"]).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_score_reports_bad_rows() {
    let ctx = TestContext::new();
    let bad = ctx._dir.path().join("bad.csv");
    std::fs::write(&bad, "page,impressions\n/a,lots\n").unwrap();

    let output = searchlight()
        .args(["score", "--gsc", bad.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Row 1"));
}

#[test]
fn test_trend_windows_table() {
    let ctx = TestContext::new();

    let output = searchlight()
        .args([
            "trend",
            "--daily",
            ctx.daily_path.to_str().unwrap(),
            "--window",
            "14",
            "--last",
            "1",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
    assert!(stdout.contains("2024-01-30"));
    assert!(!stdout.contains("2024-01-29"));
    assert!(stdout.contains("+0.0%"));
}

#[test]
fn test_trend_with_short_history() {
    let ctx = TestContext::new();

    let output = searchlight()
        .args([
            "trend",
            "--daily",
            ctx.daily_path.to_str().unwrap(),
            "--window",
            "30",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Not enough history"));
}

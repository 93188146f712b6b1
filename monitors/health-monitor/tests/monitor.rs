//! End-to-end runs against fixture files standing in for /proc

use std::fs;

use health_monitor::{collect, run, MonitorConfig, MonitorError, OutputMode, SourcePaths};
use nix::errno::Errno;
use tempfile::TempDir;

const MEMINFO: &str = "MemTotal:        1000000 kB\n\
                       MemFree:          100000 kB\n\
                       MemAvailable:     800000 kB\n\
                       Buffers:           10000 kB\n";

fn fixtures(loadavg: Option<&str>, meminfo: Option<&str>) -> (TempDir, SourcePaths) {
    let dir = tempfile::tempdir().unwrap();
    let sources = SourcePaths {
        loadavg: dir.path().join("loadavg"),
        meminfo: dir.path().join("meminfo"),
        root: dir.path().to_path_buf(),
    };
    if let Some(contents) = loadavg {
        fs::write(&sources.loadavg, contents).unwrap();
    }
    if let Some(contents) = meminfo {
        fs::write(&sources.meminfo, contents).unwrap();
    }
    (dir, sources)
}

#[test]
fn test_collect_from_fixtures() {
    let (_dir, sources) = fixtures(Some("0.42 0.30 0.25 2/512 9999\n"), Some(MEMINFO));
    let snapshot = collect(&sources).unwrap();

    assert!((snapshot.load_percent - 42.0).abs() < 1e-9);
    assert!((snapshot.ram_percent - 20.0).abs() < 1e-9);
    assert!((0.0..=100.0).contains(&snapshot.storage_percent));
}

#[test]
fn test_interactive_run_prints_summary() {
    let (_dir, sources) = fixtures(Some("0.42 0.30 0.25 2/512 9999\n"), Some(MEMINFO));
    let config = MonitorConfig::default().with_sources(sources);

    let mut out = Vec::new();
    let snapshot = run(&config, OutputMode::Interactive, &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    let last = output.lines().last().unwrap();
    assert_eq!(
        last,
        format!("Load: 42%  RAM: 20%  Storage: {:.0}%", snapshot.storage_percent)
    );
}

#[test]
fn test_high_load_warns_when_redirected() {
    let (_dir, sources) = fixtures(Some("3.10 2.00 1.00 1/100 1\n"), Some(MEMINFO));
    let config = MonitorConfig::default().with_sources(sources);

    let mut out = Vec::new();
    run(&config, OutputMode::Redirected, &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(output.starts_with("System load over threshold (200%): 310%\n"));
    assert!(!output.contains("Load: "));
}

#[test]
fn test_malformed_meminfo_stops_run_without_output() {
    let (_dir, sources) = fixtures(
        Some("0.10 0.10 0.10 1/100 1\n"),
        Some("MemTotal: 1000 kB\nMemFree: 500 kB\n"),
    );
    let config = MonitorConfig::default().with_sources(sources);

    for mode in [OutputMode::Interactive, OutputMode::Redirected] {
        let mut out = Vec::new();
        let err = run(&config, mode, &mut out).unwrap_err();
        assert!(matches!(err, MonitorError::Parse { .. }));
        assert_ne!(err.exit_code(), 0);
        assert!(out.is_empty());
    }
}

#[test]
fn test_missing_loadavg_fails_before_other_readers() {
    // meminfo is missing too; the load reader must be the one reported
    let (_dir, sources) = fixtures(None, None);
    let err = collect(&sources).unwrap_err();

    match &err {
        MonitorError::Read { path, .. } => assert_eq!(path, &sources.loadavg),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.exit_code(), 255);
}

#[test]
fn test_unreachable_root_reports_errno() {
    let (dir, mut sources) = fixtures(Some("0.10\n"), Some(MEMINFO));
    sources.root = dir.path().join("missing");

    let err = collect(&sources).unwrap_err();
    assert!(matches!(err, MonitorError::Statfs { .. }));
    assert_eq!(err.exit_code(), (Errno::ENOENT as i32));
    assert!(err.to_string().contains(&(Errno::ENOENT as i32).to_string()));
}

//! End-to-end tests for the analysis runtime
//!
//! Drives the full pipeline (load, parse, replay, query, render) the way
//! the binary does, including the canonical sample session.

use duscan::{AnalysisConfig, AnalysisRuntime};
use replay_log::LogLevel;
use transcript::Transcript;

const SAMPLE: &str = "\
$ cd /
$ ls
dir a
14848514 b.txt
8504156 c.dat
dir d
$ cd a
$ ls
dir e
29116 f
2557 g
62596 h.lst
$ cd e
$ ls
584 i
$ cd ..
$ cd ..
$ cd d
$ ls
4060174 j
8033020 d.log
5626152 d.ext
7214296 k
";

#[test]
fn test_sample_report() {
    let mut runtime = AnalysisRuntime::new(AnalysisConfig::default());
    let report = runtime.run_text(SAMPLE).unwrap();

    assert_eq!(report.summary.total_used, 48_381_165);
    assert_eq!(report.summary.sum_under_max, 95_437);
    assert_eq!(report.candidate.path, "/d");
    assert_eq!(report.candidate.size, 24_933_642);
}

#[test]
fn test_sample_report_text_rendering() {
    let mut runtime = AnalysisRuntime::new(AnalysisConfig::default());
    let report = runtime.run_text(SAMPLE).unwrap();

    let text = report.render_text();
    assert!(text.contains("48381165"));
    assert!(text.contains("95437"));
    assert!(text.contains("/d (24933642 bytes)"));
}

#[test]
fn test_sample_report_json_rendering() {
    let mut runtime = AnalysisRuntime::new(AnalysisConfig::default());
    let report = runtime.run_text(SAMPLE).unwrap();

    let json = report.render_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["disk_size"], 70_000_000);
    assert_eq!(value["summary"]["total_used"], 48_381_165);
    assert_eq!(value["candidate"]["path"], "/d");
}

#[test]
fn test_load_transcript_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.txt");
    std::fs::write(&path, SAMPLE).unwrap();

    let transcript = Transcript::load_from_path(&path).unwrap();
    let mut runtime = AnalysisRuntime::new(AnalysisConfig::default());
    let report = runtime.run(&transcript).unwrap();
    assert_eq!(report.summary.total_used, 48_381_165);
}

#[test]
fn test_custom_threshold() {
    let config = AnalysisConfig {
        max_size: 600_000,
        ..AnalysisConfig::default()
    };
    let mut runtime = AnalysisRuntime::new(config);
    let report = runtime.run_text(SAMPLE).unwrap();

    // still only a (94853) and e (584); d and / stay above the bound
    assert_eq!(report.summary.sum_under_max, 95_437);
    assert_eq!(report.max_size, 600_000);
}

#[test]
fn test_verbose_log_records_every_step() {
    let config = AnalysisConfig {
        log_level: LogLevel::Debug,
        ..AnalysisConfig::default()
    };
    let mut runtime = AnalysisRuntime::new(config);
    runtime.run_text(SAMPLE).unwrap();

    let transcript = Transcript::from_text(SAMPLE).unwrap();
    // one debug entry per event plus the three phase records
    assert_eq!(runtime.log().len(), transcript.remaining() + 3);
}

#[test]
fn test_malformed_transcript_fails_with_line() {
    let mut runtime = AnalysisRuntime::new(AnalysisConfig::default());
    let result = runtime.run_text("$ cd /\nnot a listing line\n");
    let message = result.unwrap_err().to_string();
    assert!(message.contains("line 2"));
}

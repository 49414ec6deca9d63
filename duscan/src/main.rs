//! # Disk Usage Scanner CLI
//!
//! Main entry point for the transcript analyzer.

use duscan::{AnalysisConfig, AnalysisRuntime};
use replay_log::LogLevel;
use std::env;
use std::process;
use transcript::Transcript;

fn main() {
    let args: Vec<String> = env::args().collect();

    let (config, transcript_path) = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        print_usage(&args[0]);
        process::exit(1);
    });

    let transcript = Transcript::load_from_path(&transcript_path).unwrap_or_else(|e| {
        eprintln!("Failed to load transcript: {}", e);
        process::exit(1);
    });

    let verbose = config.log_level == LogLevel::Debug;
    let json = config.json;
    let mut runtime = AnalysisRuntime::new(config);

    let report = match runtime.run(&transcript) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Analysis failed: {}", e);
            process::exit(1);
        }
    };

    if verbose {
        for entry in runtime.log().entries() {
            eprintln!("{}", entry.render());
        }
    }

    if json {
        match report.render_json() {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Failed to render report: {}", e);
                process::exit(1);
            }
        }
    } else {
        print!("{}", report.render_text());
    }
}

fn parse_args(args: &[String]) -> Result<(AnalysisConfig, String), String> {
    let mut config = AnalysisConfig::default();
    let mut transcript_path = None;
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--disk-size" => {
                i += 1;
                config.disk_size = parse_bytes(args, i, "--disk-size")?;
            }
            "--max-size" => {
                i += 1;
                config.max_size = parse_bytes(args, i, "--max-size")?;
            }
            "--update-requirement" => {
                i += 1;
                config.update_requirement = parse_bytes(args, i, "--update-requirement")?;
            }
            "--json" => {
                config.json = true;
            }
            "--verbose" | "-v" => {
                config.log_level = LogLevel::Debug;
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other if other.starts_with('-') => {
                return Err(format!("Unknown option: {}", other));
            }
            other => {
                if transcript_path.is_some() {
                    return Err(format!("Unexpected extra argument: {}", other));
                }
                transcript_path = Some(other.to_string());
            }
        }
        i += 1;
    }

    let transcript_path =
        transcript_path.ok_or_else(|| "Expected a transcript file argument".to_string())?;
    Ok((config, transcript_path))
}

fn parse_bytes(args: &[String], i: usize, option: &str) -> Result<u64, String> {
    let value = args
        .get(i)
        .ok_or_else(|| format!("Missing value for {}", option))?;
    value
        .parse()
        .map_err(|_| format!("Invalid value for {}: {}", option, value))
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS] <TRANSCRIPT>", program);
    eprintln!();
    eprintln!("Replays a terminal transcript into a simulated filesystem and");
    eprintln!("reports directory sizes and the smallest deletable directory.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --disk-size <BYTES>           Disk capacity (default 70000000)");
    eprintln!("  --max-size <BYTES>            Directory-size threshold (default 100000)");
    eprintln!("  --update-requirement <BYTES>  Space the update needs (default 30000000)");
    eprintln!("  --json                        Render the report as JSON");
    eprintln!("  -v, --verbose                 Dump the replay log to stderr");
    eprintln!("  -h, --help                    Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} session.txt", program);
    eprintln!("  {} --max-size 200000 --json session.txt", program);
}

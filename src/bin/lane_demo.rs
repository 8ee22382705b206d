use lane_detector::config::runner::{self, OutputFormat, RunnerConfig};
use lane_detector::diagnostics::StreamReport;
use lane_detector::io::{load_segment_stream, write_json_file};
use lane_detector::StreamRunner;
use log::info;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Instant;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let _ = env_logger::try_init();
    let config_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .ok_or_else(|| "Usage: lane_demo <config.json>".to_string())?;
    let config = runner::load_config(&config_path)?;
    let base = config_path.parent().unwrap_or_else(|| Path::new("."));

    let streams = config
        .resolve_inputs(base)
        .iter()
        .map(|path| load_segment_stream(path))
        .collect::<Result<Vec<_>, _>>()?;
    info!("loaded {} stream(s) from {}", streams.len(), config_path.display());

    let start = Instant::now();
    let runner = StreamRunner::new(config.params, config.on_error);
    let reports = runner.run_all(&streams);
    let wall_ms = start.elapsed().as_secs_f64() * 1000.0;

    if config.output.format.includes_text() {
        for report in &reports {
            print_text_summary(report);
        }
        println!("wall_ms: {wall_ms:.3}");
    }
    if config.output.format.includes_json() {
        write_reports(&config, &reports)?;
    }
    Ok(())
}

fn print_text_summary(report: &StreamReport) {
    let s = &report.summary;
    println!("Stream {} ({}x{})", report.name, report.width, report.height);
    println!(
        "  frames: {} processed: {} no_segments: {} skipped: {} reused: {}{}",
        s.frames,
        s.processed,
        s.no_segments,
        s.skipped,
        s.reused,
        if s.aborted { " (aborted)" } else { "" }
    );
    for (label, count) in &s.turns {
        println!("  {label}: {count}");
    }
    for (kind, count) in &s.errors {
        println!("  error {kind}: {count}");
    }
    let st = &s.stages;
    println!(
        "  avg_ms classify={:.4} fit={:.4} predict={:.4} total={:.4}",
        st.classify_ms, st.fit_ms, st.predict_ms, st.total_ms
    );
    match st.max_fps {
        Some(fps) => println!("  max_fps: {fps:.1}"),
        None => println!("  max_fps: n/a"),
    }
}

fn write_reports(config: &RunnerConfig, reports: &[StreamReport]) -> Result<(), String> {
    match &config.output.json_out_dir {
        Some(dir) => {
            for report in reports {
                let path = dir.join(format!("{}.json", report.name));
                write_json_file(&path, report)?;
                if config.output.format.includes_text() {
                    println!("JSON report written to {}", path.display());
                } else {
                    eprintln!("JSON report written to {}", path.display());
                }
            }
        }
        None => {
            let json = serde_json::to_string_pretty(reports)
                .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
            if config.output.format == OutputFormat::Both {
                println!("\nJSON report:\n{json}");
            } else {
                println!("{json}");
            }
        }
    }
    Ok(())
}

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use side_reveal::config::RevealConfig;
use side_reveal::script::{Playback, Report, Script};
use side_reveal::SideReveal;

mod cli;

use cli::CliArgs;

// ============================================================================
// Output
// ============================================================================

fn format_report(report: &Report) -> String {
    match report {
        Report::WillReveal {
            t_ms,
            reveal,
            animated,
        } => format!(
            "{:>6} ms  will_reveal  reveal={} animated={}",
            t_ms, reveal, animated
        ),
        Report::Frame {
            t_ms,
            offset,
            overlay_alpha,
            revealed,
            dragging,
            animating,
        } => {
            let mut flags = Vec::new();
            if *revealed {
                flags.push("revealed");
            }
            if *dragging {
                flags.push("dragging");
            }
            if *animating {
                flags.push("animating");
            }
            format!(
                "{:>6} ms  frame        offset={:>7.2} overlay={:.3} {}",
                t_ms,
                offset,
                overlay_alpha,
                flags.join(",")
            )
        }
    }
}

// ============================================================================
// MAIN - Entry point
// ============================================================================

fn main() -> Result<()> {
    side_reveal::tracing::init();

    let args = CliArgs::parse();
    let frame_interval = args.frame_interval().map_err(|e| anyhow!(e))?;

    let config = match &args.config {
        Some(path) => RevealConfig::load_from(path).map_err(|e| anyhow!(e))?,
        None => RevealConfig::load(),
    };

    let script = Script::load(&args.script)
        .map_err(|e| anyhow!(e))
        .with_context(|| format!("Cannot replay {}", args.script.display()))?;

    tracing::info!(
        steps = script.steps.len(),
        fps = args.fps,
        "Replaying {}",
        args.script.display()
    );

    // The one and only component instance for this process
    let mut playback = Playback::new(SideReveal::new(config), frame_interval);

    let mut write_error = None;
    playback.run(&script, |report| {
        if write_error.is_some() {
            return;
        }
        let line = if args.json {
            match serde_json::to_string(report) {
                Ok(line) => line,
                Err(e) => {
                    write_error = Some(e);
                    return;
                }
            }
        } else {
            format_report(report)
        };
        println!("{}", line);
    });

    if let Some(e) = write_error {
        return Err(e).context("Failed to serialize frame report");
    }

    tracing::info!(
        elapsed_ms = playback.elapsed().as_millis() as u64,
        revealed = playback.reveal().is_revealed(),
        "Playback finished"
    );

    Ok(())
}

//! Reclaim command - free every declared development port.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use portreclaim_core::domain::join_handles;
use portreclaim_core::{ConfigSource, PortReclaimer, ReclaimEvent, ReclaimReport, TerminationResult};
use tracing::debug;

pub async fn run(root: &Path) -> Result<ExitCode> {
    let source = ConfigSource::in_dir(root);
    debug!(path = %source.path().display(), "Reading declared ports");

    let reclaimer = PortReclaimer::platform();
    let report = reclaimer
        .run(&source, |event| {
            if let Some(line) = render_event(&event) {
                println!("{}", line);
            }
        })
        .await?;

    if !report.is_empty() {
        println!("{}", summary(&report));
    }
    Ok(ExitCode::from(exit_status(&report)))
}

/// Process exit status: 1 if any port is still occupied, else 0.
fn exit_status(report: &ReclaimReport) -> u8 {
    if report.is_success() {
        0
    } else {
        1
    }
}

/// Progress line for an event, if it has one.
fn render_event(event: &ReclaimEvent) -> Option<String> {
    let line = match event {
        ReclaimEvent::NothingDeclared => {
            "No development ports declared in microfrontends.json".to_string()
        }
        ReclaimEvent::Declared { ports } => {
            let ports: Vec<String> = ports.iter().map(|p| p.to_string()).collect();
            format!("Killing processes on ports: {}", ports.join(", "))
        }
        ReclaimEvent::PortFree { port } => format!("• Port {} is free.", port),
        ReclaimEvent::PortOccupied { port, handles } => format!(
            "• Port {} has {} pid(s): {}",
            port,
            handles.len(),
            join_handles(handles)
        ),
        ReclaimEvent::GracefulRejected { .. } => {
            "  - SIGTERM was not accepted for every pid, re-checking...".to_string()
        }
        ReclaimEvent::Escalating { port, remaining } => format!(
            "  - {} pid(s) still on {}: {}",
            remaining.len(),
            port,
            join_handles(remaining)
        ),
        ReclaimEvent::Finished { port, result } => match result {
            TerminationResult::Free => return None,
            TerminationResult::TerminatedGracefully => {
                format!("  - Terminated pid(s) on {}.", port)
            }
            TerminationResult::TerminatedForcefully => {
                format!("  - Killed stubborn pid(s) on {}.", port)
            }
            TerminationResult::FailedToTerminate => {
                format!("  - Failed to kill pid(s) on {}.", port)
            }
        },
    };
    Some(line)
}

fn summary(report: &ReclaimReport) -> String {
    let mut line = format!(
        "Done: {} free, {} terminated, {} killed, {} failed.",
        report.count(TerminationResult::Free),
        report.count(TerminationResult::TerminatedGracefully),
        report.count(TerminationResult::TerminatedForcefully),
        report.count(TerminationResult::FailedToTerminate),
    );

    let failed = report.failed_ports();
    if !failed.is_empty() {
        let failed: Vec<String> = failed.iter().map(|p| p.to_string()).collect();
        line.push_str(&format!(" Still occupied: {}", failed.join(", ")));
    }
    line
}

use crate::cli::args::ScanArgs;
use crate::exit_codes;
use anyhow::Context;
use bodyguard_core::{inspect_body, Inspection, Verdict};
use bodyguard_server::{init_tracing, LogFormat};
use serde::Serialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Serialize)]
struct ScanReport {
    verdict: Verdict,
    reason_code: &'static str,
    status: u16,
}

impl From<Inspection> for ScanReport {
    fn from(inspection: Inspection) -> Self {
        Self {
            verdict: inspection.verdict,
            reason_code: inspection.reason_code,
            status: inspection.verdict.status_code(),
        }
    }
}

pub fn run(args: ScanArgs) -> anyhow::Result<i32> {
    init_tracing(LogFormat::Text)?;
    let bytes = read_input(args.input.as_deref())?;
    let inspection = inspect_body(Some(&bytes[..]));
    tracing::debug!(reason_code = inspection.reason_code, "scan complete");

    let report = ScanReport::from(inspection);
    println!("{}", serde_json::to_string(&report)?);

    Ok(match inspection.verdict {
        Verdict::Accept => exit_codes::SUCCESS,
        Verdict::Reject => exit_codes::REJECTED,
    })
}

fn read_input(path: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    match path {
        Some(p) if p != Path::new("-") => {
            std::fs::read(p).with_context(|| format!("failed to read {}", p.display()))
        }
        _ => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

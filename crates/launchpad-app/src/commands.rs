//! Subcommand bodies. Responses are written to `out`; a non-success
//! response turns into an `Err` so the process exits non-zero.

use std::io::Write;

use anyhow::bail;
use launchpad_adapter::controller::{ApiResponse, RocketController, RocketDto};
use tracing::info;

use crate::batch::{run_batch, BatchReport};

/// `launchpad create <NAME>...`
pub fn create(controller: &RocketController, names: &[String], out: &mut impl Write) -> anyhow::Result<()> {
    let mut failures = 0;
    for name in names {
        let response = controller.create(name);
        write_response(out, &response)?;
        if !response.is_success() {
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{failures} of {} rockets could not be created", names.len());
    }
    Ok(())
}

/// `launchpad get <ID>`
pub fn get(controller: &RocketController, id: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let response = controller.get(id);
    write_response(out, &response)?;
    if !response.is_success() {
        bail!("lookup of rocket '{id}' failed with status {}", response.status);
    }
    Ok(())
}

/// Default run: create every seed rocket, then read each one back.
///
/// Returns the ids assigned by the store.
pub fn seed(controller: &RocketController, names: &[String], out: &mut impl Write) -> anyhow::Result<Vec<String>> {
    info!("🚀 Launchpad");
    info!("   Seeding {} rockets", names.len());

    let mut ids = Vec::with_capacity(names.len());
    for name in names {
        let response = controller.create(name);
        if !response.is_success() {
            write_response(out, &response)?;
            bail!("failed to seed rocket '{name}'");
        }
        let dto: RocketDto = response.body_as()?;
        ids.extend(dto.id);
    }

    for id in &ids {
        write_response(out, &controller.get(id))?;
    }
    Ok(ids)
}

/// `launchpad batch --count N`
pub async fn batch(
    controller: RocketController,
    count: usize,
    workers: usize,
    out: &mut impl Write,
) -> anyhow::Result<BatchReport> {
    info!(count, workers, "starting batch");
    let report = run_batch(controller, count, workers).await?;
    writeln!(out, "{}", serde_json::to_string_pretty(&report.to_json())?)?;

    if !report.is_clean() {
        bail!(
            "batch finished with {} failures and {} malformed codes",
            report.failed,
            report.malformed_codes.len()
        );
    }
    Ok(report)
}

fn write_response(out: &mut impl Write, response: &ApiResponse) -> anyhow::Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(response)?)?;
    Ok(())
}

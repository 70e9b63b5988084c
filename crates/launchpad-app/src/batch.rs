//! Concurrent rocket creation through the controller
//!
//! Each creation runs on tokio's blocking pool; a semaphore caps how many
//! are in flight. Codes are checked on the way out of the JSON boundary.

use std::collections::HashSet;
use std::sync::Arc;

use launchpad_adapter::controller::{RocketController, RocketDto};
use launchpad_domain::LaunchCode;
use serde_json::{json, Value};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Outcome of a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub requested: usize,
    pub created: usize,
    pub failed: usize,
    pub distinct_codes: usize,
    /// Codes that do not match `^[a-f0-9]{5}$`
    pub malformed_codes: Vec<String>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failed == 0 && self.malformed_codes.is_empty()
    }

    pub fn to_json(&self) -> Value {
        json!({
            "requested": self.requested,
            "created": self.created,
            "failed": self.failed,
            "distinctCodes": self.distinct_codes,
            "malformedCodes": self.malformed_codes,
        })
    }
}

/// Create `count` rockets named `rocket-<n>`, at most `workers` at a time
pub async fn run_batch(
    controller: RocketController,
    count: usize,
    workers: usize,
) -> anyhow::Result<BatchReport> {
    let semaphore = Arc::new(Semaphore::new(workers.max(1)));
    let mut tasks = JoinSet::new();

    for n in 0..count {
        let permit = semaphore.clone().acquire_owned().await?;
        let controller = controller.clone();
        tasks.spawn_blocking(move || {
            let _permit = permit;
            controller.create(&format!("rocket-{n}"))
        });
    }

    let mut report = BatchReport {
        requested: count,
        ..Default::default()
    };
    let mut codes = HashSet::new();

    while let Some(joined) = tasks.join_next().await {
        let response = joined?;
        if !response.is_success() {
            warn!(status = response.status, body = %response.body, "creation failed");
            report.failed += 1;
            continue;
        }

        let dto: RocketDto = response.body_as()?;
        if LaunchCode::parse(&dto.launch_code).is_err() {
            report.malformed_codes.push(dto.launch_code.clone());
        }
        codes.insert(dto.launch_code);
        report.created += 1;
    }

    report.distinct_codes = codes.len();
    debug!(?report, "batch finished");
    Ok(report)
}

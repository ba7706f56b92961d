//! The submit/poll loop behind `analyze` and the calls built on it

use super::decode::decode;
use super::options::{self, Options, ALL, FROM_CACHE, START_NEW};
use super::{Client, ErrorStatusPolicy, ANALYZE};
use crate::models::{Host, HostStatus};
use crate::utils::{LabsError, Result};
use tokio_util::sync::CancellationToken;

impl Client {
    /// Run an assessment of `host` and wait for it to finish.
    ///
    /// With `force_fresh` the service is first told to discard any cached
    /// result and start over. The report is then polled up to
    /// [`Client::retries`] times, pausing [`Client::poll_interval`] between
    /// polls, until its status is terminal.
    pub async fn analyze(&self, host: &str, force_fresh: bool, overrides: &[Options]) -> Result<Host> {
        self.analyze_with_cancel(host, force_fresh, overrides, &CancellationToken::new())
            .await
    }

    /// [`Client::analyze`] that stops with [`LabsError::Cancelled`] once
    /// `cancel` fires. The token is checked before every request and raced
    /// against every request and every pause.
    pub async fn analyze_with_cancel(
        &self,
        host: &str,
        force_fresh: bool,
        overrides: &[Options],
        cancel: &CancellationToken,
    ) -> Result<Host> {
        let host = host.trim();
        if host.is_empty() {
            return Err(LabsError::EmptyHost);
        }

        let mut opts = options::analyze_defaults(host);
        for o in overrides {
            opts.merge(o);
        }
        labs_debug!(self, ?opts, "analyze options");

        if force_fresh {
            // startNew and fromCache are mutually exclusive on the service side
            let mut submit = opts.clone();
            submit.set(START_NEW, "on").set(ALL, "done");
            submit.remove(FROM_CACHE);

            labs_verbose!(self, host, "starting new assessment");
            let raw = self.call_cancellable(&submit, cancel).await?;
            labs_debug!(self, raw = %String::from_utf8_lossy(&raw), "assessment submitted");

            opts.set(FROM_CACHE, "on").set(ALL, "done");
        }

        let mut last_body = String::new();
        for attempt in 1..=self.retries {
            let raw = self.call_cancellable(&opts, cancel).await?;
            let report: Host = decode("analyze report", &raw)?;
            labs_debug!(self, attempt, status = %report.status, message = %report.status_message, "poll");

            if self.is_terminal(&report.status) {
                labs_verbose!(self, host, status = %report.status, "assessment finished");
                return Ok(report);
            }

            last_body = String::from_utf8_lossy(&raw).into_owned();
            if attempt < self.retries {
                tokio::select! {
                    _ = cancel.cancelled() => return Err(LabsError::Cancelled),
                    _ = tokio::time::sleep(self.poll_interval) => {}
                }
            }
        }

        tracing::warn!(host, attempts = self.retries, "assessment did not finish in time");
        Err(LabsError::RetriesExceeded {
            attempts: self.retries,
            last_body,
        })
    }

    /// Grade of the first endpoint of `host`, without forcing a new assessment.
    ///
    /// On any error the grade to report is [`crate::utils::NO_GRADE`], see
    /// [`LabsError::fallback_grade`].
    pub async fn get_grade(&self, host: &str, overrides: &[Options]) -> Result<String> {
        if host.trim().is_empty() {
            return Err(LabsError::EmptyHost);
        }
        let report = self.analyze(host, false, overrides).await?;
        grade_from_report(&report)
    }

    /// Full report for `host`, including endpoint details, served from cache
    /// when the service has one
    pub async fn get_detailed_report(&self, host: &str, overrides: &[Options]) -> Result<Host> {
        let mut all = Vec::with_capacity(overrides.len() + 1);
        all.push(Options::from([(ALL, "done"), (FROM_CACHE, "on")]));
        all.extend_from_slice(overrides);
        self.analyze(host, false, &all).await
    }

    fn is_terminal(&self, status: &HostStatus) -> bool {
        match status {
            HostStatus::Ready => true,
            HostStatus::Error => self.error_policy == ErrorStatusPolicy::StopPolling,
            _ => false,
        }
    }

    async fn call_cancellable(&self, opts: &Options, cancel: &CancellationToken) -> Result<Vec<u8>> {
        if cancel.is_cancelled() {
            return Err(LabsError::Cancelled);
        }
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(LabsError::Cancelled),
            res = self.call_api(ANALYZE, opts) => res,
        }
    }
}

/// Extract the grade of the first endpoint of a finished report
pub fn grade_from_report(report: &Host) -> Result<String> {
    let first = report.endpoints.first().ok_or(LabsError::NoEndpoint)?;
    if !first.is_ready() {
        return Err(LabsError::RemoteStatus {
            status_message: first.status_message.clone(),
        });
    }
    Ok(first.grade.clone())
}

use crate::types::config::GitSettings;
use crate::types::facts::GitFacts;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

pub fn collect(root: &Path, settings: &GitSettings) -> GitFacts {
    if !root.join(".git").exists() {
        tracing::debug!(root = %root.display(), "no .git metadata, skipping history queries");
        return GitFacts::default();
    }

    let commit_count = run_git(root, settings, &["rev-list", "--count", "HEAD"])
        .map(|stdout| parse_commit_count(&stdout))
        .unwrap_or_default();

    let (first_commit_date, last_commit_date) = run_git(
        root,
        settings,
        &["log", "--pretty=format:%ad", "--date=short"],
    )
    .map(|stdout| date_range(&stdout))
    .unwrap_or_default();

    let contributors: BTreeSet<String> = run_git(root, settings, &["log", "--pretty=format:%an"])
        .map(|stdout| {
            stdout
                .lines()
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let branches = run_git(root, settings, &["branch", "-r"])
        .map(|stdout| parse_branches(&stdout))
        .unwrap_or_default();

    GitFacts {
        commit_count,
        first_commit_date,
        last_commit_date,
        contributors,
        branches,
    }
}

fn parse_commit_count(stdout: &str) -> u64 {
    stdout.trim().parse::<u64>().unwrap_or(0)
}

fn date_range(stdout: &str) -> (Option<NaiveDate>, Option<NaiveDate>) {
    let mut dates: Vec<NaiveDate> = stdout
        .lines()
        .filter_map(|line| NaiveDate::parse_from_str(line.trim(), "%Y-%m-%d").ok())
        .collect();
    dates.sort_unstable();
    (dates.first().copied(), dates.last().copied())
}

fn parse_branches(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !is_head_pointer(line))
        .map(str::to_string)
        .collect()
}

fn is_head_pointer(branch: &str) -> bool {
    branch.contains(" -> ") || branch.rsplit('/').next() == Some("HEAD")
}

/// Runs one git query against `root`. Any failure (spawn error, non-zero
/// exit, timeout, non-UTF-8 output) yields `None`.
fn run_git(root: &Path, settings: &GitSettings, args: &[&str]) -> Option<String> {
    let mut child = Command::new(&settings.binary)
        .arg("-C")
        .arg(root)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|err| tracing::debug!(?args, error = %err, "git query could not start"))
        .ok()?;

    // Drain stdout on a separate thread so a large history cannot fill the
    // pipe while we poll for exit.
    let mut stdout = child.stdout.take()?;
    let reader = thread::spawn(move || {
        let mut buf = Vec::new();
        stdout.read_to_end(&mut buf).map(|_| buf)
    });

    let deadline = Instant::now() + settings.timeout;
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) if Instant::now() >= deadline => {
                tracing::warn!(?args, timeout = ?settings.timeout, "git query timed out");
                terminate(&mut child, args);
                return None;
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(err) => {
                tracing::debug!(?args, error = %err, "git query wait failed");
                terminate(&mut child, args);
                return None;
            }
        }
    };

    let bytes = reader.join().ok()?.ok()?;
    if !status.success() {
        tracing::debug!(?args, %status, "git query failed, using default");
        return None;
    }
    tracing::debug!(?args, bytes = bytes.len(), "git query succeeded");
    String::from_utf8(bytes).ok()
}

/// Kills `child` and reaps it so no zombie is left behind.
fn terminate(child: &mut Child, args: &[&str]) {
    if let Err(err) = child.kill() {
        tracing::debug!(?args, error = %err, "git query kill failed");
    }
    if let Err(err) = child.wait() {
        tracing::debug!(?args, error = %err, "git query reap failed");
    }
}

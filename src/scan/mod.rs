pub mod codebase;
pub mod filesystem;
pub mod git_meta;
pub mod portfolio;

use crate::types::config::GitSettings;
use crate::types::facts::FactRecord;
use std::path::Path;

/// Runs both collectors against `root` and merges their halves.
pub fn collect_facts(root: &Path, settings: &GitSettings) -> FactRecord {
    let git = git_meta::collect(root, settings);
    let codebase = codebase::analyze(root);
    FactRecord::merge(git, codebase)
}

use std::path::Path;
use walkdir::{DirEntry, WalkDir};

pub const EXCLUDED_DIRS: &[&str] = &["node_modules", "venv", "__pycache__", "build", "dist"];

/// Walks every file under `root`, pruning hidden and excluded directories
/// before descending into them. Unreadable entries are skipped, and a
/// `root` that is itself a file yields nothing.
pub fn walk_files(root: &Path) -> impl Iterator<Item = DirEntry> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_pruned_dir(entry))
        .filter_map(|entry| {
            entry
                .map_err(|err| tracing::debug!(error = %err, "skipping unreadable entry"))
                .ok()
        })
        .filter(|entry| entry.depth() > 0 && entry.file_type().is_file())
}

fn is_pruned_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || EXCLUDED_DIRS.contains(&name.as_ref())
}

pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

pub fn read_to_string_if_exists(path: &Path) -> Option<String> {
    if !path.is_file() {
        return None;
    }
    std::fs::read_to_string(path)
        .map_err(|err| {
            tracing::warn!(path = %path.display(), error = %err, "unreadable file skipped");
        })
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn walk_files_prunes_hidden_and_excluded_directories() {
        let dir = TempDir::new().expect("temp dir should be created");
        for sub in [".git", "node_modules/pkg", "venv/lib", "build", "dist", "src/nested"] {
            fs::create_dir_all(dir.path().join(sub)).expect("dir should create");
        }
        fs::write(dir.path().join(".git/config"), "x").expect("write");
        fs::write(dir.path().join("node_modules/pkg/index.js"), "x").expect("write");
        fs::write(dir.path().join("venv/lib/site.py"), "x").expect("write");
        fs::write(dir.path().join("build/out.o"), "x").expect("write");
        fs::write(dir.path().join("dist/bundle.js"), "x").expect("write");
        fs::write(dir.path().join("src/nested/lib.rs"), "x").expect("write");
        fs::write(dir.path().join("Cargo.toml"), "x").expect("write");

        let names: Vec<String> = walk_files(dir.path())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["Cargo.toml".to_string(), "lib.rs".to_string()]);
    }

    #[test]
    fn walk_files_does_not_prune_a_hidden_root() {
        let parent = TempDir::new().expect("temp dir should be created");
        let root = parent.path().join(".checkout");
        fs::create_dir_all(&root).expect("root should create");
        fs::write(root.join("main.go"), "package main").expect("write");

        assert_eq!(walk_files(&root).count(), 1);
    }

    #[test]
    fn walk_files_yields_nothing_for_a_file_root() {
        let dir = TempDir::new().expect("temp dir should be created");
        let file = dir.path().join("README.rs");
        fs::write(&file, "fn main() {}").expect("write");

        assert_eq!(walk_files(&file).count(), 0);
    }

    #[test]
    fn read_to_string_if_exists_ignores_directories() {
        let dir = TempDir::new().expect("temp dir should be created");
        assert!(read_to_string_if_exists(dir.path()).is_none());
        assert!(read_to_string_if_exists(&dir.path().join("missing")).is_none());
    }
}

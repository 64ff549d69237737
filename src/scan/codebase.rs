use super::filesystem::{is_hidden, walk_files};
use super::portfolio;
use crate::types::facts::CodebaseFacts;
use std::path::Path;

pub const CI_PATHS: &[&str] = &[
    ".github/workflows",
    ".gitlab-ci.yml",
    ".travis.yml",
    "Jenkinsfile",
    "azure-pipelines.yml",
];

pub const TEST_PATTERNS: &[&str] = &["test", "spec", "__tests__", "tests"];

pub fn analyze(root: &Path) -> CodebaseFacts {
    let mut facts = CodebaseFacts {
        has_ci_cd: detect_ci(root),
        ..CodebaseFacts::default()
    };

    for entry in walk_files(root) {
        let name = entry.file_name().to_string_lossy();
        let lower = name.to_lowercase();

        // Presence only: once one test-like file is seen the check stops.
        if !facts.has_tests && TEST_PATTERNS.iter().any(|pattern| lower.contains(pattern)) {
            facts.has_tests = true;
        }
        if lower.starts_with("readme") {
            facts.readme_exists = true;
        }
        if lower.starts_with("license") {
            facts.license_exists = true;
        }

        if is_hidden(&name) {
            continue;
        }
        facts.file_count += 1;
        if let Some(language) = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(language_for_extension)
        {
            facts.languages.insert(language.to_string());
        }
    }

    facts.is_portfolio = portfolio::detect(root);
    tracing::debug!(
        root = %root.display(),
        files = facts.file_count,
        languages = ?facts.languages,
        has_tests = facts.has_tests,
        has_ci_cd = facts.has_ci_cd,
        is_portfolio = facts.is_portfolio,
        "codebase analyzed"
    );
    facts
}

fn detect_ci(root: &Path) -> bool {
    match CI_PATHS.iter().find(|path| root.join(path).exists()) {
        Some(path) => {
            tracing::debug!(ci = %path, "ci config detected");
            true
        }
        None => false,
    }
}

/// Coarse label for a file extension. Several extensions share a label.
pub fn language_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "js" | "jsx" | "ts" | "tsx" => Some("JavaScript/TypeScript"),
        "py" => Some("Python"),
        "java" => Some("Java"),
        "cpp" | "c" | "h" => Some("C/C++"),
        "go" => Some("Go"),
        "rs" => Some("Rust"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs;
    use tempfile::TempDir;

    fn language_set(labels: &[&str]) -> BTreeSet<String> {
        labels.iter().map(|label| label.to_string()).collect()
    }

    #[test]
    fn analyze_empty_tree_yields_defaults() {
        let dir = TempDir::new().expect("temp dir should be created");
        assert_eq!(analyze(dir.path()), CodebaseFacts::default());
    }

    #[test]
    fn analyze_collects_ci_tests_docs_and_languages() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join(".github/workflows")).expect("workflow dir");
        fs::create_dir_all(dir.path().join("src")).expect("src dir");
        fs::write(dir.path().join(".github/workflows/ci.yml"), "on: push").expect("write");
        fs::write(dir.path().join("README.md"), "# Tool").expect("write");
        fs::write(dir.path().join("LICENSE-MIT"), "MIT").expect("write");
        fs::write(dir.path().join("src/app.tsx"), "").expect("write");
        fs::write(dir.path().join("src/util.js"), "").expect("write");
        fs::write(dir.path().join("src/main.rs"), "").expect("write");
        fs::write(dir.path().join("src/Parser.Spec.ts"), "").expect("write");
        fs::write(dir.path().join(".env"), "SECRET=1").expect("write");

        let facts = analyze(dir.path());
        assert!(facts.has_ci_cd);
        assert!(facts.has_tests);
        assert!(facts.readme_exists);
        assert!(facts.license_exists);
        assert!(!facts.is_portfolio);
        assert_eq!(facts.file_count, 6);
        assert_eq!(
            facts.languages,
            language_set(&["JavaScript/TypeScript", "Rust"])
        );
        assert_eq!(facts.test_coverage, 0.0);
    }

    #[test]
    fn analyze_ignores_tests_inside_excluded_directories() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join("node_modules/lib")).expect("dir");
        fs::write(dir.path().join("node_modules/lib/index.test.js"), "").expect("write");
        fs::write(dir.path().join("main.py"), "").expect("write");

        let facts = analyze(dir.path());
        assert!(!facts.has_tests);
        assert_eq!(facts.file_count, 1);
        assert_eq!(facts.languages, language_set(&["Python"]));
    }

    #[test]
    fn detect_ci_accepts_any_listed_path() {
        let dir = TempDir::new().expect("temp dir should be created");
        assert!(!detect_ci(dir.path()));
        fs::write(dir.path().join("Jenkinsfile"), "pipeline {}").expect("write");
        assert!(detect_ci(dir.path()));
    }

    #[test]
    fn language_mapping_collapses_script_extensions() {
        for ext in ["js", "jsx", "ts", "TSX"] {
            assert_eq!(language_for_extension(ext), Some("JavaScript/TypeScript"));
        }
        assert_eq!(language_for_extension("h"), Some("C/C++"));
        assert_eq!(language_for_extension("md"), None);
    }
}

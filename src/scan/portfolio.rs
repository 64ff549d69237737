use super::filesystem::read_to_string_if_exists;
use serde::Deserialize;
use std::path::Path;

pub const PORTFOLIO_KEYWORDS: &[&str] = &[
    "portfolio",
    "personal-website",
    "resume",
    "cv",
    "about",
    "contact",
    "hero",
    "skills",
    "projects",
    "experience",
    "education",
];

pub const PORTFOLIO_COMPONENTS: &[&str] = &[
    "About",
    "Contact",
    "Hero",
    "Skills",
    "Projects",
    "Experience",
    "Education",
];

pub const MIN_COMPONENT_MATCHES: usize = 4;

const README_CANDIDATES: &[&str] = &["README.md", "readme.md", "README.txt"];

#[derive(Debug, Default, Deserialize)]
struct PackageManifest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Classifies `root` as a personal-site project. Any one signal is enough.
pub fn detect(root: &Path) -> bool {
    manifest_signal(root) || components_signal(root) || readme_signal(root)
}

fn contains_keyword(text: &str) -> bool {
    let lower = text.to_lowercase();
    PORTFOLIO_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword))
}

fn manifest_signal(root: &Path) -> bool {
    let path = root.join("package.json");
    let Some(raw) = read_to_string_if_exists(&path) else {
        return false;
    };
    let manifest: PackageManifest = match serde_json::from_str(&raw) {
        Ok(manifest) => manifest,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "package manifest skipped");
            return false;
        }
    };

    let hit = [manifest.name, manifest.description]
        .iter()
        .flatten()
        .any(|field| contains_keyword(field));
    if hit {
        tracing::debug!("portfolio keyword found in package manifest");
    }
    hit
}

fn components_signal(root: &Path) -> bool {
    let dir = root.join("src").join("components");
    let entries = match std::fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(_) => return false,
    };
    let names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().to_lowercase())
        .collect();

    let matches = PORTFOLIO_COMPONENTS
        .iter()
        .filter(|component| {
            let component = component.to_lowercase();
            names.iter().any(|name| name.contains(&component))
        })
        .count();
    tracing::debug!(matches, "portfolio components counted");
    matches >= MIN_COMPONENT_MATCHES
}

fn readme_signal(root: &Path) -> bool {
    README_CANDIDATES
        .iter()
        .filter_map(|name| read_to_string_if_exists(&root.join(name)))
        .any(|content| contains_keyword(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn components_dir(root: &Path) -> std::path::PathBuf {
        let dir = root.join("src/components");
        fs::create_dir_all(&dir).expect("components dir should create");
        dir
    }

    #[test]
    fn detect_is_false_for_plain_project() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(dir.path().join("README.md"), "A fast JSON tokenizer.").expect("write");
        fs::write(
            dir.path().join("package.json"),
            r#"{"name": "tokenizer", "description": "streaming tokenizer"}"#,
        )
        .expect("write");

        assert!(!detect(dir.path()));
    }

    #[test]
    fn detect_accepts_four_portfolio_components_alone() {
        let dir = TempDir::new().expect("temp dir should be created");
        let components = components_dir(dir.path());
        for file in ["About.js", "Contact.js", "Hero.js", "Skills.js"] {
            fs::write(components.join(file), "export default () => null;").expect("write");
        }

        assert!(detect(dir.path()));
    }

    #[test]
    fn detect_rejects_three_portfolio_components() {
        let dir = TempDir::new().expect("temp dir should be created");
        let components = components_dir(dir.path());
        for file in ["About.js", "Contact.js", "Hero.js", "Navbar.js"] {
            fs::write(components.join(file), "").expect("write");
        }

        assert!(!detect(dir.path()));
    }

    #[test]
    fn detect_matches_components_case_insensitively() {
        let dir = TempDir::new().expect("temp dir should be created");
        let components = components_dir(dir.path());
        for file in [
            "aboutSection.tsx",
            "CONTACT.vue",
            "hero-banner.jsx",
            "ExperienceList.js",
        ] {
            fs::write(components.join(file), "").expect("write");
        }

        assert!(detect(dir.path()));
    }

    #[test]
    fn detect_reads_manifest_description() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(
            dir.path().join("package.json"),
            r#"{"name": "site", "description": "My Personal Portfolio"}"#,
        )
        .expect("write");

        assert!(detect(dir.path()));
    }

    #[test]
    fn detect_skips_malformed_manifest_and_checks_readme() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(dir.path().join("package.json"), "{ not json").expect("write");
        fs::write(dir.path().join("README.txt"), "Download my Resume here").expect("write");

        assert!(detect(dir.path()));
    }

    #[test]
    fn detect_ignores_non_string_manifest_fields() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(dir.path().join("package.json"), r#"{"name": 42}"#).expect("write");

        assert!(!detect(dir.path()));
    }
}

//! Artifact enumeration
//!
//! Walks the target tree and returns the repo-relative paths of every file
//! worth committing. Build output, dependency trees, editor droppings,
//! lockfiles, and secrets are filtered out by name; `.gitignore` rules are
//! honored on top of that.

use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Names and name-globs never worth committing.
const IGNORED_NAMES: &[&str] = &[
    ".git",
    "node_modules",
    ".next",
    ".vercel",
    "dist",
    "build",
    "__pycache__",
    ".pytest_cache",
    ".coverage",
    ".nyc_output",
    ".DS_Store",
    "Thumbs.db",
    "*.log",
    "*.tmp",
    "*.swp",
    "*.swo",
    ".env",
    ".env.local",
    ".env.production",
    ".env.staging",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    ".vscode",
    ".idea",
    "*.sublime-*",
    ".history",
];

/// Enumerate the files under `root`, excluding ignored names and anything
/// `.gitignore` rules drop. Returns paths relative to `root`, sorted.
pub fn list_artifacts(root: &Path, extra_ignores: &[String]) -> Result<Vec<PathBuf>> {
    let mut patterns: Vec<String> = IGNORED_NAMES.iter().map(|p| p.to_string()).collect();
    patterns.extend(extra_ignores.iter().cloned());

    let walker = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .git_global(false)
        .git_exclude(true)
        .require_git(false)
        .filter_entry(move |entry| {
            let name = entry.file_name().to_string_lossy();
            !patterns.iter().any(|p| name_matches(&name, p))
        })
        .build();

    let mut files = Vec::new();
    for entry in walker.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let rel = path.strip_prefix(root).unwrap_or(path);
        files.push(rel.to_path_buf());
    }

    files.sort();
    debug!(count = files.len(), root = %root.display(), "enumerated artifacts");
    Ok(files)
}

/// Glob-lite matching: a leading `*` anchors at the end, a trailing `*`
/// anchors at the start, both means substring, neither means exact name.
fn name_matches(name: &str, pattern: &str) -> bool {
    match (pattern.strip_prefix('*'), pattern.strip_suffix('*')) {
        (Some(suffix), None) => name.ends_with(suffix),
        (None, Some(prefix)) => name.starts_with(prefix),
        (Some(_), Some(_)) => name.contains(pattern.trim_matches('*')),
        (None, None) => name == pattern,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "x").unwrap();
    }

    #[test]
    fn skips_ignored_directories_and_files() {
        let dir = tempdir().unwrap();
        let root = dir.path();

        touch(root, "app/page.tsx");
        touch(root, "lib/utils.ts");
        touch(root, ".gitignore");
        touch(root, "node_modules/react/index.js");
        touch(root, ".git/config");
        touch(root, "debug.log");
        touch(root, ".env");
        touch(root, "package-lock.json");
        touch(root, "editor.swp");

        let files = list_artifacts(root, &[]).unwrap();
        assert_eq!(
            files,
            vec![
                PathBuf::from(".gitignore"),
                PathBuf::from("app/page.tsx"),
                PathBuf::from("lib/utils.ts"),
            ]
        );
    }

    #[test]
    fn extra_ignores_extend_the_builtin_set() {
        let dir = tempdir().unwrap();
        let root = dir.path();

        touch(root, "keep.ts");
        touch(root, "generated/schema.ts");
        touch(root, "data.generated.json");

        let files = list_artifacts(root, &["generated".into(), "*.generated.json".into()]).unwrap();
        assert_eq!(files, vec![PathBuf::from("keep.ts")]);
    }

    #[test]
    fn empty_tree_yields_no_artifacts() {
        let dir = tempdir().unwrap();
        assert!(list_artifacts(dir.path(), &[]).unwrap().is_empty());
    }

    #[test]
    fn glob_lite_semantics() {
        assert!(name_matches("debug.log", "*.log"));
        assert!(name_matches("project.sublime-workspace", "*.sublime-*"));
        assert!(name_matches(".env", ".env"));
        assert!(!name_matches(".envrc", ".env"));
        assert!(!name_matches("catalog.rs", "*.log"));
    }
}

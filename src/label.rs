//! Commit message selection
//!
//! Maps an artifact path to a contextually relevant commit message. The
//! catalog is an ordered list of (pattern, candidate pool) rules; the first
//! matching rule wins and one candidate is drawn uniformly from its pool.
//!
//! Rule precedence is explicit rather than left to map iteration order:
//! path-substring rules are scanned first, then directory-fragment rules,
//! then extension rules, in declaration order within each class. A path no
//! rule matches falls back to a message synthesized from its base name.

use rand::seq::IndexedRandom;
use rand::Rng;
use std::path::Path;

/// Pattern classes in descending specificity. The declaration order here is
/// the scan order of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PatternKind {
    /// Literal substring of the full relative path
    Path,
    /// Directory segment anywhere in the path
    Directory,
    /// File extension (without the dot)
    Extension,
}

/// One catalog entry: a pattern and its candidate messages.
#[derive(Debug, Clone)]
pub struct LabelRule {
    pub kind: PatternKind,
    pub pattern: String,
    pub labels: Vec<String>,
}

impl LabelRule {
    pub fn new(kind: PatternKind, pattern: &str, labels: &[&str]) -> Self {
        Self {
            kind,
            pattern: pattern.to_string(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }

    fn matches(&self, path: &str) -> bool {
        match self.kind {
            PatternKind::Path => path.contains(&self.pattern),
            PatternKind::Directory => {
                let fragment = format!("{}/", self.pattern.trim_end_matches('/'));
                path.contains(&fragment)
            }
            PatternKind::Extension => Path::new(path)
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| ext == self.pattern.trim_start_matches('.')),
        }
    }
}

/// Static table mapping path patterns to candidate commit messages.
///
/// Immutable once built; `select` is the only consumer.
#[derive(Debug, Clone)]
pub struct LabelCatalog {
    rules: Vec<LabelRule>,
}

impl LabelCatalog {
    /// Build a catalog from rules, ordering them by specificity class.
    /// The sort is stable, so declaration order within a class is preserved.
    pub fn new(mut rules: Vec<LabelRule>) -> Self {
        rules.sort_by_key(|r| r.kind);
        Self { rules }
    }

    /// Pick a commit message for `path`.
    ///
    /// Total for any non-empty path: if no rule matches (or a matching rule
    /// has an empty pool), the fallback incorporates the file's base name.
    /// Separators are normalized so catalogs written with `/` match on any
    /// host OS.
    pub fn select(&self, path: &str, rng: &mut impl Rng) -> String {
        let normalized = path.replace('\\', "/");

        for rule in &self.rules {
            if rule.matches(&normalized) {
                if let Some(label) = rule.labels.choose(rng) {
                    return label.clone();
                }
            }
        }

        let base = Path::new(&normalized)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| normalized.clone());
        format!("Add {base}")
    }

    /// The built-in catalog, tuned for a Next.js/TypeScript project layout.
    pub fn builtin() -> Self {
        use PatternKind::{Directory, Extension, Path};

        let rules = vec![
            // Core app files
            LabelRule::new(
                Path,
                "app/page.tsx",
                &[
                    "Initialize main app component",
                    "Add core app state management",
                    "Implement app routing logic",
                ],
            ),
            LabelRule::new(
                Path,
                "app/layout.tsx",
                &[
                    "Set up root layout component",
                    "Configure app-wide providers",
                    "Add global layout structure",
                ],
            ),
            LabelRule::new(
                Path,
                "app/globals.css",
                &[
                    "Add global CSS styles",
                    "Configure Tailwind base styles",
                    "Set up global typography",
                ],
            ),
            // Named components
            LabelRule::new(
                Path,
                "components/welcome-screen.tsx",
                &[
                    "Create welcome screen component",
                    "Add user onboarding flow",
                    "Implement name input form",
                ],
            ),
            LabelRule::new(
                Path,
                "components/chat-interface.tsx",
                &[
                    "Build chat interface component",
                    "Add message handling logic",
                    "Implement chat UI layout",
                ],
            ),
            LabelRule::new(
                Path,
                "components/recipe-grid.tsx",
                &[
                    "Create recipe grid display",
                    "Add recipe card components",
                    "Implement grid layout",
                ],
            ),
            LabelRule::new(
                Path,
                "components/recipe-detail.tsx",
                &[
                    "Build recipe detail view",
                    "Add ingredient list display",
                    "Implement cooking instructions",
                ],
            ),
            LabelRule::new(
                Path,
                "components/chat-sidebar.tsx",
                &[
                    "Create chat sidebar component",
                    "Add session management UI",
                    "Implement sidebar navigation",
                ],
            ),
            LabelRule::new(
                Path,
                "components/cooking-timer.tsx",
                &[
                    "Add cooking timer feature",
                    "Implement timer controls",
                    "Add timer audio notifications",
                ],
            ),
            LabelRule::new(
                Path,
                "components/recipe-collection.tsx",
                &[
                    "Build recipe collection view",
                    "Add recipe organization",
                    "Implement collection management",
                ],
            ),
            LabelRule::new(
                Path,
                "components/theme-provider.tsx",
                &[
                    "Add theme provider setup",
                    "Implement dark/light mode",
                    "Configure theme switching",
                ],
            ),
            // Utilities and config
            LabelRule::new(
                Path,
                "lib/storage.ts",
                &[
                    "Implement local storage utilities",
                    "Add data persistence layer",
                    "Create storage management class",
                ],
            ),
            LabelRule::new(
                Path,
                "lib/types.ts",
                &[
                    "Define TypeScript interfaces",
                    "Add type definitions",
                    "Create shared type exports",
                ],
            ),
            LabelRule::new(
                Path,
                "lib/utils.ts",
                &[
                    "Add utility functions",
                    "Implement helper methods",
                    "Create common utilities",
                ],
            ),
            LabelRule::new(
                Path,
                "package.json",
                &[
                    "Initialize project dependencies",
                    "Add development scripts",
                    "Configure project metadata",
                ],
            ),
            LabelRule::new(
                Path,
                "tsconfig.json",
                &[
                    "Configure TypeScript settings",
                    "Set up module resolution",
                    "Add compiler options",
                ],
            ),
            LabelRule::new(
                Path,
                "next.config.mjs",
                &[
                    "Configure Next.js settings",
                    "Add build optimizations",
                    "Set up deployment config",
                ],
            ),
            LabelRule::new(
                Path,
                "tailwind.config.js",
                &[
                    "Configure Tailwind CSS",
                    "Add custom theme colors",
                    "Set up design tokens",
                ],
            ),
            LabelRule::new(
                Path,
                "postcss.config.mjs",
                &[
                    "Configure PostCSS plugins",
                    "Set up CSS processing",
                    "Add autoprefixer config",
                ],
            ),
            LabelRule::new(
                Path,
                "components.json",
                &[
                    "Configure shadcn/ui components",
                    "Set up component library",
                    "Add UI component config",
                ],
            ),
            LabelRule::new(
                Path,
                "reference.md",
                &[
                    "Add project reference docs",
                    "Document API endpoints",
                    "Include development notes",
                ],
            ),
            LabelRule::new(
                Path,
                "README.md",
                &[
                    "Add project documentation",
                    "Include setup instructions",
                    "Document features and usage",
                ],
            ),
            // Directory pools
            LabelRule::new(
                Directory,
                "components/ui",
                &[
                    "Add button component",
                    "Create card component",
                    "Implement input component",
                    "Add dialog component",
                    "Create dropdown component",
                    "Add navigation component",
                    "Implement form components",
                    "Add layout components",
                    "Create feedback components",
                    "Add data display components",
                ],
            ),
            LabelRule::new(
                Directory,
                "api",
                &[
                    "Add chat API endpoint",
                    "Implement recipe generation API",
                    "Create image generation endpoint",
                    "Add API error handling",
                    "Optimize API response format",
                ],
            ),
            LabelRule::new(
                Directory,
                "hooks",
                &[
                    "Add custom React hooks",
                    "Implement mobile detection hook",
                    "Create toast notification hook",
                ],
            ),
            LabelRule::new(
                Directory,
                "public",
                &[
                    "Add placeholder images",
                    "Include app icons",
                    "Add audio assets",
                    "Include static resources",
                ],
            ),
            // Extension pools
            LabelRule::new(
                Extension,
                "tsx",
                &[
                    "Add React component",
                    "Implement component logic",
                    "Update component styling",
                    "Fix component rendering",
                    "Optimize component performance",
                ],
            ),
            LabelRule::new(
                Extension,
                "ts",
                &[
                    "Add TypeScript module",
                    "Implement business logic",
                    "Add type definitions",
                    "Fix type errors",
                    "Refactor utility functions",
                ],
            ),
            LabelRule::new(
                Extension,
                "css",
                &[
                    "Add component styles",
                    "Update CSS layout",
                    "Fix responsive design",
                    "Implement design system",
                    "Optimize stylesheet",
                ],
            ),
            LabelRule::new(
                Extension,
                "json",
                &[
                    "Update configuration",
                    "Add project settings",
                    "Configure dependencies",
                    "Update metadata",
                ],
            ),
            LabelRule::new(
                Extension,
                "js",
                &[
                    "Add JavaScript module",
                    "Implement functionality",
                    "Fix script logic",
                    "Update configuration",
                ],
            ),
            LabelRule::new(
                Extension,
                "mjs",
                &[
                    "Configure ES module",
                    "Update build settings",
                    "Add module configuration",
                ],
            ),
            LabelRule::new(
                Extension,
                "md",
                &[
                    "Add documentation",
                    "Update README",
                    "Document features",
                    "Add setup instructions",
                ],
            ),
        ];

        Self::new(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn directory_pool_beats_extension_pool() {
        let catalog = LabelCatalog::builtin();
        let ui_pool = [
            "Add button component",
            "Create card component",
            "Implement input component",
            "Add dialog component",
            "Create dropdown component",
            "Add navigation component",
            "Implement form components",
            "Add layout components",
            "Create feedback components",
            "Add data display components",
        ];

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..100 {
            let label = catalog.select("components/ui/button.tsx", &mut rng);
            assert!(
                ui_pool.contains(&label.as_str()),
                "{label:?} is not from the components/ui pool"
            );
        }
    }

    #[test]
    fn path_rule_beats_directory_and_extension_rules() {
        let catalog = LabelCatalog::new(vec![
            LabelRule::new(PatternKind::Extension, "rs", &["from extension"]),
            LabelRule::new(PatternKind::Directory, "src", &["from directory"]),
            LabelRule::new(PatternKind::Path, "src/special.rs", &["from path"]),
        ]);

        let mut rng = ChaCha8Rng::seed_from_u64(2);
        assert_eq!(catalog.select("src/special.rs", &mut rng), "from path");
        assert_eq!(catalog.select("src/other.rs", &mut rng), "from directory");
        assert_eq!(catalog.select("top.rs", &mut rng), "from extension");
    }

    #[test]
    fn declaration_order_breaks_ties_within_a_class() {
        let catalog = LabelCatalog::new(vec![
            LabelRule::new(PatternKind::Path, "app/", &["first"]),
            LabelRule::new(PatternKind::Path, "page.tsx", &["second"]),
        ]);

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(catalog.select("app/page.tsx", &mut rng), "first");
    }

    #[test]
    fn unknown_path_falls_back_to_base_name() {
        let catalog = LabelCatalog::builtin();
        let mut rng = ChaCha8Rng::seed_from_u64(4);

        let label = catalog.select("weirdfile.xyz", &mut rng);
        assert_eq!(label, "Add weirdfile.xyz");

        let nested = catalog.select("deep/dir/weirdfile.xyz", &mut rng);
        assert_eq!(nested, "Add weirdfile.xyz");
    }

    #[test]
    fn empty_pool_falls_through_to_fallback() {
        let catalog = LabelCatalog::new(vec![LabelRule::new(PatternKind::Path, "notes.txt", &[])]);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert_eq!(catalog.select("notes.txt", &mut rng), "Add notes.txt");
    }

    #[test]
    fn backslash_paths_match_forward_slash_rules() {
        let catalog = LabelCatalog::builtin();
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let label = catalog.select(r"app\globals.css", &mut rng);
        assert!(
            [
                "Add global CSS styles",
                "Configure Tailwind base styles",
                "Set up global typography"
            ]
            .contains(&label.as_str())
        );
    }

    #[test]
    fn same_seed_reproduces_selection() {
        let catalog = LabelCatalog::builtin();
        let paths = ["app/page.tsx", "components/ui/input.tsx", "mystery.bin"];

        let mut a = ChaCha8Rng::seed_from_u64(9);
        let mut b = ChaCha8Rng::seed_from_u64(9);
        for path in paths {
            assert_eq!(catalog.select(path, &mut a), catalog.select(path, &mut b));
        }
    }
}

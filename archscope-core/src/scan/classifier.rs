//! File Classification
//!
//! Assigns each scanned file a semantic category from an ordered rule
//! table. Rules are checked first to last and the first match wins, so
//! specific prefixes must precede their generalizations (`src/app/api`
//! before `src/app`). The table is plain immutable data owned by the
//! classifier; tests and callers may supply their own.

/// A single `(matcher, category)` rule
#[derive(Debug, Clone)]
pub struct ClassifierRule {
    pub matcher: Matcher,
    pub category: String,
}

impl ClassifierRule {
    fn new(matcher: Matcher, category: &str) -> Self {
        Self {
            matcher,
            category: category.to_string(),
        }
    }
}

/// Predicate side of a classification rule
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Root-level file whose lowercased name contains the needle
    RootNameContains(String),
    /// Root-level dotfile whose content is a JSON object (e.g. `.babelrc`)
    RootJsonDotfile,
    /// Root-level file with the given extension
    RootExtension(String),
    /// Path starts with the prefix at a `/` boundary
    PathPrefix(String),
    /// File name (any depth) contains the needle
    NameContains(String),
    /// File extension (any depth)
    Extension(String),
}

/// Path/extension/content heuristic file categorizer
#[derive(Debug, Clone)]
pub struct FileClassifier {
    rules: Vec<ClassifierRule>,
    fallback: String,
}

impl Default for FileClassifier {
    fn default() -> Self {
        Self::new(default_rules(), "Miscellaneous")
    }
}

impl FileClassifier {
    pub fn new(rules: Vec<ClassifierRule>, fallback: &str) -> Self {
        Self {
            rules,
            fallback: fallback.to_string(),
        }
    }

    /// Categorize a file from its root-relative path and text content.
    ///
    /// Total function: always returns a category, defaulting to the
    /// fallback when no rule matches.
    pub fn classify(&self, relative_path: &str, content: &str) -> String {
        let name = relative_path
            .rsplit('/')
            .next()
            .unwrap_or(relative_path)
            .to_lowercase();
        let is_root = !relative_path.contains('/');

        for rule in &self.rules {
            let matched = match &rule.matcher {
                Matcher::RootNameContains(needle) => is_root && name.contains(needle.as_str()),
                Matcher::RootJsonDotfile => {
                    is_root && name.starts_with('.') && content.trim_start().starts_with('{')
                }
                Matcher::RootExtension(ext) => is_root && name.ends_with(ext.as_str()),
                Matcher::PathPrefix(prefix) => path_has_prefix(relative_path, prefix),
                Matcher::NameContains(needle) => name.contains(needle.as_str()),
                Matcher::Extension(ext) => name.ends_with(ext.as_str()),
            };
            if matched {
                return rule.category.clone();
            }
        }
        self.fallback.clone()
    }
}

/// Prefix match at a path-segment boundary, so `src/app` does not
/// swallow `src/apps/...`.
fn path_has_prefix(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

fn default_rules() -> Vec<ClassifierRule> {
    use Matcher::{
        Extension, NameContains, PathPrefix, RootExtension, RootJsonDotfile, RootNameContains,
    };

    vec![
        // Root-level special files come before any nested-path rule
        ClassifierRule::new(RootNameContains("package".to_string()), "Package Management"),
        ClassifierRule::new(RootNameContains("lock".to_string()), "Package Management"),
        ClassifierRule::new(RootNameContains("config".to_string()), "Configuration"),
        ClassifierRule::new(RootJsonDotfile, "Configuration"),
        ClassifierRule::new(RootExtension(".md".to_string()), "Documentation"),
        // Nested path rules, specific before general
        ClassifierRule::new(PathPrefix("src/app/api".to_string()), "API"),
        ClassifierRule::new(PathPrefix("src/app".to_string()), "App Router"),
        ClassifierRule::new(PathPrefix("src/components/ui".to_string()), "UI Components"),
        ClassifierRule::new(PathPrefix("src/components".to_string()), "Components"),
        ClassifierRule::new(PathPrefix("src/lib".to_string()), "Libraries"),
        ClassifierRule::new(PathPrefix("src/domain".to_string()), "Domain"),
        ClassifierRule::new(PathPrefix("src/hooks".to_string()), "Hooks"),
        ClassifierRule::new(PathPrefix("src/stores".to_string()), "State Management"),
        ClassifierRule::new(PathPrefix("src/store".to_string()), "State Management"),
        ClassifierRule::new(PathPrefix("src/types".to_string()), "Types"),
        ClassifierRule::new(PathPrefix("src/utils".to_string()), "Utilities"),
        ClassifierRule::new(PathPrefix("src/styles".to_string()), "Styles"),
        ClassifierRule::new(PathPrefix("src/i18n".to_string()), "Localization"),
        ClassifierRule::new(PathPrefix("messages".to_string()), "Localization"),
        ClassifierRule::new(PathPrefix("prisma".to_string()), "Database"),
        ClassifierRule::new(PathPrefix("public".to_string()), "Static Assets"),
        ClassifierRule::new(NameContains("middleware".to_string()), "Middleware"),
        // Extension catch-alls
        ClassifierRule::new(Extension(".md".to_string()), "Documentation"),
        ClassifierRule::new(Extension(".css".to_string()), "Styles"),
        ClassifierRule::new(Extension(".scss".to_string()), "Styles"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(path: &str) -> String {
        FileClassifier::default().classify(path, "")
    }

    #[test]
    fn test_specific_prefix_wins_over_general() {
        assert_eq!(classify("src/app/api/users/route.ts"), "API");
        assert_eq!(classify("src/app/dashboard/page.tsx"), "App Router");
        assert_eq!(classify("src/components/ui/button.tsx"), "UI Components");
        assert_eq!(classify("src/components/navbar.tsx"), "Components");
    }

    #[test]
    fn test_prefix_respects_segment_boundary() {
        // `src/apps` must not be captured by the `src/app` rule
        assert_eq!(classify("src/apps/widget.ts"), "Miscellaneous");
    }

    #[test]
    fn test_root_special_files() {
        assert_eq!(classify("package.json"), "Package Management");
        assert_eq!(classify("pnpm-lock.yaml"), "Package Management");
        assert_eq!(classify("next.config.js"), "Configuration");
        assert_eq!(classify("tsconfig.json"), "Configuration");
        assert_eq!(classify("README.md"), "Documentation");
    }

    #[test]
    fn test_root_dotfile_with_json_content() {
        let classifier = FileClassifier::default();
        assert_eq!(classifier.classify(".babelrc", "{ \"presets\": [] }"), "Configuration");
        assert_eq!(classifier.classify(".babelrc", "not json"), "Miscellaneous");
    }

    #[test]
    fn test_nested_paths() {
        assert_eq!(classify("src/lib/util.ts"), "Libraries");
        assert_eq!(classify("src/domain/course.ts"), "Domain");
        assert_eq!(classify("src/stores/session.ts"), "State Management");
        assert_eq!(classify("prisma/schema.prisma"), "Database");
        assert_eq!(classify("src/middleware.ts"), "Middleware");
    }

    #[test]
    fn test_extension_catch_alls() {
        assert_eq!(classify("docs/guide.md"), "Documentation");
        assert_eq!(classify("src/theme/main.scss"), "Styles");
    }

    #[test]
    fn test_fallback() {
        assert_eq!(classify("scripts/deploy.ts"), "Miscellaneous");
    }
}

//! Recursive File Scanner
//!
//! Walks the configured root and produces the immutable
//! [`DirectoryStructure`] snapshot. The walk is failure-tolerant: an
//! unreadable directory or file is logged, recorded as a warning and
//! skipped, never aborting the scan. Only a missing root is a hard error.
//!
//! Directory entries are sorted before processing so the snapshot (and
//! everything derived from it, including layout positions) is identical
//! across runs on an unchanged tree. Per-file analysis fans out across a
//! thread pool inside each directory; results are collected in input
//! order, so the parallelism is invisible in the output.

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::classifier::FileClassifier;
use super::imports;
use crate::models::{DirectoryStructure, FileInfo};
use crate::{AnalyzerConfig, CancellationToken, Error, Result};

/// Scan result: the tree plus non-fatal problems encountered on the way
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub root: DirectoryStructure,
    pub warnings: Vec<String>,
}

/// Recursive directory scanner
#[derive(Debug, Clone)]
pub struct FileScanner {
    config: AnalyzerConfig,
    classifier: FileClassifier,
}

impl FileScanner {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            classifier: FileClassifier::default(),
        }
    }

    /// Scanner with a caller-supplied classification table.
    pub fn with_classifier(config: AnalyzerConfig, classifier: FileClassifier) -> Self {
        Self { config, classifier }
    }

    /// Scan the configured root.
    pub fn scan(&self) -> Result<ScanOutcome> {
        self.scan_with_token(None)
    }

    /// Scan with cooperative cancellation, checked between directories.
    pub fn scan_with_token(&self, token: Option<&CancellationToken>) -> Result<ScanOutcome> {
        self.config.validate()?;

        let root_name = self
            .config
            .root_path
            .file_name()
            .map_or_else(|| ".".to_string(), |n| n.to_string_lossy().into_owned());

        let mut warnings = Vec::new();
        let root = self
            .scan_directory(
                &self.config.root_path,
                root_name,
                String::new(),
                0,
                token,
                &mut warnings,
            )?
            .ok_or_else(|| {
                Error::Config(format!(
                    "cannot read root directory: {}",
                    self.config.root_path.display()
                ))
            })?;

        debug!(total_files = root.total_files, warnings = warnings.len(), "scan complete");
        Ok(ScanOutcome { root, warnings })
    }

    /// Scan one directory; `Ok(None)` means the directory was unreadable
    /// and has been recorded as a warning.
    fn scan_directory(
        &self,
        dir: &Path,
        name: String,
        rel: String,
        depth: usize,
        token: Option<&CancellationToken>,
        warnings: &mut Vec<String>,
    ) -> Result<Option<DirectoryStructure>> {
        if let Some(token) = token {
            if token.is_cancelled() {
                return Err(Error::Cancelled);
            }
        }

        let reader = match fs::read_dir(dir) {
            Ok(reader) => reader,
            Err(err) => {
                let message = format!("skipping unreadable directory {}: {err}", display_of(&rel));
                warn!("{message}");
                warnings.push(message);
                return Ok(None);
            }
        };

        let mut entries: Vec<(String, PathBuf, bool)> = Vec::new();
        for entry in reader {
            match entry {
                Ok(entry) => {
                    let entry_name = entry.file_name().to_string_lossy().into_owned();
                    let path = entry.path();
                    let is_dir = path.is_dir();
                    entries.push((entry_name, path, is_dir));
                }
                Err(err) => {
                    let message = format!("skipping unreadable entry in {}: {err}", display_of(&rel));
                    warn!("{message}");
                    warnings.push(message);
                }
            }
        }
        // Platform listing order is not stable; sort for reproducibility
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let candidates: Vec<(String, PathBuf, String)> = entries
            .iter()
            .filter(|(entry_name, _, is_dir)| !is_dir && self.should_analyze(entry_name))
            .map(|(entry_name, path, _)| {
                (entry_name.clone(), path.clone(), join_rel(&rel, entry_name))
            })
            .collect();

        let analyzed: Vec<std::result::Result<FileInfo, String>> = candidates
            .par_iter()
            .map(|(entry_name, path, file_rel)| self.analyze_file(entry_name, path, file_rel))
            .collect();

        let mut files = Vec::new();
        for outcome in analyzed {
            match outcome {
                Ok(file) => files.push(file),
                Err(message) => {
                    warn!("{message}");
                    warnings.push(message);
                }
            }
        }

        let mut subdirectories = Vec::new();
        for (entry_name, path, is_dir) in &entries {
            if !is_dir || self.is_excluded(entry_name) {
                continue;
            }
            if depth >= self.config.max_depth {
                debug!(directory = %entry_name, "depth bound reached, not descending");
                continue;
            }
            let child_rel = join_rel(&rel, entry_name);
            if let Some(child) = self.scan_directory(
                path,
                entry_name.clone(),
                child_rel,
                depth + 1,
                token,
                warnings,
            )? {
                subdirectories.push(child);
            }
        }

        Ok(Some(DirectoryStructure::new(name, rel, files, subdirectories)))
    }

    fn is_excluded(&self, name: &str) -> bool {
        self.config
            .exclude_prefixes
            .iter()
            .any(|prefix| name.starts_with(prefix.as_str()))
    }

    /// Extension allow-list, with a name override for config/package files.
    fn should_analyze(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        if lower.contains("config") || lower.contains("package") {
            return true;
        }
        self.config
            .allowed_extensions
            .iter()
            .any(|ext| lower.ends_with(ext.as_str()))
    }

    fn analyze_file(
        &self,
        name: &str,
        path: &Path,
        rel: &str,
    ) -> std::result::Result<FileInfo, String> {
        let bytes =
            fs::read(path).map_err(|err| format!("skipping unreadable file {rel}: {err}"))?;
        let content = String::from_utf8_lossy(&bytes);

        Ok(FileInfo {
            path: rel.to_string(),
            name: name.to_string(),
            extension: extension_of(name),
            size: bytes.len() as u64,
            category: self.classifier.classify(rel, &content),
            imports: imports::extract_imports(&content, &self.config.alias_prefix),
            exports: imports::extract_exports(&content),
        })
    }
}

fn join_rel(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}

fn extension_of(name: &str) -> String {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name[idx..].to_lowercase(),
        _ => String::new(),
    }
}

fn display_of(rel: &str) -> &str {
    if rel.is_empty() {
        "<root>"
    } else {
        rel
    }
}

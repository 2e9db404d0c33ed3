use anyhow::Result;
use ignore::WalkBuilder;
use log::{debug, trace, warn};
use rayon::prelude::*;
use regex::Regex;
use std::{
    fs,
    path::{Path, PathBuf},
};

use depwhy_core::{JS_TS_EXTENSIONS, NODE_MODULES};

use crate::{
    patterns::{UsagePatterns, build_patterns, parse_binding_list},
    types::ModuleUsage,
};

/// Scan the project's own sources for references to `module`.
///
/// Files are collected with gitignore rules applied and node_modules
/// skipped, then scanned in parallel. Results are sorted by file path so
/// output is deterministic.
pub fn find_usages(module: &str, project_root: &Path) -> Result<Vec<ModuleUsage>> {
    debug!("Scanning for usages of '{}' under {}", module, project_root.display());
    let patterns = build_patterns(module)?;

    let files = collect_source_files(project_root);
    debug!("Collected {} source files", files.len());

    let mut usages: Vec<ModuleUsage> = files
        .par_iter()
        .filter_map(|file| match scan_file(file, &patterns) {
            Ok(Some(mut usage)) => {
                usage.file = file
                    .strip_prefix(project_root)
                    .unwrap_or(file)
                    .to_string_lossy()
                    .to_string();
                Some(usage)
            }
            Ok(None) => None,
            Err(e) => {
                warn!("Error scanning {}: {}", file.display(), e);
                None
            }
        })
        .collect();

    usages.sort_by(|a, b| a.file.cmp(&b.file));
    debug!("Found usages of '{}' in {} files", module, usages.len());
    Ok(usages)
}

fn collect_source_files(root: &Path) -> Vec<PathBuf> {
    let walker = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .filter_entry(|entry| entry.file_name().to_str() != Some(NODE_MODULES))
        .build();

    let mut files = Vec::new();
    for entry in walker.filter_map(|e| e.ok()) {
        let p = entry.path();
        if !p.is_file() {
            continue;
        }

        if let Some(ext) = p.extension().and_then(|e| e.to_str())
            && JS_TS_EXTENSIONS.contains(&ext)
        {
            trace!("Collected source file: {}", p.display());
            files.push(p.to_path_buf());
        }
    }
    files
}

fn scan_file(path: &Path, patterns: &UsagePatterns) -> Result<Option<ModuleUsage>> {
    let src = fs::read_to_string(path)?;

    let mut lines: Vec<usize> = Vec::new();
    let mut bindings: Vec<String> = Vec::new();
    let mut context: Option<String> = None;

    for (idx, line) in src.lines().enumerate() {
        if patterns.references.iter().any(|re| re.is_match(line)) {
            trace!("Reference at {}:{}", path.display(), idx + 1);
            lines.push(idx + 1);
            if context.is_none() {
                context = Some(line.trim().to_string());
            }
            for re in &patterns.bindings {
                if let Some(caps) = re.captures(line)
                    && let Some(group) = caps.get(1)
                {
                    bindings.extend(parse_binding_list(group.as_str()));
                }
            }
        }
    }

    if lines.is_empty() {
        return Ok(None);
    }

    bindings.sort();
    bindings.dedup();

    let mut methods: Vec<String> = Vec::new();
    for binding in &bindings {
        let call = Regex::new(&format!(r"\b{}\s*\.\s*(\w+)\s*\(", regex::escape(binding)))?;
        for (idx, line) in src.lines().enumerate() {
            for caps in call.captures_iter(line) {
                methods.push(caps[1].to_string());
                lines.push(idx + 1);
            }
        }
    }

    lines.sort_unstable();
    lines.dedup();
    methods.sort();
    methods.dedup();

    Ok(Some(ModuleUsage { file: String::new(), lines, methods, context }))
}

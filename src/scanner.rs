//! File discovery: walk the include roots and keep JavaScript sources.

use std::path::Path;

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

const JS_EXTENSIONS: &[&str] = &["js", "mjs", "cjs"];

/// Walk `roots` and collect JavaScript files, minus glob-ignored paths.
/// `node_modules` directories are always skipped. The result is sorted for
/// deterministic reporting.
pub fn scan_files(roots: &[String], ignore_patterns: &[String], verbose: bool) -> Vec<String> {
    let patterns: Vec<Pattern> = ignore_patterns
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
                None
            }
        })
        .collect();

    let mut files: Vec<String> = Vec::new();
    for root in roots {
        let root_path = Path::new(root);
        if root_path.is_file() {
            // Explicit file arguments bypass the extension filter, but the
            // configured ignores still apply.
            if !patterns.iter().any(|p| p.matches_path(root_path)) {
                files.push(root.clone());
            }
            continue;
        }
        for entry in WalkDir::new(root_path)
            .into_iter()
            .filter_entry(|e| e.file_name() != "node_modules")
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if !has_js_extension(path) {
                continue;
            }
            if patterns.iter().any(|p| p.matches_path(path)) {
                continue;
            }
            files.push(path.to_string_lossy().to_string());
        }
    }

    files.sort();
    files.dedup();
    files
}

fn has_js_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| JS_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn finds_js_files_and_skips_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::create_dir_all(dir.path().join("vendor")).unwrap();
        fs::write(dir.path().join("src/app.js"), "").unwrap();
        fs::write(dir.path().join("src/readme.md"), "").unwrap();
        fs::write(dir.path().join("vendor/lib.js"), "").unwrap();

        let root = dir.path().to_string_lossy().to_string();
        let files = scan_files(&[root], &["**/vendor/**".to_string()], false);

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("app.js"));
    }

    #[test]
    fn explicit_file_arguments_respect_ignores() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("vendor")).unwrap();
        fs::write(dir.path().join("vendor/lib.js"), "").unwrap();

        let file = dir
            .path()
            .join("vendor/lib.js")
            .to_string_lossy()
            .to_string();
        assert!(scan_files(&[file], &["**/vendor/**".to_string()], false).is_empty());
    }

    #[test]
    fn skips_node_modules() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("node_modules/pkg")).unwrap();
        fs::write(dir.path().join("node_modules/pkg/index.js"), "").unwrap();

        let root = dir.path().to_string_lossy().to_string();
        assert!(scan_files(&[root], &[], false).is_empty());
    }
}

pub mod check;
pub mod fix;
pub mod init;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use rayon::prelude::*;
use swc_common::SourceMap;

use super::args::CommonArgs;
use crate::analyzer::{FileAnalysis, analyze_file};
use crate::config::Config;
use crate::scanner::scan_files;

/// Scan and analyze everything a command should look at. CLI path arguments
/// override the config's includes; ignores always apply.
pub(crate) fn analyze_paths(common: &CommonArgs) -> Result<Vec<FileAnalysis>> {
    let config = Config::load(Path::new("."))?;

    let roots: Vec<String> = if common.paths.is_empty() {
        config.includes.clone()
    } else {
        common
            .paths
            .iter()
            .map(|p| p.to_string_lossy().to_string())
            .collect()
    };

    let files = scan_files(&roots, &config.ignores, common.verbose);
    let source_map = Arc::new(SourceMap::default());

    // Each file is independent; the converter carries no cross-call state.
    Ok(files
        .par_iter()
        .map(|file| analyze_file(file, source_map.clone()))
        .collect())
}

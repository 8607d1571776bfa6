//! Orchestration for a fix run: read, rewrite and overwrite each target in
//! order while printing progress.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use crate::core::fixes::{BANNER, BUG_11_FIXES, FOLLOW_UP, Fix, SUMMARY};
use crate::io::config::{CONFIG_FILE_NAME, TargetPaths, load_config};
use crate::io::source_file::{read_source, write_source};

/// What one fix did to its target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixReport {
    pub id: &'static str,
    pub path: PathBuf,
    /// Zero for a no-op substitution; the file was still rewritten.
    pub matches: usize,
}

/// Apply a single fix to `path`.
///
/// The file is overwritten even when nothing matched.
pub fn apply_fix(fix: &Fix, path: &Path) -> Result<FixReport> {
    let content = read_source(path)?;
    let rewritten = fix
        .rewrite
        .apply(&content)
        .with_context(|| format!("{} on {}", fix.id, path.display()))?;
    write_source(path, &rewritten.content)?;

    if rewritten.matches == 0 {
        info!(fix = fix.id, path = %path.display(), "pattern not found, file unchanged");
    } else {
        debug!(fix = fix.id, path = %path.display(), matches = rewritten.matches, "rewrote");
    }

    Ok(FixReport {
        id: fix.id,
        path: path.to_path_buf(),
        matches: rewritten.matches,
    })
}

/// Run every Bug #11 fix in order against `targets`, printing progress to `out`.
///
/// Stops at the first I/O error; fixes already written stay written.
pub fn apply_fixes<W: Write>(targets: &TargetPaths, out: &mut W) -> Result<Vec<FixReport>> {
    writeln!(out, "{BANNER}").context("write progress")?;

    let mut reports = Vec::with_capacity(BUG_11_FIXES.len());
    for fix in &BUG_11_FIXES {
        writeln!(out, "{}", fix.start_line()).context("write progress")?;
        let report = apply_fix(fix, targets.path_for(fix.target))?;
        writeln!(out, "{}", fix.complete_line()).context("write progress")?;
        reports.push(report);
    }

    writeln!(out, "\n{SUMMARY}").context("write progress")?;
    writeln!(out, "{FOLLOW_UP}").context("write progress")?;
    Ok(reports)
}

/// Load config for `root` and run the fixes.
///
/// `config_path` defaults to `authfix.toml` under `root`, where a missing file
/// means default target paths. An explicit `config_path` must exist.
pub fn apply_in_root<W: Write>(
    root: &Path,
    config_path: Option<&Path>,
    out: &mut W,
) -> Result<Vec<FixReport>> {
    let config_path = match config_path {
        Some(path) => {
            if !path.exists() {
                bail!("config file {} not found", path.display());
            }
            path.to_path_buf()
        }
        None => root.join(CONFIG_FILE_NAME),
    };
    let cfg = load_config(&config_path).context("load config")?;
    let targets = cfg.resolve(root);
    debug!(
        server_routes = %targets.server_routes.display(),
        client_api = %targets.client_api.display(),
        "resolved targets"
    );
    apply_fixes(&targets, out)
}

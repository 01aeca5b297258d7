//! JSON record of one CLI evaluation, as written by `--out`.
//!
//! The record carries the answer together with what produced it: the
//! operation, its inputs, and the library build.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Library build that produced a record.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Build {
    pub version: &'static str,
    pub code_rev: &'static str,
}

impl Build {
    /// `code_rev` is the compile-time `GIT_COMMIT`, or `"unknown"`.
    pub fn current() -> Self {
        Self {
            version: planar_area::VERSION,
            code_rev: option_env!("GIT_COMMIT")
                .filter(|rev| !rev.is_empty())
                .unwrap_or("unknown"),
        }
    }
}

/// One evaluated operation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Record {
    pub op: &'static str,
    pub inputs: Value,
    pub value: Value,
    pub build: Build,
}

/// Write `record` as pretty JSON to `out`, creating parent directories.
pub fn write_record(out: &Path, record: &Record) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(record)?)
        .with_context(|| format!("writing {}", out.display()))
}

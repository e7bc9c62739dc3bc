/*
 * Copyright (c) 2021 Works Applications Co., Ltd.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, CoreError, CoreResult};

/// No cutoff at all: every clause survives regardless of `maxcost`.
///
/// Mirrors the reference implementation's `NOCUTOFF`, used by dictionary-side
/// disjunct counting where no sentence-level budget applies yet.
pub const NO_CUTOFF: i32 = i32::MAX;

/// Tunables owned by the disjunct/matcher core itself.
///
/// There is no dictionary path to configure here (the dictionary is an
/// external collaborator, see spec §1) -- this only covers knobs the core
/// reads directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Clauses with `maxcost` above this are dropped during disjunct
    /// building (spec §4.D). `NO_CUTOFF` disables pruning entirely.
    pub cost_cutoff: i32,

    /// Floor applied to fast-matcher table sizes after rounding up to a
    /// power of two (spec §4.F sizes tables to the disjunct count; a
    /// floor avoids repeatedly reallocating degenerate size-1 tables
    /// when a sentence is re-matched many times).
    pub min_table_size: usize,

    /// `tracing` verbosity the caller wants for this crate's own events
    /// (spec §4.H/§4.I). Not read by this crate's own `tracing::debug!`
    /// calls -- those are filtered the normal `tracing-subscriber` way --
    /// but carried here so a caller's config file can drive the
    /// subscriber's level without a second config surface.
    pub trace_verbosity: TraceVerbosity,
}

/// A small, serde-friendly stand-in for a `tracing::Level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceVerbosity {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            cost_cutoff: NO_CUTOFF,
            min_table_size: 1,
            trace_verbosity: TraceVerbosity::Info,
        }
    }
}

/// Struct corresponding to the raw config JSON file.
///
/// All fields are optional; absent fields fall back to [`BuildConfig::default`].
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawConfig {
    cost_cutoff: Option<i64>,
    min_table_size: Option<usize>,
    trace_verbosity: Option<TraceVerbosity>,
}

impl BuildConfig {
    /// Builds a config from parsed JSON, validating fields that the
    /// `serde` deserialization alone can't rule out (e.g. a negative cutoff).
    pub fn from_raw(raw: RawConfig) -> Result<BuildConfig, ConfigError> {
        let mut config = BuildConfig::default();
        if let Some(cutoff) = raw.cost_cutoff {
            if cutoff < 0 {
                return Err(ConfigError::NegativeCutoff(cutoff));
            }
            config.cost_cutoff = cutoff.min(NO_CUTOFF as i64) as i32;
        }
        if let Some(size) = raw.min_table_size {
            config.min_table_size = size;
        }
        if let Some(verbosity) = raw.trace_verbosity {
            config.trace_verbosity = verbosity;
        }
        Ok(config)
    }

    /// Parses a config directly from a JSON string.
    pub fn from_json(text: &str) -> Result<BuildConfig, ConfigError> {
        let raw: RawConfig = serde_json::from_str(text)?;
        BuildConfig::from_raw(raw)
    }

    /// Reads and parses a config file from disk, tagging any I/O or
    /// parse failure with the path that caused it.
    ///
    /// This is the crate's one real `CoreError` boundary: `from_json`
    /// surfaces a bare [`ConfigError`], which is promoted to a
    /// [`CoreError::Config`] and given path context via
    /// [`CoreError::with_context`] so a caller juggling several config
    /// files can tell which one failed.
    pub fn from_file(path: &Path) -> CoreResult<BuildConfig> {
        let text = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)
            .map_err(CoreError::from)
            .map_err(|e| e.with_context(format!("reading build config from {}", path.display())))?;

        BuildConfig::from_json(&text)
            .map_err(CoreError::from)
            .map_err(|e| e.with_context(format!("parsing build config from {}", path.display())))
    }
}

/*
 *  Copyright (c) 2021 Works Applications Co., Ltd.
 *
 *  Licensed under the Apache License, Version 2.0 (the "License");
 *  you may not use this file except in compliance with the License.
 *  You may obtain a copy of the License at
 *
 *      http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *  distributed under the License is distributed on an "AS IS" BASIS,
 *  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *  See the License for the specific language governing permissions and
 *  limitations under the License.
 */

use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

/// Crate-wide error type.
///
/// Clause/disjunct construction and matching are otherwise infallible
/// (the cost cutoff silently drops clauses rather than erroring, per
/// design) so this enum stays small: it exists for the boundary cases
/// where an external collaborator (a dictionary, a config file) hands
/// the core something it cannot make sense of.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CoreError {
    #[error("{context}: {cause}")]
    WithContext {
        context: String,
        cause: Box<CoreError>,
    },

    /// [`crate::sentence::build_sentence_disjuncts`] expects every word in
    /// the sentence to resolve to at least one dictionary entry; this is
    /// returned for the first one that doesn't, so the caller can discard
    /// the sentence rather than silently parsing it with a gap.
    #[error("no dictionary entries for word {0:?}")]
    NoEntriesForWord(String),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl CoreError {
    pub fn with_context<S: Into<String>>(self, ctx: S) -> Self {
        match self {
            CoreError::WithContext { cause, .. } => CoreError::WithContext {
                cause,
                context: ctx.into(),
            },
            cause => CoreError::WithContext {
                cause: Box::new(cause),
                context: ctx.into(),
            },
        }
    }
}

/// Errors specific to loading a [`crate::config::BuildConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config JSON: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("cost cutoff must be non-negative, got {0}")]
    NegativeCutoff(i64),
}

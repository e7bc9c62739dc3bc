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

//! Disjunct construction and fast-matching core for a link-grammar-style
//! parser.
//!
//! Given a sentence whose words have each been looked up in a grammar
//! dictionary (an external collaborator, see [`sentence::DictionarySource`]),
//! this crate expands each word's dictionary expression into disjuncts
//! ([`clause`], [`disjunct`]) and builds the per-word hash indexes
//! ([`matcher`]) a downstream parser queries to find matching disjuncts
//! on neighboring words.
//!
//! There is no public API stability guarantee for this release.

pub mod clause;
pub mod config;
pub mod disjunct;
pub mod error;
pub mod expr;
pub mod matcher;
pub mod sentence;
pub mod string_set;
pub(crate) mod util;

pub mod prelude {
    pub use crate::{
        clause::{build_clauses, Clause},
        config::{BuildConfig, NO_CUTOFF},
        disjunct::{build_disjunct, Connector, Disjunct},
        error::{CoreError, CoreResult},
        expr::{exp_compare, exp_contains, word_contains, Expression},
        matcher::{MatchNode, Matcher},
        sentence::{build_sentence_disjuncts, DictionaryEntry, DictionarySource, Sentence, Word},
        string_set::{Interned, StringSet},
    };
}

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

//! Binds per-word dictionary alternatives into the sentence-wide disjunct
//! lists the fast matcher indexes (spec §4.E). The dictionary itself is an
//! external collaborator (spec §1); this module only needs a narrow trait
//! to pull entries out of one, so tests can exercise the core against a
//! trivial in-memory stub.

use tracing::debug;

use crate::clause::build_clauses;
use crate::disjunct::{build_disjunct, Disjunct};
use crate::error::{CoreError, CoreResult};
use crate::expr::Expression;
use crate::string_set::Interned;

/// One dictionary sense of a surface form: its print name and the
/// expression tree governing how it may attach.
#[derive(Clone, Debug)]
pub struct DictionaryEntry {
    pub print_name: Interned,
    pub expression: Expression,
}

impl DictionaryEntry {
    pub fn new(print_name: Interned, expression: Expression) -> DictionaryEntry {
        DictionaryEntry {
            print_name,
            expression,
        }
    }
}

/// Narrow dictionary-lookup contract the core needs. A real dictionary
/// (tree of entries keyed by spelling, morphological analysis, ...) is out
/// of scope (spec §1); this trait is the seam a caller plugs one into.
pub trait DictionarySource {
    /// All dictionary senses applicable to one surface-form word, already
    /// deep-copied so the caller may build/prune without touching the
    /// dictionary's own trees (spec §3 "Lifecycles").
    fn lookup(&self, word: &str) -> Vec<DictionaryEntry>;
}

/// One sentence position: its surface form and the disjunct list built
/// from its dictionary alternatives.
#[derive(Clone, Debug)]
pub struct Word {
    pub surface: String,
    pub disjuncts: Vec<Disjunct>,
}

impl Word {
    pub fn new(surface: impl Into<String>) -> Word {
        Word {
            surface: surface.into(),
            disjuncts: Vec::new(),
        }
    }
}

/// A sequence of [`Word`]s, each to be populated with a disjunct list by
/// [`build_sentence_disjuncts`].
#[derive(Clone, Debug, Default)]
pub struct Sentence {
    pub words: Vec<Word>,
}

impl Sentence {
    pub fn new(surfaces: impl IntoIterator<Item = impl Into<String>>) -> Sentence {
        Sentence {
            words: surfaces.into_iter().map(Word::new).collect(),
        }
    }
}

/// Populates every word's disjunct list from its dictionary alternatives
/// (spec §4.E / §6 `buildSentenceDisjuncts`).
///
/// For each word, every alternative expression is independently expanded
/// into clauses, split into disjuncts, and concatenated order-preserving
/// onto the word's list -- so disjunct order reflects alternative order ×
/// clause emission order × positional side-split (spec §5 "Ordering
/// guarantees").
///
/// A sentence is only ever built once before parsing (spec §5), so a word
/// the dictionary has nothing for is a fatal condition for that sentence,
/// not a silently-empty disjunct list: this returns
/// [`CoreError::NoEntriesForWord`] for the first such word, leaving it to
/// the caller to discard the sentence (spec §7).
pub fn build_sentence_disjuncts(
    sentence: &mut Sentence,
    dictionary: &dyn DictionarySource,
    cost_cutoff: i32,
) -> CoreResult<()> {
    for word in sentence.words.iter_mut() {
        let entries = dictionary.lookup(&word.surface);
        if entries.is_empty() {
            return Err(CoreError::NoEntriesForWord(word.surface.clone()));
        }
        for entry in &entries {
            let clauses = build_clauses(&entry.expression);
            let mut built = build_disjunct(&clauses, entry.print_name.clone(), cost_cutoff);
            word.disjuncts.append(&mut built);
        }
        debug!(
            word = %word.surface,
            alternatives = entries.len(),
            disjuncts = word.disjuncts.len(),
            "built word disjuncts"
        );
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::expr::Direction;
    use crate::string_set::StringSet;
    use claim::assert_matches;
    use std::cell::RefCell;
    use std::collections::HashMap;

    struct StubDictionary {
        set: RefCell<StringSet>,
        entries: HashMap<String, Vec<(String, Expression)>>,
    }

    impl DictionarySource for StubDictionary {
        fn lookup(&self, word: &str) -> Vec<DictionaryEntry> {
            let mut set = self.set.borrow_mut();
            self.entries
                .get(word)
                .into_iter()
                .flatten()
                .map(|(name, expr)| DictionaryEntry::new(set.add(name), expr.deep_copy()))
                .collect()
        }
    }

    /// Two alternatives for the same word concatenate their disjuncts in
    /// alternative order.
    #[test]
    fn concatenates_alternatives_in_order() {
        let mut set = StringSet::new();
        let first = Expression::connector(set.add("A"), false, Direction::Plus, 0);
        let second = Expression::connector(set.add("B"), false, Direction::Plus, 0);

        let mut entries = HashMap::new();
        entries.insert(
            "run".to_string(),
            vec![
                ("run.v".to_string(), first),
                ("run.n".to_string(), second),
            ],
        );
        let dict = StubDictionary {
            set: RefCell::new(set),
            entries,
        };

        let mut sentence = Sentence::new(vec!["run"]);
        build_sentence_disjuncts(&mut sentence, &dict, i32::MAX).unwrap();

        assert_eq!(2, sentence.words[0].disjuncts.len());
        assert_eq!(
            "run.v",
            sentence.words[0].disjuncts[0].string.as_ref()
        );
        assert_eq!(
            "run.n",
            sentence.words[0].disjuncts[1].string.as_ref()
        );
    }

    #[test]
    fn unknown_word_is_an_error() {
        let dict = StubDictionary {
            set: RefCell::new(StringSet::new()),
            entries: HashMap::new(),
        };
        let mut sentence = Sentence::new(vec!["mystery"]);
        let result = build_sentence_disjuncts(&mut sentence, &dict, i32::MAX);
        assert_matches!(result, Err(CoreError::NoEntriesForWord(ref w)) if w == "mystery");
    }
}

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

//! Two per-word hash tables (left, right) over a word's disjuncts, and
//! the merged, duplicate-free query the parser runs against them
//! (spec §4.F). This is the crate's hot path: everything here is built
//! once per sentence and then queried many times.

pub mod hash;

use tracing::debug;

use crate::disjunct::{Connector, Disjunct, Label};
use crate::sentence::Sentence;
use crate::util::pow2::next_power_of_two_up;

/// A node in a query result list. Mirrors the reference implementation's
/// `MatchNode`; `disjunct` indexes into the owning word's `Vec<Disjunct>`
/// rather than pointing at it directly.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct MatchNode {
    pub disjunct: usize,
}

/// A power-of-two-sized array of sorted buckets of disjunct indices.
struct MatchTable {
    size: usize,
    buckets: Vec<Vec<usize>>,
}

impl MatchTable {
    fn build(disjuncts: &[Disjunct], min_size: usize, side: Side) -> MatchTable {
        let count = disjuncts.iter().filter(|d| !side.list(d).is_empty()).count();
        let size = next_power_of_two_up(count.max(min_size));
        let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); size];

        for (i, d) in disjuncts.iter().enumerate() {
            if let Some(first) = side.list(d).first() {
                let h = hash::hash(first.label, &first.string);
                let b = hash::bucket_index(h, size);
                buckets[b].push(i);
            }
        }

        for bucket in buckets.iter_mut() {
            match side {
                // right buckets: ascending by target word.
                Side::Right => bucket.sort_by_key(|&i| side.list(&disjuncts[i])[0].word),
                // left buckets: descending by target word.
                Side::Left => {
                    bucket.sort_by_key(|&i| std::cmp::Reverse(side.list(&disjuncts[i])[0].word))
                }
            }
        }

        MatchTable { size, buckets }
    }

    fn bucket_for(&self, label: Label, string: &str) -> &[usize] {
        let h = hash::hash(label, string);
        let b = hash::bucket_index(h, self.size);
        &self.buckets[b]
    }
}

#[derive(Copy, Clone)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn list<'a>(self, d: &'a Disjunct) -> &'a [Connector] {
        match self {
            Side::Left => &d.left,
            Side::Right => &d.right,
        }
    }
}

struct WordTables {
    left: MatchTable,
    right: MatchTable,
}

/// Owns every per-word match table for one sentence, plus the pool of
/// reusable [`MatchNode`]s returned by [`Matcher::put_match_list`].
///
/// The reference implementation keeps this as process-wide global state
/// (static table-size arrays, a static free list); here it is ordinary
/// owned state on a value scoped to one sentence parse (spec §9 "Global
/// mutable state").
pub struct Matcher {
    tables: Vec<WordTables>,
    free_list: Vec<MatchNode>,
}

impl Matcher {
    /// Builds left/right tables for every word in `sentence`
    /// (`initFastMatcher`, spec §6). `min_table_size` comes from
    /// [`crate::config::BuildConfig`].
    pub fn build(sentence: &Sentence, min_table_size: usize) -> Matcher {
        let tables: Vec<WordTables> = sentence
            .words
            .iter()
            .map(|word| {
                let left = MatchTable::build(&word.disjuncts, min_table_size, Side::Left);
                let right = MatchTable::build(&word.disjuncts, min_table_size, Side::Right);
                debug!(
                    word = %word.surface,
                    left_size = left.size,
                    right_size = right.size,
                    "built match tables"
                );
                WordTables { left, right }
            })
            .collect();

        Matcher {
            tables,
            free_list: Vec::new(),
        }
    }

    fn get_node(&mut self, disjunct: usize) -> MatchNode {
        match self.free_list.pop() {
            Some(mut node) => {
                node.disjunct = disjunct;
                node
            }
            None => MatchNode { disjunct },
        }
    }

    /// Returns match nodes to the free-list pool (`putMatchList`, spec
    /// §4.F / §6). Not required for memory safety in Rust -- `MatchNode`
    /// has no destructor-visible resource -- but kept to mirror the
    /// reference implementation's allocation discipline on the hot path.
    pub fn put_match_list(&mut self, list: Vec<MatchNode>) {
        self.free_list.extend(list);
    }

    /// The hot query (`formMatchList`, spec §4.F / §6): merges the
    /// left-table bucket for `lc` and the right-table bucket for `rc`
    /// into one duplicate-free list, each truncated at its positional
    /// cutoff.
    ///
    /// `disjuncts` must be the same word's disjunct slice the tables for
    /// word `w` were built from -- bucket entries are indices into it.
    pub fn form_match_list(
        &mut self,
        w: usize,
        disjuncts: &[Disjunct],
        lc: Option<(Label, &str)>,
        lw: usize,
        rc: Option<(Label, &str)>,
        rw: usize,
    ) -> Vec<MatchNode> {
        let tables = &self.tables[w];

        let ml: Vec<usize> = lc
            .map(|(label, string)| {
                tables
                    .left
                    .bucket_for(label, string)
                    .iter()
                    .copied()
                    .take_while(|&i| disjuncts[i].left[0].word >= lw)
                    .collect()
            })
            .unwrap_or_default();

        let mr: Vec<usize> = rc
            .map(|(label, string)| {
                tables
                    .right
                    .bucket_for(label, string)
                    .iter()
                    .copied()
                    .take_while(|&i| disjuncts[i].right[0].word <= rw)
                    .collect()
            })
            .unwrap_or_default();

        // O(|ml|*|mr|) duplicate elimination: accepted per spec §4.F,
        // bucket sizes after positional-cutoff truncation are small.
        let mr_unique: Vec<usize> = mr.into_iter().filter(|i| !ml.contains(i)).collect();

        let mut result = Vec::with_capacity(mr_unique.len() + ml.len());
        for i in mr_unique {
            result.push(self.get_node(i));
        }
        for i in ml {
            result.push(self.get_node(i));
        }
        result
    }

    /// Resets all tables and the free-list pool, mirroring the reference
    /// implementation's `free_fast_matcher`/`init_fast_matcher` pairing
    /// for reuse across sentences within one process.
    pub fn clear(&mut self) {
        self.tables.clear();
        self.free_list.clear();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::disjunct::{Priority, UNLIMITED_LENGTH};
    use crate::sentence::Word;
    use crate::string_set::StringSet;

    fn connector(set: &mut StringSet, s: &str, word: usize) -> Connector {
        Connector {
            string: set.add(s),
            multi: false,
            label: Label::Normal,
            priority: Priority::Thin,
            word,
            length_limit: UNLIMITED_LENGTH,
        }
    }

    fn disjunct_with_right(set: &mut StringSet, name: &str, right_word: usize) -> Disjunct {
        Disjunct {
            left: Vec::new(),
            right: vec![connector(set, "A", right_word)],
            string: set.add(name),
            cost: 0,
        }
    }

    fn sentence_with_disjuncts(disjuncts: Vec<Disjunct>) -> Sentence {
        let mut word = Word::new("w");
        word.disjuncts = disjuncts;
        Sentence { words: vec![word] }
    }

    /// S6: a right-table bucket with first-right positions [2,4,6,8],
    /// queried with rw=5, yields exactly the entries at 2 and 4.
    #[test]
    fn query_breaks_at_positional_cutoff() {
        let mut set = StringSet::new();
        let disjuncts = vec![
            disjunct_with_right(&mut set, "d2", 2),
            disjunct_with_right(&mut set, "d4", 4),
            disjunct_with_right(&mut set, "d6", 6),
            disjunct_with_right(&mut set, "d8", 8),
        ];
        let sentence = sentence_with_disjuncts(disjuncts.clone());
        let mut matcher = Matcher::build(&sentence, 1);

        let result = matcher.form_match_list(0, &disjuncts, None, 0, Some((Label::Normal, "A")), 5);
        let kept: Vec<&str> = result
            .iter()
            .map(|n| disjuncts[n.disjunct].string.as_ref())
            .collect();
        assert_eq!(vec!["d2", "d4"], kept);
    }

    /// Invariant 5: right buckets are non-decreasing by target word;
    /// left buckets are non-increasing.
    #[test]
    fn bucket_order_matches_side_convention() {
        let mut set = StringSet::new();
        let disjuncts = vec![
            disjunct_with_right(&mut set, "d6", 6),
            disjunct_with_right(&mut set, "d2", 2),
            disjunct_with_right(&mut set, "d4", 4),
        ];
        let table = MatchTable::build(&disjuncts, 1, Side::Right);
        for bucket in &table.buckets {
            let words: Vec<usize> = bucket.iter().map(|&i| disjuncts[i].right[0].word).collect();
            let mut sorted = words.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, words);
        }
    }

    /// Invariant 6: a disjunct whose first connector hashes identically
    /// on both sides (degenerate here: both lc/rc resolve to the same
    /// bucket) never appears twice in the merged result.
    #[test]
    fn query_result_has_no_duplicate_disjuncts() {
        let mut set = StringSet::new();
        let s = set.add("A");
        let d = Disjunct {
            left: vec![connector(&mut set, "A", 0)],
            right: vec![connector(&mut set, "A", 3)],
            string: s,
            cost: 0,
        };
        let disjuncts = vec![d];
        let sentence = sentence_with_disjuncts(disjuncts.clone());
        let mut matcher = Matcher::build(&sentence, 1);

        let result = matcher.form_match_list(
            0,
            &disjuncts,
            Some((Label::Normal, "A")),
            0,
            Some((Label::Normal, "A")),
            10,
        );
        assert_eq!(1, result.len());
    }

    #[test]
    fn put_match_list_recycles_nodes() {
        let mut set = StringSet::new();
        let disjuncts = vec![disjunct_with_right(&mut set, "d2", 2)];
        let sentence = sentence_with_disjuncts(disjuncts.clone());
        let mut matcher = Matcher::build(&sentence, 1);

        let first = matcher.form_match_list(0, &disjuncts, None, 0, Some((Label::Normal, "A")), 5);
        matcher.put_match_list(first);
        assert_eq!(1, matcher.free_list.len());

        let second = matcher.form_match_list(0, &disjuncts, None, 0, Some((Label::Normal, "A")), 5);
        assert_eq!(1, second.len());
        assert!(matcher.free_list.is_empty());
    }

    #[test]
    fn zero_disjunct_table_still_has_size_one() {
        let table = MatchTable::build(&[], 1, Side::Left);
        assert_eq!(1, table.size);
    }
}

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

//! Splits clauses into the final [`Disjunct`]s the parser and fast
//! matcher consume: one ordered list of left (`-`) connectors, one of
//! right (`+`) connectors, filtered by the sentence's cost cutoff.

use tracing::debug;

use crate::clause::Clause;
use crate::expr::Direction;
use crate::string_set::Interned;

/// Reserves room for the parser's "fat link" matching semantics. The
/// core only ever produces `Normal`/`Thin`; richer labels/priorities are
/// assigned downstream.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Label {
    Normal,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Priority {
    Thin,
}

/// No length restriction on the link this connector may form.
pub const UNLIMITED_LENGTH: i32 = -1;

/// One directed connector on a built disjunct.
///
/// `word` starts at 0 for every freshly built connector (spec §9 open
/// question): the core never reads it back, only the owning parser
/// writes and later overwrites it with the sentence position being
/// explored.
#[derive(Clone, Debug)]
pub struct Connector {
    pub string: Interned,
    pub multi: bool,
    pub label: Label,
    pub priority: Priority,
    pub word: usize,
    pub length_limit: i32,
}

impl Connector {
    fn from_clause_side(string: Interned, multi: bool) -> Connector {
        Connector {
            string,
            multi,
            label: Label::Normal,
            priority: Priority::Thin,
            word: 0,
            length_limit: UNLIMITED_LENGTH,
        }
    }
}

/// One atomic way a word can attach: a pair of ordered connector lists.
#[derive(Clone, Debug)]
pub struct Disjunct {
    pub left: Vec<Connector>,
    pub right: Vec<Connector>,
    pub string: Interned,
    pub cost: i32,
}

/// Splits a clause's connectors into positional left/right `Connector`
/// lists.
///
/// Grounded in the reference implementation's `extract_connectors` +
/// `reverse`: connectors are filtered by `dir` in the clause's original
/// (left-to-right) order, then that filtered list is reversed. The net
/// effect is that the side closest to the word ends up first -- the
/// order the parser consumes connectors in, working outward from the
/// word.
fn side_connectors(clause: &Clause, dir: Direction) -> Vec<Connector> {
    let mut side: Vec<Connector> = clause
        .connectors
        .iter()
        .filter(|c| c.dir == dir)
        .map(|c| Connector::from_clause_side(c.string.clone(), c.multi))
        .collect();
    side.reverse();
    side
}

/// Builds the disjunct list for one word's single dictionary expression.
///
/// Clauses whose `maxcost` exceeds `cutoff` are silently dropped (spec
/// §4.D) -- this is not an error condition.
pub fn build_disjunct(clauses: &[Clause], word_string: Interned, cutoff: i32) -> Vec<Disjunct> {
    let mut dropped = 0usize;
    let disjuncts: Vec<Disjunct> = clauses
        .iter()
        .filter(|c| {
            let keep = c.maxcost <= cutoff;
            if !keep {
                dropped += 1;
            }
            keep
        })
        .map(|clause| Disjunct {
            left: side_connectors(clause, Direction::Minus),
            right: side_connectors(clause, Direction::Plus),
            string: word_string.clone(),
            cost: clause.cost,
        })
        .collect();

    if dropped > 0 {
        debug!(dropped, cutoff, "clauses dropped by cost cutoff");
    }
    disjuncts
}

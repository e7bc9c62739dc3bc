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

//! Expands an [`Expression`] tree into the sum-of-products "clauses" that
//! [`crate::disjunct`] later splits into left/right connector lists.
//!
//! This is the combinatorial heart of the crate (spec §4.C): `Or` unions
//! the clause sets of its children, `And` takes their Cartesian product.
//! Cost accounting keeps two numbers per clause -- `cost`, the sum of
//! every node cost along the chosen path, and `maxcost`, which is *also*
//! accumulated additively at each node's own cost but combined with a
//! true `max` (not a sum) across AND siblings. Both halves are load
//! bearing: see the `and_combines_maxcost_with_max_not_sum` test below,
//! which is the scenario where the two possible readings diverge.

use itertools::Itertools;

use crate::expr::{Direction, Expression};
use crate::string_set::Interned;

/// A single directed connector inside a clause, in source left-to-right
/// order relative to its siblings.
#[derive(Clone, Debug)]
pub struct TConnector {
    pub string: Interned,
    pub multi: bool,
    pub dir: Direction,
}

/// One conjunction of directed connectors: a candidate disjunct before
/// being split by side and filtered by cost.
#[derive(Clone, Debug)]
pub struct Clause {
    pub connectors: Vec<TConnector>,
    pub cost: i32,
    pub maxcost: i32,
}

impl Clause {
    fn leaf(c: TConnector) -> Clause {
        Clause {
            connectors: vec![c],
            cost: 0,
            maxcost: 0,
        }
    }
}

/// Expands `expression` into its sum-of-products clause list.
///
/// The reference implementation's `build_clause` takes a `cost_cutoff`
/// parameter but never reads it in the function body -- pruning happens
/// only later, in `build_disjunct` (spec §4.D). This port drops the
/// unused parameter rather than carrying dead state through the recursion.
pub fn build_clauses(expression: &Expression) -> Vec<Clause> {
    let mut clauses = match expression {
        Expression::Connector(c) => vec![Clause::leaf(TConnector {
            string: c.string.clone(),
            multi: c.multi,
            dir: c.dir,
        })],

        Expression::Or { children, .. } => children
            .iter()
            .flat_map(build_clauses)
            .collect::<Vec<_>>(),

        Expression::And { children, .. } => and_product(children),
    };

    let node_cost = expression.cost();
    for clause in clauses.iter_mut() {
        clause.cost += node_cost;
        clause.maxcost += node_cost;
    }
    clauses
}

/// Cartesian product across an AND node's children's clause sets.
///
/// `maxcost` is combined with `max`, not `+=`, across the product's
/// factors -- the node's own cost is folded in additively afterward by
/// the caller, uniformly for every node shape.
fn and_product(children: &[Expression]) -> Vec<Clause> {
    if children.is_empty() {
        return vec![Clause {
            connectors: Vec::new(),
            cost: 0,
            maxcost: 0,
        }];
    }

    children
        .iter()
        .map(build_clauses)
        .multi_cartesian_product()
        .map(|combo| {
            let mut connectors = Vec::new();
            let mut cost = 0;
            let mut maxcost = 0;
            for clause in &combo {
                connectors.extend(clause.connectors.iter().cloned());
                cost += clause.cost;
                maxcost = maxcost.max(clause.maxcost);
            }
            Clause {
                connectors,
                cost,
                maxcost,
            }
        })
        .collect()
}

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

//! The dictionary-facing expression tree: an immutable boolean expression
//! over typed connectors, with `And`/`Or` combinators and a per-node cost.
//! This is what a dictionary entry's lookup yields, and what the clause
//! builder (`crate::clause`) consumes.

use crate::string_set::Interned;

/// Which side of the word a connector attaches on.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Direction {
    /// `-`: must link to something to the left.
    Minus,
    /// `+`: must link to something to the right.
    Plus,
}

impl Direction {
    pub fn as_char(self) -> char {
        match self {
            Direction::Minus => '-',
            Direction::Plus => '+',
        }
    }
}

/// A terminal requiring exactly one link.
#[derive(Clone, Debug)]
pub struct ConnectorExpr {
    pub string: Interned,
    pub multi: bool,
    pub dir: Direction,
    pub cost: i32,
}

impl ConnectorExpr {
    pub fn new(string: Interned, multi: bool, dir: Direction, cost: i32) -> Self {
        ConnectorExpr {
            string,
            multi,
            dir,
            cost,
        }
    }
}

/// An immutable tree over typed connectors: `And`/`Or` combinators plus
/// `Connector` leaves. See spec §3 for the three node shapes.
#[derive(Clone, Debug)]
pub enum Expression {
    Connector(ConnectorExpr),
    And { children: Vec<Expression>, cost: i32 },
    Or { children: Vec<Expression>, cost: i32 },
}

impl Expression {
    pub fn connector(string: Interned, multi: bool, dir: Direction, cost: i32) -> Expression {
        Expression::Connector(ConnectorExpr::new(string, multi, dir, cost))
    }

    pub fn and(children: Vec<Expression>, cost: i32) -> Expression {
        Expression::And { children, cost }
    }

    pub fn or(children: Vec<Expression>, cost: i32) -> Expression {
        Expression::Or { children, cost }
    }

    /// The node's own cost, regardless of shape.
    pub fn cost(&self) -> i32 {
        match self {
            Expression::Connector(c) => c.cost,
            Expression::And { cost, .. } | Expression::Or { cost, .. } => *cost,
        }
    }

    /// Deep-copies the expression. Dictionary entries are copied per word
    /// at sentence-build time (spec §3 "Lifecycles") so that the clause
    /// builder can be handed an owned tree without aliasing the
    /// dictionary's own copy. `Expression` owns its children directly (no
    /// shared subtrees), so a structural `Clone` already *is* a deep copy;
    /// this is just a name that matches the spec's contract.
    pub fn deep_copy(&self) -> Expression {
        self.clone()
    }

    /// Number of `Connector` leaves reachable from this node.
    pub fn size(&self) -> usize {
        match self {
            Expression::Connector(_) => 1,
            Expression::And { children, .. } | Expression::Or { children, .. } => {
                children.iter().map(Expression::size).sum()
            }
        }
    }
}

/// Structural equality over `And`/`Or`/`Connector`, including `cost`,
/// `dir`, and interned string identity (not just spelling).
///
/// Grounded in the reference implementation's `exp_compare`: same node
/// type, same cost; for `Connector` nodes additionally same `dir` and
/// identical interned string; for `And`/`Or` nodes, same arity and every
/// child pairwise equal in order.
pub fn exp_compare(a: &Expression, b: &Expression) -> bool {
    if a.cost() != b.cost() {
        return false;
    }
    match (a, b) {
        (Expression::Connector(ca), Expression::Connector(cb)) => {
            ca.dir == cb.dir && std::rc::Rc::ptr_eq(&ca.string, &cb.string)
        }
        (Expression::And { children: ca, .. }, Expression::And { children: cb, .. })
        | (Expression::Or { children: ca, .. }, Expression::Or { children: cb, .. }) => {
            ca.len() == cb.len() && ca.iter().zip(cb.iter()).all(|(x, y)| exp_compare(x, y))
        }
        _ => false,
    }
}

/// True if `sub` is structurally equal (`exp_compare`) to `super_expr`
/// itself, or to some node reachable from it.
///
/// Grounded in the reference implementation's `exp_contains`: a
/// `Connector` node is a leaf and can only contain `sub` by being equal
/// to it; `And`/`Or` nodes additionally recurse into every child.
pub fn exp_contains(super_expr: &Expression, sub: &Expression) -> bool {
    if exp_compare(super_expr, sub) {
        return true;
    }
    match super_expr {
        Expression::Connector(_) => false,
        Expression::And { children, .. } | Expression::Or { children, .. } => {
            children.iter().any(|child| exp_contains(child, sub))
        }
    }
}

/// Marker used by grammar-catalog code to flag past-tense forms. The core
/// attaches no meaning to this string beyond re-exposing it; see
/// [`word_contains`].
pub const PAST_TENSE_FORM_MARKER: &str = "<marker-past>";

/// Marker used by grammar-catalog code to flag entity words (proper
/// names, addresses, phone numbers, ...). See [`word_contains`].
pub const ENTITY_MARKER: &str = "<marker-entity>";

/// Answers whether `word`'s expression contains `macro_expr` (typically
/// looked up by one of the marker constants above) as a sub-expression.
///
/// This is `wordContains` from spec §6: the core doesn't know what a
/// marker *means*, only how to check structural containment.
pub fn word_contains(word: &Expression, macro_expr: &Expression) -> bool {
    exp_contains(word, macro_expr)
}

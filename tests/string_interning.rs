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

extern crate ld_disjunct_core;

use std::rc::Rc;

use ld_disjunct_core::prelude::*;

/// S5 at the public-API boundary: repeated interning of the same
/// spelling returns the same handle; distinct spellings never collide.
#[test]
fn interning_is_stable_across_many_insertions() {
    let mut set = StringSet::new();
    let connector_strings = ["S", "MVp", "Xc", "O", "S", "MVp"];

    let handles: Vec<_> = connector_strings.iter().map(|s| set.add(s)).collect();

    assert!(Rc::ptr_eq(&handles[0], &handles[4]));
    assert!(Rc::ptr_eq(&handles[1], &handles[5]));
    assert!(!Rc::ptr_eq(&handles[0], &handles[2]));
    assert_eq!(4, set.len());
}

/// Invariant 9: round-trip through lookup after add.
#[test]
fn lookup_after_add_round_trips_through_a_grow() {
    let mut set = StringSet::new();
    let mut added = Vec::new();
    for i in 0..300 {
        added.push(set.add(&format!("Label{}", i)));
    }
    for (i, handle) in added.iter().enumerate() {
        let looked_up = set.lookup(&format!("Label{}", i)).unwrap();
        assert!(Rc::ptr_eq(handle, &looked_up));
    }
}

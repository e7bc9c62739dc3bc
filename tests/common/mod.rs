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

//! A trivial in-memory [`DictionarySource`] for integration tests, so
//! each test file doesn't have to restate the same stub.

use std::cell::RefCell;
use std::collections::HashMap;

use ld_disjunct_core::prelude::*;

pub struct StubDictionary {
    set: RefCell<StringSet>,
    entries: HashMap<String, Vec<(String, Expression)>>,
}

impl StubDictionary {
    pub fn new(set: StringSet, entries: HashMap<String, Vec<(String, Expression)>>) -> Self {
        StubDictionary {
            set: RefCell::new(set),
            entries,
        }
    }
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

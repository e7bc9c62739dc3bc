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

//! The fast matcher's connector hash (spec §4.F): folds in only a
//! connector's leading uppercase run, so two connectors the parser's
//! match predicate would accept (equal uppercase prefix, compatible
//! label) always land in the same bucket.
//!
//! Grounded in the reference implementation's `fast_match_hash`, which
//! walks a fixed-size table of precomputed pseudo-random integers indexed
//! by label and running byte position. Here that table is a `lazy_static`
//! built once from a fixed seed (splitmix64) rather than seeded from the
//! OS, so the hash -- and therefore match-table bucket order -- is
//! reproducible across runs and test assertions.

use lazy_static::lazy_static;

use crate::disjunct::Label;

/// Width of the precomputed random table, mirroring the reference
/// implementation's `RTSIZE`.
const RTSIZE: usize = 256;

/// One row per [`Label`] variant. Only `Normal` exists today; the row
/// count tracks the enum so a future label addition fails to compile
/// here instead of silently colliding hashes.
const NUM_LABELS: usize = 1;

fn label_row(label: Label) -> usize {
    match label {
        Label::Normal => 0,
    }
}

fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

lazy_static! {
    static ref RANDTABLE: Vec<[u32; RTSIZE]> = {
        let mut seed: u64 = 0x5EED_0FF1_CE00_BA5E;
        (0..NUM_LABELS)
            .map(|_| {
                let mut row = [0u32; RTSIZE];
                for slot in row.iter_mut() {
                    *slot = (splitmix64(&mut seed) >> 32) as u32;
                }
                row
            })
            .collect()
    };
}

/// Hashes a connector's label plus the leading uppercase run of its
/// string. Lowercase subtype-suffix bytes never affect the result.
pub fn hash(label: Label, string: &str) -> usize {
    let row = &RANDTABLE[label_row(label)];
    let mut accum: usize = row[0] as usize;
    for b in string.bytes().take_while(u8::is_ascii_uppercase) {
        let slot = (b as usize).wrapping_add(accum) % RTSIZE;
        accum ^= row[slot] as usize;
    }
    accum
}

/// Masks a raw hash down to a bucket index for a power-of-two-sized table.
pub fn bucket_index(hash: usize, table_size: usize) -> usize {
    debug_assert!(table_size.is_power_of_two());
    hash & (table_size - 1)
}

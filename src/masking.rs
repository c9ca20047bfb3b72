/**
 * RecoSplit
 * Copyright (C) 2018 Sebastian Schelter
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

use std::time::Instant;

use fnv::FnvHashSet;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;

use crate::errors::{check_percentage, Result};
use crate::sparse;
use crate::types::{InteractionMatrix, Split};
use crate::utils;

/// Number of interactions to hide, `ceil(test_percentage / 100 * num_candidates)` in exact
/// integer arithmetic.
pub fn num_masked_interactions(test_percentage: u32, num_candidates: usize) -> usize {
    let scaled = test_percentage as u64 * num_candidates as u64;
    ((scaled + 99) / 100) as usize
}

/// Splits an interaction matrix into a binary test matrix holding all interactions and a
/// train matrix from which `test_percentage` percent of the interactions have been removed.
/// The positions to remove are drawn with a generator seeded by `seed`, so identical inputs
/// always yield identical splits.
pub fn mask_interactions(
    interactions: &InteractionMatrix,
    test_percentage: u32,
    seed: u64,
) -> Result<Split> {

    check_percentage("test_percentage", test_percentage)?;

    let masking_start = Instant::now();

    let test = sparse::binarize(interactions);

    let candidates = sparse::nonzero_pairs(interactions);
    let num_samples = num_masked_interactions(test_percentage, candidates.len());

    let mut rng = StdRng::seed_from_u64(seed);

    let masked: Vec<(usize, usize)> = index::sample(&mut rng, candidates.len(), num_samples)
        .into_iter()
        .map(|position| candidates[position])
        .collect();

    let train = sparse::eliminate(interactions, &masked);

    let mut masked_users: Vec<usize> = masked.iter()
        .map(|&(row, _)| row)
        .collect::<FnvHashSet<usize>>()
        .into_iter()
        .collect();
    masked_users.sort();

    debug!(
        num_candidates = candidates.len(),
        num_masked = masked.len(),
        num_masked_users = masked_users.len(),
        duration_ms = utils::to_millis(masking_start.elapsed()),
        "Masked interactions"
    );

    Ok(Split { test, train, masked_users, num_masked: masked.len() })
}

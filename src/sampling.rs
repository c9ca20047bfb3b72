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

use std::hash::Hash;

use fnv::FnvHashSet;
use rand::Rng;
use rand::seq::index;

use crate::errors::{check_percentage, Result};
use crate::types::Interaction;

/// The distinct users of a record set, in ascending order.
pub fn distinct_users<U, I>(interactions: &[Interaction<U, I>]) -> Vec<U>
    where U: Ord + Hash + Clone {

    let mut seen: FnvHashSet<&U> =
        FnvHashSet::with_capacity_and_hasher(interactions.len() / 10, Default::default());

    let mut users: Vec<U> = interactions.iter()
        .filter(|interaction| seen.insert(&interaction.user))
        .map(|interaction| interaction.user.clone())
        .collect();

    users.sort();
    users
}

/// Number of users kept when sampling `percentage` percent of `num_users`, rounded down.
pub fn num_sampled_users(num_users: usize, percentage: u32) -> usize {
    (num_users as u64 * percentage as u64 / 100) as usize
}

/// Draws `floor(|users| * percentage / 100)` users uniformly at random without replacement.
/// The draw is only reproducible if the caller hands in a seeded generator.
pub fn sample_users<U, R>(users: &[U], percentage: u32, rng: &mut R) -> Result<Vec<U>>
    where U: Clone, R: Rng + ?Sized {

    check_percentage("dataset_percentage", percentage)?;

    let num_samples = num_sampled_users(users.len(), percentage);

    let sampled = index::sample(rng, users.len(), num_samples)
        .into_iter()
        .map(|position| users[position].clone())
        .collect();

    Ok(sampled)
}

/// Drops all interactions of users which have not been sampled.
pub fn retain_users<U, I>(
    interactions: Vec<Interaction<U, I>>,
    sampled_users: &[U]
) -> Vec<Interaction<U, I>>
    where U: Eq + Hash {

    let keep: FnvHashSet<&U> = sampled_users.iter().collect();

    interactions.into_iter()
        .filter(|interaction| keep.contains(&interaction.user))
        .collect()
}

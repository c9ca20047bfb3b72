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

extern crate csv;
extern crate fnv;
extern crate rand;
extern crate sprs;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate tracing;

use std::hash::Hash;
use std::time::Instant;

use rand::Rng;

pub mod config;
pub mod errors;
pub mod io;
pub mod masking;
pub mod sampling;
pub mod sparse;
pub mod stats;
pub mod types;
pub mod utils;

pub use config::PrepareConfig;
pub use errors::{PrepareError, Result};
pub use stats::DataDictionary;
pub use types::{Interaction, InteractionMatrix, Split};

/// Everything a preparation run produces. The dictionary maps rows and columns of the
/// matrices back to the original identifiers.
pub struct PreparedData<U, I> {
    pub data_dict: DataDictionary<U, I>,
    pub interactions: InteractionMatrix,
    pub split: Split,
}

/// Samples users, builds the user-item matrix and masks a share of its interactions for
/// testing. User sampling draws from the thread-local generator and is therefore not
/// reproducible, masking is seeded via `config.seed`.
pub fn prepare<U, I>(
    interactions: Vec<Interaction<U, I>>,
    config: &PrepareConfig,
) -> Result<PreparedData<U, I>>
    where U: Ord + Hash + Clone, I: Ord + Hash + Clone {

    prepare_with_rng(interactions, config, &mut rand::thread_rng())
}

/// Like `prepare`, but samples users with the given generator.
pub fn prepare_with_rng<U, I, R>(
    interactions: Vec<Interaction<U, I>>,
    config: &PrepareConfig,
    user_rng: &mut R,
) -> Result<PreparedData<U, I>>
    where U: Ord + Hash + Clone, I: Ord + Hash + Clone, R: Rng + ?Sized {

    config.validate()?;

    let batch_start = Instant::now();

    let users = sampling::distinct_users(&interactions);
    let sampled_users = sampling::sample_users(&users, config.dataset_percentage, user_rng)?;
    let interactions = sampling::retain_users(interactions, &sampled_users);

    info!(
        num_users = users.len(),
        num_sampled_users = sampled_users.len(),
        num_interactions = interactions.len(),
        "Sampled {}% of the users", config.dataset_percentage
    );

    let data_dict = DataDictionary::from(&interactions[..]);
    let coordinates = data_dict.encode(&interactions);

    let matrix = sparse::build_matrix(
        data_dict.shape(),
        &coordinates.rows,
        &coordinates.cols,
        &coordinates.values,
    )?;

    info!(
        num_users = data_dict.num_users(),
        num_items = data_dict.num_items(),
        nnz = matrix.nnz(),
        "Built interaction matrix"
    );

    let split = masking::mask_interactions(&matrix, config.test_percentage, config.seed)?;

    info!(
        num_masked = split.num_masked,
        num_masked_users = split.masked_users.len(),
        train_nnz = split.train.nnz(),
        test_nnz = split.test.nnz(),
        "Masked {}% of the interactions", config.test_percentage
    );

    debug!(duration_ms = utils::to_millis(batch_start.elapsed()), "Prepared dataset");

    Ok(PreparedData { data_dict, interactions: matrix, split })
}

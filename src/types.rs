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

use sprs::CsMat;

/// Ratings are stored doubled, so that half-star ratings become integers.
pub const RATING_SCALE: f64 = 2.0;

/// A user-item matrix in compressed-row form, users are rows and items are columns.
pub type InteractionMatrix = CsMat<f64>;

/// A single observed rating of an item by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Interaction<U, I> {
    pub user: U,
    pub item: I,
    pub rating: f64,
}

impl<U, I> Interaction<U, I> {
    pub fn new(user: U, item: I, rating: f64) -> Self {
        Interaction { user, item, rating }
    }
}

/// The result of masking: a binary ground truth matrix, the degraded training matrix and
/// the rows (users) for which at least one interaction was hidden.
#[derive(Debug, Clone)]
pub struct Split {
    pub test: InteractionMatrix,
    pub train: InteractionMatrix,
    pub masked_users: Vec<usize>,
    pub num_masked: usize,
}

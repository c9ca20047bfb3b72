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

use fnv::FnvHashMap;

use crate::types::{Interaction, RATING_SCALE};

/// Parallel row, column and value sequences, ready for matrix construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Coordinates {
    pub rows: Vec<usize>,
    pub cols: Vec<usize>,
    pub values: Vec<f64>,
}

impl Coordinates {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Maps user and item identifiers to consecutive indices. Identifiers are sorted ascending
/// and numbered in that order, so the mapping only depends on the set of identifiers seen.
pub struct DataDictionary<U, I> {
    user_ids: Vec<U>,
    item_ids: Vec<I>,
    user_dict: FnvHashMap<U, usize>,
    item_dict: FnvHashMap<I, usize>,
    num_interactions: u64,
}

impl<U, I> DataDictionary<U, I>
    where U: Ord + Hash + Clone, I: Ord + Hash + Clone {

    pub fn num_users(&self) -> usize {
        self.user_ids.len()
    }

    pub fn num_items(&self) -> usize {
        self.item_ids.len()
    }

    pub fn num_interactions(&self) -> u64 {
        self.num_interactions
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.num_users(), self.num_items())
    }

    pub fn user_index(&self, user: &U) -> Option<usize> {
        self.user_dict.get(user).cloned()
    }

    pub fn item_index(&self, item: &I) -> Option<usize> {
        self.item_dict.get(item).cloned()
    }

    /// Users in row order.
    pub fn user_ids(&self) -> &[U] {
        &self.user_ids
    }

    /// Items in column order.
    pub fn item_ids(&self) -> &[I] {
        &self.item_ids
    }

    /// Translates interactions into matrix coordinates, scaling the ratings on the way.
    /// Interactions with identifiers unknown to this dictionary are skipped.
    pub fn encode(&self, interactions: &[Interaction<U, I>]) -> Coordinates {

        let mut coordinates = Coordinates {
            rows: Vec::with_capacity(interactions.len()),
            cols: Vec::with_capacity(interactions.len()),
            values: Vec::with_capacity(interactions.len()),
        };

        let mut num_unknown = 0;

        for interaction in interactions {
            match (self.user_index(&interaction.user), self.item_index(&interaction.item)) {
                (Some(row), Some(col)) => {
                    coordinates.rows.push(row);
                    coordinates.cols.push(col);
                    coordinates.values.push(interaction.rating * RATING_SCALE);
                },
                _ => num_unknown += 1,
            }
        }

        if num_unknown > 0 {
            warn!(num_unknown = num_unknown, "Skipped interactions with unknown identifiers");
        }

        coordinates
    }
}

impl<'a, U, I> From<&'a [Interaction<U, I>]> for DataDictionary<U, I>
    where U: Ord + Hash + Clone, I: Ord + Hash + Clone {

    fn from(interactions: &'a [Interaction<U, I>]) -> Self {

        let mut user_ids: Vec<U> = interactions.iter()
            .map(|interaction| interaction.user.clone())
            .collect();
        user_ids.sort();
        user_ids.dedup();

        let mut item_ids: Vec<I> = interactions.iter()
            .map(|interaction| interaction.item.clone())
            .collect();
        item_ids.sort();
        item_ids.dedup();

        let user_dict: FnvHashMap<U, usize> = user_ids.iter()
            .enumerate()
            .map(|(index, user)| (user.clone(), index))
            .collect();

        let item_dict: FnvHashMap<I, usize> = item_ids.iter()
            .enumerate()
            .map(|(index, item)| (item.clone(), index))
            .collect();

        DataDictionary {
            user_ids,
            item_ids,
            user_dict,
            item_dict,
            num_interactions: interactions.len() as u64,
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn interactions() -> Vec<Interaction<String, u64>> {
        vec![
            Interaction::new(String::from("charles"), 30, 1.0),
            Interaction::new(String::from("alice"), 7, 4.5),
            Interaction::new(String::from("bob"), 30, 3.0),
            Interaction::new(String::from("alice"), 30, 2.5),
            Interaction::new(String::from("alice"), 12, 5.0),
        ]
    }

    #[test]
    fn indices_follow_sorted_order() {
        let interactions = interactions();
        let data_dict = DataDictionary::from(&interactions[..]);

        assert_eq!(data_dict.shape(), (3, 3));
        assert_eq!(data_dict.num_interactions(), 5);

        assert_eq!(data_dict.user_index(&String::from("alice")), Some(0));
        assert_eq!(data_dict.user_index(&String::from("bob")), Some(1));
        assert_eq!(data_dict.user_index(&String::from("charles")), Some(2));
        assert_eq!(data_dict.user_index(&String::from("dave")), None);

        assert_eq!(data_dict.item_ids(), &[7, 12, 30]);
        assert_eq!(data_dict.item_index(&30), Some(2));
    }

    #[test]
    fn encoding_scales_ratings() {
        let interactions = interactions();
        let data_dict = DataDictionary::from(&interactions[..]);

        let coordinates = data_dict.encode(&interactions);

        assert_eq!(coordinates.rows, vec![2, 0, 1, 0, 0]);
        assert_eq!(coordinates.cols, vec![2, 0, 2, 2, 1]);
        assert_eq!(coordinates.values, vec![2.0, 9.0, 6.0, 5.0, 10.0]);
    }

    #[test]
    fn index_space_is_dense() {
        let interactions = interactions();
        let data_dict = DataDictionary::from(&interactions[..]);
        let coordinates = data_dict.encode(&interactions);

        let mut rows = coordinates.rows.clone();
        rows.sort();
        rows.dedup();
        assert_eq!(rows, (0..data_dict.num_users()).collect::<Vec<_>>());

        let mut cols = coordinates.cols.clone();
        cols.sort();
        cols.dedup();
        assert_eq!(cols, (0..data_dict.num_items()).collect::<Vec<_>>());
    }

    #[test]
    fn empty_input() {
        let interactions: Vec<Interaction<u64, u64>> = Vec::new();
        let data_dict = DataDictionary::from(&interactions[..]);

        assert_eq!(data_dict.shape(), (0, 0));
        assert!(data_dict.encode(&interactions).is_empty());
    }
}

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

use crate::errors::{check_percentage, Result};

pub const DEFAULT_DATASET_PERCENTAGE: u32 = 20;
pub const DEFAULT_SEED: u64 = 42;

/// Parameters of a preparation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrepareConfig {
    /// Percentage of distinct users to keep from the full dataset.
    pub dataset_percentage: u32,
    /// Percentage of the kept interactions that are hidden from the train matrix.
    pub test_percentage: u32,
    /// Seed for the masking step. User sampling is deliberately not seeded.
    pub seed: u64,
}

impl PrepareConfig {

    pub fn new(test_percentage: u32) -> Self {
        PrepareConfig {
            dataset_percentage: DEFAULT_DATASET_PERCENTAGE,
            test_percentage,
            seed: DEFAULT_SEED,
        }
    }

    pub fn with_dataset_percentage(mut self, dataset_percentage: u32) -> Self {
        self.dataset_percentage = dataset_percentage;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_percentage("dataset_percentage", self.dataset_percentage)?;
        check_percentage("test_percentage", self.test_percentage)?;
        Ok(())
    }
}

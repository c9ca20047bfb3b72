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

use std::fs::{self, File};
use std::path::Path;

use crate::errors::{PrepareError, Result};
use crate::sparse;
use crate::types::{Interaction, InteractionMatrix, Split};

pub const RATINGS_FILE: &str = "ratings.csv";
pub const TRAIN_FILE: &str = "train.mtx";
pub const TEST_FILE: &str = "test.mtx";
pub const MASK_FILE: &str = "mask.csv";

/// A line of a MovieLens style ratings file. Further columns such as the timestamp are
/// ignored.
#[derive(Debug, Deserialize)]
struct RatingRecord {
    #[serde(rename = "userId")]
    user_id: u64,
    #[serde(rename = "movieId")]
    movie_id: u64,
    rating: f64,
}

/// Field names will be used as CSV header.
#[derive(Debug, Serialize, Deserialize)]
struct MaskedUser {
    #[serde(rename = "userInds")]
    user_index: usize,
}

/// Reads a CSV input file. We expect a header row and comma separation.
pub fn csv_reader<P: AsRef<Path>>(path: P) -> Result<csv::Reader<File>> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b',')
        .from_path(path)?;

    Ok(reader)
}

/// Loads all ratings of a file with `userId`, `movieId` and `rating` columns into memory.
pub fn read_interactions<P: AsRef<Path>>(path: P) -> Result<Vec<Interaction<u64, u64>>> {

    let mut reader = csv_reader(path)?;

    let mut interactions = Vec::new();
    for record in reader.deserialize() {
        let record: RatingRecord = record?;
        interactions.push(Interaction::new(record.user_id, record.movie_id, record.rating));
    }

    Ok(interactions)
}

/// Writes a matrix in Matrix Market coordinate format, which keeps shape, positions and
/// values.
pub fn write_matrix<P: AsRef<Path>>(path: P, matrix: &InteractionMatrix) -> Result<()> {
    sprs::io::write_matrix_market(path, matrix)?;
    Ok(())
}

pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<InteractionMatrix> {
    let triplets = sprs::io::read_matrix_market::<f64, usize, _>(path)
        .map_err(PrepareError::MatrixMarket)?;

    let matrix: InteractionMatrix = triplets.to_csr();
    Ok(sparse::eliminate(&matrix, &[]))
}

/// Writes the masked user indices as a single CSV column with the header `userInds`.
pub fn write_masked_users<P: AsRef<Path>>(path: P, masked_users: &[usize]) -> Result<()> {

    // The header is written by hand, so that it is present for an empty mask as well
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(&["userInds"])?;

    for user_index in masked_users {
        writer.serialize(MaskedUser { user_index: *user_index })?;
    }

    writer.flush()?;
    Ok(())
}

pub fn read_masked_users<P: AsRef<Path>>(path: P) -> Result<Vec<usize>> {
    let mut reader = csv_reader(path)?;

    let mut masked_users = Vec::new();
    for record in reader.deserialize() {
        let masked_user: MaskedUser = record?;
        masked_users.push(masked_user.user_index);
    }

    Ok(masked_users)
}

/// Persists train matrix, test matrix and masked users into `output_path`, creating the
/// directory if necessary.
pub fn write_split<P: AsRef<Path>>(output_path: P, split: &Split) -> Result<()> {

    let output_path = output_path.as_ref();
    fs::create_dir_all(output_path)?;

    let train_path = output_path.join(TRAIN_FILE);
    info!(path = %train_path.display(), nnz = split.train.nnz(), "Writing train matrix");
    write_matrix(&train_path, &split.train)?;

    let test_path = output_path.join(TEST_FILE);
    info!(path = %test_path.display(), nnz = split.test.nnz(), "Writing test matrix");
    write_matrix(&test_path, &split.test)?;

    let mask_path = output_path.join(MASK_FILE);
    info!(path = %mask_path.display(), num_users = split.masked_users.len(), "Writing masked users");
    write_masked_users(&mask_path, &split.masked_users)?;

    Ok(())
}

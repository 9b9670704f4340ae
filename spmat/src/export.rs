//! JSON export of matrices and their summaries
//!
//! A matrix is written as `{"rows":R,"cols":C,"entries":[[r,c,v],...]}`
//! with entries in row-major order. Importing re-validates coordinates
//! and drops zeros; a bad coordinate is reported as the core error, not
//! as a JSON error.

use serde::{de::DeserializeOwned, Serialize};
use spmat_core::{CooTriplets, MatrixElement, SparseMatrix};

use crate::{Error, MatrixInfo, Result};

fn json_error(err: serde_json::Error) -> Error {
    Error::Json(err.to_string())
}

pub fn to_json_string<T: MatrixElement + Serialize>(matrix: &SparseMatrix<T>) -> Result<String> {
    serde_json::to_string(matrix).map_err(json_error)
}

pub fn from_json_str<T: MatrixElement + DeserializeOwned>(json: &str) -> Result<SparseMatrix<T>> {
    let triplets: CooTriplets<T> = serde_json::from_str(json).map_err(json_error)?;
    Ok(SparseMatrix::try_from(triplets)?)
}

pub fn info_json<T: MatrixElement>(matrix: &SparseMatrix<T>) -> Result<String> {
    serde_json::to_string_pretty(&MatrixInfo::of(matrix)).map_err(json_error)
}

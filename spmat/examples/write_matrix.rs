//! Writes a pair of large banded matrices for trying out the CLI

use rand::{rngs::StdRng, Rng, SeedableRng};
use spmat::{IntMatrix, SpmatFile};
use std::time::Instant;

fn main() -> spmat::Result<()> {
    println!("Writing large banded sparse matrices...");

    // Matrix dimensions - reasonable size for testing
    let size = 200_000;
    let band = 3;

    println!("Matrix dimensions: {size} x {size}, band half-width {band}");

    let start = Instant::now();
    let a = build_banded_matrix(size, band, 1)?;
    let b = build_banded_matrix(size, band, 2)?;
    let build_time = start.elapsed();
    println!("Built {} + {} non-zeros in {build_time:?}", a.nnz(), b.nnz());

    let start = Instant::now();
    SpmatFile::write_matrix(&a, "banded_a.txt")?;
    SpmatFile::write_matrix(&b, "banded_b.txt")?;
    let write_time = start.elapsed();
    println!("Matrices written in {write_time:?}");
    println!("\nRun 'cargo run --example matrix_cli -- compute multiply \\");
    println!("    banded_a.txt banded_b.txt -o product.txt'");
    Ok(())
}

/// Random values on the diagonals within `band` of the main diagonal
fn build_banded_matrix(size: usize, band: usize, seed: u64) -> spmat::Result<IntMatrix> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut matrix = IntMatrix::new(size, size);

    for row in 0..size {
        let first = row.saturating_sub(band);
        let last = (row + band).min(size - 1);
        for col in first..=last {
            matrix.set(row, col, rng.gen_range(-9..=9))?;
        }
    }

    Ok(matrix)
}

//! One-shot timing harness.
//!
//! Builds five dim×dim standard-normal matrices, contracts them once via
//! "ra,rb,rc,rd,re->abcde", and prints the wall-clock duration of that
//! single call. An optional first argument overrides the extent
//! (default 30).

use std::time::Instant;

use dense_einsum::{Tensor, contract};

const SPEC: &str = "ra,rb,rc,rd,re->abcde";

fn main() {
    let dim: usize = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(30);

    let inputs: Vec<Tensor<f64>> = (0..5).map(|_| Tensor::random_normal(&[dim, dim])).collect();

    let start = Instant::now();
    let output = contract(SPEC, &inputs).expect("reference contraction failed");
    let elapsed = start.elapsed();

    println!(
        "{} dim={} output_shape={:?} elapsed={:.6}s",
        SPEC,
        dim,
        output.shape(),
        elapsed.as_secs_f64()
    );
}

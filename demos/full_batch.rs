//! Increments a full 64-lane batch and prints the bit-planes on both sides.

use bitsliced::console::{render_planes, render_values};
use bitsliced::{increment_parallel, transpose_in, transpose_out, LANES};

fn main() -> bitsliced::Result<()> {
    let values: Vec<u32> = (0..LANES as u32).map(|i| i * i).collect();

    let planes = transpose_in(&values, LANES)?;
    println!("Input:\n{}", render_planes(&planes));

    let planes = increment_parallel(planes);
    println!("Output:\n{}", render_planes(&planes));

    let output = transpose_out(&planes, LANES)?;
    println!("\nInput:\n{}", render_values(&values));
    println!("Output:\n{}", render_values(&output));

    Ok(())
}

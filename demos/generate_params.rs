//! Generate accumulator public parameters and save them to a file.
//!
//! Run with: cargo run --example generate_params
//!
//! The trapdoor sampled inside the setup is destroyed before it returns;
//! only the public parameters file should ever be distributed.

use bilinear_accumulator::PublicParameters;

const CAPACITY: usize = 1024;
const OUTPUT_PATH: &str = "public_params.bin";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("=== Accumulator Public Parameters Generator ===");
    println!();
    println!("Capacity (maximum set size): {}", CAPACITY);
    println!("Generating public parameters...");

    let params = PublicParameters::generate(CAPACITY)?;
    params.save_to_file(OUTPUT_PATH)?;

    println!("Saved public parameters to: {}", OUTPUT_PATH);
    println!(
        "Parameters contain {} G1 powers and {} G2 powers",
        params.g1_powers.len(),
        params.g2_powers.len()
    );

    Ok(())
}

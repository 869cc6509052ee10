//! End-to-end walkthrough: setup, commit, add, prove, verify.
//!
//! Run with: cargo run --example membership_flow

use ark_bls12_381::Fr;
use bilinear_accumulator::Accumulator;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("=== Accumulator Membership Flow ===");
    println!();

    let mut acc = Accumulator::new(4);
    acc.set_up()?;
    println!("Setup complete (capacity 4); trapdoor destroyed.");

    let set: Vec<Fr> = [2u64, 5, 9].iter().map(|&v| Fr::from(v)).collect();
    let commitment = acc.commit(&set)?;
    println!("Committed the set {{2, 5, 9}}.");

    let extended = acc.add(&commitment, &set, Fr::from(7u64))?;
    let direct = acc.commit(
        &[2u64, 5, 7, 9]
            .iter()
            .map(|&v| Fr::from(v))
            .collect::<Vec<_>>(),
    )?;
    assert_eq!(extended, direct);
    println!("Added 7; recommitment matches a direct commit of {{2, 5, 7, 9}}.");

    let proof = acc.mem_prove(&set, Fr::from(5u64))?;
    println!(
        "Membership of 5 in {{2, 5, 9}} verifies: {}",
        acc.mem_verify(&commitment, Fr::from(5u64), &proof)
    );

    let without_five = acc.commit(&[Fr::from(2u64), Fr::from(7u64), Fr::from(9u64)])?;
    println!(
        "Same proof against a commitment without 5 verifies: {}",
        acc.mem_verify(&without_five, Fr::from(5u64), &proof)
    );

    Ok(())
}

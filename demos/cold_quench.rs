//! Cold start below the critical temperature
//!
//! Run with: cargo run --release --example cold_quench
//!
//! Starts from the fully aligned lattice and shows how many spins differ
//! from the starting state as the run proceeds.

use ising_mc::{InitialCondition, Lattice, Simulation, SimulationParams, spin_rng};

fn main() {
    let params = SimulationParams {
        size: 64,
        temperature: 1.5,
        initial: InitialCondition::Cold,
        total_steps: 400_000,
        frame_count: 20,
        steps_per_frame: 20_000,
        reference_mode: false,
    };

    let mut simulation = Simulation::new(params, None, spin_rng(Some(7))).unwrap();
    let frames = simulation.run().unwrap();
    let start = Lattice::cold(params.size).unwrap();

    println!("frame  trials     flipped-from-start");
    for (k, frame) in frames.iter().enumerate() {
        println!("{:>5}  {:>9}  {:>6}", k, k * params.steps_per_frame, frame.differing_sites(&start));
    }
}

//! Reference-biased rule drawing a pattern out of a random lattice
//!
//! Run with: cargo run --release --example reference_pattern
//!
//! A diagonal cross is used as the reference; the agreement between the
//! lattice and the cross climbs from about one half to nearly one.

use std::sync::Arc;
use ising_mc::{InitialCondition, Lattice, Simulation, SimulationParams, spin_rng};

fn cross(size: usize) -> Lattice {
    let rows: Vec<Vec<i64>> = (0..size)
        .map(|i| {
            (0..size)
                .map(|j| if i.abs_diff(j) <= 2 || (i + j).abs_diff(size - 1) <= 2 { 1 } else { -1 })
                .collect()
        })
        .collect();
    Lattice::from_rows(&rows).unwrap()
}

fn main() {
    let size = 48;
    let reference = Arc::new(cross(size));
    let params = SimulationParams {
        size,
        temperature: 1.0,
        initial: InitialCondition::Warm,
        total_steps: 100_000,
        frame_count: 25,
        steps_per_frame: 4_000,
        reference_mode: true,
    };

    let mut simulation = Simulation::new(params, Some(reference.clone()), spin_rng(None)).unwrap();
    let frames = simulation.run().unwrap();

    for (k, frame) in frames.iter().enumerate() {
        println!("frame {:>3}: agreement {:.4}", k, frame.agreement(&reference));
    }
}

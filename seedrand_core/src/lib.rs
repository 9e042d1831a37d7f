// seedrand_core/src/lib.rs

//! Deterministic, seedable xorshift32 randomness.
//!
//! A [`SeededRandomGenerator`](generator::SeededRandomGenerator) is a plain
//! value: each subsystem owns one and passes it explicitly to whatever needs
//! randomness. There is no global instance.

pub mod error;
pub mod generator;
pub mod prelude;
pub mod rng;
pub mod sampling;

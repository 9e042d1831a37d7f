// seedrand_core/src/prelude.rs

// --- Core Types ---
pub use crate::generator::SeededRandomGenerator;

// --- Errors ---
pub use crate::error::{RangeError, StateError};

// --- rand_core Traits (implemented by the generator) ---
pub use rand_core::{RngCore, SeedableRng};

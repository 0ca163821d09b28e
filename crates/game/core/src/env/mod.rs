//! World construction inputs: deterministic randomness and layout generation.
mod layout;
mod rng;

pub use layout::LayoutGenerator;
pub use rng::{PcgRng, RngOracle, compute_seed};

//! Domain models and derivation functions for the advisory engine

pub mod calendar;
pub mod fertilizer;
pub mod nutrients;
pub mod prediction;
pub mod rainfall;
pub mod tips;
pub mod yield_estimate;

pub use calendar::*;
pub use fertilizer::*;
pub use nutrients::*;
pub use prediction::*;
pub use rainfall::*;
pub use tips::*;
pub use yield_estimate::*;

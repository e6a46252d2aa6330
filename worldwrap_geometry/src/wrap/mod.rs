//! Normalization to degrees and longitudinal replication of feature collections.

mod normalize;
mod replicate;
mod shift;

pub use normalize::*;
pub use replicate::*;
pub use shift::*;

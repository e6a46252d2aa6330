//! Web Mercator ↔ geographic conversion and the heuristic that decides which one a collection uses.

mod detect;
mod mercator;

pub use detect::*;
pub use mercator::*;

#![allow(clippy::module_inception)]

mod bbox;
mod collection;
mod feature;
mod geometry;
mod types;

pub use bbox::*;
pub use collection::*;
pub use feature::*;
pub use geometry::*;
pub use types::*;

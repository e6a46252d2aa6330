// Coordinate-bearing building blocks of `Geometry`. Positions are `Coordinates`; a point wraps
// one, every other type is a sequence of the level below, down to rings and line strings of
// positions. All of them implement `GeometryTrait`, whose `map_coordinates` is the single
// per-position visitor used for projection conversion and longitude shifting.

mod coordinates;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod ring;
mod traits;

pub use coordinates::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;

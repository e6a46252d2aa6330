use super::LineStringGeometry;

/// Several line strings, e.g. a route split at the antimeridian.
#[derive(Clone, Default, PartialEq)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

crate::impl_geometry_sequence!(MultiLineStringGeometry, LineStringGeometry);

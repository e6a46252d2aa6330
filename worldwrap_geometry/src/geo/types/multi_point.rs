use super::PointGeometry;

/// Several unconnected points.
#[derive(Clone, Default, PartialEq)]
pub struct MultiPointGeometry(pub Vec<PointGeometry>);

crate::impl_geometry_sequence!(MultiPointGeometry, PointGeometry);

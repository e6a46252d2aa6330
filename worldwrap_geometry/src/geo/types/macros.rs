/// Implements `From` conversions from vectors and array references of items for a
/// tuple-struct geometry wrapping `Vec<$item>`.
#[doc(hidden)]
#[macro_export]
macro_rules! impl_from_array {
	($($t:ty,$item:ty),*) => {$(
		impl<T> From<Vec<T>> for $t
		where
			$item: From<T>,
		{
			fn from(value: Vec<T>) -> Self {
				Self(value.into_iter().map(<$item>::from).collect())
			}
		}

		impl<'a, T> From<&'a Vec<T>> for $t
		where
			$item: From<&'a T>,
		{
			fn from(value: &'a Vec<T>) -> Self {
				Self(value.iter().map(<$item>::from).collect())
			}
		}

		impl<'a, T, const N: usize> From<&'a [T; N]> for $t
		where
			$item: From<&'a T>,
		{
			fn from(value: &'a [T; N]) -> Self {
				Self(value.iter().map(<$item>::from).collect())
			}
		}
	)*}
}

/// Implements `GeometryTrait`, `Debug` and the `From` conversions of `impl_from_array!` for a
/// tuple-struct geometry wrapping `Vec<$item>`, where `$item` is a `GeometryTrait` itself.
///
/// Every method maps element-wise, so the nesting of the wrapped items is kept exactly.
#[doc(hidden)]
#[macro_export]
macro_rules! impl_geometry_sequence {
	($($t:ident, $item:ty);* $(;)?) => {$(
		impl $crate::GeometryTrait for $t {
			fn map_coordinates(&self, transform: &impl Fn(&$crate::Coordinates) -> $crate::Coordinates) -> Self {
				$t(
					self
						.0
						.iter()
						.map(|item| <$item as $crate::GeometryTrait>::map_coordinates(item, transform))
						.collect(),
				)
			}

			fn first_coordinates(&self) -> Option<&$crate::Coordinates> {
				self.0.first().and_then(<$item as $crate::GeometryTrait>::first_coordinates)
			}

			fn to_coord_json(&self, precision: Option<u8>) -> serde_json::Value {
				serde_json::Value::from(
					self
						.0
						.iter()
						.map(|item| <$item as $crate::GeometryTrait>::to_coord_json(item, precision))
						.collect::<Vec<_>>(),
				)
			}

			fn from_coord_json(value: &serde_json::Value) -> anyhow::Result<Self> {
				value
					.as_array()
					.ok_or_else(|| anyhow::anyhow!("coordinates must be an array, but got {value}"))?
					.iter()
					.map(<$item as $crate::GeometryTrait>::from_coord_json)
					.collect::<anyhow::Result<Vec<_>>>()
					.map($t)
			}
		}

		impl std::fmt::Debug for $t {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.debug_list().entries(&self.0).finish()
			}
		}

		$crate::impl_from_array!($t, $item);
	)*}
}

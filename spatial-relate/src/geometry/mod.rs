/// Set of enums representing the outcomes of geometric tests
pub mod geo_enums;

/// Set of traits representing geometric operations shared by the primitives
pub mod geo_traits;

/// Set of geometric primitives - atomic building blocks for the predicates
pub mod primitives;

mod shape;

#[doc(inline)]
pub use shape::Geometry;

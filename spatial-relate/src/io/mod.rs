/// Recovering a relation label from narrated answer text
pub mod answer;

/// Conversion of internal geometries back into their external representation
pub mod export;

/// Serializable external representations of geometries and relation records
pub mod ext_repr;

/// Conversion of external representations into validated internal geometries
pub mod import;

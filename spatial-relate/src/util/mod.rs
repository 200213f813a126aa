/// Angle normalization and rounding helpers
pub mod angles;

mod config;

#[doc(inline)]
pub use config::PolygonMode;
#[doc(inline)]
pub use config::RelateConfig;

//! Forest derivation and drop-target resolution.

pub mod builder;
pub mod resolver;

pub use builder::TreeBuilder;
pub use resolver::PlacementResolver;

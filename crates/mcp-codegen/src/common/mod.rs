//! Types and helpers shared by every domain generator.

pub mod types;
pub mod typescript;

pub use types::{GeneratedCode, GeneratedFile};

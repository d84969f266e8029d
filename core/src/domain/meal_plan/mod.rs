pub mod entities;
pub mod export;
pub mod extractor;
pub mod normalizer;
pub mod ports;
pub mod prompt;
pub mod registry;
pub mod render;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;

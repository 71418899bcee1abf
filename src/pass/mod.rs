//! Password generation.

pub mod charset;
mod generate;
pub mod strength;

pub use charset::{CharacterClass, ClassSet};
pub use generate::{
    GenerateError, GeneratedPassword, GenerationRequest, MAX_LENGTH, MIN_LENGTH, generate,
    generate_batch,
};

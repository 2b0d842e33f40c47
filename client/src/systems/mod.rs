//! Client-side game systems
//!
//! Organized into submodules for maintainability.

mod objects;
mod player;
mod rendering;
mod world;

// Re-export everything for easy access from main.rs
pub use objects::*;
pub use player::*;
pub use rendering::*;
pub use world::*;

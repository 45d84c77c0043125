//! Purely decorative effects. None of these carry state anyone else reads.

pub mod glitch;
pub mod interactive;
pub mod matrix;
pub mod parallax;
pub mod progress;
pub mod styles;

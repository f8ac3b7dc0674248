pub mod assistant;
pub mod cli;
pub mod core;
pub mod gemini;

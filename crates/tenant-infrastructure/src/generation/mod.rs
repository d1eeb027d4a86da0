//! Content generation providers

pub mod gemini;

pub use gemini::GeminiContentGenerator;

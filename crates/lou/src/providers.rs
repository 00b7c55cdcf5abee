pub mod base;
pub mod configs;
pub mod gemini;

#[cfg(test)]
pub mod mock;

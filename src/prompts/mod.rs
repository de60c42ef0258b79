//! Instruction templates for the prompt-backed flows.

pub mod suggestions;
pub mod summarize;

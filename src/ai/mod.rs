//! All AI/LLM functionality

pub mod chunker;
pub mod client;
pub mod prompt_builder;
pub mod tokens;

// Re-export main types for convenience
pub use chunker::{ChunkMode, split_content, split_sentences};
pub use client::{ChunkSummarizer, LlmClient};
pub use tokens::estimate_tokens;

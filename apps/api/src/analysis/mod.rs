// Batch analysis turn: transcript serialization, prompt compilation,
// single-shot model call, and defensive normalization of the result.

pub mod handlers;
pub mod normalize;
pub mod prompts;
pub mod transcript;

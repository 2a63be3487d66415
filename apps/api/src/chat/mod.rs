// Streaming chat turn: validation, persona prompt compilation, and
// unbuffered relay of the model's incremental reply.

pub mod handlers;
pub mod prompts;

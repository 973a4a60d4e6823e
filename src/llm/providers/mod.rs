pub mod gemini;
pub mod openrouter;

//! OpenAI-compatible chat-completions adapter (Groq by default)

mod chat_completions;

pub use chat_completions::ChatCompletionsGateway;

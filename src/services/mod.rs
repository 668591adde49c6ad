pub mod chatbot;
pub mod gemini;
pub mod session;

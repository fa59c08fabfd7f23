// Conversational companion: per-session state, the reply orchestrator and the
// pieces it composes (canned bank, healing poems, model prompt, screening
// suggestion, injectable randomness).
// All live-model calls go through llm_client.

pub mod canned;
pub mod handlers;
pub mod orchestrator;
pub mod poetry;
pub mod prompts;
pub mod random;
pub mod session;
pub mod suggestion;

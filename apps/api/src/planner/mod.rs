// Study-abroad planner: form → prompt → Gemini → result cards.
// All LLM calls go through llm_client — no direct API calls here.

pub mod export;
pub mod generator;
pub mod handlers;
pub mod image;
pub mod options;
pub mod plan;
pub mod preferences;
pub mod prompts;
pub mod render;
pub mod share;

// Resume Analysis Pipeline
// Implements: prompt construction, model call, schema parsing, placeholder
// degradation, and the upload/listing handlers that drive it.
// All model calls go through llm_client; no direct Gemini calls here.

pub mod analyzer;
pub mod handlers;
pub mod prompts;
pub mod schema;

//! aic — natural-language shell commands via a local Ollama model.
//!
//! Library surface for the binary and its integration tests. The pipeline is
//! strictly linear: probe the host, build the system prompt, ask the model
//! for one command, run it.

pub mod executor;
pub mod logging;
pub mod ollama;
pub mod prompt;
pub mod sysinfo;

// src/application/ports/mod.rs
pub mod render;
pub mod time;
pub mod util;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ClockPort = dyn time::Clock;
pub type IdGeneratorPort = dyn util::IdGenerator;
pub type MarkdownRendererPort = dyn render::MarkdownRenderer;

// src/application/ports/render.rs
pub trait MarkdownRenderer: Send + Sync {
    /// Convert author markdown to HTML. Must not fail; malformed input renders
    /// as best it can.
    fn render(&self, markdown: &str) -> String;
}

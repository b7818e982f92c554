use crate::application::ports::render::MarkdownRenderer;
use pulldown_cmark::{Options, Parser, html};

/// CommonMark renderer with tables and strikethrough. Raw HTML in the source
/// is passed through untouched.
#[derive(Default, Clone)]
pub struct PulldownMarkdownRenderer;

impl MarkdownRenderer for PulldownMarkdownRenderer {
    fn render(&self, markdown: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);

        let parser = Parser::new_ext(markdown, options);
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}

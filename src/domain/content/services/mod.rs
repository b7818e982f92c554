// src/domain/content/services/mod.rs
use std::sync::Arc;

use crate::application::ports::render::MarkdownRenderer;
use crate::domain::content::entity::ContentText;
use crate::domain::content::value_objects::{ContentTitle, MarkdownBody, RenderedBody};

const PLAIN_CODE_BLOCK: &str = "<pre>";
const HIGHLIGHTED_CODE_BLOCK: &str = r#"<pre class="prettyprint linenums">"#;

/// Rewrites every bare `<pre>` in rendered HTML so the client-side
/// highlighter picks it up. Nothing else in the input is touched.
pub fn highlight_code_blocks(html: &str) -> String {
    html.replace(PLAIN_CODE_BLOCK, HIGHLIGHTED_CODE_BLOCK)
}

/// Domain service producing the presentation form of author markdown.
pub struct ContentRenderService {
    renderer: Arc<dyn MarkdownRenderer>,
}

impl ContentRenderService {
    pub fn new(renderer: Arc<dyn MarkdownRenderer>) -> Self {
        Self { renderer }
    }

    pub fn render(&self, markdown: &MarkdownBody) -> RenderedBody {
        let html = self.renderer.render(markdown.as_str());
        RenderedBody::from_stored(highlight_code_blocks(&html))
    }

    pub fn compose(&self, title: ContentTitle, markdown: MarkdownBody) -> ContentText {
        let rendered = self.render(&markdown);
        ContentText {
            title,
            markdown,
            rendered,
        }
    }
}

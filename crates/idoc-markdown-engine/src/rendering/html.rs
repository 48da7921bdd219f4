use html_escape::{encode_double_quoted_attribute, encode_text};
use pulldown_cmark::{Options, Parser, html};

use super::RenderHost;
use crate::models::PluginBlock;
use crate::plugins::PluginKind;

/// Renders prose as HTML and plugin blocks as tagged `<pre>` elements for a
/// client-side runtime to pick up.
#[derive(Debug, Default)]
pub struct HtmlHost {
    out: String,
    errors: Vec<String>,
}

impl HtmlHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn html(&self) -> &str {
        &self.out
    }

    /// Error titles reported so far.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn finish(self) -> String {
        self.out
    }
}

impl RenderHost for HtmlHost {
    fn render_prose(&mut self, _index: usize, markdown: &str) {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        html::push_html(&mut self.out, Parser::new_ext(markdown, options));
    }

    fn render_plugin(&mut self, index: usize, block: &PluginBlock, kind: PluginKind<'_>) {
        let mut attrs = format!(
            "class=\"plugin\" id=\"plugin-{index}\" data-language=\"{}\" data-kind=\"{}\"",
            encode_double_quoted_attribute(&block.language),
            kind.name(),
        );
        if let PluginKind::Csv { data_source } = kind {
            attrs.push_str(&format!(
                " data-source=\"{}\"",
                encode_double_quoted_attribute(data_source)
            ));
        }
        self.out.push_str(&format!(
            "<pre {attrs}>{}</pre>\n",
            encode_text(&block.content)
        ));
    }

    fn report_error(&mut self, title: &str, detail: &str) {
        log::warn!("{title}: {detail}");
        self.out.push_str(&format!(
            "<div class=\"error\"><strong>{}</strong> {}</div>\n",
            encode_text(title),
            encode_text(detail)
        ));
        self.errors.push(title.to_string());
    }
}

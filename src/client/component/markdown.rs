use dioxus::prelude::*;
use pulldown_cmark::{html, Event, Options, Parser};

/// Renders markdown to HTML. Raw HTML in the source is escaped, not passed through.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        other => other,
    });

    let mut output = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

/// Dataset descriptions and other user supplied markdown.
#[component]
pub fn Markdown(source: String) -> Element {
    let rendered = use_memo(use_reactive!(|source| render_markdown(&source)));

    rsx!(
        div {
            class: "prose max-w-none",
            dangerous_inner_html: "{rendered}"
        }
    )
}

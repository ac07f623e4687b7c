use crate::markup::{el, text_or, Attr, Node};
use crate::props::Props;
use crate::traits::SectionTemplate;

use super::{description, palette_color, section, title};

/// Email signup strip.
pub struct NewsletterTemplate;

impl SectionTemplate for NewsletterTemplate {
    fn family(&self) -> &'static str {
        "newsletter"
    }

    fn build(&self, _kind: &str, props: &Props<'_>) -> Node {
        let color = palette_color(props);

        let mut children: Vec<Node> = Vec::new();
        children.extend(title(props, "h2", "text-3xl font-bold text-white mb-4"));
        children.extend(description(props, "text-lg text-white/80 mb-8"));
        children.push(
            el("form")
                .class("flex flex-col sm:flex-row gap-4 max-w-md mx-auto")
                .attr("action", Attr::fixed("#"))
                .child(
                    el("input")
                        .attr("type", Attr::fixed("email"))
                        .attr("name", Attr::fixed("email"))
                        .attr("placeholder", Attr::bind_or("props.placeholder", "Enter your email"))
                        .attr("required", Attr::Present)
                        .class("flex-1 px-4 py-3 rounded-lg text-gray-900"),
                )
                .child(
                    el("button")
                        .attr("type", Attr::fixed("submit"))
                        .class(format!(
                            "px-6 py-3 bg-white text-{}-700 rounded-lg font-semibold hover:bg-gray-100",
                            color
                        ))
                        .child(text_or("props.buttonText", "Subscribe")),
                )
                .into(),
        );

        section(
            format!("py-16 px-4 bg-gradient-to-r from-{}-600 to-{}-700", color, color),
            "max-w-2xl mx-auto text-center",
            children,
        )
    }
}

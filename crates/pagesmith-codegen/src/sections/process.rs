use crate::markup::{each, el, text, unless, when, Node};
use crate::props::Props;
use crate::traits::SectionTemplate;

use super::{description, items, palette_color, placeholder, section, title};

/// Numbered steps; a step's `icon` replaces its number.
pub struct ProcessTemplate;

impl SectionTemplate for ProcessTemplate {
    fn family(&self) -> &'static str {
        "process"
    }

    fn build(&self, _kind: &str, props: &Props<'_>) -> Node {
        let color = palette_color(props);
        let mut children: Vec<Node> = Vec::new();
        children.extend(title(props, "h2", "text-3xl font-bold text-center mb-4"));
        children.extend(description(props, "text-lg text-gray-600 text-center mb-12"));

        children.push(match items(props, &["steps"]) {
            None => placeholder("Steps coming soon."),
            Some(_) => el("div")
                .class("space-y-8")
                .child(each(
                    "props.steps",
                    "step",
                    el("div")
                        .class("flex gap-6 items-start")
                        .child(
                            el("div")
                                .class(format!(
                                    "flex-shrink-0 w-12 h-12 rounded-full bg-{}-600 text-white flex items-center justify-center font-bold",
                                    color
                                ))
                                .child(when("step.icon", text("step.icon")))
                                .child(unless("step.icon", Node::Ordinal("step"))),
                        )
                        .child(
                            el("div")
                                .child(
                                    el("h3")
                                        .class("text-xl font-semibold mb-2")
                                        .child(text("step.title")),
                                )
                                .child(el("p").class("text-gray-600").child(text("step.description"))),
                        ),
                ))
                .into(),
        });

        section("py-16 px-4", "max-w-4xl mx-auto", children)
    }
}

use crate::markup::{each, el, text, when, Attr, Node};
use crate::props::Props;
use crate::traits::SectionTemplate;

use super::{fit_columns, items, placeholder, section, title};

/// Customer quotes with optional avatar and star rating.
pub struct TestimonialsTemplate;

impl SectionTemplate for TestimonialsTemplate {
    fn family(&self) -> &'static str {
        "testimonials"
    }

    fn build(&self, _kind: &str, props: &Props<'_>) -> Node {
        let mut children: Vec<Node> = Vec::new();
        children.extend(title(props, "h2", "text-3xl font-bold text-center mb-12"));

        children.push(match items(props, &["testimonials"]) {
            None => placeholder("No testimonials yet."),
            Some((_, list)) => el("div")
                .class(format!("grid md:grid-cols-{} gap-8", fit_columns(list.len(), 3)))
                .child(each(
                    "props.testimonials",
                    "testimonial",
                    el("div")
                        .class("p-6 bg-white rounded-xl shadow-lg")
                        .child(
                            el("div")
                                .class("flex items-center mb-4")
                                .child(when(
                                    "testimonial.avatar",
                                    el("img")
                                        .attr("src", Attr::Url("testimonial.avatar"))
                                        .attr("alt", Attr::bind_or("testimonial.name", ""))
                                        .class("w-12 h-12 rounded-full mr-4"),
                                ))
                                .child(
                                    el("div")
                                        .child(
                                            el("div")
                                                .class("font-semibold")
                                                .child(text("testimonial.name")),
                                        )
                                        .child(when(
                                            "testimonial.role",
                                            el("div")
                                                .class("text-sm text-gray-600")
                                                .child(text("testimonial.role")),
                                        )),
                                ),
                        )
                        .child(
                            el("p")
                                .class("text-gray-700 mb-4")
                                .child(text("testimonial.content")),
                        )
                        .child(when(
                            "testimonial.rating",
                            el("div")
                                .class("text-yellow-400")
                                .child(Node::Stars("testimonial.rating")),
                        )),
                ))
                .into(),
        });

        section("py-16 px-4 bg-gray-50", "max-w-6xl mx-auto", children)
    }
}

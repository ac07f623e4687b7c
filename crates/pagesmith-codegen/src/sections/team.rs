use crate::markup::{each, el, text, when, Attr, Node};
use crate::props::Props;
use crate::traits::SectionTemplate;

use super::{description, fit_columns, items, placeholder, section, title};

/// Team member cards.
pub struct TeamTemplate;

impl SectionTemplate for TeamTemplate {
    fn family(&self) -> &'static str {
        "team"
    }

    fn build(&self, _kind: &str, props: &Props<'_>) -> Node {
        let mut children: Vec<Node> = Vec::new();
        children.extend(title(props, "h2", "text-3xl font-bold text-center mb-4"));
        children.extend(description(props, "text-lg text-gray-600 text-center mb-12"));

        children.push(match items(props, &["members"]) {
            None => placeholder("Team members coming soon."),
            Some((_, members)) => el("div")
                .class(format!("grid md:grid-cols-{} gap-8", fit_columns(members.len(), 4)))
                .child(each(
                    "props.members",
                    "member",
                    el("div")
                        .class("text-center")
                        .child(when(
                            "member.image",
                            el("img")
                                .attr("src", Attr::Url("member.image"))
                                .attr("alt", Attr::bind_or("member.name", ""))
                                .class("w-32 h-32 rounded-full mx-auto mb-4 object-cover"),
                        ))
                        .child(el("h3").class("text-xl font-semibold").child(text("member.name")))
                        .child(el("p").class("text-blue-600").child(text("member.role")))
                        .child(when(
                            "member.bio",
                            el("p").class("text-gray-600 mt-2").child(text("member.bio")),
                        )),
                ))
                .into(),
        });

        section("py-16 px-4", "max-w-6xl mx-auto", children)
    }
}

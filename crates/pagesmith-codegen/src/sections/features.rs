use crate::markup::{each, el, text, when, Attr, Node};
use crate::props::Props;
use crate::traits::SectionTemplate;

use super::{description, grid_columns, placeholder, safe_link, section, title};

/// Feature showcase as a card grid or an illustrated list.
pub struct FeaturesTemplate {
    list: bool,
}

impl FeaturesTemplate {
    pub const fn grid() -> Self {
        Self { list: false }
    }

    pub const fn list() -> Self {
        Self { list: true }
    }

    fn grid_items(&self, props: &Props<'_>) -> Node {
        let columns = grid_columns(props.number("columns"));

        el("div")
            .class(format!("grid md:grid-cols-{} gap-8", columns))
            .child(each(
                "props.features",
                "feature",
                el("div")
                    .class("text-center p-6")
                    .child(when(
                        "feature.icon",
                        el("div").class("text-4xl mb-4").child(text("feature.icon")),
                    ))
                    .child(
                        el("h3")
                            .class("text-xl font-semibold mb-2")
                            .child(text("feature.title")),
                    )
                    .child(el("p").class("text-gray-600").child(text("feature.description"))),
            ))
            .into()
    }

    fn list_items(&self) -> Node {
        el("ul")
            .class("space-y-6")
            .child(each(
                "props.features",
                "feature",
                el("li")
                    .class("flex gap-4")
                    .child(when(
                        "feature.icon",
                        el("span").class("text-2xl").child(text("feature.icon")),
                    ))
                    .child(
                        el("div")
                            .child(
                                el("h3")
                                    .class("text-lg font-semibold")
                                    .child(text("feature.title")),
                            )
                            .child(el("p").class("text-gray-600").child(text("feature.description"))),
                    ),
            ))
            .into()
    }
}

impl SectionTemplate for FeaturesTemplate {
    fn family(&self) -> &'static str {
        "features"
    }

    fn build(&self, _kind: &str, props: &Props<'_>) -> Node {
        let has_features = props.list("features").is_some_and(|f| !f.is_empty());
        let mut copy: Vec<Node> = Vec::new();

        if self.list {
            copy.extend(title(props, "h2", "text-3xl font-bold mb-4"));
            copy.extend(description(props, "text-lg text-gray-600 mb-8"));
        } else {
            copy.extend(title(props, "h2", "text-3xl font-bold text-center mb-4"));
            copy.extend(description(props, "text-lg text-gray-600 text-center mb-12"));
        }

        copy.push(match (has_features, self.list) {
            (false, _) => placeholder("No features listed yet."),
            (true, false) => self.grid_items(props),
            (true, true) => self.list_items(),
        });

        if !self.list || !safe_link(props, "image") {
            let container = if self.list { "max-w-3xl mx-auto" } else { "max-w-6xl mx-auto" };
            return section("py-16 px-4", container, copy);
        }

        let image: Node = el("img")
            .attr("src", Attr::Url("props.image"))
            .attr("alt", Attr::bind_or("props.title", ""))
            .class("w-full rounded-xl shadow-lg")
            .into();
        let text_column: Node = el("div").children(copy).into();
        let columns = if props.text("imagePosition").as_deref() == Some("left") {
            vec![image, text_column]
        } else {
            vec![text_column, image]
        };

        section(
            "py-16 px-4",
            "max-w-6xl mx-auto grid md:grid-cols-2 gap-12 items-center",
            columns,
        )
    }
}

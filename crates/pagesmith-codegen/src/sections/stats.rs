use crate::markup::{each, el, text, when, Node};
use crate::props::Props;
use crate::traits::SectionTemplate;

use super::{fit_columns, items, palette_color, placeholder, section, title};

/// Headline numbers, as large cards or a minimal inline row.
pub struct StatsTemplate {
    minimal: bool,
}

impl StatsTemplate {
    pub const fn cards() -> Self {
        Self { minimal: false }
    }

    pub const fn minimal() -> Self {
        Self { minimal: true }
    }
}

impl SectionTemplate for StatsTemplate {
    fn family(&self) -> &'static str {
        "stats"
    }

    fn build(&self, _kind: &str, props: &Props<'_>) -> Node {
        let color = palette_color(props);
        let mut children: Vec<Node> = Vec::new();
        children.extend(title(props, "h2", "text-3xl font-bold text-center mb-12"));

        let Some((_, stats)) = items(props, &["stats"]) else {
            children.push(placeholder("No stats yet."));
            return section("py-16 px-4", "max-w-6xl mx-auto", children);
        };

        if self.minimal {
            children.push(
                el("div")
                    .class("flex flex-wrap justify-center gap-12")
                    .child(each(
                        "props.stats",
                        "stat",
                        el("div")
                            .class("text-center")
                            .child(
                                el("span")
                                    .class("block text-3xl font-bold text-gray-900")
                                    .child(text("stat.value")),
                            )
                            .child(
                                el("span")
                                    .class("block text-sm uppercase tracking-wide text-gray-500")
                                    .child(text("stat.label")),
                            ),
                    ))
                    .into(),
            );
            return section("py-10 px-4 border-y border-gray-200", "max-w-6xl mx-auto", children);
        }

        children.push(
            el("div")
                .class(format!("grid md:grid-cols-{} gap-8", fit_columns(stats.len(), 4)))
                .child(each(
                    "props.stats",
                    "stat",
                    el("div")
                        .class("text-center")
                        .child(
                            el("div")
                                .class(format!("text-5xl font-bold text-{}-600 mb-2", color))
                                .child(text("stat.value")),
                        )
                        .child(
                            el("div")
                                .class("text-xl font-semibold mb-1")
                                .child(text("stat.label")),
                        )
                        .child(when(
                            "stat.description",
                            el("div").class("text-gray-600").child(text("stat.description")),
                        )),
                ))
                .into(),
        );

        section("py-16 px-4", "max-w-6xl mx-auto", children)
    }
}

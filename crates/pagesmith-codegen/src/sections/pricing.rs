use crate::markup::{each, el, lit, text, text_or, when, Attr, Element, Node};
use crate::props::Props;
use crate::traits::SectionTemplate;

use super::{description, fit_columns, items, placeholder, section, title};

/// Pricing tiers, as cards or as compact rows.
///
/// Tiers are read from `tiers`, falling back to `plans`.
pub struct PricingTemplate {
    compact: bool,
}

impl PricingTemplate {
    pub const fn cards() -> Self {
        Self { compact: false }
    }

    pub const fn compact() -> Self {
        Self { compact: true }
    }
}

fn tier_features() -> Node {
    when(
        "tier.features",
        el("ul").class("space-y-3 mb-8").child(each(
            "tier.features",
            "feature",
            el("li")
                .class("flex items-center")
                .child(el("span").class("mr-2 text-green-600").child(lit("✓")))
                .child(text("feature")),
        )),
    )
}

fn tier_card() -> Element {
    el("div")
        .class("p-8 bg-white rounded-xl shadow-lg")
        .class_if("tier.highlighted", "ring-2 ring-blue-600")
        .child(el("h3").class("text-2xl font-bold mb-2").child(text("tier.name")))
        .child(
            el("div")
                .class("text-4xl font-bold mb-4")
                .child(text("tier.price"))
                .child(when(
                    "tier.period",
                    el("span")
                        .class("text-lg font-normal text-gray-600")
                        .child(lit("/"))
                        .child(text("tier.period")),
                )),
        )
        .child(when(
            "tier.description",
            el("p").class("text-gray-600 mb-4").child(text("tier.description")),
        ))
        .child(tier_features())
        .child(
            el("button")
                .attr("type", Attr::fixed("button"))
                .class("w-full py-3 bg-blue-600 text-white rounded-lg font-semibold hover:bg-blue-700")
                .child(text_or("tier.ctaText", "Get Started")),
        )
}

fn tier_row() -> Element {
    el("div")
        .class("flex items-center justify-between p-6")
        .class_if("tier.highlighted", "bg-blue-50")
        .child(
            el("div")
                .child(el("h3").class("text-lg font-semibold").child(text("tier.name")))
                .child(when(
                    "tier.description",
                    el("p").class("text-sm text-gray-600").child(text("tier.description")),
                )),
        )
        .child(
            el("div")
                .class("text-right")
                .child(el("span").class("text-2xl font-bold").child(text("tier.price")))
                .child(when(
                    "tier.period",
                    el("span")
                        .class("text-sm text-gray-600")
                        .child(lit("/"))
                        .child(text("tier.period")),
                )),
        )
}

impl SectionTemplate for PricingTemplate {
    fn family(&self) -> &'static str {
        "pricing"
    }

    fn build(&self, _kind: &str, props: &Props<'_>) -> Node {
        let mut children: Vec<Node> = Vec::new();
        children.extend(title(props, "h2", "text-3xl font-bold text-center mb-4"));
        children.extend(description(props, "text-lg text-gray-600 text-center mb-12"));

        let list = items(props, &["tiers", "plans"]).map(|(key, tiers)| {
            let path = if key == "tiers" { "props.tiers" } else { "props.plans" };
            (path, tiers.len())
        });

        children.push(match list {
            None => placeholder("Pricing tiers coming soon."),
            Some((path, _)) if self.compact => el("div")
                .class("divide-y divide-gray-200 border border-gray-200 rounded-xl bg-white")
                .child(each(path, "tier", tier_row()))
                .into(),
            Some((path, count)) => el("div")
                .class(format!("grid md:grid-cols-{} gap-8", fit_columns(count, 4)))
                .child(each(path, "tier", tier_card()))
                .into(),
        });

        let container = if self.compact { "max-w-3xl mx-auto" } else { "max-w-6xl mx-auto" };
        section("py-16 px-4 bg-gray-50", container, children)
    }
}

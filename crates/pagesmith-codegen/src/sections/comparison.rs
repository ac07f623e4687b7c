use crate::markup::{each, el, lit, text, Node};
use crate::props::Props;
use crate::traits::SectionTemplate;

use super::{description, items, placeholder, section, title};

/// Plan comparison table: one row per plan, one column per feature.
///
/// `plans[i].values[j]` marks whether plan `i` includes `features[j]`.
pub struct ComparisonTemplate;

impl SectionTemplate for ComparisonTemplate {
    fn family(&self) -> &'static str {
        "comparison"
    }

    fn build(&self, _kind: &str, props: &Props<'_>) -> Node {
        let mut children: Vec<Node> = Vec::new();
        children.extend(title(props, "h2", "text-3xl font-bold text-center mb-4"));
        children.extend(description(props, "text-lg text-gray-600 text-center mb-12"));

        if items(props, &["features"]).is_none() || items(props, &["plans"]).is_none() {
            children.push(placeholder("Comparison coming soon."));
            return section("py-16 px-4", "max-w-6xl mx-auto", children);
        }

        let header = el("thead").child(
            el("tr")
                .class("bg-gray-900 text-white")
                .child(el("th").class("p-4 text-left").child(lit("Plan")))
                .child(each(
                    "props.features",
                    "feature",
                    el("th").class("p-4 text-center").child(text("feature")),
                )),
        );
        let body = el("tbody").child(each(
            "props.plans",
            "plan",
            el("tr")
                .class("border-t border-gray-200")
                .child(el("td").class("p-4 font-semibold").child(text("plan.name")))
                .child(each(
                    "plan.values",
                    "value",
                    el("td")
                        .class("p-4 text-center")
                        .child(Node::Check("value")),
                )),
        ));

        children.push(
            el("div")
                .class("overflow-x-auto")
                .child(
                    el("table")
                        .class("w-full bg-white rounded-xl shadow")
                        .child(header)
                        .child(body),
                )
                .into(),
        );

        section("py-16 px-4", "max-w-6xl mx-auto", children)
    }
}

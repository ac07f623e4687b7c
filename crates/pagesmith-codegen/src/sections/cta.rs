use crate::markup::{el, text, Node};
use crate::props::Props;
use crate::traits::SectionTemplate;

use super::{action, palette_color, primary_action, safe_link, secondary_action, section};

/// Background classes for `backgroundColor`.
const BACKGROUNDS: &[(&str, &str)] = &[
    ("primary", "bg-blue-600"),
    ("secondary", "bg-gray-900"),
    ("accent", "bg-purple-600"),
];

/// Call-to-action block, full or as a slim banner.
pub struct CtaTemplate {
    banner: bool,
}

impl CtaTemplate {
    pub const fn block() -> Self {
        Self { banner: false }
    }

    pub const fn banner() -> Self {
        Self { banner: true }
    }

    fn build_block(&self, props: &Props<'_>) -> Node {
        let requested = props.text("backgroundColor").unwrap_or_default();
        let background = BACKGROUNDS
            .iter()
            .find(|(name, _)| *name == requested.trim())
            .map(|(_, class)| *class)
            .unwrap_or("bg-blue-600");

        let mut children: Vec<Node> = Vec::new();
        if props.has_text("headline") {
            children.push(
                el("h2")
                    .class("text-4xl font-bold text-white mb-4")
                    .child(text("props.headline"))
                    .into(),
            );
        }
        if props.has_text("description") {
            children.push(
                el("p")
                    .class("text-xl text-white/80 mb-8")
                    .child(text("props.description"))
                    .into(),
            );
        }

        let actions: Vec<Node> = [
            primary_action(
                props,
                "px-8 py-4 bg-white text-gray-900 rounded-lg font-semibold hover:bg-gray-100",
            ),
            secondary_action(
                props,
                "px-8 py-4 border-2 border-white text-white rounded-lg font-semibold hover:bg-white/10",
            ),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !actions.is_empty() {
            children.push(
                el("div")
                    .class("flex flex-wrap gap-4 justify-center")
                    .children(actions)
                    .into(),
            );
        }

        section(
            format!("py-20 px-4 {}", background),
            "max-w-4xl mx-auto text-center",
            children,
        )
    }

    fn build_banner(&self, props: &Props<'_>) -> Node {
        let color = palette_color(props);

        let mut copy: Vec<Node> = Vec::new();
        if props.has_text("text") {
            copy.push(
                el("p")
                    .class("text-2xl font-semibold text-white")
                    .child(text("props.text"))
                    .into(),
            );
        }
        if props.has_text("secondaryText") {
            copy.push(
                el("p")
                    .class("text-white/80")
                    .child(text("props.secondaryText"))
                    .into(),
            );
        }

        let mut children: Vec<Node> = vec![el("div").children(copy).into()];
        if props.has_text("buttonText") {
            let href = safe_link(props, "buttonLink").then_some("props.buttonLink");
            children.push(action(
                "props.buttonText",
                href,
                &format!(
                    "px-6 py-3 bg-white text-{}-700 rounded-lg font-semibold whitespace-nowrap hover:bg-gray-100",
                    color
                ),
            ));
        }

        section(
            format!("py-8 px-4 bg-gradient-to-r from-{}-600 to-{}-700", color, color),
            "max-w-6xl mx-auto flex flex-col md:flex-row items-center justify-between gap-6",
            children,
        )
    }
}

impl SectionTemplate for CtaTemplate {
    fn family(&self) -> &'static str {
        "cta"
    }

    fn build(&self, _kind: &str, props: &Props<'_>) -> Node {
        if self.banner {
            self.build_banner(props)
        } else {
            self.build_block(props)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::assert_jsx_parses;
    use serde_json::json;

    #[test]
    fn block_maps_background_color() {
        let props = json!({ "headline": "Ready?", "backgroundColor": "accent", "ctaText": "Go" });

        let body = assert_jsx_parses(&CtaTemplate::block(), "CallToAction", &props);
        let html = CtaTemplate::block().html("CallToAction", &props);

        assert!(body.contains("bg-purple-600"));
        assert!(html.starts_with(r#"<section class="py-20 px-4 bg-purple-600">"#));
        assert!(html.contains("Ready?"));
    }

    #[test]
    fn block_ignores_unknown_background() {
        let props = json!({ "backgroundColor": "red\"><script>" });

        let html = CtaTemplate::block().html("CallToAction", &props);

        assert!(html.contains("bg-blue-600"));
        assert!(!html.contains("script"));
    }

    #[test]
    fn banner_links_button() {
        let props = json!({
            "text": "Limited offer",
            "buttonText": "Claim",
            "buttonLink": "https://x.dev/claim"
        });

        let body = assert_jsx_parses(&CtaTemplate::banner(), "CTABanner", &props);
        let html = CtaTemplate::banner().html("CTABanner", &props);

        assert!(body.contains("href={props.buttonLink}"));
        assert!(html.contains(r#"href="https://x.dev/claim">Claim</a>"#));
    }

    #[test]
    fn empty_props_parse() {
        assert_jsx_parses(&CtaTemplate::block(), "CallToAction", &json!({}));
        assert_jsx_parses(&CtaTemplate::banner(), "CTABanner", &json!({}));
    }
}

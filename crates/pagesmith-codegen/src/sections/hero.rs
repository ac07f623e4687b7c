use crate::markup::{each, el, lit, text, Attr, Node};
use crate::props::Props;
use crate::traits::SectionTemplate;

use super::{palette_color, primary_action, safe_link, secondary_action, section};

/// Full-width hero, either centered or split with an image.
pub struct HeroTemplate {
    split: bool,
}

impl HeroTemplate {
    pub const fn centered() -> Self {
        Self { split: false }
    }

    pub const fn split() -> Self {
        Self { split: true }
    }

    fn copy(&self, props: &Props<'_>, color: &str) -> Vec<Node> {
        let align = if self.split { "" } else { " justify-center" };
        let mut nodes = Vec::new();

        if props.has_text("headline") {
            nodes.push(
                el("h1")
                    .class("text-5xl font-bold text-white mb-6")
                    .child(text("props.headline"))
                    .into(),
            );
        }
        if props.has_text("subheadline") {
            nodes.push(
                el("p")
                    .class(format!("text-xl text-{}-100 mb-8", color))
                    .child(text("props.subheadline"))
                    .into(),
            );
        }
        if self.split && props.list("features").is_some_and(|f| !f.is_empty()) {
            nodes.push(
                el("ul")
                    .class("space-y-2 mb-8 text-white")
                    .child(each(
                        "props.features",
                        "feature",
                        el("li")
                            .class("flex items-center gap-2")
                            .child(el("span").class("text-green-300").child(lit("✓")))
                            .child(text("feature")),
                    ))
                    .into(),
            );
        }

        let actions: Vec<Node> = [
            primary_action(
                props,
                &format!(
                    "px-8 py-3 bg-white text-{}-600 rounded-lg font-semibold hover:bg-gray-100",
                    color
                ),
            ),
            secondary_action(
                props,
                "px-8 py-3 border-2 border-white text-white rounded-lg font-semibold hover:bg-white/10",
            ),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !actions.is_empty() {
            nodes.push(
                el("div")
                    .class(format!("flex flex-wrap gap-4{}", align))
                    .children(actions)
                    .into(),
            );
        }

        nodes
    }
}

impl SectionTemplate for HeroTemplate {
    fn family(&self) -> &'static str {
        "hero"
    }

    fn build(&self, _kind: &str, props: &Props<'_>) -> Node {
        let color = palette_color(props);
        let background = format!(
            "py-20 px-4 bg-gradient-to-br from-{}-600 to-{}-800",
            color, color
        );

        if !self.split {
            return section(background, "max-w-4xl mx-auto text-center", self.copy(props, color));
        }

        let mut columns: Vec<Node> = vec![el("div").children(self.copy(props, color)).into()];
        if safe_link(props, "image") {
            let image = el("img")
                .attr("src", Attr::Url("props.image"))
                .attr("alt", Attr::bind_or("props.headline", ""))
                .class("w-full rounded-2xl shadow-2xl");
            if props.text("imagePosition").as_deref() == Some("left") {
                columns.insert(0, image.into());
            } else {
                columns.push(image.into());
            }
        }

        section(
            background,
            "max-w-6xl mx-auto grid md:grid-cols-2 gap-12 items-center",
            columns,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::assert_jsx_parses;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn centered_hero_html() {
        let props = json!({
            "headline": "Build <faster>",
            "subheadline": "Ship today",
            "ctaText": "Start",
            "colorScheme": "purple"
        });

        let html = HeroTemplate::centered().html("HeroSection", &props);

        let expected = r#"<section class="py-20 px-4 bg-gradient-to-br from-purple-600 to-purple-800">
  <div class="max-w-4xl mx-auto text-center">
    <h1 class="text-5xl font-bold text-white mb-6">Build &lt;faster&gt;</h1>
    <p class="text-xl text-purple-100 mb-8">Ship today</p>
    <div class="flex flex-wrap gap-4 justify-center">
      <button class="px-8 py-3 bg-white text-purple-600 rounded-lg font-semibold hover:bg-gray-100" type="button">Start</button>
    </div>
  </div>
</section>"#;
        assert_eq!(html, expected);
    }

    #[test]
    fn centered_hero_jsx_binds_props() {
        let props = json!({
            "headline": "Hi",
            "primaryButton": { "text": "Go", "link": "https://x.dev/start" },
            "secondaryButton": { "text": "Docs" }
        });

        let body = assert_jsx_parses(&HeroTemplate::centered(), "HeroSection", &props);

        assert!(body.contains("{props.headline}"));
        assert!(body.contains("href={props.primaryButton.link}"));
        assert!(body.contains("{props.secondaryButton.text}"));
        assert!(!body.contains("props.subheadline"));
    }

    #[test]
    fn split_hero_places_image() {
        let props = json!({
            "headline": "Hi",
            "features": ["Fast", "Safe"],
            "image": "https://x.dev/a.png",
            "imagePosition": "left"
        });

        let body = assert_jsx_parses(&HeroTemplate::split(), "HeroSplit", &props);
        let html = HeroTemplate::split().html("HeroSplit", &props);

        assert!(body.contains("props.features.map((feature: any, featureIndex: number) => ("));
        assert!(html.find("<img").unwrap() < html.find("<h1").unwrap());
        assert!(html.contains("<span class=\"text-green-300\">✓</span>"));
    }

    #[test]
    fn empty_props_still_parse() {
        assert_jsx_parses(&HeroTemplate::centered(), "HeroSection", &json!({}));
        assert_jsx_parses(&HeroTemplate::split(), "HeroSplit", &json!({}));
    }
}

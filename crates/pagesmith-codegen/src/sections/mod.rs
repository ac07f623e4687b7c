//! Built-in section templates, one module per family.

mod comparison;
mod contact;
mod cta;
mod faq;
mod features;
mod generic;
mod hero;
mod logos;
mod newsletter;
mod pricing;
mod process;
mod stats;
mod team;
mod testimonials;
mod video;

pub use comparison::ComparisonTemplate;
pub use contact::ContactTemplate;
pub use cta::CtaTemplate;
pub use faq::FaqTemplate;
pub use features::FeaturesTemplate;
pub use generic::GenericTemplate;
pub use hero::HeroTemplate;
pub use logos::LogosTemplate;
pub use newsletter::NewsletterTemplate;
pub use pricing::PricingTemplate;
pub use process::ProcessTemplate;
pub use stats::StatsTemplate;
pub use team::TeamTemplate;
pub use testimonials::TestimonialsTemplate;
pub use video::VideoTemplate;

use crate::markup::{el, lit, text, Attr, Node};
use crate::props::Props;

/// Tailwind color names accepted for `colorScheme`.
pub const PALETTE: &[&str] = &[
    "blue", "indigo", "purple", "pink", "red", "orange", "green", "teal", "gray",
];

/// Validated palette color; schemes like `blue-purple` use their first color.
pub(crate) fn palette_color(props: &Props<'_>) -> &'static str {
    props
        .text("colorScheme")
        .map(|s| s.trim().to_ascii_lowercase())
        .and_then(|scheme| {
            let first = scheme.split('-').next().unwrap_or_default().to_string();
            PALETTE.iter().find(|c| **c == first).copied()
        })
        .unwrap_or("blue")
}

/// Requested grid column count snapped to 2..=4, defaulting to 3.
pub(crate) fn grid_columns(requested: Option<f64>) -> usize {
    match requested {
        Some(n) if n.is_finite() => n.round().clamp(2.0, 4.0) as usize,
        _ => 3,
    }
}

/// Column count for a collection of `count` items, at most `max`.
pub(crate) fn fit_columns(count: usize, max: usize) -> usize {
    count.clamp(1, max)
}

/// `<section>` with a single container `<div>`.
pub(crate) fn section(class: impl Into<String>, container: impl Into<String>, children: Vec<Node>) -> Node {
    el("section")
        .class(class)
        .child(el("div").class(container).children(children))
        .into()
}

/// Heading bound to `props.title`, when present.
pub(crate) fn title(props: &Props<'_>, tag: &'static str, class: &str) -> Option<Node> {
    props
        .has_text("title")
        .then(|| el(tag).class(class).child(text("props.title")).into())
}

/// Paragraph bound to `props.description`, when present.
pub(crate) fn description(props: &Props<'_>, class: &str) -> Option<Node> {
    props
        .has_text("description")
        .then(|| el("p").class(class).child(text("props.description")).into())
}

/// Muted paragraph shown in place of an empty collection.
pub(crate) fn placeholder(message: &str) -> Node {
    el("p").class("text-center text-gray-500").child(lit(message)).into()
}

/// A labelled link, or a plain button when there is no usable link.
pub(crate) fn action(label: &'static str, href: Option<&'static str>, class: &str) -> Node {
    match href {
        Some(href) => el("a")
            .attr("href", Attr::Url(href))
            .class(class)
            .child(text(label))
            .into(),
        None => el("button")
            .attr("type", Attr::fixed("button"))
            .class(class)
            .child(text(label))
            .into(),
    }
}

/// Primary call to action: `primaryButton.text`, else `ctaText`.
pub(crate) fn primary_action(props: &Props<'_>, class: &str) -> Option<Node> {
    if let Some(button) = props.object("primaryButton").filter(|b| b.has_text("text")) {
        let href = safe_link(&button, "link").then_some("props.primaryButton.link");
        return Some(action("props.primaryButton.text", href, class));
    }
    if props.has_text("ctaText") {
        let href = safe_link(props, "ctaLink").then_some("props.ctaLink");
        return Some(action("props.ctaText", href, class));
    }
    None
}

/// Secondary call to action from `secondaryButton.text`.
pub(crate) fn secondary_action(props: &Props<'_>, class: &str) -> Option<Node> {
    let button = props.object("secondaryButton").filter(|b| b.has_text("text"))?;
    let href = safe_link(&button, "link").then_some("props.secondaryButton.link");
    Some(action("props.secondaryButton.text", href, class))
}

/// Whether `key` holds an http(s) URL.
pub(crate) fn safe_link(props: &Props<'_>, key: &str) -> bool {
    props
        .get(key)
        .and_then(|v| v.as_str())
        .is_some_and(crate::markup::is_safe_url)
}

/// Non-empty list under one of the alias keys.
pub(crate) fn items<'a>(props: &Props<'a>, keys: &[&'static str]) -> Option<(&'static str, &'a [serde_json::Value])> {
    props
        .first_list(keys)
        .filter(|(_, items)| !items.is_empty())
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn palette_is_validated() {
        let value = json!({ "colorScheme": "green-teal" });
        assert_eq!(palette_color(&Props::new(&value)), "green");

        let value = json!({ "colorScheme": "x\" onload=\"alert(1)" });
        assert_eq!(palette_color(&Props::new(&value)), "blue");

        let value = json!({});
        assert_eq!(palette_color(&Props::new(&value)), "blue");
    }

    #[test]
    fn grid_columns_snap_to_supported_values() {
        assert_eq!(grid_columns(None), 3);
        assert_eq!(grid_columns(Some(1.0)), 2);
        assert_eq!(grid_columns(Some(4.4)), 4);
        assert_eq!(grid_columns(Some(12.0)), 4);
        assert_eq!(grid_columns(Some(f64::NAN)), 3);
    }

    #[test]
    fn fit_columns_clamps() {
        assert_eq!(fit_columns(0, 4), 1);
        assert_eq!(fit_columns(2, 4), 2);
        assert_eq!(fit_columns(9, 3), 3);
    }

    #[test]
    fn primary_action_prefers_button_object() {
        let value = json!({
            "primaryButton": { "text": "Start", "link": "https://x.dev" },
            "ctaText": "Other"
        });
        let node = primary_action(&Props::new(&value), "btn").unwrap();
        let html = crate::markup::render_html(&node, &value);

        assert_eq!(html, r#"<a class="btn" href="https://x.dev">Start</a>"#);
    }

    #[test]
    fn unsafe_links_become_buttons() {
        let value = json!({ "ctaText": "Go", "ctaLink": "javascript:void(0)" });
        let node = primary_action(&Props::new(&value), "btn").unwrap();
        let html = crate::markup::render_html(&node, &value);

        assert_eq!(html, r#"<button class="btn" type="button">Go</button>"#);
    }
}

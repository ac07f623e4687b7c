use crate::markup::{el, lit, Node};
use crate::props::Props;
use crate::traits::SectionTemplate;

use super::section;

/// Fallback for kinds without a template: shows the kind and its raw props.
pub struct GenericTemplate;

impl SectionTemplate for GenericTemplate {
    fn family(&self) -> &'static str {
        "generic"
    }

    fn build(&self, kind: &str, props: &Props<'_>) -> Node {
        let data = props
            .map()
            .map(|map| serde_json::to_string_pretty(map).unwrap_or_else(|_| "{}".to_string()))
            .unwrap_or_else(|| "{}".to_string());

        section(
            "py-16 px-4",
            "max-w-6xl mx-auto",
            vec![
                el("p")
                    .class("text-sm font-semibold text-gray-500 mb-4")
                    .child(lit(format!("Unsupported section: {}", kind)))
                    .into(),
                el("pre")
                    .class("p-4 bg-gray-100 rounded-lg overflow-x-auto text-sm")
                    .child(lit(data))
                    .into(),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::assert_jsx_parses;
    use serde_json::json;

    #[test]
    fn shows_kind_and_props() {
        let props = json!({ "headline": "<b>hi</b>", "n": 2 });

        let body = assert_jsx_parses(&GenericTemplate, "Marquee", &props);
        let html = GenericTemplate.html("Marquee", &props);

        assert!(body.contains("Unsupported section: Marquee"));
        assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"));
        assert!(html.contains("&quot;n&quot;: 2"));
    }

    #[test]
    fn hostile_kind_is_escaped() {
        let kind = "</pre><script>alert(1)</script>";

        let body = assert_jsx_parses(&GenericTemplate, kind, &json!({}));
        let html = GenericTemplate.html(kind, &json!({}));

        assert!(!html.contains("<script>"));
        assert!(body.contains(r#"{"Unsupported section: </pre><script>alert(1)</script>"}"#));
    }
}

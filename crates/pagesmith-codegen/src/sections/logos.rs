use crate::markup::{each, el, text, unless, when, Attr, Node};
use crate::props::Props;
use crate::traits::SectionTemplate;

use super::{items, placeholder, section, title};

const BACKGROUNDS: &[(&str, &str)] = &[
    ("light", "bg-white"),
    ("gray", "bg-gray-50"),
    ("dark", "bg-gray-900"),
];

/// Row of partner or customer logos; entries without an image show their name.
pub struct LogosTemplate;

impl SectionTemplate for LogosTemplate {
    fn family(&self) -> &'static str {
        "logos"
    }

    fn build(&self, _kind: &str, props: &Props<'_>) -> Node {
        let scheme = props.text("colorScheme").unwrap_or_default();
        let background = BACKGROUNDS
            .iter()
            .find(|(name, _)| *name == scheme.trim())
            .map(|(_, class)| *class)
            .unwrap_or("bg-white");
        let heading = if background == "bg-gray-900" {
            "text-2xl font-semibold text-center text-white mb-12"
        } else {
            "text-2xl font-semibold text-center text-gray-700 mb-12"
        };

        let mut children: Vec<Node> = Vec::new();
        children.extend(title(props, "h3", heading));

        children.push(match items(props, &["logos"]) {
            None => placeholder("No logos yet."),
            Some(_) => el("div")
                .class("grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-8 items-center")
                .child(each(
                    "props.logos",
                    "logo",
                    el("div")
                        .class("flex items-center justify-center p-4")
                        .child(when(
                            "logo.url",
                            el("img")
                                .attr("src", Attr::Url("logo.url"))
                                .attr("alt", Attr::bind_or("logo.name", ""))
                                .class("h-12 w-auto object-contain grayscale opacity-60 hover:opacity-100"),
                        ))
                        .child(unless(
                            "logo.url",
                            el("span")
                                .class("text-lg font-semibold text-gray-400")
                                .child(text("logo.name")),
                        )),
                ))
                .into(),
        });

        section(format!("py-12 px-4 {}", background), "max-w-6xl mx-auto", children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::assert_jsx_parses;
    use serde_json::json;

    #[test]
    fn image_or_name_per_logo() {
        let props = json!({
            "title": "Trusted by",
            "colorScheme": "dark",
            "logos": [
                { "name": "Acme", "url": "https://x.dev/acme.svg" },
                { "name": "Globex" }
            ]
        });

        let body = assert_jsx_parses(&LogosTemplate, "LogoCloud", &props);
        let html = LogosTemplate.html("LogoCloud", &props);

        assert!(body.contains("{!logo.url && ("));
        assert!(html.contains(r#"src="https://x.dev/acme.svg" alt="Acme""#));
        assert!(html.contains(">Globex</span>"));
        assert!(!html.contains(">Acme</span>"));
        assert!(html.contains("bg-gray-900"));
    }

    #[test]
    fn empty_parses() {
        assert_jsx_parses(&LogosTemplate, "LogoCloud", &json!({}));
    }
}

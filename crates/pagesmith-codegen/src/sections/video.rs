use crate::markup::{el, Attr, Node};
use crate::props::Props;
use crate::traits::SectionTemplate;

use super::{description, placeholder, safe_link, section, title};

/// Embedded video, or its thumbnail when no embeddable URL is set.
pub struct VideoTemplate;

impl SectionTemplate for VideoTemplate {
    fn family(&self) -> &'static str {
        "video"
    }

    fn build(&self, _kind: &str, props: &Props<'_>) -> Node {
        let mut children: Vec<Node> = Vec::new();
        children.extend(title(props, "h2", "text-3xl font-bold text-white text-center mb-4"));
        children.extend(description(props, "text-lg text-gray-300 text-center mb-12"));

        let frame = el("div").class("aspect-video rounded-xl overflow-hidden shadow-2xl");
        children.push(if safe_link(props, "videoUrl") {
            frame
                .child(
                    el("iframe")
                        .attr("src", Attr::Url("props.videoUrl"))
                        .attr("title", Attr::bind_or("props.title", "Video"))
                        .attr("allowFullScreen", Attr::Present)
                        .class("w-full h-full"),
                )
                .into()
        } else if safe_link(props, "thumbnail") {
            frame
                .child(
                    el("img")
                        .attr("src", Attr::Url("props.thumbnail"))
                        .attr("alt", Attr::bind_or("props.title", "Video"))
                        .class("w-full h-full object-cover"),
                )
                .into()
        } else {
            placeholder("Video coming soon.")
        });

        section("py-20 px-4 bg-gray-900", "max-w-4xl mx-auto", children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::assert_jsx_parses;
    use serde_json::json;

    #[test]
    fn embeds_http_video() {
        let props = json!({ "title": "Demo", "videoUrl": "https://www.youtube.com/embed/abc" });

        let body = assert_jsx_parses(&VideoTemplate, "VideoSection", &props);
        let html = VideoTemplate.html("VideoSection", &props);

        assert!(body.contains("src={props.videoUrl}"));
        assert!(body.contains("allowFullScreen"));
        assert!(html.contains(r#"src="https://www.youtube.com/embed/abc" title="Demo" allowfullscreen></iframe>"#));
    }

    #[test]
    fn refuses_script_urls() {
        let props = json!({ "videoUrl": "javascript:alert(1)" });

        let html = VideoTemplate.html("VideoSection", &props);

        assert!(!html.contains("iframe"));
        assert!(html.contains("Video coming soon."));
    }

    #[test]
    fn thumbnail_fallback_parses() {
        let props = json!({ "thumbnail": "https://x.dev/t.jpg" });
        let body = assert_jsx_parses(&VideoTemplate, "VideoSection", &props);
        assert!(body.contains(r#"alt="Video""#));
    }
}

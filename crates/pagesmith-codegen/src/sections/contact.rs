use crate::markup::{each, el, lit, text, text_or, Attr, Element, Node};
use crate::props::Props;
use crate::traits::SectionTemplate;

use super::{description, items, section, title};

const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700 mb-2";
const INPUT_CLASS: &str =
    "w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500";

/// Fields used when the design does not list any.
const DEFAULT_FIELDS: &[(&str, &str, &str)] = &[
    ("name", "Name", "text"),
    ("email", "Email", "email"),
    ("message", "Message", "text"),
];

/// Contact form built from `fields`, or a name/email/message default.
pub struct ContactTemplate;

fn field_row() -> Element {
    el("div")
        .child(el("label").class(LABEL_CLASS).child(text("field.label")))
        .child(
            el("input")
                .attr("type", Attr::InputType("field.type"))
                .attr("name", Attr::bind("field.name"))
                .attr("placeholder", Attr::bind("field.placeholder"))
                .attr("required", Attr::Flag("field.required"))
                .class(INPUT_CLASS),
        )
}

fn default_row(name: &str, label: &str, kind: &str) -> Node {
    el("div")
        .child(el("label").class(LABEL_CLASS).child(lit(label)))
        .child(
            el("input")
                .attr("type", Attr::fixed(kind))
                .attr("name", Attr::fixed(name))
                .attr("required", Attr::Present)
                .class(INPUT_CLASS),
        )
        .into()
}

impl SectionTemplate for ContactTemplate {
    fn family(&self) -> &'static str {
        "contact"
    }

    fn build(&self, _kind: &str, props: &Props<'_>) -> Node {
        let mut children: Vec<Node> = Vec::new();
        children.extend(title(props, "h2", "text-3xl font-bold text-center mb-4"));
        children.extend(description(props, "text-lg text-gray-600 text-center mb-12"));

        let fields: Vec<Node> = match items(props, &["fields"]) {
            Some(_) => vec![each("props.fields", "field", field_row())],
            None => DEFAULT_FIELDS
                .iter()
                .map(|(name, label, kind)| default_row(name, label, kind))
                .collect(),
        };

        children.push(
            el("form")
                .class("space-y-6 max-w-xl mx-auto bg-white p-8 rounded-xl shadow-lg")
                .attr("action", Attr::fixed("#"))
                .children(fields)
                .child(
                    el("button")
                        .attr("type", Attr::fixed("submit"))
                        .class("w-full py-3 bg-blue-600 text-white rounded-lg font-semibold hover:bg-blue-700")
                        .child(text_or("props.buttonText", "Send Message")),
                )
                .into(),
        );

        section("py-16 px-4 bg-gray-50", "max-w-6xl mx-auto", children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::assert_jsx_parses;
    use serde_json::json;

    #[test]
    fn renders_listed_fields_with_validated_types() {
        let props = json!({
            "title": "Talk to us",
            "fields": [
                { "name": "email", "label": "Email", "type": "email", "required": true },
                { "name": "site", "label": "Site", "type": "javascript" }
            ]
        });

        let body = assert_jsx_parses(&ContactTemplate, "ContactForm", &props);
        let html = ContactTemplate.html("ContactForm", &props);

        assert!(body.contains(r#".includes(String(field.type ?? "").trim().toLowerCase())"#));
        assert!(!body.contains(r#"field.type || "text""#));
        assert!(body.contains("required={Boolean(field.required)}"));
        assert!(html.contains(r#"type="email" name="email" required>"#));
        assert!(html.contains(r#"type="text" name="site">"#));
    }

    #[test]
    fn falls_back_to_default_fields() {
        let body = assert_jsx_parses(&ContactTemplate, "ContactForm", &json!({}));
        let html = ContactTemplate.html("ContactForm", &json!({}));

        assert!(!body.contains("props.fields"));
        assert_eq!(html.matches("<input").count(), 3);
        assert!(html.contains(">Send Message</button>"));
    }
}

use crate::markup::{each, el, text, Node};
use crate::props::Props;
use crate::traits::SectionTemplate;

use super::{description, items, placeholder, section, title};

/// Question/answer list using native disclosure elements.
///
/// Entries are read from `questions`, falling back to `faqs`.
pub struct FaqTemplate;

impl SectionTemplate for FaqTemplate {
    fn family(&self) -> &'static str {
        "faq"
    }

    fn build(&self, _kind: &str, props: &Props<'_>) -> Node {
        let mut children: Vec<Node> = Vec::new();
        children.extend(title(props, "h2", "text-3xl font-bold text-center mb-4"));
        children.extend(description(props, "text-lg text-gray-600 text-center mb-12"));

        children.push(match items(props, &["questions", "faqs"]) {
            None => placeholder("No questions yet."),
            Some((key, _)) => {
                let path = if key == "questions" { "props.questions" } else { "props.faqs" };
                el("div")
                    .class("space-y-4")
                    .child(each(
                        path,
                        "item",
                        el("details")
                            .class("border border-gray-200 rounded-lg p-4")
                            .child(
                                el("summary")
                                    .class("font-semibold cursor-pointer")
                                    .child(text("item.question")),
                            )
                            .child(el("p").class("mt-3 text-gray-600").child(text("item.answer"))),
                    ))
                    .into()
            }
        });

        section("py-16 px-4", "max-w-3xl mx-auto", children)
    }
}

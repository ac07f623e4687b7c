//! Element trees rendered either to JSX or to static HTML.
//!
//! A section template describes its markup once as a [`Node`] tree whose
//! dynamic parts are dotted paths. Paths rooted at `props` are resolved at
//! generation time: JSX only references a prop that exists in the instance
//! data, so the inferred props interface always declares it. Paths rooted at
//! a loop variable are emitted as runtime expressions in JSX and resolved
//! against the concrete item in HTML.

use serde_json::Value;

use crate::literal::{html_escape, js_string, jsx_text};

const VOID_TAGS: &[&str] = &["img", "input", "br", "hr"];

/// Input types accepted for generated form fields.
pub const INPUT_TYPES: &[&str] = &["text", "email", "tel", "url", "number"];

/// A markup node.
#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    /// Scalar bound to a path, with optional literal fallback
    Text {
        path: &'static str,
        fallback: Option<String>,
    },
    Literal(String),
    /// Repeat `body` for every item of the list at `list`
    Each {
        list: &'static str,
        item: &'static str,
        body: Element,
    },
    /// Render `body` when the value at `test` is truthy (falsy if `negate`)
    When {
        test: &'static str,
        negate: bool,
        body: Box<Node>,
    },
    /// Check mark or cross depending on truthiness
    Check(&'static str),
    /// Star rating clamped to 0..=5
    Stars(&'static str),
    /// One-based position of the current `item`
    Ordinal(&'static str),
}

/// Attribute value.
#[derive(Debug, Clone)]
pub enum Attr {
    Fixed(String),
    /// String bound to a path, with optional literal fallback
    Bind {
        path: &'static str,
        fallback: Option<String>,
    },
    /// http(s) URL bound to a path
    Url(&'static str),
    /// Boolean attribute present when the path is truthy
    Flag(&'static str),
    /// Boolean attribute that is always present
    Present,
    /// `<input type>` restricted to [`INPUT_TYPES`]
    InputType(&'static str),
}

impl Attr {
    pub fn fixed(value: impl Into<String>) -> Self {
        Self::Fixed(value.into())
    }

    pub fn bind(path: &'static str) -> Self {
        Self::Bind {
            path,
            fallback: None,
        }
    }

    pub fn bind_or(path: &'static str, fallback: &str) -> Self {
        Self::Bind {
            path,
            fallback: Some(fallback.to_string()),
        }
    }
}

/// An element with static classes.
#[derive(Debug, Clone)]
pub struct Element {
    tag: &'static str,
    class: String,
    class_if: Option<(&'static str, &'static str)>,
    attrs: Vec<(&'static str, Attr)>,
    children: Vec<Node>,
}

impl Element {
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Extra classes applied when the value at `test` is truthy.
    pub fn class_if(mut self, test: &'static str, extra: &'static str) -> Self {
        self.class_if = Some((test, extra));
        self
    }

    pub fn attr(mut self, name: &'static str, value: Attr) -> Self {
        self.attrs.push((name, value));
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    fn is_inline(&self) -> bool {
        self.children.iter().all(Node::is_leaf)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    fn is_leaf(&self) -> bool {
        matches!(
            self,
            Node::Text { .. } | Node::Literal(_) | Node::Check(_) | Node::Stars(_) | Node::Ordinal(_)
        )
    }
}

pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        class: String::new(),
        class_if: None,
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

pub fn text(path: &'static str) -> Node {
    Node::Text {
        path,
        fallback: None,
    }
}

pub fn text_or(path: &'static str, fallback: &str) -> Node {
    Node::Text {
        path,
        fallback: Some(fallback.to_string()),
    }
}

pub fn lit(s: impl Into<String>) -> Node {
    Node::Literal(s.into())
}

pub fn each(list: &'static str, item: &'static str, body: Element) -> Node {
    Node::Each { list, item, body }
}

pub fn when(test: &'static str, body: impl Into<Node>) -> Node {
    Node::When {
        test,
        negate: false,
        body: Box::new(body.into()),
    }
}

pub fn unless(test: &'static str, body: impl Into<Node>) -> Node {
    Node::When {
        test,
        negate: true,
        body: Box::new(body.into()),
    }
}

/// Whether a URL may be embedded in generated markup.
pub fn is_safe_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}

/// Render a tree as JSX, starting at indentation level zero.
pub fn render_jsx(node: &Node, props: &Value) -> String {
    let mut out = Vec::new();
    Jsx { props }.node(node, 0, &mut out);
    out.join("\n")
}

/// Render a tree as static HTML, starting at indentation level zero.
pub fn render_html(node: &Node, props: &Value) -> String {
    let mut out = Vec::new();
    let mut scope = Vec::new();
    Html { props }.node(node, &mut scope, 0, &mut out);
    out.join("\n")
}

enum Binding<'v> {
    Static(Option<&'v Value>),
    Runtime,
}

fn bind<'v>(path: &str, props: &'v Value) -> Binding<'v> {
    let mut segments = path.split('.');
    match segments.next() {
        Some("props") => Binding::Static(walk(props, segments)),
        _ => Binding::Runtime,
    }
}

fn walk<'v, 's>(mut value: &'v Value, segments: impl Iterator<Item = &'s str>) -> Option<&'v Value> {
    for segment in segments {
        value = value.as_object()?.get(segment)?;
    }
    Some(value)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn non_blank_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.trim().is_empty())
}

fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn star_count(value: Option<&Value>) -> usize {
    let rating = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    };
    if rating.is_finite() {
        rating.round().clamp(0.0, 5.0) as usize
    } else {
        0
    }
}

fn input_type(value: Option<&Value>) -> &'static str {
    value
        .and_then(Value::as_str)
        .map(|s| s.trim().to_ascii_lowercase())
        .and_then(|s| INPUT_TYPES.iter().find(|t| **t == s).copied())
        .unwrap_or("text")
}

/// JS expression mirroring [`input_type`] for a value only known at runtime.
fn runtime_input_type(path: &str) -> String {
    let allowed: Vec<String> = INPUT_TYPES.iter().map(|t| js_string(t)).collect();
    let normalized = format!("String({} ?? \"\").trim().toLowerCase()", path);
    format!(
        "[{}].includes({n}) ? {n} : \"text\"",
        allowed.join(", "),
        n = normalized
    )
}

fn join_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if base.is_empty() => extra.to_string(),
        Some(extra) => format!("{} {}", base, extra),
        None => base.to_string(),
    }
}

fn line(depth: usize, content: &str) -> String {
    format!("{}{}", "  ".repeat(depth), content)
}

/// Literal text as a JSX child: bare when it is plain, an expression otherwise.
fn jsx_literal(s: &str) -> String {
    let plain = !s.is_empty()
        && s.trim() == s
        && !s.contains(['{', '}', '<', '>', '&', '"', '\n']);
    if plain {
        s.to_string()
    } else {
        jsx_text(s)
    }
}

fn jsx_attr_string(value: &str) -> String {
    if value.contains(['"', '&']) {
        format!("{{{}}}", js_string(value))
    } else {
        format!("\"{}\"", value)
    }
}

fn html_text(s: &str) -> String {
    html_escape(s).replace('\n', "&#10;")
}

struct Jsx<'v> {
    props: &'v Value,
}

impl<'v> Jsx<'v> {
    fn node(&self, node: &Node, depth: usize, out: &mut Vec<String>) {
        match node {
            Node::Element(element) => self.element(element, None, depth, out),
            Node::Each { list, item, body } => self.each(list, item, body, depth, out),
            Node::When { test, negate, body } => self.when(test, *negate, body, depth, out),
            leaf => {
                let inline = self.inline(leaf);
                if !inline.is_empty() {
                    out.push(line(depth, &inline));
                }
            }
        }
    }

    fn inline(&self, node: &Node) -> String {
        match node {
            Node::Text { path, fallback } => match bind(path, self.props) {
                Binding::Static(value) => match value.and_then(scalar_text) {
                    Some(_) if value.is_some_and(Value::is_boolean) => {
                        format!("{{String({})}}", path)
                    }
                    Some(_) => format!("{{{}}}", path),
                    None => fallback.as_deref().map(jsx_literal).unwrap_or_default(),
                },
                Binding::Runtime => match fallback {
                    Some(fallback) => format!("{{{} || {}}}", path, js_string(fallback)),
                    None => format!("{{{}}}", path),
                },
            },
            Node::Literal(s) => jsx_literal(s),
            Node::Check(path) => match bind(path, self.props) {
                Binding::Static(value) if truthy(value) => "✓".to_string(),
                Binding::Static(_) => "✗".to_string(),
                Binding::Runtime => format!("{{{} ? \"✓\" : \"✗\"}}", path),
            },
            Node::Stars(path) => match bind(path, self.props) {
                Binding::Static(value) => "★".repeat(star_count(value)),
                Binding::Runtime => format!(
                    "{{\"★\".repeat(Math.max(0, Math.min(5, Math.round(Number({}) || 0))))}}",
                    path
                ),
            },
            Node::Ordinal(item) => format!("{{{}Index + 1}}", item),
            Node::Element(_) | Node::Each { .. } | Node::When { .. } => String::new(),
        }
    }

    fn element(&self, element: &Element, key: Option<&str>, depth: usize, out: &mut Vec<String>) {
        let open = self.open_tag(element, key);

        if VOID_TAGS.contains(&element.tag) {
            out.push(line(depth, &format!("{} />", open)));
        } else if element.is_inline() {
            let inner: String = element.children.iter().map(|c| self.inline(c)).collect();
            out.push(line(depth, &format!("{}>{}</{}>", open, inner, element.tag)));
        } else {
            out.push(line(depth, &format!("{}>", open)));
            for child in &element.children {
                self.node(child, depth + 1, out);
            }
            out.push(line(depth, &format!("</{}>", element.tag)));
        }
    }

    fn open_tag(&self, element: &Element, key: Option<&str>) -> String {
        let mut parts = vec![format!("<{}", element.tag)];

        if let Some(key) = key {
            parts.push(format!("key={{{}}}", key));
        }
        if let Some(class) = self.class_attr(element) {
            parts.push(class);
        }
        for (name, attr) in &element.attrs {
            if let Some(rendered) = self.attr(name, attr) {
                parts.push(rendered);
            }
        }

        parts.join(" ")
    }

    fn class_attr(&self, element: &Element) -> Option<String> {
        let class = match element.class_if {
            None => element.class.clone(),
            Some((test, extra)) => match bind(test, self.props) {
                Binding::Static(value) => {
                    join_class(&element.class, truthy(value).then_some(extra))
                }
                Binding::Runtime => {
                    return Some(format!(
                        "className={{`{} ${{{} ? \"{}\" : \"\"}}`}}",
                        element.class, test, extra
                    ));
                }
            },
        };

        (!class.is_empty()).then(|| format!("className=\"{}\"", class))
    }

    fn attr(&self, name: &str, attr: &Attr) -> Option<String> {
        match attr {
            Attr::Fixed(value) => Some(format!("{}={}", name, jsx_attr_string(value))),
            Attr::Bind { path, fallback } => match bind(path, self.props) {
                Binding::Static(value) => match value.and_then(non_blank_str) {
                    Some(_) => Some(format!("{}={{{}}}", name, path)),
                    None => fallback
                        .as_deref()
                        .map(|f| format!("{}={}", name, jsx_attr_string(f))),
                },
                Binding::Runtime => Some(match fallback {
                    Some(fallback) => format!("{}={{{} || {}}}", name, path, js_string(fallback)),
                    None => format!("{}={{{}}}", name, path),
                }),
            },
            Attr::Url(path) => match bind(path, self.props) {
                Binding::Static(value) => value
                    .and_then(Value::as_str)
                    .filter(|url| is_safe_url(url))
                    .map(|_| format!("{}={{{}}}", name, path)),
                Binding::Runtime => Some(format!("{}={{{}}}", name, path)),
            },
            Attr::Flag(path) => match bind(path, self.props) {
                Binding::Static(value) => truthy(value).then(|| name.to_string()),
                Binding::Runtime => Some(format!("{}={{Boolean({})}}", name, path)),
            },
            Attr::Present => Some(name.to_string()),
            Attr::InputType(path) => match bind(path, self.props) {
                Binding::Static(value) => Some(format!("{}=\"{}\"", name, input_type(value))),
                Binding::Runtime => Some(format!("{}={{{}}}", name, runtime_input_type(path))),
            },
        }
    }

    fn each(&self, list: &str, item: &str, body: &Element, depth: usize, out: &mut Vec<String>) {
        let source = match bind(list, self.props) {
            Binding::Static(value) => match value.and_then(Value::as_array) {
                Some(items) if !items.is_empty() => list.to_string(),
                _ => return,
            },
            Binding::Runtime => format!("({} || [])", list),
        };
        let index = format!("{}Index", item);

        out.push(line(
            depth,
            &format!("{{{}.map(({}: any, {}: number) => (", source, item, index),
        ));
        self.element(body, Some(&index), depth + 1, out);
        out.push(line(depth, "))}"));
    }

    fn when(&self, test: &str, negate: bool, body: &Node, depth: usize, out: &mut Vec<String>) {
        match bind(test, self.props) {
            Binding::Static(value) => {
                if truthy(value) != negate {
                    self.node(body, depth, out);
                }
            }
            Binding::Runtime => {
                let bang = if negate { "!" } else { "" };
                out.push(line(depth, &format!("{{{}{} && (", bang, test)));
                match body {
                    Node::Element(element) => self.element(element, None, depth + 1, out),
                    Node::Each { .. } | Node::When { .. } => {
                        out.push(line(depth + 1, "<>"));
                        self.node(body, depth + 2, out);
                        out.push(line(depth + 1, "</>"));
                    }
                    leaf => out.push(line(depth + 1, &format!("<>{}</>", self.inline(leaf)))),
                }
                out.push(line(depth, ")}"));
            }
        }
    }
}

type Scope<'v> = Vec<(&'static str, &'v Value, usize)>;

struct Html<'v> {
    props: &'v Value,
}

impl<'v> Html<'v> {
    fn resolve(&self, path: &str, scope: &Scope<'v>) -> Option<&'v Value> {
        let mut segments = path.split('.');
        let root = segments.next()?;
        let base = if root == "props" {
            self.props
        } else {
            scope
                .iter()
                .rev()
                .find(|(name, _, _)| *name == root)
                .map(|(_, value, _)| *value)?
        };
        walk(base, segments)
    }

    fn node(&self, node: &Node, scope: &mut Scope<'v>, depth: usize, out: &mut Vec<String>) {
        match node {
            Node::Element(element) => self.element(element, scope, depth, out),
            Node::Each { list, item, body } => {
                if let Some(items) = self.resolve(list, scope).and_then(Value::as_array) {
                    for (index, value) in items.iter().enumerate() {
                        scope.push((*item, value, index));
                        self.element(body, scope, depth, out);
                        scope.pop();
                    }
                }
            }
            Node::When { test, negate, body } => {
                if truthy(self.resolve(test, scope)) != *negate {
                    self.node(body, scope, depth, out);
                }
            }
            leaf => {
                let inline = self.inline(leaf, scope);
                if !inline.is_empty() {
                    out.push(line(depth, &inline));
                }
            }
        }
    }

    fn inline(&self, node: &Node, scope: &Scope<'v>) -> String {
        match node {
            Node::Text { path, fallback } => self
                .resolve(path, scope)
                .and_then(scalar_text)
                .or_else(|| fallback.clone())
                .map(|s| html_text(&s))
                .unwrap_or_default(),
            Node::Literal(s) => html_text(s),
            Node::Check(path) => {
                if truthy(self.resolve(path, scope)) {
                    "✓".to_string()
                } else {
                    "✗".to_string()
                }
            }
            Node::Stars(path) => "★".repeat(star_count(self.resolve(path, scope))),
            Node::Ordinal(item) => scope
                .iter()
                .rev()
                .find(|(name, _, _)| name == item)
                .map(|(_, _, index)| (index + 1).to_string())
                .unwrap_or_default(),
            Node::Element(_) | Node::Each { .. } | Node::When { .. } => String::new(),
        }
    }

    fn element(&self, element: &Element, scope: &mut Scope<'v>, depth: usize, out: &mut Vec<String>) {
        let mut open = format!("<{}", element.tag);

        let extra = element
            .class_if
            .filter(|(test, _)| truthy(self.resolve(test, scope)))
            .map(|(_, extra)| extra);
        let class = join_class(&element.class, extra);
        if !class.is_empty() {
            open.push_str(&format!(" class=\"{}\"", html_escape(&class)));
        }

        for (name, attr) in &element.attrs {
            if let Some(rendered) = self.attr(name, attr, scope) {
                open.push(' ');
                open.push_str(&rendered);
            }
        }

        if VOID_TAGS.contains(&element.tag) {
            out.push(line(depth, &format!("{}>", open)));
        } else if element.is_inline() {
            let inner: String = element
                .children
                .iter()
                .map(|c| self.inline(c, scope))
                .collect();
            out.push(line(depth, &format!("{}>{}</{}>", open, inner, element.tag)));
        } else {
            out.push(line(depth, &format!("{}>", open)));
            for child in &element.children {
                self.node(child, scope, depth + 1, out);
            }
            out.push(line(depth, &format!("</{}>", element.tag)));
        }
    }

    fn attr(&self, name: &str, attr: &Attr, scope: &Scope<'v>) -> Option<String> {
        let name = name.to_ascii_lowercase();
        match attr {
            Attr::Fixed(value) => Some(format!("{}=\"{}\"", name, html_escape(value))),
            Attr::Bind { path, fallback } => self
                .resolve(path, scope)
                .and_then(non_blank_str)
                .map(str::to_string)
                .or_else(|| fallback.clone())
                .map(|value| format!("{}=\"{}\"", name, html_escape(&value))),
            Attr::Url(path) => self
                .resolve(path, scope)
                .and_then(Value::as_str)
                .filter(|url| is_safe_url(url))
                .map(|url| format!("{}=\"{}\"", name, html_escape(url.trim()))),
            Attr::Flag(path) => truthy(self.resolve(path, scope)).then_some(name),
            Attr::Present => Some(name),
            Attr::InputType(path) => Some(format!(
                "{}=\"{}\"",
                name,
                input_type(self.resolve(path, scope))
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn card() -> Node {
        el("div")
            .class("card")
            .child(when("props.title", el("h2").child(text("props.title"))))
            .child(
                el("ul").child(each(
                    "props.items",
                    "item",
                    el("li")
                        .class_if("item.active", "font-bold")
                        .child(text("item.name"))
                        .child(when("item.note", el("em").child(text("item.note")))),
                )),
            )
            .into()
    }

    #[test]
    fn jsx_references_only_present_props() {
        let props = json!({ "items": [{ "name": "a" }] });

        let jsx = render_jsx(&card(), &props);

        assert!(!jsx.contains("props.title"));
        assert!(jsx.contains("props.items.map((item: any, itemIndex: number) => ("));
        assert!(jsx.contains("key={itemIndex}"));
        assert!(jsx.contains(r#"${item.active ? "font-bold" : ""}"#));
        assert!(jsx.contains("{item.note && ("));
    }

    #[test]
    fn jsx_skips_missing_lists() {
        let props = json!({ "title": "Hello" });

        let jsx = render_jsx(&card(), &props);

        assert!(jsx.contains("<h2>{props.title}</h2>"));
        assert!(!jsx.contains(".map("));
    }

    #[test]
    fn html_resolves_items_and_escapes() {
        let props = json!({
            "title": "<Hi>",
            "items": [
                { "name": "one", "active": true },
                { "name": "two & three", "note": "n" }
            ]
        });

        let html = render_html(&card(), &props);

        let expected = r#"<div class="card">
  <h2>&lt;Hi&gt;</h2>
  <ul>
    <li class="font-bold">
      one
    </li>
    <li>
      two &amp; three
      <em>n</em>
    </li>
  </ul>
</div>"#;
        assert_eq!(html, expected);
    }

    #[test]
    fn url_attributes_require_http() {
        let node: Node = el("img").attr("src", Attr::Url("props.src")).into();

        let unsafe_props = json!({ "src": "javascript:alert(1)" });
        assert_eq!(render_html(&node, &unsafe_props), "<img>");
        assert_eq!(render_jsx(&node, &unsafe_props), "<img />");

        let safe_props = json!({ "src": "https://example.com/a.png" });
        assert_eq!(
            render_html(&node, &safe_props),
            r#"<img src="https://example.com/a.png">"#
        );
        assert_eq!(render_jsx(&node, &safe_props), "<img src={props.src} />");
    }

    #[test]
    fn stars_and_checks() {
        let node: Node = el("p")
            .child(Node::Stars("props.rating"))
            .child(Node::Check("props.ok"))
            .into();
        let props = json!({ "rating": 9, "ok": false });

        assert_eq!(render_html(&node, &props), "<p>★★★★★✗</p>");
        assert_eq!(render_jsx(&node, &props), "<p>★★★★★✗</p>");
    }

    #[test]
    fn ordinals_count_from_one() {
        let node = each("props.steps", "step", el("span").child(Node::Ordinal("step")));
        let props = json!({ "steps": ["a", "b"] });

        assert_eq!(render_html(&node, &props), "<span>1</span>\n<span>2</span>");
        assert!(render_jsx(&node, &props).contains("{stepIndex + 1}"));
    }

    #[test]
    fn literal_text_is_escaped_for_both_targets() {
        let node: Node = el("pre").child(lit("{\n  \"a\": \"<b>\"\n}")).into();
        let props = json!({});

        assert_eq!(
            render_html(&node, &props),
            "<pre>{&#10;  &quot;a&quot;: &quot;&lt;b&gt;&quot;&#10;}</pre>"
        );
        assert_eq!(
            render_jsx(&node, &props),
            r#"<pre>{"{\n  \"a\": \"<b>\"\n}"}</pre>"#
        );
    }

    #[test]
    fn input_types_are_validated() {
        let node: Node = el("input").attr("type", Attr::InputType("props.kind")).into();

        assert_eq!(
            render_html(&node, &json!({ "kind": "EMAIL" })),
            r#"<input type="email">"#
        );
        assert_eq!(
            render_html(&node, &json!({ "kind": "\"><script>" })),
            r#"<input type="text">"#
        );
    }

    #[test]
    fn runtime_input_types_are_validated() {
        let node: Node = el("form")
            .child(each(
                "props.fields",
                "field",
                el("input").attr("type", Attr::InputType("field.type")),
            ))
            .into();
        let props = json!({ "fields": [{ "type": "hidden" }, { "type": "Email" }] });

        let jsx = render_jsx(&node, &props);
        assert!(jsx.contains(
            r#"type={["text", "email", "tel", "url", "number"].includes(String(field.type ?? "").trim().toLowerCase()) ? String(field.type ?? "").trim().toLowerCase() : "text"}"#
        ));
        assert!(!jsx.contains(r#"field.type || "text""#));

        let html = render_html(&node, &props);
        assert!(html.contains(r#"<input type="text">"#));
        assert!(html.contains(r#"<input type="email">"#));
    }

    #[test]
    fn boolean_text_renders_as_string() {
        let node: Node = el("h1").child(text("props.headline")).into();
        let props = json!({ "headline": true });

        assert_eq!(render_jsx(&node, &props), "<h1>{String(props.headline)}</h1>");
        assert_eq!(render_html(&node, &props), "<h1>true</h1>");
    }
}

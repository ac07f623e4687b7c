//! Template engine for page shells and project documentation.

use minijinja::{context, Environment};
use serde::Serialize;

/// One section of a static page.
#[derive(Debug, Clone, Serialize)]
pub struct PageSection {
    /// Comment text identifying the section (`HeroSection0 (HeroSection)`)
    pub comment: String,
    /// Escaped, pre-indented section markup
    pub markup: String,
}

/// A component listed in a README.
#[derive(Debug, Clone, Serialize)]
pub struct ReadmeEntry {
    pub name: String,
    pub kind: String,
}

/// Template engine using minijinja.
///
/// Templates whose name ends in `.html` are auto-escaped.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("index.html".to_string(), INDEX_TEMPLATE.to_string())
            .expect("Failed to add index template");

        env.add_template_owned("layout.tsx".to_string(), LAYOUT_TEMPLATE.to_string())
            .expect("Failed to add layout template");

        env.add_template_owned("react-readme.md".to_string(), REACT_README_TEMPLATE.to_string())
            .expect("Failed to add React README template");

        env.add_template_owned("static-readme.md".to_string(), STATIC_README_TEMPLATE.to_string())
            .expect("Failed to add static README template");

        Self { env }
    }

    /// Render `index.html` for a static export.
    pub fn render_index(
        &self,
        title: &str,
        sections: &[PageSection],
        stylesheet: bool,
        comments: bool,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("index.html")?;

        let html = tmpl.render(context! {
            title => title,
            sections => sections,
            stylesheet => stylesheet,
            comments => comments,
        })?;
        Ok(format!("{}\n", html))
    }

    /// Render `app/layout.tsx`; `title_literal` must already be a JS string literal.
    pub fn render_layout(&self, title_literal: &str) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("layout.tsx")?;

        let source = tmpl.render(context! { title => title_literal })?;
        Ok(format!("{}\n", source))
    }

    /// Render the README for either project kind.
    pub fn render_readme(
        &self,
        react: bool,
        project_name: &str,
        components: &[ReadmeEntry],
    ) -> Result<String, minijinja::Error> {
        let name = if react { "react-readme.md" } else { "static-readme.md" };
        let tmpl = self.env.get_template(name)?;

        let readme = tmpl.render(context! {
            project_name => project_name,
            components => components,
            count => components.len(),
        })?;
        Ok(format!("{}\n", readme.trim_end()))
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const INDEX_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }}</title>
  <script src="https://cdn.tailwindcss.com"></script>
{% if stylesheet %}  <link rel="stylesheet" href="styles.css">
{% endif %}</head>
<body class="antialiased">
  <main class="min-h-screen">
{% for section in sections %}{% if comments %}    <!-- {{ section.comment }} -->
{% endif %}{{ section.markup|safe }}
{% endfor %}  </main>
</body>
</html>"##;

const LAYOUT_TEMPLATE: &str = r##"import type { Metadata } from 'next';
import './globals.css';

export const metadata: Metadata = {
  title: {{ title }},
  description: 'Landing page generated by pagesmith',
};

export default function RootLayout({
  children,
}: {
  children: React.ReactNode;
}) {
  return (
    <html lang="en">
      <body>{children}</body>
    </html>
  );
}"##;

const REACT_README_TEMPLATE: &str = r##"# {{ project_name }}

Landing page generated by pagesmith with {{ count }} {{ "section" if count == 1 else "sections" }}.

## Setup

1. Install dependencies:

   ```bash
   npm install
   ```

2. Run the development server:

   ```bash
   npm run dev
   ```

3. Open [http://localhost:3000](http://localhost:3000)

## Components

{% for component in components %}- `components/{{ component.name }}.tsx` ({{ component.kind }})
{% else %}This page has no sections yet.
{% endfor %}
## Build for Production

```bash
npm run build
npm start
```"##;

const STATIC_README_TEMPLATE: &str = r##"# {{ project_name }}

Static landing page generated by pagesmith with {{ count }} {{ "section" if count == 1 else "sections" }}.

## Usage

Open `index.html` in a browser. Styling is loaded from the Tailwind CDN, so no
build step is needed.

## Sections

{% for component in components %}- {{ component.name }} ({{ component.kind }})
{% else %}This page has no sections yet.
{% endfor %}"##;

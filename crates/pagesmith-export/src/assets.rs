//! Style sheets and build configuration files for generated projects.

/// Static assets shared by the assemblers.
pub struct StyleAssets;

impl StyleAssets {
    /// `app/globals.css`; Tailwind directives are only emitted when the
    /// project ships a Tailwind configuration.
    pub fn globals_css(tailwind: bool) -> String {
        if tailwind {
            format!("{}\n{}", TAILWIND_DIRECTIVES, BASE_CSS)
        } else {
            BASE_CSS.to_string()
        }
    }

    /// `styles.css` for static pages; Tailwind itself comes from the CDN.
    pub fn static_css() -> String {
        BASE_CSS.to_string()
    }

    pub fn tailwind_config() -> String {
        TAILWIND_CONFIG.to_string()
    }

    pub fn postcss_config() -> String {
        POSTCSS_CONFIG.to_string()
    }

    pub fn tsconfig() -> String {
        TSCONFIG.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }

    /// Minify when requested, keeping the readable sheet if minification fails.
    pub fn finish_css(css: String, minify: bool) -> String {
        if !minify {
            return css;
        }
        match Self::minify_css(&css) {
            Ok(minified) => format!("{}\n", minified),
            Err(e) => {
                tracing::warn!("Keeping unminified CSS: {}", e);
                css
            }
        }
    }
}

const TAILWIND_DIRECTIVES: &str = "@tailwind base;
@tailwind components;
@tailwind utilities;
";

const BASE_CSS: &str = r#"html {
  scroll-behavior: smooth;
}

body {
  margin: 0;
  font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
  line-height: 1.5;
  -webkit-font-smoothing: antialiased;
}

img {
  max-width: 100%;
  height: auto;
}
"#;

const TAILWIND_CONFIG: &str = r#"/** @type {import('tailwindcss').Config} */
module.exports = {
  content: [
    './app/**/*.{js,ts,jsx,tsx,mdx}',
    './components/**/*.{js,ts,jsx,tsx,mdx}',
  ],
  theme: {
    extend: {},
  },
  plugins: [],
};
"#;

const POSTCSS_CONFIG: &str = r#"module.exports = {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
};
"#;

const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ES2017",
    "lib": ["dom", "dom.iterable", "esnext"],
    "allowJs": true,
    "skipLibCheck": true,
    "strict": true,
    "noEmit": true,
    "esModuleInterop": true,
    "module": "esnext",
    "moduleResolution": "bundler",
    "resolveJsonModule": true,
    "isolatedModules": true,
    "jsx": "preserve",
    "incremental": true,
    "plugins": [{ "name": "next" }],
    "paths": {
      "@/*": ["./*"]
    }
  },
  "include": ["next-env.d.ts", "**/*.ts", "**/*.tsx", ".next/types/**/*.ts"],
  "exclude": ["node_modules"]
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn globals_include_tailwind_only_when_requested() {
        assert!(StyleAssets::globals_css(true).starts_with("@tailwind base;"));
        assert!(!StyleAssets::globals_css(false).contains("@tailwind"));
    }

    #[test]
    fn minifies_css() {
        let css = "body {\n  margin: 0;\n  color: #ff0000;\n}\n";

        let minified = StyleAssets::minify_css(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.starts_with("body{"));
        assert!(minified.len() < css.len());
    }

    #[test]
    fn finish_css_keeps_readable_sheet_when_not_minifying() {
        let css = StyleAssets::static_css();
        assert_eq!(StyleAssets::finish_css(css.clone(), false), css);
    }

    #[test]
    fn tsconfig_is_json() {
        let parsed: serde_json::Value = serde_json::from_str(&StyleAssets::tsconfig()).unwrap();
        assert_eq!(parsed["compilerOptions"]["jsx"], "preserve");
    }
}

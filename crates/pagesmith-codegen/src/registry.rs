//! Template registry mapping section kinds to their templates.
//!
//! Lookup is total: kinds without a registered template resolve to the
//! generic fallback, so an unknown kind never aborts an export.

use std::collections::HashMap;
use std::sync::Arc;

use crate::sections::{
    ComparisonTemplate, ContactTemplate, CtaTemplate, FaqTemplate, FeaturesTemplate,
    GenericTemplate, HeroTemplate, LogosTemplate, NewsletterTemplate, PricingTemplate,
    ProcessTemplate, StatsTemplate, TeamTemplate, TestimonialsTemplate, VideoTemplate,
};
use crate::traits::SectionTemplate;

/// Built-in section kinds and the family each belongs to.
pub const CATALOG: &[(&str, &str)] = &[
    ("HeroSection", "hero"),
    ("HeroSplit", "hero"),
    ("FeatureGrid", "features"),
    ("FeatureList", "features"),
    ("PricingTable", "pricing"),
    ("PricingCompact", "pricing"),
    ("CallToAction", "cta"),
    ("CTABanner", "cta"),
    ("Testimonials", "testimonials"),
    ("FAQ", "faq"),
    ("Stats", "stats"),
    ("StatsMinimal", "stats"),
    ("LogoCloud", "logos"),
    ("Newsletter", "newsletter"),
    ("ContactForm", "contact"),
    ("Team", "team"),
    ("VideoSection", "video"),
    ("ComparisonTable", "comparison"),
    ("Process", "process"),
];

fn builtin(kind: &str) -> Option<Arc<dyn SectionTemplate>> {
    let template: Arc<dyn SectionTemplate> = match kind {
        "HeroSection" => Arc::new(HeroTemplate::centered()),
        "HeroSplit" => Arc::new(HeroTemplate::split()),
        "FeatureGrid" => Arc::new(FeaturesTemplate::grid()),
        "FeatureList" => Arc::new(FeaturesTemplate::list()),
        "PricingTable" => Arc::new(PricingTemplate::cards()),
        "PricingCompact" => Arc::new(PricingTemplate::compact()),
        "CallToAction" => Arc::new(CtaTemplate::block()),
        "CTABanner" => Arc::new(CtaTemplate::banner()),
        "Testimonials" => Arc::new(TestimonialsTemplate),
        "FAQ" => Arc::new(FaqTemplate),
        "Stats" => Arc::new(StatsTemplate::cards()),
        "StatsMinimal" => Arc::new(StatsTemplate::minimal()),
        "LogoCloud" => Arc::new(LogosTemplate),
        "Newsletter" => Arc::new(NewsletterTemplate),
        "ContactForm" => Arc::new(ContactTemplate),
        "Team" => Arc::new(TeamTemplate),
        "VideoSection" => Arc::new(VideoTemplate),
        "ComparisonTable" => Arc::new(ComparisonTemplate),
        "Process" => Arc::new(ProcessTemplate),
        _ => return None,
    };
    Some(template)
}

/// Registry of section templates keyed by kind (case-insensitive).
#[derive(Clone)]
pub struct TemplateRegistry {
    /// Templates by lowercase kind
    templates: HashMap<String, (String, Arc<dyn SectionTemplate>)>,

    fallback: Arc<dyn SectionTemplate>,
}

impl TemplateRegistry {
    /// Create a registry holding the built-in catalog.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for (kind, _) in CATALOG {
            if let Some(template) = builtin(kind) {
                registry.register(kind, template);
            }
        }
        registry
    }

    /// Create a registry with no templates; every kind resolves to the fallback.
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
            fallback: Arc::new(GenericTemplate),
        }
    }

    /// Register or replace the template for a kind.
    pub fn register(&mut self, kind: &str, template: Arc<dyn SectionTemplate>) {
        self.templates
            .insert(kind.to_lowercase(), (kind.to_string(), template));
    }

    /// Template for a kind, falling back to the generic template.
    pub fn resolve(&self, kind: &str) -> &dyn SectionTemplate {
        self.templates
            .get(&kind.to_lowercase())
            .map(|(_, template)| template.as_ref())
            .unwrap_or(self.fallback.as_ref())
    }

    /// Check if a kind has a dedicated template.
    pub fn contains(&self, kind: &str) -> bool {
        self.templates.contains_key(&kind.to_lowercase())
    }

    /// All registered kind names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .templates
            .values()
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRegistry")
            .field("kinds", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{el, Node};
    use crate::props::Props;
    use serde_json::json;

    #[test]
    fn catalog_is_fully_registered() {
        let registry = TemplateRegistry::new();

        for (kind, family) in CATALOG {
            assert!(registry.contains(kind), "{} missing", kind);
            assert_eq!(registry.resolve(kind).family(), *family);
        }
        assert_eq!(registry.names().len(), CATALOG.len());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let registry = TemplateRegistry::new();

        assert!(registry.contains("herosection"));
        assert_eq!(registry.resolve("faq").family(), "faq");
    }

    #[test]
    fn unknown_kind_falls_back_to_generic() {
        let registry = TemplateRegistry::new();

        assert!(!registry.contains("Marquee"));
        assert_eq!(registry.resolve("Marquee").family(), "generic");
        assert_eq!(registry.resolve("").family(), "generic");
    }

    struct Banner;

    impl SectionTemplate for Banner {
        fn family(&self) -> &'static str {
            "banner"
        }

        fn build(&self, _kind: &str, _props: &Props<'_>) -> Node {
            el("aside").into()
        }
    }

    #[test]
    fn custom_templates_can_be_registered() {
        let mut registry = TemplateRegistry::new();
        registry.register("Banner", Arc::new(Banner));

        assert_eq!(registry.resolve("banner").family(), "banner");
        assert_eq!(registry.resolve("Banner").html("Banner", &json!({})), "<aside></aside>");
    }

    #[test]
    fn every_builtin_renders_with_empty_props() {
        let registry = TemplateRegistry::new();

        for (kind, _) in CATALOG {
            let template = registry.resolve(kind);
            assert!(template.jsx(kind, &json!({})).starts_with("  return ("));
            assert!(template.html(kind, &json!({})).starts_with("<section"));
        }
    }
}

//! Static site catalog: the testimonials, experts, services, FAQ entries and
//! stats shown on the page. The records are embedded at build time and loaded
//! once at startup; nothing in here mutates after that.

use serde::Deserialize;
use shared::domain::{Expert, FaqItem, Service, ServiceCategory, Stat, Testimonial};
use thiserror::Error;

const CATALOG_JSON: &str = include_str!("../data/catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed embedded catalog: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("{collection} collection is empty")]
    EmptyCollection { collection: &'static str },
    #[error("duplicate id {id} in {collection}")]
    DuplicateId { collection: &'static str, id: i64 },
    #[error("duplicate service slug '{slug}'")]
    DuplicateSlug { slug: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    testimonials: Vec<Testimonial>,
    experts: Vec<Expert>,
    services: Vec<Service>,
    faq: Vec<FaqItem>,
    stats: Vec<Stat>,
}

impl Catalog {
    /// Parses and validates the embedded catalog. The catalog is a build
    /// artifact, so a failure here is a startup error, not user input.
    pub fn load() -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(CATALOG_JSON)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        ensure_unique_ids("testimonials", self.testimonials.iter().map(|t| t.id.0))?;
        ensure_unique_ids("experts", self.experts.iter().map(|e| e.id.0))?;
        ensure_unique_ids("services", self.services.iter().map(|s| s.id.0))?;
        ensure_unique_ids("faq", self.faq.iter().map(|f| f.id.0))?;
        ensure_unique_ids("stats", self.stats.iter().map(|s| s.id.0))?;

        let mut slugs = std::collections::HashSet::new();
        for service in &self.services {
            if !slugs.insert(service.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug {
                    slug: service.slug.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    pub fn experts(&self) -> &[Expert] {
        &self.experts
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn faq(&self) -> &[FaqItem] {
        &self.faq
    }

    pub fn stats(&self) -> &[Stat] {
        &self.stats
    }

    pub fn service_by_slug(&self, slug: &str) -> Option<&Service> {
        self.services.iter().find(|service| service.slug == slug)
    }

    pub fn services_in_category(&self, category: ServiceCategory) -> impl Iterator<Item = &Service> {
        self.services
            .iter()
            .filter(move |service| service.category == category)
    }
}

fn ensure_unique_ids(
    collection: &'static str,
    ids: impl Iterator<Item = i64>,
) -> Result<(), CatalogError> {
    let mut seen = std::collections::HashSet::new();
    let mut any = false;
    for id in ids {
        any = true;
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId { collection, id });
        }
    }
    if !any {
        return Err(CatalogError::EmptyCollection { collection });
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

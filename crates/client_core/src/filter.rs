//! Category filter over the static service list.

use shared::domain::{Service, ServiceCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceFilter {
    #[default]
    All,
    Category(ServiceCategory),
}

impl ServiceFilter {
    /// Filter chips in display order.
    pub fn options() -> [ServiceFilter; 4] {
        [
            ServiceFilter::All,
            ServiceFilter::Category(ServiceCategory::Therapy),
            ServiceFilter::Category(ServiceCategory::Mindfulness),
            ServiceFilter::Category(ServiceCategory::Wellness),
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceFilter::All => "All Services",
            ServiceFilter::Category(category) => category.label(),
        }
    }

    pub fn matches(self, category: ServiceCategory) -> bool {
        match self {
            ServiceFilter::All => true,
            ServiceFilter::Category(wanted) => wanted == category,
        }
    }

    /// Derived view: the matching subsequence in original relative order.
    pub fn apply<'a>(self, services: &'a [Service]) -> Vec<&'a Service> {
        services
            .iter()
            .filter(|service| self.matches(service.category))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::ServiceId;

    fn service(id: i64, name: &str, category: ServiceCategory) -> Service {
        Service {
            id: ServiceId(id),
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            category,
            description: String::new(),
            icon: String::new(),
        }
    }

    fn fixture() -> Vec<Service> {
        vec![
            service(1, "Individual Therapy", ServiceCategory::Therapy),
            service(2, "Group Meditation", ServiceCategory::Mindfulness),
            service(3, "Couples Counseling", ServiceCategory::Therapy),
            service(4, "Stress Management", ServiceCategory::Wellness),
        ]
    }

    #[test]
    fn category_filter_preserves_original_order() {
        let services = fixture();
        let filter = ServiceFilter::Category(ServiceCategory::Therapy);
        let filtered: Vec<_> = filter.apply(&services).iter().map(|s| s.id.0).collect();
        assert_eq!(filtered, vec![1, 3]);
        assert!(filter
            .apply(&services)
            .iter()
            .all(|s| s.category == ServiceCategory::Therapy));
    }

    #[test]
    fn switching_back_to_all_restores_the_full_list_exactly() {
        let services = fixture();
        let all: Vec<_> = ServiceFilter::All
            .apply(&services)
            .iter()
            .map(|s| s.id.0)
            .collect();
        assert_eq!(all, vec![1, 2, 3, 4]);
    }
}

use crate::directory::domain::{
    BudgetRange, FacetDescriptor, FacetKey, FacetOption, FacetOptions, ThresholdOption,
    VendorRecord,
};

pub(super) struct VendorBuilder(VendorRecord);

impl VendorBuilder {
    pub(super) fn new(id: &str) -> Self {
        Self(VendorRecord::new(id, format!("Vendor {id}")))
    }

    pub(super) fn city(mut self, city: &str) -> Self {
        self.0.city = Some(city.to_string());
        self
    }

    pub(super) fn area(mut self, area: &str) -> Self {
        self.0.area = Some(area.to_string());
        self
    }

    pub(super) fn price(mut self, price: f64) -> Self {
        self.0.base_price = Some(price);
        self
    }

    pub(super) fn rating(mut self, rating: f64) -> Self {
        self.0.rating = rating;
        self
    }

    pub(super) fn experience(mut self, years: f64) -> Self {
        self.0.experience_years = years;
        self
    }

    pub(super) fn verified(mut self) -> Self {
        self.0.verified = true;
        self
    }

    pub(super) fn services(mut self, services: &[&str]) -> Self {
        self.0.services = services.iter().map(|service| service.to_string()).collect();
        self
    }

    pub(super) fn build(self) -> VendorRecord {
        self.0
    }
}

/// The three-vendor page used throughout the listing walkthrough.
pub(super) fn walkthrough_vendors() -> Vec<VendorRecord> {
    vec![
        VendorBuilder::new("pune-priced")
            .city("Pune")
            .price(20000.0)
            .rating(4.2)
            .build(),
        VendorBuilder::new("mumbai-premium")
            .city("Mumbai")
            .price(60000.0)
            .rating(4.8)
            .build(),
        VendorBuilder::new("pune-unpriced").city("Pune").build(),
    ]
}

/// Larger page mixing every facet.
pub(super) fn marketplace_vendors() -> Vec<VendorRecord> {
    vec![
        VendorBuilder::new("v1")
            .city("Pune")
            .area("Baner")
            .services(&["catering", "decor"])
            .price(18000.0)
            .rating(4.6)
            .experience(8.0)
            .verified()
            .build(),
        VendorBuilder::new("v2")
            .city("Pune")
            .area("Kothrud")
            .services(&["photography"])
            .price(45000.0)
            .rating(4.1)
            .experience(3.0)
            .build(),
        VendorBuilder::new("v3")
            .city("Mumbai")
            .area("Andheri")
            .services(&["catering"])
            .price(72000.0)
            .rating(4.9)
            .experience(12.0)
            .verified()
            .build(),
        VendorBuilder::new("v4")
            .city("Mumbai")
            .area("Bandra")
            .services(&["decor", "photography"])
            .rating(3.4)
            .experience(1.0)
            .build(),
        VendorBuilder::new("v5")
            .city("Nashik")
            .services(&["catering"])
            .price(9000.0)
            .rating(3.9)
            .verified()
            .build(),
        VendorBuilder::new("v6")
            .area("Baner")
            .services(&["decor"])
            .price(30000.0)
            .rating(4.4)
            .experience(5.0)
            .build(),
    ]
}

pub(super) fn marketplace_descriptors() -> Vec<FacetDescriptor> {
    let choices = |key: FacetKey, values: &[&str]| FacetDescriptor {
        key,
        label: key.label().to_string(),
        options: FacetOptions::Choices {
            options: values
                .iter()
                .map(|value| FacetOption {
                    value: value.to_string(),
                    label: value.to_string(),
                })
                .collect(),
        },
    };

    vec![
        choices(FacetKey::Services, &["catering", "decor", "photography"]),
        choices(FacetKey::Cities, &["Pune", "Mumbai", "Nashik"]),
        choices(FacetKey::Areas, &["Baner", "Kothrud", "Andheri", "Bandra"]),
        FacetDescriptor {
            key: FacetKey::Budget,
            label: "Budget".to_string(),
            options: FacetOptions::Ranges {
                ranges: vec![
                    BudgetRange {
                        min: None,
                        max: Some(25000.0),
                        label: "Under 25,000".to_string(),
                    },
                    BudgetRange {
                        min: Some(25000.0),
                        max: Some(50000.0),
                        label: "25,000 - 50,000".to_string(),
                    },
                    BudgetRange {
                        min: Some(50000.0),
                        max: None,
                        label: "Above 50,000".to_string(),
                    },
                ],
            },
        },
        FacetDescriptor {
            key: FacetKey::Rating,
            label: "Rating".to_string(),
            options: FacetOptions::Thresholds {
                thresholds: vec![
                    ThresholdOption {
                        value: 4.5,
                        label: "4.5+".to_string(),
                    },
                    ThresholdOption {
                        value: 4.0,
                        label: "4+".to_string(),
                    },
                ],
            },
        },
        FacetDescriptor {
            key: FacetKey::Verified,
            label: "Verified".to_string(),
            options: FacetOptions::Toggle,
        },
    ]
}

pub(super) fn ids(vendors: &[VendorRecord]) -> Vec<&str> {
    vendors.iter().map(|vendor| vendor.id.0.as_str()).collect()
}

use crate::infra::{parse_date, parse_sort, sample_catalog};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::collections::BTreeSet;
use std::path::PathBuf;
use vendor_directory::directory::{
    ActiveFilterSet, DirectorySearch, FacetCounts, FacetDescriptor, FacetOptions,
    FacetSelection, SearchResults, SortKey, VendorCatalog,
};
use vendor_directory::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct SearchArgs {
    /// Provider export to search (.csv or .json)
    #[arg(long)]
    pub(crate) catalog: PathBuf,
    /// Service identifier to include (repeatable)
    #[arg(long = "service")]
    pub(crate) services: Vec<String>,
    /// City to include (repeatable)
    #[arg(long = "city")]
    pub(crate) cities: Vec<String>,
    /// Area to include (repeatable)
    #[arg(long = "area")]
    pub(crate) areas: Vec<String>,
    /// Lower budget bound (inclusive)
    #[arg(long)]
    pub(crate) min_budget: Option<f64>,
    /// Upper budget bound (inclusive)
    #[arg(long)]
    pub(crate) max_budget: Option<f64>,
    /// Minimum rating
    #[arg(long)]
    pub(crate) rating: Option<f64>,
    /// Only verified (true) or only unverified (false) vendors
    #[arg(long)]
    pub(crate) verified: Option<bool>,
    /// Minimum years of experience
    #[arg(long)]
    pub(crate) experience: Option<f64>,
    /// Result ordering (relevance, price-asc, price-desc, rating, experience, distance)
    #[arg(long, value_parser = parse_sort, default_value = "relevance")]
    pub(crate) sort: SortKey,
    /// Date used to derive experience from establishment dates (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Print the full result as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Date used to derive experience from establishment dates (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Ordering applied at every step of the walkthrough
    #[arg(long, value_parser = parse_sort)]
    pub(crate) sort: Option<SortKey>,
}

impl SearchArgs {
    fn filters(&self) -> ActiveFilterSet {
        let mut filters = ActiveFilterSet::new();
        for (facet, values) in [
            ("services", &self.services),
            ("cities", &self.cities),
            ("areas", &self.areas),
        ] {
            // Toggling a repeated flag value twice would deselect it.
            let unique: BTreeSet<&String> = values.iter().collect();
            for value in unique {
                filters = filters.toggle(facet, value);
            }
        }
        if self.min_budget.is_some() || self.max_budget.is_some() {
            filters = filters.set_budget(self.min_budget, self.max_budget);
        }
        if let Some(rating) = self.rating {
            filters = filters.set_single("rating", FacetSelection::Threshold(rating));
        }
        if let Some(verified) = self.verified {
            filters = filters.set_single("verified", FacetSelection::Flag(verified));
        }
        if let Some(experience) = self.experience {
            filters = filters.set_single("experience", FacetSelection::Threshold(experience));
        }
        filters
    }
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let as_of = args.as_of.unwrap_or_else(|| Local::now().date_naive());
    let catalog = VendorCatalog::from_path(&args.catalog, as_of)?;
    let results = DirectorySearch::new(args.filters(), args.sort).run(catalog.vendors());

    if args.json {
        match serde_json::to_string_pretty(&results) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Search results unavailable as JSON: {err}"),
        }
        return Ok(());
    }

    println!(
        "Vendor search over {} ({} vendors)",
        args.catalog.display(),
        catalog.len()
    );
    render_results(&results);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { as_of, sort } = args;
    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
    let sort = sort.unwrap_or(SortKey::Rating);
    let catalog = sample_catalog(as_of)?;
    let vendors = catalog.vendors();

    println!("Vendor directory demo ({} sample vendors)", catalog.len());

    let steps = [
        ("No filters", ActiveFilterSet::new()),
        ("Toggle city Pune", ActiveFilterSet::new().toggle("cities", "Pune")),
        (
            "Add budget 10,000 - 30,000",
            ActiveFilterSet::new()
                .toggle("cities", "Pune")
                .set_budget(Some(10000.0), Some(30000.0)),
        ),
        (
            "Switch on verified vendors",
            ActiveFilterSet::new()
                .toggle("cities", "Pune")
                .set_budget(Some(10000.0), Some(30000.0))
                .set_single("verified", FacetSelection::Flag(true)),
        ),
    ];

    let mut last = ActiveFilterSet::new();
    for (title, filters) in steps {
        println!("\n== {title} ==");
        let results = DirectorySearch::new(filters.clone(), sort).run(vendors);
        render_results(&results);
        last = filters;
    }

    let cleared = last.clear_all();
    println!(
        "\n== Clear all ==\n- {} active filters, {} vendors",
        cleared.active_count(),
        DirectorySearch::new(cleared, sort).run(vendors).total
    );

    Ok(())
}

fn render_results(results: &SearchResults) {
    println!(
        "- {} matching vendors | {} active filters | sorted by {}",
        results.total, results.active_filters, results.sort_label
    );
    for vendor in &results.vendors {
        let price = vendor
            .base_price
            .map(|price| format!("{price:.0}"))
            .unwrap_or_else(|| "price on request".to_string());
        println!(
            "  - {} [{}] {} / {} | {} | rating {:.1} | {:.0} yrs{}",
            vendor.name,
            vendor.id,
            vendor.city.as_deref().unwrap_or("-"),
            vendor.area.as_deref().unwrap_or("-"),
            price,
            vendor.rating,
            vendor.experience_years,
            if vendor.verified { " | verified" } else { "" }
        );
    }

    println!("Facet counts:");
    for descriptor in &results.descriptors {
        render_facet(descriptor, results);
    }
    println!(
        "  {}: {} with the toggle on",
        results
            .descriptors
            .iter()
            .find(|descriptor| matches!(descriptor.options, FacetOptions::Toggle))
            .map(|descriptor| descriptor.label.as_str())
            .unwrap_or("Verified vendors"),
        results.verified_count
    );
}

fn render_facet(descriptor: &FacetDescriptor, results: &SearchResults) {
    let entries: Vec<String> = match &descriptor.options {
        FacetOptions::Choices { options } => options
            .iter()
            .map(|option| {
                let key = FacetCounts::option_key(descriptor.key, &option.value);
                format!("{} ({})", option.label, results.facet_counts.get(&key).unwrap_or(0))
            })
            .collect(),
        FacetOptions::Ranges { ranges } => ranges
            .iter()
            .enumerate()
            .map(|(index, range)| {
                let key = FacetCounts::range_key(index);
                format!("{} ({})", range.label, results.facet_counts.get(&key).unwrap_or(0))
            })
            .collect(),
        FacetOptions::Thresholds { thresholds } => thresholds
            .iter()
            .map(|threshold| {
                let key = FacetCounts::threshold_key(descriptor.key, threshold.value);
                format!(
                    "{} ({})",
                    threshold.label,
                    results.facet_counts.get(&key).unwrap_or(0)
                )
            })
            .collect(),
        FacetOptions::Toggle => return,
    };

    if !entries.is_empty() {
        println!("  {}: {}", descriptor.label, entries.join(", "));
    }
}

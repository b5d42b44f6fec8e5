mod config;
mod ids;
mod plan;

pub use config::{
    DestinationConfig, LoanTermRange, LocalizedText, PackageDuration, PriceRange, PricingConfig,
    Season,
};
pub use ids::DestinationId;
pub use plan::{
    AffordabilityResult, DateCheck, DateRejectionMode, LoanPlan, PackagePricing, PlanInput,
    SavingsTimeline, VacationPlan,
};

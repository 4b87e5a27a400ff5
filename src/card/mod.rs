pub mod codes;
pub mod metrics;
pub mod profile;

pub use codes::{CardCode, CardFieldError, StateCode};
pub use metrics::DerivedMetrics;
pub use profile::{CityProfile, RawCard};

pub mod accessor;
pub mod attribute;
pub mod engine;

pub use accessor::base_value;
pub use attribute::{display_name_for, Attribute, AttributeInfo, OrderingRule};
pub use engine::{aggregate_score, score};

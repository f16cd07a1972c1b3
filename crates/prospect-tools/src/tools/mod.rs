pub mod insights;
pub mod lookup;
pub mod search;

pub use insights::{INSIGHTS_TOOL_NAME, InsightSubtype, InsightsParams, InsightsToolSpec};
pub use lookup::{LOOKUP_TOOL_NAME, LookupParams, LookupToolSpec};
pub use search::{Freshness, SEARCH_TOOL_NAME, SafeSearch, SearchParams, SearchToolSpec};

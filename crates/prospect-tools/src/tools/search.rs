use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use strum::{AsRefStr, Display};

use crate::ToolSpec;
use crate::validate::check_non_empty;

pub const SEARCH_TOOL_NAME: &str = "youSearch";

const DESCRIPTION: &str = r#"Search the web with the You.com search API.
- query is the search query
- numWebResults limits the number of web results
- freshness restricts results to the past day, week, month or year
- country is a country code used to localize results
- safesearch is one of off, moderate, strict
Returns the You.com response as JSON."#;

pub struct SearchToolSpec;

impl ToolSpec for SearchToolSpec {
    type Params = SearchParams;

    const NAME: &'static str = SEARCH_TOOL_NAME;
    const DESCRIPTION: &'static str = DESCRIPTION;

    fn validate(params: &Self::Params) -> Result<(), String> {
        check_non_empty("query", &params.query)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Display, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Freshness {
    Day,
    Week,
    Month,
    Year,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Display, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SafeSearch {
    Off,
    Moderate,
    Strict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// The search query
    #[schemars(length(min = 1))]
    pub query: String,
    /// Number of web results to return
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_web_results: Option<Number>,
    /// Only return results newer than this
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freshness: Option<Freshness>,
    /// Country code used to localize results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Safe search level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safesearch: Option<SafeSearch>,
}

impl SearchParams {
    /// Query pairs for the search endpoint: the query first, then only the
    /// filters the caller actually supplied.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("query".to_string(), self.query.clone())];
        if let Some(count) = &self.num_web_results {
            pairs.push(("num_web_results".to_string(), count.to_string()));
        }
        if let Some(freshness) = self.freshness {
            pairs.push(("freshness".to_string(), freshness.to_string()));
        }
        if let Some(country) = &self.country {
            pairs.push(("country".to_string(), country.clone()));
        }
        if let Some(safesearch) = self.safesearch {
            pairs.push(("safesearch".to_string(), safesearch.to_string()));
        }
        pairs
    }
}

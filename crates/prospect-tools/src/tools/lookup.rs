use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ToolSpec;
use crate::validate::check_non_empty;

pub const LOOKUP_TOOL_NAME: &str = "predictLeads";

const DESCRIPTION: &str = r#"Look up company data from the PredictLeads API.
- path is the API resource path, e.g. /v3/companies/example.com/job_openings
- query holds extra query parameters; values are sent as strings
Returns the PredictLeads response as JSON."#;

pub struct LookupToolSpec;

impl ToolSpec for LookupToolSpec {
    type Params = LookupParams;

    const NAME: &'static str = LOOKUP_TOOL_NAME;
    const DESCRIPTION: &'static str = DESCRIPTION;

    fn validate(params: &Self::Params) -> Result<(), String> {
        check_non_empty("path", &params.path)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LookupParams {
    /// API resource path appended to the PredictLeads base URL
    #[schemars(length(min = 1))]
    pub path: String,
    /// Additional query parameters, sent in the order given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Map<String, Value>>,
}

impl LookupParams {
    /// Extra query pairs in caller order. Strings are sent as-is, any other
    /// value as its JSON text.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.query
            .iter()
            .flatten()
            .map(|(key, value)| {
                let value = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (key.clone(), value)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_pairs_keep_caller_order_and_stringify() {
        let params: LookupParams = serde_json::from_value(json!({
            "path": "/companies/example.com",
            "query": {"limit": 5, "industry": "tech", "active": true, "tags": ["a", "b"]}
        }))
        .unwrap();

        assert_eq!(
            params.query_pairs(),
            vec![
                ("limit".to_string(), "5".to_string()),
                ("industry".to_string(), "tech".to_string()),
                ("active".to_string(), "true".to_string()),
                ("tags".to_string(), r#"["a","b"]"#.to_string()),
            ]
        );
    }

    #[test]
    fn missing_query_yields_no_pairs() {
        let params: LookupParams = serde_json::from_value(json!({"path": "/x"})).unwrap();
        assert!(params.query_pairs().is_empty());
    }

    #[test]
    fn path_is_required_and_non_empty() {
        assert!(serde_json::from_value::<LookupParams>(json!({})).is_err());

        let params: LookupParams = serde_json::from_value(json!({"path": ""})).unwrap();
        assert!(LookupToolSpec::validate(&params).is_err());
    }
}

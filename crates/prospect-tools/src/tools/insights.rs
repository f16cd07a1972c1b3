use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ToolSpec;
use crate::validate::{check_email, check_url};

pub const INSIGHTS_TOOL_NAME: &str = "autoboundInsights";

const DESCRIPTION: &str = r#"Generate personalized sales insights for a contact using Autobound.
- Identify the prospect with contactEmail, contactLinkedinUrl and/or contactCompanyUrl
- Identify the seller with userEmail, userLinkedinUrl and/or userCompanyUrl
- insightSubtype narrows the insights returned; pass one subtype or a list
Returns the Autobound response as JSON."#;

pub struct InsightsToolSpec;

impl ToolSpec for InsightsToolSpec {
    type Params = InsightsParams;

    const NAME: &'static str = INSIGHTS_TOOL_NAME;
    const DESCRIPTION: &'static str = DESCRIPTION;

    fn validate(params: &Self::Params) -> Result<(), String> {
        check_email("contactEmail", params.contact_email.as_deref())?;
        check_url("contactLinkedinUrl", params.contact_linkedin_url.as_deref())?;
        check_url("contactCompanyUrl", params.contact_company_url.as_deref())?;
        check_email("userEmail", params.user_email.as_deref())?;
        check_url("userLinkedinUrl", params.user_linkedin_url.as_deref())?;
        check_url("userCompanyUrl", params.user_company_url.as_deref())?;
        Ok(())
    }
}

/// Either a single insight subtype or several of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum InsightSubtype {
    One(String),
    Many(Vec<String>),
}

/// Arguments of `autoboundInsights`. The validated object is forwarded to the
/// provider as the request body, with absent fields left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsightsParams {
    /// Email address of the contact (prospect)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(email)]
    pub contact_email: Option<String>,
    /// LinkedIn profile URL of the contact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(url)]
    pub contact_linkedin_url: Option<String>,
    /// Company website URL of the contact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(url)]
    pub contact_company_url: Option<String>,
    /// Email address of the user (seller)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(email)]
    pub user_email: Option<String>,
    /// LinkedIn profile URL of the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(url)]
    pub user_linkedin_url: Option<String>,
    /// Company website URL of the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(url)]
    pub user_company_url: Option<String>,
    /// Insight subtype filter: a single subtype or a list of subtypes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insight_subtype: Option<InsightSubtype>,
}

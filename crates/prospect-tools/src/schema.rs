use schemars::JsonSchema;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

/// The object schema advertised for a tool's arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSchema {
    pub properties: Map<String, Value>,
    pub required: Vec<String>,
    #[serde(rename = "type")]
    pub schema_type: String,
}

impl InputSchema {
    pub fn to_json_object(&self) -> Map<String, Value> {
        let mut object = Map::new();
        object.insert("type".to_string(), Value::String(self.schema_type.clone()));
        object.insert(
            "properties".to_string(),
            Value::Object(self.properties.clone()),
        );
        object.insert(
            "required".to_string(),
            Value::Array(self.required.iter().cloned().map(Value::String).collect()),
        );
        object
    }
}

impl From<schemars::Schema> for InputSchema {
    fn from(schema: schemars::Schema) -> Self {
        let value = serde_json::to_value(&schema).unwrap_or(Value::Null);
        let object = value.as_object();

        let properties = object
            .and_then(|obj| obj.get("properties"))
            .and_then(|v| v.as_object())
            .cloned()
            .unwrap_or_default();

        let required = object
            .and_then(|obj| obj.get("required"))
            .and_then(|v| v.as_array())
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();

        let schema_type = object
            .and_then(|obj| obj.get("type"))
            .and_then(|v| v.as_str())
            .unwrap_or("object")
            .to_string();

        Self {
            properties,
            required,
            schema_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    pub input_schema: InputSchema,
}

/// Static description of a tool: its wire name, its parameters and the
/// checks serde alone cannot express.
pub trait ToolSpec {
    type Params: DeserializeOwned + Serialize + JsonSchema + Send + 'static;

    const NAME: &'static str;
    const DESCRIPTION: &'static str;

    /// Semantic checks run after deserialization and before any request is
    /// built. The error is a human-readable reason.
    fn validate(_params: &Self::Params) -> Result<(), String> {
        Ok(())
    }

    fn schema() -> ToolSchema
    where
        Self: Sized,
    {
        let settings = schemars::generate::SchemaSettings::draft07().with(|s| {
            s.inline_subschemas = true;
        });
        let input_schema = settings
            .into_generator()
            .into_root_schema_for::<Self::Params>();

        ToolSchema {
            name: Self::NAME.to_string(),
            description: Self::DESCRIPTION.to_string(),
            input_schema: input_schema.into(),
        }
    }
}

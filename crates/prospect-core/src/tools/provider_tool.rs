use async_trait::async_trait;
use prospect_tools::{ToolError, ToolOutput, ToolSchema, ToolSpec};

/// A tool backed by one upstream provider.
#[async_trait]
pub trait ProviderTool: Send + Sync + 'static {
    type Spec: ToolSpec;

    async fn execute(
        &self,
        params: <Self::Spec as ToolSpec>::Params,
    ) -> Result<ToolOutput, ToolError>;
}

/// Object-safe view of a [`ProviderTool`] taking raw JSON arguments.
#[async_trait]
pub trait ErasedTool: Send + Sync {
    fn name(&self) -> &'static str;
    fn schema(&self) -> ToolSchema;

    async fn call(&self, arguments: serde_json::Value) -> Result<ToolOutput, ToolError>;
}

#[async_trait]
impl<T> ErasedTool for T
where
    T: ProviderTool,
{
    fn name(&self) -> &'static str {
        T::Spec::NAME
    }

    fn schema(&self) -> ToolSchema {
        T::Spec::schema()
    }

    async fn call(&self, arguments: serde_json::Value) -> Result<ToolOutput, ToolError> {
        let params: <T::Spec as ToolSpec>::Params = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_params(T::Spec::NAME, e.to_string()))?;

        T::Spec::validate(&params)
            .map_err(|message| ToolError::invalid_params(T::Spec::NAME, message))?;

        self.execute(params).await
    }
}

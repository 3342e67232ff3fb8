pub mod azure;
pub mod command;

use async_trait::async_trait;

use crate::config::ExportConfig;
use crate::error::ExportError;
use crate::model::work_item::RawWorkItem;

#[async_trait]
pub trait Provider: Send + Sync {
    fn name(&self) -> &str;
    /// Fetch one work item as returned by the tracking service. Failures carry
    /// the requested id.
    async fn fetch_raw_item(&self, item_id: u64) -> Result<RawWorkItem, ExportError>;
}


pub fn create_provider(config: &ExportConfig) -> Box<dyn Provider> {
    Box::new(azure::AzureCliProvider::new(
        config.cli.clone(),
        config.organization_url.clone(),
        command::TokioCommandRunner,
    ))
}

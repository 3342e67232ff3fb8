use async_trait::async_trait;

use super::command::CommandRunner;
use super::Provider;
use crate::error::ExportError;
use crate::model::work_item::RawWorkItem;

/// Reads work items through the Azure CLI (`az boards work-item show`), so
/// whatever login the operator configured for `az` is reused as-is.
pub struct AzureCliProvider<R> {
    program: String,
    organization_url: String,
    runner: R,
}

impl<R: CommandRunner> AzureCliProvider<R> {
    pub fn new(program: String, organization_url: String, runner: R) -> Self {
        Self {
            program,
            organization_url,
            runner,
        }
    }

    fn show_args(&self, item_id: u64) -> Vec<String> {
        vec![
            "boards".to_string(),
            "work-item".to_string(),
            "show".to_string(),
            "--organization".to_string(),
            self.organization_url.clone(),
            "--id".to_string(),
            item_id.to_string(),
        ]
    }
}

#[async_trait]
impl<R: CommandRunner> Provider for AzureCliProvider<R> {
    fn name(&self) -> &str {
        "Azure DevOps"
    }

    async fn fetch_raw_item(&self, item_id: u64) -> Result<RawWorkItem, ExportError> {
        let args = self.show_args(item_id);
        tracing::debug!(item_id, command = %format!("{} {}", self.program, args.join(" ")), "fetching work item");

        let result = match self.runner.run(&self.program, &args).await {
            Ok(stdout) => serde_json::from_str::<RawWorkItem>(&stdout)
                .map_err(|source| ExportError::ResponseParse { item_id, source }),
            Err(failure) => Err(ExportError::CommandExecution {
                item_id,
                stderr: failure.stderr,
            }),
        };

        if let Err(e) = &result {
            tracing::error!(item_id, error = %e, "failed to fetch work item");
        }
        result
    }
}

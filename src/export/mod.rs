pub mod parent;
pub mod writer;

use std::path::{Path, PathBuf};

use crate::error::ExportError;
use crate::model::work_item::WorkItemRecord;
use crate::providers::Provider;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub exported: usize,
    pub with_parent: usize,
    pub path: PathBuf,
}

/// Fetch every id in order, attach parent titles and write the CSV. The first
/// failure aborts the run before anything is written.
pub async fn run_export(
    provider: &dyn Provider,
    item_ids: &[u64],
    output: &Path,
) -> Result<ExportSummary, ExportError> {
    let mut records = Vec::with_capacity(item_ids.len());

    for &item_id in item_ids {
        let raw = provider.fetch_raw_item(item_id).await?;
        let mut record = WorkItemRecord::from_raw(&raw, item_id)?;
        record.parent = parent::resolve_parent_title(provider, &raw).await?;

        tracing::info!(
            item_id,
            item_type = %record.item_type,
            parent = record.parent.as_deref().unwrap_or(""),
            "collected work item"
        );
        records.push(record);
    }

    writer::write_csv(&records, output)?;

    let summary = ExportSummary {
        exported: records.len(),
        with_parent: records.iter().filter(|r| r.parent.is_some()).count(),
        path: output.to_path_buf(),
    };
    tracing::info!(
        exported = summary.exported,
        with_parent = summary.with_parent,
        path = %summary.path.display(),
        source = provider.name(),
        "export complete"
    );
    Ok(summary)
}

use std::path::Path;

use crate::error::ExportError;
use crate::model::work_item::WorkItemRecord;

/// Write `records` as CSV to `path`, replacing any existing file. The header
/// comes from the first record's row.
pub fn write_csv(records: &[WorkItemRecord], path: &Path) -> Result<(), ExportError> {
    if records.is_empty() {
        return Err(ExportError::EmptyExport);
    }
    let rows = records
        .iter()
        .map(WorkItemRecord::to_row)
        .collect::<Result<Vec<_>, _>>()?;
    let header: Vec<&str> = rows[0].iter().map(|(key, _)| *key).collect();

    let io_err = |source: std::io::Error| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(|e| io_err(e.into()))?;
    writer
        .write_record(&header)
        .map_err(|e| io_err(e.into()))?;

    for row in &rows {
        writer
            .write_record(row.iter().map(|(_, value)| value.as_str()))
            .map_err(|e| io_err(e.into()))?;
    }

    writer.flush().map_err(io_err)?;
    Ok(())
}

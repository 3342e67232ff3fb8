use crate::error::ExportError;
use crate::model::work_item::{RawWorkItem, WorkItemRecord};
use crate::providers::Provider;

/// Look up the title of the item's immediate parent. Items without a parent
/// link cost no extra fetch; a parent that cannot be fetched or built fails
/// the lookup.
pub async fn resolve_parent_title(
    provider: &dyn Provider,
    raw: &RawWorkItem,
) -> Result<Option<String>, ExportError> {
    let Some(parent_id) = raw.fields.parent else {
        return Ok(None);
    };

    let parent_raw = provider.fetch_raw_item(parent_id).await?;
    let parent = WorkItemRecord::from_raw(&parent_raw, parent_id)?;
    Ok(Some(parent.title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::tests::{make_raw_item, MockProvider};

    fn raw(value: serde_json::Value) -> RawWorkItem {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn no_parent_means_no_fetch() {
        let provider = MockProvider::new();
        let child = raw(make_raw_item(101, "Bug", "Fix login crash", None));

        let title = resolve_parent_title(&provider, &child).await.unwrap();

        assert_eq!(title, None);
        assert!(provider.fetched_ids().is_empty());
    }

    #[tokio::test]
    async fn parent_triggers_exactly_one_fetch() {
        let provider =
            MockProvider::new().with_item(make_raw_item(101, "Bug", "Fix login crash", None));
        let child = raw(make_raw_item(102, "Task", "Write regression test", Some(101)));

        let title = resolve_parent_title(&provider, &child).await.unwrap();

        assert_eq!(title.as_deref(), Some("Fix login crash"));
        assert_eq!(provider.fetched_ids(), vec![101]);
    }

    #[tokio::test]
    async fn broken_parent_is_not_suppressed() {
        let provider = MockProvider::new().with_failure(50, "TF401232: work item does not exist");
        let child = raw(make_raw_item(51, "Task", "orphan", Some(50)));

        let err = resolve_parent_title(&provider, &child).await.unwrap_err();
        assert!(matches!(err, ExportError::CommandExecution { item_id: 50, .. }));
    }

    #[tokio::test]
    async fn parent_with_unknown_type_fails() {
        let provider =
            MockProvider::new().with_item(make_raw_item(60, "Impediment", "blocked", None));
        let child = raw(make_raw_item(61, "Task", "child", Some(60)));

        let err = resolve_parent_title(&provider, &child).await.unwrap_err();
        assert!(matches!(err, ExportError::UnknownItemType { item_id: 60, .. }));
    }
}

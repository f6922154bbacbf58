//! Nil-safe accessors over the sparse ARM response models.
//!
//! ARM omits fields freely, so the formatting layer never touches the
//! models directly for display - everything goes through these helpers,
//! which substitute "N/A" for absent values.

use chrono::{DateTime, Utc};

use super::models::{ComputeProperties, Sku, WorkspaceProperties};

/// Placeholder for absent string fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// Safely render an optional string field.
pub fn opt_str(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_AVAILABLE)
}

/// Safely render a nested optional string field.
pub fn opt_field(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}

/// Extract the resource group name from an ARM resource ID.
///
/// IDs look like `/subscriptions/{s}/resourceGroups/{rg}/providers/...`.
pub fn extract_resource_group(id: &str) -> String {
    if id.is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    let parts: Vec<&str> = id.split('/').collect();
    for (i, part) in parts.iter().enumerate() {
        if *part == "resourceGroups" && i + 1 < parts.len() {
            return parts[i + 1].to_string();
        }
    }
    NOT_AVAILABLE.to_string()
}

/// Render an optional timestamp as `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(value: &Option<DateTime<Utc>>) -> String {
    match value {
        Some(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// SKU name, or "N/A" when the SKU is absent.
pub fn sku_name(sku: &Option<Sku>) -> &str {
    opt_field(sku.as_ref().and_then(|s| s.name.as_deref()))
}

/// A named field of the workspace properties, or "N/A".
pub fn workspace_property<'a>(
    props: &'a Option<WorkspaceProperties>,
    field: impl Fn(&'a WorkspaceProperties) -> &'a Option<String>,
) -> &'a str {
    opt_field(props.as_ref().and_then(|p| field(p).as_deref()))
}

/// Compute type, or "N/A".
pub fn compute_type(props: &Option<ComputeProperties>) -> &str {
    opt_field(props.as_ref().and_then(|p| p.compute_type.as_deref()))
}

/// Compute description, or "N/A".
pub fn compute_description(props: &Option<ComputeProperties>) -> &str {
    opt_field(props.as_ref().and_then(|p| p.description.as_deref()))
}

/// Compute provisioning state, or "N/A".
pub fn compute_provisioning_state(props: &Option<ComputeProperties>) -> &str {
    opt_field(props.as_ref().and_then(|p| p.provisioning_state.as_deref()))
}

/// Compute creation timestamp, or "N/A".
pub fn compute_created_on(props: &Option<ComputeProperties>) -> String {
    format_timestamp(&props.as_ref().and_then(|p| p.created_on))
}

/// Compute modification timestamp, or "N/A".
pub fn compute_modified_on(props: &Option<ComputeProperties>) -> String {
    format_timestamp(&props.as_ref().and_then(|p| p.modified_on))
}

/// Whether the compute is attached rather than managed; false when absent.
pub fn compute_is_attached(props: &Option<ComputeProperties>) -> bool {
    props
        .as_ref()
        .and_then(|p| p.is_attached_compute)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_opt_str() {
        assert_eq!(opt_str(&Some("value".to_string())), "value");
        assert_eq!(opt_str(&None), "N/A");
    }

    #[test]
    fn test_extract_resource_group() {
        let id = "/subscriptions/abc/resourceGroups/my-rg/providers/Microsoft.MachineLearningServices/workspaces/ws";
        assert_eq!(extract_resource_group(id), "my-rg");
    }

    #[test]
    fn test_extract_resource_group_missing() {
        assert_eq!(extract_resource_group(""), "N/A");
        assert_eq!(extract_resource_group("/subscriptions/abc"), "N/A");
        // Trailing segment without a value
        assert_eq!(
            extract_resource_group("/subscriptions/abc/resourceGroups"),
            "N/A"
        );
    }

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap();
        assert_eq!(format_timestamp(&Some(ts)), "2024-01-15 08:30:00");
        assert_eq!(format_timestamp(&None), "N/A");
    }

    #[test]
    fn test_sku_name() {
        let sku = Some(Sku {
            name: Some("Basic".to_string()),
            tier: None,
        });
        assert_eq!(sku_name(&sku), "Basic");
        assert_eq!(sku_name(&None), "N/A");
        let nameless = Some(Sku {
            name: None,
            tier: Some("Basic".to_string()),
        });
        assert_eq!(sku_name(&nameless), "N/A");
    }

    #[test]
    fn test_workspace_property() {
        let props = Some(WorkspaceProperties {
            description: Some("desc".to_string()),
            friendly_name: None,
            discovery_url: None,
            ml_flow_tracking_uri: None,
            provisioning_state: None,
        });
        assert_eq!(workspace_property(&props, |p| &p.description), "desc");
        assert_eq!(workspace_property(&props, |p| &p.friendly_name), "N/A");
        assert_eq!(workspace_property(&None, |p| &p.description), "N/A");
    }

    #[test]
    fn test_compute_accessors_absent_properties() {
        assert_eq!(compute_type(&None), "N/A");
        assert_eq!(compute_provisioning_state(&None), "N/A");
        assert_eq!(compute_created_on(&None), "N/A");
        assert!(!compute_is_attached(&None));
    }

    #[test]
    fn test_compute_accessors_present() {
        let props = Some(ComputeProperties {
            compute_type: Some("AmlCompute".to_string()),
            description: Some("training cluster".to_string()),
            resource_id: None,
            provisioning_state: Some("Succeeded".to_string()),
            created_on: Some(Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap()),
            modified_on: None,
            is_attached_compute: Some(true),
        });
        assert_eq!(compute_type(&props), "AmlCompute");
        assert_eq!(compute_description(&props), "training cluster");
        assert_eq!(compute_provisioning_state(&props), "Succeeded");
        assert_eq!(compute_created_on(&props), "2024-01-15 08:30:00");
        assert_eq!(compute_modified_on(&props), "N/A");
        assert!(compute_is_attached(&props));
    }
}

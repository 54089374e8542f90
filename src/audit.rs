use serde_json::Value;

/// Emits a structured audit event on the `audit` tracing target.
pub fn log_audit(
    user_id: Option<&str>,
    action: &str,
    resource: Option<&str>,
    metadata: Option<Value>,
) {
    let metadata = metadata.unwrap_or(Value::Null);
    tracing::info!(
        target: "audit",
        user_id = user_id.unwrap_or("-"),
        action,
        resource = resource.unwrap_or("-"),
        %metadata,
        "audit"
    );
}

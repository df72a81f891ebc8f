//! Response validation and verdict rendering.

use serde_json::Value;

use crate::error::WatchError;

/// Map a review status keyword to its verdict sentence.
pub fn verdict_for(status: &str) -> Option<&'static str> {
    match status {
        "approved" => Some("The review is finished: the reviewer liked everything. Hooray!"),
        "reviewing" => Some("The submission was taken up for review."),
        "rejected" => Some("The review is finished: the reviewer left remarks."),
        _ => None,
    }
}

/// Validate the decoded payload shape and pull out the homework list.
///
/// The root-shape check runs before the field lookup, so a scalar payload
/// reports the type problem instead of a missing-field one.
pub fn check_response(response: &Value) -> Result<&Vec<Value>, WatchError> {
    if !response.is_object() {
        return Err(WatchError::NotAnObject);
    }
    response
        .get("homeworks")
        .and_then(Value::as_array)
        .ok_or(WatchError::MissingHomeworks)
}

/// Render the notification line for one homework entry.
///
/// The entry is expected to carry `homework_name` and `status` string
/// fields. A missing name degrades to a placeholder; a missing or unknown
/// status is an error.
pub fn parse_status(homework: &Value) -> Result<String, WatchError> {
    let name = homework
        .get("homework_name")
        .and_then(Value::as_str)
        .unwrap_or("?");
    let status = homework.get("status").and_then(Value::as_str).unwrap_or("");

    match verdict_for(status) {
        Some(verdict) => Ok(format!("The review status of \"{name}\" changed. {verdict}")),
        None => Err(WatchError::UnknownStatus(status.to_string())),
    }
}

//! Boundary validation for incoming requests.

use validator::Validate;

use paygrid_common::PaygridError;

/// Validate a request before it reaches query compilation, mapping failures
/// into the shared error taxonomy.
pub fn validate_request<T: Validate>(request: &T) -> anyhow::Result<()> {
    request
        .validate()
        .map_err(|e| PaygridError::Validation(e.to_string()).into())
}

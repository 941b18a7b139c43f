//! Error handling utilities for MCP server

use pizack_core::PizackError;
use rmcp::ErrorData;

/// Convert a store error to an MCP error.
///
/// Caller mistakes (bad input, unknown IDs, baking too early) are reported as
/// invalid params; everything else is internal.
pub fn to_mcp_error(message: &str, error: &PizackError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        PizackError::InvalidInput { .. }
        | PizackError::OrderNotFound { .. }
        | PizackError::SubTaskNotFound { .. }
        | PizackError::OrderNotReady { .. }
        | PizackError::AlreadyCompleted { .. } => ErrorData::invalid_params(text, None),
        _ => ErrorData::internal_error(text, None),
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_not_ready_is_invalid_params() {
        let err = PizackError::not_ready("abc").with_reason("no toppings");
        let mcp = to_mcp_error("Failed to bake order", &err);
        assert_eq!(mcp.code, ErrorCode::INVALID_PARAMS);
        assert!(mcp.message.contains("Failed to bake order"));
        assert!(mcp.message.contains("no toppings"));
    }

    #[test]
    fn test_configuration_is_internal() {
        let err = PizackError::Configuration {
            message: "writer stopped".to_string(),
        };
        let mcp = to_mcp_error("Failed to flush", &err);
        assert_eq!(mcp.code, ErrorCode::INTERNAL_ERROR);
    }
}

//! Wire types for the gateway API.

use serde::{Deserialize, Serialize};

/// One deployed function as reported by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionSummary {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
}

/// One page of the function listing.
///
/// `next_token` is present when more pages follow; the final page omits it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionListPage {
    #[serde(default)]
    pub functions: Vec<FunctionSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Result of invoking a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokeOutput {
    /// HTTP status the function responded with.
    pub status: u16,
    /// Raw response payload.
    pub payload: Vec<u8>,
    /// Tail of the function's log, when the gateway captured one.
    pub log_tail: Option<String>,
}

/// Error body the gateway sends alongside non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RemoteErrorBody {
    pub code: String,
    pub message: String,
}

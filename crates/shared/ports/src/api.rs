use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiResult;

/// Port for authenticated access to the trading API
///
/// Endpoints are relative paths joined onto the configured base URL.
/// Implementations own their connection and are used by one operation at a
/// time.
#[async_trait]
pub trait TradingApi: Send + Sync {
    /// GET without a body
    async fn get(&self, endpoint: &str) -> ApiResult<Value>;

    /// POST a JSON body that is safe to re-send on transient failures
    async fn post(&self, endpoint: &str, body: &Value) -> ApiResult<Value>;

    /// POST a state-mutating JSON body (trade submission)
    ///
    /// Must not re-send once the request may have reached the server, so a
    /// failure with unknown outcome surfaces instead of executing twice.
    async fn post_order(&self, endpoint: &str, body: &Value) -> ApiResult<Value>;
}

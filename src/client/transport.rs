use async_trait::async_trait;
use reqwest::Method;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use serde_json::Value;

use super::{ApiReply, Session};
use crate::core::Result;

/// Request/response seam to the backend.
///
/// Implementations resolve `success: false` and non-2xx statuses into
/// [`crate::core::AppError::Remote`] and transport failures into
/// [`crate::core::AppError::Network`]. Nothing here retries.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn call(
        &self,
        session: &Session,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<ApiReply>;
}

fn decode<T: DeserializeOwned>(reply: ApiReply) -> Result<T> {
    Ok(serde_json::from_value(reply.data)?)
}

/// GET `path` and decode its `data`
pub async fn get<T: DeserializeOwned>(
    api: &dyn ApiTransport,
    session: &Session,
    path: &str,
) -> Result<T> {
    let reply = api.call(session, Method::GET, path, None).await?;
    decode(reply)
}

/// Send `body` as JSON and decode the response's `data`
pub async fn send<B, T>(
    api: &dyn ApiTransport,
    session: &Session,
    method: Method,
    path: &str,
    body: &B,
) -> Result<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let body = serde_json::to_value(body)?;
    let reply = api.call(session, method, path, Some(body)).await?;
    decode(reply)
}

/// DELETE `path`, ignoring whatever `data` comes back
pub async fn delete(api: &dyn ApiTransport, session: &Session, path: &str) -> Result<String> {
    let reply = api.call(session, Method::DELETE, path, None).await?;
    let message = reply.message.clone();
    decode::<IgnoredAny>(reply)?;
    Ok(message)
}

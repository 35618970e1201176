//! Wire layer: one [`Request`] implementation per backend endpoint.

pub mod account;
pub mod accreditation;
pub mod application;
pub mod program;

use std::collections::BTreeMap;

use crate::{Context, Error};

/// A single call against the backend API.
#[async_trait::async_trait]
pub trait Request {
    type Output;

    const METHOD: reqwest::Method = reqwest::Method::POST;
    /// Whether the token header is attached. Only login and signup go
    /// out unauthenticated.
    const AUTH: bool = true;

    fn url_suffix(&self) -> String;

    fn make_req(&self, req: reqwest::RequestBuilder) -> Result<reqwest::RequestBuilder, Error>;

    async fn parse_res(&mut self, response: reqwest::Response) -> Result<Self::Output, Error>;
}

/// Calls a [`Request`] and returns its output.
///
/// Authenticated requests short-circuit with an auth error before any
/// network traffic when no token is stored. Non-2xx responses are
/// classified into the crate error taxonomy, surfacing the backend's
/// structured message when one exists.
pub async fn call<T: Request>(mut req: T, cx: &Context) -> Result<T::Output, Error> {
    let url = format!("{}{}", cx.base_url, req.url_suffix());

    let mut builder = cx.http.request(T::METHOD, &url);
    if T::AUTH {
        let token = cx.session.token().ok_or_else(Error::not_logged_in)?;
        builder = builder.header(
            reqwest::header::AUTHORIZATION,
            format!("Token {}", token),
        );
    }

    let response = req.make_req(builder)?.send().await?;
    let status = response.status();
    tracing::debug!(%url, %status, "api call");

    if !status.is_success() {
        let body = response.json::<ErrorBody>().await.unwrap_or_default();
        return Err(classify(status, body));
    }

    req.parse_res(response).await
}

/// The error shapes the backend produces: a `detail` string,
/// `non_field_errors`, or a map of per-field message lists.
#[derive(serde::Deserialize, Default)]
struct ErrorBody {
    detail: Option<String>,
    non_field_errors: Option<Vec<String>>,
    #[serde(flatten)]
    fields: BTreeMap<String, serde_json::Value>,
}

impl ErrorBody {
    fn message(&self) -> Option<String> {
        if let Some(detail) = &self.detail {
            return Some(detail.clone());
        }
        if let Some(msg) = self.non_field_errors.as_ref().and_then(|e| e.first()) {
            return Some(msg.clone());
        }
        if self.fields.is_empty() {
            return None;
        }
        // Field-level serializer errors, joined as "field: msg, ...".
        let joined = self
            .fields
            .iter()
            .map(|(field, value)| {
                let msg = match value {
                    serde_json::Value::Array(msgs) => msgs
                        .iter()
                        .filter_map(|m| m.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                    other => other.to_string(),
                };
                format!("{}: {}", field.replace('_', " "), msg)
            })
            .collect::<Vec<_>>()
            .join("\n");
        Some(joined)
    }
}

fn classify(status: reqwest::StatusCode, body: ErrorBody) -> Error {
    use reqwest::StatusCode;

    let message = body.message();
    match status {
        StatusCode::UNAUTHORIZED => {
            Error::Auth(message.unwrap_or_else(|| "Invalid username or password".to_string()))
        }
        StatusCode::FORBIDDEN => {
            Error::Forbidden(message.unwrap_or_else(|| "permission denied".to_string()))
        }
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            Error::Validation(message.unwrap_or_else(|| "invalid request".to_string()))
        }
        StatusCode::CONFLICT => {
            Error::Conflict(message.unwrap_or_else(|| "conflicting state".to_string()))
        }
        _ => Error::Server {
            status: status.as_u16(),
            message: message.unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            }),
        },
    }
}

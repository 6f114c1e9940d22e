//! Extractor for request provenance.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::HeaderMap;
use axum::http::header::USER_AGENT;
use axum::http::request::Parts;

use roster_domain::record::Provenance;

const UNKNOWN: &str = "unknown";

/// Client address and user agent of the current request, tagged as a
/// website registration.
///
/// The address is the first `X-Forwarded-For` hop, then `X-Real-IP`, then
/// the TCP peer (only available when served with connect info). Header
/// values are taken at face value.
#[derive(Debug, Clone)]
pub struct ClientProvenance(pub Provenance);

impl<S> FromRequestParts<S> for ClientProvenance
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ip_address = forwarded_ip(&parts.headers)
            .or_else(|| {
                parts
                    .extensions
                    .get::<ConnectInfo<SocketAddr>>()
                    .map(|ConnectInfo(addr)| addr.ip().to_string())
            })
            .unwrap_or_else(|| UNKNOWN.to_string());
        let user_agent = header_text(&parts.headers, USER_AGENT.as_str())
            .unwrap_or(UNKNOWN)
            .to_string();

        Ok(Self(Provenance::website(ip_address, user_agent)))
    }
}

fn forwarded_ip(headers: &HeaderMap) -> Option<String> {
    header_text(headers, "x-forwarded-for")
        .and_then(|value| value.split(',').next())
        .and_then(non_blank)
        .or_else(|| header_text(headers, "x-real-ip").and_then(non_blank))
        .map(str::to_string)
}

fn non_blank(value: &str) -> Option<&str> {
    Some(value.trim()).filter(|value| !value.is_empty())
}

fn header_text<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

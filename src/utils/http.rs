// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 eomp-ets contributors

//! Remote document retrieval

use tracing::debug;
use url::Url;

use crate::{EompError, EompResult};

/// Whether the argument names an http(s) resource rather than a local path
pub fn is_remote(file_or_url: &str) -> bool {
    Url::parse(file_or_url)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Download a document as text; non-2xx responses are errors
pub async fn fetch_text(url: &str) -> EompResult<String> {
    debug!("Downloading {}", url);

    let client = reqwest::Client::builder()
        .user_agent(concat!("eomp-ets/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| EompError::Fetch {
            url: url.to_string(),
            error: e.to_string(),
        })?
        .error_for_status()
        .map_err(|e| EompError::Fetch {
            url: url.to_string(),
            error: e.to_string(),
        })?;

    Ok(response.text().await?)
}

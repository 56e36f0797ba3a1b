//! Best-effort file size probes for local and remote assets.
//!
//! A failed probe never fails record building: the caller simply omits
//! `file:size`.

use object_store::{aws::AmazonS3Builder, path::Path as ObjectPath, ObjectStore};
use once_cell::sync::Lazy;
use reqwest::{header, Client, Url};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Upper bound on a single remote HEAD request.
const PROBE_TIMEOUT: Duration = Duration::from_secs(30);

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(PROBE_TIMEOUT)
        .connect_timeout(Duration::from_secs(10))
        .build()
        .unwrap_or_else(|_| Client::new())
});

#[derive(Error, Debug)]
enum ProbeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("object store error: {0}")]
    ObjectStore(#[from] object_store::Error),

    #[error("{0}")]
    Unavailable(String),
}

/// Resolve the size in bytes of the file at `href`.
///
/// Supports local paths, `file://`, `http(s)://` and `s3://` locations.
/// Returns `None` when the size cannot be determined.
pub async fn probe_file_size(href: &str) -> Option<u64> {
    match try_probe(href).await {
        Ok(size) => {
            debug!(href = %href, size, "Resolved asset file size");
            Some(size)
        }
        Err(e) => {
            debug!(href = %href, error = %e, "Could not resolve asset file size, omitting file:size");
            None
        }
    }
}

fn parse_url(href: &str) -> Result<Url, ProbeError> {
    Url::parse(href).map_err(|e| ProbeError::Unavailable(format!("invalid URL {}: {}", href, e)))
}

async fn try_probe(href: &str) -> Result<u64, ProbeError> {
    let scheme = href.split_once("://").map(|(scheme, _)| scheme);

    match scheme {
        None => local_size(std::path::Path::new(href)).await,
        Some("file") => {
            let url = parse_url(href)?;
            let path = url
                .to_file_path()
                .map_err(|_| ProbeError::Unavailable(format!("not a file path: {}", href)))?;
            local_size(&path).await
        }
        Some("http") | Some("https") => http_size(href).await,
        Some("s3") => s3_size(href).await,
        Some(other) => Err(ProbeError::Unavailable(format!(
            "unsupported scheme: {}",
            other
        ))),
    }
}

async fn local_size(path: &std::path::Path) -> Result<u64, ProbeError> {
    let metadata = tokio::fs::metadata(path).await?;
    if !metadata.is_file() {
        return Err(ProbeError::Unavailable(format!("{:?} is not a file", path)));
    }
    Ok(metadata.len())
}

async fn http_size(href: &str) -> Result<u64, ProbeError> {
    let response = HTTP_CLIENT.head(href).send().await?;

    if !response.status().is_success() {
        return Err(ProbeError::Unavailable(format!(
            "HEAD returned {}",
            response.status()
        )));
    }

    response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| ProbeError::Unavailable("no Content-Length header".to_string()))
}

/// Credentials and region come from the standard AWS environment variables.
async fn s3_size(href: &str) -> Result<u64, ProbeError> {
    let url = parse_url(href)?;
    let bucket = url
        .host_str()
        .ok_or_else(|| ProbeError::Unavailable(format!("no bucket in {}", href)))?;
    let key = url.path().trim_start_matches('/');

    let store = AmazonS3Builder::from_env()
        .with_bucket_name(bucket)
        .build()?;
    let meta = store.head(&ObjectPath::from(key)).await?;

    Ok(meta.size as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_local_file_size() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0u8; 1234]).unwrap();

        let size = probe_file_size(file.path().to_str().unwrap()).await;
        assert_eq!(size, Some(1234));
    }

    #[tokio::test]
    async fn test_file_url_size() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"hwsd").unwrap();

        let url = Url::from_file_path(file.path()).unwrap();
        assert_eq!(probe_file_size(url.as_str()).await, Some(4));
    }

    #[tokio::test]
    async fn test_missing_file_is_none() {
        assert_eq!(probe_file_size("/definitely/not/here/T_SAND.tif").await, None);
    }

    #[tokio::test]
    async fn test_directory_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(probe_file_size(dir.path().to_str().unwrap()).await, None);
    }

    #[tokio::test]
    async fn test_unsupported_scheme_is_none() {
        assert_eq!(probe_file_size("ftp://example.com/T_SAND.tif").await, None);
    }
}

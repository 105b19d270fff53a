use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::event::{CloudFrontRequest, OriginRequestEvent};
use crate::normalize::normalize_in_place;

/// Handles one origin-request event and returns the request record to forward.
///
/// Only the first record is used. Faults in the envelope are returned to the
/// caller rather than recovered from.
#[tracing::instrument(skip(event), fields(records = event.records.len()))]
pub fn handle(event: OriginRequestEvent) -> Result<CloudFrontRequest> {
    let record = event
        .records
        .into_iter()
        .next()
        .context("Event contains no records")?;

    let mut request = record.cf.request;
    let original = request.uri.clone();
    let rewrite = normalize_in_place(&mut request.uri);

    info!(
        uri = %original,
        rewritten = %request.uri,
        rewrite = %rewrite,
        "Request normalized"
    );
    debug!(fields = request.rest.len(), "Passing through request fields");

    Ok(request)
}

/// Parses a raw event document and handles it
pub fn handle_json(input: &str) -> Result<CloudFrontRequest> {
    let event: OriginRequestEvent =
        serde_json::from_str(input).context("Failed to parse origin-request event")?;
    handle(event)
}

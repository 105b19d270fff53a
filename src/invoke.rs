use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::InvokeConfig;
use crate::event::CloudFrontRequest;
use crate::handler::handle_json;
use crate::normalize::normalize;

/// `-` names stdin
fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

/// Reads a whole event document from `reader`
pub fn read_event_from(mut reader: impl Read) -> Result<String> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .context("Failed to read event from stdin")?;
    Ok(input)
}

/// Reads the event document from `path`, or stdin for `None` or `-`
pub fn read_event(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if !is_stdin(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read event from: {}", path.display())),
        _ => read_event_from(std::io::stdin().lock()),
    }
}

/// Serializes the returned request record the way the invoker prints it
pub fn render_request(request: &CloudFrontRequest, config: &InvokeConfig) -> Result<String> {
    let rendered = if config.pretty {
        serde_json::to_string_pretty(request)
    } else {
        serde_json::to_string(request)
    };
    rendered.context("Failed to serialize request")
}

/// Runs the hook once against an event document and writes the request record to `out`
pub fn run_handle(
    event_path: Option<&Path>,
    config: &InvokeConfig,
    out: &mut impl Write,
) -> Result<()> {
    let input = read_event(event_path)?;
    info!(bytes = input.len(), "Event received");

    let request = handle_json(&input)?;
    writeln!(out, "{}", render_request(&request, config)?)?;
    Ok(())
}

/// Normalizes bare URIs, one output line per input
pub fn run_rewrite(uris: &[String], out: &mut impl Write) -> Result<()> {
    for uri in uris {
        writeln!(out, "{}", normalize(uri))?;
    }
    Ok(())
}

use super::present_result;

use crate::cli::{DEFAULT_TEXT_DOCUMENT_NAME, OutputArgs};
use crate::error::DashboardError;
use crate::output::{write_history, write_json};

use client_core::{ApiClient, SessionHistory};

use std::io::Write;

use log::{debug, info};
use tokio::io::{AsyncRead, AsyncReadExt};

/// Read all of `reader` as UTF-8 text (stdin when no text argument was given).
pub async fn read_text<R>(mut reader: R) -> Result<String, DashboardError>
where
    R: AsyncRead + Unpin,
{
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .await
        .map_err(|e| DashboardError::input(format!("Failed to read text: {e}")))?;

    debug!("Read {} bytes of text", text.len());
    Ok(text)
}

/// Send `text` for extraction under `name` and print the tasks found.
///
/// Blank text is rejected by the client before any request is made. With
/// `--json` only the raw response body is printed.
pub async fn run<W: Write>(
    client: &ApiClient,
    text: &str,
    name: &str,
    options: &OutputArgs,
    history: &mut SessionHistory,
    out: &mut W,
) -> Result<(), DashboardError> {
    let body = client.process_text(text, Some(name)).await?;
    info!("Text '{name}' processed");

    let fallback_name = if name.trim().is_empty() {
        DEFAULT_TEXT_DOCUMENT_NAME
    } else {
        name
    };

    if options.json {
        write_json(out, &body)?;
        return present_result(out, body, fallback_name, options, history);
    }

    present_result(out, body, fallback_name, options, history)?;
    writeln!(out)?;
    write_history(out, history)?;
    Ok(())
}

use super::present_result;

use crate::cli::OutputArgs;
use crate::error::DashboardError;
use crate::output::{write_history, write_json};

use client_core::{ApiClient, SessionHistory};

use std::io::{Write, stderr};
use std::path::{Path, PathBuf};

use futures_util::future::join_all;
use log::{error, info};
use serde_json::Value;

/// Largest file sent to the backend; bigger files are rejected before reading.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Upload every file concurrently, then print results in argument order.
///
/// A failed file does not stop the others. If any failed, the per-file errors
/// are printed and an [`DashboardError::UploadFailed`] is returned after the
/// history summary.
///
/// With `--json`, stdout carries a single JSON array of the successful response
/// bodies and the per-file errors go to stderr.
pub async fn run<W: Write>(
    client: &ApiClient,
    files: &[PathBuf],
    options: &OutputArgs,
    history: &mut SessionHistory,
    out: &mut W,
) -> Result<(), DashboardError> {
    info!("Uploading {} file(s)", files.len());

    let results = join_all(files.iter().map(|path| upload_one(client, path))).await;

    let mut failed = 0;
    let mut bodies = Vec::new();
    for (path, result) in files.iter().zip(results) {
        let fallback_name = file_name_of(path).unwrap_or_else(|_| path.display().to_string());

        let presented = result.and_then(|body| {
            let raw = options.json.then(|| body.clone());
            present_result(out, body, &fallback_name, options, history)?;
            bodies.extend(raw);
            Ok(())
        });

        match presented {
            Ok(()) if options.json => {}
            Ok(()) => writeln!(out)?,
            Err(e) => {
                failed += 1;
                error!("Upload of {} failed: {e}", path.display());
                if options.json {
                    write_failure(&mut stderr(), path, &e)?;
                } else {
                    write_failure(out, path, &e)?;
                }
            }
        }
    }

    if options.json {
        write_json(out, &Value::Array(bodies))?;
    } else {
        write_history(out, history)?;
    }

    if failed > 0 {
        return Err(DashboardError::upload_failed(failed, files.len()));
    }
    Ok(())
}

fn write_failure<W: Write>(
    out: &mut W,
    path: &Path,
    e: &DashboardError,
) -> Result<(), DashboardError> {
    writeln!(out, "✗ {}: {}", path.display(), e.user_message())?;
    if let Some(hint) = e.user_hint() {
        writeln!(out, "  {hint}")?;
    }
    writeln!(out)?;
    Ok(())
}

async fn upload_one(client: &ApiClient, path: &Path) -> Result<Value, DashboardError> {
    let file_name = file_name_of(path)?;
    check_size(path).await?;

    let content = tokio::fs::read(path)
        .await
        .map_err(|e| DashboardError::input(format!("Failed to read {}: {e}", path.display())))?;

    info!("Read {} bytes from {}", content.len(), path.display());
    Ok(client.upload_file(content, &file_name).await?)
}

async fn check_size(path: &Path) -> Result<(), DashboardError> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| DashboardError::input(format!("Failed to read {}: {e}", path.display())))?;

    if metadata.len() > MAX_UPLOAD_BYTES {
        return Err(DashboardError::input(format!(
            "{} is {} bytes, over the {} MB upload limit",
            path.display(),
            metadata.len(),
            MAX_UPLOAD_BYTES / (1024 * 1024)
        )));
    }
    Ok(())
}

/// Name sent as the multipart filename: the last path component.
pub fn file_name_of(path: &Path) -> Result<String, DashboardError> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| DashboardError::input(format!("Not a file path: {}", path.display())))
}

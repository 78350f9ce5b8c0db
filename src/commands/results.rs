use anyhow::Result;
use std::io::Write;

use crate::{
    runtime::Runtime,
    style::{ReportId, StyleTransferApi},
};

use super::input::{read_json, write_json};

/// Print the list of stored style transfer results.
#[tracing::instrument(skip(api, out))]
pub async fn list_results<A: StyleTransferApi, W: Write>(api: &A, out: &mut W) -> Result<()> {
    let results = api.get_style_transfer_results().await?;
    write_json(out, &results)
}

/// Print one stored result.
#[tracing::instrument(skip(api, out))]
pub async fn show_result<A: StyleTransferApi, W: Write>(
    api: &A,
    report_id: &ReportId,
    out: &mut W,
) -> Result<()> {
    let result = api.get_style_transfer_result(report_id).await?;
    write_json(out, &result)
}

/// Save a result read from a JSON file (or stdin) and print the response.
#[tracing::instrument(skip(api, runtime, out))]
pub async fn save_result<A: StyleTransferApi, R: Runtime, W: Write>(
    api: &A,
    runtime: &R,
    source: &str,
    out: &mut W,
) -> Result<()> {
    let data = read_json(runtime, source)?;
    let response = api.save_style_transfer_result(&data).await?;
    write_json(out, &response)
}

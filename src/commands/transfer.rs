use anyhow::{Result, bail};
use log::info;
use std::io::Write;

use crate::{
    runtime::Runtime,
    style::{InputType, ReportId, StyleTransferApi, TransferResponse},
};

use super::input::{read_input, read_json, write_json};

/// Arguments of the `transfer` command.
#[derive(Debug, Clone)]
pub struct TransferOptions {
    pub input_type: InputType,
    pub new_theme: String,
    pub provider: String,
    pub model: String,
    pub source_text: Option<String>,
    /// Path to read the source text from, `-` for stdin.
    pub source_file: Option<String>,
    pub report_id: Option<ReportId>,
    /// Print only the generated text instead of the JSON response.
    pub text_only: bool,
}

/// Submit a style transfer job and print the backend's response.
#[tracing::instrument(skip(api, runtime, options, out))]
pub async fn transfer<A: StyleTransferApi, R: Runtime, W: Write>(
    api: &A,
    runtime: &R,
    options: TransferOptions,
    out: &mut W,
) -> Result<()> {
    let source_text = match (&options.source_text, &options.source_file) {
        (Some(text), _) => text.clone(),
        (None, Some(file)) => read_input(runtime, file)?,
        (None, None) => String::new(),
    };

    match options.input_type {
        InputType::Text | InputType::File if source_text.is_empty() => {
            bail!(
                "Input type '{}' requires --source-text or --source-file",
                options.input_type
            )
        }
        InputType::Analysis if options.report_id.is_none() => {
            bail!("Input type 'analysis' requires --report-id")
        }
        _ => {}
    }

    info!(
        "Requesting style transfer via {}/{} ({} input)",
        options.provider, options.model, options.input_type
    );

    let response = api
        .perform_style_transfer(
            options.input_type.as_str(),
            &options.new_theme,
            &options.provider,
            &options.model,
            &source_text,
            options.report_id,
        )
        .await?;

    if options.text_only {
        let parsed = TransferResponse::from_value(&response)?;
        writeln!(out, "{}", parsed.result)?;
    } else {
        write_json(out, &response)?;
    }
    Ok(())
}

/// Submit a raw request body to the legacy transfer endpoint.
#[tracing::instrument(skip(api, runtime, out))]
pub async fn submit<A: StyleTransferApi, R: Runtime, W: Write>(
    api: &A,
    runtime: &R,
    source: &str,
    out: &mut W,
) -> Result<()> {
    let data = read_json(runtime, source)?;
    let response = api.transfer_style(&data).await?;
    write_json(out, &response)
}

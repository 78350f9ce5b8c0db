//! Client for the style transfer API: job submission and stored results.

mod client;
mod types;

pub use client::{LEGACY_TRANSFER_PATH, StyleTransferApi, StyleTransferClient, TRANSFER_PATH};
#[cfg(test)]
pub use client::MockStyleTransferApi;
pub use types::{InputType, ReportId, StyleTransferPayload, TransferResponse};

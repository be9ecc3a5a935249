// SPDX-License-Identifier: MPL-2.0
//! Access to the APOD web API.
//!
//! - [`client`]: HTTP transport seam and endpoint construction
//! - [`fetcher`]: Gallery fetch pipeline (validate, request, decode, select)
//! - [`token`]: Request tokens that let stale responses be discarded

pub mod client;
pub mod fetcher;
pub mod token;

pub use client::{ApiEndpoint, ApodTransport, HttpResponse, ReqwestTransport};
pub use fetcher::GalleryFetcher;
pub use token::{RequestToken, RequestTracker};

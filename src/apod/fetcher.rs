// SPDX-License-Identifier: MPL-2.0
//! Gallery fetch pipeline.
//!
//! A fetch validates the selected dates, sends exactly one request for the
//! range, decodes the response and keeps the first
//! [`MAX_GALLERY_ITEMS`](crate::domain::record::MAX_GALLERY_ITEMS) images.
//! Validation failures never touch the network.

use super::client::{ApiEndpoint, ApodTransport};
use crate::domain::date_range::{DateBounds, DateRange, DateSelection};
use crate::domain::record::{parse_records, select_images, ImageRecord};
use crate::error::{FetchError, GalleryError};
use reqwest::Url;
use std::sync::Arc;

/// Fetches gallery content and image bytes through a transport.
#[derive(Debug)]
pub struct GalleryFetcher<T> {
    transport: Arc<T>,
    endpoint: ApiEndpoint,
}

impl<T> Clone for GalleryFetcher<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            endpoint: self.endpoint.clone(),
        }
    }
}

impl<T: ApodTransport> GalleryFetcher<T> {
    pub fn new(transport: T, endpoint: ApiEndpoint) -> Self {
        Self {
            transport: Arc::new(transport),
            endpoint,
        }
    }

    /// Validates `selection` against `bounds`, then fetches the range.
    pub async fn fetch_gallery(
        &self,
        selection: DateSelection,
        bounds: DateBounds,
    ) -> Result<Vec<ImageRecord>, GalleryError> {
        let range = selection.validate(bounds)?;
        Ok(self.fetch_range(range).await?)
    }

    /// Fetches an already validated range.
    pub async fn fetch_range(&self, range: DateRange) -> Result<Vec<ImageRecord>, FetchError> {
        let url = self.endpoint.range_url(range);
        tracing::debug!(start = %range.start(), end = %range.end(), "requesting APOD range");

        let response = self.transport.get(url).await?;
        if !response.is_success() {
            return Err(FetchError::Http {
                status: response.status,
            });
        }

        let records = parse_records(&response.body)?;
        let received = records.len();
        let images = select_images(records);
        tracing::debug!(received, kept = images.len(), "APOD range decoded");
        Ok(images)
    }

    /// Downloads the bytes behind a record's image URL.
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let parsed = Url::parse(url).map_err(|_| FetchError::InvalidUrl(url.to_string()))?;
        let response = self.transport.get(parsed).await?;
        if !response.is_success() {
            return Err(FetchError::Http {
                status: response.status,
            });
        }
        Ok(response.body)
    }

    #[must_use]
    pub fn endpoint(&self) -> &ApiEndpoint {
        &self.endpoint
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{body_of, fetcher_with, FakeTransport};
    use super::*;
    use crate::error::ValidationError;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    fn bounds() -> DateBounds {
        DateBounds::for_today(date(2024, 6, 1))
    }

    fn january_selection() -> DateSelection {
        DateSelection::new(Some(date(2024, 1, 1)), Some(date(2024, 1, 3)))
    }

    #[tokio::test]
    async fn valid_range_issues_exactly_one_request() {
        let body = body_of(&[(1, "image"), (2, "image"), (3, "image")]);
        let (fetcher, transport) = fetcher_with(FakeTransport::replying(200, &body));

        fetcher
            .fetch_gallery(january_selection(), bounds())
            .await
            .expect("fetch succeeds");

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        let query: Vec<(String, String)> = requests[0]
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(query.contains(&("start_date".into(), "2024-01-01".into())));
        assert!(query.contains(&("end_date".into(), "2024-01-03".into())));
        assert!(query.contains(&("api_key".into(), "TEST_KEY".into())));
        assert_eq!(requests[0].path(), "/planetary/apod");
    }

    #[tokio::test]
    async fn one_video_among_three_records_leaves_two_in_order() {
        let body = body_of(&[(1, "image"), (2, "video"), (3, "image")]);
        let (fetcher, _) = fetcher_with(FakeTransport::replying(200, &body));

        let records = fetcher
            .fetch_gallery(january_selection(), bounds())
            .await
            .expect("fetch succeeds");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, date(2024, 1, 1));
        assert_eq!(records[1].date, date(2024, 1, 3));
    }

    #[tokio::test]
    async fn inverted_range_never_reaches_network() {
        let (fetcher, transport) = fetcher_with(FakeTransport::replying(200, "[]"));
        let inverted = DateSelection::new(Some(date(2024, 1, 3)), Some(date(2024, 1, 1)));

        let result = fetcher.fetch_gallery(inverted, bounds()).await;

        assert!(matches!(
            result,
            Err(GalleryError::Validation(ValidationError::StartAfterEnd { .. }))
        ));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn missing_dates_never_reach_network() {
        let (fetcher, transport) = fetcher_with(FakeTransport::replying(200, "[]"));

        for selection in [
            DateSelection::new(None, Some(date(2024, 1, 1))),
            DateSelection::new(Some(date(2024, 1, 1)), None),
            DateSelection::default(),
        ] {
            let result = fetcher.fetch_gallery(selection, bounds()).await;
            assert!(matches!(result, Err(GalleryError::Validation(_))));
        }
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn server_error_is_fetch_error() {
        let (fetcher, _) = fetcher_with(FakeTransport::replying(500, "Internal Server Error"));

        let result = fetcher.fetch_gallery(january_selection(), bounds()).await;

        assert_eq!(
            result,
            Err(GalleryError::Fetch(FetchError::Http { status: 500 }))
        );
    }

    #[tokio::test]
    async fn transport_failure_is_fetch_error() {
        let (fetcher, _) = fetcher_with(FakeTransport::failing(FetchError::Network(
            "connection refused".into(),
        )));

        let result = fetcher.fetch_gallery(january_selection(), bounds()).await;

        assert!(matches!(
            result,
            Err(GalleryError::Fetch(FetchError::Network(_)))
        ));
    }

    #[tokio::test]
    async fn malformed_body_is_fetch_error() {
        let (fetcher, _) = fetcher_with(FakeTransport::replying(200, r#"{"msg":"oops"}"#));

        let result = fetcher.fetch_gallery(january_selection(), bounds()).await;

        assert!(matches!(
            result,
            Err(GalleryError::Fetch(FetchError::InvalidBody(_)))
        ));
    }

    #[tokio::test]
    async fn fifty_images_are_capped_at_nine() {
        let entries: Vec<(u32, &str)> = (1..=28)
            .chain(1..=22)
            .map(|day| (day, "image"))
            .collect();
        let (fetcher, _) = fetcher_with(FakeTransport::replying(200, &body_of(&entries)));

        let records = fetcher
            .fetch_gallery(january_selection(), bounds())
            .await
            .expect("fetch succeeds");

        assert_eq!(records.len(), 9);
        assert_eq!(records[8].title, "Day 9");
    }

    #[tokio::test]
    async fn videos_only_yields_empty_gallery() {
        let body = body_of(&[(1, "video"), (2, "video")]);
        let (fetcher, _) = fetcher_with(FakeTransport::replying(200, &body));

        let records = fetcher
            .fetch_gallery(january_selection(), bounds())
            .await
            .expect("empty result is not an error");

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn fetch_image_rejects_unparsable_url() {
        let (fetcher, transport) = fetcher_with(FakeTransport::replying(200, ""));

        let result = fetcher.fetch_image("not a url").await;

        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn fetch_image_returns_body_bytes() {
        let (fetcher, transport) = fetcher_with(FakeTransport::replying(200, "JPEGDATA"));

        let bytes = fetcher
            .fetch_image("https://apod.nasa.gov/apod/image/2401/day1.jpg")
            .await
            .expect("download succeeds");

        assert_eq!(bytes, b"JPEGDATA");
        assert_eq!(transport.requests().len(), 1);
    }
}

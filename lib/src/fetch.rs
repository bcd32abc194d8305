//! Image acquisition over HTTP
//!
//! A single blocking GET per URL. There is no retry; callers decide whether
//! to ask the user for another URL.

use crate::error::{AsciiError, Result};
use image::DynamicImage;
use reqwest::blocking::Client;
use std::time::Duration;

/// Anything that can turn a URL into a decoded image
pub trait ImageSource {
    fn load(&self, url: &str) -> Result<DynamicImage>;
}

/// Check that a URL at least looks like an HTTP(S) address
pub fn validate_url(url: &str) -> Result<&str> {
    let trimmed = url.trim();
    if trimmed.starts_with("http") {
        Ok(trimmed)
    } else {
        Err(AsciiError::InvalidUrl(trimmed.to_string()))
    }
}

/// Decode raw bytes in any format the `image` crate recognises
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    Ok(image::load_from_memory(bytes)?)
}

/// Blocking HTTP image fetcher
pub struct ImageFetcher {
    client: Client,
}

impl ImageFetcher {
    /// Create a fetcher; `None` means requests never time out
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Download `url` and decode the body as an image
    pub fn fetch(&self, url: &str) -> Result<DynamicImage> {
        let url = validate_url(url)?;
        log::info!("fetching {}", url);

        let response = self.client.get(url).send()?.error_for_status()?;
        let bytes = response.bytes()?;
        log::debug!("received {} bytes", bytes.len());

        let img = decode_image(&bytes)?;
        log::info!("decoded {}x{} image", img.width(), img.height());
        Ok(img)
    }
}

impl ImageSource for ImageFetcher {
    fn load(&self, url: &str) -> Result<DynamicImage> {
        self.fetch(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn png_bytes() -> Vec<u8> {
        let img = RgbImage::from_pixel(8, 6, Rgb([255, 0, 0]));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    /// Mount a GET /image.png responder and return its URL
    async fn serve(server: &MockServer, response: ResponseTemplate) -> String {
        Mock::given(method("GET"))
            .and(path("/image.png"))
            .respond_with(response)
            .expect(1)
            .mount(server)
            .await;
        format!("{}/image.png", server.uri())
    }

    /// The blocking client must not run on an async worker thread
    async fn fetch_blocking(url: String) -> Result<DynamicImage> {
        tokio::task::spawn_blocking(move || {
            ImageFetcher::new(Some(Duration::from_secs(10)))?.fetch(&url)
        })
        .await
        .unwrap()
    }

    #[test]
    fn test_validate_url() {
        assert_eq!(validate_url(" https://a.b/c.png ").unwrap(), "https://a.b/c.png");
        assert!(validate_url("http://x").is_ok());
        assert!(matches!(validate_url("ftp://x"), Err(AsciiError::InvalidUrl(_))));
        assert!(matches!(validate_url("www.example.com"), Err(AsciiError::InvalidUrl(_))));
    }

    #[test]
    fn test_decode_png() {
        let img = decode_image(&png_bytes()).unwrap();
        assert_eq!((img.width(), img.height()), (8, 6));
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(matches!(
            decode_image(b"definitely not an image"),
            Err(AsciiError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_decodes_response() {
        let server = MockServer::start().await;
        let url = serve(
            &server,
            ResponseTemplate::new(200)
                .set_body_bytes(png_bytes())
                .insert_header("Content-Type", "image/png"),
        )
        .await;

        let img = fetch_blocking(url).await.unwrap();
        assert_eq!((img.width(), img.height()), (8, 6));
    }

    #[tokio::test]
    async fn test_fetch_non_image_body_is_decode_error() {
        let server = MockServer::start().await;
        let url = serve(
            &server,
            ResponseTemplate::new(200)
                .set_body_string("<html>nope</html>")
                .insert_header("Content-Type", "text/html"),
        )
        .await;

        assert!(matches!(fetch_blocking(url).await, Err(AsciiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_fetch_error_status_is_fetch_error() {
        let server = MockServer::start().await;
        let url = serve(&server, ResponseTemplate::new(404)).await;

        let err = fetch_blocking(url).await.unwrap_err();
        match err {
            AsciiError::Fetch(e) => assert_eq!(e.status().map(|s| s.as_u16()), Some(404)),
            other => panic!("expected a fetch error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_rejects_bad_url_without_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        let url = server.uri().replacen("http://", "", 1);

        assert!(matches!(fetch_blocking(url).await, Err(AsciiError::InvalidUrl(_))));
    }
}

//! Fetching images by URL
//!
//! Network access is a collaborator: [`ImageFetcher`] implementations return
//! an already decoded [`ImageSource`]. Closures taking a URL implement the
//! trait, which keeps tests and custom transports simple.

use crate::{ImageSource, Result};

/// Returns a decoded image for a URL.
pub trait ImageFetcher {
    fn get_image(&self, url: &str) -> Result<ImageSource>;
}

impl<F> ImageFetcher for F
where
    F: Fn(&str) -> Result<ImageSource>,
{
    fn get_image(&self, url: &str) -> Result<ImageSource> {
        self(url)
    }
}

#[cfg(feature = "http")]
pub use http::HttpImageFetcher;

#[cfg(feature = "http")]
mod http {
    use super::ImageFetcher;
    use crate::{Error, ImageSource, Result, native};
    use std::io::Read;

    /// Largest response body accepted.
    const MAX_BODY_BYTES: u64 = 32 * 1024 * 1024;

    /// Blocking HTTP(S) GET fetcher.
    #[derive(Debug, Clone)]
    pub struct HttpImageFetcher {
        agent: ureq::Agent,
    }

    impl Default for HttpImageFetcher {
        fn default() -> Self {
            Self::new()
        }
    }

    impl HttpImageFetcher {
        pub fn new() -> Self {
            Self::with_agent(ureq::Agent::new())
        }

        pub fn with_agent(agent: ureq::Agent) -> Self {
            Self { agent }
        }
    }

    impl ImageFetcher for HttpImageFetcher {
        fn get_image(&self, url: &str) -> Result<ImageSource> {
            let fetch_error = |message: String| Error::Fetch {
                url: url.to_string(),
                message,
            };

            tracing::debug!(url, "Fetching image");
            let response = self
                .agent
                .get(url)
                .call()
                .map_err(|e| fetch_error(e.to_string()))?;

            let mut body = Vec::new();
            response
                .into_reader()
                .take(MAX_BODY_BYTES)
                .read_to_end(&mut body)
                .map_err(|e| fetch_error(e.to_string()))?;

            Ok(ImageSource::from(native::decode_data(&body)?))
        }
    }
}

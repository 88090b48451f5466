//! Remote image assets.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{ApiError, ApiResult};
use crate::http::{HttpClient, SyncHttpClient};

/// Resize capability of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resize {
    /// The CDN serves only the original size.
    Unsupported,
    /// Any power of two.
    Unbounded,
    /// Powers of two up to and including the cap.
    UpTo(u32),
}

/// An image hosted by the API, downloaded only when [`read`](Asset::read) is called.
///
/// Equal and hashed by URL.
#[derive(Clone)]
pub struct Asset<H = HttpClient> {
    http: H,
    url: String,
    resize: Resize,
    size: Option<u32>,
}

impl<H> Asset<H> {
    /// An asset that cannot be resized.
    pub fn new(http: H, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
            resize: Resize::Unsupported,
            size: None,
        }
    }

    /// A resizable asset; `max_size` of `None` means no upper bound.
    pub fn resizable(http: H, url: impl Into<String>, max_size: Option<u32>) -> Self {
        Self {
            resize: match max_size {
                Some(max) => Resize::UpTo(max),
                None => Resize::Unbounded,
            },
            ..Self::new(http, url)
        }
    }

    /// URL of the asset at its current size.
    ///
    /// A resized asset points at `<stem>_<size>.png`.
    pub fn url(&self) -> String {
        match self.size {
            Some(size) => {
                let stem = self.url.strip_suffix(".png").unwrap_or(&self.url);
                format!("{}_{}.png", stem, size)
            }
            None => self.url.clone(),
        }
    }

    /// URL as received from the API.
    pub fn original_url(&self) -> &str {
        &self.url
    }

    pub fn can_resize(&self) -> bool {
        self.resize != Resize::Unsupported
    }

    /// Size cap: `Some(-1)` if not resizable, `None` if unbounded.
    pub fn max_size(&self) -> Option<i64> {
        match self.resize {
            Resize::Unsupported => Some(-1),
            Resize::Unbounded => None,
            Resize::UpTo(max) => Some(i64::from(max)),
        }
    }

    /// Size set by [`resize`](Asset::resize), if any.
    pub fn size(&self) -> Option<u32> {
        self.size
    }

    /// A copy of this asset at `size` pixels.
    ///
    /// `size` must be a power of two no larger than the asset's cap.
    pub fn resize(&self, size: u32) -> ApiResult<Self>
    where
        H: Clone,
    {
        let max = match self.resize {
            Resize::Unsupported => {
                return Err(ApiError::InvalidResize("This asset does not support resizing.".into()))
            }
            Resize::Unbounded => None,
            Resize::UpTo(max) => Some(max),
        };
        if !size.is_power_of_two() {
            return Err(ApiError::InvalidResize(format!("Size must be a power of 2, got {}.", size)));
        }
        if let Some(max) = max {
            if size > max {
                return Err(ApiError::InvalidResize(format!(
                    "Size must be less than or equal to {}.",
                    max
                )));
            }
        }
        Ok(Self {
            size: Some(size),
            ..self.clone()
        })
    }

    /// Transport handle the asset downloads through.
    pub fn http(&self) -> &H {
        &self.http
    }
}

impl Asset<HttpClient> {
    /// Download the image bytes.
    pub async fn read(&self) -> ApiResult<Vec<u8>> {
        self.http.request_bytes(&self.url()).await
    }
}

impl Asset<SyncHttpClient> {
    /// Download the image bytes.
    pub fn read(&self) -> ApiResult<Vec<u8>> {
        self.http.request_bytes(&self.url())
    }
}

impl<H, O> PartialEq<Asset<O>> for Asset<H> {
    fn eq(&self, other: &Asset<O>) -> bool {
        self.url() == other.url()
    }
}

impl<H> Eq for Asset<H> {}

impl<H> Hash for Asset<H> {
    fn hash<S: Hasher>(&self, state: &mut S) {
        self.url().hash(state);
    }
}

impl<H> fmt::Debug for Asset<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Asset").field("url", &self.url()).finish()
    }
}

//! Herobar Image
//!
//! Remote images for image-backed headers.
//!
//! Fetches run off the UI thread on a tokio runtime and can be cancelled at
//! any time: the cancellation flag is checked before the fetch starts and
//! again after it completes. Results are never pushed into the UI; the UI
//! thread polls its [`ImageRequest`] and applies the outcome itself.
//!
//! # Example
//!
//! ```ignore
//! use herobar_image::{HttpFetcher, ImageSource, RemoteImageLoader};
//!
//! let loader = RemoteImageLoader::new(HttpFetcher::new(), runtime.handle().clone());
//! let mut request = loader.request(&url);
//!
//! // Later, on the UI thread
//! if let Some(outcome) = request.try_take() {
//!     apply(outcome);
//! }
//! ```

mod decode;
mod error;
mod fetch;
mod loader;

pub use decode::decode;
pub use error::{ImageError, Result};
#[cfg(feature = "network")]
pub use fetch::HttpFetcher;
pub use fetch::ImageFetcher;
pub use loader::{ImageRequest, ImageSource, LoadOutcome, RemoteImageLoader};
pub use url::Url;

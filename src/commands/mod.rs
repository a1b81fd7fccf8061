mod platform;
mod url;

pub use platform::platform;
pub use url::{UrlOptions, url};

pub mod cookies;
pub mod headers;
pub use cookies::{add_cookies_to_headers, build_cookie_header, extract_cookies};
pub use headers::{api_headers, login_headers};

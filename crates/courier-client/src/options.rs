use crate::method::RequestMethod;
use http::HeaderMap;

/// The options we want to pass along with a plain request. Everything here
/// reaches the transport verbatim; nothing is validated or rewritten.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: String,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: RequestMethod::Get.as_str().to_string(),
            headers: HeaderMap::new(),
            body: None,
        }
    }
}

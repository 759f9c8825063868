//! HTTP transport layer

mod http_transport;
mod multipart;

pub use http_transport::{HttpResponse, HttpTransport, ReqwestTransport};
pub use multipart::MultipartForm;

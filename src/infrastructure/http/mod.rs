mod reqwest_transport;

pub use reqwest_transport::{API_KEY_HEADER, DEFAULT_REQUEST_TIMEOUT, ReqwestTransport};

mod http_transport;

pub use http_transport::{
    Credential, FormPart, HttpMethod, HttpTransport, RequestBody, TransportError,
    TransportRequest, TransportResponse,
};

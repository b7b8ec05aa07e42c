use std::time::Duration;

use reqwest::blocking::{multipart, Client};
use reqwest::StatusCode;
use thiserror::Error;
use xml_map_core::{write, XmlNode};

use crate::devices::Device;

/// Fixed controller path on every appliance.
pub const API_PATH: &str = "/webconsole/APIController";

/// Errors returned by the appliance API client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("failed to serialize request body: {0}")]
    Body(#[from] xml_map_core::WriteError),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        source: reqwest::Error,
    },
    #[error("request to {url} returned status {status}")]
    Status { url: String, status: StatusCode },
}

/// Blocking client for the Sophos XML configuration API.
///
/// One authenticated POST per query group; the request body is an XML
/// document carrying the login credentials and one empty tag per requested
/// object type, sent as a multipart form field named `reqxml`.
pub struct ApiClient {
    http: Client,
}

impl ApiClient {
    /// Build a client with the given request timeout.
    ///
    /// `insecure_tls` disables certificate verification. Appliances commonly
    /// ship self-signed certificates, but this stays an explicit opt-in.
    pub fn new(timeout: Duration, insecure_tls: bool) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(insecure_tls)
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self { http })
    }

    /// Request a batch of object types from one device in a single call and
    /// return the raw response body.
    pub fn fetch_group(&self, device: &Device, types: &[String]) -> Result<String, ApiError> {
        let url = format!("https://{}:{}{}", device.ip, device.port, API_PATH);
        let body = request_body(device, types)?;
        let form = multipart::Form::new().part("reqxml", multipart::Part::bytes(body));

        let response = self
            .http
            .post(&url)
            .header(reqwest::header::ACCEPT, "application/xml")
            .multipart(form)
            .send()
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { url, status });
        }

        response
            .text()
            .map_err(|source| ApiError::Transport { url, source })
    }
}

/// Serialize the `<Request>` document for a batch of object types.
/// Credentials pass through the XML writer, so reserved characters are
/// escaped rather than breaking the document.
fn request_body(device: &Device, types: &[String]) -> Result<Vec<u8>, xml_map_core::WriteError> {
    write(&request_tree(device, types))
}

fn request_tree(device: &Device, types: &[String]) -> XmlNode {
    let mut login = XmlNode::new("Login");
    login
        .children
        .push(XmlNode::with_text("Username", device.username.clone()));
    login
        .children
        .push(XmlNode::with_text("Password", device.password.clone()));

    let mut get = XmlNode::new("Get");
    for object_type in types {
        get.children.push(XmlNode::new(object_type.clone()));
    }

    let mut request = XmlNode::new("Request");
    request.children.push(login);
    request.children.push(get);
    request
}

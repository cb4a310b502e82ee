//! Gateway HTTP client.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use log::debug;
use ureq::Agent;
use ureq::http::Response;
use url::Url;
use zip::ZipArchive;

use crate::error::{Error, Result};
use crate::paginate::FunctionPages;
use crate::types::{FunctionListPage, InvokeOutput, RemoteErrorBody};

/// Client for one gateway endpoint.
///
/// Remote errors surface as [`Error::Remote`] with the gateway's own code
/// and message; local precondition failures surface as
/// [`Error::Validation`] before any request is made.
pub struct GatewayClient {
    base: Url,
    agent: Agent,
}

impl GatewayClient {
    /// Creates a client for the gateway at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if `base_url` does not parse.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base =
            Url::parse(base_url).map_err(|e| Error::InvalidUrl(format!("{base_url}: {e}")))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        // Non-2xx statuses carry a gateway error body we want to read, so
        // they must come back as responses rather than transport errors.
        let agent: Agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();

        Ok(Self { base, agent })
    }

    /// Deletes a deployed function.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Remote`] with the gateway's error if the delete is
    /// rejected (e.g. the function does not exist).
    pub fn delete_function(&self, name: &str) -> Result<()> {
        let url = self.endpoint(&format!("system/functions/{name}"))?;
        debug!("DELETE {url}");

        let mut response = self
            .agent
            .delete(url.as_str())
            .call()
            .map_err(transport_error)?;
        ensure_success(&mut response)
    }

    /// Invokes a function with an optional payload and returns its
    /// response, including a captured log tail when the gateway provides
    /// one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Remote`] if the gateway rejects the invocation.
    pub fn invoke_function(&self, name: &str, payload: Option<&[u8]>) -> Result<InvokeOutput> {
        let url = self.endpoint(&format!("function/{name}"))?;
        debug!("POST {url}");

        let request = self.agent.post(url.as_str()).header("X-Log-Tail", "capture");
        let mut response = match payload {
            Some(bytes) => request.send(bytes),
            None => request.send_empty(),
        }
        .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.body_mut().read_to_vec().unwrap_or_default();
            return Err(remote_error(status.as_u16(), &body));
        }

        let log_tail = response
            .headers()
            .get("X-Function-Log")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let payload = response
            .body_mut()
            .read_to_vec()
            .map_err(|e| Error::Http(format!("read error: {e}")))?;

        Ok(InvokeOutput {
            status: status.as_u16(),
            payload,
            log_tail,
        })
    }

    /// Returns the lazy, paginated listing of deployed functions.
    ///
    /// Pages are fetched as the sequence is consumed; nothing is requested
    /// until the first page is asked for. The sequence is finite and not
    /// restartable.
    pub fn list_functions(
        &self,
    ) -> FunctionPages<impl FnMut(Option<&str>) -> Result<FunctionListPage> + '_> {
        FunctionPages::new(move |token: Option<&str>| self.page_of_functions(token))
    }

    /// Replaces a function's code with the archive at `zip_path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] before any request is made if the
    /// path does not exist, does not have a `.zip` extension, or is not a
    /// readable zip archive. Returns [`Error::Remote`] if the gateway
    /// rejects the upload.
    pub fn update_function_code(&self, name: &str, zip_path: &Path) -> Result<()> {
        if !zip_path.is_file() {
            return Err(Error::Validation(format!(
                "{} does not exist",
                zip_path.display()
            )));
        }
        if zip_path.extension().and_then(|e| e.to_str()) != Some("zip") {
            return Err(Error::Validation(format!(
                "{} is not a .zip archive",
                zip_path.display()
            )));
        }

        let bytes = fs::read(zip_path)?;
        ZipArchive::new(Cursor::new(bytes.as_slice()))
            .map_err(|e| Error::Validation(format!("invalid zip archive: {e}")))?;

        let url = self.endpoint(&format!("system/functions/{name}/code"))?;
        debug!("PUT {url} ({} bytes)", bytes.len());

        let mut response = self
            .agent
            .put(url.as_str())
            .header("Content-Type", "application/zip")
            .send(bytes.as_slice())
            .map_err(transport_error)?;
        ensure_success(&mut response)
    }

    fn page_of_functions(&self, token: Option<&str>) -> Result<FunctionListPage> {
        let mut url = self.endpoint("system/functions")?;
        if let Some(token) = token {
            url.query_pairs_mut().append_pair("nextToken", token);
        }
        debug!("GET {url}");

        let mut response = self
            .agent
            .get(url.as_str())
            .call()
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.body_mut().read_to_vec().unwrap_or_default();
            return Err(remote_error(status.as_u16(), &body));
        }

        let bytes = response
            .body_mut()
            .read_to_vec()
            .map_err(|e| Error::Http(format!("read error: {e}")))?;
        serde_json::from_slice::<FunctionListPage>(&bytes).map_err(Error::from)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|e| Error::InvalidUrl(e.to_string()))
    }
}

fn ensure_success(response: &mut Response<ureq::Body>) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.body_mut().read_to_vec().unwrap_or_default();
    Err(remote_error(status.as_u16(), &body))
}

fn remote_error(status: u16, body: &[u8]) -> Error {
    match serde_json::from_slice::<RemoteErrorBody>(body) {
        Ok(remote) => Error::Remote {
            code: remote.code,
            message: remote.message,
        },
        Err(_) => Error::Remote {
            code: format!("HTTP{status}"),
            message: String::from_utf8_lossy(body).trim().to_string(),
        },
    }
}

fn transport_error(e: ureq::Error) -> Error {
    match e {
        ureq::Error::StatusCode(code) => Error::Http(format!("HTTP {code}")),
        ureq::Error::Io(io_err) => Error::Http(format!("transport error: {io_err}")),
        other => Error::Http(format!("request failed: {other}")),
    }
}

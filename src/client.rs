use std::fmt;
use std::time::Duration;

use reqwest::{
    header::{self, HeaderValue},
    Method, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::{ClientOptions, Params, Result, TsuruError};

/// Joins path segments onto the base host URL.
///
/// Slashes at the edges of the host and of each segment are trimmed, so the
/// result never contains `//` after the scheme. Segments are inserted
/// verbatim. A segment that is empty after trimming is a
/// [`TsuruError::Config`] error rather than being skipped.
///
/// Example: `("https://tsuru.example.com/", ["apps", "web"])` →
/// `"https://tsuru.example.com/apps/web"`
pub fn endpoint_url(host: &str, segments: &[&str]) -> Result<String> {
    let mut url = host.trim_end_matches('/').to_owned();
    for (index, segment) in segments.iter().enumerate() {
        let segment = segment.trim_matches('/');
        if segment.is_empty() {
            return Err(TsuruError::Config(format!(
                "empty path segment at index {index} for {url}"
            )));
        }
        url.push('/');
        url.push_str(segment);
    }
    Ok(url)
}

/// Request body encoding. A request carries at most one.
enum Body<'a> {
    Empty,
    Json(Vec<u8>),
    Form(&'a Params),
}

impl Body<'_> {
    fn json<P: Serialize + ?Sized>(payload: &P) -> Result<Self> {
        serde_json::to_vec(payload)
            .map(Body::Json)
            .map_err(TsuruError::Encode)
    }
}

const SUCCESS_OK: &[StatusCode] = &[StatusCode::OK];
const SUCCESS_CREATED: &[StatusCode] = &[StatusCode::OK, StatusCode::CREATED];

#[derive(Clone)]
/// HTTP transport for the Tsuru management API.
///
/// A constructed client has passed an authenticated round trip against the
/// target, see [`TsuruClient::connect`].
pub struct TsuruClient {
    http: reqwest::Client,
    host: String,
    authorization: HeaderValue,
    options: ClientOptions,
}

impl fmt::Debug for TsuruClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TsuruClient")
            .field("host", &self.host)
            .field("token", &"<redacted>")
            .field("options", &self.options)
            .finish()
    }
}

impl TsuruClient {
    /// Creates a client and verifies it against the target.
    ///
    /// Fails with [`TsuruError::Config`] before any network call when `host`
    /// or `token` is empty. Otherwise lists plans once; if that call fails
    /// its error is returned and no client is produced.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tsuru_http::TsuruClient;
    ///
    /// # async fn run() -> tsuru_http::Result<()> {
    /// let tsuru = TsuruClient::connect("https://tsuru.example.com", "my-token").await?;
    /// let apps = tsuru.list_apps().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(host: impl AsRef<str>, token: impl AsRef<str>) -> Result<Self> {
        Self::connect_with_options(host, token, ClientOptions::default()).await
    }

    /// Same as [`TsuruClient::connect`] with explicit client options.
    pub async fn connect_with_options(
        host: impl AsRef<str>,
        token: impl AsRef<str>,
        options: ClientOptions,
    ) -> Result<Self> {
        let client = Self::from_parts(host.as_ref(), token.as_ref(), options)?;
        client.list_plans().await?;
        Ok(client)
    }

    /// Creates a client from environment variables.
    ///
    /// Reads:
    /// - `TSURU_TARGET` — API base URL (e.g. `https://tsuru.example.com`)
    /// - `TSURU_TOKEN` — bearer token
    pub async fn from_env() -> Result<Self> {
        let host = std::env::var("TSURU_TARGET").map_err(|_| {
            TsuruError::Config("missing TSURU_TARGET environment variable".to_owned())
        })?;
        let token = std::env::var("TSURU_TOKEN").map_err(|_| {
            TsuruError::Config("missing TSURU_TOKEN environment variable".to_owned())
        })?;
        Self::connect(host, token).await
    }

    fn from_parts(host: &str, token: &str, options: ClientOptions) -> Result<Self> {
        let host = host.trim();
        let token = token.trim();
        if host.is_empty() {
            return Err(TsuruError::Config("host can not be empty".to_owned()));
        }
        if token.is_empty() {
            return Err(TsuruError::Config("token can not be empty".to_owned()));
        }
        reqwest::Url::parse(host)
            .map_err(|err| TsuruError::Config(format!("invalid host '{host}': {err}")))?;
        let mut authorization = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| TsuruError::Config("token is not a valid header value".to_owned()))?;
        authorization.set_sensitive(true);

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(options.timeout_ms))
            .build()
            .map_err(TsuruError::Transport)?;

        Ok(Self {
            http,
            host: host.trim_end_matches('/').to_owned(),
            authorization,
            options,
        })
    }

    /// Base URL every path is joined onto.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Fetches `path` and decodes a `200 OK` JSON body into `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &[&str]) -> Result<T> {
        let body = self
            .send(Method::GET, path, None, Body::Empty, SUCCESS_OK)
            .await?;
        serde_json::from_slice(&body).map_err(|err| {
            TsuruError::Decode(format!(
                "invalid response JSON: {err}; body: {}",
                String::from_utf8_lossy(&body)
            ))
        })
    }

    /// Posts `payload` as JSON. `200` and `201` are success.
    pub async fn post<P: Serialize + ?Sized>(&self, payload: &P, path: &[&str]) -> Result<()> {
        let body = Body::json(payload)?;
        self.send(Method::POST, path, None, body, SUCCESS_CREATED)
            .await
            .map(drop)
    }

    /// Posts `form` as an `application/x-www-form-urlencoded` body.
    pub async fn post_url_encoded(&self, form: &Params, path: &[&str]) -> Result<()> {
        self.send(Method::POST, path, None, Body::Form(form), SUCCESS_CREATED)
            .await
            .map(drop)
    }

    /// Puts `payload` as JSON. Only `200` is success.
    pub async fn put<P: Serialize + ?Sized>(&self, payload: &P, path: &[&str]) -> Result<()> {
        let body = Body::json(payload)?;
        self.send(Method::PUT, path, None, body, SUCCESS_OK)
            .await
            .map(drop)
    }

    /// Deletes the resource at `path`. Only `200` is success.
    pub async fn delete(&self, path: &[&str]) -> Result<()> {
        self.send(Method::DELETE, path, None, Body::Empty, SUCCESS_OK)
            .await
            .map(drop)
    }

    /// Deletes with a query string built from `params`, in order.
    pub async fn delete_with_params(&self, params: &Params, path: &[&str]) -> Result<()> {
        self.send(Method::DELETE, path, Some(params), Body::Empty, SUCCESS_OK)
            .await
            .map(drop)
    }

    /// Deletes with a JSON body and an optional query string.
    pub async fn delete_with_payload<P: Serialize + ?Sized>(
        &self,
        payload: &P,
        params: &Params,
        path: &[&str],
    ) -> Result<()> {
        let body = Body::json(payload)?;
        self.send(Method::DELETE, path, Some(params), body, SUCCESS_OK)
            .await
            .map(drop)
    }

    fn build_request(
        &self,
        method: Method,
        path: &[&str],
        query: Option<&Params>,
        body: Body<'_>,
    ) -> Result<reqwest::Request> {
        let url = endpoint_url(&self.host, path)?;
        let mut builder = self
            .http
            .request(method, url)
            .header(header::ACCEPT, "application/json")
            .header(header::AUTHORIZATION, self.authorization.clone());

        if let Some(params) = query.filter(|params| !params.is_empty()) {
            builder = builder.query(params.pairs());
        }

        builder = match body {
            Body::Empty => builder,
            Body::Json(bytes) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(bytes),
            Body::Form(params) => builder.form(params.pairs()),
        };

        builder.build().map_err(TsuruError::Transport)
    }

    /// Dispatches one request and returns the body when the status is in
    /// `accepted`.
    async fn send(
        &self,
        method: Method,
        path: &[&str],
        query: Option<&Params>,
        body: Body<'_>,
        accepted: &[StatusCode],
    ) -> Result<Vec<u8>> {
        let request = self.build_request(method, path, query, body)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(method = %request.method(), url = %request.url(), "sending request");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(TsuruError::Transport)?;
        let status = response.status();
        let body = response.bytes().await.map_err(TsuruError::Transport)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "received response");

        if !accepted.contains(&status) {
            return Err(TsuruError::Api {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(body.to_vec())
    }
}

//! Confluence client and request pipeline.
//!
//! Every endpoint goes through [`Confluence::execute`]: validate the
//! parameters, encode the query, attach credentials, dispatch once, then map
//! the status code through the endpoint's [`StatusTable`] and decode.

use std::fmt;

use base64::Engine;
use bytes::Bytes;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;
use url::Url;

use crate::model::User;
use crate::{
    APPLICATION_JSON, ConfigError, Credential, HttpClient, HyperClient, Method, Parameters,
    Request, Response, Result, StatusTable, ToQueryPairs, Validate,
};

/// Characters escaped in caller-supplied path segments (ids, keys, names).
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'\\')
    .add(b'%');

/// Percent-encode a single path segment.
pub(crate) fn segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT_ENCODE_SET).to_string()
}

/// Body argument for [`Confluence::execute`] on requests without a body.
pub const NO_BODY: Option<&'static ()> = None;

/// User-Agent header value.
///
/// `<app>/<version> confluence-api/<lib-version> (rust; <arch>-<os>)`, or
/// without the leading application part when `app` is `None` or has an
/// empty name or version.
#[must_use]
pub fn user_agent(app: Option<(&str, &str)>) -> String {
    let lib = format!(
        "{}/{} (rust; {}-{})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::ARCH,
        std::env::consts::OS,
    );

    match app {
        Some((name, version)) if !name.is_empty() && !version.is_empty() => {
            format!("{name}/{version} {lib}")
        }
        _ => lib,
    }
}

// ============================================================================
// Client
// ============================================================================

/// Confluence REST API client.
///
/// Holds only immutable configuration plus the transport handle, so it can be
/// cloned and shared between tasks freely.
///
/// # Example
///
/// ```ignore
/// use confluence_api::{Confluence, Credential};
///
/// let confluence = Confluence::new("https://wiki.example.com", Credential::token(token))?;
/// let me = confluence.current_user(&Default::default()).await?;
/// println!("{}", confluence.profile_url(&me));
/// ```
#[derive(Clone)]
pub struct Confluence<C = HyperClient> {
    http: C,
    base_url: Url,
    credential: Credential,
    user_agent: String,
}

impl<C> fmt::Debug for Confluence<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Confluence")
            .field("base_url", &self.base_url.as_str())
            .field("credential", &self.credential)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl Confluence<HyperClient> {
    /// Create a client with the default transport.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] if the URL or credential is invalid.
    pub fn new(base_url: &str, credential: Credential) -> Result<Self> {
        Self::builder()
            .base_url(base_url)
            .credential(credential)
            .build()
    }

    /// Create a builder using the default [`HyperClient`] transport.
    #[must_use]
    pub fn builder() -> ConfluenceBuilder<HyperClient> {
        ConfluenceBuilder::new(HyperClient::new())
    }
}

impl<C> Confluence<C> {
    /// Base URL, as configured.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// User-Agent sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Underlying transport.
    #[must_use]
    pub const fn http(&self) -> &C {
        &self.http
    }

    /// Base URL without trailing slash, for appending absolute paths.
    fn base(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{path}", self.base()))?)
    }

    /// Link to a user's profile page.
    #[must_use]
    pub fn profile_url(&self, user: &User) -> String {
        format!("{}/display/~{}", self.base(), user.username)
    }

    /// Confluence short link (`/x/...`) for a numeric content id.
    ///
    /// Returns `None` if `content_id` is not a 32-bit unsigned number.
    #[must_use]
    pub fn tiny_link(&self, content_id: &str) -> Option<String> {
        let id: u32 = content_id.parse().ok()?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(id.to_le_bytes());
        let tiny: String = encoded
            .chars()
            .map(|c| match c {
                '/' => '-',
                '+' => '_',
                other => other,
            })
            .collect();

        Some(format!(
            "{}/x/{}",
            self.base(),
            tiny.trim_end_matches(['A', '='])
        ))
    }
}

impl<C: HttpClient> Confluence<C> {
    /// Run one call through the pipeline and decode the 200 answer into `T`.
    ///
    /// `path` is appended to the base URL as is; callers encode dynamic
    /// segments. Pass [`NO_BODY`] when there is no request body.
    ///
    /// # Errors
    ///
    /// In pipeline order: [`crate::Error::Validation`] (nothing sent),
    /// [`crate::Error::JsonSerialization`], transport errors,
    /// [`crate::Error::Api`] for any status but 200, and
    /// [`crate::Error::JsonDeserialization`].
    #[tracing::instrument(level = "debug", name = "confluence", skip_all, fields(method = %method, path = %path))]
    pub async fn execute<P, B, T>(
        &self,
        method: Method,
        path: &str,
        params: &P,
        body: Option<&B>,
        table: StatusTable,
    ) -> Result<T>
    where
        P: Parameters + ?Sized,
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.dispatch(method, path, params, body).await?;
        table.decode(response)
    }

    /// Like [`Self::execute`], but a 200 answer is accepted without decoding.
    ///
    /// # Errors
    ///
    /// Same as [`Self::execute`], minus decoding.
    #[tracing::instrument(level = "debug", name = "confluence", skip_all, fields(method = %method, path = %path))]
    pub async fn execute_empty<P, B>(
        &self,
        method: Method,
        path: &str,
        params: &P,
        body: Option<&B>,
        table: StatusTable,
    ) -> Result<()>
    where
        P: Parameters + ?Sized,
        B: Serialize + ?Sized,
    {
        let response = self.dispatch(method, path, params, body).await?;
        table.check(response)
    }

    async fn dispatch<P, B>(
        &self,
        method: Method,
        path: &str,
        params: &P,
        body: Option<&B>,
    ) -> Result<Response<Bytes>>
    where
        P: Parameters + ?Sized,
        B: Serialize + ?Sized,
    {
        params.validate()?;

        let mut builder = Request::<Bytes>::builder(method, self.endpoint(path)?)
            .query_string(&params.to_query_string())
            .header("Authorization", self.credential.header_value())
            .header("User-Agent", self.user_agent.as_str())
            .header("Accept", APPLICATION_JSON);

        if let Some(body) = body {
            builder = builder.json(body)?;
        }

        let response = self.http.execute(builder.build()).await?;
        debug!(status = response.status(), "response received");

        Ok(response)
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`Confluence`].
///
/// # Example
///
/// ```ignore
/// use confluence_api::{Confluence, HyperClient};
/// use std::time::Duration;
///
/// let confluence = Confluence::builder()
///     .base_url("https://wiki.example.com")
///     .basic_auth("john", "secret")
///     .app("wiki-report", "1.2.0")
///     .http_client(HyperClient::builder().timeout(Duration::from_secs(5)).build())
///     .build()?;
/// ```
pub struct ConfluenceBuilder<C = HyperClient> {
    http: C,
    base_url: Option<String>,
    credential: Option<Credential>,
    app: Option<(String, String)>,
}

impl<C> fmt::Debug for ConfluenceBuilder<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfluenceBuilder")
            .field("base_url", &self.base_url)
            .field("credential", &self.credential)
            .field("app", &self.app)
            .finish_non_exhaustive()
    }
}

impl<C> ConfluenceBuilder<C> {
    /// Create a builder around a transport.
    #[must_use]
    pub const fn new(http: C) -> Self {
        Self {
            http,
            base_url: None,
            credential: None,
            app: None,
        }
    }

    /// Set the base URL, e.g. `https://wiki.example.com` or
    /// `https://example.com/confluence`.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Authenticate with user name and password.
    #[must_use]
    pub fn basic_auth(self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.credential(Credential::basic(user, password))
    }

    /// Authenticate with a personal access token.
    #[must_use]
    pub fn token(self, token: impl Into<String>) -> Self {
        self.credential(Credential::token(token))
    }

    /// Set the credential.
    #[must_use]
    pub fn credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Identify the calling application in the User-Agent.
    #[must_use]
    pub fn app(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.app = Some((name.into(), version.into()));
        self
    }

    /// Replace the transport.
    #[must_use]
    pub fn http_client<D>(self, http: D) -> ConfluenceBuilder<D> {
        ConfluenceBuilder {
            http,
            base_url: self.base_url,
            credential: self.credential,
            app: self.app,
        }
    }

    /// Validate the configuration and build the client.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] for an empty or unparseable URL and a
    /// missing or malformed credential.
    pub fn build(self) -> Result<Confluence<C>> {
        let base_url = self.base_url.unwrap_or_default();
        if base_url.trim().is_empty() {
            return Err(ConfigError::EmptyUrl.into());
        }
        let base_url = Url::parse(base_url.trim()).map_err(ConfigError::from)?;

        let credential = self.credential.ok_or(ConfigError::MissingCredential)?;
        credential.validate()?;

        let user_agent = user_agent(
            self.app
                .as_ref()
                .map(|(name, version)| (name.as_str(), version.as_str())),
        );

        Ok(Confluence {
            http: self.http,
            base_url,
            credential,
            user_agent,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;
    use crate::Error;

    const TOKEN: &str = "TESTVYhExHzKbHzNPCMRmviasXJoUaATysUimxwiWmkr";

    fn client(url: &str) -> Confluence {
        Confluence::new(url, Credential::basic("john", "secret")).expect("client")
    }

    #[test]
    fn user_agent_format() {
        let version = env!("CARGO_PKG_VERSION");
        let platform = format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS);

        check!(user_agent(None) == format!("confluence-api/{version} (rust; {platform})"));
        check!(
            user_agent(Some(("wiki-report", "1.2.0")))
                == format!("wiki-report/1.2.0 confluence-api/{version} (rust; {platform})")
        );
        check!(user_agent(Some(("wiki-report", ""))) == user_agent(None));
    }

    #[test]
    fn builder_sets_app_user_agent() {
        let confluence = Confluence::builder()
            .base_url("https://wiki.example.com")
            .token(TOKEN)
            .app("wiki-report", "1.2.0")
            .build()
            .expect("client");

        check!(confluence.user_agent().starts_with("wiki-report/1.2.0 confluence-api/"));
    }

    #[test]
    fn builder_rejects_bad_configuration() {
        let_assert!(
            Err(Error::Config(ConfigError::EmptyUrl)) =
                Confluence::new("", Credential::basic("john", "secret"))
        );
        let_assert!(
            Err(Error::Config(ConfigError::InvalidUrl(_))) =
                Confluence::new("wiki.example.com", Credential::basic("john", "secret"))
        );
        let_assert!(
            Err(Error::Config(ConfigError::MissingCredential)) = Confluence::builder()
                .base_url("https://wiki.example.com")
                .build()
        );
        let_assert!(
            Err(Error::Config(ConfigError::EmptyPassword)) =
                Confluence::new("https://wiki.example.com", Credential::basic("john", ""))
        );
    }

    #[test]
    fn short_token_is_rejected() {
        let result = Confluence::new("https://wiki.example.com", Credential::token("0123456789"));

        let_assert!(Err(err) = result);
        check!(err.to_string() == "token length must be 44, got 10");
    }

    #[test]
    fn endpoint_keeps_context_path() {
        let confluence = client("https://example.com/confluence/");
        let url = confluence.endpoint("/rest/api/space").expect("url");

        check!(url.as_str() == "https://example.com/confluence/rest/api/space");
    }

    #[test]
    fn profile_url() {
        let confluence = client("https://wiki.example.com");
        let user = User {
            username: "john".to_string(),
            ..Default::default()
        };

        check!(confluence.profile_url(&user) == "https://wiki.example.com/display/~john");
    }

    #[test]
    fn tiny_links() {
        let confluence = client("https://wiki.example.com");

        check!(confluence.tiny_link("1477502").as_deref() == Some("https://wiki.example.com/x/fosW"));
        check!(confluence.tiny_link("1477627").as_deref() == Some("https://wiki.example.com/x/_4sW"));
        check!(
            confluence.tiny_link("40643836").as_deref() == Some("https://wiki.example.com/x/-CxsAg")
        );
        check!(confluence.tiny_link("ABCD").is_none());
        check!(confluence.tiny_link("").is_none());
    }

    #[test]
    fn path_segments_are_encoded() {
        check!(segment("TS") == "TS");
        check!(segment("confluence users") == "confluence%20users");
        check!(segment("a/b?c") == "a%2Fb%3Fc");
    }

    #[test]
    fn debug_hides_credential() {
        let confluence = client("https://wiki.example.com");
        let debug = format!("{confluence:?}");

        check!(debug.contains("wiki.example.com"));
        check!(!debug.contains("secret"));
    }
}

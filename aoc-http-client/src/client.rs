//! AOC HTTP client implementation

use crate::error::AocError;
use log::debug;
use reqwest::StatusCode;
use reqwest::header::HeaderValue;
use zeroize::Zeroize;

/// Base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

/// Raw reply to an answer submission
///
/// The reply is deliberately left uninterpreted: receiving it only means the
/// answer reached the site, not that it was right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerResponse {
    /// HTTP status of the reply
    pub status: StatusCode,
    /// Reply body, usually an HTML page
    pub body: String,
}

/// Blocking client for the puzzle site
///
/// Builds puzzle URLs, downloads inputs and posts answers.
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::AocClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::new()?;
/// let session = "your_session_cookie";
///
/// println!("Reading {}", client.page_url(2024, 1)?);
///
/// let input = client.get_input(2024, 1, session)?;
/// println!("Input: {}", input);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AocClient {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
}

impl AocClient {
    /// Client for adventofcode.com that never follows redirects
    ///
    /// # Errors
    ///
    /// `AocError::ClientInit` when reqwest cannot build its client.
    pub fn new() -> Result<Self, AocError> {
        Self::builder().build()
    }

    /// See [`AocClientBuilder`]
    pub fn builder() -> AocClientBuilder {
        AocClientBuilder::new()
    }

    /// The base URL every puzzle URL is built on
    pub fn base_url(&self) -> &reqwest::Url {
        &self.base_url
    }

    /// `session={token}` header, flagged sensitive; the formatted copy is wiped
    fn create_cookie_header(session: &str) -> Result<HeaderValue, AocError> {
        let mut cookie_string = format!("session={}", session);
        let header_value = HeaderValue::from_bytes(cookie_string.as_bytes())
            .map_err(|_| AocError::ClientInit("Invalid session cookie format".to_string()));
        cookie_string.zeroize();

        let mut sensitive_header = header_value?;
        sensitive_header.set_sensitive(true);
        Ok(sensitive_header)
    }

    /// Build `{base}/{year}/day/{day}` followed by optional extra segments
    fn puzzle_url(&self, year: u16, day: u8, extra: Option<&str>) -> Result<reqwest::Url, AocError> {
        let (year, day) = (year.to_string(), day.to_string());
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| AocError::ClientInit("Cannot modify base URL path".to_string()))?;
            segments
                .pop_if_empty()
                .extend([year.as_str(), "day", day.as_str()]);
            if let Some(extra) = extra {
                segments.push(extra);
            }
        }
        Ok(url)
    }

    /// URL of the puzzle page: `{base}/{year}/day/{day}`
    ///
    /// # Example
    ///
    /// ```
    /// use aoc_http_client::AocClient;
    ///
    /// let client = AocClient::new().unwrap();
    /// assert_eq!(
    ///     client.page_url(2022, 5).unwrap().as_str(),
    ///     "https://adventofcode.com/2022/day/5"
    /// );
    /// ```
    pub fn page_url(&self, year: u16, day: u8) -> Result<reqwest::Url, AocError> {
        self.puzzle_url(year, day, None)
    }

    /// URL of the puzzle input: page URL + `/input`
    pub fn input_url(&self, year: u16, day: u8) -> Result<reqwest::Url, AocError> {
        self.puzzle_url(year, day, Some("input"))
    }

    /// URL answers are posted to: page URL + `/answer`
    pub fn answer_url(&self, year: u16, day: u8) -> Result<reqwest::Url, AocError> {
        self.puzzle_url(year, day, Some("answer"))
    }

    /// Download the personal input of `{year}/day/{day}`
    ///
    /// One attempt, no retry. The body comes back exactly as served, trailing
    /// newline included.
    ///
    /// # Errors
    ///
    /// * `AocError::Connection` - No response was received
    /// * `AocError::NotFound` - The site answered 404
    /// * `AocError::Server` - Any other status than 200
    /// * `AocError::Encoding` - The body could not be read as text
    pub fn get_input(&self, year: u16, day: u8, session: &str) -> Result<String, AocError> {
        let cookie_header = Self::create_cookie_header(session)?;
        let url = self.input_url(year, day)?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("Cookie", cookie_header)
            .send()?;

        match response.status() {
            StatusCode::OK => response.text().map_err(|_| AocError::Encoding),
            StatusCode::NOT_FOUND => Err(AocError::NotFound { year, day }),
            status => Err(AocError::Server { status }),
        }
    }

    /// Post `level={part}&answer={answer}` to the answer URL
    ///
    /// Whatever status the site replies with, the reply is handed back
    /// untouched.
    ///
    /// # Errors
    ///
    /// * `AocError::Connection` - No response was received
    /// * `AocError::Encoding` - The body could not be read as text
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aoc_http_client::AocClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AocClient::new()?;
    /// let reply = client.submit_answer(2024, 1, 1, "42", "your_session_cookie")?;
    /// println!("{} {}", reply.status, reply.body);
    /// # Ok(())
    /// # }
    /// ```
    pub fn submit_answer(
        &self,
        year: u16,
        day: u8,
        part: u8,
        answer: &str,
        session: &str,
    ) -> Result<AnswerResponse, AocError> {
        let cookie_header = Self::create_cookie_header(session)?;
        let url = self.answer_url(year, day)?;
        debug!("POST {} (level {})", url, part);

        let form = [("level", part.to_string()), ("answer", answer.to_string())];

        let response = self
            .client
            .post(url)
            .header("Cookie", cookie_header)
            .form(&form)
            .send()?;

        let status = response.status();
        let body = response.text().map_err(|_| AocError::Encoding)?;
        Ok(AnswerResponse { status, body })
    }
}

/// Builder for [`AocClient`]
///
/// Base URL and the underlying reqwest builder can be replaced; redirects are
/// switched off whatever builder is supplied.
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::AocClient;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Custom base URL for testing
/// let client = AocClient::builder()
///     .base_url("http://localhost:1234")?
///     .build()?;
///
/// // Custom timeout
/// let client = AocClient::builder()
///     .client_builder(
///         reqwest::blocking::Client::builder()
///             .timeout(Duration::from_secs(30))
///     )
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AocClientBuilder {
    base_url: Option<reqwest::Url>,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
}

impl AocClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            base_url: None,
            client_builder: None,
        }
    }

    /// Set a custom base URL for the client
    ///
    /// This is useful for testing with mock servers. The URL is parsed and validated
    /// at builder time, catching errors early.
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the URL cannot be parsed.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, AocError> {
        let url = url
            .into_url()
            .map_err(|e| AocError::ClientInit(format!("Invalid base URL: {}", e)))?;
        self.base_url = Some(url);
        Ok(self)
    }

    /// Set a custom HTTP client builder
    ///
    /// This allows full customization of the HTTP client (timeouts, proxies, etc.).
    /// The redirect policy will always be overridden to `Policy::none()` regardless
    /// of the provided builder configuration.
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Build the AOC client with the configured settings
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn build(self) -> Result<AocClient, AocError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => reqwest::Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| AocError::ClientInit(e.to_string()))?,
        };

        let builder = self
            .client_builder
            .unwrap_or_else(|| reqwest::blocking::Client::builder().use_rustls_tls());

        // A redirect is how the site answers a stale session; surface it as a status
        let client = builder
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| AocError::ClientInit(e.to_string()))?;

        Ok(AocClient { client, base_url })
    }
}

impl Default for AocClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

use super::{response::ApiResponse, Error};
use reqwest::header::{HeaderName, HeaderValue};
use std::{collections::HashMap, ops::Deref, time::Duration};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone, Debug)]
pub struct HttpClient(reqwest::Client);

impl HttpClient {
    pub fn new() -> HttpClient {
        HttpClient(reqwest::Client::new())
    }

    /// Issues a single GET. Non-2xx statuses are returned, not raised.
    pub async fn get(
        &self,
        url: &str,
        headers: &HeaderMap,
        query: &[(&str, String)],
        timeout: Duration,
    ) -> Result<ApiResponse, Error> {
        log::debug!("GET {} {:?}", url, query);

        let response = self
            .0
            .get(url)
            .headers(headers.try_into()?)
            .query(query)
            .timeout(timeout)
            .send()
            .await
            .map_err(|cause| Error::RequestError {
                url: url.to_owned(),
                cause,
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        log::debug!("GET {} responded {}", url, status);

        Ok(ApiResponse::new(status, body))
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Default, Clone, Debug)]
pub struct HeaderMap(pub HashMap<String, String>);

impl HeaderMap {
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }
}

impl Deref for HeaderMap {
    type Target = HashMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<&HeaderMap> for reqwest::header::HeaderMap {
    type Error = Error;

    fn try_from(map: &HeaderMap) -> Result<Self, Self::Error> {
        let mut headers = reqwest::header::HeaderMap::new();
        for (key, value) in map.iter() {
            let invalid = || Error::InvalidHeader { name: key.to_owned() };
            headers.insert(
                HeaderName::from_bytes(key.as_bytes()).map_err(|_| invalid())?,
                HeaderValue::from_str(value).map_err(|_| invalid())?,
            );
        }
        Ok(headers)
    }
}

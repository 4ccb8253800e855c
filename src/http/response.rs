use super::Error;
use serde::de::DeserializeOwned;

/// Status code and raw body of a completed request.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: u16,
    body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        ApiResponse {
            status,
            body: body.into(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    #[cfg(test)]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    #[cfg(test)]
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn json<T>(&self) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str::<T>(&self.body).map_err(|cause| Error::ParseResponseError { cause })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_json_body() {
        let response = ApiResponse::new(200, r#"{"id": 1}"#);

        let value: serde_json::Value = response.json().unwrap();

        assert_eq!(value["id"], 1);
        assert!(response.is_success());
    }

    #[test]
    fn should_fail_to_parse_invalid_body() {
        let response = ApiResponse::new(200, "<html>");

        let result = response.json::<serde_json::Value>();

        assert!(matches!(result, Err(Error::ParseResponseError { .. })));
    }
}

use gloo_net::http::Request;

use ddd_boundary::SignupRequest;

use crate::{into_result, Result};

pub const FORM_ENDPOINT: &str = "https://formspree.io/f/xovgwojg";

/// Formspree form that collects WhatsApp community sign-ups.
#[derive(Debug, Clone)]
pub struct FormApi {
    url: String,
}

impl Default for FormApi {
    fn default() -> Self {
        Self::new(FORM_ENDPOINT.to_owned())
    }
}

impl FormApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn submit_registration(&self, request: &SignupRequest) -> Result<()> {
        let response = Request::post(&self.url)
            .header("Accept", "application/json")
            .json(request)?
            .send()
            .await?;
        into_result(response).await
    }
}

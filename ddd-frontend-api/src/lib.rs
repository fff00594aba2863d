use gloo_net::http::Response;
use thiserror::Error;

use ddd_boundary::SubmissionErrorResponse;

mod form;

pub use self::form::*;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// The request did not reach the endpoint or the response was unreadable.
    #[error("{0}")]
    Fetch(String),

    /// The endpoint answered with a non-success status.
    #[error("Rejected: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

/// Ensure a 2xx status and extract the first error message otherwise.
pub async fn into_result(response: Response) -> Result<()> {
    if response.ok() {
        return Ok(());
    }
    log::debug!("Form endpoint responded with status {}", response.status());
    let body = response.json::<SubmissionErrorResponse>().await.ok();
    Err(rejection(body.as_ref()))
}

fn rejection(body: Option<&SubmissionErrorResponse>) -> Error {
    Error::Rejected(body.and_then(|res| res.first_message().map(ToOwned::to_owned)))
}

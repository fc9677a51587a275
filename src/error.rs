use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::{player::Player, util::render_value};

#[derive(Error, Debug)]
pub enum LookupError {
    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),

    #[error(transparent)]
    HttpRequest(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("unexpected status code {0}")]
    Status(u16),
}

/// Outcome of a single [`crate::MihomoClient::lookup`].
///
/// Its [`Display`](fmt::Display) output is the one line the command prints.
#[derive(Debug)]
pub enum Lookup {
    /// The decoded response body of a 200 response.
    Success(Map<String, Value>),
    Failure(LookupError),
}

impl Lookup {
    pub fn is_success(&self) -> bool {
        matches!(self, Lookup::Success(_))
    }

    /// The raw `player` field, if the lookup succeeded and the field is present.
    pub fn player(&self) -> Option<&Value> {
        match self {
            Lookup::Success(payload) => payload.get("player"),
            Lookup::Failure(_) => None,
        }
    }

    pub fn player_view(&self) -> Option<Player> {
        self.player()
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    pub fn error(&self) -> Option<&LookupError> {
        match self {
            Lookup::Success(_) => None,
            Lookup::Failure(err) => Some(err),
        }
    }
}

impl From<LookupError> for Lookup {
    fn from(err: LookupError) -> Self {
        Lookup::Failure(err)
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Success(_) => {
                let player = self.player().unwrap_or(&Value::Null);
                f.write_str(&render_value(player))
            }
            Lookup::Failure(LookupError::Status(code)) => write!(f, "获取失败: {code}"),
            Lookup::Failure(err) => write!(f, "错误: {}", describe(err)),
        }
    }
}

/// Joins an error with its `source()` chain, e.g.
/// `error sending request for url (...): client error (Connect): ...`.
fn describe(err: &(dyn std::error::Error + 'static)) -> String {
    let mut description = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !description.ends_with(&text) {
            description.push_str(": ");
            description.push_str(&text);
        }
        source = cause.source();
    }
    description
}

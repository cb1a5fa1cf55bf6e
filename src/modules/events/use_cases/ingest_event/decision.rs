use crate::modules::events::core::event::StoredEvent;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("missing or incorrect Content-Type header")]
    IncorrectContentType,

    #[error("malformed JSON body: {0}")]
    MalformedBody(String),

    #[error("missing X-Honeycomb-Team header")]
    MissingTeamHeader,
}

#[derive(Debug, PartialEq)]
pub enum Decision {
    Accepted { dataset: String, event: StoredEvent },
    Rejected { reason: DecideError },
}

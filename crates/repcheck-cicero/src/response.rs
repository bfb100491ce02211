//! Cicero `/official` response envelope and its interpretation.
//!
//! Shape: `{response: {errors: [..], results: {candidates: [{match_addr, officials}]}}}`.
//! Only the first candidate is used.

use repcheck_core::Official;
use serde::Deserialize;

use crate::error::LookupError;

#[derive(Debug, Deserialize)]
struct Envelope {
    response: ResponseBody,
}

#[derive(Debug, Deserialize)]
struct ResponseBody {
    errors: Option<Vec<String>>,
    results: Option<Results>,
}

#[derive(Debug, Deserialize)]
struct Results {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    match_addr: Option<String>,
    officials: Option<Vec<Official>>,
}

impl Envelope {
    fn first_error(&self) -> Option<&str> {
        self.response
            .errors
            .as_ref()
            .and_then(|errors| errors.first())
            .map(String::as_str)
    }
}

/// A successful lookup for one address.
#[derive(Debug, Clone, PartialEq)]
pub struct Lookup {
    /// Cicero's matched address, or the address as entered.
    pub normalized_address: String,
    pub officials: Vec<Official>,
}

/// Interpret a Cicero response.
///
/// An embedded error list wins over the HTTP status; otherwise a non-success
/// status is a transport failure. `address` is the user's input and becomes
/// the normalized address when Cicero does not report a match.
pub fn interpret(status: u16, body: &str, address: &str) -> Result<Lookup, LookupError> {
    let parsed: Result<Envelope, _> = serde_json::from_str(body);

    if !(200..300).contains(&status) {
        if let Ok(envelope) = &parsed
            && let Some(message) = envelope.first_error()
        {
            return Err(LookupError::Application(message.to_string()));
        }
        return Err(LookupError::Status { status });
    }

    let envelope = parsed?;
    if let Some(message) = envelope.first_error() {
        return Err(LookupError::Application(message.to_string()));
    }

    let candidate = envelope
        .response
        .results
        .and_then(|r| r.candidates)
        .and_then(|c| c.into_iter().next())
        .ok_or(LookupError::Empty)?;

    // An empty list is still a match: Success with no officials.
    let officials = candidate.officials.ok_or(LookupError::Empty)?;

    let normalized_address = candidate
        .match_addr
        .filter(|a| !a.is_empty())
        .unwrap_or_else(|| address.to_string());

    Ok(Lookup {
        normalized_address,
        officials,
    })
}

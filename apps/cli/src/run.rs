//! Subcommand implementations.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use pomoshtnik_schema::api::{ApiRequest, ApplicationEvent, ClientEvent, ServerEvent};
use pomoshtnik_schema::commands::{BotUser, Command, SearchCommand};
use pomoshtnik_schema::github::{Repository, UserData, WebhookEvent};
use pomoshtnik_schema::isbndb::Book;
use pomoshtnik_schema::tmdb::{
    ConfigurationData, MovieData, MovieSearchResult, Person, PersonSearchResult, Show,
    ShowSearchResult,
};
use pomoshtnik_schema::{decode_text, decode_tokens, decode_value};
use pomoshtnik_validator::foundation::{Decode, ValidationError};
use serde::Serialize;
use serde_json::Value;

use crate::cli::{ErrorFormat, WireType};

/// Whether the input was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    Rejected,
}

/// A decoded value in wire shape, or why the input was rejected.
type Decoded = std::result::Result<Value, ValidationError>;

/// Decodes `value` as `T` and renders the typed value back to JSON.
fn typed<T: Decode + Serialize>(value: &Value) -> Result<Decoded> {
    match decode_value::<T>(value) {
        Ok(decoded) => Ok(Ok(
            serde_json::to_value(&decoded).context("rendering decoded value")?
        )),
        Err(error) => Ok(Err(error)),
    }
}

fn decode_as(kind: WireType, value: Value, event: Option<&str>) -> Result<Decoded> {
    match kind {
        WireType::Command => typed::<Command>(&value),
        WireType::BotUser => typed::<BotUser>(&value),
        WireType::SearchCommand => typed::<SearchCommand>(&value),
        WireType::ApiRequest => typed::<ApiRequest>(&value),
        WireType::ClientEvent => typed::<ClientEvent>(&value),
        WireType::ServerEvent => typed::<ServerEvent>(&value),
        WireType::ApplicationEvent => typed::<ApplicationEvent>(&value),
        WireType::TmdbConfiguration => typed::<ConfigurationData>(&value),
        WireType::Movie => typed::<MovieData>(&value),
        WireType::Show => typed::<Show>(&value),
        WireType::Person => typed::<Person>(&value),
        WireType::MovieSearch => typed::<MovieSearchResult>(&value),
        WireType::ShowSearch => typed::<ShowSearchResult>(&value),
        WireType::PersonSearch => typed::<PersonSearchResult>(&value),
        WireType::GithubUser => typed::<UserData>(&value),
        WireType::GithubRepository => typed::<Repository>(&value),
        WireType::Webhook => {
            let event = event.context("`webhook` needs --event")?;
            match WebhookEvent::from_delivery(event, value) {
                Ok(decoded) => Ok(Ok(decoded.to_envelope().context("rendering webhook")?)),
                Err(error) => Ok(Err(error)),
            }
        }
        WireType::Book => typed::<Book>(&value),
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("reading input file {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin for input JSON")?;
            Ok(buf)
        }
    }
}

/// `decode`: reads a document, decodes it, prints the typed value.
pub fn decode(
    kind: WireType,
    file: Option<&Path>,
    event: Option<&str>,
    errors: ErrorFormat,
) -> Result<Outcome> {
    let text = read_input(file)?;
    let value: Value = serde_json::from_str(&text).context("parsing input JSON")?;
    tracing::debug!(?kind, "decoding document");

    let outcome = decode_as(kind, value, event)?;
    report(outcome, errors)
}

/// `parse`: decodes chat command tokens.
pub fn parse(tokens: &[String], errors: ErrorFormat) -> Result<Outcome> {
    let outcome = match tokens {
        [text] => decode_text(text),
        _ => decode_tokens(tokens),
    };
    let rendered = match outcome {
        Ok(command) => Ok(serde_json::to_value(&command).context("rendering command")?),
        Err(error) => Err(error),
    };
    report(rendered, errors)
}

/// `types`: lists what `decode` accepts.
pub fn types() -> Result<Outcome> {
    let mut stdout = io::stdout().lock();
    for kind in WireType::value_variants() {
        if let Some(name) = kind.to_possible_value() {
            writeln!(stdout, "{}", name.get_name())?;
        }
    }
    Ok(Outcome::Accepted)
}

fn report(outcome: Decoded, errors: ErrorFormat) -> Result<Outcome> {
    match outcome {
        Ok(value) => {
            let mut stdout = io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &value)?;
            writeln!(stdout)?;
            Ok(Outcome::Accepted)
        }
        Err(error) => {
            let mut stderr = io::stderr().lock();
            match errors {
                ErrorFormat::Text => {
                    for line in error_lines(&error) {
                        writeln!(stderr, "{line}")?;
                    }
                }
                ErrorFormat::Json => {
                    serde_json::to_writer_pretty(&mut stderr, &error.to_json_value())?;
                    writeln!(stderr)?;
                }
            }
            Ok(Outcome::Rejected)
        }
    }
}

/// One `location: message` line per leaf; the root renders as `<root>`.
fn error_lines(error: &ValidationError) -> Vec<String> {
    error
        .entries()
        .into_iter()
        .map(|(location, message)| {
            if location.is_empty() {
                format!("<root>: {message}")
            } else {
                format!("{location}: {message}")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn root_errors_are_labelled() {
        let error = ValidationError::type_mismatch("object", &json!(3));
        assert_eq!(error_lines(&error), vec!["<root>: expected object, found number `3`"]);
    }

    #[test]
    fn decoded_values_are_rendered_in_wire_shape() {
        let rendered = decode_as(
            WireType::ApiRequest,
            json!({"type": "GetSearch", "data": "abc", "ignored": true}),
            None,
        )
        .unwrap();
        assert_eq!(rendered, Ok(json!({"type": "GetSearch", "data": "abc"})));
    }

    #[test]
    fn webhook_without_event_is_a_usage_error() {
        assert!(decode_as(WireType::Webhook, json!({}), None).is_err());
    }
}

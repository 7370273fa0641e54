//! Integration tests for declaring decoders from outside the crate.

use pomoshtnik_validator::prelude::*;
use pomoshtnik_validator::{any_of, record, tags};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

tags! {
    enum EventKind {
        Ping = "Ping",
        Rename = "Rename",
    }
}

#[derive(Debug, PartialEq)]
struct Rename {
    from: String,
    to: String,
    reason: Option<String>,
}

impl Decode for Rename {
    fn decode(input: &Value) -> ValidationResult<Self> {
        record!(input => Rename {
            from: "from" => string(),
            to: "to" => string(),
            reason: "reason" => string().optional(),
        })
    }
}

#[derive(Debug, PartialEq)]
enum Event {
    Ping,
    Rename(Rename),
}

impl Decode for Event {
    fn decode(input: &Value) -> ValidationResult<Self> {
        tagged(|kind: EventKind, input: &Value| match kind {
            EventKind::Ping => unit_variant(kind).map(|()| Event::Ping).validate(input),
            EventKind::Rename => data_variant(kind, decoder::<Rename>())
                .map(Event::Rename)
                .validate(input),
        })
        .validate(input)
    }
}

/// A page of anything, parameterized by the element decoder.
#[derive(Debug, PartialEq)]
struct Page<T> {
    page: u64,
    results: Vec<T>,
}

fn page<V: Validate>(element: V) -> impl Validate<Output = Page<V::Output>> {
    from_fn(move |input| {
        record!(input => Page {
            page: "page" => unsigned(),
            results: "results" => array(&element),
        })
    })
}

#[test]
fn tagged_records_decode() {
    let input = json!({"type": "Rename", "data": {"from": "a", "to": "b"}});
    assert_eq!(
        Event::decode(&input),
        Ok(Event::Rename(Rename {
            from: "a".into(),
            to: "b".into(),
            reason: None,
        }))
    );
    assert_eq!(Event::decode(&json!({"type": "Ping"})), Ok(Event::Ping));
}

#[test]
fn nested_errors_carry_full_paths() {
    let input = json!({"type": "Rename", "data": {"from": 1}});
    let error = Event::decode(&input).unwrap_err();
    let locations: Vec<String> = error.entries().into_iter().map(|(at, _)| at).collect();
    assert_eq!(locations, vec!["data/from", "data/to"]);
    assert!(error.names_field(codes::REQUIRED, "to"));
}

#[test]
fn generic_decoder_applies_element_decoder() {
    let events = page(decoder::<Event>());
    let input = json!({
        "page": 2,
        "results": [{"type": "Ping"}, {"type": "Pong"}],
    });
    let error = events.validate(&input).unwrap_err();
    let entries = error.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0, "results/[1]/type");

    let genres = page(string());
    assert_eq!(
        genres.validate(&json!({"page": 1, "results": ["Drama"]})),
        Ok(Page {
            page: 1,
            results: vec!["Drama".to_owned()],
        })
    );
}

#[test]
fn any_of_tries_alternatives_in_order() {
    let id = any_of!(
        unsigned().map(|n| n.to_string()),
        string(),
    );
    assert_eq!(id.validate(&json!(12)), Ok("12".to_owned()));
    assert_eq!(id.validate(&json!("tt12")), Ok("tt12".to_owned()));
    assert_eq!(id.validate(&json!(-1)).unwrap_err().code, codes::NO_MATCH);
}

#[test]
fn tags_serialize_as_their_wire_spelling() {
    assert_eq!(serde_json::to_value(EventKind::Rename).unwrap(), json!("Rename"));
    assert_eq!(EventKind::decode(&json!("Ping")), Ok(EventKind::Ping));
    assert!(EventKind::decode(&json!("ping")).is_err());
}

#[test]
fn error_json_lists_locations() {
    let error = Event::decode(&json!({"type": 3})).unwrap_err();
    let rendered = error.to_json_value();
    assert_eq!(rendered["code"], json!(codes::TYPE_MISMATCH));
    assert_eq!(rendered["path"], json!("type"));
}

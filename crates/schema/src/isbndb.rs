//! ISBNdb book lookups.

use pomoshtnik_validator::prelude::*;
use pomoshtnik_validator::record;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub publisher: String,
    pub isbn13: String,
    pub isbn: String,
    pub authors: Vec<String>,
    pub title: String,
    pub publish_date: String,
    pub pages: i64,
    pub image: Option<String>,
    pub overview: Option<String>,
    // Misspelled upstream.
    pub synopsys: Option<String>,
}

impl Decode for Book {
    fn decode(input: &Value) -> ValidationResult<Self> {
        record!(input => Self {
            publisher: "publisher" => string(),
            isbn13: "isbn13" => string(),
            isbn: "isbn" => string(),
            authors: "authors" => string().array(),
            title: "title" => string(),
            publish_date: "publish_date" => string(),
            pages: "pages" => integer(),
            image: "image" => string().optional(),
            overview: "overview" => string().optional(),
            synopsys: "synopsys" => string().optional(),
        })
    }
}

/// Body of `GET /book/{isbn}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookResponse {
    pub book: Book,
}

impl Decode for BookResponse {
    fn decode(input: &Value) -> ValidationResult<Self> {
        record!(input => Self {
            book: "book" => decoder::<Book>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn book() -> Value {
        json!({
            "publisher": "Addison-Wesley",
            "isbn13": "9780201633610",
            "isbn": "0201633612",
            "authors": ["Erich Gamma", "Richard Helm"],
            "title": "Design Patterns",
            "publish_date": "1994",
            "pages": 395,
            "image": null,
        })
    }

    #[test]
    fn descriptions_may_be_missing_or_null() {
        let decoded = Book::decode(&book()).unwrap();
        assert_eq!(decoded.image, None);
        assert_eq!(decoded.synopsys, None);
        assert_eq!(decoded.authors.len(), 2);
    }

    #[test]
    fn response_wraps_the_book() {
        let error = BookResponse::decode(&json!({"book": {"title": 1}})).unwrap_err();
        assert!(error.names_field(codes::TYPE_MISMATCH, "title"));
        assert!(error.names_field(codes::REQUIRED, "isbn13"));
        assert!(error.entries().iter().all(|(at, _)| at.starts_with("book/")));
    }

    #[test]
    fn pages_must_be_whole() {
        let mut input = book();
        input["pages"] = json!(395.5);
        let error = Book::decode(&input).unwrap_err();
        assert_eq!(error.entries()[0].0, "pages");
    }
}

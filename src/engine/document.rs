//! Result documents

use std::io::{self, Write};

use mongodb::bson::{Bson, Document};
use serde::Serialize;
use serde_json::ser::Formatter;

/// One document returned by an aggregation
///
/// Not interpreted, only rendered for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultDocument(Document);

impl ResultDocument {
    /// Relaxed extended JSON on a single line, field order preserved
    ///
    /// Separators are `": "` and `", "`, e.g. `{"_id": "Comedy", "count": 4}`.
    pub fn to_json(&self) -> String {
        let value = Bson::Document(self.0.clone()).into_relaxed_extjson();

        let mut buf = Vec::with_capacity(128);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
        if value.serialize(&mut serializer).is_err() {
            return value.to_string();
        }
        String::from_utf8(buf).unwrap_or_else(|_| value.to_string())
    }
}

impl From<Document> for ResultDocument {
    fn from(document: Document) -> Self {
        Self(document)
    }
}

/// Single-line formatter with a space after every `:` and `,`
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_json_keeps_field_order() {
        let doc = ResultDocument::from(doc! { "_id": "Comedy", "count": 4 });
        assert_eq!(doc.to_json(), r#"{"_id": "Comedy", "count": 4}"#);
    }

    #[test]
    fn test_json_nested() {
        let doc = ResultDocument::from(doc! {
            "_id": { "actors": "Jane Doe", "category": "Drama" },
            "count": 2_i64
        });
        assert_eq!(
            doc.to_json(),
            r#"{"_id": {"actors": "Jane Doe", "category": "Drama"}, "count": 2}"#
        );
    }

    #[test]
    fn test_json_array_separators() {
        let doc = ResultDocument::from(doc! {
            "_id": "Tom",
            "categories": ["Comedy", "Action & Adventure"]
        });
        let json = doc.to_json();
        assert_eq!(
            json,
            r#"{"_id": "Tom", "categories": ["Comedy", "Action & Adventure"]}"#
        );
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_json_empty_containers() {
        let doc = ResultDocument::from(doc! { "_id": {}, "categories": [] });
        assert_eq!(doc.to_json(), r#"{"_id": {}, "categories": []}"#);
    }
}

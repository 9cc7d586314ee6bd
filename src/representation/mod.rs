//! Tour collection representations and content negotiation

mod negotiate;
mod serialize;

pub use negotiate::negotiate;
pub use serialize::{to_json, to_text, to_xml};

use crate::types::Tour;

/// A media type the tours listing can be served as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    Json,
    ApplicationXml,
    TextXml,
    PlainText,
}

impl Representation {
    /// Supported representations, most preferred first
    pub const ALL: [Representation; 4] = [
        Representation::Json,
        Representation::ApplicationXml,
        Representation::TextXml,
        Representation::PlainText,
    ];

    pub fn media_type(self) -> &'static str {
        match self {
            Representation::Json => "application/json",
            Representation::ApplicationXml => "application/xml",
            Representation::TextXml => "text/xml",
            Representation::PlainText => "text/plain",
        }
    }

    /// `Content-Type` header value for a response in this representation
    pub fn content_type(self) -> &'static str {
        match self {
            Representation::Json => "application/json",
            Representation::ApplicationXml => "application/xml; charset=utf-8",
            Representation::TextXml => "text/xml; charset=utf-8",
            Representation::PlainText => "text/plain; charset=utf-8",
        }
    }

    /// Render `tours` in this representation
    pub fn render(self, tours: &[Tour]) -> String {
        match self {
            Representation::Json => to_json(tours).to_string(),
            Representation::ApplicationXml | Representation::TextXml => to_xml(tours),
            Representation::PlainText => to_text(tours),
        }
    }
}

impl std::fmt::Display for Representation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.media_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_carries_media_type() {
        for rep in Representation::ALL {
            assert!(rep.content_type().starts_with(rep.media_type()));
        }
        assert_eq!(Representation::PlainText.content_type(), "text/plain; charset=utf-8");
        assert_eq!(Representation::Json.content_type(), "application/json");
    }
}

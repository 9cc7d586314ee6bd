//! Accept-header negotiation

use super::Representation;
use crate::error::{Error, Result};

/// One `type/subtype;q=..` entry from an Accept header
#[derive(Debug, PartialEq)]
struct MediaRange {
    kind: String,
    subtype: String,
    q: f32,
}

impl MediaRange {
    fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split(';');
        let essence = parts.next()?.trim().to_ascii_lowercase();

        let (kind, subtype) = match essence.as_str() {
            "*" => ("*".to_string(), "*".to_string()),
            _ => {
                let (kind, subtype) = essence.split_once('/')?;
                if kind.is_empty() || subtype.is_empty() {
                    return None;
                }
                (kind.to_string(), subtype.to_string())
            }
        };

        let mut q = 1.0;
        for param in parts {
            if let Some((name, value)) = param.split_once('=') {
                if name.trim().eq_ignore_ascii_case("q") {
                    q = value.trim().parse::<f32>().ok()?;
                }
            }
        }

        Some(Self { kind, subtype, q })
    }

    fn matches(&self, media_type: &str) -> bool {
        let Some((kind, subtype)) = media_type.split_once('/') else {
            return false;
        };
        (self.kind == "*" || self.kind == kind) && (self.subtype == "*" || self.subtype == subtype)
    }

    /// More specific ranges override broader ones for the same media type
    fn specificity(&self) -> u8 {
        match (self.kind.as_str(), self.subtype.as_str()) {
            ("*", _) => 0,
            (_, "*") => 1,
            _ => 2,
        }
    }
}

fn parse_accept(accept: &str) -> Vec<MediaRange> {
    accept.split(',').filter_map(MediaRange::parse).collect()
}

/// Quality the caller assigns to `media_type`, from its most specific matching range
fn quality(ranges: &[MediaRange], media_type: &str) -> f32 {
    ranges
        .iter()
        .filter(|r| r.matches(media_type))
        .max_by_key(|r| r.specificity())
        .map(|r| r.q)
        .unwrap_or(0.0)
}

/// Pick the first supported representation the caller accepts.
///
/// Server order decides between acceptable types; the caller's q-values
/// only decide whether a type is acceptable at all. A missing or blank
/// header accepts anything.
pub fn negotiate(accept: Option<&str>) -> Result<Representation> {
    let accept = match accept.map(str::trim) {
        None | Some("") => return Ok(Representation::ALL[0]),
        Some(accept) => accept,
    };

    let ranges = parse_accept(accept);
    Representation::ALL
        .into_iter()
        .find(|rep| quality(&ranges, rep.media_type()) > 0.0)
        .ok_or_else(|| Error::Unacceptable(accept.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_types() {
        assert_eq!(negotiate(Some("application/json")).unwrap(), Representation::Json);
        assert_eq!(negotiate(Some("text/plain")).unwrap(), Representation::PlainText);
        assert_eq!(negotiate(Some("text/xml")).unwrap(), Representation::TextXml);
        assert_eq!(
            negotiate(Some("application/xml")).unwrap(),
            Representation::ApplicationXml
        );
    }

    #[test]
    fn test_unsupported_type() {
        let result = negotiate(Some("application/pdf"));
        assert!(matches!(result, Err(Error::Unacceptable(a)) if a == "application/pdf"));
    }

    #[test]
    fn test_server_order_wins() {
        // Caller prefers plain text, but JSON is declared first
        let rep = negotiate(Some("text/plain, application/json;q=0.5")).unwrap();
        assert_eq!(rep, Representation::Json);

        let rep = negotiate(Some("text/plain, text/xml")).unwrap();
        assert_eq!(rep, Representation::TextXml);
    }

    #[test]
    fn test_wildcards() {
        assert_eq!(negotiate(Some("*/*")).unwrap(), Representation::Json);
        assert_eq!(negotiate(Some("*")).unwrap(), Representation::Json);
        assert_eq!(negotiate(Some("text/*")).unwrap(), Representation::TextXml);
        assert_eq!(
            negotiate(Some("application/*")).unwrap(),
            Representation::Json
        );
    }

    #[test]
    fn test_missing_header_accepts_anything() {
        assert_eq!(negotiate(None).unwrap(), Representation::Json);
        assert_eq!(negotiate(Some("  ")).unwrap(), Representation::Json);
    }

    #[test]
    fn test_zero_quality_excludes() {
        let rep = negotiate(Some("*/*, application/json;q=0, application/xml;q=0")).unwrap();
        assert_eq!(rep, Representation::TextXml);

        assert!(negotiate(Some("text/plain;q=0")).is_err());
    }

    #[test]
    fn test_case_and_params() {
        let rep = negotiate(Some("Text/Plain; charset=utf-8")).unwrap();
        assert_eq!(rep, Representation::PlainText);

        let rep = negotiate(Some("application/pdf, text/plain;Q=0.2")).unwrap();
        assert_eq!(rep, Representation::PlainText);
    }

    #[test]
    fn test_garbage_ranges_skipped() {
        assert!(negotiate(Some("json, /, application/")).is_err());
        assert!(negotiate(Some("text/plain;q=high")).is_err());
        assert_eq!(
            negotiate(Some("nonsense, text/plain")).unwrap(),
            Representation::PlainText
        );
    }

    #[test]
    fn test_parse_media_range() {
        let range = MediaRange::parse(" text/html ;level=1; q=0.7").unwrap();
        assert_eq!(
            range,
            MediaRange {
                kind: "text".into(),
                subtype: "html".into(),
                q: 0.7
            }
        );
    }
}

//! Serializers for the tour collection

use quick_xml::escape::escape;
use serde_json::Value;

use crate::types::Tour;

/// JSON array of `{id, name, price}` objects
pub fn to_json(tours: &[Tour]) -> Value {
    Value::Array(
        tours
            .iter()
            .map(|t| {
                serde_json::json!({
                    "id": t.id,
                    "name": t.name,
                    "price": t.price,
                })
            })
            .collect(),
    )
}

/// `<tours>` document with one `<tour price=".." id="..">name</tour>` per entry
pub fn to_xml(tours: &[Tour]) -> String {
    let mut xml = String::from(r#"<?xml version="1.0"?><tours>"#);
    for t in tours {
        xml.push_str(&format!(
            r#"<tour price="{}" id="{}">{}</tour>"#,
            t.price,
            t.id,
            escape(t.name.as_str())
        ));
    }
    xml.push_str("</tours>");
    xml
}

/// One `id: name (price)` line per tour, no trailing newline
pub fn to_text(tours: &[Tour]) -> String {
    tours
        .iter()
        .map(|t| format!("{}: {} ({})", t.id, t.name, t.price))
        .collect::<Vec<_>>()
        .join("\n")
}

//! Rendering of extracted rate tables for downstream exporters

use crate::error::{ExtractError, Result};
use crate::extracted::RateTable;
use crate::vocabulary::Field;
use html_escape::encode_text;
use std::fmt::Write;

fn format_number(value: f64) -> String {
    format!("{value:?}")
}

/// CSV with a `service,entry,rate` header; a missing entry is an empty field
pub fn to_csv(table: &RateTable) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer
        .write_record(Field::ALL.map(Field::as_str))
        .map_err(|e| ExtractError::Export(e.to_string()))?;
    for record in &table.records {
        writer
            .serialize(record)
            .map_err(|e| ExtractError::Export(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExtractError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExtractError::Export(e.to_string()))
}

/// XML document with one `<row>` element per record
#[must_use]
pub fn to_xml(table: &RateTable) -> String {
    let mut xml = String::from("<?xml version='1.0' encoding='utf-8'?>\n<data>\n");

    for record in &table.records {
        xml.push_str("  <row>\n");
        let _ = writeln!(xml, "    <service>{}</service>", encode_text(&record.service));
        match record.entry {
            Some(entry) => {
                let _ = writeln!(xml, "    <entry>{}</entry>", format_number(entry));
            }
            None => xml.push_str("    <entry/>\n"),
        }
        let _ = writeln!(xml, "    <rate>{}</rate>", format_number(record.rate));
        xml.push_str("  </row>\n");
    }

    xml.push_str("</data>");
    xml
}

/// Bordered HTML table, suitable for a reply summarizing the extraction
#[must_use]
pub fn to_html_table(table: &RateTable) -> String {
    let mut html = vec![
        r#"<table border="1" style="border-collapse: collapse; padding: 5px;">"#.to_string(),
        "<tr>".to_string(),
    ];
    html.extend(Field::ALL.iter().map(|f| format!("  <th>{f}</th>")));
    html.push("</tr>".to_string());

    for record in &table.records {
        html.push("<tr>".to_string());
        html.push(format!("  <td>{}</td>", encode_text(&record.service)));
        html.push(format!(
            "  <td>{}</td>",
            record.entry.map(format_number).unwrap_or_default()
        ));
        html.push(format!("  <td>{}</td>", format_number(record.rate)));
        html.push("</tr>".to_string());
    }

    html.push("</table>".to_string());
    html.join("\n")
}

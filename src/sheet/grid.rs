//! Worksheet grid decoder.
//!
//! The worksheet XML is sparse: blank cells are never emitted, and each cell
//! carries its own address. The decoder rebuilds a dense, row-major grid of
//! string values, padding skipped cells with empty strings so `cells[i]`
//! always corresponds to column `i`.

use crate::error::ImportError;
use crate::helpers::xml::XmlNodeHelper;
use crate::helpers::xml::XmlReader;
use crate::helpers::xml::XmlTextHelper;
use crate::match_xml_events;
use crate::sheet::reference::reference_to_column;
use quick_xml::events::Event;
use quick_xml::name::QName;
use std::io::BufRead;

const TAG_ROW: QName = QName(b"row");
const TAG_CELL: QName = QName(b"c");
const TAG_VALUE: QName = QName(b"v");
const TAG_INLINE_STRING: QName = QName(b"is");
const TAG_TEXT: QName = QName(b"t");

/// Cell value interpretations, from the cell's declared `t` attribute.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
enum CellKind {
    /// Absent or `"n"`: numeric storage, integral values rendered without
    /// a fractional part.
    #[default]
    Number,
    /// `"s"`: the accumulated text is an index into the shared-string table.
    SharedString,
    /// `"b"`: `"1"` and `"0"` map to `"true"` and `"false"`.
    Boolean,
    /// Anything else (`"str"`, `"inlineStr"`, `"d"`, ...): text kept verbatim.
    Raw,
}

/// Decoder states, one per element the cursor can sit inside.
#[derive(Copy, Clone, Debug, PartialEq)]
enum State {
    /// Between rows.
    Idle,
    /// Inside `<row>`, between cells.
    Row,
    /// Inside `<c>`, between value elements.
    Cell,
    /// Inside `<v>`.
    Value,
    /// Inside `<is>`, outside any text run.
    InlineString,
    /// Inside a `<t>` run of an inline string.
    InlineText,
}

/// Consumes a worksheet XML stream and returns the dense row grid.
/// Rows whose source emitted no cells at all are dropped; a structurally
/// invalid stream aborts the decode with an error.
pub(crate) fn decode<R: BufRead>(
    reader: &mut XmlReader<R>,
    shared_strings: &[String],
) -> Result<Vec<Vec<String>>, ImportError> {
    let mut grid = Vec::<Vec<String>>::new();
    let mut state = State::Idle;
    let mut row = Vec::<String>::new();
    let mut kind = CellKind::default();
    let mut column = None::<usize>;
    let mut value = String::new();
    match_xml_events!(reader => {
        Event::Start(event) if state == State::Idle && event.name() == TAG_ROW => {
            state = State::Row;
            row.clear();
        }
        Event::End(event) if state == State::Row && event.name() == TAG_ROW => {
            if !row.is_empty() {
                grid.push(std::mem::take(&mut row));
            }
            state = State::Idle;
        }
        Event::Start(event) if state == State::Row && event.name() == TAG_CELL => {
            state = State::Cell;
            kind = event.get_attribute_value("t")?.map(|t| {
                match t.as_ref() {
                    "s" => CellKind::SharedString,
                    "b" => CellKind::Boolean,
                    "n" => CellKind::Number,
                    _ => CellKind::Raw,
                }
            }).unwrap_or_default();
            column = event.get_attribute_value("r")?
                .and_then(|reference| reference_to_column(&reference));
            value.clear();
        }
        Event::End(event) if state == State::Cell && event.name() == TAG_CELL => {
            // A missing address falls back to the position after the last
            // materialized cell.
            let index = column.unwrap_or(row.len());
            while row.len() <= index {
                row.push(String::new());
            }
            row[index] = resolve_value(kind, &value, shared_strings);
            state = State::Row;
        }
        Event::Start(event) if state == State::Cell && event.name() == TAG_VALUE => {
            state = State::Value;
        }
        Event::End(event) if state == State::Value && event.name() == TAG_VALUE => {
            state = State::Cell;
        }
        Event::Start(event) if state == State::Cell && event.name() == TAG_INLINE_STRING => {
            state = State::InlineString;
        }
        Event::End(event) if state == State::InlineString && event.name() == TAG_INLINE_STRING => {
            state = State::Cell;
        }
        Event::Start(event) if state == State::InlineString && event.name() == TAG_TEXT => {
            state = State::InlineText;
        }
        Event::End(event) if state == State::InlineText && event.name() == TAG_TEXT => {
            state = State::InlineString;
        }
        Event::Text(event) if state == State::Value || state == State::InlineText => {
            value.push_bytes_text(&event)?;
        }
        Event::CData(event) if state == State::Value || state == State::InlineText => {
            value.push_str(&event.xml_content()?);
        }
        Event::GeneralRef(event) if state == State::Value || state == State::InlineText => {
            value.push_bytes_ref(&event)?;
        }
    });
    log::debug!("Decoded {} worksheet rows", grid.len());
    Ok(grid)
}

/// Resolves the accumulated cell text according to the declared cell kind.
fn resolve_value(kind: CellKind, value: &str, shared_strings: &[String]) -> String {
    match kind {
        CellKind::SharedString => match value.parse::<usize>() {
            Ok(index) if index < shared_strings.len() => shared_strings[index].to_owned(),
            // Hand-edited files get a blank cell here, not a failed import.
            _ => {
                log::warn!("Unresolvable shared-string index '{value}'");
                String::new()
            }
        },
        CellKind::Boolean => match value {
            "1" => "true".to_owned(),
            "0" => "false".to_owned(),
            _ => value.to_owned(),
        },
        CellKind::Number => match value.parse::<f64>() {
            Ok(number) if number.fract() == 0.0 && number.abs() < i64::MAX as f64 => {
                format!("{}", number as i64)
            }
            _ => value.to_owned(),
        },
        CellKind::Raw => value.to_owned(),
    }
}

//! Shared-string table decoder.
//!
//! The workbook format deduplicates repeated text into a table of string
//! items; cells reference entries by position. Each `<si>` item yields
//! exactly one entry, concatenating every nested `<t>` run so rich-text
//! items fragmented across runs come back as one logical string. Entries
//! are pushed in source order, even when empty, because the position is
//! the index cells resolve against.

use crate::error::ImportError;
use crate::helpers::xml::XmlReader;
use crate::helpers::xml::XmlTextHelper;
use crate::match_xml_events;
use quick_xml::events::Event;
use quick_xml::name::QName;
use std::io::BufRead;

const TAG_STRING_ITEM: QName = QName(b"si");
const TAG_TEXT: QName = QName(b"t");
const TAG_PHONETIC: QName = QName(b"rPh");

/// Decoder states, one per nesting level the format can put text under.
#[derive(Copy, Clone, Debug, PartialEq)]
enum State {
    /// Between string items.
    Idle,
    /// Inside `<si>`, outside any text run.
    Item,
    /// Inside a `<t>` run whose content belongs to the current item.
    Text,
    /// Inside a phonetic annotation whose text must not be collected.
    Phonetic,
}

/// Consumes a shared-string XML stream and returns the ordered table.
pub(crate) fn decode<R: BufRead>(reader: &mut XmlReader<R>) -> Result<Vec<String>, ImportError> {
    let mut strings = Vec::<String>::new();
    let mut state = State::Idle;
    let mut item = String::new();
    match_xml_events!(reader => {
        Event::Start(event) if state == State::Idle && event.name() == TAG_STRING_ITEM => {
            state = State::Item;
            item.clear();
        }
        Event::End(event) if state != State::Idle && event.name() == TAG_STRING_ITEM => {
            strings.push(std::mem::take(&mut item));
            state = State::Idle;
        }
        Event::Start(event) if state == State::Item && event.name() == TAG_PHONETIC => {
            state = State::Phonetic;
        }
        Event::End(event) if state == State::Phonetic && event.name() == TAG_PHONETIC => {
            state = State::Item;
        }
        Event::Start(event) if state == State::Item && event.name() == TAG_TEXT => {
            state = State::Text;
        }
        Event::End(event) if state == State::Text && event.name() == TAG_TEXT => {
            state = State::Item;
        }
        Event::Text(event) if state == State::Text => item.push_bytes_text(&event)?,
        Event::CData(event) if state == State::Text => item.push_str(&event.xml_content()?),
        Event::GeneralRef(event) if state == State::Text => item.push_bytes_ref(&event)?,
    });
    log::debug!("Decoded {} shared strings", strings.len());
    Ok(strings)
}

//! XML pull-reader wrapper and helper traits shared by the shared-string and
//! worksheet decoders.

use crate::error::ImportError;
use quick_xml::escape::resolve_xml_entity;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::BytesRef;
use quick_xml::events::BytesStart;
use quick_xml::events::BytesText;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::borrow::Cow;
use std::io::BufRead;

/// XML reader wrapper configured for lenient, single-pass worksheet parsing.
pub(crate) struct XmlReader<R: BufRead> {
    reader: Reader<R>,
    buffer: Vec<u8>,
}

impl<R: BufRead> XmlReader<R> {
    pub(crate) fn new(buf_reader: R) -> XmlReader<R> {
        let mut reader = Reader::from_reader(buf_reader);
        let config = reader.config_mut();
        config.check_comments = false;
        config.check_end_names = false;
        config.expand_empty_elements = true;
        config.trim_text(false);

        let buffer = Vec::with_capacity(1024);
        XmlReader { reader, buffer }
    }

    /// Reads the next XML event, or `None` at end of document.
    pub(crate) fn next(&'_ mut self) -> Result<Option<Event<'_>>, ImportError> {
        self.buffer.clear();
        match self.reader.read_event_into(&mut self.buffer) {
            Ok(Event::Eof) => Ok(None),
            Ok(event) => Ok(Some(event)),
            Err(error) => Err(ImportError::XmlError(error)),
        }
    }
}

/// Helper trait for XML start tags providing attribute access.
pub(crate) trait XmlNodeHelper<'a> {
    /// Gets an unescaped attribute value by name.
    fn get_attribute_value(&'a self, name: &str) -> Result<Option<Cow<'a, str>>, ImportError>;
}

impl<'a> XmlNodeHelper<'a> for BytesStart<'a> {
    fn get_attribute_value(&'a self, name: &str) -> Result<Option<Cow<'a, str>>, ImportError> {
        self.try_get_attribute(name)?
            .map(|attribute: Attribute<'a>| Ok(attribute.unescape_value()?))
            .transpose()
    }
}

/// Helper trait for accumulating text content from XML events.
pub(crate) trait XmlTextHelper {
    /// Appends the content of a text or CDATA event.
    fn push_bytes_text(&mut self, text: &BytesText) -> Result<(), ImportError>;

    /// Appends the expansion of an entity or character reference.
    /// Unresolvable references are dropped rather than failing the decode;
    /// import files are hand-edited and a broken entity should not void them.
    fn push_bytes_ref(&mut self, bytes: &BytesRef) -> Result<(), ImportError>;
}

impl XmlTextHelper for String {
    fn push_bytes_text(&mut self, text: &BytesText) -> Result<(), ImportError> {
        self.push_str(&text.xml_content()?);
        Ok(())
    }

    fn push_bytes_ref(&mut self, bytes: &BytesRef) -> Result<(), ImportError> {
        let raw = bytes.xml_content()?;
        if let Some(number) = raw.strip_prefix('#') {
            let code = if let Some(hex) = number.strip_prefix('x') {
                u32::from_str_radix(hex, 16).ok()
            } else {
                number.parse::<u32>().ok()
            };
            if let Some(character) = code.and_then(std::char::from_u32) {
                self.push_str(character.encode_utf8(&mut [0u8; 4]));
            }
        } else if let Some(entity) = resolve_xml_entity(&raw) {
            self.push_str(entity);
        } else {
            log::warn!("Dropping unresolvable XML entity '{raw}'");
        }
        Ok(())
    }
}

#[macro_export]
macro_rules! match_xml_events {
    ($reader:expr => { $($arms:tt)* }) => {
        while let Some(result) = $reader.next()? {
            match result {
                Event::Eof => break,
                $($arms)*
                _ => (),
            }
        }
    };
}

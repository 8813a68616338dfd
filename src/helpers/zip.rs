//! Container reader for the zipped-XML workbook format.
//!
//! A workbook file is a ZIP archive; only two entries matter to the import
//! pipeline: the shared-string table and the first worksheet. The reader
//! walks entries in storage order, remembers where those two live, and hands
//! each one out as a decompressing XML event stream.

use crate::error::ImportError;
use crate::helpers::xml::XmlReader;
use std::io::BufReader;
use std::io::Read;
use std::io::Seek;
use zip::read::ZipFile;
use zip::ZipArchive;

/// Archive path of the shared-string table entry (optional in the container).
const SHARED_STRINGS_ENTRY: &str = "xl/sharedStrings.xml";
/// Archive path of the first worksheet entry.
const WORKSHEET_ENTRY: &str = "xl/worksheets/sheet1.xml";

/// A workbook archive with the two entries of interest located up front.
pub(crate) struct WorkbookArchive<RS: Read + Seek> {
    zip: ZipArchive<RS>,
    shared_strings: Option<usize>,
    worksheet: Option<usize>,
}

impl<RS: Read + Seek> WorkbookArchive<RS> {
    /// Opens the byte stream as a ZIP archive and walks its entries in
    /// storage order, stopping as soon as both entries of interest are found.
    /// A stream that is not a valid archive fails with `MalformedContainer`;
    /// absent entries are only detected downstream (empty table, empty grid).
    pub(crate) fn open(reader: RS) -> Result<WorkbookArchive<RS>, ImportError> {
        let mut zip = ZipArchive::new(reader)?;
        let mut shared_strings = None;
        let mut worksheet = None;
        for index in 0..zip.len() {
            let name = zip.by_index(index)?.name().to_owned();
            if shared_strings.is_none() && matches_entry(&name, SHARED_STRINGS_ENTRY) {
                shared_strings = Some(index);
            } else if worksheet.is_none() && matches_entry(&name, WORKSHEET_ENTRY) {
                worksheet = Some(index);
            }
            if shared_strings.is_some() && worksheet.is_some() {
                break;
            }
        }
        log::debug!(
            "Opened workbook archive: {} entries, shared strings {}, worksheet {}",
            zip.len(),
            if shared_strings.is_some() { "present" } else { "absent" },
            if worksheet.is_some() { "present" } else { "absent" },
        );
        Ok(WorkbookArchive {
            zip,
            shared_strings,
            worksheet,
        })
    }

    /// Creates an XML reader over the shared-string entry, if present.
    pub(crate) fn shared_strings_reader(
        &'_ mut self,
    ) -> Result<Option<XmlReader<BufReader<ZipFile<'_, RS>>>>, ImportError> {
        self.entry_reader(self.shared_strings)
    }

    /// Creates an XML reader over the first worksheet entry, if present.
    pub(crate) fn worksheet_reader(
        &'_ mut self,
    ) -> Result<Option<XmlReader<BufReader<ZipFile<'_, RS>>>>, ImportError> {
        self.entry_reader(self.worksheet)
    }

    fn entry_reader(
        &'_ mut self,
        index: Option<usize>,
    ) -> Result<Option<XmlReader<BufReader<ZipFile<'_, RS>>>>, ImportError> {
        index
            .map(|index| Ok(XmlReader::new(BufReader::new(self.zip.by_index(index)?))))
            .transpose()
    }
}

/// Entry-name comparison: case-insensitive, backslash separators normalized.
fn matches_entry(name: &str, entry: &str) -> bool {
    name.replace('\\', "/").eq_ignore_ascii_case(entry)
}

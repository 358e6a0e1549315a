//! Thin wrapper over `quick_xml::Writer` for the handful of shapes the
//! package parts need

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

use crate::error::TableScrapeResult;

pub(super) struct XmlPart<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> XmlPart<W> {
    /// Start a part with the standalone UTF-8 declaration Excel writes
    pub(super) fn new(sink: W) -> TableScrapeResult<Self> {
        let mut writer = Writer::new(sink);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        Ok(Self { writer })
    }

    pub(super) fn open(&mut self, name: &str, attrs: &[(&str, &str)]) -> TableScrapeResult<()> {
        self.writer.write_event(Event::Start(element(name, attrs)))?;
        Ok(())
    }

    pub(super) fn close(&mut self, name: &str) -> TableScrapeResult<()> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    pub(super) fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> TableScrapeResult<()> {
        self.writer.write_event(Event::Empty(element(name, attrs)))?;
        Ok(())
    }

    /// `<name attrs>text</name>` with the text escaped
    pub(super) fn text_element(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
        text: &str,
    ) -> TableScrapeResult<()> {
        self.open(name, attrs)?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        self.close(name)
    }
}

fn element<'a>(name: &'a str, attrs: &[(&'a str, &'a str)]) -> BytesStart<'a> {
    let mut start = BytesStart::new(name);
    for attr in attrs {
        start.push_attribute(*attr);
    }
    start
}

//! Package parts other than the worksheets

use chrono::{DateTime, SecondsFormat, Utc};
use std::io::Write;

use super::xml::XmlPart;
use crate::error::TableScrapeResult;

const NS_MAIN: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const NS_REL: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_PKG_REL: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const NS_CONTENT_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

const CT_WORKBOOK: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml";
const CT_WORKSHEET: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml";
const CT_STYLES: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml";
const CT_CORE: &str = "application/vnd.openxmlformats-package.core-properties+xml";
const CT_APP: &str = "application/vnd.openxmlformats-officedocument.extended-properties+xml";

const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_CORE: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
const REL_APP: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
const REL_WORKSHEET: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet";
const REL_STYLES: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";

pub(super) const APPLICATION: &str = "kodegen-tablescrape";

pub(super) fn content_types<W: Write>(sink: W, sheet_count: usize) -> TableScrapeResult<()> {
    let mut xml = XmlPart::new(sink)?;
    xml.open("Types", &[("xmlns", NS_CONTENT_TYPES)])?;
    xml.empty(
        "Default",
        &[
            ("Extension", "rels"),
            ("ContentType", "application/vnd.openxmlformats-package.relationships+xml"),
        ],
    )?;
    xml.empty(
        "Default",
        &[("Extension", "xml"), ("ContentType", "application/xml")],
    )?;
    xml.empty(
        "Override",
        &[("PartName", "/xl/workbook.xml"), ("ContentType", CT_WORKBOOK)],
    )?;
    for n in 1..=sheet_count {
        let part = format!("/xl/worksheets/sheet{n}.xml");
        xml.empty("Override", &[("PartName", part.as_str()), ("ContentType", CT_WORKSHEET)])?;
    }
    xml.empty(
        "Override",
        &[("PartName", "/xl/styles.xml"), ("ContentType", CT_STYLES)],
    )?;
    xml.empty(
        "Override",
        &[("PartName", "/docProps/core.xml"), ("ContentType", CT_CORE)],
    )?;
    xml.empty(
        "Override",
        &[("PartName", "/docProps/app.xml"), ("ContentType", CT_APP)],
    )?;
    xml.close("Types")
}

pub(super) fn root_rels<W: Write>(sink: W) -> TableScrapeResult<()> {
    let mut xml = XmlPart::new(sink)?;
    xml.open("Relationships", &[("xmlns", NS_PKG_REL)])?;
    xml.empty(
        "Relationship",
        &[("Id", "rId1"), ("Type", REL_OFFICE_DOCUMENT), ("Target", "xl/workbook.xml")],
    )?;
    xml.empty(
        "Relationship",
        &[("Id", "rId2"), ("Type", REL_CORE), ("Target", "docProps/core.xml")],
    )?;
    xml.empty(
        "Relationship",
        &[("Id", "rId3"), ("Type", REL_APP), ("Target", "docProps/app.xml")],
    )?;
    xml.close("Relationships")
}

pub(super) fn workbook<W: Write>(sink: W, sheet_names: &[String]) -> TableScrapeResult<()> {
    let mut xml = XmlPart::new(sink)?;
    xml.open("workbook", &[("xmlns", NS_MAIN), ("xmlns:r", NS_REL)])?;
    xml.open("sheets", &[])?;
    for (i, name) in sheet_names.iter().enumerate() {
        let sheet_id = (i + 1).to_string();
        let rel_id = format!("rId{}", i + 1);
        xml.empty(
            "sheet",
            &[("name", name.as_str()), ("sheetId", sheet_id.as_str()), ("r:id", rel_id.as_str())],
        )?;
    }
    xml.close("sheets")?;
    xml.close("workbook")
}

/// Worksheets take `rId1..=rIdN`, styles take `rId{N+1}`
pub(super) fn workbook_rels<W: Write>(sink: W, sheet_count: usize) -> TableScrapeResult<()> {
    let mut xml = XmlPart::new(sink)?;
    xml.open("Relationships", &[("xmlns", NS_PKG_REL)])?;
    for n in 1..=sheet_count {
        let id = format!("rId{n}");
        let target = format!("worksheets/sheet{n}.xml");
        xml.empty(
            "Relationship",
            &[("Id", id.as_str()), ("Type", REL_WORKSHEET), ("Target", target.as_str())],
        )?;
    }
    let styles_id = format!("rId{}", sheet_count + 1);
    xml.empty(
        "Relationship",
        &[("Id", styles_id.as_str()), ("Type", REL_STYLES), ("Target", "styles.xml")],
    )?;
    xml.close("Relationships")
}

/// The single default cell format every cell uses
pub(super) fn styles<W: Write>(sink: W) -> TableScrapeResult<()> {
    let mut xml = XmlPart::new(sink)?;
    xml.open("styleSheet", &[("xmlns", NS_MAIN)])?;

    xml.open("fonts", &[("count", "1")])?;
    xml.open("font", &[])?;
    xml.empty("sz", &[("val", "11")])?;
    xml.empty("name", &[("val", "Calibri")])?;
    xml.close("font")?;
    xml.close("fonts")?;

    xml.open("fills", &[("count", "2")])?;
    for pattern in ["none", "gray125"] {
        xml.open("fill", &[])?;
        xml.empty("patternFill", &[("patternType", pattern)])?;
        xml.close("fill")?;
    }
    xml.close("fills")?;

    xml.open("borders", &[("count", "1")])?;
    xml.open("border", &[])?;
    for side in ["left", "right", "top", "bottom", "diagonal"] {
        xml.empty(side, &[])?;
    }
    xml.close("border")?;
    xml.close("borders")?;

    let base = [("numFmtId", "0"), ("fontId", "0"), ("fillId", "0"), ("borderId", "0")];
    xml.open("cellStyleXfs", &[("count", "1")])?;
    xml.empty("xf", &base)?;
    xml.close("cellStyleXfs")?;

    xml.open("cellXfs", &[("count", "1")])?;
    let mut cell_xf = base.to_vec();
    cell_xf.push(("xfId", "0"));
    xml.empty("xf", &cell_xf)?;
    xml.close("cellXfs")?;

    xml.open("cellStyles", &[("count", "1")])?;
    xml.empty("cellStyle", &[("name", "Normal"), ("xfId", "0"), ("builtinId", "0")])?;
    xml.close("cellStyles")?;

    xml.close("styleSheet")
}

pub(super) fn core_properties<W: Write>(
    sink: W,
    created: DateTime<Utc>,
    source_url: Option<&str>,
) -> TableScrapeResult<()> {
    let timestamp = created.to_rfc3339_opts(SecondsFormat::Secs, true);
    let w3cdtf = [("xsi:type", "dcterms:W3CDTF")];

    let mut xml = XmlPart::new(sink)?;
    xml.open(
        "cp:coreProperties",
        &[
            (
                "xmlns:cp",
                "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
            ),
            ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
            ("xmlns:dcterms", "http://purl.org/dc/terms/"),
            ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
        ],
    )?;
    xml.text_element("dc:creator", &[], APPLICATION)?;
    if let Some(url) = source_url {
        xml.text_element("dc:description", &[], &format!("Tables captured from {url}"))?;
    }
    xml.text_element("dcterms:created", &w3cdtf, &timestamp)?;
    xml.text_element("dcterms:modified", &w3cdtf, &timestamp)?;
    xml.close("cp:coreProperties")
}

pub(super) fn app_properties<W: Write>(sink: W) -> TableScrapeResult<()> {
    let mut xml = XmlPart::new(sink)?;
    xml.open(
        "Properties",
        &[(
            "xmlns",
            "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties",
        )],
    )?;
    xml.text_element("Application", &[], APPLICATION)?;
    xml.close("Properties")
}

//! OpenXML part templates and shape builders for the PPTX exporter.
//!
//! The deck is hand-templated XML inside a zip container. Coordinates are
//! EMU (914400 per inch) on a fixed 16:9 canvas.

use std::fmt::Write;

use crate::types::{ColourTokens, DesignTokens};

/// EMU per inch.
const EMU_PER_INCH: f64 = 914400.0;

/// Canvas width: 13.333 in.
pub const CANVAS_CX: i64 = 12192000;
/// Canvas height: 7.5 in.
pub const CANVAS_CY: i64 = 6858000;

const NS: &str = concat!(
    "xmlns:a=\"http://schemas.openxmlformats.org/drawingml/2006/main\" ",
    "xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\" ",
    "xmlns:p=\"http://schemas.openxmlformats.org/presentationml/2006/main\""
);

const XML_DECL: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n";

/// Convert inches to EMU.
pub fn emu(inches: f64) -> i64 {
    (inches * EMU_PER_INCH).round() as i64
}

/// Escape text for XML element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Horizontal alignment of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

impl Align {
    fn attr(self) -> &'static str {
        match self {
            Align::Left => "l",
            Align::Center => "ctr",
        }
    }
}

/// One text run rendered as its own paragraph.
#[derive(Debug, Clone)]
pub struct Para {
    pub text: String,
    /// Size in points.
    pub size: u16,
    pub bold: bool,
    /// `srgbClr` value, uppercase hex without `#`.
    pub color: String,
    /// Latin typeface.
    pub font: String,
    pub align: Align,
    pub bullet: bool,
}

/// `[Content_Types].xml` for a deck with `slide_count` slides.
pub fn content_types(slide_count: usize, media_ext: Option<&str>) -> String {
    let mut overrides = String::new();
    for i in 1..=slide_count {
        let _ = write!(
            overrides,
            "<Override PartName=\"/ppt/slides/slide{i}.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.slide+xml\"/>"
        );
    }
    let media_default = match media_ext {
        Some("png") => "<Default Extension=\"png\" ContentType=\"image/png\"/>",
        Some("jpeg") => "<Default Extension=\"jpeg\" ContentType=\"image/jpeg\"/>",
        _ => "",
    };
    format!(
        "{XML_DECL}<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\
<Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\
<Default Extension=\"xml\" ContentType=\"application/xml\"/>\
{media_default}\
<Override PartName=\"/ppt/presentation.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml\"/>\
<Override PartName=\"/ppt/slideMasters/slideMaster1.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml\"/>\
<Override PartName=\"/ppt/slideLayouts/slideLayout1.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml\"/>\
<Override PartName=\"/ppt/theme/theme1.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.theme+xml\"/>\
{overrides}\
<Override PartName=\"/docProps/core.xml\" ContentType=\"application/vnd.openxmlformats-package.core-properties+xml\"/>\
<Override PartName=\"/docProps/app.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.extended-properties+xml\"/>\
</Types>"
    )
}

/// Package-level `_rels/.rels`.
pub fn root_rels() -> String {
    format!(
        "{XML_DECL}<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument\" Target=\"ppt/presentation.xml\"/>\
<Relationship Id=\"rId2\" Type=\"http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties\" Target=\"docProps/core.xml\"/>\
<Relationship Id=\"rId3\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties\" Target=\"docProps/app.xml\"/>\
</Relationships>"
    )
}

/// `docProps/core.xml`.
pub fn core_props(brand_name: &str) -> String {
    let title = escape(brand_name);
    format!(
        "{XML_DECL}<cp:coreProperties \
xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\" \
xmlns:dc=\"http://purl.org/dc/elements/1.1/\">\
<dc:title>{title}</dc:title>\
<dc:creator>bx</dc:creator>\
</cp:coreProperties>"
    )
}

/// `docProps/app.xml`.
pub fn app_props() -> String {
    format!(
        "{XML_DECL}<Properties xmlns=\"http://schemas.openxmlformats.org/officeDocument/2006/extended-properties\">\
<Application>bx</Application>\
</Properties>"
    )
}

/// `ppt/presentation.xml` for `slide_count` slides.
pub fn presentation(slide_count: usize) -> String {
    let mut slide_ids = String::new();
    for i in 0..slide_count {
        let _ = write!(
            slide_ids,
            "<p:sldId id=\"{}\" r:id=\"rId{}\"/>",
            256 + i,
            i + 2
        );
    }
    format!(
        "{XML_DECL}<p:presentation {NS}>\
<p:sldMasterIdLst><p:sldMasterId id=\"2147483648\" r:id=\"rId1\"/></p:sldMasterIdLst>\
<p:sldIdLst>{slide_ids}</p:sldIdLst>\
<p:sldSz cx=\"{CANVAS_CX}\" cy=\"{CANVAS_CY}\"/>\
<p:notesSz cx=\"6858000\" cy=\"9144000\"/>\
</p:presentation>"
    )
}

/// `ppt/_rels/presentation.xml.rels`.
pub fn presentation_rels(slide_count: usize) -> String {
    let mut rels = String::from(
        "<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster\" Target=\"slideMasters/slideMaster1.xml\"/>",
    );
    for i in 0..slide_count {
        let _ = write!(
            rels,
            "<Relationship Id=\"rId{}\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide\" Target=\"slides/slide{}.xml\"/>",
            i + 2,
            i + 1
        );
    }
    format!(
        "{XML_DECL}<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">{rels}</Relationships>"
    )
}

const EMPTY_SP_TREE: &str = "<p:spTree>\
<p:nvGrpSpPr><p:cNvPr id=\"1\" name=\"\"/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>\
<p:grpSpPr><a:xfrm><a:off x=\"0\" y=\"0\"/><a:ext cx=\"0\" cy=\"0\"/><a:chOff x=\"0\" y=\"0\"/><a:chExt cx=\"0\" cy=\"0\"/></a:xfrm></p:grpSpPr>\
</p:spTree>";

/// Minimal `ppt/slideMasters/slideMaster1.xml`.
pub fn slide_master() -> String {
    format!(
        "{XML_DECL}<p:sldMaster {NS}>\
<p:cSld>\
<p:bg><p:bgPr><a:solidFill><a:schemeClr val=\"bg1\"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>\
{EMPTY_SP_TREE}\
</p:cSld>\
<p:clrMap bg1=\"lt1\" tx1=\"dk1\" bg2=\"lt2\" tx2=\"dk2\" accent1=\"accent1\" accent2=\"accent2\" accent3=\"accent3\" accent4=\"accent4\" accent5=\"accent5\" accent6=\"accent6\" hlink=\"hlink\" folHlink=\"folHlink\"/>\
<p:sldLayoutIdLst><p:sldLayoutId id=\"2147483649\" r:id=\"rId1\"/></p:sldLayoutIdLst>\
</p:sldMaster>"
    )
}

/// `ppt/slideMasters/_rels/slideMaster1.xml.rels`.
pub fn slide_master_rels() -> String {
    format!(
        "{XML_DECL}<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout\" Target=\"../slideLayouts/slideLayout1.xml\"/>\
<Relationship Id=\"rId2\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme\" Target=\"../theme/theme1.xml\"/>\
</Relationships>"
    )
}

/// Minimal blank `ppt/slideLayouts/slideLayout1.xml`.
pub fn slide_layout() -> String {
    format!(
        "{XML_DECL}<p:sldLayout {NS} type=\"blank\" preserve=\"1\">\
<p:cSld name=\"Blank\">{EMPTY_SP_TREE}</p:cSld>\
<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>\
</p:sldLayout>"
    )
}

/// `ppt/slideLayouts/_rels/slideLayout1.xml.rels`.
pub fn slide_layout_rels() -> String {
    format!(
        "{XML_DECL}<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster\" Target=\"../slideMasters/slideMaster1.xml\"/>\
</Relationships>"
    )
}

/// `ppt/theme/theme1.xml` carrying the brand colour scheme and fonts.
pub fn theme(tokens: &DesignTokens) -> String {
    let c: &ColourTokens = &tokens.colors;
    let heading = escape(&tokens.typography.heading.family);
    let body = escape(&tokens.typography.body.family);
    format!(
        "{XML_DECL}<a:theme xmlns:a=\"http://schemas.openxmlformats.org/drawingml/2006/main\" name=\"bx\">\
<a:themeElements>\
<a:clrScheme name=\"bx\">\
<a:dk1><a:srgbClr val=\"{text}\"/></a:dk1>\
<a:lt1><a:srgbClr val=\"{background}\"/></a:lt1>\
<a:dk2><a:srgbClr val=\"{primary_dark}\"/></a:dk2>\
<a:lt2><a:srgbClr val=\"{primary_light}\"/></a:lt2>\
<a:accent1><a:srgbClr val=\"{primary}\"/></a:accent1>\
<a:accent2><a:srgbClr val=\"{secondary}\"/></a:accent2>\
<a:accent3><a:srgbClr val=\"{accent}\"/></a:accent3>\
<a:accent4><a:srgbClr val=\"{primary_light}\"/></a:accent4>\
<a:accent5><a:srgbClr val=\"{primary_dark}\"/></a:accent5>\
<a:accent6><a:srgbClr val=\"{secondary}\"/></a:accent6>\
<a:hlink><a:srgbClr val=\"{primary}\"/></a:hlink>\
<a:folHlink><a:srgbClr val=\"{secondary}\"/></a:folHlink>\
</a:clrScheme>\
<a:fontScheme name=\"bx\">\
<a:majorFont><a:latin typeface=\"{heading}\"/><a:ea typeface=\"\"/><a:cs typeface=\"\"/></a:majorFont>\
<a:minorFont><a:latin typeface=\"{body}\"/><a:ea typeface=\"\"/><a:cs typeface=\"\"/></a:minorFont>\
</a:fontScheme>\
<a:fmtScheme name=\"Office\">\
<a:fillStyleLst><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:fillStyleLst>\
<a:lnStyleLst><a:ln w=\"6350\"><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:ln><a:ln w=\"12700\"><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:ln><a:ln w=\"19050\"><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:ln></a:lnStyleLst>\
<a:effectStyleLst><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle></a:effectStyleLst>\
<a:bgFillStyleLst><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:bgFillStyleLst>\
</a:fmtScheme>\
</a:themeElements>\
</a:theme>",
        text = c.text.to_ooxml(),
        background = c.background.to_ooxml(),
        primary = c.primary.to_ooxml(),
        primary_light = c.primary_light.to_ooxml(),
        primary_dark = c.primary_dark.to_ooxml(),
        secondary = c.secondary.to_ooxml(),
        accent = c.accent.to_ooxml(),
        heading = heading,
        body = body,
    )
}

/// `ppt/slides/_rels/slideN.xml.rels`, with an optional image relationship.
pub fn slide_rels(image_target: Option<&str>) -> String {
    let mut rels = String::from(
        "<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout\" Target=\"../slideLayouts/slideLayout1.xml\"/>",
    );
    if let Some(target) = image_target {
        let _ = write!(
            rels,
            "<Relationship Id=\"rId2\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/image\" Target=\"{target}\"/>"
        );
    }
    format!(
        "{XML_DECL}<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">{rels}</Relationships>"
    )
}

/// Wrap shape XML into a complete slide part.
pub fn slide(shapes: &str) -> String {
    format!(
        "{XML_DECL}<p:sld {NS}>\
<p:cSld><p:spTree>\
<p:nvGrpSpPr><p:cNvPr id=\"1\" name=\"\"/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>\
<p:grpSpPr/>\
{shapes}\
</p:spTree></p:cSld>\
<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>\
</p:sld>"
    )
}

/// A filled rectangle (accent bars, colour bands).
pub fn rect(id: u32, name: &str, x: i64, y: i64, cx: i64, cy: i64, fill: &str) -> String {
    format!(
        "<p:sp>\
<p:nvSpPr><p:cNvPr id=\"{id}\" name=\"{name}\"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr>\
<p:spPr>\
<a:xfrm><a:off x=\"{x}\" y=\"{y}\"/><a:ext cx=\"{cx}\" cy=\"{cy}\"/></a:xfrm>\
<a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom>\
<a:solidFill><a:srgbClr val=\"{fill}\"/></a:solidFill>\
<a:ln><a:noFill/></a:ln>\
</p:spPr>\
<p:txBody><a:bodyPr/><a:lstStyle/><a:p/></p:txBody>\
</p:sp>",
        name = escape(name),
    )
}

/// A dashed-outline placeholder shape for a missing image.
pub fn image_placeholder(
    id: u32,
    x: i64,
    y: i64,
    cx: i64,
    cy: i64,
    outline: &str,
    label_font: &str,
) -> String {
    format!(
        "<p:sp>\
<p:nvSpPr><p:cNvPr id=\"{id}\" name=\"Bildplatzhalter\"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr>\
<p:spPr>\
<a:xfrm><a:off x=\"{x}\" y=\"{y}\"/><a:ext cx=\"{cx}\" cy=\"{cy}\"/></a:xfrm>\
<a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom>\
<a:noFill/>\
<a:ln w=\"28575\"><a:solidFill><a:srgbClr val=\"{outline}\"/></a:solidFill><a:prstDash val=\"dash\"/></a:ln>\
</p:spPr>\
<p:txBody>\
<a:bodyPr anchor=\"ctr\"/><a:lstStyle/>\
<a:p><a:pPr algn=\"ctr\"/><a:r><a:rPr lang=\"de-DE\" sz=\"1400\" dirty=\"0\"><a:solidFill><a:srgbClr val=\"{outline}\"/></a:solidFill><a:latin typeface=\"{font}\"/></a:rPr><a:t>Bildplatzhalter</a:t></a:r></a:p>\
</p:txBody>\
</p:sp>",
        font = escape(label_font),
    )
}

/// A picture shape referencing `rId2` of its slide.
pub fn picture(id: u32, x: i64, y: i64, cx: i64, cy: i64) -> String {
    format!(
        "<p:pic>\
<p:nvPicPr><p:cNvPr id=\"{id}\" name=\"Logo\"/><p:cNvPicPr/><p:nvPr/></p:nvPicPr>\
<p:blipFill><a:blip r:embed=\"rId2\"/><a:stretch><a:fillRect/></a:stretch></p:blipFill>\
<p:spPr>\
<a:xfrm><a:off x=\"{x}\" y=\"{y}\"/><a:ext cx=\"{cx}\" cy=\"{cy}\"/></a:xfrm>\
<a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom>\
</p:spPr>\
</p:pic>"
    )
}

/// A text box built from paragraphs.
pub fn text_box(id: u32, name: &str, x: i64, y: i64, cx: i64, cy: i64, paras: &[Para]) -> String {
    let mut body = String::new();
    for para in paras {
        let bold = if para.bold { 1 } else { 0 };
        let ppr = if para.bullet {
            format!(
                "<a:pPr algn=\"{}\" marL=\"285750\" indent=\"-285750\"><a:buFont typeface=\"Arial\"/><a:buChar char=\"•\"/></a:pPr>",
                para.align.attr()
            )
        } else {
            format!("<a:pPr algn=\"{}\"><a:buNone/></a:pPr>", para.align.attr())
        };
        let _ = write!(
            body,
            "<a:p>{ppr}<a:r><a:rPr lang=\"de-DE\" sz=\"{sz}\" b=\"{bold}\" dirty=\"0\">\
<a:solidFill><a:srgbClr val=\"{color}\"/></a:solidFill>\
<a:latin typeface=\"{font}\"/>\
</a:rPr><a:t>{text}</a:t></a:r></a:p>",
            sz = u32::from(para.size) * 100,
            color = para.color,
            font = escape(&para.font),
            text = escape(&para.text),
        );
    }
    format!(
        "<p:sp>\
<p:nvSpPr><p:cNvPr id=\"{id}\" name=\"{name}\"/><p:cNvSpPr txBox=\"1\"/><p:nvPr/></p:nvSpPr>\
<p:spPr>\
<a:xfrm><a:off x=\"{x}\" y=\"{y}\"/><a:ext cx=\"{cx}\" cy=\"{cy}\"/></a:xfrm>\
<a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom>\
<a:noFill/>\
</p:spPr>\
<p:txBody><a:bodyPr wrap=\"square\"/><a:lstStyle/>{body}</p:txBody>\
</p:sp>",
        name = escape(name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emu_inch() {
        assert_eq!(emu(1.0), 914400);
        assert_eq!(emu(0.5), 457200);
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("A & B <c>"), "A &amp; B &lt;c&gt;");
    }

    #[test]
    fn test_presentation_lists_slides() {
        let xml = presentation(5);
        assert!(xml.contains("<p:sldId id=\"256\" r:id=\"rId2\"/>"));
        assert!(xml.contains("<p:sldId id=\"260\" r:id=\"rId6\"/>"));
        assert!(xml.contains("cx=\"12192000\" cy=\"6858000\""));
    }

    #[test]
    fn test_content_types_counts_slides() {
        let xml = content_types(3, Some("png"));
        assert_eq!(xml.matches("presentationml.slide+xml").count(), 3);
        assert!(xml.contains("image/png"));
    }

    #[test]
    fn test_text_box_escapes_and_sizes() {
        let para = Para {
            text: "Größe & Co".to_string(),
            size: 44,
            bold: true,
            color: "2563EB".to_string(),
            font: "Inter".to_string(),
            align: Align::Left,
            bullet: false,
        };
        let xml = text_box(2, "Titel", 0, 0, 100, 100, &[para]);
        assert!(xml.contains("sz=\"4400\""));
        assert!(xml.contains("b=\"1\""));
        assert!(xml.contains("Größe &amp; Co"));
    }
}

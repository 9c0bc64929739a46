//! Content block rendering
//!
//! One arm per block type. `Unknown` is an explicit arm that produces no
//! element, so a block with an unrecognized tag never disturbs its siblings.

use crate::node::{Element, ElementKind};
use crate::schema::{
    Alignment, BulletList, ContentBlock, Divider, Fonts, Image, ListStyle, Paragraph, Spacer, Text,
};
use crate::style::{
    DIVIDER_COLOR, DIVIDER_THICKNESS, LIST_PADDING_LEFT, PARAGRAPH_INDENT, Style, TEXT_COLUMN_GAP,
    em, px, spacer_height,
};
use crate::attr::AttrsExt;

use super::{Inherited, Renderer};

impl Renderer<'_> {
    pub(crate) fn render_content(
        &self,
        content: &ContentBlock,
        inherited: Inherited<'_>,
    ) -> Option<Element> {
        match content {
            ContentBlock::Text(text) => Some(render_text(text, inherited)),
            ContentBlock::Paragraph(para) => Some(render_paragraph(para, inherited)),
            ContentBlock::BulletList(list) => {
                Some(render_list(list, inherited, self.config.honor_list_style))
            }
            ContentBlock::Image(image) => Some(render_image(image, inherited)),
            ContentBlock::Divider(divider) => Some(render_divider(divider, inherited)),
            ContentBlock::Spacer(spacer) => Some(render_spacer(spacer)),
            ContentBlock::Unknown => {
                log::debug!("skipping content block with unrecognized type");
                None
            }
        }
    }
}

// =============================================================================
// Shared styling
// =============================================================================

/// Multi-column flow wrapper; `columns` of 0 or absent means one column
fn flow_style(columns: Option<u32>) -> Style {
    let count = columns.filter(|c| *c > 0).unwrap_or(1);
    Style::new()
        .set("column-count", count.to_string())
        .set("column-gap", TEXT_COLUMN_GAP)
        .set("text-align", "justify")
}

/// Explicit color wins over the inherited one, then font properties as given
fn font_style(style: Style, fonts: Fonts<'_>, inherited: Inherited<'_>) -> Style {
    style
        .set_opt("color", fonts.color.or(inherited.text_color))
        .set_opt("font-family", fonts.family)
        .set_opt("font-weight", fonts.weight)
        .set_opt("font-style", fonts.style)
        .set_opt("font-size", fonts.size)
}

fn align(alignment: Option<Alignment>) -> Option<&'static str> {
    alignment.map(Alignment::as_css)
}

// =============================================================================
// Blocks
// =============================================================================

fn render_text(text: &Text, inherited: Inherited<'_>) -> Element {
    let style = Style::new().set_opt("text-align", align(text.alignment));
    let para = Element::of_kind("p", ElementKind::Paragraph)
        .with_style(font_style(style, text.fonts(), inherited))
        .text(text.text.as_str());

    Element::of_kind("div", ElementKind::TextFlow)
        .with_style(flow_style(text.columns))
        .child(para)
}

fn render_paragraph(para: &Paragraph, inherited: Inherited<'_>) -> Element {
    let mut flow = Element::of_kind("div", ElementKind::TextFlow)
        .with_style(font_style(flow_style(para.columns), para.fonts(), inherited));

    flow.extend(para.text.iter().map(|entry| {
        Element::of_kind("p", ElementKind::Paragraph)
            .with_style(
                Style::new()
                    .set("text-indent", PARAGRAPH_INDENT)
                    .set_opt("text-align", align(para.alignment)),
            )
            .text(entry.as_str())
    }));
    flow
}

/// Items are numbered unless the caller opts into the requested marker.
fn render_list(list: &BulletList, inherited: Inherited<'_>, honor_list_style: bool) -> Element {
    let marker = match list.list_style_type {
        Some(requested) if honor_list_style => requested,
        _ => ListStyle::Decimal,
    };
    let tag = if marker.is_ordered() { "ol" } else { "ul" };
    let count = list.columns.filter(|c| *c > 0).unwrap_or(1);

    let style = Style::new()
        .set("list-style-type", marker.as_css())
        .set("columns", count.to_string())
        .set("column-gap", TEXT_COLUMN_GAP)
        .set("padding-left", LIST_PADDING_LEFT)
        .set("margin", "0")
        .set_opt("text-align", align(list.alignment));

    let mut elem = Element::of_kind(tag, ElementKind::List)
        .with_style(font_style(style, list.fonts(), inherited));
    elem.extend(
        list.items
            .iter()
            .map(|item| Element::of_kind("li", ElementKind::ListItem).text(item.as_str())),
    );
    elem
}

fn render_image(image: &Image, inherited: Inherited<'_>) -> Element {
    let style = Style::new()
        .set_opt("color", inherited.text_color)
        .set("margin", "0")
        .set("padding", "0")
        .set("display", "inline-block")
        .set("width", image.width.map_or_else(|| "auto".to_string(), px))
        .set("height", image.height.map_or_else(|| "auto".to_string(), px))
        .set("overflow", "hidden")
        .set_opt("text-align", align(image.alignment));

    let mut img = Element::of_kind("img", ElementKind::Image)
        .attr("src", image.src.as_str())
        .attr("alt", image.alt.as_deref().unwrap_or(""))
        .with_style(Style::new().set("display", "block").set("margin", "0 auto"));
    img.attrs.set_opt_attr("width", image.width);
    img.attrs.set_opt_attr("height", image.height);

    let mut figure = Element::of_kind("figure", ElementKind::Figure)
        .with_style(style)
        .child(img);
    if let Some(caption) = image.caption.as_deref().filter(|c| !c.is_empty()) {
        figure.push(Element::of_kind("figcaption", ElementKind::Caption).text(caption));
    }
    figure
}

fn render_divider(divider: &Divider, inherited: Inherited<'_>) -> Element {
    let thickness = divider.thickness.as_deref().unwrap_or(DIVIDER_THICKNESS);
    let color = divider
        .color
        .as_deref()
        .or(inherited.text_color)
        .unwrap_or(DIVIDER_COLOR);

    let mut style = Style::new()
        .set("border", "none")
        .set("border-top", format!("{thickness} solid {color}"))
        .set("width", divider.width.as_deref().unwrap_or("100%"));
    match divider.alignment {
        Some(Alignment::Left) => style.insert("margin-left", "0"),
        Some(Alignment::Right) => style.insert("margin-right", "0"),
        _ => {}
    }

    Element::of_kind("hr", ElementKind::Divider).with_style(style)
}

/// Negative line counts collapse to zero height
fn render_spacer(spacer: &Spacer) -> Element {
    Element::of_kind("div", ElementKind::Spacer)
        .with_style(Style::new().set("margin-top", em(spacer_height(spacer.lines.max(0.0)))))
}

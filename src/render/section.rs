//! Section rendering

use crate::error::DocResult;
use crate::id::NodePath;
use crate::node::{Element, ElementKind};
use crate::schema::Section;
use crate::style::{SECTION_BORDER, SECTION_COLOR_FALLBACK, SECTION_PADDING, Style};

use super::{Inherited, Renderer};

impl Renderer<'_> {
    /// `<section>` with the section's colors and fonts, its `<h2>` title,
    /// then every subsection in order.
    pub(crate) fn render_section(&self, section: &Section, path: NodePath) -> DocResult<Element> {
        log::trace!("section {} {:?}", path, section.title);

        let style = Style::new()
            .set_opt("background-color", section.background_color.as_deref())
            .set(
                "color",
                section.color.as_deref().unwrap_or(SECTION_COLOR_FALLBACK),
            )
            .set_opt("font-family", section.font_family.as_deref())
            .set_opt("font-weight", section.font_weight.as_deref())
            .set_opt("font-size", section.font_size.as_deref())
            .set("padding", SECTION_PADDING)
            .set("border", SECTION_BORDER);

        let mut elem = Element::of_kind("section", ElementKind::Section)
            .with_style(style)
            .with_id(self.id_for(&path))
            .child(Element::of_kind("h2", ElementKind::Title).text(section.title.as_str()));

        let inherited = Inherited {
            text_color: section.color.as_deref(),
        };
        for (i, sub) in section.subsections.iter().enumerate() {
            elem.push(self.render_subsection(sub, inherited, path.child(i))?);
        }
        Ok(elem)
    }
}

#[cfg(test)]
mod tests {
    use crate::node::ElementKind;
    use crate::render::render;
    use crate::schema::{Doc, Section};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_section_style_contract() {
        let section = Section {
            background_color: Some("navy".into()),
            color: Some("white".into()),
            font_family: Some("Arial".into()),
            font_size: Some("16px".into()),
            ..Section::new("Intro")
        };
        let tree = render(&Doc::new("D").with_section(section)).unwrap();
        let elem = tree.find_kind(ElementKind::Section)[0];

        assert_eq!(elem.tag, "section");
        assert_eq!(
            elem.style.to_string(),
            "background-color: navy; color: white; font-family: Arial; font-size: 16px; \
             padding: 20px; border: 2px solid black"
        );
        let title = elem.first_child().unwrap();
        assert_eq!(title.tag, "h2");
        assert_eq!(title.text_content(), "Intro");
    }

    #[test]
    fn test_section_without_color_inherits() {
        let tree = render(&Doc::new("D").with_section(Section::new("Plain"))).unwrap();
        let elem = tree.find_kind(ElementKind::Section)[0];
        assert_eq!(elem.css("color"), Some("inherit"));
        assert_eq!(elem.css("padding"), Some("20px"));
        assert_eq!(elem.css("border"), Some("2px solid black"));
        assert!(elem.css("background-color").is_none());
    }

    #[test]
    fn test_sections_in_order() {
        let doc = Doc::new("D")
            .with_section(Section::new("One"))
            .with_section(Section::new("Two"))
            .with_section(Section::new("Three"));
        let tree = render(&doc).unwrap();
        let titles: Vec<_> = tree
            .find_kind(ElementKind::Section)
            .iter()
            .map(|s| s.first_child().unwrap().text_content())
            .collect();
        assert_eq!(titles, vec!["One", "Two", "Three"]);
    }
}

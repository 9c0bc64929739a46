//! Subsection and column layout

use crate::error::DocResult;
use crate::id::NodePath;
use crate::node::{Element, ElementKind};
use crate::schema::{Block, Column, Subsection};
use crate::style::{COLUMN_ROW_GAP, SUBSECTION_MARGIN, Style, percent};

use super::{Inherited, Renderer};

/// Outer container shared by both subsection variants
fn container_style(width: Option<&str>) -> Style {
    Style::new()
        .set("margin", SUBSECTION_MARGIN)
        .set("width", width.unwrap_or("auto"))
}

impl Renderer<'_> {
    pub(crate) fn render_subsection<'a>(
        &self,
        sub: &'a Subsection,
        inherited: Inherited<'a>,
        path: NodePath,
    ) -> DocResult<Element> {
        self.check_depth(&path)?;
        match sub {
            Subsection::Block(block) => self.render_block(block, inherited, path),
            Subsection::Column(column) => self.render_column(column, inherited, path),
        }
    }

    /// Content first, then nested subsections, all with the same inherited color.
    fn render_block<'a>(
        &self,
        block: &'a Block,
        inherited: Inherited<'a>,
        path: NodePath,
    ) -> DocResult<Element> {
        let mut elem = Element::of_kind("div", ElementKind::Subsection)
            .with_style(container_style(block.width.as_deref()))
            .with_id(self.id_for(&path));

        if let Some(rendered) = block
            .content
            .as_ref()
            .and_then(|content| self.render_content(content, inherited))
        {
            elem.push(rendered);
        }

        for (i, child) in block.subsections.iter().enumerate() {
            elem.push(self.render_subsection(child, inherited, path.child(i))?);
        }
        Ok(elem)
    }

    /// Optional `<h3>`, then a flex row with one sized cell per child.
    fn render_column<'a>(
        &self,
        column: &'a Column,
        inherited: Inherited<'a>,
        path: NodePath,
    ) -> DocResult<Element> {
        let mut group = Element::of_kind("div", ElementKind::ColumnGroup)
            .with_style(container_style(column.width.as_deref()))
            .with_id(self.id_for(&path));

        if !column.title.is_empty() {
            group.push(Element::of_kind("h3", ElementKind::Title).text(column.title.as_str()));
        }

        let mut row = Element::of_kind("div", ElementKind::ColumnRow).with_style(
            Style::new()
                .set("display", "flex")
                .set("gap", COLUMN_ROW_GAP)
                .set("width", column.width.as_deref().unwrap_or("100%")),
        );
        for (i, child) in column.subsections.iter().enumerate() {
            let cell = Element::of_kind("div", ElementKind::ColumnCell)
                .with_style(Style::new().set("width", percent(column.child_width(i))))
                .child(self.render_subsection(child, inherited, path.child(i))?);
            row.push(cell);
        }

        group.push(row);
        Ok(group)
    }
}

#[cfg(test)]
mod tests {
    use crate::node::{Element, ElementKind};
    use crate::render::render;
    use crate::schema::{Block, Column, Doc, Section, Spacer, Subsection, Text};
    use crate::style::parse_percent;
    use pretty_assertions::assert_eq;

    fn leaf(text: &str) -> Subsection {
        Subsection::block("normal", text, Text::new(text))
    }

    fn render_one(sub: Subsection) -> crate::node::VisualTree {
        render(&Doc::new("D").with_section(Section::new("S").with_subsection(sub))).unwrap()
    }

    fn cell_widths(row: &Element) -> Vec<f64> {
        row.children_of_kind(ElementKind::ColumnCell)
            .map(|cell| parse_percent(cell.css("width").unwrap()).unwrap())
            .collect()
    }

    #[test]
    fn test_column_percentages() {
        let tree = render_one(Subsection::Column(
            Column::new([leaf("left"), leaf("right")]).with_percentages([60.0, 40.0]),
        ));
        let row = tree.find_kind(ElementKind::ColumnRow)[0];
        assert_eq!(row.css("display"), Some("flex"));
        assert_eq!(row.css("gap"), Some("1rem"));
        assert_eq!(row.css("width"), Some("100%"));
        assert_eq!(cell_widths(row), vec![60.0, 40.0]);
    }

    #[test]
    fn test_column_equal_division() {
        let tree = render_one(Subsection::Column(Column::new([leaf("a"), leaf("b"), leaf("c")])));
        let row = tree.find_kind(ElementKind::ColumnRow)[0];
        for width in cell_widths(row) {
            assert!((width - 100.0 / 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_column_children_order() {
        let tree = render_one(Subsection::Column(Column::new([leaf("a"), leaf("b"), leaf("c")])));
        let texts: Vec<_> = tree
            .find_kind(ElementKind::ColumnCell)
            .iter()
            .map(|cell| cell.text_content())
            .collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_column_title_only_when_present() {
        let titled = render_one(Subsection::Column(Column {
            title: "Two Columns Example".into(),
            ..Column::new([leaf("a")])
        }));
        let group = titled.find_kind(ElementKind::ColumnGroup)[0];
        let heading = group.first_child().unwrap();
        assert_eq!(heading.tag, "h3");
        assert_eq!(heading.text_content(), "Two Columns Example");

        let untitled = render_one(Subsection::Column(Column::new([leaf("a")])));
        let group = untitled.find_kind(ElementKind::ColumnGroup)[0];
        assert_eq!(group.first_child().unwrap().kind, ElementKind::ColumnRow);
    }

    #[test]
    fn test_nested_columns_size_independently() {
        let inner = Column::new([leaf("x"), leaf("y")]).with_percentages([25.0, 75.0]);
        let outer = Column::new([Subsection::Column(inner), leaf("z")]).with_percentages([80.0]);
        let tree = render_one(Subsection::Column(outer));

        let rows = tree.find_kind(ElementKind::ColumnRow);
        assert_eq!(rows.len(), 2);
        assert_eq!(cell_widths(rows[0]), vec![80.0, 50.0]);
        assert_eq!(cell_widths(rows[1]), vec![25.0, 75.0]);

        // outer group > row > cell > inner group > row > cell > subsection > leaf content
        let outer_group = tree.find_kind(ElementKind::ColumnGroup)[0];
        let inner_group = outer_group
            .first_child()
            .and_then(Element::first_child)
            .and_then(Element::first_child)
            .unwrap();
        assert_eq!(inner_group.kind, ElementKind::ColumnGroup);
        let leaf_container = inner_group
            .first_child()
            .and_then(Element::first_child)
            .and_then(Element::first_child)
            .unwrap();
        assert_eq!(leaf_container.kind, ElementKind::Subsection);
        assert_eq!(leaf_container.text_content(), "x");
    }

    #[test]
    fn test_block_content_then_children() {
        let block = Block {
            kind: "normal".into(),
            title: "Parent".into(),
            content: Some(Text::new("parent").into()),
            subsections: vec![leaf("child one"), leaf("child two")],
            width: Some("50%".into()),
        };
        let tree = render_one(Subsection::Block(block));
        let container = tree.find_kind(ElementKind::Subsection)[0];

        assert_eq!(container.css("margin"), Some("1rem 0"));
        assert_eq!(container.css("width"), Some("50%"));
        let kinds: Vec<_> = container.children_elements().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![ElementKind::TextFlow, ElementKind::Subsection, ElementKind::Subsection]
        );
        assert_eq!(container.text_content(), "parentchild onechild two");
    }

    #[test]
    fn test_empty_block_renders_container_only() {
        let tree = render_one(Subsection::Block(Block::default()));
        let container = tree.find_kind(ElementKind::Subsection)[0];
        assert!(container.is_empty());
        assert_eq!(container.css("width"), Some("auto"));
    }

    #[test]
    fn test_column_width_override() {
        let tree = render_one(Subsection::Column(Column {
            width: Some("80%".into()),
            ..Column::new([Subsection::block("spacer", "gap", Spacer::new(1.0))])
        }));
        let group = tree.find_kind(ElementKind::ColumnGroup)[0];
        assert_eq!(group.css("width"), Some("80%"));
        assert_eq!(tree.find_kind(ElementKind::ColumnRow)[0].css("width"), Some("80%"));
    }
}

//! Built-in document templates and a name-keyed registry.
//!
//! - `cover-page`: one navy section laid out as a cover sheet
//! - `sample`: two sections exercising columns, images, dividers, spacers

use std::path::Path;

use compact_str::CompactString;
use rustc_hash::FxHashMap;

use crate::error::{DocError, DocResult};
use crate::schema::{
    Alignment, BulletList, Column, Divider, Doc, Image, ListStyle, Paragraph, Section, Spacer,
    Subsection, Text,
};

/// Registry name of [`cover_page`].
pub const COVER_PAGE: &str = "cover-page";
/// Registry name of [`sample_doc`].
pub const SAMPLE: &str = "sample";

// =============================================================================
// Built-in templates
// =============================================================================

fn heading(text: &str, size: &str) -> Text {
    Text {
        font_family: Some("Arial".into()),
        font_weight: Some("bold".into()),
        font_size: Some(size.into()),
        alignment: Some(Alignment::Left),
        ..Text::new(text)
    }
}

/// Cover sheet: logo, title, subheading, accent rule, blurb, bullet points.
pub fn cover_page() -> Doc {
    let section = Section {
        background_color: Some("navy".into()),
        color: Some("white".into()),
        font_family: Some("Arial".into()),
        font_weight: Some("normal".into()),
        font_size: Some("16px".into()),
        ..Section::new("")
    }
    .with_subsection(Subsection::block(
        "normal",
        "Logo",
        Image {
            alt: Some("Brand Logo".into()),
            width: Some(100),
            height: Some(100),
            alignment: Some(Alignment::Left),
            ..Image::new("placeholder_logo.png")
        },
    ))
    .with_subsection(Subsection::block(
        "normal",
        "Main Title",
        Text {
            font_color: Some("black".into()),
            ..heading("Main Title Placeholder", "36pt")
        },
    ))
    .with_subsection(Subsection::block("normal", "Spacer", Spacer::new(3.0)))
    .with_subsection(Subsection::block(
        "normal",
        "Subheading",
        Text {
            font_color: Some("black".into()),
            ..heading("Subheading Placeholder", "24pt")
        },
    ))
    .with_subsection(Subsection::block(
        "normal",
        "Blue Divider",
        Divider {
            color: Some("#0074D9".into()),
            thickness: Some("4px".into()),
            width: Some("10%".into()),
            alignment: Some(Alignment::Left),
        },
    ))
    .with_subsection(Subsection::block(
        "normal",
        "Description Text",
        Paragraph {
            columns: Some(2),
            font_family: Some("Arial".into()),
            font_size: Some("14pt".into()),
            alignment: Some(Alignment::Left),
            ..Paragraph::new([
                "The sun peeked through the forest canopy, casting golden light on the mossy floor. Birds sang sweetly in the branches above.",
                "A gentle stream meandered through the valley, its water glistening like glass. Pebbles clinked softly beneath its flow.",
                "Wind danced across the open meadow, stirring the tall grass into waves. Butterflies flitted lazily among wildflowers.",
                "Rain tapped gently on the leaves, creating a rhythmic lullaby. The earth drank deeply, refreshed and renewed.",
            ])
        },
    ))
    .with_subsection(Subsection::block(
        "normal",
        "Second Subheading",
        heading("Another Subheading", "20pt"),
    ))
    .with_subsection(Subsection::block(
        "normal",
        "Bullet Points",
        BulletList {
            columns: Some(2),
            list_style_type: Some(ListStyle::Disc),
            alignment: Some(Alignment::Left),
            ..BulletList::new([
                "First bullet point placeholder",
                "Second bullet point placeholder",
                "Third bullet point placeholder",
                "Fourth bullet point placeholder",
            ])
        },
    ));

    Doc {
        author: "Placeholder Author".into(),
        date: "2025-06-08".into(),
        ..Doc::new("Cover Page Template")
    }
    .with_section(section)
}

/// Two sections: an introduction with a 60/40 column split, and a gallery.
pub fn sample_doc() -> Doc {
    let two_columns = Column {
        title: "Two Columns Example".into(),
        ..Column::new([
            Subsection::block(
                "paragraph",
                "Left Column Paragraph",
                Paragraph {
                    font_size: Some("14px".into()),
                    ..Paragraph::new([
                        "This is the first paragraph in the left column.",
                        "It has multiple lines.",
                    ])
                },
            ),
            Subsection::block(
                "bullet-list",
                "Right Column List",
                BulletList {
                    list_style_type: Some(ListStyle::Disc),
                    font_size: Some("14px".into()),
                    ..BulletList::new(["Item 1", "Item 2", "Item 3"])
                },
            ),
        ])
        .with_percentages([60.0, 40.0])
    };

    let introduction = Section {
        background_color: Some("navy".into()),
        font_family: Some("Arial, sans-serif".into()),
        font_weight: Some("bold".into()),
        font_size: Some("18px".into()),
        color: Some("white".into()),
        ..Section::new("Introduction")
    }
    .with_subsection(Subsection::block(
        "text",
        "Welcome",
        Text {
            font_size: Some("16px".into()),
            font_color: Some("white".into()),
            ..Text::new("Welcome to this sample document.")
        },
    ))
    .with_subsection(two_columns);

    let gallery = Section::new("Gallery")
        .with_subsection(Subsection::block(
            "image",
            "Sample Image",
            Image {
                alt: Some("Sample".into()),
                caption: Some("This is a sample image.".into()),
                width: Some(300),
                height: Some(200),
                ..Image::new("https://example.com/sample.jpg")
            },
        ))
        .with_subsection(Subsection::block(
            "divider",
            "Divider Example",
            Divider {
                color: Some("gray".into()),
                thickness: Some("2px".into()),
                width: Some("80%".into()),
                alignment: None,
            },
        ))
        .with_subsection(Subsection::block("spacer", "Spacer Example", Spacer::new(2.0)));

    Doc {
        author: "Jane Doe".into(),
        date: "2025-06-09".into(),
        ..Doc::new("Sample Document")
    }
    .with_section(introduction)
    .with_section(gallery)
}

// =============================================================================
// TemplateRegistry
// =============================================================================

/// Templates by name.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: FxHashMap<CompactString, Doc>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding `cover-page` and `sample`
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.insert(COVER_PAGE, cover_page());
        registry.insert(SAMPLE, sample_doc());
        registry
    }

    /// Register a template, returning the one it replaced
    pub fn insert(&mut self, name: impl Into<CompactString>, doc: Doc) -> Option<Doc> {
        self.templates.insert(name.into(), doc)
    }

    pub fn get(&self, name: &str) -> DocResult<&Doc> {
        self.templates
            .get(name)
            .ok_or_else(|| DocError::UnknownTemplate(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.templates.keys().map(CompactString::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Load a JSON template and register it under the file stem.
    ///
    /// Returns the registered name.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> DocResult<CompactString> {
        let path = path.as_ref();
        let doc = Doc::from_json_file(path)?;
        let name: CompactString = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().as_ref().into())
            .unwrap_or_else(|| doc.document_title.as_str().into());
        log::debug!("loaded template {:?} from {}", name, path.display());
        self.insert(name.clone(), doc);
        Ok(name)
    }
}

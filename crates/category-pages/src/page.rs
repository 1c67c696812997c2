use std::path::{Path, PathBuf};

use serde::Serialize;

/// A virtual output document for a single category: not yet rendered to a
/// file, just an output path, a template reference, and some metadata for
/// the host framework to render with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPage {
    pub kind: PageKind,
    pub dir: PathBuf,
    pub meta: CategoryPageMeta,
}

/// The two kinds of page emitted per category, differing only in their
/// filename and backing template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// The HTML index page for a category.
    Index,
    /// The XML feed page for a category.
    Feed,
}

impl PageKind {
    /// The filename of the emitted page within its category directory.
    pub fn filename(&self) -> &'static str {
        match self {
            Self::Index => "index.html",
            Self::Feed => "feed.xml",
        }
    }

    /// The template that backs this kind of page.
    pub fn template(&self) -> Template {
        match self {
            Self::Index => Template("category.html"),
            Self::Feed => Template("category-feed.html"),
        }
    }
}

/// A reference to a fixed, host-supplied template, addressed by name.
///
/// Resolution here is pure path math. Whether the template exists is only
/// checked when the host renders; a missing template is a fatal build error
/// there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template(&'static str);

impl Template {
    pub fn name(&self) -> &'static str {
        self.0
    }

    /// Resolves the template name against the conventional layouts
    /// directory under the site source.
    pub fn path(&self, source: impl AsRef<Path>) -> PathBuf {
        source.as_ref().join("_layouts").join(self.0)
    }
}

/// Metadata attached to a [`CategoryPage`], merged by the host framework
/// into the template context when the page is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryPageMeta {
    pub category: String,
    pub title: String,
}

impl CategoryPage {
    /// Returns a new [`CategoryPage`] of the given kind for `category`.
    ///
    /// The category name is used verbatim as a path segment, matching the
    /// host's permissive category naming.
    pub fn new(kind: PageKind, category: impl Into<String>) -> Self {
        let category = category.into();
        let dir = PathBuf::from_iter(["blog", "category", category.as_str()]);

        Self {
            kind,
            dir,
            meta: CategoryPageMeta {
                title: format!("Category: {category}"),
                category,
            },
        }
    }

    /// The page's output path, relative to the site root.
    pub fn output_path(&self) -> PathBuf {
        self.dir.join(self.kind.filename())
    }
}

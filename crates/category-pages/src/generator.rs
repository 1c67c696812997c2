use crate::page::{CategoryPage, PageKind};
use crate::taxonomy::Categories;

/// Emits the per-category pages for a site.
///
/// For every category in `categories`, appends two descriptors to `pages`:
/// an HTML index page and an XML feed page, both under
/// `blog/category/<name>/`. The host framework renders them alongside
/// normal content using the attached template reference and metadata.
///
/// Runs once per build, after content discovery. Calling it again without
/// resetting `pages` appends duplicate descriptors.
pub fn emit_category_pages(categories: &Categories, pages: &mut Vec<CategoryPage>) {
    for category in categories.keys() {
        pages.push(CategoryPage::new(PageKind::Index, category.as_str()));
        pages.push(CategoryPage::new(PageKind::Feed, category.as_str()));
    }
}

use scraper::Html;

use crate::{
    dom,
    error::Result,
    extensions::Source,
    http::{Transport, fetch_document_at},
    models::ChapterInfo,
};

/// How a site spreads its chapter list over documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChapterPagination {
    /// every chapter is on the detail document
    SinglePage,
    /// chapters continue on the document linked by `next_selector`
    FollowNextLink { next_selector: &'static str },
}

/// Collect chapters starting from an already fetched document served from
/// `document_url`.
///
/// With [`ChapterPagination::FollowNextLink`] documents are fetched one after
/// another until a page yields no chapters, has no next link, or `max_pages`
/// documents have been read. Next links resolve against the url of the
/// document they appear in.
pub fn fetch_all_chapters(
    source: &dyn Source,
    transport: &dyn Transport,
    document: Html,
    document_url: &str,
    max_pages: Option<usize>,
) -> Result<Vec<ChapterInfo>> {
    let next_selector = match source.chapter_pagination() {
        ChapterPagination::SinglePage => return source.parse_chapter_list(&document),
        ChapterPagination::FollowNextLink { next_selector } => next_selector,
    };

    let mut chapters = vec![];
    let mut document = document;
    let mut current = dom::abs_url(source.base_url(), document_url)?;
    let mut pages = 1;
    loop {
        let page_chapters = source.parse_chapter_list(&document)?;
        if page_chapters.is_empty() {
            break;
        }
        chapters.extend(page_chapters);

        let Some(href) = dom::select_attr(document.root_element(), next_selector, "href")? else {
            break;
        };

        if max_pages.is_some_and(|max_pages| pages >= max_pages) {
            warn!(
                "{}: stop following chapter pages after {pages}, next was {href}",
                source.get_source_info().name
            );
            break;
        }

        let next = dom::abs_url(&current, &href)?;
        let (served_from, next_document) =
            fetch_document_at(transport, &source.get(next.as_str())?)?;
        current = dom::abs_url(&next, &served_from)?;
        document = next_document;
        pages += 1;
    }

    Ok(chapters)
}

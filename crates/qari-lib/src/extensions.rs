use scraper::Html;
use url::Url;

use crate::{
    chapters::ChapterPagination,
    error::{Error, Result},
    http::{Headers, Request},
    models::{ChapterInfo, FilterSelection, FilterSpec, MangaDetail, MangaPage, PageInfo, SourceInfo},
};

/// Scraping rules of one site.
///
/// Request builders never touch the network and parsers are pure functions
/// of the document they are given, so a source holds no mutable state.
pub trait Source: Send + Sync {
    fn get_source_info(&self) -> SourceInfo;

    fn base_url(&self) -> &Url;

    /// Headers sent with every request built by this source
    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert(
            "Referer".to_string(),
            vec![self.base_url().as_str().to_string()],
        );
        headers
    }

    fn filter_list(&self) -> Vec<FilterSpec> {
        vec![]
    }

    fn popular_manga_request(&self, page: i64) -> Result<Request>;

    fn parse_popular_manga(&self, document: &Html) -> Result<MangaPage>;

    fn latest_manga_request(&self, page: i64) -> Result<Request>;

    fn parse_latest_manga(&self, document: &Html) -> Result<MangaPage> {
        self.parse_popular_manga(document)
    }

    /// A non blank `query` takes priority, filters are only applied without one
    fn search_manga_request(
        &self,
        page: i64,
        query: Option<&str>,
        filters: &[FilterSelection],
    ) -> Result<Request>;

    fn parse_search_manga(&self, document: &Html) -> Result<MangaPage> {
        self.parse_popular_manga(document)
    }

    fn manga_detail_request(&self, path: &str) -> Result<Request> {
        self.get(path)
    }

    fn parse_manga_detail(&self, path: &str, document: &Html) -> Result<MangaDetail>;

    fn chapter_list_request(&self, path: &str) -> Result<Request> {
        self.get(path)
    }

    fn chapter_pagination(&self) -> ChapterPagination {
        ChapterPagination::SinglePage
    }

    /// Chapters found on a single document, in document order
    fn parse_chapter_list(&self, document: &Html) -> Result<Vec<ChapterInfo>>;

    fn page_list_request(&self, path: &str) -> Result<Request> {
        self.get(path)
    }

    fn parse_page_list(&self, document: &Html) -> Result<Vec<PageInfo>>;

    /// Sources return every image url from [`Source::parse_page_list`]
    fn parse_image_url(&self, _document: &Html) -> Result<String> {
        Err(Error::Unsupported("parse_image_url"))
    }

    /// GET request for a path or url relative to the base url, with default headers
    fn get(&self, path: &str) -> Result<Request> {
        let url = crate::dom::abs_url(self.base_url(), path)?;
        Ok(Request::get(url.as_str()).with_headers(&self.headers()))
    }
}

use std::sync::Arc;

use anyhow::{Result, anyhow};
use fnv::FnvHashMap;
use qari_lib::prelude::*;

/// Registry of sources keyed by id, running their requests over one transport
pub struct SourceManager {
    transport: Arc<dyn Transport>,
    max_chapter_pages: Option<usize>,
    extensions: FnvHashMap<i64, Arc<dyn Source>>,
}

impl SourceManager {
    pub fn new(transport: Arc<dyn Transport>, max_chapter_pages: Option<usize>) -> Self {
        Self {
            transport,
            max_chapter_pages,
            extensions: FnvHashMap::default(),
        }
    }

    /// Manager holding every source shipped with `qari-sources`
    pub fn with_builtin_sources(
        transport: Arc<dyn Transport>,
        max_chapter_pages: Option<usize>,
    ) -> Result<Self> {
        let mut manager = Self::new(transport, max_chapter_pages);
        for source in qari_sources::sources()? {
            manager.insert(source)?;
        }

        Ok(manager)
    }

    pub fn insert(&mut self, source: Arc<dyn Source>) -> Result<()> {
        let info = source.get_source_info();
        if self.extensions.insert(info.id, source).is_some() {
            warn!("source {} ({}) replaced", info.name, info.id);
        }

        Ok(())
    }

    pub fn unload(&mut self, id: i64) -> Result<Arc<dyn Source>> {
        self.extensions
            .remove(&id)
            .ok_or(anyhow!("no such source"))
    }

    pub fn get(&self, id: i64) -> Result<Arc<dyn Source>> {
        self.extensions
            .get(&id)
            .cloned()
            .ok_or(anyhow!("source not exists"))
    }

    /// Every registered source, ordered by id
    pub fn list(&self) -> Result<Vec<SourceInfo>> {
        let mut sources = self
            .extensions
            .values()
            .map(|ext| ext.get_source_info())
            .collect::<Vec<SourceInfo>>();
        sources.sort_by_key(|source| source.id);

        Ok(sources)
    }

    fn fetch(&self, request: &Request) -> Result<scraper::Html> {
        Ok(fetch_document(self.transport.as_ref(), request)?)
    }

    pub fn filter_list(&self, id: i64) -> Result<Vec<FilterSpec>> {
        Ok(self.get(id)?.filter_list())
    }

    pub fn get_popular_manga(&self, id: i64, page: i64) -> Result<MangaPage> {
        let source = self.get(id)?;
        let document = self.fetch(&source.popular_manga_request(page)?)?;

        Ok(source.parse_popular_manga(&document)?)
    }

    pub fn get_latest_manga(&self, id: i64, page: i64) -> Result<MangaPage> {
        let source = self.get(id)?;
        if !source.get_source_info().supports_latest {
            return Err(Error::Unsupported("latest manga").into());
        }
        let document = self.fetch(&source.latest_manga_request(page)?)?;

        Ok(source.parse_latest_manga(&document)?)
    }

    pub fn search_manga(
        &self,
        id: i64,
        page: i64,
        query: Option<&str>,
        filters: &[FilterSelection],
    ) -> Result<MangaPage> {
        let source = self.get(id)?;
        let document = self.fetch(&source.search_manga_request(page, query, filters)?)?;

        Ok(source.parse_search_manga(&document)?)
    }

    pub fn get_manga_detail(&self, id: i64, path: &str) -> Result<MangaDetail> {
        let source = self.get(id)?;
        let document = self.fetch(&source.manga_detail_request(path)?)?;

        Ok(source.parse_manga_detail(path, &document)?)
    }

    pub fn get_chapters(&self, id: i64, path: &str) -> Result<Vec<ChapterInfo>> {
        let source = self.get(id)?;
        let (url, document) =
            fetch_document_at(self.transport.as_ref(), &source.chapter_list_request(path)?)?;

        Ok(fetch_all_chapters(
            source.as_ref(),
            self.transport.as_ref(),
            document,
            &url,
            self.max_chapter_pages,
        )?)
    }

    pub fn get_pages(&self, id: i64, path: &str) -> Result<Vec<PageInfo>> {
        let source = self.get(id)?;
        let document = self.fetch(&source.page_list_request(path)?)?;

        Ok(source.parse_page_list(&document)?)
    }
}

#[cfg(test)]
mod test {
    use std::{collections::HashMap, sync::Mutex};

    use super::*;

    struct Canned {
        bodies: HashMap<String, String>,
        requested: Mutex<Vec<String>>,
    }

    impl Canned {
        fn new<const N: usize>(bodies: [(&str, &str); N]) -> Arc<Self> {
            Arc::new(Self {
                bodies: bodies
                    .into_iter()
                    .map(|(url, body)| (url.to_string(), body.to_string()))
                    .collect(),
                requested: Mutex::new(vec![]),
            })
        }

        fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    impl Transport for Canned {
        fn execute(&self, request: &Request) -> anyhow::Result<Response> {
            self.requested.lock().unwrap().push(request.url.clone());
            let body = self
                .bodies
                .get(&request.url)
                .cloned()
                .ok_or_else(|| anyhow!("connection refused: {}", request.url))?;
            Ok(Response {
                url: request.url.clone(),
                status: 200,
                headers: Headers::new(),
                body,
            })
        }
    }

    fn manager(transport: Arc<Canned>, max_chapter_pages: Option<usize>) -> SourceManager {
        let _ = env_logger::builder().is_test(true).try_init();
        SourceManager::with_builtin_sources(transport, max_chapter_pages).unwrap()
    }

    #[test]
    fn test_registry() {
        let mut manager = manager(Canned::new([]), None);

        assert_eq!(
            manager
                .list()
                .unwrap()
                .iter()
                .map(|source| source.name.as_str())
                .collect::<Vec<&str>>(),
            vec!["Teamx", "MangaSwat", "Aresmanga"]
        );

        let source = manager.unload(2).unwrap();
        assert_eq!(source.get_source_info().name, "MangaSwat");
        assert!(manager.get(2).is_err());
        assert!(manager.unload(2).is_err());

        manager.insert(source).unwrap();
        assert!(manager.get(2).is_ok());
    }

    #[test]
    fn test_get_popular_manga() {
        let transport = Canned::new([(
            "https://swatmanga.net/manga/?page=1&status=&type=&order=popular",
            r#"<div class="bs"><a href="/manga/one-piece/" title="One Piece"><img src="/op.jpg"></a></div><a class="r">»</a>"#,
        )]);
        let manager = manager(transport.clone(), None);

        let page = manager.get_popular_manga(2, 1).unwrap();

        assert!(page.has_next_page);
        assert_eq!(page.manga[0].title, "One Piece");
        assert_eq!(transport.requested().len(), 1);
    }

    #[test]
    fn test_transport_error_is_propagated() {
        let manager = manager(Canned::new([]), None);

        let err = manager.get_manga_detail(3, "/series/x/").unwrap_err();

        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_get_chapters_respects_max_pages() {
        let page = |n: usize| {
            format!(
                r#"<div class="eplister"><ul><li><a href="/series/solo/{n}"><div>#</div><div>{n}</div></a></li></ul></div>
                <a aria-label="Next »" href="/series/solo?page={}">»</a>"#,
                n + 1
            )
        };
        let (one, two, three) = (page(1), page(2), page(3));
        let transport = Canned::new([
            ("https://mnhaestate.com/series/solo", one.as_str()),
            ("https://mnhaestate.com/series/solo?page=2", two.as_str()),
            ("https://mnhaestate.com/series/solo?page=3", three.as_str()),
        ]);
        let manager = manager(transport.clone(), Some(2));

        let chapters = manager.get_chapters(1, "/series/solo").unwrap();

        assert_eq!(
            chapters.iter().map(|c| c.name.as_str()).collect::<Vec<&str>>(),
            vec!["1", "2"]
        );
        assert_eq!(transport.requested().len(), 2);
    }

    #[test]
    fn test_get_pages() {
        let transport = Canned::new([(
            "https://aresmanga.net/tower-of-god-600/",
            r#"<script>ts_reader.run({"sources":[{"images":["https://cdn/1.webp","https://cdn/2.webp"]}]});</script>"#,
        )]);
        let manager = manager(transport, None);

        let pages = manager.get_pages(3, "/tower-of-god-600/").unwrap();

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].image_url, "https://cdn/1.webp");
    }

    #[test]
    fn test_unknown_source() {
        let manager = manager(Canned::new([]), None);

        assert!(manager.get_latest_manga(42, 1).is_err());
    }
}

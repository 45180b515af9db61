use qari_lib::{dom, prelude::*, reader};
use scraper::{ElementRef, Html};
use url::Url;

use crate::genres::{genre_filter, select_filter};

pub const ID: i64 = 1;
pub const NAME: &str = "Teamx";
const URL: &str = "https://mnhaestate.com";

const NEXT_PAGE: &str = r#"a.page-link[rel="next"]"#;
const ALT_NAME_PREFIX: &str = "Alternative Name: ";
const READER_IMAGES: &str = "body > section > div > div > div > div.main-col-inner > div.c-blog-post > div.entry-content > div > div > div.reading-content > div.image_list > div.page-break.no-gaps > img";

const STATUS: StatusTable = StatusTable(&[
    ("مستمرة", MangaStatus::Ongoing),
    ("مكتمل", MangaStatus::Completed),
    ("متوقف", MangaStatus::OnHiatus),
]);

const CHAPTER_DATE: DateFormat = DateFormat::new("%Y-%m-%d %H:%M:%S");

const STATUS_FILTER: [(&str, &str); 5] = [
    ("", ""),
    ("مستمرة", "مستمرة"),
    ("متوقف", "متوقف"),
    ("مكتمل", "مكتمل"),
    ("قادم قريبًا", "قادم قريبًا"),
];

const TYPE_FILTER: [(&str, &str); 6] = [
    ("", ""),
    ("مانجا ياباني", "مانجا ياباني"),
    ("مانها صيني", "مانها صيني"),
    ("مانها أندونيسية", "مانها أندونيسية"),
    ("ويب تون انجليزية", "ويب تون انجليزية"),
    ("مانهوا كورية", "مانهوا كورية"),
];

pub struct TeamX {
    url: Url,
}

impl TeamX {
    pub fn new() -> Result<Self> {
        let url = Url::parse(URL).map_err(|_| Error::InvalidUrl(URL.to_string()))?;
        Ok(Self { url })
    }

    fn series_url(&self, page: i64) -> Result<Url> {
        let mut url = dom::abs_url(&self.url, "/series")?;
        url.query_pairs_mut().append_pair("page", &page.to_string());
        Ok(url)
    }

    fn manga_path(&self, href: Option<String>) -> Result<String> {
        let href = href
            .and_then(dom::non_blank)
            .ok_or(Error::MissingField("manga url"))?;
        dom::path_from_href(&self.url, &href)
    }

    fn popular_manga_from_element(&self, element: ElementRef) -> Result<MangaInfo> {
        Ok(MangaInfo {
            path: self.manga_path(dom::select_attr(element, "a", "href")?)?,
            title: dom::select_attr(element, "a", "title")?
                .and_then(dom::non_blank)
                .ok_or(Error::MissingField("manga title"))?,
            cover_url: dom::select_abs_url(element, "img", "src", &self.url)?,
        })
    }

    fn latest_manga_from_element(&self, element: ElementRef) -> Result<MangaInfo> {
        Ok(MangaInfo {
            path: self.manga_path(dom::select_attr(element, "div.imgu > a", "href")?)?,
            title: dom::select_attr(element, "div.imgu > a > img", "alt")?
                .and_then(dom::non_blank)
                .ok_or(Error::MissingField("manga title"))?,
            cover_url: dom::select_abs_url(element, "div.imgu > a > img", "src", &self.url)?,
        })
    }

    fn search_manga_from_element(&self, element: ElementRef) -> Result<MangaInfo> {
        Ok(MangaInfo {
            path: self.manga_path(dom::select_attr(element, "a", "href")?)?,
            title: dom::non_blank(dom::select_text(element, "a.fw-bold")?)
                .ok_or(Error::MissingField("manga title"))?,
            cover_url: dom::select_abs_url(element, "img", "src", &self.url)?,
        })
    }

    fn chapter_from_element(&self, element: ElementRef) -> Result<ChapterInfo> {
        let href = dom::select_attr(element, "a", "href")?
            .and_then(dom::non_blank)
            .ok_or(Error::MissingField("chapter url"))?;

        let name = match dom::non_blank(dom::select_text(element, "a > div:nth-child(2)")?) {
            Some(name) => name,
            None => dom::select_first(element, "a")?
                .map(dom::text)
                .unwrap_or_default(),
        };

        let date = dom::select_first(element, "div.epl-date.eph-date.d-none.d-sm-block.date-time")?
            .map(dom::text);

        Ok(ChapterInfo {
            path: dom::path_from_href(&self.url, &href)?,
            name,
            uploaded: CHAPTER_DATE.parse_epoch_millis(date.as_deref()),
        })
    }
}

impl Source for TeamX {
    fn get_source_info(&self) -> SourceInfo {
        SourceInfo {
            id: ID,
            name: NAME.to_string(),
            url: URL.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            lang: "ar".to_string(),
            supports_latest: true,
        }
    }

    fn base_url(&self) -> &Url {
        &self.url
    }

    fn filter_list(&self) -> Vec<FilterSpec> {
        vec![
            select_filter("status", "Status", &STATUS_FILTER),
            select_filter("type", "Type", &TYPE_FILTER),
            genre_filter(),
        ]
    }

    fn popular_manga_request(&self, page: i64) -> Result<Request> {
        self.get(self.series_url(page)?.as_str())
    }

    fn parse_popular_manga(&self, document: &Html) -> Result<MangaPage> {
        dom::select_manga_page(document, "div.bs", NEXT_PAGE, |element| {
            self.popular_manga_from_element(element)
        })
    }

    fn latest_manga_request(&self, page: i64) -> Result<Request> {
        self.get(&format!("/?page={page}"))
    }

    fn parse_latest_manga(&self, document: &Html) -> Result<MangaPage> {
        dom::select_manga_page(document, "div.box", NEXT_PAGE, |element| {
            self.latest_manga_from_element(element)
        })
    }

    fn search_manga_request(
        &self,
        page: i64,
        query: Option<&str>,
        filters: &[FilterSelection],
    ) -> Result<Request> {
        let url = match query.map(str::trim).filter(|query| !query.is_empty()) {
            Some(query) => {
                let mut url = dom::abs_url(&self.url, "/ajax/search")?;
                url.query_pairs_mut().append_pair("keyword", query);
                url
            }
            None => {
                let mut url = self.series_url(page)?;
                append_filters(&mut url, filters);
                url
            }
        };

        self.get(url.as_str())
    }

    /// Filter searches land on the `/series` listing, keyword searches on the
    /// ajax result list
    fn parse_search_manga(&self, document: &Html) -> Result<MangaPage> {
        let root = document.root_element();
        if dom::select_first(root, "div.bs")?.is_some() {
            return self.parse_popular_manga(document);
        }

        let mut manga = vec![];
        for item in dom::select(root, "li")? {
            if dom::select_first(item, "a.fw-bold")?.is_some() {
                manga.push(self.search_manga_from_element(item)?);
            }
        }

        Ok(MangaPage {
            manga,
            has_next_page: dom::select_first(root, NEXT_PAGE)?.is_some(),
        })
    }

    fn parse_manga_detail(&self, path: &str, document: &Html) -> Result<MangaDetail> {
        let info = dom::select_first(document.root_element(), "div.row.mb-5")?
            .ok_or(Error::MissingField("manga info"))?;

        let title = dom::select_text(info, "div.author-info-title.mb-3 > h1")?;
        let title = dom::non_blank(dom::remove_surrounding(&title, "(", ")").to_string())
            .ok_or(Error::MissingField("manga title"))?;

        let author = dom::non_blank(dom::select_text(
            info,
            "div.text-right > div:nth-child(7) > small:nth-child(2) > a",
        )?);
        let status = dom::select_text(
            info,
            "div.text-right > div:nth-child(6) > small:nth-child(2) > a",
        )?;

        let mut genre = dom::select(info, "div.review-author-info > a")?
            .into_iter()
            .map(dom::text)
            .filter(|genre| !genre.is_empty())
            .collect::<Vec<String>>();
        if let Some(kind) = dom::non_blank(dom::select_text(
            info,
            "div.text-right > div:nth-child(5) > small:nth-child(2) > a",
        )?) {
            genre.push(kind);
        }

        let status = match STATUS.parse(Some(&status)) {
            MangaStatus::Unknown => {
                debug!("{NAME}: unknown status '{status}' for {path}");
                MangaStatus::Unknown
            }
            known => known,
        };

        let mut manga = MangaDetail {
            path: path.to_string(),
            title,
            cover_url: dom::select_abs_url(info, "div.text-right > img", "src", &self.url)?,
            artist: author.clone(),
            author,
            status,
            genre,
            description: dom::select_text(info, "div.review-content > p")?,
        };

        if let Some(alt_name) = dom::non_blank(dom::select_text(info, "span.alternative")?) {
            manga.append_paragraph(&format!("{ALT_NAME_PREFIX}{alt_name}"));
        }

        Ok(manga)
    }

    fn chapter_pagination(&self) -> ChapterPagination {
        ChapterPagination::FollowNextLink {
            next_selector: r#"a[aria-label="Next »"]"#,
        }
    }

    fn parse_chapter_list(&self, document: &Html) -> Result<Vec<ChapterInfo>> {
        dom::select(document.root_element(), "div.eplister > ul > li")?
            .into_iter()
            .map(|element| self.chapter_from_element(element))
            .collect()
    }

    fn parse_page_list(&self, document: &Html) -> Result<Vec<PageInfo>> {
        reader::pages_from_images(document, READER_IMAGES, &self.url)
    }
}

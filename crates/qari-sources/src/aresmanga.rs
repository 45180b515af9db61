use qari_lib::{dom, prelude::*, reader};
use scraper::{ElementRef, Html};
use url::Url;

use crate::genres::{STATUS_FILTER, TYPE_FILTER, genre_filter, select_filter};

pub const ID: i64 = 3;
pub const NAME: &str = "Aresmanga";
const URL: &str = "https://aresmanga.net";

const ALT_NAME_PREFIX: &str = "Alternative Name: ";
const TSINFO: &str = "div.info-left > div > div.tsinfo.bixbox";

const STATUS: StatusTable = StatusTable(&[
    ("Ongoing", MangaStatus::Ongoing),
    ("Completed", MangaStatus::Completed),
    ("Hiatus", MangaStatus::OnHiatus),
]);

/// Chapter dates are written with Arabic month names, e.g. `مارس 01, 2024`
const CHAPTER_DATE: DateFormat = DateFormat::with_months("%B %d, %Y", &ARABIC_MONTHS);

const SORT_FILTER: [(&str, &str); 5] = [
    ("title", "A-Z"),
    ("titlereverse", "Z-A"),
    ("update", "جديد إصداراتنا"),
    ("latest", "تاريخ الإضافة"),
    ("popular", "الشهرة"),
];

pub struct AresManga {
    url: Url,
}

impl AresManga {
    pub fn new() -> Result<Self> {
        let url = Url::parse(URL).map_err(|_| Error::InvalidUrl(URL.to_string()))?;
        Ok(Self { url })
    }

    fn series_url(&self, page: i64) -> Result<Url> {
        let mut url = dom::abs_url(&self.url, "/series/")?;
        url.query_pairs_mut().append_pair("page", &page.to_string());
        Ok(url)
    }

    fn manga_from_element(&self, element: ElementRef) -> Result<MangaInfo> {
        let href = dom::select_attr(element, "a", "href")?
            .and_then(dom::non_blank)
            .ok_or(Error::MissingField("manga url"))?;

        Ok(MangaInfo {
            path: dom::path_from_href(&self.url, &href)?,
            title: dom::select_attr(element, "a", "title")?
                .and_then(dom::non_blank)
                .ok_or(Error::MissingField("manga title"))?,
            cover_url: dom::select_abs_url(element, "img", "src", &self.url)?,
        })
    }

    fn chapter_from_element(&self, element: ElementRef) -> Result<ChapterInfo> {
        let href = dom::select_attr(element, "a", "href")?
            .and_then(dom::non_blank)
            .ok_or(Error::MissingField("chapter url"))?;

        let name = match dom::non_blank(dom::select_text(element, ".lch a, .chapternum")?) {
            Some(name) => name,
            None => dom::select_first(element, "a")?
                .map(dom::text)
                .unwrap_or_default(),
        };

        let date = dom::select_first(element, "span.chapterdate")?.map(dom::text);

        Ok(ChapterInfo {
            path: dom::path_from_href(&self.url, &href)?,
            name,
            uploaded: CHAPTER_DATE.parse_epoch_millis(date.as_deref()),
        })
    }
}

impl Source for AresManga {
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
            select_filter("order", "Sort by", &SORT_FILTER),
            select_filter("status", "Status", &STATUS_FILTER),
            select_filter("type", "Type", &TYPE_FILTER),
            genre_filter(),
        ]
    }

    fn popular_manga_request(&self, page: i64) -> Result<Request> {
        let mut url = self.series_url(page)?;
        url.query_pairs_mut().append_pair("order", "popular");
        self.get(url.as_str())
    }

    fn parse_popular_manga(&self, document: &Html) -> Result<MangaPage> {
        dom::select_manga_page(document, "div.bsx", "a.r", |element| {
            self.manga_from_element(element)
        })
    }

    fn latest_manga_request(&self, page: i64) -> Result<Request> {
        let mut url = self.series_url(page)?;
        url.query_pairs_mut().append_pair("order", "update");
        self.get(url.as_str())
    }

    fn search_manga_request(
        &self,
        page: i64,
        query: Option<&str>,
        filters: &[FilterSelection],
    ) -> Result<Request> {
        let mut url = self.series_url(page)?;
        match query.map(str::trim).filter(|query| !query.is_empty()) {
            Some(query) => {
                url.query_pairs_mut().append_pair("s", query);
            }
            None => append_filters(&mut url, filters),
        }

        self.get(url.as_str())
    }

    fn parse_manga_detail(&self, path: &str, document: &Html) -> Result<MangaDetail> {
        let info = dom::select_first(document.root_element(), "div.main-info")?
            .ok_or(Error::MissingField("manga info"))?;

        let title = dom::select_text(info, "h1.entry-title")?;
        let title = dom::non_blank(dom::remove_surrounding(&title, "(", ")").to_string())
            .ok_or(Error::MissingField("manga title"))?;

        let field = |query: &str| dom::select_text(info, &format!("{TSINFO} > {query}"));

        let mut genre = dom::select(info, "span.mgen > a")?
            .into_iter()
            .map(dom::text)
            .filter(|genre| !genre.is_empty())
            .collect::<Vec<String>>();
        if let Some(kind) = dom::non_blank(field("div:nth-child(2) > a")?) {
            genre.push(kind);
        }

        let status = field("div:nth-child(1) > i")?;
        let mut manga = MangaDetail {
            path: path.to_string(),
            title,
            cover_url: dom::select_abs_url(
                info,
                "div.info-left > div > div.thumb > img",
                "src",
                &self.url,
            )?,
            author: dom::non_blank(field("div:nth-child(4) > i")?),
            artist: dom::non_blank(field("div:nth-child(5) > i")?),
            status: STATUS.parse(Some(&status)),
            genre,
            description: dom::select_text(
                info,
                "div.info-right > div.info-desc.bixbox > div:nth-child(3) > div > p",
            )?,
        };

        if let Some(alt_name) = dom::non_blank(dom::select_text(info, "span.alternative")?) {
            manga.append_paragraph(&format!("{ALT_NAME_PREFIX}{alt_name}"));
        }

        Ok(manga)
    }

    fn parse_chapter_list(&self, document: &Html) -> Result<Vec<ChapterInfo>> {
        dom::select(document.root_element(), "div.eplister > ul > li")?
            .into_iter()
            .map(|element| self.chapter_from_element(element))
            .collect()
    }

    fn parse_page_list(&self, document: &Html) -> Result<Vec<PageInfo>> {
        reader::pages_from_script(document, "ts_reader")
    }
}

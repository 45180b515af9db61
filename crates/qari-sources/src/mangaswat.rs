use qari_lib::{dom, prelude::*, reader};
use scraper::{ElementRef, Html};
use url::Url;

use crate::genres::{STATUS_FILTER, TYPE_FILTER, genre_filter, select_filter};

pub const ID: i64 = 2;
pub const NAME: &str = "MangaSwat";
const URL: &str = "https://swatmanga.net";

const STARTED_DAY_PREFIX: &str = "تاريخ النشر";
const UPDATE_DAY_PREFIX: &str = "تحديث في";
const ALT_NAME_PREFIX: &str = "مسميّات أخرى";

const STATUS: StatusTable = StatusTable(&[
    ("Ongoing", MangaStatus::Ongoing),
    ("Completed", MangaStatus::Completed),
    ("Hiatus", MangaStatus::OnHiatus),
]);

const CHAPTER_DATE: DateFormat = DateFormat::new("%Y-%m-%d");

const SORT_FILTER: [(&str, &str); 5] = [
    ("title", "A-Z"),
    ("titlereverse", "Z-A"),
    ("update", "التحديثات الاخيرة"),
    ("latest", "الإضافات الاخيرة"),
    ("popular", "الشائع"),
];

pub struct MangaSwat {
    url: Url,
}

impl MangaSwat {
    pub fn new() -> Result<Self> {
        let url = Url::parse(URL).map_err(|_| Error::InvalidUrl(URL.to_string()))?;
        Ok(Self { url })
    }

    fn manga_url(&self, page: i64) -> Result<Url> {
        let mut url = dom::abs_url(&self.url, "/manga/")?;
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

        let date = dom::select_first(element, ".chapterdate")?.map(dom::text);

        Ok(ChapterInfo {
            path: dom::path_from_href(&self.url, &href)?,
            name,
            uploaded: CHAPTER_DATE.parse_epoch_millis(date.as_deref()),
        })
    }
}

/// Text of the info spans labelled with `label`, or of their `child` elements
fn labelled(info: ElementRef, label: &str, child: Option<&str>) -> Result<Vec<String>> {
    let spans = dom::select_containing(info, "div.infox > div.spe > span", label)?;
    Ok(spans
        .into_iter()
        .flat_map(|span| match child {
            Some(child) => dom::children_named(span, child),
            None => vec![span],
        })
        .map(dom::text)
        .filter(|text| !text.is_empty())
        .collect())
}

fn info_paragraph(prefix: &str, value: &str) -> String {
    format!(":{prefix} ᗏ \n{value} •")
}

impl Source for MangaSwat {
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
        let mut url = self.manga_url(page)?;
        url.query_pairs_mut()
            .append_pair("status", "")
            .append_pair("type", "")
            .append_pair("order", "popular");
        self.get(url.as_str())
    }

    fn parse_popular_manga(&self, document: &Html) -> Result<MangaPage> {
        dom::select_manga_page(document, "div.bs", "a.r", |element| {
            self.manga_from_element(element)
        })
    }

    fn latest_manga_request(&self, page: i64) -> Result<Request> {
        let mut url = self.manga_url(page)?;
        url.query_pairs_mut().append_pair("order", "update");
        self.get(url.as_str())
    }

    fn search_manga_request(
        &self,
        page: i64,
        query: Option<&str>,
        filters: &[FilterSelection],
    ) -> Result<Request> {
        let url = match query.map(str::trim).filter(|query| !query.is_empty()) {
            Some(query) => {
                let mut url = dom::abs_url(&self.url, &format!("/page/{page}/"))?;
                url.query_pairs_mut().append_pair("s", query);
                url
            }
            None => {
                let mut url = self.manga_url(page)?;
                append_filters(&mut url, filters);
                url
            }
        };

        self.get(url.as_str())
    }

    fn parse_search_manga(&self, document: &Html) -> Result<MangaPage> {
        dom::select_manga_page(document, "div.bs", "a.next.page-numbers", |element| {
            self.manga_from_element(element)
        })
    }

    fn parse_manga_detail(&self, path: &str, document: &Html) -> Result<MangaDetail> {
        let info = dom::select_first(document.root_element(), "div.bigcontent")?
            .ok_or(Error::MissingField("manga info"))?;

        let title = dom::select_text(info, "div.infox > h1")?;
        let title = dom::non_blank(dom::remove_surrounding(&title, "(", ")").to_string())
            .ok_or(Error::MissingField("manga title"))?;

        let status = labelled(info, "الحالة", None)?.join(" ");
        if status.is_empty() {
            debug!("{NAME}: no status for {path}");
        }

        let mut genre = labelled(info, "التصنيف", Some("a"))?;
        genre.extend(labelled(info, "النوع", Some("a"))?);

        let mut manga = MangaDetail {
            path: path.to_string(),
            title,
            cover_url: dom::select_abs_url(info, "div.thumb > img", "src", &self.url)?,
            author: dom::non_blank(labelled(info, "المؤلف", Some("i"))?.join(" ")),
            artist: dom::non_blank(labelled(info, "الناشر", Some("i"))?.join(" ")),
            status: STATUS.parse(Some(&status)),
            genre,
            description: dom::select_text(info, "div.infox > div.desc > div > span > p, h4, h3")?,
        };

        let supplements = [
            (STARTED_DAY_PREFIX, r#"time[itemprop="datePublished"]"#),
            (UPDATE_DAY_PREFIX, r#"time[itemprop="dateModified"]"#),
            (ALT_NAME_PREFIX, "span.alter"),
        ];
        for (prefix, query) in supplements {
            if let Some(value) = dom::non_blank(dom::select_text(info, query)?) {
                manga.append_paragraph(&info_paragraph(prefix, &value));
            }
        }

        Ok(manga)
    }

    fn parse_chapter_list(&self, document: &Html) -> Result<Vec<ChapterInfo>> {
        dom::select(document.root_element(), "div.bixbox.bxcl > ul > li")?
            .into_iter()
            .map(|element| self.chapter_from_element(element))
            .collect()
    }

    fn parse_page_list(&self, document: &Html) -> Result<Vec<PageInfo>> {
        reader::pages_from_script(document, "ts_reader")
    }
}

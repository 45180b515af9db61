//! Selection helpers over [`scraper`] documents.
//!
//! Text is whitespace-normalized and attribute lookups return the first
//! matching element that carries the attribute.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::{
    error::{Error, Result},
    models::{MangaInfo, MangaPage},
};

pub fn selector(query: &str) -> Result<Selector> {
    Selector::parse(query).map_err(|_| Error::InvalidSelector(query.to_string()))
}

pub fn select<'a>(root: ElementRef<'a>, query: &str) -> Result<Vec<ElementRef<'a>>> {
    let selector = selector(query)?;
    Ok(root.select(&selector).collect())
}

pub fn select_first<'a>(root: ElementRef<'a>, query: &str) -> Result<Option<ElementRef<'a>>> {
    let selector = selector(query)?;
    Ok(root.select(&selector).next())
}

/// Text of an element, text nodes separated by a space and runs of
/// whitespace collapsed to a single space
pub fn text(element: ElementRef) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Text of every match joined by a space, empty when nothing matches
pub fn select_text(root: ElementRef, query: &str) -> Result<String> {
    Ok(select(root, query)?
        .into_iter()
        .map(text)
        .filter(|text| !text.is_empty())
        .collect::<Vec<String>>()
        .join(" "))
}

/// Value of `attr` on the first match that has it
pub fn select_attr(root: ElementRef, query: &str, attr: &str) -> Result<Option<String>> {
    let selector = selector(query)?;
    Ok(root
        .select(&selector)
        .find_map(|element| element.value().attr(attr))
        .map(|value| value.trim().to_string()))
}

/// Matches of `query` whose text contains `needle`
pub fn select_containing<'a>(
    root: ElementRef<'a>,
    query: &str,
    needle: &str,
) -> Result<Vec<ElementRef<'a>>> {
    Ok(select(root, query)?
        .into_iter()
        .filter(|element| text(*element).contains(needle))
        .collect())
}

/// Direct element children with the given tag name
pub fn children_named<'a>(element: ElementRef<'a>, name: &str) -> Vec<ElementRef<'a>> {
    element
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|child| child.value().name() == name)
        .collect()
}

/// Value of `attr` on the first match, resolved against `base`.
/// Empty when nothing matches, since only titles and paths are mandatory.
pub fn select_abs_url(root: ElementRef, query: &str, attr: &str, base: &Url) -> Result<String> {
    match select_attr(root, query, attr)?.and_then(non_blank) {
        Some(value) => abs_url(base, &value).map(String::from),
        None => Ok(String::new()),
    }
}

/// Parse every `item` of a list page with `parse`, the page has a next one
/// when `next` matches anything.
pub fn select_manga_page<F>(document: &Html, item: &str, next: &str, parse: F) -> Result<MangaPage>
where
    F: Fn(ElementRef) -> Result<MangaInfo>,
{
    let root = document.root_element();
    let manga = select(root, item)?
        .into_iter()
        .map(parse)
        .collect::<Result<Vec<MangaInfo>>>()?;
    let has_next_page = select_first(root, next)?.is_some();

    Ok(MangaPage {
        manga,
        has_next_page,
    })
}

pub fn abs_url(base: &Url, href: &str) -> Result<Url> {
    base.join(href.trim())
        .map_err(|_| Error::InvalidUrl(href.to_string()))
}

/// Path, query and fragment of a url, without scheme and host
pub fn relative_path(url: &Url) -> String {
    let mut path = url.path().to_string();
    if let Some(query) = url.query() {
        path.push('?');
        path.push_str(query);
    }
    if let Some(fragment) = url.fragment() {
        path.push('#');
        path.push_str(fragment);
    }
    path
}

/// Resolve `href` against `base` and strip the domain
pub fn path_from_href(base: &Url, href: &str) -> Result<String> {
    abs_url(base, href).map(|url| relative_path(&url))
}

/// Strip `prefix` and `suffix` only when both are present
pub fn remove_surrounding<'a>(text: &'a str, prefix: &str, suffix: &str) -> &'a str {
    if text.len() >= prefix.len() + suffix.len() {
        if let Some(inner) = text
            .strip_prefix(prefix)
            .and_then(|text| text.strip_suffix(suffix))
        {
            return inner;
        }
    }
    text
}

pub fn non_blank(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod test {
    use scraper::Html;

    use super::*;

    const HTML: &str = r#"
        <div class="spe">
            <span>المؤلف <i> Someone </i></span>
            <span>الحالة <i>Ongoing</i></span>
            <a class="tag">Action</a>
            <a class="tag" href="/genre/drama">  Drama
            </a>
        </div>
    "#;

    #[test]
    fn test_select_text_joins_matches() {
        let document = Html::parse_document(HTML);
        let text = select_text(document.root_element(), "a.tag").unwrap();

        assert_eq!(text, "Action Drama");
    }

    #[test]
    fn test_select_attr_skips_elements_without_attr() {
        let document = Html::parse_document(HTML);
        let href = select_attr(document.root_element(), "a.tag", "href").unwrap();

        assert_eq!(href.as_deref(), Some("/genre/drama"));
        assert_eq!(
            select_attr(document.root_element(), "a.tag", "title").unwrap(),
            None
        );
    }

    #[test]
    fn test_select_containing_and_children() {
        let document = Html::parse_document(HTML);
        let spans = select_containing(document.root_element(), "div.spe > span", "المؤلف").unwrap();

        assert_eq!(spans.len(), 1);
        let authors = children_named(spans[0], "i");
        assert_eq!(authors.len(), 1);
        assert_eq!(text(authors[0]), "Someone");
    }

    #[test]
    fn test_text_separates_sibling_nodes() {
        let document = Html::parse_document(
            "<a><div>#</div><div></div><div> قبل\n  يومين </div><span>1</span><b>2</b></a>",
        );
        let a = select_first(document.root_element(), "a").unwrap().unwrap();

        assert_eq!(text(a), "# قبل يومين 1 2");
    }

    #[test]
    fn test_invalid_selector() {
        let document = Html::parse_document(HTML);
        let err = select(document.root_element(), "div[").unwrap_err();

        assert!(err.is_parse());
    }

    #[test]
    fn test_path_from_href() {
        let base = Url::parse("https://swatmanga.net").unwrap();

        assert_eq!(
            path_from_href(&base, "https://swatmanga.net/manga/one-piece/").unwrap(),
            "/manga/one-piece/"
        );
        assert_eq!(
            path_from_href(&base, "/series/x?page=2").unwrap(),
            "/series/x?page=2"
        );
    }

    #[test]
    fn test_remove_surrounding() {
        assert_eq!(remove_surrounding("(Title)", "(", ")"), "Title");
        assert_eq!(remove_surrounding("(Title", "(", ")"), "(Title");
        assert_eq!(remove_surrounding("Title", "(", ")"), "Title");
        assert_eq!(remove_surrounding("(", "(", ")"), "(");
    }
}

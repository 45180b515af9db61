use serde::{Deserialize, Serialize};

/// A type represent an entry of a browsing list
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct MangaInfo {
    /// site relative locator, used as identity within a source
    pub path: String,
    pub title: String,
    pub cover_url: String,
}

/// One page of a popular, latest or search listing
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct MangaPage {
    pub manga: Vec<MangaInfo>,
    pub has_next_page: bool,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MangaStatus {
    #[default]
    Unknown,
    Ongoing,
    Completed,
    OnHiatus,
}

/// Site specific vocabulary mapping a substring of the status text to a status.
///
/// Entries are tried in order, the first contained needle wins.
#[derive(Debug, Clone, Copy)]
pub struct StatusTable(pub &'static [(&'static str, MangaStatus)]);

impl StatusTable {
    pub fn parse(&self, status: Option<&str>) -> MangaStatus {
        let Some(status) = status else {
            return MangaStatus::Unknown;
        };

        self.0
            .iter()
            .find(|(needle, _)| status.contains(needle))
            .map(|(_, status)| *status)
            .unwrap_or_default()
    }
}

/// A type represent manga details, normalized across source
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct MangaDetail {
    pub path: String,
    pub title: String,
    pub cover_url: String,
    pub author: Option<String>,
    pub artist: Option<String>,
    pub status: MangaStatus,
    pub genre: Vec<String>,
    pub description: String,
}

impl MangaDetail {
    /// Append a supplemental paragraph after the existing description.
    ///
    /// There is no dedup guard, calling it twice with the same text appends twice.
    pub fn append_paragraph(&mut self, paragraph: &str) {
        if self.description.trim().is_empty() {
            self.description = paragraph.trim().to_string();
        } else {
            self.description.push_str("\n\n");
            self.description.push_str(paragraph);
        }
    }
}

impl From<&MangaDetail> for MangaInfo {
    fn from(detail: &MangaDetail) -> Self {
        Self {
            path: detail.path.clone(),
            title: detail.title.clone(),
            cover_url: detail.cover_url.clone(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const STATUS: StatusTable = StatusTable(&[
        ("Ongoing", MangaStatus::Ongoing),
        ("Completed", MangaStatus::Completed),
        ("Hiatus", MangaStatus::OnHiatus),
    ]);

    fn detail(description: &str) -> MangaDetail {
        MangaDetail {
            path: "/manga/one/".to_string(),
            title: "One".to_string(),
            cover_url: String::new(),
            author: None,
            artist: None,
            status: MangaStatus::Unknown,
            genre: vec![],
            description: description.to_string(),
        }
    }

    #[test]
    fn test_status_table() {
        assert_eq!(STATUS.parse(Some("Status Ongoing")), MangaStatus::Ongoing);
        assert_eq!(STATUS.parse(Some("On Hiatus")), MangaStatus::OnHiatus);
        assert_eq!(STATUS.parse(Some("Dropped")), MangaStatus::Unknown);
        assert_eq!(STATUS.parse(Some("")), MangaStatus::Unknown);
        assert_eq!(STATUS.parse(None), MangaStatus::Unknown);
    }

    #[test]
    fn test_append_paragraph_keeps_original_text() {
        let mut manga = detail("A story.");
        manga.append_paragraph("Alternative Name: Uno");
        manga.append_paragraph("Published: 2020");

        assert_eq!(
            manga.description,
            "A story.\n\nAlternative Name: Uno\n\nPublished: 2020"
        );
    }

    #[test]
    fn test_append_paragraph_to_empty_description() {
        let mut manga = detail("");
        manga.append_paragraph("Alternative Name: Uno");

        assert_eq!(manga.description, "Alternative Name: Uno");
    }
}

use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct FilterOption {
    /// value sent to the site
    pub value: String,
    /// text shown to the user
    pub label: String,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Declarative description of one query refinement axis.
///
/// `key` is the query parameter the selected option(s) serialize to.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum FilterSpec {
    SingleChoice {
        key: String,
        label: String,
        options: Vec<FilterOption>,
    },
    MultiTriState {
        key: String,
        label: String,
        options: Vec<FilterOption>,
    },
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum TriState {
    Include,
    Exclude,
    #[default]
    Ignore,
}

/// State held by the host for one [`FilterSpec`]
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub enum FilterState {
    /// index into the options of a single choice filter
    Choice(usize),
    /// one state per option of a tri-state group, in option order
    TriStates(Vec<TriState>),
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct FilterSelection {
    pub spec: FilterSpec,
    pub state: FilterState,
}

impl FilterSpec {
    pub fn key(&self) -> &str {
        match self {
            FilterSpec::SingleChoice { key, .. } | FilterSpec::MultiTriState { key, .. } => key,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            FilterSpec::SingleChoice { label, .. } | FilterSpec::MultiTriState { label, .. } => {
                label
            }
        }
    }

    pub fn options(&self) -> &[FilterOption] {
        match self {
            FilterSpec::SingleChoice { options, .. }
            | FilterSpec::MultiTriState { options, .. } => options,
        }
    }

    pub fn default_state(&self) -> FilterState {
        match self {
            FilterSpec::SingleChoice { .. } => FilterState::Choice(0),
            FilterSpec::MultiTriState { options, .. } => {
                FilterState::TriStates(vec![TriState::Ignore; options.len()])
            }
        }
    }

    pub fn select(self, state: FilterState) -> FilterSelection {
        FilterSelection { spec: self, state }
    }

    /// Serialize a state into query parameters.
    ///
    /// Exclusion is not available on these sites, so an excluded option is
    /// sent the same way as an included one. Ignored options are skipped.
    pub fn query_pairs(&self, state: &FilterState) -> Vec<(String, String)> {
        match (self, state) {
            (FilterSpec::SingleChoice { key, options, .. }, FilterState::Choice(index)) => options
                .get(*index)
                .map(|option| vec![(key.clone(), option.value.clone())])
                .unwrap_or_default(),
            (FilterSpec::MultiTriState { key, options, .. }, FilterState::TriStates(states)) => {
                options
                    .iter()
                    .zip(states.iter())
                    .filter(|(_, state)| **state != TriState::Ignore)
                    .map(|(option, _)| (key.clone(), option.value.clone()))
                    .collect()
            }
            _ => {
                warn!("state {:?} does not fit filter {}", state, self.label());
                vec![]
            }
        }
    }

    /// Rebuild a state from query parameters produced by [`FilterSpec::query_pairs`].
    pub fn state_from_query<'a, I>(&self, pairs: I) -> FilterState
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let values = pairs
            .into_iter()
            .filter(|(key, _)| *key == self.key())
            .map(|(_, value)| value)
            .collect::<Vec<&str>>();

        match self {
            FilterSpec::SingleChoice { options, .. } => FilterState::Choice(
                values
                    .first()
                    .and_then(|value| options.iter().position(|option| option.value == *value))
                    .unwrap_or(0),
            ),
            FilterSpec::MultiTriState { options, .. } => FilterState::TriStates(
                options
                    .iter()
                    .map(|option| {
                        if values.contains(&option.value.as_str()) {
                            TriState::Include
                        } else {
                            TriState::Ignore
                        }
                    })
                    .collect(),
            ),
        }
    }
}

impl FilterSelection {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.spec.query_pairs(&self.state)
    }
}

/// Append every selection to the query of `url`, in order.
pub fn append_filters(url: &mut Url, filters: &[FilterSelection]) {
    let mut query = url.query_pairs_mut();
    for filter in filters {
        for (key, value) in filter.query_pairs() {
            query.append_pair(&key, &value);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn genre() -> FilterSpec {
        FilterSpec::MultiTriState {
            key: "genre[]".to_string(),
            label: "Genre".to_string(),
            options: vec![
                FilterOption::new("action", "Action"),
                FilterOption::new("drama", "Drama"),
                FilterOption::new("horror", "Horror"),
            ],
        }
    }

    fn status() -> FilterSpec {
        FilterSpec::SingleChoice {
            key: "status".to_string(),
            label: "Status".to_string(),
            options: vec![
                FilterOption::new("", "All"),
                FilterOption::new("ongoing", "Ongoing"),
                FilterOption::new("completed", "Completed"),
            ],
        }
    }

    #[test]
    fn test_tri_state_skips_ignored() {
        let state = FilterState::TriStates(vec![
            TriState::Include,
            TriState::Ignore,
            TriState::Include,
        ]);

        assert_eq!(
            genre().query_pairs(&state),
            vec![
                ("genre[]".to_string(), "action".to_string()),
                ("genre[]".to_string(), "horror".to_string()),
            ]
        );
    }

    #[test]
    fn test_exclude_is_sent_like_include() {
        let state = FilterState::TriStates(vec![
            TriState::Ignore,
            TriState::Exclude,
            TriState::Ignore,
        ]);

        assert_eq!(
            genre().query_pairs(&state),
            vec![("genre[]".to_string(), "drama".to_string())]
        );
    }

    #[test]
    fn test_mismatched_state_is_ignored() {
        assert!(status().query_pairs(&FilterState::TriStates(vec![])).is_empty());
        assert!(genre().query_pairs(&FilterState::Choice(1)).is_empty());
    }

    #[test]
    fn test_state_from_query() {
        let pairs = [("status", "completed"), ("genre[]", "drama")];

        assert_eq!(status().state_from_query(pairs), FilterState::Choice(2));
        assert_eq!(
            genre().state_from_query(pairs),
            FilterState::TriStates(vec![TriState::Ignore, TriState::Include, TriState::Ignore])
        );
        assert_eq!(status().state_from_query(std::iter::empty()), FilterState::Choice(0));
    }

    #[test]
    fn test_append_filters() {
        let mut url = Url::parse("https://example.com/manga/?page=2").unwrap();
        let filters = vec![
            status().select(FilterState::Choice(1)),
            genre().select(FilterState::TriStates(vec![
                TriState::Include,
                TriState::Include,
                TriState::Ignore,
            ])),
        ];

        append_filters(&mut url, &filters);

        let pairs = url.query_pairs().into_owned().collect::<Vec<(String, String)>>();
        assert_eq!(
            pairs,
            vec![
                ("page".to_string(), "2".to_string()),
                ("status".to_string(), "ongoing".to_string()),
                ("genre[]".to_string(), "action".to_string()),
                ("genre[]".to_string(), "drama".to_string()),
            ]
        );
    }
}

#[macro_use]
extern crate log;

use std::sync::Arc;

use qari_lib::prelude::{Result, Source};

pub mod aresmanga;
pub mod genres;
pub mod mangaswat;
pub mod teamx;

pub use aresmanga::AresManga;
pub use mangaswat::MangaSwat;
pub use teamx::TeamX;

/// Every source in this crate, ready to be registered by a host
pub fn sources() -> Result<Vec<Arc<dyn Source>>> {
    Ok(vec![
        Arc::new(TeamX::new()?),
        Arc::new(MangaSwat::new()?),
        Arc::new(AresManga::new()?),
    ])
}


#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use qari_lib::models::{FilterSpec, FilterState, TriState};

    use super::*;

    #[test]
    fn test_sources_have_unique_ids() {
        let sources = sources().unwrap();
        let ids = sources
            .iter()
            .map(|source| source.get_source_info().id)
            .collect::<HashSet<i64>>();

        assert_eq!(ids.len(), 3);
    }

    fn every_other_included(len: usize) -> FilterState {
        FilterState::TriStates(
            (0..len)
                .map(|i| {
                    if i % 2 == 0 {
                        TriState::Include
                    } else {
                        TriState::Ignore
                    }
                })
                .collect(),
        )
    }

    #[test]
    fn test_every_filter_round_trips() {
        for source in sources().unwrap() {
            for spec in source.filter_list() {
                let states: Vec<FilterState> = match &spec {
                    FilterSpec::SingleChoice { options, .. } => {
                        (0..options.len()).map(FilterState::Choice).collect()
                    }
                    FilterSpec::MultiTriState { options, .. } => {
                        vec![spec.default_state(), every_other_included(options.len())]
                    }
                };

                for state in states {
                    let pairs = spec.query_pairs(&state);
                    let back = spec.state_from_query(
                        pairs.iter().map(|(key, value)| (key.as_str(), value.as_str())),
                    );

                    assert_eq!(
                        back,
                        state,
                        "{} / {}",
                        source.get_source_info().name,
                        spec.label()
                    );
                }
            }
        }
    }
}

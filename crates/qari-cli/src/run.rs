use anyhow::{Result, anyhow};
use qari_host::prelude::SourceManager;
use qari_lib::prelude::{Error, FilterSelection, FilterSpec};

use crate::{Command, data::SourceEntry};

/// Run one command and render its result as pretty json
pub fn run(manager: &SourceManager, command: Command) -> Result<String> {
    let output = match command {
        Command::Sources => {
            let sources = manager
                .list()?
                .into_iter()
                .map(SourceEntry::from)
                .collect::<Vec<SourceEntry>>();
            serde_json::to_string_pretty(&sources)?
        }
        Command::Filters { source } => serde_json::to_string_pretty(&manager.filter_list(source)?)?,
        Command::Popular { source, page } => {
            serde_json::to_string_pretty(&manager.get_popular_manga(source, page)?)?
        }
        Command::Latest { source, page } => {
            serde_json::to_string_pretty(&manager.get_latest_manga(source, page)?)?
        }
        Command::Search {
            source,
            page,
            query,
            filters,
        } => {
            let selections = parse_filters(&manager.filter_list(source)?, &filters)?;
            serde_json::to_string_pretty(&manager.search_manga(
                source,
                page,
                query.as_deref(),
                &selections,
            )?)?
        }
        Command::Detail { source, path } => {
            serde_json::to_string_pretty(&manager.get_manga_detail(source, &path)?)?
        }
        Command::Chapters { source, path } => {
            serde_json::to_string_pretty(&manager.get_chapters(source, &path)?)?
        }
        Command::Pages { source, path } => {
            serde_json::to_string_pretty(&manager.get_pages(source, &path)?)?
        }
    };

    Ok(output)
}

/// Turn `key=value` arguments into selections, in the order the source declares its filters
fn parse_filters(specs: &[FilterSpec], args: &[String]) -> Result<Vec<FilterSelection>> {
    let pairs = args
        .iter()
        .map(|arg| {
            arg.split_once('=')
                .ok_or(anyhow!("filter must be key=value, got {arg}"))
        })
        .collect::<Result<Vec<(&str, &str)>>>()?;

    if let Some((key, _)) = pairs
        .iter()
        .find(|(key, _)| !specs.iter().any(|spec| spec.key() == *key))
    {
        return Err(anyhow!("unknown filter {key}"));
    }

    Ok(specs
        .iter()
        .filter(|spec| pairs.iter().any(|(key, _)| *key == spec.key()))
        .map(|spec| {
            let state = spec.state_from_query(pairs.iter().copied());
            spec.clone().select(state)
        })
        .collect())
}

/// Message shown for a failed command. Unreadable pages and unreachable
/// sites get their own wording, other failures are shown as they are
pub fn describe(err: &anyhow::Error) -> String {
    match err.downcast_ref::<Error>() {
        Some(source_err) if source_err.is_parse() => {
            format!("the source's page format could not be read, the site may have changed: {err}")
        }
        Some(Error::Transport(_)) => format!("could not reach the source: {err}"),
        _ => err.to_string(),
    }
}

//! Line-oriented browse session.
//!
//! The session owns the query state; every command updates it and the next
//! render recomputes output through a [`QueryCache`]. Plain text sets the
//! search term, lines starting with `:` are commands.

use crate::catalog::{Catalog, Facet, FacetOptions, FacetValue, Temple, TempleId};
use crate::error::CommandError;
use crate::query::{QueryCache, QueryEngine, QueryOutput, QueryState, SortOrder};

pub const HELP: &str = "\
  <text>               search for text (empty line clears the search)
  :region <value>      filter by region (All clears)
  :tradition <value>   filter by tradition
  :environment <value> filter by environment
  :feature <value>     filter by feature
  :sort <order>        relevance | oldest | newest | significance
  :clear               reset all facet filters
  :reset               reset search, filters and sort
  :facets              list facet options
  :show <id>           show one temple
  :help                this help
  :quit                exit";

/// A parsed session input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Select(Facet, FacetValue),
    Sort(SortOrder),
    ClearFilters,
    Reset,
    Facets,
    Show(TempleId),
    Help,
    Quit,
}

/// Parse one input line
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let Some(rest) = line.strip_prefix(':') else {
        return Ok(Command::Search(line.to_string()));
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    let select = |facet: Facet, label: &'static str| {
        if arg.is_empty() {
            Err(CommandError::MissingArgument(label))
        } else {
            Ok(Command::Select(facet, FacetValue::from(arg)))
        }
    };

    match name.to_lowercase().as_str() {
        "region" => select(Facet::Region, "region"),
        "tradition" => select(Facet::Tradition, "tradition"),
        "environment" | "env" => select(Facet::Environment, "environment"),
        "feature" => select(Facet::Feature, "feature"),
        "sort" => {
            if arg.is_empty() {
                return Err(CommandError::MissingArgument("sort"));
            }
            Ok(Command::Sort(arg.parse()?))
        }
        "clear" => Ok(Command::ClearFilters),
        "reset" => Ok(Command::Reset),
        "facets" => Ok(Command::Facets),
        "show" => {
            if arg.is_empty() {
                return Err(CommandError::MissingArgument("show"));
            }
            arg.parse()
                .map(Command::Show)
                .map_err(|_| CommandError::InvalidId(arg.to_string()))
        }
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

/// What the caller should render after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Query state changed, render results
    Results,
    Facets,
    Temple(TempleId),
    /// Temple id not in the catalog
    NotFound(TempleId),
    Help,
    Quit,
}

/// Interactive session over one catalog
pub struct Session<'a> {
    state: QueryState,
    options: FacetOptions,
    cache: QueryCache<'a>,
}

impl<'a> Session<'a> {
    pub fn new(engine: QueryEngine<'a>, initial: QueryState, cache_capacity: usize) -> Self {
        let options = FacetOptions::from_catalog(engine.catalog());
        Self {
            state: initial,
            options,
            cache: QueryCache::new(engine, cache_capacity),
        }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn options(&self) -> &FacetOptions {
        &self.options
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.cache.engine().catalog()
    }

    pub fn cache(&self) -> &QueryCache<'a> {
        &self.cache
    }

    /// Apply a command to the query state
    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Search(term) => {
                self.state.search_term = term;
                Outcome::Results
            }
            Command::Select(facet, value) => {
                if !self.options.contains(facet, &value) {
                    tracing::warn!(
                        facet = facet.label(),
                        value = %value,
                        "selection is not a catalog value"
                    );
                }
                *self.state.selection_mut(facet) = value;
                Outcome::Results
            }
            Command::Sort(sort) => {
                self.state.sort = sort;
                Outcome::Results
            }
            Command::ClearFilters => {
                self.state.clear_filters();
                Outcome::Results
            }
            Command::Reset => {
                self.state = QueryState::default();
                Outcome::Results
            }
            Command::Facets => Outcome::Facets,
            Command::Show(id) => {
                if self.catalog().get(id).is_some() {
                    Outcome::Temple(id)
                } else {
                    Outcome::NotFound(id)
                }
            }
            Command::Help => Outcome::Help,
            Command::Quit => Outcome::Quit,
        }
    }

    /// Output for the current state, served from the cache when possible
    pub fn output(&mut self) -> &QueryOutput<'a> {
        self.cache.get_or_run(&self.state)
    }

    pub fn temple(&self, id: TempleId) -> Option<&'a Temple> {
        self.catalog().get(id)
    }
}

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use temple_atlas::browse::{self, Outcome, Session};
use temple_atlas::catalog::{Catalog, Facet, FacetOptions, FacetValue, TempleId};
use temple_atlas::output;
use temple_atlas::query::{QueryEngine, QueryOutput, QueryState, SortOrder};
use temple_atlas::utils::{get_config_path, AppConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "temple-atlas")]
#[command(about = "Browse, rank and summarize a catalog of temples")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Search term and filters (when no subcommand is given)
    #[command(flatten)]
    search: SearchArgs,

    /// Catalog JSON file (overrides the configured catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank and filter the catalog
    Search(SearchArgs),
    /// Interactive browse session reading commands from stdin
    Browse(FilterArgs),
    /// List the options of every facet
    Facets,
    /// Show a single temple
    Show {
        /// Temple id
        id: TempleId,
    },
    /// Show the config file location and effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        init: bool,
    },
}

#[derive(Args)]
struct SearchArgs {
    /// Search term
    query: Vec<String>,

    #[command(flatten)]
    filters: FilterArgs,

    /// Maximum number of results to print
    #[arg(short, long)]
    limit: Option<usize>,

    /// Print results and insights as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct FilterArgs {
    #[arg(short, long)]
    region: Option<String>,

    #[arg(short, long)]
    tradition: Option<String>,

    #[arg(short, long)]
    environment: Option<String>,

    #[arg(short, long)]
    feature: Option<String>,

    /// relevance, oldest, newest or significance
    #[arg(short, long)]
    sort: Option<SortOrder>,
}

impl FilterArgs {
    fn to_state(&self, term: String, config: &AppConfig) -> QueryState {
        let mut state = QueryState::new()
            .with_search(term)
            .with_sort(self.sort.unwrap_or(config.default_sort));

        let selections = [
            (Facet::Region, &self.region),
            (Facet::Tradition, &self.tradition),
            (Facet::Environment, &self.environment),
            (Facet::Feature, &self.feature),
        ];
        for (facet, value) in selections {
            if let Some(value) = value {
                *state.selection_mut(facet) = FacetValue::from(value.as_str());
            }
        }

        state
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "temple_atlas=warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::load()?;
    if let Some(path) = cli.catalog {
        config.catalog_path = Some(path);
    }
    let color = !cli.no_color;

    match cli.command {
        Some(Commands::Search(args)) => {
            let catalog = config.open_catalog()?;
            run_search(&catalog, &config, args, color)?;
        }
        Some(Commands::Browse(filters)) => {
            let catalog = config.open_catalog()?;
            run_browse(&catalog, &config, &filters, color)?;
        }
        Some(Commands::Facets) => {
            let catalog = config.open_catalog()?;
            output::print_facets(&FacetOptions::from_catalog(&catalog), color)?;
        }
        Some(Commands::Show { id }) => {
            let catalog = config.open_catalog()?;
            let temple = catalog
                .get(id)
                .with_context(|| format!("No temple with id {}", id))?;
            output::print_temple(temple, color)?;
        }
        Some(Commands::Config { init }) => {
            if init {
                let path = config.save()?;
                println!("Wrote {}", path.display());
            } else {
                println!("Config file: {}", get_config_path()?.display());
            }
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        None => {
            let catalog = config.open_catalog()?;
            run_search(&catalog, &config, cli.search, color)?;
        }
    }

    Ok(())
}

fn run_search(catalog: &Catalog, config: &AppConfig, args: SearchArgs, color: bool) -> Result<()> {
    let state = args.filters.to_state(args.query.join(" "), config);
    warn_unknown_selections(catalog, &state);

    let engine = QueryEngine::with_scoring_weights(catalog, config.scoring.clone());
    let result = engine.execute(&state);
    let limit = args.limit.or(config.effective_display_limit());

    if args.json {
        print_json(&result, limit)?;
    } else {
        render(&result, limit, color)?;
    }

    Ok(())
}

fn run_browse(catalog: &Catalog, config: &AppConfig, filters: &FilterArgs, color: bool) -> Result<()> {
    let state = filters.to_state(String::new(), config);
    let engine = QueryEngine::with_scoring_weights(catalog, config.scoring.clone());
    let mut session = Session::new(engine, state, config.cache_capacity);
    let limit = config.effective_display_limit();

    render(session.output(), limit, color)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let command = match browse::parse_command(&line?) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match session.apply(command) {
            Outcome::Results => render(session.output(), limit, color)?,
            Outcome::Facets => output::print_facets(session.options(), color)?,
            Outcome::Temple(id) => {
                if let Some(temple) = session.temple(id) {
                    output::print_temple(temple, color)?;
                }
            }
            Outcome::NotFound(id) => eprintln!("No temple with id {}", id),
            Outcome::Help => println!("{}", browse::HELP),
            Outcome::Quit => break,
        }
    }

    let stats = session.cache().stats();
    tracing::debug!(
        hits = stats.hits,
        misses = stats.misses,
        hit_rate = stats.hit_rate(),
        "browse session ended"
    );

    Ok(())
}

fn render(result: &QueryOutput<'_>, limit: Option<usize>, color: bool) -> Result<()> {
    output::print_results(&result.results, limit, color)?;
    output::print_insights(&result.insights, result.results.len(), color)?;
    Ok(())
}

fn print_json(result: &QueryOutput<'_>, limit: Option<usize>) -> Result<()> {
    let shown = limit.unwrap_or(result.results.len()).min(result.results.len());
    let value = serde_json::json!({
        "total": result.results.len(),
        "results": &result.results[..shown],
        "insights": &result.insights,
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// Selections that are not catalog-derived simply match nothing; say so
fn warn_unknown_selections(catalog: &Catalog, state: &QueryState) {
    let options = FacetOptions::from_catalog(catalog);
    for facet in Facet::ALL {
        let selection = state.selection(facet);
        if !options.contains(facet, selection) {
            tracing::warn!(
                facet = facet.label(),
                value = %selection,
                "selection is not a catalog value"
            );
        }
    }
}

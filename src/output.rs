//! Terminal rendering of results, insights and facet options

use crate::catalog::{Facet, FacetOptions, Temple};
use crate::query::{Insights, ScoredResult};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

const UNAVAILABLE: &str = "n/a";

fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print ranked results, at most `limit` of them
pub fn print_results(
    results: &[ScoredResult<'_>],
    limit: Option<usize>,
    color: bool,
) -> io::Result<()> {
    let mut stdout = stdout(color);

    if results.is_empty() {
        writeln!(stdout, "No temples match the current search and filters.")?;
        return Ok(());
    }

    let shown = limit.unwrap_or(results.len()).min(results.len());

    for (rank, result) in results.iter().take(shown).enumerate() {
        let temple = result.temple;

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "{:>3}. ", rank + 1)?;
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
        write!(stdout, "{}", temple.name)?;
        stdout.reset()?;
        write!(stdout, " ({}, {})", temple.city, temple.country)?;
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        writeln!(stdout, "  [{:.1}]", result.score)?;
        stdout.reset()?;

        writeln!(
            stdout,
            "     {} | {} | {} | founded {}",
            temple.tradition,
            temple.region,
            temple.environment,
            temple.founded_label()
        )?;
        if !temple.features.is_empty() {
            writeln!(stdout, "     {}", temple.features.join(", "))?;
        }
    }

    if shown < results.len() {
        writeln!(stdout, "     ... and {} more", results.len() - shown)?;
    }

    Ok(())
}

/// Print the insight panel for a result list of `total` temples
pub fn print_insights(insights: &Insights, total: usize, color: bool) -> io::Result<()> {
    let mut stdout = stdout(color);

    writeln!(stdout)?;
    stdout.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(stdout, "Insights ({} temples)", total)?;
    stdout.reset()?;

    let average = insights
        .average_founded_year
        .map(|y| y.to_string())
        .unwrap_or_else(|| UNAVAILABLE.to_string());

    writeln!(stdout, "  Countries:           {}", insights.unique_countries)?;
    writeln!(
        stdout,
        "  Dominant tradition:  {}",
        insights.most_common_tradition.as_deref().unwrap_or(UNAVAILABLE)
    )?;
    writeln!(stdout, "  Average founding:    {}", average)?;
    writeln!(
        stdout,
        "  Standout feature:    {}",
        insights.standout_feature.as_deref().unwrap_or(UNAVAILABLE)
    )?;

    Ok(())
}

/// Print the option list of every facet
pub fn print_facets(options: &FacetOptions, color: bool) -> io::Result<()> {
    let mut stdout = stdout(color);

    for facet in Facet::ALL {
        stdout.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(stdout, "{}", facet.label())?;
        stdout.reset()?;
        for value in options.options(facet) {
            writeln!(stdout, "  {}", value)?;
        }
    }

    Ok(())
}

/// Print every field of a single temple
pub fn print_temple(temple: &Temple, color: bool) -> io::Result<()> {
    let mut stdout = stdout(color);

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    writeln!(stdout, "{}", temple.name)?;
    stdout.reset()?;
    writeln!(stdout, "{}, {}", temple.city, temple.country)?;
    writeln!(stdout)?;
    writeln!(stdout, "{}", temple.description)?;
    writeln!(stdout)?;
    writeln!(stdout, "Tradition:      {}", temple.tradition)?;
    writeln!(stdout, "Region:         {}", temple.region)?;
    writeln!(stdout, "Environment:    {}", temple.environment)?;
    writeln!(stdout, "Founded:        {}", temple.founded_label())?;
    writeln!(stdout, "Significance:   {}", temple.significance_score)?;
    writeln!(stdout, "Visiting hours: {}", temple.visiting_hours)?;
    writeln!(stdout, "Best visit:     {}", temple.best_visit)?;
    if let Some(website) = &temple.website {
        writeln!(stdout, "Website:        {}", website)?;
    }

    if !temple.highlights.is_empty() {
        writeln!(stdout)?;
        writeln!(stdout, "Highlights:")?;
        for highlight in &temple.highlights {
            writeln!(stdout, "  - {}", highlight)?;
        }
    }

    if !temple.features.is_empty() {
        writeln!(stdout, "Features: {}", temple.features.join(", "))?;
    }

    Ok(())
}

use std::path::PathBuf;

use aroundyou_core::content::{
    ContentError, EMBEDDED_DOCUMENT, FEATURE_COUNT, LinkTarget, PageLink, SiteContent,
};
use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, eyre};

/// Maintenance tools for the Around You landing page content
#[derive(Parser, Debug)]
#[command(version, about)]
struct Arguments {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Check(CheckArgs),
    Links(LinksArgs),
}

#[derive(Args, Debug)]
#[command(about)]
/// Validate the site content, exiting with an error if anything is wrong
struct CheckArgs {
    /// Content document to check instead of the one built into the page
    #[arg(long)]
    file: Option<PathBuf>,
}

#[derive(Args, Debug)]
#[command(about)]
/// List every link on the page and whether it resolves
struct LinksArgs {
    /// Content document to read instead of the one built into the page
    #[arg(long)]
    file: Option<PathBuf>,

    /// Only print links that point at a section the page does not declare
    #[arg(long, default_value_t = false)]
    unresolved: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Arguments::parse();

    match args.command {
        Command::Check(args) => check(args),
        Command::Links(args) => links(args),
    }
}

/// Reads content without validating it, so `links` can still report on broken documents.
fn read(file: &Option<PathBuf>) -> Result<SiteContent> {
    let document = match file {
        Some(path) => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Could not read {}", path.display()))?,
        None => EMBEDDED_DOCUMENT.to_string(),
    };
    SiteContent::from_json(&document).map_err(|e| report(&[e]))
}

fn report(errors: &[ContentError]) -> color_eyre::Report {
    let mut message = format!("{} content error(s):", errors.len());
    for error in errors {
        message.push_str(&format!("\n  {}", error));
    }
    eyre!(message)
}

fn check(args: CheckArgs) -> Result<()> {
    let content = read(&args.file)?;
    content.validate().map_err(|errors| report(&errors))?;
    println!(
        "ok: {} nav links, {}/{} features, {} contact channels, {} team members, {} links",
        content.nav.len(),
        content.features.len(),
        FEATURE_COUNT,
        content.contact.len(),
        content.team.len(),
        content.links().len()
    );
    Ok(())
}

fn links(args: LinksArgs) -> Result<()> {
    let content = read(&args.file)?;
    let links: Vec<PageLink> = content
        .links()
        .into_iter()
        .filter(|link| !args.unresolved || !link.target().resolves())
        .collect();

    for row in table(&links) {
        println!("{}", row);
    }

    if links.iter().any(|l| !l.target().resolves()) {
        return Err(eyre!("page has links to undeclared sections"));
    }
    Ok(())
}

/// One aligned row per link; widths count characters so accented labels line up.
fn table(links: &[PageLink]) -> Vec<String> {
    let location_width = links.iter().map(|l| l.location.chars().count()).max().unwrap_or(0);
    let label_width = links.iter().map(|l| l.label.chars().count()).max().unwrap_or(0);

    links
        .iter()
        .map(|link| {
            let target = link.target();
            let status = match target {
                LinkTarget::UnknownSection(_) => "UNRESOLVED",
                LinkTarget::Placeholder => "placeholder",
                _ => "ok",
            };
            format!(
                "{:<location_width$}  {:<label_width$}  {:<11}  {:<30}  {}",
                link.location,
                link.label,
                target.kind(),
                link.href,
                status,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(location: &str, label: &str, href: &str) -> PageLink {
        PageLink {
            location: location.to_string(),
            label: label.to_string(),
            href: href.to_string(),
        }
    }

    #[test]
    fn test_table_aligns_accented_labels() {
        let rows = table(&[
            link("nav", "About", "#about"),
            link("footer/Suporte", "Campos Elísios", "#contact"),
        ]);

        let kind_column: Vec<_> = rows
            .iter()
            .map(|row| row.find("anchor").map(|i| row[..i].chars().count()))
            .collect();
        assert_eq!(kind_column, vec![Some(32), Some(32)]);
        assert!(rows[0].starts_with("nav             About           anchor"));
        assert!(rows[1].starts_with("footer/Suporte  Campos Elísios  anchor"));
    }
}

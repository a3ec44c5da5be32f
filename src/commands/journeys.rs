//! List learning journeys

use anyhow::Result;

use crate::content::Collection;
use crate::Folio;

/// Print each journey with the number of posts in it
pub fn run(folio: &Folio) -> Result<()> {
    let store = folio.store();

    let mut journeys = Vec::new();
    for journey in store.list_journeys()? {
        let count = store.list_slugs(&Collection::journey(journey.as_str()))?.len();
        journeys.push((journey, count));
    }

    print!("{}", format_journeys(&journeys));
    Ok(())
}

/// Journey names with their post counts, one per line
pub fn format_journeys(journeys: &[(String, usize)]) -> String {
    let mut out = format!("Journeys ({}):\n", journeys.len());
    for (journey, count) in journeys {
        out.push_str(&format!("  {} ({})\n", journey, count));
    }
    out
}

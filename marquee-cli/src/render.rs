//! Plain-text rendering for terminal output.

use std::fmt::Write;

use marquee_core::{ContentClient, Dashboard};
use marquee_model::{CatalogItem, ImageSize, ItemKind, ResultsPage, TitleDetails};

/// Hero banner then every non-empty row. Image URLs use the client's
/// configured CDN base.
pub fn dashboard(dashboard: &Dashboard, client: &ContentClient) -> String {
    let mut out = String::new();

    if let Some(hero) = dashboard.hero() {
        let _ = writeln!(out, "★ {}", item_line(hero));
        if let Some(description) = &hero.description {
            let _ = writeln!(out, "  {description}");
        }
        if let Some(banner) =
            client.image_url(hero.banner_path(), ImageSize::backdrop())
        {
            let _ = writeln!(out, "  {banner}");
        }
        out.push('\n');
    }

    for row in dashboard.visible_rows() {
        let _ = writeln!(out, "{} ({})", row.title, row.items.len());
        for item in &row.items {
            let _ = writeln!(out, "  {}", item_line(item));
        }
        out.push('\n');
    }

    out
}

pub fn results(page: &ResultsPage) -> String {
    let mut out = String::new();
    for item in &page.results {
        let _ = writeln!(out, "{}", item_line(item));
    }
    if page.total_pages > 1 {
        let _ = writeln!(
            out,
            "-- page {} of {} ({} results)",
            page.page, page.total_pages, page.total_results
        );
    }
    out
}

pub fn details(details: &TitleDetails) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", item_line(&details.item));

    if let Some(tagline) = &details.tagline {
        let _ = writeln!(out, "  \"{tagline}\"");
    }
    if !details.genres.is_empty() {
        let names: Vec<_> =
            details.genres.iter().map(|g| g.name.as_str()).collect();
        let _ = writeln!(out, "  Genres: {}", names.join(", "));
    }
    if let Some(minutes) = details.runtime {
        let _ = writeln!(out, "  Runtime: {minutes} min");
    }
    if let Some(score) = details.vote_average {
        let _ = writeln!(out, "  Rating: {score:.1}");
    }
    if let Some(description) = &details.item.description {
        let _ = writeln!(out, "\n{description}");
    }
    if let Some(trailer) = details.trailer() {
        let _ = writeln!(out, "\nTrailer: {} ({})", trailer.name, trailer.site);
    }

    let cast: Vec<_> = details
        .cast
        .iter()
        .take(5)
        .map(|member| match &member.character {
            Some(character) => format!("{} as {character}", member.name),
            None => member.name.clone(),
        })
        .collect();
    if !cast.is_empty() {
        let _ = writeln!(out, "\nCast: {}", cast.join(", "));
    }

    for (label, page) in [
        ("Similar", &details.similar),
        ("Recommended", &details.recommendations),
    ] {
        if page.is_empty() {
            continue;
        }
        let _ = writeln!(out, "\n{label}:");
        for item in page.results.iter().take(5) {
            let _ = writeln!(out, "  {}", item_line(item));
        }
    }

    out
}

fn item_line(item: &CatalogItem) -> String {
    let mut line = format!("[{}] {}", item.id, item.title);
    if let Some(year) = item.year {
        let _ = write!(line, " ({year})");
    }
    match item.media_kind {
        Some(ItemKind::Tv) => line.push_str(" · tv"),
        Some(ItemKind::Person) => line.push_str(" · person"),
        Some(ItemKind::Movie) | None => {}
    }
    line
}

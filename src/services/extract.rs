use crate::error::*;
use crate::types::{RecipePage, Sel, SiteProfile};
use scraper::{Html, Selector};
use url::Url;

fn parse_sel(sel: &Sel) -> Result<Selector> {
    Selector::parse(&sel.0).map_err(|_| LarderError::Selector(sel.0.clone()))
}

/// Pull the title and raw ingredient lines from one recipe page.
///
/// The ingredient list lives two levels inside the container: the container's
/// first inner `div` wraps one `div` per ingredient line. `Ok(None)` is the
/// "no match" signal when any of the expected structure is absent; the caller
/// skips the page.
pub fn extract_recipe(html: &str, profile: &SiteProfile) -> Result<Option<RecipePage>> {
    let doc = Html::parse_document(html);
    let container_sel = parse_sel(&profile.ingredients)?;
    let div_sel = Selector::parse("div").map_err(|_| LarderError::Selector("div".into()))?;

    let Some(container) = doc.select(&container_sel).next() else {
        return Ok(None);
    };
    let Some(wrapper) = container.select(&div_sel).next() else {
        return Ok(None);
    };
    let ingredients: Vec<String> = wrapper
        .select(&div_sel)
        .map(|el| el.text().collect::<String>())
        .collect();

    let title_sel = parse_sel(&profile.title)?;
    let Some(heading) = doc.select(&title_sel).next() else {
        return Ok(None);
    };
    // Commas stripped so the title is safe as the row's first CSV field.
    let title = heading
        .text()
        .collect::<String>()
        .replace(',', "")
        .trim()
        .to_string();

    Ok(Some(RecipePage { title, ingredients }))
}

/// Collect recipe links from a slideshow listing page, in document order.
/// Relative hrefs are resolved against the listing URL; malformed ones are
/// dropped.
pub fn extract_slide_links(html: &str, base: &Url, profile: &SiteProfile) -> Result<Vec<String>> {
    let doc = Html::parse_document(html);
    let anchor_sel = parse_sel(&profile.slide_links)?;

    let mut links = Vec::new();
    for anchor in doc.select(&anchor_sel) {
        if let Some(href) = anchor.value().attr("href") {
            if let Ok(abs) = Url::options().base_url(Some(base)).parse(href) {
                links.push(abs.to_string());
            }
        }
    }
    Ok(links)
}

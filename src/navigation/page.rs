use crate::query::{Field, SearchDisplay};
use anyhow::{anyhow, Result};
use scraper::{Html, Selector};
use tracing::debug;

/// Read the displayed search parameters back out of a rendered results page
///
/// Each value sits in an element tagged `data-field="<key>"`; `check_in` and
/// `check_out` use the `from` / `to` keys.
pub fn read_results_page(html: &str) -> Result<SearchDisplay> {
    let document = Html::parse_document(html);

    let read = |field: Field| -> Result<String> {
        let css = format!(r#"[data-field="{}"]"#, field.key());
        let selector =
            Selector::parse(&css).map_err(|e| anyhow!("Invalid selector {}: {:?}", css, e))?;
        let element = document
            .select(&selector)
            .next()
            .ok_or_else(|| anyhow!("Results page has no {} value", field))?;
        let value = element.text().collect::<String>().trim().to_string();
        debug!("Read {} = {:?}", field, value);
        Ok(value)
    };

    Ok(SearchDisplay {
        location: read(Field::Location)?,
        check_in: read(Field::From)?,
        check_out: read(Field::To)?,
        adults: read(Field::Adults)?,
        children: read(Field::Children)?,
        rooms: read(Field::Rooms)?,
    })
}

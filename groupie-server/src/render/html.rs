use serde::de::DeserializeOwned;

use super::{RenderError, Renderer, Template};
use crate::artist_view::ArtistView;
use crate::upstream::Artist;

const NO_DATA: &str = "<p class=\"empty\">No data</p>";

/// Built-in renderer producing plain HTML5 documents.
///
/// Stylesheets are expected under `/static/style.css`, which the server
/// serves when a frontend directory is configured.
#[derive(Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for HtmlRenderer {
    fn render(
        &self,
        template: Template,
        record: &serde_json::Value,
    ) -> Result<String, RenderError> {
        match template {
            Template::Index => {
                let artists: Vec<Artist> = typed_record(template, record)?;
                Ok(render_index(&artists))
            }
            Template::Artist => {
                let view: ArtistView = typed_record(template, record)?;
                Ok(render_artist(&view))
            }
        }
    }
}

fn typed_record<T: DeserializeOwned>(
    template: Template,
    record: &serde_json::Value,
) -> Result<T, RenderError> {
    T::deserialize(record).map_err(|source| RenderError::RecordShape { template, source })
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// `"north_carolina-usa"` -> `"north carolina, usa"`
fn display_location(location: &str) -> String {
    location.replace('_', " ").replace('-', ", ")
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<link rel=\"stylesheet\" href=\"/static/style.css\">\n</head>\n\
         <body>\n{}</body>\n</html>\n",
        escape_html(title),
        body
    )
}

fn list(items: &[String]) -> String {
    if items.is_empty() {
        return NO_DATA.to_string();
    }
    let mut html = String::from("<ul>\n");
    for item in items {
        html.push_str(&format!("<li>{}</li>\n", item));
    }
    html.push_str("</ul>\n");
    html
}

fn render_index(artists: &[Artist]) -> String {
    let mut body = String::from("<h1>Artists</h1>\n<div class=\"artists\">\n");
    for artist in artists {
        body.push_str(&format!(
            "<a class=\"artist-card\" href=\"/artist?id={}\">\n\
             <img src=\"{}\" alt=\"{}\">\n<h2>{}</h2>\n</a>\n",
            artist.id,
            escape_html(&artist.image),
            escape_html(&artist.name),
            escape_html(&artist.name),
        ));
    }
    body.push_str("</div>\n");
    page("Artists", &body)
}

fn render_artist(view: &ArtistView) -> String {
    let artist = &view.artist;
    let mut body = String::from("<a href=\"/\">Back to artists</a>\n");

    body.push_str(&format!(
        "<h1>{}</h1>\n<img src=\"{}\" alt=\"{}\">\n",
        escape_html(&artist.name),
        escape_html(&artist.image),
        escape_html(&artist.name),
    ));
    body.push_str(&format!(
        "<p>Created: {}</p>\n<p>First album: {}</p>\n",
        artist.creation_date,
        escape_html(&artist.first_album),
    ));

    body.push_str("<h2>Members</h2>\n");
    let members: Vec<String> = artist.members.iter().map(|m| escape_html(m)).collect();
    body.push_str(&list(&members));

    body.push_str("<h2>Locations</h2>\n");
    let locations: Vec<String> = view
        .location
        .locations
        .iter()
        .map(|l| escape_html(&display_location(l)))
        .collect();
    body.push_str(&list(&locations));

    body.push_str("<h2>Dates</h2>\n");
    let dates: Vec<String> = view.date.dates.iter().map(|d| escape_html(d)).collect();
    body.push_str(&list(&dates));

    body.push_str("<h2>Concerts</h2>\n");
    if view.relation.dates_locations.is_empty() {
        body.push_str(NO_DATA);
        body.push('\n');
    } else {
        body.push_str("<table>\n<tr><th>Location</th><th>Dates</th></tr>\n");
        for (location, dates) in &view.relation.dates_locations {
            let dates: Vec<String> = dates.iter().map(|d| escape_html(d)).collect();
            body.push_str(&format!(
                "<tr><td>{}</td><td>{}</td></tr>\n",
                escape_html(&display_location(location)),
                dates.join(", "),
            ));
        }
        body.push_str("</table>\n");
    }

    page(&artist.name, &body)
}

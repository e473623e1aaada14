//! HTML pages of navigator links, for opening trips from a phone's browser.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::{invalid_input_error, Error};
use crate::scheme::NavigatorUri;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub uri: String,
    pub title: String,
}

impl Link {
    pub fn new(uri: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            title: title.into(),
        }
    }
}

impl From<(NavigatorUri, String)> for Link {
    fn from((uri, title): (NavigatorUri, String)) -> Self {
        Link::new(uri, title)
    }
}

#[tracing::instrument(skip(links), fields(links = links.len()))]
pub fn render_link_page(title: &str, links: &[Link]) -> String {
    let title = escape(title);
    let mut page = format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body>\n<h1>{title}</h1>\n"
    );

    for link in links {
        page.push_str(&format!(
            "<p><b>{}</b><br>\n<a href=\"{}\">Open in Navigator</a></p>\n",
            escape(&link.title),
            escape(&link.uri)
        ));
    }

    page.push_str("</body>\n</html>\n");
    page
}

/// Reads `uri,title` rows after a header line. Extra columns are ignored.
#[tracing::instrument(skip(reader))]
pub fn read_links<R: Read>(reader: R) -> Result<Vec<Link>, Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut links = vec![];
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;

        let (uri, title) = match (record.get(0), record.get(1)) {
            (Some(uri), Some(title)) if !uri.is_empty() => (uri, title),
            // the header is row 1
            _ => {
                return Err(invalid_input_error(format!(
                    "link row {} needs a uri and a title",
                    index + 2
                )))
            }
        };

        links.push(Link::new(uri, title));
    }

    tracing::debug!(links = links.len(), "read link list");

    Ok(links)
}

fn escape(text: &str) -> String {
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

#[test]
fn render_link_page_test() {
    let links = vec![
        Link::new(
            "arcgis-navigator://?stop=43.681959%2C-70.092359&stopname=Jewell+Island",
            "Jewell Island",
        ),
        Link::new("arcgis-navigator://?stop=Portland", "<Portland>"),
    ];

    let page = render_link_page("Fryes Leap", &links);

    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<title>Fryes Leap</title>"));
    assert!(page.contains("<h1>Fryes Leap</h1>"));
    assert!(page.contains(
        "<a href=\"arcgis-navigator://?stop=43.681959%2C-70.092359&amp;stopname=Jewell+Island\">"
    ));
    assert!(page.contains("<b>&lt;Portland&gt;</b>"));
    assert_eq!(page.matches("<a href=").count(), 2);
    assert!(page.ends_with("</html>\n"));
}

#[test]
fn render_built_link_test() {
    use crate::scheme::SchemeRequestBuilder;

    let uri = SchemeRequestBuilder::new().add_stop("Portland").build();
    let link: Link = (uri, "Portland".to_string()).into();

    let page = render_link_page("Trip", &[link]);
    assert!(page.contains("href=\"arcgis-navigator://?stop=Portland\""));
}

#[test]
fn read_links_test() {
    let csv = "\
uri,title,notes
arcgis-navigator://?stop=Portland,Portland,first
 arcgis-navigator://?stop=Bangor , Bangor
";

    let links = read_links(csv.as_bytes()).unwrap();

    assert_eq!(
        links,
        vec![
            Link::new("arcgis-navigator://?stop=Portland", "Portland"),
            Link::new("arcgis-navigator://?stop=Bangor", "Bangor"),
        ]
    );
}

#[test]
fn read_links_missing_title_test() {
    let csv = "uri,title\narcgis-navigator://?stop=Portland\n";

    let err = read_links(csv.as_bytes()).unwrap_err();

    assert_eq!(err.code, 101);
    assert!(err.message.contains("row 2"));
}

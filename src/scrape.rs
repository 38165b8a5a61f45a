//! Article scraping: URL validation, printable-page fetch and coordinate
//! span extraction.

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, warn};

use crate::client::WikiClient;
use crate::coordinates;
use crate::error::{GeospotError, Result};
use crate::language::{CoordinateFormat, Language};

/// Query string requesting the printable article rendering
const PRINTABLE_QUERY: &str = "printable=yes";

/// A validated Wikipedia article URL together with its language edition
#[derive(Debug, Clone)]
pub struct ScrapeRequest {
    url: String,
    language: Language,
}

/// Raw extraction result of one article page
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapedArticle {
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: Option<f64>,
}

impl ScrapeRequest {
    /// Validate an article URL. Accepts http or https, one of the
    /// `{de,en,fr}.wikipedia.org` hosts and a non-empty `/wiki/<article>`
    /// path. The language edition is derived from the host.
    pub fn new<S: Into<String>>(url: S) -> Result<Self> {
        let url = url.into();

        let parsed = reqwest::Url::parse(&url)
            .map_err(|e| GeospotError::validation(format!("'{url}' is not a valid URL: {e}")))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(GeospotError::validation(format!(
                "'{url}' is not a Wikipedia article URL, expected an http or https scheme"
            )));
        }

        let host = parsed.host_str().unwrap_or_default();
        let language = Language::from_wikipedia_host(host).ok_or_else(|| {
            GeospotError::validation(format!(
                "'{url}' is not a supported Wikipedia host, expected de, en or fr .wikipedia.org"
            ))
        })?;

        let article = parsed.path().strip_prefix("/wiki/").unwrap_or_default();
        if article.is_empty() {
            return Err(GeospotError::validation(format!(
                "'{url}' does not point to a Wikipedia article"
            )));
        }

        Ok(Self { url, language })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    fn printable_url(&self) -> String {
        format!("{}?{PRINTABLE_QUERY}", self.url)
    }

    /// Fetch the printable rendering and extract the coordinate markup.
    /// Every call fetches anew; nothing is cached on the request.
    pub async fn execute(&self, client: &WikiClient) -> Result<ScrapedArticle> {
        info!("Scraping article {}", self.url);

        let html = client.get_text(&self.printable_url()).await?;
        parse_article(&html, self.language, &self.url)
    }
}

/// Extract title and coordinate spans from a printable article page.
///
/// One traversal over all `span` elements. The first span carrying each
/// marker wins; later spans with the same marker are ignored. Latitude and
/// longitude text is normalized according to the edition's coordinate
/// format, elevation is always a plain float.
pub fn parse_article(html: &str, language: Language, url: &str) -> Result<ScrapedArticle> {
    let document = Html::parse_document(html);
    let spans =
        Selector::parse("span").map_err(|e| GeospotError::parse(format!("Invalid selector: {e}")))?;

    let mut title: Option<String> = None;
    let mut latitude_text: Option<String> = None;
    let mut longitude_text: Option<String> = None;
    let mut elevation_text: Option<String> = None;

    for span in document.select(&spans) {
        if title.is_none() && span.value().attr("dir") == Some("auto") {
            title = Some(span_text(&span));
        }
        if latitude_text.is_none() && has_class(&span, "latitude") {
            latitude_text = Some(span_text(&span));
        }
        if longitude_text.is_none() && has_class(&span, "longitude") {
            longitude_text = Some(span_text(&span));
        }
        if elevation_text.is_none() && has_class(&span, "elevation") {
            elevation_text = Some(span_text(&span));
        }
    }

    let (Some(latitude_text), Some(longitude_text)) = (latitude_text, longitude_text) else {
        warn!("No coordinate markup found in {url}");
        return Err(GeospotError::no_geo_data(
            title.unwrap_or_else(|| url.to_string()),
        ));
    };

    let (latitude, longitude) = match language.coordinate_format() {
        CoordinateFormat::Dms => (
            coordinates::dms_to_decimal(&latitude_text)?,
            coordinates::dms_to_decimal(&longitude_text)?,
        ),
        CoordinateFormat::Decimal => (
            coordinates::parse_decimal_degrees(&latitude_text)?,
            coordinates::parse_decimal_degrees(&longitude_text)?,
        ),
    };

    let elevation = match elevation_text {
        Some(text) => {
            let trimmed = text.trim().to_string();
            Some(trimmed.parse::<f64>().map_err(|_| {
                GeospotError::parse(format!("'{trimmed}' is not a valid elevation value"))
            })?)
        }
        None => None,
    };

    debug!("Extracted ({latitude}, {longitude}), elevation {elevation:?} from {url}");

    Ok(ScrapedArticle {
        title: title.unwrap_or_else(|| url.to_string()),
        latitude,
        longitude,
        elevation,
    })
}

fn span_text(span: &ElementRef<'_>) -> String {
    span.text().collect::<String>().trim().to_string()
}

fn has_class(span: &ElementRef<'_>, class: &str) -> bool {
    span.value().classes().any(|c| c == class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TOLERANCE: f64 = 1e-5;

    #[rstest]
    #[case("https://de.wikipedia.org/wiki/Berlin", Language::De)]
    #[case("https://en.wikipedia.org/wiki/New_York_City", Language::En)]
    #[case("https://fr.wikipedia.org/wiki/Paris", Language::Fr)]
    #[case("http://de.wikipedia.org/wiki/Berlin", Language::De)]
    fn test_accepts_article_urls(#[case] url: &str, #[case] expected: Language) {
        let request = ScrapeRequest::new(url).unwrap();
        assert_eq!(request.language(), expected);
        assert_eq!(request.url(), url);
    }

    #[rstest]
    #[case("https://it.wikipedia.org/wiki/Roma")]
    #[case("https://www.google.de/wiki/Berlin")]
    #[case("https://de.wikipedia.org/wiki/")]
    #[case("https://de.wikipedia.org/w/index.php?title=Berlin")]
    #[case("ftp://de.wikipedia.org/wiki/Berlin")]
    #[case("not a url at all")]
    fn test_rejects_invalid_urls(#[case] url: &str) {
        let error = ScrapeRequest::new(url).unwrap_err();
        assert!(matches!(error, GeospotError::Validation { .. }));
    }

    #[test]
    fn test_printable_url() {
        let request = ScrapeRequest::new("https://de.wikipedia.org/wiki/Berlin").unwrap();
        assert_eq!(
            request.printable_url(),
            "https://de.wikipedia.org/wiki/Berlin?printable=yes"
        );
    }

    #[test]
    fn test_parse_english_article_with_dms_coordinates() {
        let html = r#"<html><body>
            <span dir="auto">New York City</span>
            <span class="latitude">40° 42′ 46″ N</span>
            <span class="longitude">74° 0′ 21″ W</span>
            <span class="elevation">10</span>
        </body></html>"#;

        let article =
            parse_article(html, Language::En, "https://en.wikipedia.org/wiki/New_York_City")
                .unwrap();

        assert_eq!(article.title, "New York City");
        assert!((article.latitude - 40.712_777).abs() < TOLERANCE);
        assert!((article.longitude + 74.005_833).abs() < TOLERANCE);
        assert_eq!(article.elevation, Some(10.0));
    }

    #[test]
    fn test_parse_german_article_with_decimal_coordinates() {
        let html = r#"<html><body>
            <span dir="auto">Berlin</span>
            <span class="latitude">52.52</span>
            <span class="longitude">13.405</span>
        </body></html>"#;

        let article =
            parse_article(html, Language::De, "https://de.wikipedia.org/wiki/Berlin").unwrap();

        assert_eq!(article.title, "Berlin");
        assert!((article.latitude - 52.52).abs() < TOLERANCE);
        assert!((article.longitude - 13.405).abs() < TOLERANCE);
        assert_eq!(article.elevation, None);
    }

    #[test]
    fn test_first_span_wins_on_duplicates() {
        let html = r#"<html><body>
            <span dir="auto">First Title</span>
            <span dir="auto">Second Title</span>
            <span class="latitude">1.0</span>
            <span class="latitude">99.0</span>
            <span class="longitude">2.0</span>
            <span class="longitude">99.0</span>
            <span class="elevation">3</span>
            <span class="elevation">99</span>
        </body></html>"#;

        let article =
            parse_article(html, Language::De, "https://de.wikipedia.org/wiki/Test").unwrap();

        assert_eq!(article.title, "First Title");
        assert!((article.latitude - 1.0).abs() < TOLERANCE);
        assert!((article.longitude - 2.0).abs() < TOLERANCE);
        assert_eq!(article.elevation, Some(3.0));
    }

    #[test]
    fn test_missing_coordinates_fail_with_no_geo_data() {
        let html = r#"<html><body>
            <span dir="auto">Python (programming language)</span>
            <p>An article without coordinate markup.</p>
        </body></html>"#;

        let error = parse_article(
            html,
            Language::En,
            "https://en.wikipedia.org/wiki/Python_(programming_language)",
        )
        .unwrap_err();

        assert!(matches!(
            error,
            GeospotError::NoGeoData { ref title } if title == "Python (programming language)"
        ));
    }

    #[test]
    fn test_no_geo_data_falls_back_to_url_without_title() {
        let html = "<html><body><p>nothing here</p></body></html>";
        let url = "https://de.wikipedia.org/wiki/Leer";

        let error = parse_article(html, Language::De, url).unwrap_err();
        assert!(matches!(error, GeospotError::NoGeoData { ref title } if title == url));
    }

    #[test]
    fn test_missing_longitude_fails_with_no_geo_data() {
        let html = r#"<html><body>
            <span dir="auto">Halb</span>
            <span class="latitude">52.52</span>
        </body></html>"#;

        let error =
            parse_article(html, Language::De, "https://de.wikipedia.org/wiki/Halb").unwrap_err();
        assert!(matches!(error, GeospotError::NoGeoData { .. }));
    }

    #[test]
    fn test_span_text_is_trimmed() {
        let html = r#"<html><body>
            <span dir="auto">  Bern  </span>
            <span class="latitude"> 46.948 </span>
            <span class="longitude"> 7.4474 </span>
        </body></html>"#;

        let article =
            parse_article(html, Language::De, "https://de.wikipedia.org/wiki/Bern").unwrap();
        assert_eq!(article.title, "Bern");
        assert!((article.latitude - 46.948).abs() < TOLERANCE);
    }

    #[test]
    fn test_unparseable_coordinate_text_fails() {
        let html = r#"<html><body>
            <span class="latitude">fifty two</span>
            <span class="longitude">13.405</span>
        </body></html>"#;

        let error =
            parse_article(html, Language::De, "https://de.wikipedia.org/wiki/Kaputt").unwrap_err();
        assert!(matches!(error, GeospotError::Parse { .. }));
    }

    #[test]
    fn test_multiple_classes_on_one_span() {
        let html = r#"<html><body>
            <span class="geo latitude">48.8566</span>
            <span class="geo longitude">2.3522</span>
        </body></html>"#;

        let article =
            parse_article(html, Language::Fr, "https://fr.wikipedia.org/wiki/Paris").unwrap();
        assert!((article.latitude - 48.8566).abs() < TOLERANCE);
        assert!((article.longitude - 2.3522).abs() < TOLERANCE);
    }
}

//! Google Static Maps output: marker, path and region URL assembly plus
//! image download.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

use crate::client::WikiClient;
use crate::error::{GeospotError, Result};
use crate::spot::Spot;

/// Static Maps endpoint
const BASE_URL: &str = "https://maps.googleapis.com/maps/api/staticmap";

/// Marker labels, reused in order once exhausted
const MARKER_LABELS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Fill color of the region polygon
const REGION_FILL: &str = "gray";

/// Google map rendering style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapType {
    #[default]
    Roadmap,
    Satellite,
    Terrain,
    Hybrid,
}

impl MapType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            MapType::Roadmap => "roadmap",
            MapType::Satellite => "satellite",
            MapType::Terrain => "terrain",
            MapType::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for MapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MapType {
    type Err = GeospotError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "roadmap" => Ok(MapType::Roadmap),
            "satellite" => Ok(MapType::Satellite),
            "terrain" => Ok(MapType::Terrain),
            "hybrid" => Ok(MapType::Hybrid),
            other => Err(GeospotError::validation(format!(
                "unknown map type '{other}', expected roadmap, satellite, terrain or hybrid"
            ))),
        }
    }
}

/// Map dimensions in pixels, written as `WIDTHxHEIGHT`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapSize {
    pub width: u32,
    pub height: u32,
}

impl Default for MapSize {
    fn default() -> Self {
        Self {
            width: 640,
            height: 400,
        }
    }
}

impl fmt::Display for MapSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for MapSize {
    type Err = GeospotError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || {
            GeospotError::validation(format!(
                "map size '{s}' is not of the form WIDTHxHEIGHT, e.g. 640x400"
            ))
        };

        let (width, height) = s.split_once('x').ok_or_else(invalid)?;
        Ok(Self {
            width: width.parse().map_err(|_| invalid())?,
            height: height.parse().map_err(|_| invalid())?,
        })
    }
}

/// Rendering options for one static map
#[derive(Debug, Clone, Default)]
pub struct MapOptions {
    pub map_type: MapType,
    pub size: MapSize,
    /// Connect the spots with a path, in input order
    pub path: bool,
    /// Close the spots into a filled ring; suppresses markers
    pub region: bool,
}

/// A fully assembled static-map request
#[derive(Debug, Clone)]
pub struct StaticMap {
    url: String,
}

impl StaticMap {
    /// Assemble the request URL for the given spots.
    ///
    /// Markers are labeled A, B, C and so on in spot order, cycling after Z.
    /// Region mode closes the ring back to the first spot, fills it gray and
    /// omits the markers.
    #[must_use]
    pub fn from_spots(spots: &[Spot], options: &MapOptions) -> Self {
        let mut params = vec![
            format!("size={}", options.size),
            format!("maptype={}", options.map_type),
        ];

        if !options.region {
            for (index, spot) in spots.iter().enumerate() {
                params.push(format!(
                    "markers=label:{}|{},{}",
                    marker_label(index),
                    spot.latitude(),
                    spot.longitude()
                ));
            }
        }

        if options.path || options.region {
            let mut points: Vec<String> = spots
                .iter()
                .map(|spot| format!("{},{}", spot.latitude(), spot.longitude()))
                .collect();

            if options.region {
                if let Some(first) = points.first().cloned() {
                    points.push(first);
                }
            }

            let mut path_param = String::from("path=");
            if options.region {
                path_param.push_str(&format!("fillcolor:{REGION_FILL}|"));
            }
            path_param.push_str(&points.join("|"));
            params.push(path_param);
        }

        Self {
            url: format!("{BASE_URL}?{}", params.join("&")),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Download the rendered map image to `path`
    pub async fn save(&self, client: &WikiClient, path: &Path) -> Result<()> {
        info!("Downloading static map to {}", path.display());

        let bytes = client.get_bytes(&self.url).await?;
        fs::write(path, bytes)?;
        Ok(())
    }
}

fn marker_label(index: usize) -> char {
    let labels = MARKER_LABELS.as_bytes();
    labels[index % labels.len()] as char
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn berlin() -> Spot {
        Spot::new(
            "Berlin",
            "https://de.wikipedia.org/wiki/Berlin",
            52.52,
            13.405,
            Some(34.0),
        )
    }

    fn paris() -> Spot {
        Spot::new("Paris", "https://fr.wikipedia.org/wiki/Paris", 48.8566, 2.3522, None)
    }

    fn bern() -> Spot {
        Spot::new("Bern", "https://de.wikipedia.org/wiki/Bern", 46.948, 7.4474, None)
    }

    #[rstest]
    #[case("640x400", 640, 400)]
    #[case("10x20", 10, 20)]
    #[case("1280x720", 1280, 720)]
    fn test_map_size_parsing(#[case] text: &str, #[case] width: u32, #[case] height: u32) {
        let size: MapSize = text.parse().unwrap();
        assert_eq!(size.width, width);
        assert_eq!(size.height, height);
        assert_eq!(size.to_string(), text);
    }

    #[rstest]
    #[case("640")]
    #[case("x400")]
    #[case("640x")]
    #[case("AxB")]
    #[case("640X400")]
    #[case("640x400x2")]
    #[case("-640x400")]
    fn test_map_size_rejects_malformed_input(#[case] text: &str) {
        let error = text.parse::<MapSize>().unwrap_err();
        assert!(matches!(error, GeospotError::Validation { .. }));
        assert!(error.to_string().contains("WIDTHxHEIGHT"));
    }

    #[test]
    fn test_map_size_default() {
        assert_eq!(MapSize::default().to_string(), "640x400");
    }

    #[rstest]
    #[case("roadmap", MapType::Roadmap)]
    #[case("satellite", MapType::Satellite)]
    #[case("terrain", MapType::Terrain)]
    #[case("hybrid", MapType::Hybrid)]
    fn test_map_type_parsing(#[case] text: &str, #[case] expected: MapType) {
        assert_eq!(text.parse::<MapType>().unwrap(), expected);
        assert_eq!(expected.to_string(), text);
    }

    #[test]
    fn test_map_type_rejects_unknown_style() {
        let error = "streetview".parse::<MapType>().unwrap_err();
        assert!(matches!(error, GeospotError::Validation { .. }));
    }

    #[test]
    fn test_url_carries_size_and_maptype() {
        let map = StaticMap::from_spots(&[berlin()], &MapOptions::default());

        assert!(map.url().starts_with(BASE_URL));
        assert!(map.url().contains("size=640x400"));
        assert!(map.url().contains("maptype=roadmap"));
    }

    #[test]
    fn test_markers_are_labeled_in_order() {
        let map = StaticMap::from_spots(&[berlin(), paris()], &MapOptions::default());

        let url = map.url();
        let first = url.find("markers=label:A|52.52,13.405").unwrap();
        let second = url.find("markers=label:B|48.8566,2.3522").unwrap();
        assert!(first < second);
        assert!(!url.contains("path="));
    }

    #[test]
    fn test_path_connects_spots_in_order() {
        let options = MapOptions {
            path: true,
            ..MapOptions::default()
        };
        let map = StaticMap::from_spots(&[berlin(), paris(), bern()], &options);

        let url = map.url();
        assert!(url.contains("markers=label:A|"));
        assert!(url.contains("markers=label:C|"));
        assert!(url.contains("path=52.52,13.405|48.8566,2.3522|46.948,7.4474"));
    }

    #[test]
    fn test_region_closes_ring_and_suppresses_markers() {
        let options = MapOptions {
            region: true,
            ..MapOptions::default()
        };
        let map = StaticMap::from_spots(&[berlin(), paris(), bern()], &options);

        let url = map.url();
        assert!(!url.contains("markers="));
        assert!(url.contains(
            "path=fillcolor:gray|52.52,13.405|48.8566,2.3522|46.948,7.4474|52.52,13.405"
        ));
    }

    #[test]
    fn test_region_wins_over_path() {
        let options = MapOptions {
            path: true,
            region: true,
            ..MapOptions::default()
        };
        let map = StaticMap::from_spots(&[berlin(), paris()], &options);

        let url = map.url();
        assert!(!url.contains("markers="));
        assert!(url.contains("fillcolor:gray"));
    }

    #[test]
    fn test_marker_labels_cycle_after_z() {
        assert_eq!(marker_label(0), 'A');
        assert_eq!(marker_label(25), 'Z');
        assert_eq!(marker_label(26), 'A');
        assert_eq!(marker_label(27), 'B');
    }
}

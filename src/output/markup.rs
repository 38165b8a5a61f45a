//! KML markup output: one folder of placemarks, point per spot.

use kml::types::{Element, Geometry, Placemark, Point};
use kml::{Kml, KmlDocument, KmlVersion, KmlWriter};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{GeospotError, Result};
use crate::spot::Spot;

/// KML 2.2 namespace written on the root element
const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

/// Folder name used when the caller does not set one
const DEFAULT_FOLDER_NAME: &str = "geospot";

/// Builds a KML document over resolved spots. Placemark names are the spot
/// titles; point coordinates are ordered longitude, latitude and, when
/// known, elevation.
#[derive(Debug, Clone)]
pub struct MarkupDocument {
    folder_name: String,
    spots: Vec<Spot>,
}

impl MarkupDocument {
    #[must_use]
    pub fn new(spots: Vec<Spot>) -> Self {
        Self {
            folder_name: DEFAULT_FOLDER_NAME.to_string(),
            spots,
        }
    }

    /// Override the folder name
    #[must_use]
    pub fn with_folder_name<S: Into<String>>(mut self, name: S) -> Self {
        self.folder_name = name.into();
        self
    }

    fn placemark(spot: &Spot) -> Placemark {
        let point = Point::new(spot.longitude(), spot.latitude(), spot.elevation());

        Placemark {
            name: Some(spot.title().to_string()),
            geometry: Some(Geometry::Point(point)),
            ..Placemark::default()
        }
    }

    fn document(&self) -> Kml {
        let mut folder_elements = vec![Kml::Element(Element {
            name: "name".to_string(),
            content: Some(self.folder_name.clone()),
            ..Element::default()
        })];
        folder_elements.extend(
            self.spots
                .iter()
                .map(|spot| Kml::Placemark(Self::placemark(spot))),
        );

        let folder = Kml::Folder {
            attrs: HashMap::new(),
            elements: folder_elements,
        };

        Kml::KmlDocument(KmlDocument {
            version: KmlVersion::V22,
            attrs: HashMap::from([("xmlns".to_string(), KML_NAMESPACE.to_string())]),
            elements: vec![Kml::Document {
                attrs: HashMap::new(),
                elements: vec![folder],
            }],
        })
    }

    /// Render the document as a KML string
    pub fn to_kml(&self) -> Result<String> {
        let mut buffer = Vec::new();
        let mut writer = KmlWriter::from_writer(&mut buffer);
        writer
            .write(&self.document())
            .map_err(|e| GeospotError::serialization(format!("Failed to write KML: {e}")))?;

        let body = String::from_utf8(buffer)
            .map_err(|e| GeospotError::serialization(format!("KML output is not UTF-8: {e}")))?;

        Ok(format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{body}"))
    }

    /// Print the document to stdout, or save it to `filename`
    pub fn emit(&self, filename: Option<&Path>) -> Result<()> {
        let kml = self.to_kml()?;
        match filename {
            Some(path) => fs::write(path, kml)?,
            None => println!("{kml}"),
        }
        Ok(())
    }
}

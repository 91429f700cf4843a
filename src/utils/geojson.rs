use crate::utils::maptypes::PointOfInterest;
use serde::Serialize;

#[derive(Serialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    #[serde(rename = "Point")]
    Point { coordinates: [f64; 2] },
}

#[derive(Serialize)]
pub struct GeoJsonFeatureCollection {
    #[serde(rename = "type")]
    pub type_field: String,
    pub features: Vec<GeoJsonFeature>,
}

#[derive(Serialize)]
pub struct GeoJsonFeature {
    #[serde(rename = "type")]
    pub type_field: String,
    pub geometry: GeoJsonGeometry,
    pub properties: GeoJsonProperties,
}

#[derive(Serialize)]
pub struct GeoJsonProperties {
    pub rank: usize,
    pub name: String,
    pub description: String,
}

impl GeoJsonFeatureCollection {
    pub fn new() -> Self {
        Self {
            type_field: "FeatureCollection".to_string(),
            features: Vec::new(),
        }
    }
}

impl From<&[PointOfInterest]> for GeoJsonFeatureCollection {
    fn from(pois: &[PointOfInterest]) -> Self {
        let mut collection = Self::new();
        for (index, poi) in pois.iter().enumerate() {
            collection.features.push(GeoJsonFeature {
                type_field: "Feature".to_string(),
                geometry: GeoJsonGeometry::Point {
                    coordinates: poi.coordinates.into(),
                },
                properties: GeoJsonProperties {
                    rank: index + 1,
                    name: poi.name.clone(),
                    description: poi.description.clone(),
                },
            });
        }
        collection
    }
}

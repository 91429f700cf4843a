pub mod geojson;
pub mod maptypes;

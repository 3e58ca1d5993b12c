use geo::{Coord, LineString};
use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde_json::json;

use super::Route;
use crate::{Error, description::Instruction};

impl Route {
    /// Converts the route to a `GeoJSON` `FeatureCollection`.
    ///
    /// The first feature is the whole path, followed by one feature per
    /// instruction segment.
    pub fn to_geojson(&self) -> Result<FeatureCollection, Error> {
        let path: Vec<Coord<f64>> = self.path_points().map(Coord::from).collect();

        let mut features = Vec::with_capacity(self.instructions().len() + 1);
        features.push(create_path_feature(self, path.clone())?);

        for (idx, instruction) in self.instructions().iter().enumerate() {
            let coords = path[instruction.start_index..=instruction.end_index].to_vec();
            features.push(create_segment_feature(idx, instruction, coords)?);
        }

        Ok(FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        })
    }

    pub fn to_geojson_string(&self) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson()?).map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

fn create_path_feature(route: &Route, coords: Vec<Coord<f64>>) -> Result<Feature, Error> {
    let geometry = Geometry::new(GeoJsonValue::from(&LineString::new(coords)));

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "feature_type": "route",
            "total_length_m": route.total_length_m(),
            "description": route.description(),
        }
    });

    serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}

fn create_segment_feature(
    segment_idx: usize,
    instruction: &Instruction,
    coords: Vec<Coord<f64>>,
) -> Result<Feature, Error> {
    let geometry = Geometry::new(GeoJsonValue::from(&LineString::new(coords)));

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "feature_type": "segment",
            "segment_index": segment_idx,
            "street": instruction.street,
            "instruction": instruction.to_string(),
            "direction": instruction.direction,
            "distance_m": instruction.distance_m,
        }
    });

    serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}

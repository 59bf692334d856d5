use geo_types::{Geometry, Point};
use serde::{Deserialize, Serialize};

use crate::error::{invalid_parameter_error, Error};

// GeoJSON point: coordinates are [longitude, latitude]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: [f64; 2],
}

impl Location {
    pub fn new(coordinates: Coordinates) -> Self {
        Self {
            kind: "Point".into(),
            coordinates: [coordinates.longitude, coordinates.latitude],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    // search positions arrive as "lat,lng", latitude first
    pub fn parse(raw: &str) -> Result<Self, Error> {
        let (latitude, longitude) = raw
            .split_once(',')
            .ok_or_else(|| invalid_parameter_error("position"))?;

        let latitude = latitude
            .trim()
            .parse()
            .map_err(|_| invalid_parameter_error("position"))?;

        let longitude = longitude
            .trim()
            .parse()
            .map_err(|_| invalid_parameter_error("position"))?;

        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl From<Coordinates> for Geometry<f64> {
    fn from(coordinates: Coordinates) -> Self {
        // geo_types points are (x, y) = (longitude, latitude)
        Point::new(coordinates.longitude, coordinates.latitude).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_lat_lng_pair() {
        let coordinates = Coordinates::parse("53.8,-1.5").unwrap();

        assert_eq!(coordinates.latitude, 53.8);
        assert_eq!(coordinates.longitude, -1.5);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let coordinates = Coordinates::parse(" 53.8 , -1.5 ").unwrap();

        assert_eq!(coordinates.latitude, 53.8);
        assert_eq!(coordinates.longitude, -1.5);
    }

    #[test]
    fn rejects_a_position_without_a_comma() {
        assert!(Coordinates::parse("53.8 -1.5").is_err());
    }

    #[test]
    fn rejects_non_numeric_components() {
        assert!(Coordinates::parse("north,west").is_err());
        assert!(Coordinates::parse("53.8,-1.5,7").is_err());
        assert!(Coordinates::parse("").is_err());
    }

    #[test]
    fn geojson_locations_are_longitude_first() {
        let location = Location::new(Coordinates {
            latitude: 53.8,
            longitude: -1.5,
        });

        assert_eq!(location.kind, "Point");
        assert_eq!(location.coordinates, [-1.5, 53.8]);
    }

    #[test]
    fn geometry_conversion_maps_longitude_to_x() {
        let geometry: Geometry<f64> = Coordinates {
            latitude: 53.8,
            longitude: -1.5,
        }
        .into();

        match geometry {
            Geometry::Point(point) => {
                assert_eq!(point.x(), -1.5);
                assert_eq!(point.y(), 53.8);
            }
            _ => panic!("expected a point"),
        }
    }
}

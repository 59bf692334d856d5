use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Location;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub category: String,
    pub url: String,
    pub date: DateTime<Utc>,
    pub excerpt: String,
    pub thumbnail: String,
    pub address: String,
    pub phone: String,
    pub twitter: String,
    pub stars_beer: f64,
    pub stars_atmosphere: f64,
    pub stars_amenities: f64,
    pub stars_value: f64,
    pub tags: String,
    pub location: Location,
    // not persisted; spatial queries fill this in from the projection
    #[serde(default)]
    pub distance: f64,
}

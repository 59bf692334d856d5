use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{Coordinates, Venue};
use crate::error::Error;

#[async_trait]
pub trait VenueAPI {
    async fn find_venues(&self) -> Result<Vec<Venue>, Error>;

    async fn find_venues_within_distance(
        &self,
        origin: Coordinates,
        max_distance: Option<f64>,
    ) -> Result<Vec<Venue>, Error>;

    async fn find_venues_with_tag(
        &self,
        origin: Coordinates,
        tag: String,
        max_distance: Option<f64>,
    ) -> Result<Vec<Venue>, Error>;
}

pub trait API: VenueAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;

use axum::extract::{Extension, Json, Query};
use serde::Deserialize;
use serde_json::Value;

use crate::api::DynAPI;
use crate::entities::{Coordinates, Venue};
use crate::error::{invalid_parameter_error, missing_parameter_error, Error};

// distance stays a JSON value: query strings carry it as text, request
// bodies may carry a number
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SearchParams {
    pub position: Option<String>,
    pub distance: Option<Value>,
    pub tag: Option<String>,
}

impl SearchParams {
    // query-string values win over body values
    pub fn merged_with(self, body: Option<Self>) -> Self {
        let body = body.unwrap_or_default();

        Self {
            position: self.position.or(body.position),
            distance: self.distance.or(body.distance),
            tag: self.tag.or(body.tag),
        }
    }

    pub fn origin(&self) -> Result<Coordinates, Error> {
        let position = self
            .position
            .as_deref()
            .map(str::trim)
            .filter(|position| !position.is_empty())
            .ok_or_else(|| missing_parameter_error("position"))?;

        Coordinates::parse(position)
    }

    pub fn tag(&self) -> Result<String, Error> {
        self.tag
            .as_deref()
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_owned)
            .ok_or_else(|| missing_parameter_error("tag"))
    }

    // threshold in meters
    pub fn max_distance(&self) -> Result<Option<f64>, Error> {
        match &self.distance {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(raw)) => {
                let raw = raw.trim();

                if raw.is_empty() {
                    return Ok(None);
                }

                let meters: i64 = raw
                    .parse()
                    .map_err(|_| invalid_parameter_error("distance"))?;

                Ok(Some(meters as f64))
            }
            Some(Value::Number(meters)) => match meters.as_i64() {
                Some(meters) => Ok(Some(meters as f64)),
                None => Err(invalid_parameter_error("distance")),
            },
            Some(_) => Err(invalid_parameter_error("distance")),
        }
    }
}

pub async fn find_all(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<Venue>>, Error> {
    let venues = api.find_venues().await?;

    Ok(venues.into())
}

pub async fn find_within_distance(
    Extension(api): Extension<DynAPI>,
    Query(query): Query<SearchParams>,
    body: Option<Json<SearchParams>>,
) -> Result<Json<Vec<Venue>>, Error> {
    let params = query.merged_with(body.map(|Json(body)| body));

    let origin = params.origin()?;
    let max_distance = params.max_distance()?;

    let venues = api.find_venues_within_distance(origin, max_distance).await?;

    Ok(venues.into())
}

pub async fn find_with_tag(
    Extension(api): Extension<DynAPI>,
    Query(query): Query<SearchParams>,
    body: Option<Json<SearchParams>>,
) -> Result<Json<Vec<Venue>>, Error> {
    let params = query.merged_with(body.map(|Json(body)| body));

    let origin = params.origin()?;
    let tag = params.tag()?;
    let max_distance = params.max_distance()?;

    let venues = api.find_venues_with_tag(origin, tag, max_distance).await?;

    Ok(venues.into())
}

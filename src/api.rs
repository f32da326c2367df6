use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tracing::{error, instrument, warn};

use crate::dadata::{clean_address, geolocate_address, suggest_address};
use crate::net::response::{ResponseError, Result};
use crate::types::address::{Address, Coordinates};
use crate::types::dadata::{GeolocateParams, SuggestParams};
use crate::types::dto::envelope::{
    AddressInfoResponse, ResolvedAddressResponse, SuggestionsResponse,
};
use crate::types::dto::geom::PartialCoords;
use crate::types::dto::query::{FindAddressQuery, SuggestQuery};

pub fn router() -> Router {
    Router::new()
        .route("/dadata/getAddressSuggestions", get(get_address_suggestions))
        .route("/dadata/findAddress", get(find_address))
        .route(
            "/dadata/getAddressByCoordinates",
            get(get_address_by_coordinates),
        )
        .layer(CorsLayer::permissive())
}

async fn get_address_suggestions(
    Query(query): Query<SuggestQuery>,
) -> Result<Json<SuggestionsResponse>> {
    let Some(address) = query.address.filter(|address| !address.is_empty()) else {
        return Err(ResponseError::bad_request("address parameter is required"));
    };
    let params = SuggestParams {
        count: query.count,
        language: query.language,
        locations: None,
    };
    let suggestions: Vec<Address> = match suggest_address(&address, &params).await {
        Ok(Some(raw)) => raw.into_iter().map(Address::from).collect(),
        Ok(None) => {
            warn!("provider rejected the suggest call");
            return Err(ResponseError::bad_gateway(
                "address suggestions are unavailable",
            ));
        }
        Err(err) => {
            error!("suggest call failed: {err:#}");
            return Err(ResponseError::bad_gateway(
                "address suggestions are unavailable",
            ));
        }
    };
    Ok(Json(SuggestionsResponse {
        ok: true,
        suggestions,
    }))
}

#[instrument(skip_all)]
#[axum::debug_handler]
async fn find_address(
    Query(query): Query<FindAddressQuery>,
) -> Result<Json<AddressInfoResponse>> {
    let Some(address) = query.address.filter(|address| !address.is_empty()) else {
        return Err(ResponseError::bad_request("address parameter is required"));
    };
    let info = match clean_address(&address).await {
        Ok(Some(cleaned)) => cleaned.into_iter().next(),
        Ok(None) => {
            warn!("provider rejected the clean call");
            return Err(ResponseError::bad_gateway("address cleaning is unavailable"));
        }
        Err(err) => {
            error!("clean call failed: {err:#}");
            return Err(ResponseError::bad_gateway("address cleaning is unavailable"));
        }
    };
    Ok(Json(AddressInfoResponse { ok: true, info }))
}

async fn get_address_by_coordinates(
    Query(coords): Query<PartialCoords>,
    Query(params): Query<GeolocateParams>,
) -> Result<Response> {
    let Some(coords) = Option::<Coordinates>::from(coords) else {
        return Err(ResponseError::bad_request(
            "lat and lon parameters are required",
        ));
    };
    let addresses = match geolocate_address(coords, &params).await {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            warn!("provider rejected the geolocate call");
            return Err(ResponseError::bad_gateway("address lookup is unavailable"));
        }
        Err(err) => {
            error!("geolocate call failed: {err:#}");
            return Err(ResponseError::bad_gateway("address lookup is unavailable"));
        }
    };
    let Some(first) = addresses.into_iter().next() else {
        // nothing resolvable at these coordinates
        return Ok(StatusCode::NO_CONTENT.into_response());
    };
    Ok(Json(ResolvedAddressResponse {
        ok: true,
        address: Address::from(first),
    })
    .into_response())
}

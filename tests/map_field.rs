mod common;

use std::sync::Arc;

use common::{cleaned, structured_suggestion, MockSource, Script};
use dadata_proxy::map::MapField;
use dadata_proxy::types::address::Coordinates;

fn coords(lat: f64, lon: f64) -> Coordinates {
    Coordinates { lat, lon }
}

#[tokio::test]
async fn map_click_adopts_the_most_confident_match() {
    let mock = Arc::new(MockSource::default());
    *mock.geolocate_script.lock().unwrap() = Script::Reply(vec![
        structured_suggestion("г Москва, ул Тверская, д 1"),
        structured_suggestion("г Москва, ул Тверская, д 3"),
    ]);
    let mut field = MapField::new(mock.clone());

    let adopted = field
        .set_coords(Some(coords(55.757919, 37.611329)))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(adopted.value, "г Москва, ул Тверская, д 1");
    // display value and the granular fields both survive
    assert_eq!(adopted.postal_code.as_deref(), Some("125009"));
    assert_eq!(adopted.city.as_deref(), Some("Москва"));
    assert_eq!(adopted.street_with_type.as_deref(), Some("ул Тверская"));
    assert_eq!(adopted.house.as_deref(), Some("1"));
    assert_eq!(
        adopted.fias_id.as_deref(),
        Some("8d327a56-80de-4df2-815c-4f6ab1224c50")
    );
    assert_eq!(adopted.kladr_id.as_deref(), Some("7700000000007750049"));

    let state = field.state();
    assert_eq!(state.location, Some(coords(55.757919, 37.611329)));
    assert_eq!(state.address, Some(adopted));
    assert_eq!(mock.geolocate_log.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn clearing_coordinates_skips_the_network() {
    let mock = Arc::new(MockSource::default());
    let mut field = MapField::new(mock.clone());

    let out = field.set_coords(None).await.unwrap();
    assert_eq!(out, None);
    assert!(mock.geolocate_log.lock().unwrap().is_empty());
    assert_eq!(field.state().location, None);
}

#[tokio::test]
async fn unresolvable_coordinates_keep_the_previous_address() {
    let mock = Arc::new(MockSource::default());
    *mock.geolocate_script.lock().unwrap() =
        Script::Reply(vec![structured_suggestion("г Москва, ул Тверская, д 1")]);
    let mut field = MapField::new(mock.clone());

    field
        .set_coords(Some(coords(55.757919, 37.611329)))
        .await
        .unwrap();

    *mock.geolocate_script.lock().unwrap() = Script::Reply(Vec::new());
    let out = field.set_coords(Some(coords(0.0, 0.0))).await.unwrap();
    assert_eq!(out, None);

    let state = field.state();
    assert_eq!(
        state.address.as_ref().map(|address| address.value.as_str()),
        Some("г Москва, ул Тверская, д 1")
    );
    // the pin still moved
    assert_eq!(state.location, Some(coords(0.0, 0.0)));
}

#[tokio::test]
async fn rejected_geolocate_surfaces_an_error() {
    let mock = Arc::new(MockSource::default());
    let mut field = MapField::new(mock.clone());

    let out = field.set_coords(Some(coords(55.0, 37.0))).await;
    assert!(out.is_err());
    assert_eq!(field.state().address, None);
}

#[tokio::test]
async fn committed_text_moves_the_pin() {
    let mock = Arc::new(MockSource::default());
    *mock.clean_script.lock().unwrap() = Script::Reply(cleaned(
        "тверская 1",
        "г Москва, ул Тверская, д 1",
        Some(("55.757919", "37.611329")),
    ));
    let mut field = MapField::new(mock.clone());

    let adopted = field
        .set_address_text("тверская 1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(adopted.value, "г Москва, ул Тверская, д 1");

    let state = field.state();
    assert_eq!(state.location, Some(coords(55.757919, 37.611329)));
    assert_eq!(
        mock.clean_log.lock().unwrap().as_slice(),
        &["тверская 1".to_string()]
    );
}

#[tokio::test]
async fn cleaned_record_without_geoposition_keeps_the_pin() {
    let mock = Arc::new(MockSource::default());
    *mock.geolocate_script.lock().unwrap() =
        Script::Reply(vec![structured_suggestion("г Москва, ул Тверская, д 1")]);
    *mock.clean_script.lock().unwrap() =
        Script::Reply(cleaned("казань", "г Казань", None));
    let mut field = MapField::new(mock.clone());

    field
        .set_coords(Some(coords(55.757919, 37.611329)))
        .await
        .unwrap();
    let adopted = field.set_address_text("казань").await.unwrap().unwrap();
    assert_eq!(adopted.value, "г Казань");

    let state = field.state();
    assert_eq!(
        state.address.as_ref().map(|address| address.value.as_str()),
        Some("г Казань")
    );
    assert_eq!(state.location, Some(coords(55.757919, 37.611329)));
}

#[tokio::test]
async fn empty_text_is_ignored() {
    let mock = Arc::new(MockSource::default());
    let mut field = MapField::new(mock.clone());

    let out = field.set_address_text("").await.unwrap();
    assert_eq!(out, None);
    assert!(mock.clean_log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unresolvable_text_leaves_the_field_untouched() {
    let mock = Arc::new(MockSource::default());
    let mut field = MapField::new(mock.clone());

    let out = field.set_address_text("asdfgh").await.unwrap();
    assert_eq!(out, None);
    assert_eq!(field.state().address, None);
    assert_eq!(
        mock.clean_log.lock().unwrap().as_slice(),
        &["asdfgh".to_string()]
    );
}

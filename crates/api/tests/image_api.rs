mod common;

use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::StatusCode;
use estate_api::config::ImageBackend;
use serde_json::{json, Value};

const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];

async fn property_fixture(app: &common::TestApp, slug: &str) -> i64 {
    let location_id = common::create_location(app.router(), slug).await;
    common::create_property(app.router(), location_id).await
}

async fn attach(app: &common::TestApp, property_id: i64, body: Value) -> Value {
    let response = common::post_json(
        app.router(),
        &format!("/api/properties/{property_id}/images"),
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    common::body_json(response).await["data"].clone()
}

async fn property_images(app: &common::TestApp, property_id: i64) -> Vec<Value> {
    let uri = format!("/api/properties/{property_id}/images");
    let json = common::body_json(common::get(app.router(), &uri).await).await;
    json["data"].as_array().unwrap().clone()
}

fn featured_ids(images: &[Value]) -> Vec<i64> {
    images
        .iter()
        .filter(|img| img["isFeatured"] == true)
        .map(|img| img["id"].as_i64().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Image records
// ---------------------------------------------------------------------------

#[tokio::test]
async fn attached_images_follow_display_order() {
    let app = common::build_test_app();
    let property_id = property_fixture(&app, "maple").await;

    let first = attach(&app, property_id, json!({"objectKey": "images/properties/1/a.jpg"})).await;
    let second = attach(&app, property_id, json!({"url": "https://cdn.example.com/b.jpg"})).await;
    assert_eq!(first["displayOrder"], 0);
    assert_eq!(second["displayOrder"], 1);
    assert_eq!(first["url"], "/api/images/images%2Fproperties%2F1%2Fa.jpg");

    let images = property_images(&app, property_id).await;
    assert_eq!(images[0]["id"], first["id"]);
    assert_eq!(images[1]["id"], second["id"]);
}

#[tokio::test]
async fn image_without_source_is_rejected() {
    let app = common::build_test_app();
    let property_id = property_fixture(&app, "birch").await;
    let response = common::post_json(
        app.router(),
        &format!("/api/properties/{property_id}/images"),
        json!({"caption": "Kitchen"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(common::body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn at_most_one_featured_image() {
    let app = common::build_test_app();
    let property_id = property_fixture(&app, "cedar").await;

    let a = attach(&app, property_id, json!({"url": "https://x.test/a.jpg", "isFeatured": true})).await;
    let b = attach(&app, property_id, json!({"url": "https://x.test/b.jpg", "isFeatured": true})).await;
    let a_id = a["id"].as_i64().unwrap();
    let b_id = b["id"].as_i64().unwrap();
    assert_eq!(featured_ids(&property_images(&app, property_id).await), vec![b_id]);

    let response =
        common::post_json(app.router(), &format!("/api/property-images/{a_id}/featured"), json!({}))
            .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(featured_ids(&property_images(&app, property_id).await), vec![a_id]);

    let response = common::put_json(
        app.router(),
        &format!("/api/property-images/{b_id}"),
        json!({"isFeatured": true, "caption": "Front"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(featured_ids(&property_images(&app, property_id).await), vec![b_id]);
}

#[tokio::test]
async fn numeric_image_ref_returns_record() {
    let app = common::build_test_app();
    let property_id = property_fixture(&app, "aspen").await;
    let image = attach(&app, property_id, json!({"url": "https://x.test/a.jpg"})).await;
    let id = image["id"].as_i64().unwrap();

    let response = common::get(app.router(), &format!("/api/property-images/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(common::body_json(response).await["data"], image);

    let response = common::delete(app.router(), &format!("/api/property-images/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = common::get(app.router(), &format!("/api/property-images/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unit_images_have_their_own_featured_flag() {
    let app = common::build_test_app();
    let property_id = property_fixture(&app, "willow").await;
    let unit_id = common::create_unit(app.router(), property_id).await;
    attach(&app, property_id, json!({"url": "https://x.test/p.jpg", "isFeatured": true})).await;

    let response = common::post_json(
        app.router(),
        &format!("/api/property-units/{unit_id}/images"),
        json!({"url": "https://x.test/u.jpg", "isFeatured": true}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let unit_image = common::body_json(response).await["data"].clone();
    assert_eq!(unit_image["unitId"], unit_id);

    // The property image keeps its flag.
    assert_eq!(featured_ids(&property_images(&app, property_id).await).len(), 1);

    let uri = format!("/api/unit-images/{}/featured", unit_image["id"]);
    let response = common::post_json(app.router(), &uri, json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(common::body_json(response).await["data"]["isFeatured"], true);
}

// ---------------------------------------------------------------------------
// Uploads and byte serving
// ---------------------------------------------------------------------------

#[tokio::test]
async fn object_upload_is_served_back() {
    let app = common::build_test_app();
    let property_id = property_fixture(&app, "elm").await;

    let response = common::post_multipart(
        app.router(),
        &format!("/api/properties/{property_id}/images/upload"),
        &[
            common::file_part("porch.jpg", "image/jpeg", JPEG_BYTES),
            common::text_part("caption", "Porch"),
            common::text_part("isFeatured", "true"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let image = common::body_json(response).await["data"].clone();
    let key = image["objectKey"].as_str().unwrap().to_string();
    assert!(key.starts_with(&format!("images/properties/{property_id}/")));
    assert!(key.ends_with(".jpg"));
    assert_eq!(image["caption"], "Porch");
    assert_eq!(image["isFeatured"], true);
    assert_eq!(image["size"], JPEG_BYTES.len());
    assert_eq!(app.blobs.len().await, 1);

    let response = common::get(app.router(), image["url"].as_str().unwrap()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "image/jpeg");
    assert!(response.headers()[CACHE_CONTROL]
        .to_str()
        .unwrap()
        .contains("immutable"));
    assert_eq!(common::body_bytes(response).await, JPEG_BYTES);

    // Deleting the record purges the object.
    let uri = format!("/api/property-images/{}", image["id"]);
    common::delete(app.router(), &uri).await;
    assert!(app.blobs.is_empty().await);
}

#[tokio::test]
async fn missing_object_returns_404() {
    let app = common::build_test_app();
    let response = common::get(app.router(), "/api/images/images%2Fnowhere%2Fx.jpg").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(common::body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn database_backend_upload_is_served_from_database() {
    let mut config = common::test_config();
    config.image_backend = ImageBackend::Database;
    let app = common::build_test_app_with(config);
    let property_id = property_fixture(&app, "spruce").await;

    let response = common::post_multipart(
        app.router(),
        &format!("/api/properties/{property_id}/images/upload"),
        &[common::file_part("hall.png", "image/png", b"\x89PNG\r\n\x1a\n")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let image = common::body_json(response).await["data"].clone();
    let key = image["objectKey"].as_str().unwrap();
    assert!(key.starts_with("propimg_"));
    assert_eq!(image["url"], format!("/api/property-images/{key}"));
    assert!(app.blobs.is_empty().await);

    let response = common::get(app.router(), image["url"].as_str().unwrap()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "image/png");
    assert_eq!(common::body_bytes(response).await, b"\x89PNG\r\n\x1a\n");
}

#[tokio::test]
async fn standalone_upload_returns_key_and_url() {
    let mut config = common::test_config();
    config.image_backend = ImageBackend::Database;
    let app = common::build_test_app_with(config);

    let response = common::post_multipart(
        app.router(),
        "/api/images/upload",
        &[common::file_part("map.webp", "image/webp", b"RIFF0000WEBP")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = common::body_json(response).await;
    let key = json["data"]["objectKey"].as_str().unwrap();
    assert!(key.starts_with("dbimg_") && key.ends_with(".webp"));
    assert_eq!(json["data"]["source"], "db-image");

    let response = common::get(app.router(), &format!("/api/db-images/{key}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "image/webp");
}

#[tokio::test]
async fn upload_rejects_bad_files() {
    let app = common::build_test_app();
    let property_id = property_fixture(&app, "poplar").await;
    let uri = format!("/api/properties/{property_id}/images/upload");

    let response = common::post_multipart(
        app.router(),
        &uri,
        &[common::file_part("notes.txt", "text/plain", b"hello")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = common::post_multipart(
        app.router(),
        &uri,
        &[common::file_part("empty.jpg", "image/jpeg", b"")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response =
        common::post_multipart(app.router(), &uri, &[common::text_part("caption", "no file")]).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert!(app.blobs.is_empty().await);
}

#[tokio::test]
async fn oversized_upload_is_rejected() {
    let mut config = common::test_config();
    config.max_upload_bytes = 16;
    let app = common::build_test_app_with(config);

    let big = vec![0u8; 64];
    let response = common::post_multipart(
        app.router(),
        "/api/images/upload",
        &[common::file_part("big.jpg", "image/jpeg", &big)],
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.blobs.is_empty().await);
}

#[tokio::test]
async fn upload_to_missing_unit_returns_404() {
    let app = common::build_test_app();
    let response = common::post_multipart(
        app.router(),
        "/api/property-units/31/images/upload",
        &[common::file_part("a.jpg", "image/jpeg", JPEG_BYTES)],
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_property_purges_uploaded_bytes() {
    let app = common::build_test_app();
    let property_id = property_fixture(&app, "fir").await;
    let unit_id = common::create_unit(app.router(), property_id).await;

    for uri in [
        format!("/api/properties/{property_id}/images/upload"),
        format!("/api/property-units/{unit_id}/images/upload"),
    ] {
        let response = common::post_multipart(
            app.router(),
            &uri,
            &[common::file_part("a.jpg", "image/jpeg", JPEG_BYTES)],
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
    assert_eq!(app.blobs.len().await, 2);

    let response = common::delete(app.router(), &format!("/api/properties/{property_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(app.blobs.is_empty().await);
}

#[tokio::test]
async fn deleting_location_purges_uploaded_bytes() {
    let mut config = common::test_config();
    config.image_backend = ImageBackend::Database;
    let db_app = common::build_test_app_with(config);
    let app = common::build_test_app();

    for app in [&app, &db_app] {
        let location_id = common::create_location(app.router(), "larch").await;
        let property_id = common::create_property(app.router(), location_id).await;
        let unit_id = common::create_unit(app.router(), property_id).await;
        let mut keys = Vec::new();
        for uri in [
            format!("/api/properties/{property_id}/images/upload"),
            format!("/api/property-units/{unit_id}/images/upload"),
        ] {
            let response = common::post_multipart(
                app.router(),
                &uri,
                &[common::file_part("a.jpg", "image/jpeg", JPEG_BYTES)],
            )
            .await;
            assert_eq!(response.status(), StatusCode::CREATED);
            let json = common::body_json(response).await;
            keys.push(json["data"]["objectKey"].as_str().unwrap().to_string());
        }

        let response =
            common::delete(app.router(), &format!("/api/locations/{location_id}")).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        assert!(app.blobs.is_empty().await);
        for key in &keys {
            let response = common::get(app.router(), &format!("/api/db-images/{key}")).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }
    }
}

#[tokio::test]
async fn out_of_range_display_order_is_rejected() {
    let app = common::build_test_app();
    let property_id = property_fixture(&app, "hemlock").await;
    let uri = format!("/api/properties/{property_id}/images");

    let response = common::post_json(
        app.router(),
        &uri,
        json!({"url": "https://x.test/a.jpg", "displayOrder": 2147483647}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(common::body_json(response).await["code"], "VALIDATION_ERROR");

    let response = common::post_json(
        app.router(),
        &uri,
        json!({"url": "https://x.test/a.jpg", "displayOrder": -1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let top = attach(
        &app,
        property_id,
        json!({"url": "https://x.test/top.jpg", "displayOrder": 1_000_000}),
    )
    .await;
    let next = attach(&app, property_id, json!({"url": "https://x.test/next.jpg"})).await;
    assert_eq!(next["displayOrder"], 1_000_001);

    let response = common::put_json(
        app.router(),
        &format!("/api/property-images/{}", top["id"]),
        json!({"displayOrder": 2147483647}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = common::post_multipart(
        app.router(),
        &format!("/api/properties/{property_id}/images/upload"),
        &[
            common::file_part("a.jpg", "image/jpeg", JPEG_BYTES),
            common::text_part("displayOrder", "2147483647"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.blobs.is_empty().await);
}

// ---------------------------------------------------------------------------
// Resolver and features
// ---------------------------------------------------------------------------

#[tokio::test]
async fn resolve_endpoint_classifies_references() {
    let app = common::build_test_app();

    let json = common::body_json(
        common::get(app.router(), "/api/images/resolve?ref=images%2Funits%2F2%2Fbath.jpg").await,
    )
    .await;
    assert_eq!(json["data"]["url"], "/api/images/images%2Funits%2F2%2Fbath.jpg");
    assert_eq!(json["data"]["source"], "object-storage");
    assert_eq!(json["data"]["filename"], "bath.jpg");

    let json = common::body_json(
        common::get(app.router(), "/api/images/resolve?ref=unitimg_abc.png").await,
    )
    .await;
    assert_eq!(json["data"]["url"], "/api/unit-images/unitimg_abc.png");
    assert_eq!(json["data"]["source"], "unit-image");

    let json =
        common::body_json(common::get(app.router(), "/api/images/resolve?type=unit").await).await;
    assert_eq!(json["data"]["url"], "/placeholder-unit.svg");
    assert_eq!(json["data"]["source"], "unknown");
}

#[tokio::test]
async fn features_show_display_image_for_available_properties() {
    let app = common::build_test_app();
    let location_id = common::create_location(app.router(), "summit").await;
    let shown = common::create_property(app.router(), location_id).await;
    let hidden = common::create_property(app.router(), location_id).await;
    common::put_json(
        app.router(),
        &format!("/api/properties/{hidden}"),
        json!({"available": false}),
    )
    .await;

    attach(&app, shown, json!({"objectKey": "images/properties/1/side.jpg"})).await;
    let front = attach(
        &app,
        shown,
        json!({"objectKey": "images/properties/1/front.jpg", "isFeatured": true}),
    )
    .await;

    let json = common::body_json(common::get(app.router(), "/api/features").await).await;
    let features = json["data"].as_array().unwrap();
    assert_eq!(features.len(), 1);
    assert_eq!(features[0]["id"], shown);
    assert_eq!(features[0]["title"], "Garden Flat");
    assert_eq!(features[0]["featuredImageId"], front["id"]);
    assert_eq!(
        features[0]["featuredImage"]["url"],
        "/api/images/images%2Fproperties%2F1%2Ffront.jpg"
    );
}

#[tokio::test]
async fn features_fall_back_to_placeholder() {
    let app = common::build_test_app();
    let location_id = common::create_location(app.router(), "valley").await;
    common::create_property(app.router(), location_id).await;

    let json = common::body_json(common::get(app.router(), "/api/features").await).await;
    assert!(json["data"][0]["featuredImageId"].is_null());
    assert_eq!(json["data"][0]["featuredImage"]["url"], "/placeholder-property.svg");
}

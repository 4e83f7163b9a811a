use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use pushkind_feedback::routes;

mod common;

macro_rules! init_app {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .configure(routes::configure)
                .app_data(web::Data::new($test_db.repo())),
        )
        .await
    };
}

async fn detail_of(resp: actix_web::dev::ServiceResponse) -> String {
    let body: Value = test::read_body_json(resp).await;
    body["detail"].as_str().unwrap_or_default().to_string()
}

#[actix_web::test]
async fn root_returns_welcome_message() {
    let test_db = common::TestDb::new("api_root.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::get().uri("/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, json!({"message": "Welcome to the FastAPI Homework!"}));
}

#[actix_web::test]
async fn category_scenario() {
    let test_db = common::TestDb::new("api_category.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::get().uri("/category").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!([]));

    let req = test::TestRequest::post()
        .uri("/category")
        .set_json(json!({"name": "Books"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"id": 1, "name": "Books"}));

    let req = test::TestRequest::post()
        .uri("/category")
        .set_json(json!({"name": "Books"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        detail_of(resp).await,
        "Category with this name 'Books' already exists."
    );
}

#[actix_web::test]
async fn feedback_endpoints() {
    let test_db = common::TestDb::new("api_feedback.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::get()
        .uri("/feedback?query=zzz")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(detail_of(resp).await, "No feedbacks found with that name.");

    let req = test::TestRequest::post()
        .uri("/feedback")
        .set_json(json!({"name": "alice", "comment": "nice shop"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"id": 1, "name": "alice", "comment": "nice shop"}));

    let req = test::TestRequest::post()
        .uri("/feedback")
        .set_json(json!({"name": "alice", "comment": "again"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri("/feedback?query=lic")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let req = test::TestRequest::get().uri("/feedback").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(!detail_of(resp).await.is_empty());
}

#[actix_web::test]
async fn tag_endpoints() {
    let test_db = common::TestDb::new("api_tag.db");
    let app = init_app!(test_db);

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/tag")
            .set_json(json!({"name": "sale"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get().uri("/tag").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!([{"id": 1, "name": "sale"}, {"id": 2, "name": "sale"}])
    );
}

#[actix_web::test]
async fn feedback_names_are_stored_as_submitted() {
    let test_db = common::TestDb::new("api_feedback_verbatim.db");
    let app = init_app!(test_db);

    for (name, id) in [("alice", 1), (" alice ", 2), ("Jane  Doe", 3)] {
        let req = test::TestRequest::post()
            .uri("/feedback")
            .set_json(json!({"name": name, "comment": "ok"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"id": id, "name": name, "comment": "ok"}));
    }

    let req = test::TestRequest::post()
        .uri("/feedback")
        .set_json(json!({"name": " alice ", "comment": "again"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        detail_of(resp).await,
        "Feedback with this name ' alice ' already exists."
    );

    let req = test::TestRequest::get()
        .uri("/feedback?query=Jane%20%20Doe")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!([{"id": 3, "name": "Jane  Doe", "comment": "ok"}]));
}

#[actix_web::test]
async fn feedback_accepts_long_comment() {
    let test_db = common::TestDb::new("api_feedback_long.db");
    let app = init_app!(test_db);
    let comment = "a".repeat(3000);

    let req = test::TestRequest::post()
        .uri("/feedback")
        .set_json(json!({"name": "bob", "comment": comment}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["comment"].as_str().map(str::len), Some(3000));
}

#[actix_web::test]
async fn tag_accepts_empty_name() {
    let test_db = common::TestDb::new("api_tag_empty.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/tag")
        .set_json(json!({"name": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"id": 1, "name": ""}));
}

#[actix_web::test]
async fn product_lifecycle() {
    let test_db = common::TestDb::new("api_product.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/product")
        .set_json(json!({"name": "Pen", "description": "blue ink", "quantity": 10}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!({"id": 1, "name": "Pen", "description": "blue ink", "quantity": 10, "is_archived": false})
    );

    let req = test::TestRequest::post()
        .uri("/product")
        .set_json(json!({"name": "Ink", "description": "", "quantity": -3}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(detail_of(resp).await, "Quantity cannot be negative.");

    let req = test::TestRequest::get().uri("/product/search/pE").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body[0]["name"], "Pen");

    let req = test::TestRequest::get().uri("/product/search/zzz").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/product/feedback")
        .set_json(json!({"product_id": 1, "comment": "great", "rating": 5}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!({"id": 1, "product_id": 1, "comment": "great", "rating": 5})
    );

    let req = test::TestRequest::post()
        .uri("/product/feedback")
        .set_json(json!({"product_id": 1, "comment": "great", "rating": 9}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(detail_of(resp).await, "Rating must be between 1 and 5.");

    let req = test::TestRequest::post()
        .uri("/product/feedback")
        .set_json(json!({"product_id": 77, "comment": "ghost", "rating": 3}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::patch()
        .uri("/product/1/archive")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["is_archived"], true);

    let req = test::TestRequest::post()
        .uri("/product/feedback")
        .set_json(json!({"product_id": 1, "comment": "great", "rating": 3}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        detail_of(resp).await,
        "Cannot add feedback to an archived product."
    );

    let req = test::TestRequest::patch()
        .uri("/product/42/archive")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri("/product/feedback/1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let req = test::TestRequest::get()
        .uri("/product/feedback/2")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/product").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[actix_web::test]
async fn malformed_input_is_unprocessable() {
    let test_db = common::TestDb::new("api_malformed.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/product")
        .set_json(json!({"name": "Pen"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(!detail_of(resp).await.is_empty());

    let req = test::TestRequest::patch()
        .uri("/product/abc/archive")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

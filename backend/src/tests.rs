#[cfg(test)]
mod tests {
    use rocket::http::{ContentType, Status};
    use rocket::local::asynchronous::Client;
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use record_shared::{ErrorCode, ErrorResponse, Record};
    use crate::{build_rocket, store::RecordStore};

    async fn client() -> (Client, TempDir) {
        let dir = TempDir::new().unwrap();
        let url = format!("sqlite://{}", dir.path().join("records.db").display());
        let store = RecordStore::connect(&url, 2).await.unwrap();
        let client = Client::tracked(build_rocket(store)).await.unwrap();
        (client, dir)
    }

    async fn stored_count(client: &Client) -> i64 {
        client.rocket().state::<RecordStore>().unwrap().count().await.unwrap()
    }

    async fn post_json(client: &Client, body: &Value) -> (Status, Value) {
        let response = client.post("/records")
            .header(ContentType::JSON)
            .body(body.to_string())
            .dispatch()
            .await;
        let status = response.status();
        (status, response.into_json::<Value>().await.unwrap())
    }

    async fn post_form(client: &Client, body: &str) -> (Status, String) {
        let response = client.post("/submit")
            .header(ContentType::Form)
            .body(body)
            .dispatch()
            .await;
        let status = response.status();
        (status, response.into_string().await.unwrap())
    }

    #[rocket::async_test]
    async fn test_create_and_read_scenario() {
        let (client, _dir) = client().await;

        let (status, created) = post_json(&client, &json!({
            "username": "ann", "age": 30, "city": "NYC", "country": "US"
        })).await;
        assert_eq!(status, Status::Ok);
        assert_eq!(created, json!({
            "id": 1, "username": "ann", "age": 30, "city": "NYC", "country": "US"
        }));

        let response = client.get("/records/1").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.into_json::<Value>().await.unwrap(), created);

        let response = client.get("/records/999").dispatch().await;
        assert_eq!(response.status(), Status::NotFound);
        let body = response.into_json::<ErrorResponse>().await.unwrap();
        assert_eq!(body.code, ErrorCode::NotFound);
        assert_eq!(body.error, "Record 999 not found");
    }

    #[rocket::async_test]
    async fn test_ids_increase_across_endpoints() {
        let (client, _dir) = client().await;

        let mut ids = Vec::new();
        for name in ["a", "b", "c"] {
            let (_, created) = post_json(&client, &json!({
                "username": name, "age": 1, "city": "x", "country": "y"
            })).await;
            ids.push(created["id"].as_i64().unwrap());
        }
        let (status, html) = post_form(&client, "username=d&age=2&city=x&country=y").await;
        assert_eq!(status, Status::Ok);
        assert!(html.contains(r#"<dd id="record-id">4</dd>"#));

        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(stored_count(&client).await, 4);
    }

    #[rocket::async_test]
    async fn test_json_age_coercion() {
        let (client, _dir) = client().await;

        let (status, created) = post_json(&client, &json!({
            "username": "bo", "age": "41", "city": "Oslo", "country": "NO", "ignored": true
        })).await;
        assert_eq!(status, Status::Ok);
        let record: Record = serde_json::from_value(created).unwrap();
        assert_eq!(record.age, 41);
        assert_eq!(record.city, "Oslo");
    }

    #[rocket::async_test]
    async fn test_json_validation_failures_do_not_store() {
        let (client, _dir) = client().await;

        let (status, body) = post_json(&client, &json!({
            "username": "ann", "age": 30, "city": "NYC"
        })).await;
        assert_eq!(status, Status::UnprocessableEntity);
        assert_eq!(body["code"], "validationFailed");
        assert_eq!(body["error"], "Missing required field: country");
        assert_eq!(body["field"], "country");

        let (status, body) = post_json(&client, &json!({
            "username": "ann", "age": "thirty", "city": "NYC", "country": "US"
        })).await;
        assert_eq!(status, Status::UnprocessableEntity);
        assert!(body["error"].as_str().unwrap().contains("age"));

        let (status, _) = post_json(&client, &json!({
            "username": 5, "age": 30, "city": "NYC", "country": "US"
        })).await;
        assert_eq!(status, Status::UnprocessableEntity);

        assert_eq!(stored_count(&client).await, 0);
    }

    #[rocket::async_test]
    async fn test_malformed_json_is_rejected() {
        let (client, _dir) = client().await;

        let response = client.post("/records")
            .header(ContentType::JSON)
            .body("{\"username\": ")
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::BadRequest);
        let body = response.into_json::<ErrorResponse>().await.unwrap();
        assert_eq!(body.code, ErrorCode::InvalidInput);

        let (status, body) = post_json(&client, &json!(["ann", 30])).await;
        assert_eq!(status, Status::UnprocessableEntity);
        assert_eq!(body["code"], "validationFailed");

        assert_eq!(stored_count(&client).await, 0);
    }

    #[rocket::async_test]
    async fn test_json_without_content_type() {
        let (client, _dir) = client().await;

        let response = client.post("/records")
            .body(r#"{"username":"ann","age":30,"city":"NYC","country":"US"}"#)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        let record = response.into_json::<Record>().await.unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.username, "ann");
    }

    #[rocket::async_test]
    async fn test_non_json_content_type_is_rejected() {
        let (client, _dir) = client().await;
        let body = r#"{"username":"ann","age":30,"city":"NYC","country":"US"}"#;

        for content_type in [ContentType::Plain, ContentType::Form] {
            let response = client.post("/records")
                .header(content_type)
                .body(body)
                .dispatch()
                .await;
            assert_eq!(response.status(), Status::UnprocessableEntity);
            let error = response.into_json::<ErrorResponse>().await.unwrap();
            assert_eq!(error.code, ErrorCode::ValidationFailed);
            assert!(error.error.starts_with("Expected a JSON body"));
        }

        assert_eq!(stored_count(&client).await, 0);
    }

    #[rocket::async_test]
    async fn test_json_accepts_empty_strings() {
        let (client, _dir) = client().await;

        let (status, created) = post_json(&client, &json!({
            "username": "", "age": 30, "city": "NYC", "country": "US"
        })).await;
        assert_eq!(status, Status::Ok);
        assert_eq!(created["username"], "");
    }

    #[rocket::async_test]
    async fn test_invalid_record_id() {
        let (client, _dir) = client().await;

        let response = client.get("/records/abc").dispatch().await;
        assert_eq!(response.status(), Status::UnprocessableEntity);
        let body = response.into_json::<ErrorResponse>().await.unwrap();
        assert_eq!(body.code, ErrorCode::InvalidInput);
    }

    #[rocket::async_test]
    async fn test_form_pages() {
        let (client, _dir) = client().await;

        for path in ["/", "/form"] {
            let response = client.get(path).dispatch().await;
            assert_eq!(response.status(), Status::Ok);
            assert_eq!(response.content_type(), Some(ContentType::HTML));
            let html = response.into_string().await.unwrap();
            assert!(html.contains(r#"action="/submit""#));
            assert!(html.contains(r#"name="age""#));
        }
    }

    #[rocket::async_test]
    async fn test_form_submit_renders_record() {
        let (client, _dir) = client().await;

        let (status, html) = post_form(&client, "username=ann%20%3Cb%3E&age=30&city=NYC&country=US").await;
        assert_eq!(status, Status::Ok);
        assert!(html.contains("Record saved"));
        assert!(html.contains("ann &lt;b&gt;"));
        assert!(html.contains("<dd>NYC</dd>"));

        let response = client.get("/records/1").dispatch().await;
        let record = response.into_json::<Record>().await.unwrap();
        assert_eq!(record.username, "ann <b>");
        assert_eq!(record.age, 30);
    }

    #[rocket::async_test]
    async fn test_form_validation_failures_do_not_store() {
        let (client, _dir) = client().await;

        let (status, html) = post_form(&client, "username=ann&age=old&city=NYC&country=US").await;
        assert_eq!(status, Status::UnprocessableEntity);
        assert!(html.contains("Submission rejected (422)"));
        assert!(html.contains("must be an integer"));

        let (status, html) = post_form(&client, "username=ann&age=30&country=US").await;
        assert_eq!(status, Status::UnprocessableEntity);
        assert!(html.contains("Missing required field: city"));
        assert!(html.contains(r#"data-field="city""#));

        // blank inputs from the page read as missing
        let (status, html) = post_form(&client, "username=&age=30&city=&country=").await;
        assert_eq!(status, Status::UnprocessableEntity);
        assert!(html.contains("Missing required field: username"));

        let (status, html) = post_form(&client, "username=ann&age=&city=NYC&country=US").await;
        assert_eq!(status, Status::UnprocessableEntity);
        assert!(html.contains("Missing required field: age"));

        assert_eq!(stored_count(&client).await, 0);
    }

    #[rocket::async_test]
    async fn test_health_and_unknown_routes() {
        let (client, _dir) = client().await;

        let response = client.get("/health").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.into_json::<Value>().await.unwrap(), json!({ "status": "ok" }));

        let response = client.get("/nowhere").dispatch().await;
        assert_eq!(response.status(), Status::NotFound);
        let body = response.into_json::<ErrorResponse>().await.unwrap();
        assert_eq!(body.code, ErrorCode::NotFound);
    }
}

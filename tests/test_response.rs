use httpfs::http::mime::ContentType;
use httpfs::http::response::{Response, ResponseBuilder, StatusCode};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::Created.as_u16(), 201);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::Forbidden.as_u16(), 403);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
    assert_eq!(StatusCode::VersionNotSupported.as_u16(), 505);
}

#[test]
fn test_status_code_display() {
    assert_eq!(StatusCode::Ok.to_string(), "200 OK");
    assert_eq!(StatusCode::Created.to_string(), "201 Created");
    assert_eq!(StatusCode::Forbidden.to_string(), "403 Forbidden");
    assert_eq!(
        StatusCode::InternalServerError.to_string(),
        "500 Internal Server Error"
    );
    assert_eq!(
        StatusCode::VersionNotSupported.to_string(),
        "505 Version Not Supported"
    );
}

#[test]
fn test_status_code_from_u16() {
    assert_eq!(StatusCode::from_u16(403), Some(StatusCode::Forbidden));
    assert_eq!(StatusCode::from_u16(505), Some(StatusCode::VersionNotSupported));
    assert_eq!(StatusCode::from_u16(204), None);
}

#[test]
fn test_response_builder_basic() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body("Hello, World!")
        .build();

    assert_eq!(response.version(), "HTTP/1.0");
    assert_eq!(response.status(), StatusCode::Ok);
    assert_eq!(response.body(), Some("Hello, World!"));
    assert_eq!(response.content_length(), 13);
    assert_eq!(response.date(), None);
    assert_eq!(response.content_type(), None);
    assert_eq!(response.content_disposition(), None);
}

#[test]
fn test_response_content_length_counts_utf8_bytes() {
    let response = ResponseBuilder::new(StatusCode::Ok).body("é€").build();

    assert_eq!(response.content_length(), 5);
}

#[test]
fn test_response_builder_empty_body() {
    let response = ResponseBuilder::new(StatusCode::Created).body("").build();

    assert_eq!(response.body(), None);
    assert_eq!(response.content_length(), 0);
}

#[test]
fn test_response_builder_optional_headers() {
    let response = Response::builder(StatusCode::Ok)
        .date("Sun, 06 Nov 1994 08:49:37 GMT")
        .content_type(ContentType::Html)
        .content_disposition("inline")
        .body("<p>hi</p>")
        .build();

    assert_eq!(response.date(), Some("Sun, 06 Nov 1994 08:49:37 GMT"));
    assert_eq!(response.content_type(), Some(ContentType::Html));
    assert_eq!(response.content_disposition(), Some("inline"));
}

#[test]
fn test_response_error_helper() {
    let response = Response::error(StatusCode::NotFound, "/missing.txt was not found");

    assert_eq!(response.status(), StatusCode::NotFound);
    assert_eq!(response.body(), Some("/missing.txt was not found"));
    assert_eq!(response.content_length(), "/missing.txt was not found".len());

    let date = response.date().expect("error responses are dated");
    assert!(httpdate::parse_http_date(date).is_ok());
}

#[test]
fn test_response_error_helper_empty_message() {
    let response = Response::error(StatusCode::InternalServerError, "");

    assert_eq!(response.content_length(), 0);
    assert_eq!(response.body(), None);
    assert!(response.date().is_some());
}

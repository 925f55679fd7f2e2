use httpfs::http::mime::ContentType;
use httpfs::http::response::{Response, StatusCode};
use httpfs::http::writer::{ResponseWriter, serialize_head, serialize_response};

#[test]
fn test_serialize_full_header_order() {
    let response = Response::builder(StatusCode::Ok)
        .date("Sun, 06 Nov 1994 08:49:37 GMT")
        .content_type(ContentType::Json)
        .content_disposition("inline")
        .body("{}")
        .build();

    assert_eq!(
        serialize_response(&response),
        "HTTP/1.0 200 OK\r\n\
         Date: Sun, 06 Nov 1994 08:49:37 GMT\r\n\
         Content-Length: 2\r\n\
         Content-Type: application/json\r\n\
         Content-Disposition: inline\r\n\
         \r\n\
         {}"
    );
}

#[test]
fn test_serialize_minimal_response() {
    let response = Response::builder(StatusCode::NotFound).build();

    assert_eq!(
        serialize_response(&response),
        "HTTP/1.0 404 Not Found\r\nContent-Length: 0\r\n\r\n"
    );
}

#[test]
fn test_serialize_version_not_supported() {
    let response = Response::builder(StatusCode::VersionNotSupported).build();

    assert!(serialize_response(&response).starts_with("HTTP/1.0 505 Version Not Supported\r\n"));
}

#[test]
fn test_serialize_content_length_in_utf8_bytes() {
    let response = Response::builder(StatusCode::Created).body("é").build();

    assert_eq!(
        serialize_response(&response),
        "HTTP/1.0 201 Created\r\nContent-Length: 2\r\n\r\né"
    );
}

#[tokio::test]
async fn test_writer_writes_whole_response() {
    let response = Response::builder(StatusCode::Ok)
        .content_type(ContentType::PlainText)
        .body("hello")
        .build();

    let mut out: Vec<u8> = Vec::new();
    let mut writer = ResponseWriter::new(&response);
    writer.write_to_stream(&mut out).await.unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "HTTP/1.0 200 OK\r\nContent-Length: 5\r\nContent-Type: text/plain\r\n\r\nhello"
    );
}

#[test]
fn test_head_stops_at_blank_line() {
    let response = Response::builder(StatusCode::Created)
        .date("Sun, 06 Nov 1994 08:49:37 GMT")
        .body("File /a.txt created with content length 3")
        .build();

    let head = serialize_head(&response);

    assert_eq!(
        head,
        "HTTP/1.0 201 Created\r\n\
         Date: Sun, 06 Nov 1994 08:49:37 GMT\r\n\
         Content-Length: 41\r\n\
         \r\n"
    );
    assert_eq!(
        serialize_response(&response),
        format!("{}File /a.txt created with content length 3", head)
    );
}

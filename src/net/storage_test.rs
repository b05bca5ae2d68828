use super::*;

#[test]
fn object_key_prefixes_timestamp() {
    assert_eq!(object_key(1700000000123.0, "me.png"), "1700000000123-me.png");
}

#[test]
fn public_url_points_into_the_avatar_bucket() {
    assert_eq!(
        public_url("1700000000123-me.png"),
        "/storage/v1/object/public/avatar/1700000000123-me.png"
    );
}

#[test]
fn upload_error_message_prefers_message_then_error() {
    let body = r#"{"message":"m1","error":"m2"}"#;
    assert_eq!(upload_error_message(400, body), "m1");

    let body = r#"{"error":"m2"}"#;
    assert_eq!(upload_error_message(400, body), "m2");
}

#[test]
fn upload_error_message_falls_back_to_status() {
    assert_eq!(
        upload_error_message(503, "<html>unavailable</html>"),
        "upload failed with status 503"
    );
}

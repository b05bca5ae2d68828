use super::*;

#[test]
fn mailto_url_carries_subject_and_body() {
    let url = mailto_url("landlord@example.com", "Regarding Lakeview", "Is it available?");
    assert_eq!(
        url,
        "mailto:landlord@example.com?subject=Regarding%20Lakeview&body=Is%20it%20available%3F"
    );
}

#[test]
fn reserved_characters_and_spaces_are_percent_encoded() {
    let url = mailto_url("l@example.com", "Regarding Lakeview Apartment", "see you; +1");
    assert!(!url.contains(' '));
    assert_eq!(
        url,
        "mailto:l@example.com?subject=Regarding%20Lakeview%20Apartment&body=see%20you%3B%20%2B1"
    );
}

#[test]
fn newlines_survive_as_percent_escapes() {
    let url = mailto_url("l@example.com", "Hi", "line one\nline two");
    assert!(url.ends_with("&body=line%20one%0Aline%20two"));
}

use std::collections::BTreeMap;

use scroblcli::lastfm::sig::api_signature;

fn params_from(pairs: &[(&'static str, &str)]) -> BTreeMap<&'static str, String> {
    pairs
        .iter()
        .map(|(key, value)| (*key, value.to_string()))
        .collect()
}

#[test]
fn test_signature_is_deterministic() {
    let params = params_from(&[("method", "auth.gettoken"), ("api_key", "KEY")]);

    let first = api_signature(&params, "SECRET");
    let second = api_signature(&params, "SECRET");
    assert_eq!(first, second);

    // Known digest of "api_keyKEYmethodauth.gettokenSECRET"
    assert_eq!(first, "37f34f9746b8cd194fa4c55224c1a954");
}

#[test]
fn test_signature_is_insertion_order_independent() {
    let forward = params_from(&[("a", "1"), ("b", "2"), ("c", "3")]);
    let backward = params_from(&[("c", "3"), ("b", "2"), ("a", "1")]);

    assert_eq!(
        api_signature(&forward, "SECRET"),
        api_signature(&backward, "SECRET")
    );
}

#[test]
fn test_signature_with_empty_secret() {
    // Keys are concatenated in lexicographic order, empty secret appended
    let params = params_from(&[("b", "2"), ("a", "1")]);

    // md5("a1b2")
    assert_eq!(api_signature(&params, ""), "f2e49af795161e14acf9d9245473a368");
}

#[test]
fn test_signature_over_empty_params_signs_secret_alone() {
    let params = BTreeMap::new();

    // md5("")
    assert_eq!(api_signature(&params, ""), "d41d8cd98f00b204e9800998ecf8427e");

    // Non-empty secret still yields a different, valid digest
    let signed = api_signature(&params, "SECRET");
    assert_eq!(signed.len(), 32);
    assert!(signed.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(signed, "d41d8cd98f00b204e9800998ecf8427e");
}

#[test]
fn test_signature_encodes_non_ascii_values_as_utf8() {
    let params = params_from(&[("artist", "Björk")]);

    // md5 over the UTF-8 bytes of "artistBjörkSECRET"
    assert_eq!(
        api_signature(&params, "SECRET"),
        "54b2be1b0a3acfb86ee4a013b914b974"
    );
}

#[test]
fn test_signature_is_lowercase_hex() {
    let params = params_from(&[("method", "track.scrobble")]);
    let signed = api_signature(&params, "S");

    assert_eq!(signed.len(), 32);
    assert!(
        signed
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    );
}

use std::collections::BTreeMap;

/// Computes the API signature Last.fm expects for a signed request.
///
/// Every parameter name is concatenated immediately followed by its value,
/// iterating in ascending lexicographic order of the names, then the shared
/// secret is appended and the MD5 digest of the UTF-8 bytes is returned as a
/// lowercase hex string. An empty parameter mapping is valid and signs the
/// secret alone.
///
/// `params` must not contain the `api_sig` field itself; the signature is
/// always computed over the plain parameters.
pub fn api_signature(params: &BTreeMap<&str, String>, secret_key: &str) -> String {
    debug_assert!(!params.contains_key("api_sig"));

    let mut sig_string = String::new();
    for (key, value) in params {
        sig_string.push_str(key);
        sig_string.push_str(value);
    }
    sig_string.push_str(secret_key);

    format!("{:x}", md5::compute(sig_string.as_bytes()))
}

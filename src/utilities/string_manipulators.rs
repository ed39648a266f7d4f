use regex::Regex;
use url::form_urlencoded;

lazy_static::lazy_static! {
    static ref QUERY_STRING: Regex = Regex::new(r"\?.*$").expect("query string pattern");
}

/// Encodes a card name so it can be used as a file name, `Charizard #4` becomes `Charizard+%234`.
pub fn encode_file_stem(name: &str) -> String {
    form_urlencoded::byte_serialize(name.as_bytes()).collect::<String>()
}

/// Drops everything from the first `?` on, removing size and cache-busting parameters.
pub fn strip_query(url: &str) -> String {
    QUERY_STRING.replace(url, "").to_string()
}

//! URL utility functions for reading query parameters

use web_sys::window;

/// Get a query parameter from the current URL.
/// Reads directly from window.location.search so it works before the
/// router's query map is initialized.
pub fn get_query_param(key: &str) -> Option<String> {
    let window = window()?;
    let location = window.location();
    let search = location.search().ok()?;

    if search.is_empty() {
        return None;
    }

    let query_string = search.strip_prefix('?').unwrap_or(&search);

    for pair in query_string.split('&') {
        if let Some(equal_pos) = pair.find('=') {
            let param_key = &pair[..equal_pos];
            let param_value = &pair[equal_pos + 1..];
            if param_key == key {
                return Some(
                    urlencoding::decode(param_value)
                        .unwrap_or_else(|_| param_value.into())
                        .into_owned(),
                );
            }
        } else if pair == key {
            // Parameter present without a value
            return Some(String::new());
        }
    }

    None
}

// Header lookup module
// The gateway forwards header names with client-chosen casing

use std::collections::HashMap;

/// Look up a header value by name, ignoring ASCII case.
///
/// The invocation contract delivers headers as a plain string map keyed by
/// whatever casing the client used (`origin`, `Origin`, `ORIGIN`), so a
/// direct map lookup is not enough.
pub fn get_header<'a>(headers: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

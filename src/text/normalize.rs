/// Replaces every line break with a space and trims the result.
pub fn remove_new_lines(body: &str) -> String {
    body.replace(['\n', '\r'], " ").trim().to_string()
}

use axum::http::HeaderValue;

fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// `attachment; filename="<name>"` with quotes, backslashes and control
/// characters replaced by `_`.
#[must_use]
pub fn attachment(filename: &str) -> HeaderValue {
    let value = format!("attachment; filename=\"{}\"", sanitize_filename(filename));
    HeaderValue::from_bytes(value.as_bytes())
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"))
}

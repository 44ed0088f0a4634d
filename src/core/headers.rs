use crate::domain::model::NameComponent;

/// `parsed_<component>` for every component, in canonical order.
pub fn parsed_headers() -> Vec<String> {
    NameComponent::ALL.iter().map(|c| c.column_name()).collect()
}

/// Output column order: the parsed columns, then either just the source field or
/// every original column. Nothing is de-duplicated.
pub fn compose_output_headers(
    input_headers: &[String],
    field_name: &str,
    save_names_only: bool,
) -> Vec<String> {
    let mut headers = parsed_headers();
    if save_names_only {
        headers.push(field_name.to_string());
    } else {
        headers.extend(input_headers.iter().cloned());
    }
    headers
}

/// Original headers that would clash with a parsed column.
pub fn colliding_headers(input_headers: &[String]) -> Vec<&str> {
    let parsed = parsed_headers();
    input_headers
        .iter()
        .filter(|h| parsed.contains(*h))
        .map(String::as_str)
        .collect()
}

pub mod sqlx_contribution_repository;
pub mod sqlx_place_repository;

/// `%term%` for `ILIKE ... ESCAPE '\'`, with LIKE wildcards in `term`
/// matched literally.
pub(crate) fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

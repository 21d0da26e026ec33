use super::types::FilterField;

/// Build one `IN` clause fragment for a field, numbering values 1..N.
///
/// Each value binds to a synthetic placeholder named after the column with a
/// 1-based counter, unique across fields when both are present.
pub(crate) fn build_clause(
    field: FilterField,
    values: &[String],
) -> (String, Vec<(String, String)>) {
    let mut params = Vec::with_capacity(values.len());
    let mut clause = format!(" AND {} IN (", field.column());

    for (no, value) in values.iter().enumerate() {
        let name = format!("{}{}", field.column(), no + 1);
        if no > 0 {
            clause.push(',');
        }
        clause.push('$');
        clause.push_str(&name);
        params.push((name, value.clone()));
    }

    clause.push(')');
    (clause, params)
}

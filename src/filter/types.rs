/// The closed set of filterable columns. Anything else fails the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    ContinentCode,
    ContinentName,
}

impl FilterField {
    /// Clause fragments are always emitted in this order, so the predicate
    /// text is deterministic for a given input string.
    pub const ALL: [FilterField; 2] = [FilterField::ContinentCode, FilterField::ContinentName];

    pub fn column(&self) -> &'static str {
        match self {
            FilterField::ContinentCode => "continent_code",
            FilterField::ContinentName => "continent_name",
        }
    }

    pub fn from_name(name: &str) -> Option<FilterField> {
        match name {
            "continent_code" => Some(FilterField::ContinentCode),
            "continent_name" => Some(FilterField::ContinentName),
            _ => None,
        }
    }
}

/// A parsed filter rendered as a SQL predicate.
///
/// `clause`/`params` carry named placeholders (`$continent_code1`, ...);
/// `positional` renders the same predicate with `$1..$N` placeholders and
/// the bind values in placeholder order. Values are never interpolated into
/// the clause text.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterPredicate {
    segments: Vec<(FilterField, Vec<String>)>,
    clause: String,
    params: Vec<(String, String)>,
}

impl FilterPredicate {
    pub(crate) fn new(
        segments: Vec<(FilterField, Vec<String>)>,
        clause: String,
        params: Vec<(String, String)>,
    ) -> Self {
        Self {
            segments,
            clause,
            params,
        }
    }

    pub fn clause(&self) -> &str {
        &self.clause
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Render the predicate with positional placeholders starting at
    /// `$<start>`, paired with the bind values in order.
    pub fn positional(&self, start: usize) -> (String, Vec<String>) {
        let mut clause = String::new();
        let mut values = Vec::with_capacity(self.params.len());
        let mut index = start;

        for (field, segment_values) in &self.segments {
            let placeholders: Vec<String> = segment_values
                .iter()
                .map(|_| {
                    let placeholder = format!("${}", index);
                    index += 1;
                    placeholder
                })
                .collect();
            clause.push_str(" AND ");
            clause.push_str(field.column());
            clause.push_str(" IN (");
            clause.push_str(&placeholders.join(","));
            clause.push(')');
            values.extend(segment_values.iter().cloned());
        }

        (clause, values)
    }
}

use super::error::FilterError;
use super::filter_clause::build_clause;
use super::types::{FilterField, FilterPredicate};
use crate::database::models::Country;

/// A parsed query-string filter: values OR'd within a field, fields AND'd
/// together. Order of appearance is preserved per field.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Filter {
    continent_codes: Vec<String>,
    continent_names: Vec<String>,
}

impl Filter {
    /// Parse the `field1:value1,field2:value2,...` mini-language.
    ///
    /// Any malformed token or unrecognized field fails the whole parse;
    /// there is no best-effort partial filtering.
    pub fn parse(input: &str) -> Result<Filter, FilterError> {
        let mut filter = Filter::default();
        if input.is_empty() {
            return Ok(filter);
        }

        for token in input.split(',') {
            let (field, value) = token
                .split_once(':')
                .ok_or_else(|| FilterError::UnknownFilter(token.to_string()))?;
            if field.is_empty() || value.is_empty() {
                return Err(FilterError::UnknownFilter(token.to_string()));
            }
            let field = FilterField::from_name(field)
                .ok_or_else(|| FilterError::UnknownFilter(token.to_string()))?;
            filter.push(field, value);
        }

        Ok(filter)
    }

    fn push(&mut self, field: FilterField, value: &str) {
        match field {
            FilterField::ContinentCode => self.continent_codes.push(value.to_string()),
            FilterField::ContinentName => self.continent_names.push(value.to_string()),
        }
    }

    pub fn values(&self, field: FilterField) -> &[String] {
        match field {
            FilterField::ContinentCode => &self.continent_codes,
            FilterField::ContinentName => &self.continent_names,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.continent_codes.is_empty() && self.continent_names.is_empty()
    }

    /// Evaluate the filter against a country in memory.
    pub fn matches(&self, country: &Country) -> bool {
        FilterField::ALL.iter().all(|&field| {
            let values = self.values(field);
            let actual = match field {
                FilterField::ContinentCode => &country.continent_code,
                FilterField::ContinentName => &country.continent_name,
            };
            values.is_empty() || values.iter().any(|v| v == actual)
        })
    }

    /// Render the filter as a SQL predicate with bound parameters, one
    /// clause fragment per populated field.
    pub fn predicate(&self) -> FilterPredicate {
        let mut segments = Vec::new();
        let mut clause = String::new();
        let mut params = Vec::new();

        for field in FilterField::ALL {
            let values = self.values(field);
            if values.is_empty() {
                continue;
            }
            let (fragment, bound) = build_clause(field, values);
            clause.push_str(&fragment);
            params.extend(bound);
            segments.push((field, values.to_vec()));
        }

        FilterPredicate::new(segments, clause, params)
    }
}

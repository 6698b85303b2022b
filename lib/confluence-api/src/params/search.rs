use crate::{Query, Validate, ValidationError, require};

/// CQL search across content, spaces and users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
#[query(rename_all = "camelCase")]
pub struct SearchParameters {
    /// Properties to expand.
    pub expand: Vec<String>,
    /// CQL query. Mandatory.
    pub cql: String,
    /// CQL context, as a JSON document.
    #[query(rename = "cqlcontext")]
    pub cql_context: String,
    /// Excerpt strategy, one of the `EXCERPT_*` constants.
    pub excerpt: String,
    /// Index of the first result.
    pub start: u32,
    /// Page size.
    pub limit: u32,
    /// Also search archived spaces.
    pub include_archived_spaces: bool,
}

impl SearchParameters {
    /// Excerpt from the search index.
    pub const EXCERPT_INDEXED: &'static str = "indexed";
    /// Excerpt with matches highlighted.
    pub const EXCERPT_HIGHLIGHT: &'static str = "highlight";
    /// No excerpt.
    pub const EXCERPT_NONE: &'static str = "none";

    /// Search with a CQL query.
    #[must_use]
    pub fn cql(cql: impl Into<String>) -> Self {
        Self {
            cql: cql.into(),
            ..Default::default()
        }
    }
}

impl Validate for SearchParameters {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.cql, "CQL query")
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;
    use crate::ToQueryPairs;

    #[test]
    fn cql_is_mandatory() {
        check!(SearchParameters::default().validate() == Err(ValidationError::Missing("CQL query")));
        check!(SearchParameters::cql("type=page").validate().is_ok());
    }

    #[test]
    fn search_query() {
        let params = SearchParameters {
            excerpt: SearchParameters::EXCERPT_NONE.to_string(),
            include_archived_spaces: true,
            ..SearchParameters::cql("space = TS")
        };

        check!(
            params.to_query_string()
                == "cql=space+%3D+TS&excerpt=none&includeArchivedSpaces=true"
        );
    }
}

//! Query pipeline: filter, then sort, then paginate.
//!
//! Every call recomputes all three stages from the full record slice. There is
//! no cache of filtered or sorted sets between calls, so the result is a pure
//! function of `(records, state)`.

use log::debug;

use crate::error::Result;
use crate::ordering::sort_records;
use crate::page::{total_pages, PageRequest};
use crate::record::Record;
use crate::result::QueryResult;
use crate::schema::Schema;
use crate::search::{filter_records, SearchTerm};
use crate::state::QueryState;
use crate::value::Value;

/// Runs queries against record slices described by one [`Schema`].
///
/// The engine holds nothing but the schema reference and is `Copy`; it may be
/// shared freely across threads as long as the record slice is not mutated
/// while a query is running.
///
/// # Example
///
/// ```
/// use leaderboard_query::{
///     Dir, FieldDef, FieldKind, Number, QueryEngine, QueryState, Schema, Value,
/// };
///
/// struct Row {
///     name: &'static str,
///     score: u32,
/// }
///
/// static SCHEMA: Schema = Schema::new(&[
///     FieldDef::new("name", FieldKind::String).searchable(),
///     FieldDef::new("score", FieldKind::Number),
/// ]);
///
/// fn accessor<'a>(row: &'a Row, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::String(row.name),
///         "score" => Value::Number(Number::from(row.score)),
///         _ => Value::None,
///     }
/// }
///
/// let rows = [
///     Row { name: "Storm", score: 30 },
///     Row { name: "Nova", score: 50 },
///     Row { name: "Blade", score: 40 },
/// ];
///
/// let state = QueryState::new("score", 2).with_sort("score", Dir::Desc);
/// let page = QueryEngine::new(&SCHEMA).run(&rows, &state, accessor).unwrap();
///
/// assert_eq!(page.total_matching, 3);
/// assert_eq!(page.total_pages, 2);
/// assert_eq!(page.records[0].name, "Nova");
/// assert_eq!(page.records[1].name, "Blade");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine {
    schema: &'static Schema,
}

impl QueryEngine {
    /// Creates an engine for records described by `schema`.
    pub fn new(schema: &'static Schema) -> Self {
        QueryEngine { schema }
    }

    /// Creates an engine from a [`Record`] type's own schema.
    pub fn for_record<T: Record>() -> Self {
        QueryEngine::new(T::schema())
    }

    /// Returns the schema this engine dispatches on.
    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// Runs the full pipeline.
    ///
    /// Inputs are validated before any record is touched: a zero page size
    /// or page index, or a sort field missing from the schema, fails without
    /// doing any work. An empty record slice is not an error.
    pub fn run<'a, T, F>(
        &self,
        records: &'a [T],
        state: &QueryState,
        accessor: F,
    ) -> Result<QueryResult<'a, T>>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        let page = PageRequest::new(state.page_index, state.page_size)?;
        let sort_field = self.schema.resolve(&state.sort_field)?;
        let term = SearchTerm::new(&state.search_term);

        let filtered = filter_records(records, &term, self.schema, &accessor);
        let total_matching = filtered.len();

        let sorted = sort_records(filtered, sort_field, state.sort_dir, &accessor)?;
        let total_pages = total_pages(total_matching, page.size());
        let visible = page.slice(&sorted).to_vec();

        debug!(
            "query search={:?} sort={} {} page={}/{} size={}: {} of {} matched, {} visible",
            term.as_str(),
            sort_field.name,
            state.sort_dir,
            page.index(),
            total_pages,
            page.size(),
            total_matching,
            records.len(),
            visible.len()
        );

        Ok(QueryResult {
            records: visible,
            total_matching,
            total_pages,
            page_index: page.index(),
            page_size: page.size(),
        })
    }
}

/// Runs the full pipeline for a [`Record`] type.
///
/// Shorthand for `QueryEngine::for_record::<T>().run(records, state, T::accessor)`.
pub fn query<'a, T: Record>(records: &'a [T], state: &QueryState) -> Result<QueryResult<'a, T>> {
    QueryEngine::for_record::<T>().run(records, state, T::accessor)
}

//! Property-based tests for the query pipeline using proptest.

use leaderboard_query::{
    query, total_pages, Dir, FieldDef, FieldKind, Number, QueryState, Record, Schema, Value,
};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: usize,
    name: String,
    score: i64,
}

static SCHEMA: Schema = Schema::new(&[
    FieldDef::new("id", FieldKind::Number),
    FieldDef::new("name", FieldKind::String).searchable(),
    FieldDef::new("score", FieldKind::Number),
]);

impl Record for Row {
    fn schema() -> &'static Schema {
        &SCHEMA
    }

    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::Number(Number::from(self.id)),
            "name" => Value::String(&self.name),
            "score" => Value::Number(Number::I64(self.score)),
            _ => Value::None,
        }
    }
}

// Few distinct scores so ties are common
fn rows_strategy() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(("[a-d]{1,6}", -5i64..5), 0..60).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(id, (name, score))| Row { id, name, score })
            .collect()
    })
}

fn dir_strategy() -> impl Strategy<Value = Dir> {
    prop_oneof![Just(Dir::Asc), Just(Dir::Desc)]
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Same inputs, same output.
    #[test]
    fn query_is_deterministic(
        rows in rows_strategy(),
        term in "[a-d]{0,2}",
        dir in dir_strategy(),
        size in 1usize..20,
        page in 1usize..5,
    ) {
        let state = QueryState::new("score", size)
            .with_search(term)
            .with_sort("score", dir)
            .with_page(page);

        let first = query(&rows, &state).unwrap();
        let second = query(&rows, &state).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Extending the search term never admits more records.
    #[test]
    fn longer_term_never_matches_more(
        rows in rows_strategy(),
        term in "[a-d]{0,2}",
        extra in "[a-d]",
    ) {
        let wide = QueryState::new("id", 10).with_search(term.clone());
        let narrow = QueryState::new("id", 10).with_search(format!("{}{}", term, extra));

        let wide = query(&rows, &wide).unwrap();
        let narrow = query(&rows, &narrow).unwrap();
        prop_assert!(narrow.total_matching <= wide.total_matching);
    }

    /// The filter never grows the collection, and an empty term keeps everything.
    #[test]
    fn filter_is_bounded(rows in rows_strategy(), term in "[a-d]{0,3}") {
        let all = query(&rows, &QueryState::new("id", 10)).unwrap();
        prop_assert_eq!(all.total_matching, rows.len());

        let some = query(&rows, &QueryState::new("id", 10).with_search(term)).unwrap();
        prop_assert!(some.total_matching <= rows.len());
    }

    /// Consecutive visible records respect the sort direction.
    #[test]
    fn page_is_ordered(rows in rows_strategy(), dir in dir_strategy()) {
        let state = QueryState::new("score", rows.len().max(1)).with_sort("score", dir);
        let result = query(&rows, &state).unwrap();

        for pair in result.records.windows(2) {
            match dir {
                Dir::Asc => prop_assert!(pair[0].score <= pair[1].score),
                Dir::Desc => prop_assert!(pair[0].score >= pair[1].score),
            }
        }
    }

    /// Records with equal keys keep collection order in both directions.
    #[test]
    fn ties_keep_collection_order(rows in rows_strategy(), dir in dir_strategy()) {
        let state = QueryState::new("score", rows.len().max(1)).with_sort("score", dir);
        let result = query(&rows, &state).unwrap();

        for pair in result.records.windows(2) {
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    /// Walking every page visits each match exactly once, in sorted order.
    #[test]
    fn pages_partition_the_matches(
        rows in rows_strategy(),
        term in "[a-d]{0,1}",
        size in 1usize..12,
    ) {
        let everything = QueryState::new("name", rows.len().max(1)).with_search(term.clone());
        let expected: Vec<usize> = query(&rows, &everything)
            .unwrap()
            .iter()
            .map(|row| row.id)
            .collect();

        let first = query(&rows, &QueryState::new("name", size).with_search(term.clone())).unwrap();
        prop_assert_eq!(first.total_pages, total_pages(expected.len(), size));

        let mut seen = Vec::new();
        for page in 1..=first.total_pages {
            let state = QueryState::new("name", size).with_search(term.clone()).with_page(page);
            let result = query(&rows, &state).unwrap();
            prop_assert!(result.len() <= size);
            prop_assert!(!result.is_empty());
            seen.extend(result.iter().map(|row| row.id));
        }
        prop_assert_eq!(seen, expected);
    }

    /// Pages past the end are empty but still report totals.
    #[test]
    fn page_past_end_is_empty(rows in rows_strategy(), size in 1usize..12) {
        let probe = query(&rows, &QueryState::new("id", size)).unwrap();
        let state = QueryState::new("id", size).with_page(probe.total_pages + 1);
        let result = query(&rows, &state).unwrap();

        prop_assert!(result.is_empty());
        prop_assert_eq!(result.total_matching, rows.len());
        prop_assert_eq!(result.total_pages, probe.total_pages);
    }

    /// Descending order yields the ascending key sequence reversed.
    #[test]
    fn desc_keys_reverse_asc_keys(rows in rows_strategy()) {
        let size = rows.len().max(1);
        let asc = query(&rows, &QueryState::new("score", size)).unwrap();
        let desc_state = QueryState::new("score", size).with_sort("score", Dir::Desc);
        let desc = query(&rows, &desc_state).unwrap();

        let mut asc_scores: Vec<i64> = asc.iter().map(|row| row.score).collect();
        let desc_scores: Vec<i64> = desc.iter().map(|row| row.score).collect();
        asc_scores.reverse();
        prop_assert_eq!(asc_scores, desc_scores);
    }

    /// Toggling the same field twice restores the ascending order.
    #[test]
    fn double_toggle_restores_order(rows in rows_strategy()) {
        let mut state = QueryState::new("score", rows.len().max(1));
        let before: Vec<usize> = query(&rows, &state).unwrap().iter().map(|row| row.id).collect();

        state.toggle_sort("score");
        state.toggle_sort("score");
        let after: Vec<usize> = query(&rows, &state).unwrap().iter().map(|row| row.id).collect();

        prop_assert_eq!(state.sort_dir, Dir::Asc);
        prop_assert_eq!(before, after);
    }
}

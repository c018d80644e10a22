use crate::ui::mvi::Reducer;

use super::intent::LookupIntent;
use super::state::LookupState;

/// Pure transitions for [`LookupState`]. Side effects (fetching, speaking,
/// timers) belong to the controller.
pub struct LookupReducer;

impl Reducer for LookupReducer {
    type State = LookupState;
    type Intent = LookupIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Results are dropped up front so the previous product never
            // shows while the new one is in flight.
            LookupIntent::Submit { code, generation } => LookupState {
                last_query: code,
                results: Vec::new(),
                search_performed: false,
                found: false,
                loading: true,
                displayed: None,
                error_message: None,
                generation,
            },

            LookupIntent::FetchSucceeded { products } => {
                let found = !products.is_empty();
                let displayed = products.first().cloned();
                LookupState {
                    results: products,
                    search_performed: true,
                    found,
                    loading: false,
                    displayed,
                    error_message: None,
                    ..state
                }
            }

            LookupIntent::FetchFailed { message } => LookupState {
                results: Vec::new(),
                search_performed: true,
                found: false,
                loading: false,
                displayed: None,
                error_message: Some(message),
                ..state
            },

            LookupIntent::Clear => LookupState {
                results: Vec::new(),
                search_performed: false,
                found: false,
                displayed: None,
                error_message: None,
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::Product;
    use serde_json::json;

    fn product(code: &str, price: &str) -> Product {
        serde_json::from_value(json!({
            "Codigo": code,
            "Nombre": "Leche 1L",
            "PrecioVenta": price
        }))
        .unwrap()
    }

    fn submitted(code: &str) -> LookupState {
        LookupReducer::reduce(
            LookupState::default(),
            LookupIntent::Submit {
                code: code.to_string(),
                generation: 1,
            },
        )
    }

    #[test]
    fn submit_starts_loading_and_forgets_previous_results() {
        let shown = LookupReducer::reduce(
            submitted("111"),
            LookupIntent::FetchSucceeded {
                products: vec![product("111", "500")],
            },
        );
        let state = LookupReducer::reduce(
            shown,
            LookupIntent::Submit {
                code: "222".to_string(),
                generation: 2,
            },
        );

        assert!(state.loading);
        assert!(!state.search_performed);
        assert!(state.results.is_empty());
        assert!(state.displayed.is_none());
        assert_eq!(state.last_query, "222");
        assert_eq!(state.generation, 2);
    }

    #[test]
    fn success_displays_head_of_results() {
        let state = LookupReducer::reduce(
            submitted("111"),
            LookupIntent::FetchSucceeded {
                products: vec![product("111", "500"), product("111", "600")],
            },
        );

        assert!(state.found);
        assert!(state.search_performed);
        assert!(!state.loading);
        assert_eq!(state.displayed.as_ref(), state.results.first());
        assert_eq!(state.displayed.unwrap().sell_price(), "500");
    }

    #[test]
    fn empty_success_is_not_found() {
        let state = LookupReducer::reduce(
            submitted("000"),
            LookupIntent::FetchSucceeded { products: vec![] },
        );

        assert!(!state.found);
        assert!(state.search_performed);
        assert!(state.displayed.is_none());
        assert!(state.error_message.is_none());
    }

    #[test]
    fn failure_keeps_query_and_records_message() {
        let state = LookupReducer::reduce(
            submitted("123"),
            LookupIntent::FetchFailed {
                message: "Error: timeout".to_string(),
            },
        );

        assert!(!state.loading);
        assert!(state.search_performed);
        assert!(!state.found);
        assert_eq!(state.error_message.as_deref(), Some("Error: timeout"));
        assert_eq!(state.last_query, "123");
    }

    #[test]
    fn clear_resets_everything_but_the_query() {
        let shown = LookupReducer::reduce(
            submitted("111"),
            LookupIntent::FetchSucceeded {
                products: vec![product("111", "500")],
            },
        );
        let state = LookupReducer::reduce(shown, LookupIntent::Clear);

        assert!(state.results.is_empty());
        assert!(!state.found);
        assert!(!state.search_performed);
        assert!(state.displayed.is_none());
        assert!(state.error_message.is_none());
        assert_eq!(state.last_query, "111");
        assert_eq!(state.generation, 1);
    }

    #[test]
    fn loading_and_search_performed_never_coexist() {
        let mut state = LookupState::default();
        let intents = vec![
            LookupIntent::Submit {
                code: "1".into(),
                generation: 1,
            },
            LookupIntent::FetchSucceeded {
                products: vec![product("1", "10")],
            },
            LookupIntent::Submit {
                code: "2".into(),
                generation: 2,
            },
            LookupIntent::FetchFailed {
                message: "boom".into(),
            },
            LookupIntent::Clear,
        ];
        for intent in intents {
            state = LookupReducer::reduce(state, intent);
            assert!(!(state.loading && state.search_performed));
        }
    }
}

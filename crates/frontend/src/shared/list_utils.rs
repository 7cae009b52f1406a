/// Search helpers for list pages
use super::config;
use super::hooks::use_debounced;
use super::icons::icon;
use leptos::prelude::*;
use std::time::Duration;

/// Trait for rows that can be matched by the list search box
pub trait Searchable {
    /// Text fields the query is matched against
    fn search_fields(&self) -> Vec<&str>;
}

/// Case-insensitive substring match over the row's search fields.
/// Queries shorter than `min_chars` match everything.
pub fn matches_search<T: Searchable>(item: &T, query: &str, min_chars: usize) -> bool {
    let query = query.trim();
    if query.chars().count() < min_chars {
        return true;
    }
    let query = query.to_lowercase();
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
}

pub fn filter_list<T: Searchable + Clone>(items: &[T], query: &str, min_chars: usize) -> Vec<T> {
    items
        .iter()
        .filter(|item| matches_search(*item, query, min_chars))
        .cloned()
        .collect()
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Receives the query once typing pauses
    #[prop(into)]
    on_search: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let delay = Duration::from_millis(config::current().ui.search_debounce_ms);
    let (input_value, set_input_value) = signal(String::new());
    let debounced = use_debounced(Signal::from(input_value), delay);

    Effect::new(move |_| {
        on_search.run(debounced.get());
    });

    view! {
        <div class="search-input">
            {icon("search")}
            <input
                type="text"
                class="form__input"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| set_input_value.set(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button
                    class="search-input__clear"
                    on:click=move |_| set_input_value.set(String::new())
                >
                    {icon("close")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        number: String,
        party: String,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.number.as_str(), self.party.as_str()]
        }
    }

    #[test]
    fn test_short_query_matches_everything() {
        let row = Row { number: "DC-1".into(), party: "BHEL".into() };
        assert!(matches_search(&row, "zz", 3));
        assert!(matches_search(&row, "   ", 3));
    }

    #[test]
    fn test_case_insensitive_match() {
        let row = Row { number: "DC-101".into(), party: "Bharat Heavy".into() };
        assert!(matches_search(&row, "heavy", 3));
        assert!(matches_search(&row, " dc-10 ", 3));
        assert!(!matches_search(&row, "invoice", 3));
    }
}

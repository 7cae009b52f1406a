use leptos::prelude::*;

/// Characters left before `max_length`; negative when over the limit.
pub fn remaining_chars(text: &str, max_length: usize) -> i64 {
    max_length as i64 - text.chars().count() as i64
}

/// Multi-line text input with an optional remaining-characters counter
#[component]
pub fn Textarea(
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional)]
    max_length: Option<usize>,
    #[prop(optional, into)]
    placeholder: String,
    #[prop(default = 3)]
    rows: u32,
) -> impl IntoView {
    view! {
        <div class="form__textarea">
            <textarea
                class="form__input"
                rows=rows.to_string()
                maxlength=max_length.map(|m| m.to_string())
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            ></textarea>
            {max_length.map(|max| view! {
                <span class=move || {
                    if remaining_chars(&value.get(), max) < 0 {
                        "form__counter form__counter--over"
                    } else {
                        "form__counter"
                    }
                }>
                    {move || remaining_chars(&value.get(), max)}
                </span>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_chars_counts_characters() {
        assert_eq!(remaining_chars("", 10), 10);
        assert_eq!(remaining_chars("ಕನ್ನಡ", 10), 5);
        assert_eq!(remaining_chars("abcdef", 4), -2);
    }
}

//! Labelled inputs bound to one field of a form signal.
//!
//! Accessors are plain `fn` pointers so the same helper serves any form
//! struct without boxing closures.

use leptos::prelude::*;

/// Text input bound to `get`/`set` on `form`
pub fn text_field<T>(
    label: &'static str,
    form: RwSignal<T>,
    get: fn(&T) -> String,
    set: fn(&mut T, String),
) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    input_field(label, "text", form, get, set)
}

/// Native date picker; the value stays ISO `YYYY-MM-DD`
pub fn date_field<T>(
    label: &'static str,
    form: RwSignal<T>,
    get: fn(&T) -> String,
    set: fn(&mut T, String),
) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    input_field(label, "date", form, get, set)
}

fn input_field<T>(
    label: &'static str,
    input_type: &'static str,
    form: RwSignal<T>,
    get: fn(&T) -> String,
    set: fn(&mut T, String),
) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    view! {
        <label class="form__field">
            <span class="form__label">{label}</span>
            <input
                type=input_type
                class="form__input"
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
        </label>
    }
}

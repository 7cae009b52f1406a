use crate::shared::format::format_quantity;
use leptos::prelude::*;

/// Parse user-typed numbers. `.` is the only decimal mark; `,` is accepted
/// as a digit-group separator in the integer part, Indian (`1,00,000`) or
/// Western (`100,000`). Misplaced separators, empty input and non-finite
/// values give `None`.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let plain = if text.contains(',') {
        strip_digit_groups(text)?
    } else {
        text.to_string()
    };
    plain.parse::<f64>().ok().filter(|v| v.is_finite())
}

// First group 1..=3 digits, inner groups 2 or 3, last group exactly 3.
fn strip_digit_groups(text: &str) -> Option<String> {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let is_digits = |group: &str| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit());
    let groups: Vec<&str> = integer.split(',').collect();
    let (first, rest) = groups.split_first()?;
    let (last, inner) = rest.split_last()?;
    let well_formed = is_digits(first)
        && first.len() <= 3
        && inner.iter().all(|g| is_digits(g) && (2..=3).contains(&g.len()))
        && is_digits(last)
        && last.len() == 3;
    if !well_formed {
        return None;
    }

    let mut plain = format!("{}{}", sign, groups.concat());
    if let Some(fraction) = fraction {
        plain.push('.');
        plain.push_str(fraction);
    }
    Some(plain)
}

/// Text input that reports a parsed number upward.
///
/// The raw text is kept locally so partial input like `"12."` survives
/// re-renders; the field is marked invalid while it does not parse.
#[component]
pub fn NumberInput(
    #[prop(into)]
    value: Signal<Option<f64>>,
    #[prop(into)]
    on_change: Callback<Option<f64>>,
    /// Values below `min` are reported but flagged invalid
    #[prop(optional)]
    min: Option<f64>,
    #[prop(optional, into)]
    placeholder: String,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let (text, set_text) = signal(
        value
            .get_untracked()
            .map(format_quantity)
            .unwrap_or_default(),
    );
    let (invalid, set_invalid) = signal(false);

    // Pick up changes made outside the input (e.g. form reset).
    Effect::new(move |_| {
        let external = value.get();
        if parse_number(&text.get_untracked()) != external {
            set_text.set(external.map(format_quantity).unwrap_or_default());
            set_invalid.set(false);
        }
    });

    view! {
        <input
            type="text"
            inputmode="decimal"
            class=move || if invalid.get() { "form__input form__input--invalid" } else { "form__input" }
            placeholder=placeholder
            disabled=move || disabled.get().unwrap_or(false)
            prop:value=move || text.get()
            on:input=move |ev| {
                let raw = event_target_value(&ev);
                let parsed = parse_number(&raw);
                let below_min = matches!((parsed, min), (Some(v), Some(m)) if v < m);
                set_invalid.set((!raw.trim().is_empty() && parsed.is_none()) || below_min);
                set_text.set(raw);
                on_change.run(parsed);
            }
        />
    }
}

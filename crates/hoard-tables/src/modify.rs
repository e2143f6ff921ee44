//! Modifier application.
//!
//! Turns a drawn clone into a varied instance: renames it through the
//! modifier's name template, then dispatches every property entry by its
//! value kind. The modifier itself is never mutated, so the registered
//! template stays reusable.

use hoard_core::{Item, Modifier, ModifierValue, PropValue, RangeSpec};
use rand::rngs::StdRng;

/// Apply one modifier to an item in place.
///
/// The name entry goes first: a template containing `$token` placeholders
/// substitutes each token with the lower-cased value of the item's
/// property of that name (missing properties become empty), while a plain
/// value is appended to the current name as a suffix. The remaining
/// entries then dispatch: callables are invoked with the item, arithmetic
/// rules are evaluated against the item's current numeric value at the key
/// (absent or non-numeric reads as zero), ranges and plain numbers sample
/// a fresh integer, and literals are assigned as-is.
pub fn apply_modifier(item: &mut Item, modifier: &Modifier, rng: &mut StdRng) {
    if let Some(template) = modifier.name() {
        item.name = render_name(item, template);
    }

    for (key, value) in modifier.entries() {
        match value {
            ModifierValue::Callable(f) => {
                let replacement = f(item);
                item.set(key.as_str(), replacement);
            }
            ModifierValue::Rule(rule) => {
                let base = item.get(key).and_then(|v| v.as_f64()).unwrap_or(0.0);
                item.set(key.as_str(), PropValue::from_f64(rule.evaluate(base)));
            }
            ModifierValue::Range(spec) => {
                item.set(key.as_str(), PropValue::Integer(spec.sample(rng)));
            }
            ModifierValue::Upto(n) => {
                let sampled = RangeSpec::upto(*n).sample(rng);
                item.set(key.as_str(), PropValue::Integer(sampled));
            }
            ModifierValue::Text(s) => {
                item.set(key.as_str(), PropValue::String(s.clone()));
            }
        }
    }
}

/// Build the new item name from a template.
///
/// Tokens are `$` followed by word characters; each resolves to the
/// lower-cased rendering of the item's property of that name, or to an
/// empty string. The first doubled space left by an empty substitution is
/// collapsed and the result trimmed. Templates without `$` are suffixes.
fn render_name(item: &Item, template: &str) -> String {
    if !template.contains('$') {
        return format!("{} {}", item.name, template);
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let token_len = after
            .chars()
            .take_while(|c| c.is_alphanumeric() || *c == '_')
            .map(char::len_utf8)
            .sum::<usize>();
        if token_len == 0 {
            out.push('$');
            rest = after;
            continue;
        }
        let token = &after[..token_len];
        if let Some(value) = item.get(token) {
            out.push_str(&value.to_string().to_lowercase());
        }
        rest = &after[token_len..];
    }
    out.push_str(rest);

    out.replacen("  ", " ", 1).trim().to_owned()
}

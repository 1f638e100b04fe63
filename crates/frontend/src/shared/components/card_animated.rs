//! Thaw [`Card`] that fades in on mount (`@keyframes card-appear` in `styles.css`).
//!
//! Pass growing `delay_ms` values to stagger a grid of cards.

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    /// Extra CSS classes for the card root
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}

/// Stagger step for the `index`-th card in a grid, capped so long lists do not lag
pub fn stagger_delay(index: usize) -> u32 {
    (index.min(8) as u32) * 60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay_is_capped() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(2), 120);
        assert_eq!(stagger_delay(50), stagger_delay(8));
    }
}

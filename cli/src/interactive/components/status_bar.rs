//! Status bar with key hints and loading state

use crate::interactive::animation::SpinnerAnimation;
use iocraft::prelude::*;

/// Key hints shown on the right of the status bar
pub const KEY_HINTS: &str = "↑/↓ select · PgUp/PgDn scroll · e expand · s sidebar · q quit";

#[derive(Default, Props)]
pub struct StatusBarProps {
    /// Label of the page being loaded, if any
    pub loading: Option<String>,
    /// Scroll position summary
    pub position: String,
}

/// Text shown while a page is loading
pub fn loading_text(spinner: &str, label: &str) -> String {
    format!("{} Loading {}…", spinner, label)
}

#[component]
pub fn StatusBar(mut hooks: Hooks, props: &StatusBarProps) -> impl Into<AnyElement<'static>> {
    let spinner = hooks.use_state(SpinnerAnimation::new);

    let timer_tick = hooks.use_state(|| 0u64);
    let interval = spinner.read().frame_interval();
    let mut timer_tick_clone = timer_tick;
    hooks.use_future(async move {
        loop {
            tokio::time::sleep(interval).await;
            timer_tick_clone.set(timer_tick_clone.get().wrapping_add(1));
        }
    });

    let left = match &props.loading {
        Some(label) => loading_text(spinner.read().current_char(), label),
        None => props.position.clone(),
    };

    element! {
        View(
            height: 1,
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
        ) {
            Text(
                content: left,
                color: if props.loading.is_some() { Color::Yellow } else { Color::DarkGrey },
                weight: if props.loading.is_some() { Weight::Bold } else { Weight::Normal },
            )
            Text(content: KEY_HINTS, color: Color::DarkGrey)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_text() {
        assert_eq!(loading_text("✻", "Home"), "✻ Loading Home…");
    }

    #[test]
    fn test_status_bar_props_default() {
        let props = StatusBarProps::default();
        assert!(props.loading.is_none());
    }
}

//! Animation widget
//!
//! Terminals cannot draw Lottie vector frames, so the widget plays the
//! animation's timeline as a progress bar inside a box of the configured
//! height.

use crate::interactive::animation::FramePlayer;
use crate::output::AnimationView;
use iocraft::prelude::*;

#[derive(Default, Props)]
pub struct AnimationWidgetProps {
    pub view: AnimationView,
}

#[component]
pub fn AnimationWidget(
    mut hooks: Hooks,
    props: &AnimationWidgetProps,
) -> impl Into<AnyElement<'static>> {
    let view = &props.view;
    let player = hooks.use_state({
        let summary = view.summary.clone();
        move || FramePlayer::new(&summary)
    });

    // Redraw at the animation's frame rate
    let tick = hooks.use_state(|| 0u64);
    let interval = player.read().redraw_interval();
    let mut tick_clone = tick;
    hooks.use_future(async move {
        loop {
            tokio::time::sleep(interval).await;
            tick_clone.set(tick_clone.get().wrapping_add(1));
        }
    });

    let player = player.read().clone();
    let timeline = format!(
        "{}  {}/{}",
        player.progress_bar(24),
        player.current_frame() + 1,
        player.frames()
    );

    element! {
        View(
            height: u32::from(view.rows),
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            border_style: BorderStyle::Round,
            border_color: Color::Magenta,
            padding_left: 2,
            padding_right: 2,
        ) {
            #(view.caption_lines().into_iter().enumerate().map(|(index, caption)| element! {
                Text(key: index, content: caption, color: Color::Magenta, weight: Weight::Bold)
            }))
            Text(content: timeline, color: Color::DarkMagenta)
        }
    }
}

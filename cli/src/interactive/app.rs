//! Interactive application using iocraft

use crate::interactive::components::{ContentPane, Sidebar, StatusBar};
use crate::interactive::message::{AppMessage, PageView};
use crate::interactive::selection::{
    key_action, max_offset, visible_range, KeyAction, SelectionState,
};
use crate::output::{layout, LayoutOptions};
use anyhow::Result;
use comment_docs_core::{Dispatcher, Page, SiteMetadata, ViewerConfig};
use crossterm::terminal::SetTitle;
use crossterm::ExecutableCommand;
use iocraft::prelude::*;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, warn};

/// Sidebar width in cells
pub const SIDEBAR_WIDTH: u16 = 32;

/// Rows reserved below the content pane
const STATUS_ROWS: u16 = 1;

/// Narrowest content width the layout is computed for
const MIN_CONTENT_WIDTH: usize = 20;

/// Shared handles for the application component
#[derive(Clone)]
pub struct AppContext {
    pub dispatcher: Dispatcher,
    pub ui_sender: broadcast::Sender<AppMessage>,
}

#[derive(Default, Props)]
pub struct AppProps {
    pub context: Option<AppContext>,
}

/// Interactive mode using iocraft
pub async fn run_interactive(dispatcher: Dispatcher) -> Result<()> {
    let title = window_title(&dispatcher.config().site);
    if let Err(e) = std::io::stdout().execute(SetTitle(&title)) {
        debug!("Could not set terminal title: {}", e);
    }

    let (ui_sender, _) = broadcast::channel::<AppMessage>(64);
    let context = AppContext {
        dispatcher,
        ui_sender,
    };

    // The blocking pool keeps the tokio context, so page loads and timers
    // inside the smol-driven render loop still reach the tokio reactor
    tokio::task::spawn_blocking(move || {
        smol::block_on(async move { element!(App(context: Some(context))).fullscreen().await })
    })
    .await??;

    Ok(())
}

/// Render `page` on the runtime and report back on the UI channel
fn spawn_dispatch(context: &AppContext, page: Page, request: u64) {
    let dispatcher = context.dispatcher.clone();
    let ui_sender = context.ui_sender.clone();
    tokio::spawn(async move {
        let message = match dispatcher.dispatch(page).await {
            Ok(document) => AppMessage::PageLoaded {
                page,
                request,
                document,
            },
            Err(e) => {
                warn!("Failed to render '{}': {}", page, e);
                AppMessage::PageFailed {
                    page,
                    request,
                    error: e.to_string(),
                }
            }
        };
        let _ = ui_sender.send(message);
    });
}

/// Terminal window title: the page icon followed by the site title
pub fn window_title(site: &SiteMetadata) -> String {
    match site.page_icon.trim() {
        "" => site.page_title.clone(),
        icon => format!("{} {}", icon, site.page_title),
    }
}

/// Content area size left after the sidebar, padding and status bar
pub fn content_area(
    config: &ViewerConfig,
    width: u16,
    height: u16,
    sidebar_visible: bool,
) -> (usize, usize) {
    let padding = config.layout;
    let sidebar = if sidebar_visible { SIDEBAR_WIDTH } else { 0 };
    let chrome_width = usize::from(sidebar) + usize::from(padding.left) + usize::from(padding.right);
    let chrome_height = usize::from(STATUS_ROWS) + usize::from(padding.top) + usize::from(padding.bottom);
    let width = usize::from(width).saturating_sub(chrome_width);
    let height = usize::from(height).saturating_sub(chrome_height);
    (width.max(MIN_CONTENT_WIDTH), height.max(1))
}

/// Main application component
#[component]
pub fn App(mut hooks: Hooks, props: &AppProps) -> impl Into<AnyElement<'static>> {
    let mut system = hooks.use_context_mut::<SystemContext>();
    let (terminal_width, terminal_height) = hooks.use_terminal_size();
    let context = props.context.clone();

    let selection = hooks.use_state({
        let context = context.clone();
        move || match &context {
            Some(context) => SelectionState::new(
                context.dispatcher.registry().pages(),
                context.dispatcher.initial_page(),
            )
            .with_sidebar(context.dispatcher.config().site.sidebar_expanded),
            None => SelectionState::new(Vec::new(), Page::Home),
        }
    });
    let view = hooks.use_state(PageView::default);
    let latest_request = hooks.use_state(|| 0u64);
    // (max scroll offset, rows per page) of the last render
    let viewport = hooks.use_state(|| (0usize, 1usize));
    let should_exit = hooks.use_state(|| false);

    // Page loader: renders requested pages and applies the latest result
    hooks.use_future({
        let context = context.clone();
        let mut view = view;
        let latest_request = latest_request;
        let selection = selection;
        async move {
            let Some(context) = context else {
                return;
            };
            let mut rx = context.ui_sender.subscribe();

            if let Some(page) = selection.read().current() {
                spawn_dispatch(&context, page, latest_request.get());
            }

            loop {
                match rx.recv().await {
                    Ok(message) => {
                        if let AppMessage::PageRequested { page, request } = &message {
                            spawn_dispatch(&context, *page, *request);
                        }
                        let mut current = view.read().clone();
                        if current.apply(&message, latest_request.get()) {
                            view.set(current);
                        } else {
                            debug!(
                                "Dropping stale message for '{}' (request {})",
                                message.page(),
                                message.request()
                            );
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        debug!("UI channel lagged, skipped {} messages", skipped);
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        }
    });

    // Handle terminal events
    hooks.use_terminal_events({
        let ui_sender = context.as_ref().map(|c| c.ui_sender.clone());
        let mut selection = selection;
        let mut latest_request = latest_request;
        let mut view = view;
        let viewport = viewport;
        let mut should_exit = should_exit;
        move |event| {
            let TerminalEvent::Key(KeyEvent {
                code,
                modifiers,
                kind,
                ..
            }) = event
            else {
                return;
            };
            if kind == KeyEventKind::Release {
                return;
            }

            let Some(action) = key_action(code, modifiers) else {
                return;
            };
            if action == KeyAction::Quit {
                should_exit.set(true);
                return;
            }

            let (max_scroll, page_rows) = viewport.get();
            let mut state = selection.read().clone();
            if state.apply(action, max_scroll, page_rows) {
                if let Some(page) = state.current() {
                    let request = latest_request.get() + 1;
                    latest_request.set(request);
                    view.set(PageView::Loading);
                    if let Some(ui_sender) = &ui_sender {
                        let _ = ui_sender.send(AppMessage::PageRequested { page, request });
                    }
                }
            }
            selection.set(state);
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let config = context
        .as_ref()
        .map(|c| c.dispatcher.config().clone())
        .unwrap_or_default();
    let labels: Vec<String> = context
        .as_ref()
        .map(|c| {
            c.dispatcher
                .menu()
                .into_iter()
                .map(|(_, label)| label.to_string())
                .collect()
        })
        .unwrap_or_default();

    let state = selection.read().clone();
    let current = view.read().clone();
    let (content_width, content_height) =
        content_area(&config, terminal_width, terminal_height, state.sidebar_visible);

    let items = match &current {
        PageView::Ready(document) => layout(
            document,
            &LayoutOptions {
                width: content_width,
                expand_all: state.expand_all,
            },
        ),
        _ => Vec::new(),
    };

    let max_scroll = max_offset(&items, content_height);
    if viewport.get() != (max_scroll, content_height) {
        let mut viewport = viewport;
        viewport.set((max_scroll, content_height));
    }
    let range = visible_range(&items, state.scroll.min(max_scroll), content_height);
    let position = if items.is_empty() {
        String::new()
    } else {
        format!("{}-{} of {}", range.start + 1, range.end, items.len())
    };

    let loading = state
        .current()
        .filter(|_| current.is_loading())
        .map(|page| page.label().to_string());

    let body: AnyElement<'static> = match &current {
        PageView::Loading => element! {
            Text(content: "Loading…", color: Color::DarkGrey)
        }
        .into_any(),
        PageView::Failed(error) => element! {
            Text(content: format!("⚠ {}", error), color: Color::Red)
        }
        .into_any(),
        PageView::Ready(_) => element! {
            ContentPane(items: items[range].to_vec())
        }
        .into_any(),
    };

    let padding = config.layout;
    let site = &config.site;

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
        ) {
            View(flex_grow: 1.0, flex_direction: FlexDirection::Row) {
                #(if state.sidebar_visible {
                    Some(element! {
                        Sidebar(
                            title: site.sidebar_title.clone(),
                            prompt: site.selection_prompt.clone(),
                            footer: site.sidebar_footer.clone(),
                            labels: labels,
                            selected: state.selected_index(),
                            width: SIDEBAR_WIDTH,
                        )
                    })
                } else {
                    None
                })
                View(
                    flex_grow: 1.0,
                    flex_direction: FlexDirection::Column,
                    padding_top: u32::from(padding.top),
                    padding_right: u32::from(padding.right),
                    padding_bottom: u32::from(padding.bottom),
                    padding_left: u32::from(padding.left),
                ) {
                    #(body)
                }
            }
            StatusBar(loading: loading, position: position)
        }
    }
}

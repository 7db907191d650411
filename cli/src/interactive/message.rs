//! Messages exchanged between the key handler and the page loader

use comment_docs_core::{Document, Page};

/// Events on the UI channel
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The selection changed and `page` must be rendered
    PageRequested { page: Page, request: u64 },
    /// A render pass finished
    PageLoaded {
        page: Page,
        request: u64,
        document: Document,
    },
    /// A render pass failed
    PageFailed {
        page: Page,
        request: u64,
        error: String,
    },
}

impl AppMessage {
    /// Page the message is about
    pub fn page(&self) -> Page {
        match self {
            AppMessage::PageRequested { page, .. }
            | AppMessage::PageLoaded { page, .. }
            | AppMessage::PageFailed { page, .. } => *page,
        }
    }

    pub fn request(&self) -> u64 {
        match self {
            AppMessage::PageRequested { request, .. }
            | AppMessage::PageLoaded { request, .. }
            | AppMessage::PageFailed { request, .. } => *request,
        }
    }
}

/// What the content pane shows
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PageView {
    #[default]
    Loading,
    Ready(Document),
    Failed(String),
}

impl PageView {
    /// Apply a loader result if it answers the latest request
    pub fn apply(&mut self, message: &AppMessage, latest: u64) -> bool {
        if message.request() != latest {
            return false;
        }
        match message {
            AppMessage::PageRequested { .. } => *self = PageView::Loading,
            AppMessage::PageLoaded { document, .. } => *self = PageView::Ready(document.clone()),
            AppMessage::PageFailed { error, .. } => *self = PageView::Failed(error.clone()),
        }
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PageView::Loading)
    }
}

//! Server-rendered page for trying the relay from a browser.

pub mod page;
pub mod view;

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use tracing::warn;

use crate::relay::ProcessRequest;
use crate::state::AppState;
use view::{Notice, WorkbenchForm, WorkbenchView};

pub async fn show() -> Html<String> {
    Html(page::render(&WorkbenchView::default()))
}

pub async fn submit(State(state): State<AppState>, Form(form): Form<WorkbenchForm>) -> Html<String> {
    Html(page::render(&process_form(&state, form).await))
}

/// Run one submission. On any failure the previous output is redrawn as is.
pub async fn process_form(state: &AppState, form: WorkbenchForm) -> WorkbenchView {
    let mut view = WorkbenchView::from_form(&form);

    if form.text.trim().is_empty() {
        view.notice = Some(Notice::no_text());
        return view;
    }

    let request = ProcessRequest {
        text: Some(form.text),
        action: form.action,
        style: Some(view.style.clone()),
    };

    match state.relay.process(request).await {
        Ok(result) => {
            view.output = Some(result.result);
            if let Some(language) = result.detected_language {
                view.detected_language = Some(language);
            }
            view.notice = Some(Notice::processed());
        }
        Err(e) => {
            warn!("Workbench request failed: {}", e);
            view.notice = Some(Notice::failed());
        }
    }
    view
}

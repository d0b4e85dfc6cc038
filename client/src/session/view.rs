//! Pure projection of state onto what the panels render.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::state::entries::KeyValues;
use crate::state::resource::ResourceState;
use crate::state::session::SessionState;
use crate::util::decode::safe_decode;

/// One rendered table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayRow {
    pub key: String,
    pub value: String,
}

/// How values are turned into text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueMode {
    Verbatim,
    PercentDecoded,
}

/// What a panel shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelView {
    Loading,
    Error(String),
    LoginAction,
    Empty,
    Table(Vec<DisplayRow>),
}

#[must_use]
pub fn display_rows(entries: &KeyValues, mode: ValueMode) -> Vec<DisplayRow> {
    entries
        .iter()
        .map(|(key, value)| {
            let text = value.display();
            let value = match mode {
                ValueMode::Verbatim => text,
                ValueMode::PercentDecoded => safe_decode(&text),
            };
            DisplayRow { key: key.to_owned(), value }
        })
        .collect()
}

fn table_or_empty(entries: &KeyValues, mode: ValueMode) -> PanelView {
    if entries.is_empty() {
        PanelView::Empty
    } else {
        PanelView::Table(display_rows(entries, mode))
    }
}

/// Session panel projection.
#[must_use]
pub fn project_session(state: &SessionState) -> PanelView {
    match state {
        SessionState::Idle | SessionState::Resolving => PanelView::Loading,
        SessionState::Authenticated { profile } => table_or_empty(profile, ValueMode::Verbatim),
        SessionState::NeedsLogin => PanelView::LoginAction,
        SessionState::Failed { message } => PanelView::Error(message.clone()),
    }
}

/// Informational panel projection.
#[must_use]
pub fn project_resource(state: &ResourceState<KeyValues>, mode: ValueMode) -> PanelView {
    if let Some(entries) = state.ready() {
        return table_or_empty(entries, mode);
    }
    state.error().map_or(PanelView::Loading, |message| PanelView::Error(message.to_owned()))
}

use crate::analysis::{reference_link, ResolutionSnapshot, ResolutionStatus};
use crate::app::mode::AppMode;

/// Tag as shown in an analysis row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTag {
    pub name: &'static str,
    /// The tag has a reference link
    pub linked: bool,
}

/// One analysis row: the token and its tags (empty for unknown words)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRow {
    pub token: String,
    pub tags: Vec<RenderTag>,
}

/// Render state for UI components
#[derive(Debug, Clone)]
pub struct RenderState {
    pub mode: AppMode,
    pub input: String,
    pub cursor_column: u16,
    /// Sentence echo, present once something was submitted
    pub sentence: Option<String>,
    pub rows: Vec<RenderRow>,
    /// (row, tag) of the highlighted tag in Browse mode
    pub selected: Option<(usize, usize)>,
    pub status: ResolutionStatus,
    pub progress: (usize, usize),
    pub message: Option<String>,
}

impl RenderState {
    /// Create an empty render state for when nothing was submitted yet
    pub fn empty(mode: AppMode) -> Self {
        Self {
            mode,
            input: String::new(),
            cursor_column: 0,
            sentence: None,
            rows: vec![],
            selected: None,
            status: ResolutionStatus::Idle,
            progress: (0, 0),
            message: None,
        }
    }

    /// Create render state from the session snapshot
    pub fn from_snapshot(mode: AppMode, snapshot: &ResolutionSnapshot) -> Self {
        let rows = build_rows(snapshot);
        let progress = match snapshot.status {
            ResolutionStatus::Resolving { done, total } => (done, total),
            _ => (snapshot.mapping.len(), snapshot.mapping.len()),
        };

        Self {
            mode,
            input: String::new(),
            cursor_column: 0,
            sentence: (snapshot.generation > 0).then(|| snapshot.sentence.clone()),
            rows,
            selected: None,
            status: snapshot.status.clone(),
            progress,
            message: None,
        }
    }
}

pub fn build_rows(snapshot: &ResolutionSnapshot) -> Vec<RenderRow> {
    snapshot
        .mapping
        .iter()
        .map(|entry| RenderRow {
            token: entry.token.clone(),
            tags: entry
                .tags
                .iter()
                .map(|tag| RenderTag {
                    name: tag.name(),
                    linked: !reference_link(tag).is_empty(),
                })
                .collect(),
        })
        .collect()
}

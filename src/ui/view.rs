use crate::analysis::ResolutionStatus;
use crate::app::{AppMode, RenderRow, RenderState};
use crate::ui::theme::Theme;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub const ANALYSIS_HEADER: &str = "Разбор: ";
pub const UNKNOWN_WORD: &str = " Слово не известно";

const HELP_LINES: [&str; 7] = [
    "Enter       analyze the sentence",
    "Esc         clear the sentence",
    "Tab         browse tags / back to the sentence",
    "Arrows      move between tags",
    "Enter       copy the tag reference link",
    ":h :help    this help",
    ":q :quit    quit (also Ctrl+C)",
];

pub fn render_input(input: &str, mode: AppMode, theme: &Theme) -> Paragraph<'static> {
    let border = if mode == AppMode::Input {
        theme.text
    } else {
        theme.dimmed
    };

    Paragraph::new(input.to_string())
        .style(Style::default().fg(theme.text).bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(" Готово: Enter "),
        )
}

pub fn render_sentence(sentence: &str, theme: &Theme) -> Paragraph<'static> {
    Paragraph::new(format!("Предложение: {}", sentence))
        .style(Style::default().fg(theme.text).bg(theme.background))
        .wrap(Wrap { trim: false })
}

/// Analysis block: one line per token, tag names styled as links.
pub fn render_analysis(
    rows: &[RenderRow],
    selected: Option<(usize, usize)>,
    theme: &Theme,
) -> Paragraph<'static> {
    Paragraph::new(analysis_lines(rows, selected, theme))
        .style(Style::default().bg(theme.background))
        .wrap(Wrap { trim: false })
}

/// "Разбор:" header followed by `token - Tag, Tag,` lines. Linked tags are
/// underlined and the selected tag is reversed.
pub fn analysis_lines(
    rows: &[RenderRow],
    selected: Option<(usize, usize)>,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let text_style = Style::default().fg(theme.text);
    let mut lines = Vec::with_capacity(rows.len() + 1);

    if !rows.is_empty() {
        lines.push(Line::from(Span::styled(ANALYSIS_HEADER, text_style)));
    }

    for (row_index, row) in rows.iter().enumerate() {
        let mut spans = vec![Span::styled(format!("{} -", row.token), text_style)];

        if row.tags.is_empty() {
            spans.push(Span::styled(UNKNOWN_WORD, text_style));
        }

        for (tag_index, tag) in row.tags.iter().enumerate() {
            let mut style = Style::default().fg(theme.link);
            if tag.linked {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            if selected == Some((row_index, tag_index)) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(format!(" {},", tag.name), style));
        }

        lines.push(Line::from(spans));
    }

    lines
}

/// Bottom line: command message, else resolution progress, else key hints.
pub fn render_status(state: &RenderState, theme: &Theme) -> Line<'static> {
    let text = match (&state.message, &state.status) {
        (Some(message), _) => message.clone(),
        (None, ResolutionStatus::Resolving { done, total }) => {
            format!("Разбор… {}/{}", done, total)
        }
        (None, ResolutionStatus::Failed(reason)) => format!("Ошибка: {}", reason),
        (None, ResolutionStatus::Cancelled) => "Разбор прерван".to_string(),
        (None, _) => match state.mode {
            AppMode::Browse => "←/→ tag  Enter copy link  Tab back".to_string(),
            _ => "Enter analyze  Tab tags  :h help  :q quit".to_string(),
        },
    };

    Line::from(Span::styled(text, Style::default().fg(theme.dimmed))).alignment(Alignment::Left)
}

pub fn render_help(theme: &Theme) -> Paragraph<'static> {
    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|line| Line::from(Span::styled(*line, Style::default().fg(theme.text))))
        .collect();

    Paragraph::new(lines)
        .style(Style::default().bg(theme.background))
        .block(Block::default().borders(Borders::ALL).title(" Help "))
}

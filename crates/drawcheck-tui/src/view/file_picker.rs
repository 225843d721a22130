use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::app::App;

/// Render the file picker screen into the given area.
pub fn render_in(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let picker = &app.file_picker;

    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Length(1), // current dir
        Constraint::Min(5),    // file list
        Constraint::Length(3), // selected summary
        Constraint::Length(1), // footer
    ])
    .split(area);

    // Header
    let header = Line::from(vec![
        Span::styled(" Files ", theme.header_style()),
        Span::styled(
            " > Select a drawing to review",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(header), chunks[0]);

    // Current directory
    let dir_display = picker.current_dir.display().to_string();
    let dir_line = Line::from(vec![
        Span::styled(" \u{1F4C1} ", Style::default().fg(theme.active)),
        Span::styled(dir_display, Style::default().fg(theme.dim)),
    ]);
    f.render_widget(Paragraph::new(dir_line), chunks[1]);

    // File list
    let visible_height = chunks[2].height.saturating_sub(2) as usize; // borders
    let scroll_offset = if picker.cursor >= visible_height {
        picker.cursor - visible_height + 1
    } else {
        0
    };

    let items: Vec<ListItem> = picker
        .entries
        .iter()
        .skip(scroll_offset)
        .take(visible_height)
        .map(|entry| {
            let (icon, style) = if entry.is_dir {
                ("\u{1F4C1} ", Style::default().fg(theme.active))
            } else if entry.is_drawing {
                if picker.is_marked(&entry.path) {
                    (
                        "\u{2713} ",
                        Style::default()
                            .fg(theme.selected)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    ("\u{1F4D0} ", Style::default().fg(theme.text))
                }
            } else {
                ("  ", Style::default().fg(theme.dim))
            };

            ListItem::new(Line::from(vec![
                Span::styled(icon, style),
                Span::styled(&entry.name, style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(" Files "),
        )
        .highlight_style(theme.highlight_style());

    let adjusted_cursor = picker.cursor.saturating_sub(scroll_offset);
    let mut state = ListState::default();
    state.select(Some(adjusted_cursor));
    f.render_stateful_widget(list, chunks[2], &mut state);

    // Selected summary
    let summary_lines = match &picker.marked {
        None => vec![
            Line::from(Span::styled(
                "  No drawing selected",
                Style::default().fg(theme.dim),
            )),
            Line::from(Span::styled(
                format!(
                    "  Navigate to a drawing ({}) and press Space or Enter",
                    drawcheck_core::SUPPORTED_EXTENSIONS.join("/")
                ),
                Style::default().fg(theme.dim),
            )),
        ],
        Some(path) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());
            vec![
                Line::from(Span::styled(
                    "  Selected: ",
                    Style::default()
                        .fg(theme.selected)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("  {}", name),
                    Style::default().fg(theme.text),
                )),
            ]
        }
    };
    let summary = Paragraph::new(summary_lines).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(theme.border_style()),
    );
    f.render_widget(summary, chunks[3]);

    // Footer
    let footer = Line::from(Span::styled(
        " j/k:navigate  Enter:open dir / pick  Space:mark  Esc:done  ?:help  q:quit",
        theme.footer_style(),
    ));
    f.render_widget(Paragraph::new(footer), chunks[4]);
}

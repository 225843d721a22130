use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::App;
use crate::view::truncate;

/// Render the review form: upload affordance plus the two result panels.
///
/// Each result panel is rendered only while its string is non-empty, so
/// before the first submit the screen shows just the instructions.
pub fn render_in(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let has_text = !app.extracted_text.is_empty();
    let has_review = !app.review_result.is_empty();

    let mut constraints = vec![
        Constraint::Length(1), // header
        Constraint::Length(1), // selected drawing
    ];
    if !has_text && !has_review {
        constraints.push(Constraint::Min(5)); // instructions
    }
    if has_text {
        if has_review {
            constraints.push(Constraint::Percentage(50));
        } else {
            constraints.push(Constraint::Min(5));
        }
    }
    if has_review {
        constraints.push(Constraint::Min(5));
    }
    constraints.push(Constraint::Length(1)); // footer

    let chunks = Layout::vertical(constraints).split(area);
    let mut idx = 0;

    // Header
    let header = Line::from(vec![
        Span::styled(" Drawcheck ", theme.header_style()),
        Span::styled(
            " Electrical drawing review",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(header), chunks[idx]);
    idx += 1;

    // Selected drawing
    let selected_line = match &app.selected_drawing {
        Some(path) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());
            let max = (chunks[idx].width as usize).saturating_sub(4);
            Line::from(vec![
                Span::styled(" \u{1F4D0} ", Style::default().fg(theme.selected)),
                Span::styled(truncate(&name, max), Style::default().fg(theme.text)),
            ])
        }
        None => Line::from(Span::styled(
            " No drawing selected",
            Style::default().fg(theme.dim),
        )),
    };
    f.render_widget(Paragraph::new(selected_line), chunks[idx]);
    idx += 1;

    // Instructions (only while both result strings are empty)
    if !has_text && !has_review {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Choose an electrical drawing, then press Enter to submit it for review.",
                Style::default().fg(theme.text),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("  Accepted formats: ", Style::default().fg(theme.dim)),
                Span::styled(
                    drawcheck_core::SUPPORTED_EXTENSIONS.join(", "),
                    Style::default().fg(theme.active),
                ),
            ]),
            Line::from(Span::styled(
                "  The format list filters the picker; a file chosen another way is accepted as-is.",
                Style::default().fg(theme.dim),
            )),
        ];
        let instructions = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border_style())
                    .title(" Upload "),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(instructions, chunks[idx]);
        idx += 1;
    }

    if has_text {
        let panel = Paragraph::new(app.extracted_text.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border_style())
                    .title(" Extracted Text "),
            )
            .wrap(Wrap { trim: false })
            .scroll((app.panel_scroll, 0));
        f.render_widget(panel, chunks[idx]);
        idx += 1;
    }

    if has_review {
        let panel = Paragraph::new(app.review_result.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border_style())
                    .title(" Compliance Review "),
            )
            .wrap(Wrap { trim: false })
            .scroll((app.panel_scroll, 0));
        f.render_widget(panel, chunks[idx]);
        idx += 1;
    }

    // Footer
    let footer_text = if has_text || has_review {
        " o:choose drawing  Enter/r:submit  j/k:scroll  ?:help  q:quit"
    } else {
        " o:choose drawing  Enter/r:submit  ?:help  q:quit"
    };
    let footer = Line::from(Span::styled(footer_text, theme.footer_style()));
    f.render_widget(Paragraph::new(footer), chunks[idx]);
}

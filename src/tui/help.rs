use ratatui::{
    layout::Rect,
    style::Color,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

fn key_line(key: &'static str, pad: usize, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(key, Style::default().fg(Color::Magenta)),
        Span::raw(" ".repeat(pad)),
        Span::raw(desc),
    ])
}

pub fn draw_help(area: Rect, f: &mut Frame) {
    let p = Paragraph::new(vec![
        Line::from("Keybinds:"),
        Line::from(vec![
            Span::raw("  "),
            Span::styled("Ctrl-C", Style::default().fg(Color::Magenta)),
            Span::raw("      Quit"),
        ]),
        key_line("F1", 10, "Toggle this help"),
        Line::from(""),
        Line::from("Search:"),
        key_line("Enter", 7, "Look up the typed username"),
        key_line("Esc", 9, "Quit"),
        Line::from(""),
        Line::from("Results:"),
        Line::from(vec![
            Span::raw("  "),
            Span::styled("←/→", Style::default().fg(Color::Magenta)),
            Span::raw(" or "),
            Span::styled("h/l", Style::default().fg(Color::Magenta)),
            Span::raw("  Previous/next page"),
        ]),
        key_line("tab", 9, "Switch table"),
        key_line("s", 11, "Cycle rows per page (5/10/25)"),
        key_line("r", 11, "Reload"),
        key_line("b", 11, "Back to home"),
        key_line("q", 11, "Quit"),
    ])
    .block(Block::default().borders(Borders::ALL).title("Help"));
    f.render_widget(Clear, area);
    f.render_widget(p, area);
}

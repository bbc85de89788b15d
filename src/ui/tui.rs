use crate::app::state::AppState;
use crate::render::chart;
use anyhow::Result;
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Terminal;
use std::io::{self, Stdout};

pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let stdout = io::stdout();
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    pub fn enter(&mut self) -> Result<()> {
        execute!(io::stdout(), EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        self.terminal.clear()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    pub fn draw(&mut self, app: &AppState) -> Result<()> {
        self.terminal.draw(|f| {
            let size = f.size();

            let mut base_style = Style::default().fg(app.theme.color_text());
            if !app.config.transparent_background {
                base_style = base_style.bg(app.theme.color_base());
            }
            f.render_widget(ratatui::widgets::Clear, size);
            f.render_widget(ratatui::widgets::Block::default().style(base_style), size);

            if size.width < 40 || size.height < 10 {
                f.render_widget(
                    Paragraph::new("Terminal too small").style(Style::default().fg(app.theme.color_subtext())),
                    size,
                );
                return;
            }

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
                .split(size);

            chart::render(f, rows[0], app);
            f.render_widget(Paragraph::new(legend(app)), rows[1]);

            let footer = format!(
                "policy: {}  p: next policy  c: circles  s: recolor  q: quit",
                app.config.policy.as_label()
            );
            f.render_widget(
                Paragraph::new(footer).style(Style::default().fg(app.theme.color_subtext())),
                rows[2],
            );
        })?;
        Ok(())
    }
}

fn legend(app: &AppState) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, m) in app.measurements.iter().enumerate() {
        let pair = app.color_pair(i);
        spans.push(Span::styled("■", Style::default().fg(app.theme.color(pair.neon))));
        spans.push(Span::styled("■ ", Style::default().fg(app.theme.color(pair.dark))));
        spans.push(Span::styled(
            format!("{}  ", m.label),
            Style::default().fg(app.theme.color_text()),
        ));
    }
    spans.push(Span::styled("● height", Style::default().fg(app.theme.color_peak())));
    Line::from(spans)
}

//! Terminal chart for sampled Brownian paths.

use std::io::{self, Stdout};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

use pricer_pricing::brownian::BrownianPath;

use crate::Result;

const PALETTE: [Color; 5] = [Color::Cyan, Color::Yellow, Color::Green, Color::Red, Color::Magenta];

/// Alternate-screen terminal restored on drop.
struct PlotWindow {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl PlotWindow {
    fn open() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Drop for PlotWindow {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Axis bounds covering every path, with a margin on the value axis.
fn chart_bounds(paths: &[BrownianPath]) -> ([f64; 2], [f64; 2]) {
    let (low, high) = paths
        .iter()
        .filter_map(BrownianPath::value_range)
        .fold((0.0_f64, 0.0_f64), |(lo, hi), (l, h)| (lo.min(l), hi.max(h)));
    let margin = ((high - low) * 0.05).max(0.1);
    ([0.0, 1.0], [low - margin, high + margin])
}

fn draw_paths(frame: &mut Frame, paths: &[BrownianPath], series: &[Vec<(f64, f64)>]) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(frame.size());

    let (x_bounds, y_bounds) = chart_bounds(paths);

    let datasets: Vec<Dataset> = paths
        .iter()
        .zip(series)
        .enumerate()
        .map(|(k, (path, data))| {
            Dataset::default()
                .name(format!("n = {}", path.step_count()))
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(PALETTE[k % PALETTE.len()]))
                .data(data)
        })
        .collect();

    let x_labels: Vec<Span> = ["0", "0.5", "1"].into_iter().map(Span::raw).collect();
    let y_labels: Vec<Span> = vec![
        Span::raw(format!("{:.2}", y_bounds[0])),
        Span::raw(format!("{:.2}", (y_bounds[0] + y_bounds[1]) / 2.0)),
        Span::raw(format!("{:.2}", y_bounds[1])),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" Brownian Motion Paths ")
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .title("t")
                .style(Style::default().fg(Color::Gray))
                .bounds(x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("W(t)")
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds)
                .labels(y_labels),
        );

    frame.render_widget(chart, chunks[0]);

    let footer = Paragraph::new(Line::from(" Press any key to close "))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, chunks[1]);
}

/// Shows `paths` in a full-screen chart until a key is pressed.
pub fn show_paths(paths: &[BrownianPath]) -> Result<()> {
    let series: Vec<Vec<(f64, f64)>> = paths.iter().map(BrownianPath::points).collect();
    let mut window = PlotWindow::open()?;

    loop {
        window.terminal.draw(|frame| draw_paths(frame, paths, &series))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                break;
            }
        }
    }

    Ok(())
}

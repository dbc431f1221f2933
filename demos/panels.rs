//! Panels demo: a ratio-driven layout that follows terminal resizes.
//!
//! Usage: `cargo run --example panels -- [RATIO]`, for example `3:2:1`.
//! The screen is split into columns by RATIO (default `1:1`); the last
//! column is split again into vertical thirds. Press `q` or Esc to quit.
//! Logs go to `vexes-demo.log` (filter with `RUST_LOG`).

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::fs::File;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use vexes::layout::{v_thirds, Ratio};
use vexes::{layout, Panel, Rect, Screen, Vec2};

const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let ratio: Ratio = std::env::args().nth(1).as_deref().unwrap_or("1:1").parse()?;

    let log = File::create("vexes-demo.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_writer(Mutex::new(log))
        .with_ansi(false)
        .init();

    let mut screen = Screen::new()?;
    let rects = arrange(&ratio, screen.bounds());
    let mut panels: Vec<Panel> = rects
        .iter()
        .enumerate()
        .map(|(i, rect)| Panel::new(*rect, format!(" panel {i} ")))
        .collect();
    redraw(&mut screen, &mut panels)?;

    loop {
        if !event::poll(TICK)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    break;
                }
            }
            Event::Resize(width, height) => {
                screen.resize(width, height);
                for (panel, rect) in panels.iter_mut().zip(arrange(&ratio, screen.bounds())) {
                    panel.resize(rect);
                }
                redraw(&mut screen, &mut panels)?;
            }
            _ => {}
        }
    }

    Ok(())
}

/// Columns by `ratio`, with the last column cut into thirds.
fn arrange(ratio: &Ratio, bounds: Rect) -> Vec<Rect> {
    let mut rects = layout::horizontal(ratio, Some(bounds));
    if let Some(last) = rects.pop() {
        rects.extend(v_thirds(Some(last)));
    }
    rects
}

fn redraw(screen: &mut Screen, panels: &mut [Panel]) -> std::io::Result<()> {
    for panel in panels.iter_mut() {
        panel.draw();
        let size = panel.global().dim();
        let label = format!("{}x{}", size.x, size.y);
        panel
            .surface_mut()
            .put_str(Vec2::new(2, 2), &label, vexes::Style::DEFAULT);
    }
    screen.present(panels)?;
    Ok(())
}

use std::cell::RefCell;
use std::fs::File;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{Event as CrosstermEvent, KeyCode};
use simplelog::{Config, LevelFilter, WriteLogger};
use tickbox::{Canvas, Checkbox, CheckboxDelegate, Color, Rect, Scene, Terminal, TouchEvent};

const SIZE: f64 = 24.0;

/// Status line updated by the first checkbox.
#[derive(Default)]
struct StatusLabel {
    text: RefCell<String>,
}

impl CheckboxDelegate for StatusLabel {
    fn checkbox_toggled(&self, is_on: bool) {
        let state = if is_on { "on" } else { "off" };
        *self.text.borrow_mut() = format!("Checkbox 1 is checked {state}.");
    }
}

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let label = Rc::new(StatusLabel::default());
    let mut checkboxes = build_checkboxes(&label);
    // set_on does not notify, so seed the label from the initial state.
    label.checkbox_toggled(checkboxes[0].is_on());

    let mut term = Terminal::new()?;
    let mut tracking: Option<usize> = None;
    let mut last_frame = Instant::now();

    loop {
        let now = Instant::now();
        let dt = now - last_frame;
        last_frame = now;
        for checkbox in &mut checkboxes {
            checkbox.advance(dt);
        }

        draw(&mut term, &checkboxes, &label.text.borrow())?;

        for event in term.poll(Some(Duration::from_millis(16)))? {
            match event {
                CrosstermEvent::Key(key) if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) => {
                    return Ok(());
                }
                CrosstermEvent::Mouse(mouse) => {
                    let Some(touch) = TouchEvent::from_mouse(&mouse) else {
                        continue;
                    };
                    match touch {
                        TouchEvent::Began { location } => {
                            // The touch belongs to whichever control it started on.
                            tracking = checkboxes
                                .iter()
                                .position(|checkbox| checkbox.frame().contains(location));
                            if let Some(index) = tracking {
                                checkboxes[index].handle_touch(touch);
                            }
                        }
                        TouchEvent::Ended { .. } | TouchEvent::Cancelled => {
                            if let Some(index) = tracking.take() {
                                let outcome = checkboxes[index].handle_touch(touch);
                                log::debug!("[demo] checkbox {} -> {:?}", index + 1, outcome);
                            }
                        }
                    }
                }
                _ => {}
            }
        }
    }
}

/// Three configurations: styled check, static check, and blue X.
fn build_checkboxes(label: &Rc<StatusLabel>) -> Vec<Checkbox<Scene>> {
    let mut first = Checkbox::new(Rect::new(4.0, 4.0, SIZE, 6.0), Scene::new());
    first.set_delegate(label);
    first.set_on(true, false);
    first.set_animate_on_toggle(true);
    first.set_animation_duration(Duration::from_millis(350));
    first.set_background_color(Color::from_components(0.5, 1.0, 1.0, 0.2));
    first.set_box_border_width(0.04 * SIZE);
    first.set_box_border_color(Color::from_components(0.0, 0.0, 0.8, 1.0));
    first.set_checkmark_color(Color::from_components(1.0, 0.0, 0.0, 1.0));
    first.set_checkmark_stroke_width(SIZE * 0.14);
    first.set_use_x_mark(false);

    let mut second = Checkbox::new(Rect::new(0.0, 0.0, 10.0, 10.0), Scene::new());
    second.adjust_frame(Rect::new(34.0, 4.0, SIZE, 6.0));
    second.set_animate_on_toggle(false);
    second.set_on(true, false);

    let mut third = Checkbox::new(Rect::new(64.0, 4.0, SIZE, 6.0), Scene::new());
    third.set_on(true, false);
    third.set_use_x_mark(true);
    third.set_checkmark_color(Color::rgb(0, 0, 255));
    third.set_animate_on_toggle(true);
    third.set_animation_duration(Duration::from_secs(1));

    vec![first, second, third]
}

fn draw(term: &mut Terminal, checkboxes: &[Checkbox<Scene>], status: &str) -> std::io::Result<()> {
    let (cols, rows) = term.size()?;
    let backdrop = Color::oklch(0.97, 0.004, 286.0).to_rgb();
    let ink = Color::oklch(0.2, 0.0, 0.0).to_rgb();
    let mut canvas = Canvas::for_terminal(cols, rows, backdrop);
    for checkbox in checkboxes {
        canvas.paint_scene(checkbox.surface(), checkbox.frame().origin());
    }

    let mut frame = canvas.to_buffer();
    let text_row = ((4.0 + SIZE) / 2.0) as u16 + 1;
    frame.put_str(4, text_row, status, ink);
    frame.put_str(4, text_row + 2, "click a box to toggle, q to quit", ink);
    term.render(&frame)
}

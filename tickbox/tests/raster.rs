use std::time::Duration;

use tickbox::buffer::HALF_BLOCK;
use kurbo::{BezPath, Line, Shape as _};
use tickbox::{Buffer, Canvas, Cell, Checkbox, Color, DrawSurface, Point, Rect, Rgb, Scene, Shape};

const BLACK: Rgb = Rgb::new(0, 0, 0);
const RED: Rgb = Rgb::new(255, 0, 0);

fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> BezPath {
    kurbo::Rect::new(x0, y0, x1, y1).to_path(0.1)
}

fn pixels(canvas: &Canvas) -> impl Iterator<Item = Rgb> + '_ {
    (0..canvas.height())
        .flat_map(move |y| (0..canvas.width()).map(move |x| (x, y)))
        .filter_map(|(x, y)| canvas.pixel(x, y))
}

fn painted(canvas: &Canvas) -> usize {
    pixels(canvas).filter(|p| *p != BLACK).count()
}

fn count(canvas: &Canvas, color: Rgb) -> usize {
    pixels(canvas).filter(|p| *p == color).count()
}

// =============================================================================
// Fills and Strokes
// =============================================================================

#[test]
fn test_fill_covers_pixel_centers() {
    let mut scene = Scene::new();
    let path = square(2.0, 2.0, 6.0, 6.0);
    scene.attach(Shape::new(path).fill(Color::rgb(255, 0, 0)));

    let mut canvas = Canvas::new(10, 10, BLACK);
    canvas.paint_scene(&scene, Point::ZERO);

    assert_eq!(painted(&canvas), 16);
    assert_eq!(canvas.pixel(2, 2), Some(RED));
    assert_eq!(canvas.pixel(5, 5), Some(RED));
    assert_eq!(canvas.pixel(6, 6), Some(BLACK));
}

#[test]
fn test_origin_offsets_scene() {
    let mut scene = Scene::new();
    let path = square(0.0, 0.0, 1.0, 1.0);
    scene.attach(Shape::new(path).fill(Color::rgb(255, 0, 0)));

    let mut canvas = Canvas::new(10, 10, BLACK);
    canvas.paint_scene(&scene, Point::new(4.0, 7.0));

    assert_eq!(painted(&canvas), 1);
    assert_eq!(canvas.pixel(4, 7), Some(RED));
}

#[test]
fn test_stroke_reveal_limits_painted_length() {
    let mut scene = Scene::new();
    let line = Line::new((0.0, 0.5), (10.0, 0.5)).to_path(0.1);
    let id = scene.attach(Shape::new(line).stroke(Color::rgb(255, 0, 0), 1.0));
    scene.animate_stroke_reveal(id, Duration::from_millis(100));
    scene.advance(Duration::from_millis(50));

    let mut canvas = Canvas::new(10, 1, BLACK);
    canvas.paint_scene(&scene, Point::ZERO);

    assert_eq!(canvas.pixel(0, 0), Some(RED));
    assert_eq!(canvas.pixel(4, 0), Some(RED));
    assert_eq!(canvas.pixel(6, 0), Some(BLACK));
    assert_eq!(canvas.pixel(9, 0), Some(BLACK));
}

#[test]
fn test_translucent_fill_blends() {
    let mut scene = Scene::new();
    let path = square(0.0, 0.0, 1.0, 1.0);
    scene.attach(Shape::new(path).fill(Color::rgba(200, 100, 0, 0.5)));

    let mut canvas = Canvas::new(1, 1, BLACK);
    canvas.paint_scene(&scene, Point::ZERO);
    assert_eq!(canvas.pixel(0, 0), Some(Rgb::new(100, 50, 0)));
}

#[test]
fn test_fully_faded_layers_are_skipped() {
    let mut scene = Scene::new();
    let path = square(0.0, 0.0, 1.0, 1.0);
    let id = scene.attach(Shape::new(path).fill(Color::rgb(255, 0, 0)));
    scene.fade_out(id, Duration::from_millis(10));
    scene.advance(Duration::from_millis(10));

    let mut canvas = Canvas::new(1, 1, BLACK);
    canvas.paint_scene(&scene, Point::ZERO);
    assert_eq!(canvas.pixel(0, 0), Some(BLACK));
}

// =============================================================================
// Checkbox Rendering
// =============================================================================

#[test]
fn test_checkbox_mark_shows_up_when_on() {
    let mut checkbox = Checkbox::new(Rect::from_size(24.0, 24.0), Scene::new());
    checkbox.set_animate_on_toggle(false);
    checkbox.set_checkmark_color(Color::rgb(255, 0, 0));

    let mut off = Canvas::new(24, 24, BLACK);
    off.paint_scene(checkbox.surface(), Point::ZERO);

    checkbox.set_on(true, false);
    let mut on = Canvas::new(24, 24, BLACK);
    on.paint_scene(checkbox.surface(), Point::ZERO);

    assert_eq!(count(&off, RED), 0);
    assert!(count(&on, RED) > 0);
    // Background panel is white at its center while off.
    assert_eq!(off.pixel(12, 9), Some(Rgb::new(255, 255, 255)));
}

#[test]
fn test_restyling_keeps_mark_above_panel_and_outline() {
    let mut checkbox = Checkbox::new(Rect::from_size(100.0, 100.0), Scene::new());
    checkbox.set_animate_on_toggle(false);
    checkbox.set_checkmark_color(Color::rgb(255, 0, 0));
    checkbox.set_on(true, false);

    // Check elbow, inside the opaque background panel.
    let elbow_is_red = |checkbox: &Checkbox<Scene>| {
        let mut canvas = Canvas::new(100, 100, BLACK);
        canvas.paint_scene(checkbox.surface(), Point::ZERO);
        canvas.pixel(48, 65) == Some(RED)
    };
    let paint_order = |checkbox: &Checkbox<Scene>| {
        checkbox
            .surface()
            .layers()
            .iter()
            .map(|layer| Some(layer.id()))
            .collect::<Vec<_>>()
    };
    let expected_order = |checkbox: &Checkbox<Scene>| {
        vec![
            checkbox.background_layer(),
            checkbox.outline_layer(),
            checkbox.mark_layer(),
        ]
    };
    assert!(elbow_is_red(&checkbox));

    checkbox.set_background_color(Color::WHITE);
    assert_eq!(paint_order(&checkbox), expected_order(&checkbox));
    assert!(elbow_is_red(&checkbox));

    checkbox.set_box_border_color(Color::rgb(0, 0, 200));
    assert_eq!(paint_order(&checkbox), expected_order(&checkbox));
    assert!(elbow_is_red(&checkbox));

    checkbox.set_box_border_width(8.0);
    assert_eq!(paint_order(&checkbox), expected_order(&checkbox));
    assert!(elbow_is_red(&checkbox));

    checkbox.set_background_color(Color::rgb(0, 255, 0));
    assert_eq!(paint_order(&checkbox), expected_order(&checkbox));
    assert!(elbow_is_red(&checkbox));
}

// =============================================================================
// Buffer Conversion
// =============================================================================

#[test]
fn test_to_buffer_packs_two_rows_per_cell() {
    let mut canvas = Canvas::for_terminal(2, 2, BLACK);
    assert_eq!(canvas.height(), 4);

    let mut scene = Scene::new();
    let top_left = square(0.0, 0.0, 1.0, 1.0);
    scene.attach(Shape::new(top_left).fill(Color::rgb(255, 0, 0)));
    canvas.paint_scene(&scene, Point::ZERO);

    let buffer = canvas.to_buffer();
    assert_eq!((buffer.width(), buffer.height()), (2, 2));
    assert_eq!(buffer.get(0, 0), Some(&Cell::pixels(RED, BLACK)));
    assert_eq!(buffer.get(1, 1), Some(&Cell::pixels(BLACK, BLACK)));
    assert_eq!(buffer.get(0, 0).map(|c| c.char), Some(HALF_BLOCK));
}

#[test]
fn test_buffer_text_and_diff() {
    let mut previous = Buffer::new(8, 2);
    previous.fill(Cell::pixels(BLACK, BLACK));
    let mut next = previous.clone();
    next.put_str(1, 1, "on!", RED);
    next.put_str(6, 0, "clipped", RED);

    let changed: Vec<(u16, u16, char)> = next
        .diff(&previous)
        .map(|(x, y, cell)| (x, y, cell.char))
        .collect();
    assert_eq!(
        changed,
        vec![(6, 0, 'c'), (7, 0, 'l'), (1, 1, 'o'), (2, 1, 'n'), (3, 1, '!')]
    );
    assert_eq!(next.get(1, 1).map(|c| c.bg), Some(BLACK));

    let resized = Buffer::new(4, 1);
    assert_eq!(resized.diff(&previous).count(), 4);
}

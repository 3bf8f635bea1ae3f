use inkboard::draw::{BLACK, HISTORY_CAPACITY, RED, WHITE};
use inkboard::engine::{Command, Engine};
use inkboard::input::{PointerInput, Tool};
use inkboard::script;

fn new_engine() -> Engine {
    Engine::new(64, 48, WHITE, BLACK, 5)
}

fn drag(engine: &mut Engine, from: (f64, f64), to: (f64, f64)) {
    engine.pointer_down(&PointerInput::mouse(from.0, from.1));
    engine.pointer_move(&PointerInput::mouse(to.0, to.1));
    engine.pointer_up();
}

#[test]
fn dot_then_undo_round_trips_through_the_script_driver() {
    let mut engine = new_engine();
    script::replay(&mut engine, "down 10 10\nup\nundo\n").expect("script should replay");

    assert_eq!(engine.history_len(), 1);
    assert_eq!(engine.canvas().pixel(10, 10).unwrap(), WHITE.to_rgba8());
}

#[test]
fn history_depth_is_bounded_over_long_sessions() {
    let mut engine = new_engine();

    for i in 0..25 {
        let x = 3.0 + (i % 10) as f64 * 6.0;
        let y = 4.0 + (i / 10) as f64 * 8.0;
        drag(&mut engine, (x, y), (x, y));
    }
    assert_eq!(engine.history_len(), HISTORY_CAPACITY);
}

#[test]
fn winding_drag_commits_the_same_rectangle_as_a_direct_one() {
    let mut winding = new_engine();
    winding.select_tool(Tool::Rectangle);
    winding.pointer_down(&PointerInput::mouse(10.0, 10.0));
    for (x, y) in [(50.0, 8.0), (20.0, 40.0), (55.0, 44.0), (40.0, 30.0)] {
        winding.pointer_move(&PointerInput::mouse(x, y));
    }
    winding.pointer_up();

    let mut direct = new_engine();
    direct.select_tool(Tool::Rectangle);
    direct.pointer_down(&PointerInput::mouse(10.0, 10.0));
    direct.pointer_move(&PointerInput::mouse(40.0, 30.0));
    direct.pointer_up();

    // Every intermediate preview must have vanished without a trace.
    assert_eq!(winding.canvas().image(), direct.canvas().image());
}

#[test]
fn touch_and_mouse_gestures_paint_identically() {
    let mut mouse = new_engine();
    mouse.pointer_down(&PointerInput::mouse(12.0, 20.0));
    mouse.pointer_move(&PointerInput::mouse(30.0, 26.0));
    mouse.pointer_up();

    let mut touch = new_engine();
    touch.pointer_down(&PointerInput::touch(12.0, 20.0));
    touch.pointer_move(&PointerInput::touch(30.0, 26.0));
    touch.pointer_up();

    assert_eq!(mouse.canvas().image(), touch.canvas().image());
}

#[test]
fn eraser_round_trip_restores_the_selected_color() {
    let mut engine = new_engine();

    engine.apply(Command::SetColor(RED));
    engine.apply(Command::SelectTool(Tool::Eraser));
    assert_eq!(engine.tools().color(), WHITE);

    engine.apply(Command::SelectTool(Tool::Brush));
    assert_eq!(engine.tools().color(), RED);

    drag(&mut engine, (10.0, 10.0), (10.0, 10.0));
    assert_eq!(engine.canvas().pixel(10, 10).unwrap(), RED.to_rgba8());
}

#[test]
fn erased_pixels_match_the_background() {
    let mut engine = new_engine();

    drag(&mut engine, (10.0, 10.0), (30.0, 10.0));
    assert_eq!(engine.canvas().pixel(20, 10).unwrap(), BLACK.to_rgba8());

    engine.select_tool(Tool::Eraser);
    drag(&mut engine, (8.0, 10.0), (32.0, 10.0));

    assert_eq!(*engine.canvas().image(), *new_engine().canvas().image());
}

#[test]
fn resize_keeps_the_drawing_anchored_at_the_origin() {
    let mut engine = new_engine();
    drag(&mut engine, (5.0, 5.0), (20.0, 5.0));

    engine.resize(128, 96);
    assert_eq!(engine.canvas().pixel(12, 5).unwrap(), BLACK.to_rgba8());
    assert_eq!(engine.canvas().pixel(100, 80).unwrap(), WHITE.to_rgba8());
}

#[test]
fn clear_discards_history_for_good() {
    let mut engine = new_engine();
    drag(&mut engine, (10.0, 10.0), (20.0, 10.0));
    drag(&mut engine, (10.0, 20.0), (20.0, 20.0));

    engine.apply(Command::Clear);
    engine.apply(Command::Undo);
    engine.apply(Command::Undo);

    assert_eq!(engine.history_len(), 1);
    assert_eq!(*engine.canvas().image(), *new_engine().canvas().image());
}

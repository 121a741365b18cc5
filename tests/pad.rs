use drawpad::draw::color::{BLACK, BLUE, RED};
use drawpad::input::{InputEvent, TouchPoint};
use drawpad::util::Coordinate;
use drawpad::{DrawPad, FixedContainer, PadConfig};

fn make_pad(width: i32, height: i32) -> DrawPad<FixedContainer> {
    DrawPad::init(FixedContainer::new(width, height), PadConfig::default()).unwrap()
}

fn down(x: f64, y: f64) -> InputEvent {
    InputEvent::PointerDown {
        offset_x: x,
        offset_y: y,
    }
}

fn motion(x: f64, y: f64) -> InputEvent {
    InputEvent::PointerMove {
        offset_x: x,
        offset_y: y,
    }
}

fn opaque_at(pad: &DrawPad<FixedContainer>, x: i32, y: i32) -> bool {
    pad.surface().pixel(x, y).map(|px| px.a == 255).unwrap_or(false)
}

fn clear_at(pad: &DrawPad<FixedContainer>, x: i32, y: i32) -> bool {
    pad.surface()
        .pixel(x, y)
        .map(|px| px.is_transparent())
        .unwrap_or(false)
}

#[test]
fn nothing_drawn_outside_a_stroke() {
    let mut pad = make_pad(100, 100);

    pad.handle_event(&motion(10.0, 10.0));
    pad.handle_event(&motion(90.0, 90.0));
    assert!(pad.surface().is_blank());

    pad.handle_event(&down(20.0, 20.0));
    pad.handle_event(&motion(60.0, 20.0));
    pad.handle_event(&InputEvent::PointerUp);
    let finished = pad.surface().pixels();
    assert!(!pad.surface().is_blank());

    pad.handle_event(&motion(20.0, 80.0));
    pad.handle_event(&motion(80.0, 80.0));
    assert_eq!(pad.surface().pixels(), finished);
}

#[test]
fn leave_and_cancel_end_the_stroke() {
    let mut pad = make_pad(100, 100);

    for stop in [
        InputEvent::PointerLeave,
        InputEvent::PointerCancel,
        InputEvent::TouchCancel,
        InputEvent::TouchEnd,
    ] {
        pad.handle_event(&down(50.0, 50.0));
        assert!(pad.is_drawing());
        pad.handle_event(&stop);
        assert!(!pad.is_drawing(), "{stop:?} should stop drawing");
    }
}

#[test]
fn clear_is_idempotent() {
    let mut pad = make_pad(64, 64);
    pad.handle_event(&down(5.0, 5.0));
    pad.handle_event(&motion(60.0, 60.0));
    pad.handle_event(&InputEvent::PointerUp);

    pad.clear();
    let once = pad.surface().pixels();
    pad.clear();
    let twice = pad.surface().pixels();

    assert_eq!(once, twice);
    assert!(pad.surface().is_blank());
    assert_eq!((pad.surface().width(), pad.surface().height()), (64, 64));
}

#[test]
fn resize_then_clear_is_blank_regardless_of_content() {
    let mut empty = make_pad(50, 40);
    let mut busy = make_pad(50, 40);
    busy.handle_event(&down(0.0, 0.0));
    busy.handle_event(&motion(50.0, 40.0));

    for pad in [&mut empty, &mut busy] {
        pad.resize();
        pad.clear();
    }

    assert_eq!(empty.surface().pixels(), busy.surface().pixels());
    assert!(busy.surface().is_blank());
}

#[test]
fn selected_color_is_drawn_with_normal_compositing() {
    let mut pad = make_pad(60, 60);

    pad.select_color(BLUE);
    pad.handle_event(&down(10.0, 30.0));
    pad.handle_event(&motion(50.0, 30.0));
    pad.handle_event(&InputEvent::PointerUp);

    // Red drawn over blue replaces it where they cross
    pad.select_color(RED);
    pad.handle_event(&down(30.0, 10.0));
    pad.handle_event(&motion(30.0, 50.0));
    pad.handle_event(&InputEvent::PointerUp);

    let [br, bg, bb] = BLUE.to_rgb8();
    let blue = pad.surface().pixel(15, 30).unwrap();
    assert_eq!((blue.r, blue.g, blue.b, blue.a), (br, bg, bb, 255));

    let [rr, rg, rb] = RED.to_rgb8();
    let cross = pad.surface().pixel(30, 30).unwrap();
    assert_eq!((cross.r, cross.g, cross.b, cross.a), (rr, rg, rb, 255));
}

#[test]
fn eraser_clears_only_around_the_drag() {
    let config = PadConfig {
        eraser_size: 10.0,
        ..PadConfig::default()
    };
    let mut pad = DrawPad::init(FixedContainer::new(100, 100), config).unwrap();

    pad.select_color(BLACK);
    pad.handle_event(&down(0.0, 0.0));
    pad.handle_event(&motion(50.0, 50.0));
    pad.handle_event(&InputEvent::PointerUp);
    assert!(opaque_at(&pad, 25, 25));

    pad.select_eraser();
    assert!(pad.erase_mode());
    pad.handle_event(&down(25.0, 25.0));
    pad.handle_event(&motion(25.0, 25.0));
    pad.handle_event(&InputEvent::PointerUp);

    // eraser_size is a diameter: a radius-5 disc around (25,25) is gone
    assert!(clear_at(&pad, 25, 25));
    assert!(clear_at(&pad, 23, 23));
    assert!(clear_at(&pad, 26, 26));
    assert!(clear_at(&pad, 27, 27));
    assert!(clear_at(&pad, 22, 22));

    // Just past the disc edge the stroke is intact
    assert!(opaque_at(&pad, 30, 30));
    assert!(opaque_at(&pad, 19, 19));
    assert!(opaque_at(&pad, 10, 10));
    assert!(opaque_at(&pad, 15, 15));
    assert!(opaque_at(&pad, 35, 35));
    assert!(opaque_at(&pad, 45, 45));
}

#[test]
fn double_start_keeps_a_single_session() {
    let mut pad = make_pad(80, 80);

    pad.handle_event(&down(10.0, 40.0));
    pad.handle_event(&down(70.0, 40.0));
    assert!(pad.is_drawing());
    assert!(clear_at(&pad, 40, 40));

    pad.handle_event(&motion(70.0, 70.0));
    assert!(opaque_at(&pad, 70, 55));
    assert!(clear_at(&pad, 40, 55));

    pad.handle_event(&InputEvent::PointerUp);
    assert!(!pad.is_drawing());
}

#[test]
fn touch_draws_where_pointer_draws() {
    let origin = Coordinate::new(120.0, 300.0);
    let container = FixedContainer::new(60, 60).at(origin);
    let mut by_touch = DrawPad::init(container, PadConfig::default()).unwrap();
    let mut by_pointer = DrawPad::init(container, PadConfig::default()).unwrap();

    by_touch.handle_event(&InputEvent::TouchStart {
        touches: vec![TouchPoint::new(130.0, 310.0)],
    });
    by_touch.handle_event(&InputEvent::TouchMove {
        touches: vec![TouchPoint::new(170.0, 350.0)],
    });
    by_touch.handle_event(&InputEvent::TouchEnd);

    by_pointer.handle_event(&down(10.0, 10.0));
    by_pointer.handle_event(&motion(50.0, 50.0));
    by_pointer.handle_event(&InputEvent::PointerUp);

    assert!(!by_touch.surface().is_blank());
    assert_eq!(by_touch.surface().pixels(), by_pointer.surface().pixels());
}

#[test]
fn malformed_touch_is_ignored() {
    let mut pad = make_pad(40, 40);

    let response = pad.handle_event(&InputEvent::TouchStart { touches: vec![] });
    assert!(response.default_prevented);
    assert!(!pad.is_drawing());

    pad.handle_event(&InputEvent::TouchStart {
        touches: vec![TouchPoint::new(10.0, 10.0)],
    });
    let before = pad.surface().pixels();
    pad.handle_event(&InputEvent::TouchMove { touches: vec![] });
    assert!(pad.is_drawing());
    assert_eq!(pad.surface().pixels(), before);
}

#[test]
fn pads_do_not_share_state() {
    let mut left = make_pad(40, 40);
    let mut right = make_pad(40, 40);

    left.select_eraser();
    left.handle_event(&down(20.0, 20.0));

    assert!(!right.erase_mode());
    assert!(!right.is_drawing());

    right.handle_event(&down(20.0, 20.0));
    assert!(right.surface().pixel(20, 20).unwrap().a == 255);
    assert!(left.surface().is_blank());
}

#[test]
fn swatch_clicks_drive_the_tool() {
    let mut pad = make_pad(40, 40);
    let eraser = pad.toolbox().eraser_index();

    pad.select_swatch(eraser);
    assert!(pad.erase_mode());

    pad.select_swatch(2);
    assert!(!pad.erase_mode());
    assert_eq!(pad.tool().color, BLUE);
    assert_eq!(pad.toolbox().active(), Some(2));

    assert!(pad.select_swatch(eraser + 1).is_none());
    assert_eq!(pad.toolbox().active(), Some(2));
}

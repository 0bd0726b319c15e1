use slidekit_core::{
    HostEvent, Inputs, Key, MarqueeDirection, Slider, SliderConfig, SliderEvent,
};
use slidekit_test_fixtures::sliders;

fn approx(a: f32, b: f32) {
    assert!((a - b).abs() < 1e-3, "left={a} right={b}");
}

fn marquee_slider() -> Slider {
    let cfg: SliderConfig = sliders::load("marquee").expect("marquee fixture");
    let mount = sliders::mount("marquee").unwrap();
    Slider::new(cfg, mount.item_count, mount.viewport_width)
}

/// it should start without autoplay even when both are configured
#[test]
fn marquee_excludes_autoplay() {
    let mut s = marquee_slider();
    assert!(s.is_marquee());
    assert!(!s.config().autoplay.enabled);
    assert_eq!(s.drain_events(), vec![SliderEvent::Init]);
    assert!(s.start_autoplay().is_none());
    assert!(s.drain_events().is_empty());
}

/// it should render the sequence twice and hide discrete navigation
#[test]
fn doubled_sequence_and_no_controls() {
    let mut s = marquee_slider();
    assert_eq!(s.render_sequence(), vec![0, 1, 2, 3, 4, 0, 1, 2, 3, 4]);
    assert!(!s.show_arrows());
    assert!(!s.show_dots());
    assert!(s.announcement().is_none());
    assert!(s.slide_aria(0).is_none());
    assert!(!s.render_slide(0).is_active);
}

/// it should ignore discrete navigation
#[test]
fn navigation_is_inert() {
    let mut s = marquee_slider();
    s.drain_events();
    s.next_slide();
    s.go_to_slide(3);
    assert!(!s.key(Key::ArrowRight));
    s.pointer_down(300.0);
    s.pointer_move(100.0);
    s.pointer_up();
    assert_eq!(s.current_index(), 0);
    assert!(s.drain_events().is_empty());
}

/// it should scroll one sequence per items*100/speed seconds and wrap
#[test]
fn scrolls_at_fallback_rate_and_wraps() {
    let mut s = marquee_slider();
    let cycle = s.marquee().unwrap().cycle_ms().unwrap();
    assert_eq!(cycle, 10_000.0);

    let out = s.step(2500.0, Inputs::default());
    approx(out.frame.marquee_offset_percent.unwrap(), -12.5);

    s.step(7500.0, Inputs::default());
    let m = s.marquee().unwrap();
    assert!(m.progress() < 1e-9);
    assert!((m.distance() - 1.0).abs() < 1e-9);
}

/// it should use the measured sequence width once reported
#[test]
fn measured_width_sets_speed() {
    let mut s = marquee_slider();
    s.step(0.0, Inputs::event(HostEvent::SequenceWidth { width: 1000.0 }));
    assert_eq!(s.marquee().unwrap().cycle_ms(), Some(20_000.0));
    s.step(5000.0, Inputs::default());
    assert_eq!(s.marquee().unwrap().offset_px(), Some(-250.0));
}

/// it should pause on hover and continue from the same spot
#[test]
fn hover_pauses_scroll() {
    let mut s = marquee_slider();
    s.step(1000.0, Inputs::default());
    s.hover_enter();
    let before = s.marquee().unwrap().distance();
    s.step(4000.0, Inputs::default());
    assert_eq!(s.marquee().unwrap().distance(), before);
    s.hover_leave();
    s.step(1000.0, Inputs::default());
    assert!(s.marquee().unwrap().distance() > before);
}

/// it should move rightward from the offset end of the track
#[test]
fn right_direction() {
    let mut cfg: SliderConfig = sliders::load("marquee").unwrap();
    cfg.marquee.direction = MarqueeDirection::Right;
    let mut s = Slider::new(cfg, 5, 1280.0);
    let out = s.step(0.0, Inputs::default());
    approx(out.frame.marquee_offset_percent.unwrap(), -50.0);
    let out = s.step(5000.0, Inputs::default());
    approx(out.frame.marquee_offset_percent.unwrap(), -25.0);
}

/// it should map clicks on the second copy back to item indices
#[test]
fn clicks_map_to_items() {
    let mut s = marquee_slider();
    s.drain_events();
    s.slide_click(7);
    assert_eq!(s.drain_events(), vec![SliderEvent::SlideClick { index: 2 }]);
}

/// it should freeze on pause and continue from the frozen position on resume
#[test]
fn pause_and_resume() {
    let mut s = marquee_slider();
    s.step(2000.0, Inputs::default());
    s.pause_marquee();
    s.step(3000.0, Inputs::default());
    approx(s.marquee().unwrap().offset_percent(), -10.0);
    s.resume_marquee();
    s.step(2000.0, Inputs::default());
    approx(s.marquee().unwrap().offset_percent(), -20.0);
}

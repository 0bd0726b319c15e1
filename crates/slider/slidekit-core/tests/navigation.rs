use slidekit_core::{Inputs, Key, Slider, SliderCommand, SliderConfig, SliderEvent, Transition};

fn cfg(slides_to_show: i64, loop_enabled: bool) -> SliderConfig {
    SliderConfig {
        slides_to_show,
        loop_enabled,
        transition: Transition::Instant,
        ..Default::default()
    }
}

fn mount(cfg: SliderConfig, items: usize) -> Slider {
    let mut s = Slider::new(cfg, items, 1024.0);
    assert_eq!(s.drain_events(), vec![SliderEvent::Init]);
    s
}

/// it should never let the index leave [0, max(0, count - slidesToShow)]
#[test]
fn index_stays_within_bounds() {
    for items in 0..7usize {
        for show in 1..4i64 {
            for looping in [false, true] {
                let mut s = mount(cfg(show, looping), items);
                let max = items.saturating_sub(show as usize);
                assert_eq!(s.max_index(), max);
                for req in [-10i64, -1, 0, 1, 2, 5, 99] {
                    s.go_to_slide(req);
                    assert!(s.current_index() <= max);
                    s.next_slide();
                    assert!(s.current_index() <= max);
                    s.prev_slide();
                    assert!(s.current_index() <= max);
                }
            }
        }
    }
}

/// it should do nothing when more slides are shown than exist
#[test]
fn fewer_items_than_visible_is_inert() {
    let mut s = mount(cfg(3, true), 2);
    s.next_slide();
    s.prev_slide();
    s.go_to_slide(1);
    assert_eq!(s.current_index(), 0);
    assert!(s.drain_events().is_empty());
}

/// it should clamp without looping and fire boundary events after the change
#[test]
fn clamps_and_reports_boundaries_in_order() {
    let mut s = mount(cfg(1, false), 5);
    s.go_to_slide(99);
    assert_eq!(s.current_index(), 4);
    assert_eq!(
        s.drain_events(),
        vec![
            SliderEvent::SlideChanged {
                current: 4,
                previous: 0
            },
            SliderEvent::ReachEnd,
            SliderEvent::TransitionEnd { index: 4 },
        ]
    );

    s.next_slide();
    assert!(s.drain_events().is_empty());

    s.go_to_slide(-3);
    assert_eq!(s.current_index(), 0);
    let events = s.drain_events();
    assert_eq!(events[1], SliderEvent::ReachStart);
}

/// it should wrap a single step when looping, however far out of range
#[test]
fn loop_wraps_one_step() {
    let mut s = mount(cfg(1, true), 5);
    s.prev_slide();
    assert_eq!(s.current_index(), 4);
    s.next_slide();
    assert_eq!(s.current_index(), 0);

    s.go_to_slide(2);
    s.go_to_slide(50);
    assert_eq!(s.current_index(), 0);
    s.go_to_slide(2);
    s.go_to_slide(-50);
    assert_eq!(s.current_index(), 4);
}

/// it should treat navigating to the current index as a no-op
#[test]
fn go_to_current_is_idempotent() {
    let mut s = mount(cfg(1, false), 5);
    s.go_to_slide(2);
    s.drain_events();
    s.go_to_slide(2);
    assert!(s.drain_events().is_empty());
}

/// it should land multi-slide pages on max index and wrap back to 0
#[test]
fn multi_page_wrap() {
    let mut c = cfg(3, true);
    c.slides_to_scroll = 3;
    let mut s = mount(c, 7);
    assert_eq!(s.max_index(), 4);
    s.next_slide();
    assert_eq!(s.current_index(), 3);
    s.next_slide();
    // 6 is past max 4: wraps, does not land on 4.
    assert_eq!(s.current_index(), 0);
    s.prev_slide();
    assert_eq!(s.current_index(), 4);
}

/// it should tween slide transitions and report their end
#[test]
fn slide_transition_ends_after_speed() {
    let mut s = mount(SliderConfig::default(), 4);
    s.next_slide();
    let out = s.step(0.0, Inputs::default());
    assert_eq!(out.slide_changes(), vec![1]);
    assert_eq!(out.frame.offset_percent, -100.0);
    assert_eq!(out.frame.displayed_offset_percent, 0.0);

    let out = s.step(250.0, Inputs::default());
    assert!(out.frame.displayed_offset_percent < -50.0);
    assert!(out.events.is_empty());

    let out = s.step(250.0, Inputs::default());
    assert_eq!(out.events, vec![SliderEvent::TransitionEnd { index: 1 }]);
    assert_eq!(out.frame.displayed_offset_percent, -100.0);
}

/// it should accept commands through step inputs
#[test]
fn commands_via_inputs() {
    let mut s = mount(cfg(1, false), 6);
    let out = s.step(16.0, Inputs::command(SliderCommand::GoTo { index: 3 }));
    assert_eq!(out.frame.state.current_index, 3);
    let out = s.step(16.0, Inputs::command(SliderCommand::Prev));
    assert_eq!(out.slide_changes(), vec![2]);
}

/// it should map arrows, Home, End and optionally paging keys
#[test]
fn keyboard_navigation() {
    let mut c = cfg(2, false);
    let mut s = mount(c.clone(), 8);
    assert!(s.key(Key::ArrowRight));
    assert_eq!(s.current_index(), 1);
    assert!(s.key(Key::End));
    assert_eq!(s.current_index(), 6);
    assert!(s.key(Key::Home));
    assert_eq!(s.current_index(), 0);
    assert!(!s.key(Key::PageDown));

    c.keyboard.page_up_down = true;
    let mut s = mount(c.clone(), 8);
    assert!(s.key(Key::PageDown));
    assert_eq!(s.current_index(), 2);

    c.keyboard.enabled = false;
    let mut s = mount(c, 8);
    assert!(!s.key(Key::ArrowRight));
    assert_eq!(s.current_index(), 0);
}

/// it should expose navigation affordances
#[test]
fn affordances() {
    let mut s = mount(cfg(2, false), 5);
    assert!(!s.can_go_prev());
    assert!(s.can_go_next());
    assert_eq!(s.dot_count(), 4);
    assert!(s.show_arrows());
    assert!(s.show_dots());
    s.go_to_slide(3);
    assert!(!s.can_go_next());

    let s = mount(cfg(1, true), 0);
    assert_eq!(s.dot_count(), 0);
}

/// it should clamp the initial slide
#[test]
fn initial_slide_is_clamped() {
    let mut c = cfg(2, false);
    c.initial_slide = 40;
    let s = Slider::new(c, 5, 1024.0);
    assert_eq!(s.current_index(), 3);
}

/// it should announce the current slide and label visible slides
#[test]
fn accessibility_follows_index() {
    let mut s = mount(cfg(2, false), 6);
    s.go_to_slide(2);
    let region = s.announcement().unwrap();
    assert_eq!(region.text, "Slide 3 of 6");
    assert_eq!(s.slide_aria(3).unwrap().tab_index, 0);
    assert_eq!(s.slide_aria(4).unwrap().tab_index, -1);
    assert!(s.render_slide(2).is_active);
    assert!(!s.render_slide(1).is_active);
}

/// it should label the arrows for the boundaries and the bullets 1-based
#[test]
fn control_labels() {
    let mut s = mount(cfg(2, false), 6);
    assert_eq!(s.prev_label(), "This is the first slide");
    assert_eq!(s.next_label(), "Next slide");
    s.go_to_slide(4);
    assert_eq!(s.prev_label(), "Previous slide");
    assert_eq!(s.next_label(), "This is the last slide");
    assert_eq!(s.bullet_label(0), "Go to slide 1");

    let looping = mount(cfg(2, true), 6);
    assert_eq!(looping.prev_label(), "Previous slide");
}

/// it should report clicks on real items only
#[test]
fn slide_click_events() {
    let mut s = mount(cfg(1, false), 3);
    s.slide_click(1);
    s.slide_click(7);
    assert_eq!(s.drain_events(), vec![SliderEvent::SlideClick { index: 1 }]);
}

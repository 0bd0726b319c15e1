use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use slidekit_core::{
    AutoplayOptions, HostEvent, Inputs, MarqueeOptions, Slider, SliderCommand, SliderConfig,
};

fn autoplay_config() -> SliderConfig {
    SliderConfig {
        slides_to_show: 3,
        autoplay: AutoplayOptions {
            enabled: true,
            delay_ms: 250,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn marquee_config() -> SliderConfig {
    SliderConfig {
        marquee: MarqueeOptions {
            enabled: true,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn bench_idle_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("slider_step_idle");
    for &items in &[8usize, 64, 512] {
        group.bench_with_input(BenchmarkId::new("autoplay", items), &items, |b, &items| {
            let mut slider = Slider::new(autoplay_config(), items, 1280.0);
            b.iter(|| {
                let out = slider.step(black_box(16.0), Inputs::default());
                black_box(out.frame.offset_percent);
            });
        });
        group.bench_with_input(BenchmarkId::new("marquee", items), &items, |b, &items| {
            let mut slider = Slider::new(marquee_config(), items, 1280.0);
            b.iter(|| {
                let out = slider.step(black_box(16.0), Inputs::default());
                black_box(out.frame.marquee_offset_percent);
            });
        });
    }
    group.finish();
}

fn bench_busy_frames(c: &mut Criterion) {
    c.bench_function("slider_step_swipe_and_resize", |b| {
        let mut slider = Slider::new(autoplay_config(), 64, 1280.0);
        let mut width = 600.0f32;
        b.iter(|| {
            width = if width > 1600.0 { 600.0 } else { width + 37.0 };
            let inputs = Inputs {
                events: vec![
                    HostEvent::Resize { width },
                    HostEvent::PointerDown { x: 400.0 },
                    HostEvent::PointerMove { x: 320.0 },
                    HostEvent::PointerUp,
                ],
                commands: vec![SliderCommand::Prev],
            };
            black_box(slider.step(16.0, inputs));
        });
    });
}

criterion_group!(benches, bench_idle_frames, bench_busy_frames);
criterion_main!(benches);

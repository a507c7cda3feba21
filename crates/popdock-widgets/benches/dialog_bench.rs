//! Render throughput for stacked dialogs.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use popdock_core::Rect;
use popdock_widgets::dialog::DialogOptions;
use popdock_widgets::manager::DialogManager;
use popdock_widgets::surface::Surface;

fn stacked_manager(count: u16) -> DialogManager {
    let mut manager = DialogManager::new(Rect::from_size(200, 60));
    for i in 0..count {
        let outcome = manager.open_with(
            "bench",
            format!("dialog-{i}"),
            DialogOptions::default()
                .width(40)
                .height(12)
                .top(i * 2)
                .left(i * 3)
                .title("bench dialog"),
            |content| content.set_text("line one\nline two\nline three"),
        );
        assert!(outcome.is_opened());
    }
    manager
}

fn bench_render_stack(c: &mut Criterion) {
    let manager = stacked_manager(10);
    let mut surface = Surface::new(200, 60);

    c.bench_function("render_10_overlapping_dialogs", |b| {
        b.iter(|| {
            surface.clear();
            manager.render(black_box(&mut surface));
        })
    });
}

fn bench_open_close_cycle(c: &mut Criterion) {
    c.bench_function("open_close_100_dialogs", |b| {
        b.iter(|| {
            let mut manager = DialogManager::new(Rect::from_size(200, 60));
            for i in 0..100u16 {
                let outcome = manager.open(
                    "bench",
                    "cycle",
                    DialogOptions::default().width(30).height(10).top(i % 40).left(i % 60),
                );
                if let Some(id) = outcome.id() {
                    manager.close(id);
                }
            }
            black_box(manager.open_count())
        })
    });
}

criterion_group!(benches, bench_render_stack, bench_open_close_cycle);
criterion_main!(benches);

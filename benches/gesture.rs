//! Benchmarks for the touch sample → update → Cmd path
//!
//! Run with: cargo bench gesture

use side_reveal::messages::Msg;
use side_reveal::update::update;
use side_reveal::{RevealConfig, RevealModel, TouchSample};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn make_model() -> RevealModel {
    let mut model = RevealModel::new(RevealConfig::default());
    update(
        &mut model,
        Msg::Resize {
            width: 375.0,
            height: 667.0,
        },
    );
    model
}

// ============================================================================
// Full swipes
// ============================================================================

/// A swipe that tracks `samples` moves and is released past halfway
#[divan::bench(args = [16, 120])]
fn swipe_and_release(samples: usize) {
    let mut model = make_model();

    let step = 240.0 / samples as f32;
    for i in 0..samples {
        let cmd = update(&mut model, Msg::Touch(TouchSample::moved(5.0 + step * i as f32)));
        divan::black_box(cmd);
    }
    let cmd = update(&mut model, Msg::Touch(TouchSample::ended(200.0)));
    divan::black_box(cmd);
    divan::black_box(&model);
}

/// Moves that never start a drag
#[divan::bench(args = [100, 1000])]
fn ignored_moves(iterations: usize) {
    let mut model = make_model();

    for i in 0..iterations {
        let x = 100.0 + (i % 200) as f32;
        let cmd = update(&mut model, Msg::Touch(TouchSample::moved(x)));
        divan::black_box(cmd);
    }
}

// ============================================================================
// Discrete commands
// ============================================================================

#[divan::bench(args = [100, 1000])]
fn toggle(iterations: usize) {
    let mut model = make_model();

    for _ in 0..iterations {
        let cmd = update(
            &mut model,
            Msg::Reveal(side_reveal::messages::RevealMsg::Toggle),
        );
        divan::black_box(cmd);
    }
}

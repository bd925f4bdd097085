// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated seven-card carousel session.
//!
//! Replays a short interaction (two swipes, deleting a card, adding it back)
//! through the whole pipeline: the [`Carousel`] controller, a logging
//! [`Presenter`], the [`RenderPlan`] with a hit test at the centre, and the
//! diagnostics sinks. Events go both to a
//! [`PrettyPrintSink`](carousel_debug::pretty::PrettyPrintSink) on stdout and
//! a [`RecorderSink`](carousel_debug::recorder::RecorderSink), which is
//! exported to `carousel_events.json` at the end.

use std::fs::File;
use std::io::BufWriter;

use carousel_core::Carousel;
use carousel_core::backend::Presenter;
use carousel_core::card::{CardStore, FrameChanges, SurfaceId};
use carousel_core::config::CarouselConfig;
use carousel_core::item::{CarouselItem, ContentRenderer};
use carousel_core::motion::Motion;
use carousel_core::trace::{DragEvent, EvaluateEvent, ItemsChangedEvent, SettleEvent, TraceSink, Tracer};
use carousel_render::RenderPlan;
use kurbo::Point;

use carousel_debug::pretty::PrettyPrintSink;
use carousel_debug::recorder::RecorderSink;

/// Number of cards the session starts with.
const CARD_COUNT: u32 = 7;
/// Display refresh used to sample settle animations.
const FRAME_SECONDS: f64 = 1.0 / 60.0;

#[derive(Clone, Debug, PartialEq)]
struct Photo {
    id: u32,
    caption: String,
}

impl CarouselItem for Photo {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

fn photo(id: u32) -> Photo {
    Photo {
        id,
        caption: format!("Card {id}"),
    }
}

/// Hands out surface ids and remembers which are live.
#[derive(Debug, Default)]
struct SurfacePool {
    next: u32,
    live: Vec<SurfaceId>,
}

impl ContentRenderer<Photo> for SurfacePool {
    fn render(&mut self, item: &Photo) -> SurfaceId {
        self.next += 1;
        let surface = SurfaceId(self.next);
        self.live.push(surface);
        println!("  render {:?} -> {surface:?}", item.caption);
        surface
    }

    fn release(&mut self, surface: SurfaceId) {
        self.live.retain(|s| *s != surface);
        println!("  release {surface:?}");
    }
}

/// Prints what a native presenter would apply.
#[derive(Debug, Default)]
struct LogPresenter {
    frames: u64,
}

impl Presenter for LogPresenter {
    fn apply(&mut self, store: &CardStore, changes: &FrameChanges) {
        self.frames += 1;
        if changes.is_empty() {
            return;
        }
        let front: Vec<_> = changes
            .interactivity
            .iter()
            .filter(|&&idx| store.interactive_at(idx))
            .collect();
        println!(
            "  present #{}: {} transforms over {:.2}s, +{} -{}, now interactive {front:?}",
            self.frames,
            changes.transforms.len(),
            changes.transition_duration,
            changes.added.len(),
            changes.removed.len(),
        );
    }
}

/// Forwards every event to two sinks.
struct Tee<'a> {
    a: &'a mut dyn TraceSink,
    b: &'a mut dyn TraceSink,
}

impl TraceSink for Tee<'_> {
    fn on_drag(&mut self, e: &DragEvent) {
        self.a.on_drag(e);
        self.b.on_drag(e);
    }

    fn on_settle(&mut self, e: &SettleEvent) {
        self.a.on_settle(e);
        self.b.on_settle(e);
    }

    fn on_items_changed(&mut self, e: &ItemsChangedEvent) {
        self.a.on_items_changed(e);
        self.b.on_items_changed(e);
    }

    fn on_evaluate(&mut self, e: &EvaluateEvent) {
        self.a.on_evaluate(e);
        self.b.on_evaluate(e);
    }
}

fn main() {
    // -- sinks -------------------------------------------------------------
    let mut pretty = PrettyPrintSink::new(Box::new(std::io::stdout()));
    let mut recorder = RecorderSink::new();

    {
        let mut tee = Tee {
            a: &mut pretty,
            b: &mut recorder,
        };
        let mut tracer = Tracer::new(&mut tee);
        run_session(&mut tracer);
    }

    // -- export event log --------------------------------------------------
    let path = "carousel_events.json";
    let file = File::create(path).expect("failed to create carousel_events.json");
    let mut writer = BufWriter::new(file);
    carousel_debug::json::export(recorder.as_bytes(), &mut writer)
        .expect("failed to write event log");

    println!("Wrote {path}");
}

fn run_session(tracer: &mut Tracer<'_>) {
    let config = CarouselConfig::standard();
    let mut carousel = Carousel::new(config);
    let mut surfaces = SurfacePool::default();
    let mut presenter = LogPresenter::default();

    println!("load {CARD_COUNT} cards");
    carousel.set_items((0..CARD_COUNT).map(photo), &mut surfaces, tracer);
    present(&mut carousel, &mut presenter, tracer);

    println!("swipe right");
    swipe(&mut carousel, &mut presenter, tracer, 100.0);

    println!("swipe left twice as far");
    swipe(&mut carousel, &mut presenter, tracer, -300.0);

    println!("delete last card");
    let _ = carousel.pop(&mut surfaces, tracer);
    present(&mut carousel, &mut presenter, tracer);

    println!("add it back");
    carousel.push(photo(CARD_COUNT - 1), &mut surfaces, tracer);
    present(&mut carousel, &mut presenter, tracer);

    let plan = RenderPlan::build(carousel.store(), carousel.config());
    let hit = plan
        .hit_test(Point::ORIGIN)
        .and_then(|card| (0..carousel.items().len()).find(|&i| carousel.card(i) == Some(card)))
        .map(|i| carousel.items()[i].caption.as_str());
    println!(
        "front: {:?}, tap at centre hits {hit:?}, {} live surfaces",
        carousel.front_item().map(|p| p.caption.as_str()),
        surfaces.live.len(),
    );
}

/// Drags in ten steps up to `distance`, then releases.
fn swipe(
    carousel: &mut Carousel<Photo>,
    presenter: &mut LogPresenter,
    tracer: &mut Tracer<'_>,
    distance: f64,
) {
    for step in 1..=10 {
        carousel.drag_changed(distance * f64::from(step) / 10.0, tracer);
        present(carousel, presenter, tracer);
    }
    let motion = carousel.drag_ended(distance, tracer);
    present(carousel, presenter, tracer);
    print_settle(&motion);
}

fn present(carousel: &mut Carousel<Photo>, presenter: &mut LogPresenter, tracer: &mut Tracer<'_>) {
    let changes = carousel.update(tracer);
    presenter.apply(carousel.store(), &changes);
}

/// Samples the settle animation the way a renderer would at 60 Hz.
fn print_settle(motion: &Motion) {
    if motion.is_still() {
        return;
    }
    let mut elapsed = 0.0;
    let mut samples = Vec::new();
    while elapsed < motion.duration {
        samples.push(format!("{:.1}", motion.sample(elapsed)));
        elapsed += FRAME_SECONDS;
    }
    samples.push(format!("{:.1}", motion.to));
    println!("  settle path: {}", samples.join(" "));
}

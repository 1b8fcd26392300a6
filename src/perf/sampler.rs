//! Repaint-driven runtime sampling.
//!
//! The loop counts repaint opportunities and, once per interval, turns the
//! count into a frame rate and emits a [`RuntimeSample`]. Every tick
//! schedules the next one through [`Environment::request_frame`], so the
//! stack never grows and cancellation only has to drop the pending frame.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info};

use super::env::{Environment, FrameId};
use super::types::{MemoryUsage, RuntimeSample, SamplerThresholds};

struct LoopState {
    frame_count: u32,
    last_time: f64,
    pending: Option<FrameId>,
    canceled: bool,
}

struct SamplerLoop<E: Environment> {
    env: Rc<E>,
    thresholds: SamplerThresholds,
    state: RefCell<LoopState>,
    on_sample: RefCell<Box<dyn FnMut(RuntimeSample)>>,
}

trait Cancel {
    fn cancel(&self);
    fn is_canceled(&self) -> bool;
}

impl<E: Environment + 'static> SamplerLoop<E> {
    fn on_frame(self: Rc<Self>) {
        let now = self.env.now_ms();

        let due = {
            let mut state = self.state.borrow_mut();
            if state.canceled {
                return;
            }
            state.pending = None;
            state.frame_count += 1;

            let elapsed = now - state.last_time;
            if elapsed > 0.0 && elapsed >= self.thresholds.interval_ms {
                let frames = state.frame_count;
                state.frame_count = 0;
                state.last_time = now;
                Some((frames, elapsed))
            } else {
                None
            }
        };

        if let Some((frames, elapsed)) = due {
            let fps = (f64::from(frames) * 1000.0 / elapsed).round() as u32;
            let memory_mb = self
                .env
                .heap_usage()
                .map(|heap| MemoryUsage::from(heap).used_mb)
                .unwrap_or(0);
            let load_time_ms = now - self.env.navigation_start_ms();
            let sample = RuntimeSample::evaluate(fps, memory_mb, load_time_ms, &self.thresholds);
            let mut on_sample = self.on_sample.borrow_mut();
            (*on_sample)(sample);
        }

        self.schedule();
    }

    fn schedule(self: Rc<Self>) {
        if self.state.borrow().canceled {
            return;
        }
        let next = Rc::clone(&self);
        let id = self.env.request_frame(Box::new(move || next.on_frame()));
        self.state.borrow_mut().pending = id;
    }
}

impl<E: Environment> Cancel for SamplerLoop<E> {
    fn cancel(&self) {
        let mut state = self.state.borrow_mut();
        if state.canceled {
            return;
        }
        state.canceled = true;
        if let Some(id) = state.pending.take() {
            self.env.cancel_frame(id);
        }
        debug!("Runtime sampler canceled");
    }

    fn is_canceled(&self) -> bool {
        self.state.borrow().canceled
    }
}

/// Cancellation handle returned by [`start`].
///
/// Dropping the handle does not stop the loop; call [`SamplerHandle::cancel`]
/// when the consumer is torn down.
#[derive(Clone)]
pub struct SamplerHandle {
    inner: Option<Rc<dyn Cancel>>,
}

impl SamplerHandle {
    /// A handle that controls nothing.
    pub fn inert() -> Self {
        SamplerHandle { inner: None }
    }

    /// Stop sampling. Safe to call any number of times.
    pub fn cancel(&self) {
        if let Some(inner) = &self.inner {
            inner.cancel();
        }
    }

    /// True once canceled, or if the sampler never ran.
    pub fn is_stopped(&self) -> bool {
        self.inner.as_ref().map_or(true, |inner| inner.is_canceled())
    }
}

/// Start sampling with the default thresholds.
pub fn start<E, F>(env: Rc<E>, on_sample: F) -> SamplerHandle
where
    E: Environment + 'static,
    F: FnMut(RuntimeSample) + 'static,
{
    start_with(env, SamplerThresholds::default(), on_sample)
}

/// Start sampling. Inert when the host has no repaint scheduler.
pub fn start_with<E, F>(env: Rc<E>, thresholds: SamplerThresholds, on_sample: F) -> SamplerHandle
where
    E: Environment + 'static,
    F: FnMut(RuntimeSample) + 'static,
{
    let sampler = Rc::new(SamplerLoop {
        state: RefCell::new(LoopState {
            frame_count: 0,
            last_time: env.now_ms(),
            pending: None,
            canceled: false,
        }),
        env,
        thresholds,
        on_sample: RefCell::new(Box::new(on_sample)),
    });

    // First frame is counted synchronously, as the browser loop would
    Rc::clone(&sampler).on_frame();

    let inner = Rc::clone(&sampler);
    let mut state = sampler.state.borrow_mut();
    if state.pending.is_none() && !state.canceled {
        // No repaint scheduler: nothing will ever tick
        state.canceled = true;
        return SamplerHandle::inert();
    }
    drop(state);

    info!("Runtime sampler started");
    SamplerHandle {
        inner: Some(inner as Rc<dyn Cancel>),
    }
}

/// Frame-rate only variant of [`start`].
pub fn start_fps_monitor<E, F>(env: Rc<E>, mut on_fps: F) -> SamplerHandle
where
    E: Environment + 'static,
    F: FnMut(u32) + 'static,
{
    start(env, move |sample| on_fps(sample.fps))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::perf::env::fake::FakeEnvironment;
    use crate::perf::types::HeapUsage;

    /// Fire `frames` repaints spaced `step_ms` apart.
    fn run_frames(env: &FakeEnvironment, frames: usize, step_ms: f64) {
        for _ in 0..frames {
            env.advance(step_ms);
            env.fire_frame();
        }
    }

    fn collecting(env: &Rc<FakeEnvironment>) -> (SamplerHandle, Rc<RefCell<Vec<RuntimeSample>>>) {
        let samples = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&samples);
        let handle = start(Rc::clone(env), move |s| sink.borrow_mut().push(s));
        (handle, samples)
    }

    #[test]
    fn test_emits_roughly_once_per_second() {
        let env = Rc::new(FakeEnvironment::desktop());
        let (handle, samples) = collecting(&env);

        run_frames(&env, 49, 20.0);
        assert!(samples.borrow().is_empty(), "no sample before 1000ms");

        run_frames(&env, 1, 20.0);
        assert_eq!(samples.borrow().len(), 1);
        // 1 synchronous frame + 50 scheduled over 1000ms
        assert_eq!(samples.borrow()[0].fps, 51);

        run_frames(&env, 50, 20.0);
        assert_eq!(samples.borrow().len(), 2);
        assert_eq!(samples.borrow()[1].fps, 50);

        handle.cancel();
    }

    #[test]
    fn test_sample_reads_heap_and_load_time() {
        let env = Rc::new(FakeEnvironment {
            navigation_start: -250.0,
            ..FakeEnvironment::desktop()
        });
        env.heap.set(Some(HeapUsage {
            used_bytes: 120.0 * 1024.0 * 1024.0,
            total_bytes: 200.0 * 1024.0 * 1024.0,
            limit_bytes: 4096.0 * 1024.0 * 1024.0,
        }));
        let (handle, samples) = collecting(&env);

        run_frames(&env, 40, 25.0);
        let samples = samples.borrow();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].memory_mb, 120);
        assert_eq!(samples[0].load_time_ms, 1250.0);
        assert!(samples[0].is_low_performance);
        assert_eq!(
            samples[0].suggestions,
            vec!["Check for memory leaks", "Optimize image loading"]
        );
        handle.cancel();
    }

    #[test]
    fn test_slow_frames_flag_low_performance() {
        let env = Rc::new(FakeEnvironment::desktop());
        let (handle, samples) = collecting(&env);

        // 10 frames at 100ms => 11 frames over 1000ms
        run_frames(&env, 10, 100.0);
        let samples = samples.borrow();
        assert_eq!(samples[0].fps, 11);
        assert_eq!(samples[0].memory_mb, 0, "no heap API means 0MB");
        assert_eq!(samples[0].suggestions.len(), 3);
        handle.cancel();
    }

    #[test]
    fn test_cancel_stops_emission() {
        let env = Rc::new(FakeEnvironment::desktop());
        let (handle, samples) = collecting(&env);

        run_frames(&env, 60, 16.0);
        let before = samples.borrow().len();
        assert_eq!(before, 0);

        handle.cancel();
        assert!(handle.is_stopped());
        assert_eq!(env.pending_frames(), 0, "pending frame should be deregistered");
        assert_eq!(env.canceled.borrow().len(), 1);

        // Several seconds of repaints after cancellation
        run_frames(&env, 300, 16.0);
        assert_eq!(samples.borrow().len(), before);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let env = Rc::new(FakeEnvironment::desktop());
        let (handle, _samples) = collecting(&env);

        handle.cancel();
        handle.cancel();
        handle.clone().cancel();
        assert_eq!(env.canceled.borrow().len(), 1, "frame canceled only once");
    }

    #[test]
    fn test_callback_firing_after_cancel_is_noop() {
        let env = Rc::new(FakeEnvironment::desktop());
        let samples = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&samples);
        let handle = start(Rc::clone(&env), move |s| sink.borrow_mut().push(s));

        // Grab the scheduled callback before canceling, then run it anyway
        let stale: Vec<_> = env.pending.borrow_mut().drain(..).collect();
        handle.cancel();
        env.advance(2000.0);
        for (_, callback) in stale {
            callback();
        }

        assert!(samples.borrow().is_empty());
        assert_eq!(env.pending_frames(), 0, "no re-registration after cancel");
    }

    #[test]
    fn test_cancel_from_inside_callback() {
        let env = Rc::new(FakeEnvironment::desktop());
        let handle_slot: Rc<RefCell<Option<SamplerHandle>>> = Rc::new(RefCell::new(None));
        let count = Rc::new(RefCell::new(0));

        let slot = Rc::clone(&handle_slot);
        let counter = Rc::clone(&count);
        let handle = start(Rc::clone(&env), move |_| {
            *counter.borrow_mut() += 1;
            if let Some(h) = slot.borrow().as_ref() {
                h.cancel();
            }
        });
        *handle_slot.borrow_mut() = Some(handle);

        run_frames(&env, 200, 16.0);
        assert_eq!(*count.borrow(), 1);
        assert_eq!(env.pending_frames(), 0);
    }

    #[test]
    fn test_without_scheduler_start_is_inert() {
        let env = Rc::new(FakeEnvironment::default());
        let (handle, samples) = collecting(&env);

        env.advance(5000.0);
        env.fire_frame();
        assert!(samples.borrow().is_empty());
        assert!(handle.is_stopped());
        handle.cancel();
    }

    #[test]
    fn test_fps_monitor_reports_frame_rate() {
        let env = Rc::new(FakeEnvironment::desktop());
        let rates = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&rates);
        let handle = start_fps_monitor(Rc::clone(&env), move |fps| sink.borrow_mut().push(fps));

        run_frames(&env, 40, 25.0);
        assert_eq!(*rates.borrow(), vec![41]);
        handle.cancel();
    }

    #[test]
    fn test_non_positive_interval_never_divides_by_zero() {
        for interval_ms in [0.0, -5.0] {
            let env = Rc::new(FakeEnvironment::desktop());
            let rates = Rc::new(RefCell::new(Vec::new()));
            let sink = Rc::clone(&rates);
            let thresholds = SamplerThresholds {
                interval_ms,
                ..SamplerThresholds::default()
            };
            let handle = start_with(Rc::clone(&env), thresholds, move |s| {
                sink.borrow_mut().push(s.fps)
            });

            assert!(rates.borrow().is_empty(), "no sample from the synchronous frame");
            run_frames(&env, 3, 20.0);
            assert_eq!(*rates.borrow(), vec![100, 50, 50]);
            handle.cancel();
        }
    }
}

//! Device profiling and runtime performance sampling.
//!
//! - [`profiler::profile`] classifies the device once at mount
//! - [`settings::resolve`] turns that into an animation policy
//! - [`sampler::start`] measures live frame rate and heap usage until canceled

pub mod env;
pub mod profiler;
pub mod sampler;
pub mod settings;
pub mod types;

pub use env::{prefers_reduced_motion, BrowserEnvironment, Environment};
pub use profiler::profile;
pub use sampler::{start, SamplerHandle};
pub use settings::{optimal_duration, resolve};
pub use types::{
    AnimationOptimizations, AnimationQuality, DeviceCapabilities, EffectQuality,
    PerformanceSettings, RuntimeSample, SamplerThresholds,
};

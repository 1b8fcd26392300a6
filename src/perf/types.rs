//! Value types shared by the profiler, the settings resolver and the sampler.
//!
//! Everything here is an immutable snapshot: capabilities are computed once
//! per page load, settings are derived from them, and samples are replaced
//! by the next tick.

use serde::{Deserialize, Serialize};

/// One-time snapshot of host device traits.
///
/// `Default` is the record reported outside a browser: not mobile, not
/// low-end, no high refresh rate, zero memory and cores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DeviceCapabilities {
    pub is_mobile: bool,
    pub is_low_end: bool,
    pub has_high_refresh_rate: bool,
    pub memory_gb: f64,
    pub cpu_cores: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationQuality {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectQuality {
    Minimal,
    Simple,
    Full,
}

impl AnimationQuality {
    pub fn as_str(self) -> &'static str {
        match self {
            AnimationQuality::Low => "low",
            AnimationQuality::Medium => "medium",
            AnimationQuality::High => "high",
        }
    }
}

impl EffectQuality {
    pub fn as_str(self) -> &'static str {
        match self {
            EffectQuality::Minimal => "minimal",
            EffectQuality::Simple => "simple",
            EffectQuality::Full => "full",
        }
    }
}

/// Policy for animation and effect intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PerformanceSettings {
    pub enable_animations: bool,
    pub enable_complex_effects: bool,
    pub animation_quality: AnimationQuality,
    pub effect_quality: EffectQuality,
}

/// CSS-facing knobs derived from [`PerformanceSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnimationOptimizations {
    pub reduce_motion: bool,
    pub simplified_effects: bool,
    /// Multiplier applied to animation durations (0.5 or 1.0).
    pub animation_speed: f64,
}

/// JS heap statistics in bytes, as exposed by `performance.memory`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct HeapUsage {
    #[serde(rename = "usedJSHeapSize")]
    pub used_bytes: f64,
    #[serde(rename = "totalJSHeapSize")]
    pub total_bytes: f64,
    #[serde(rename = "jsHeapSizeLimit")]
    pub limit_bytes: f64,
}

/// Heap statistics rounded to whole megabytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemoryUsage {
    pub used_mb: u32,
    pub total_mb: u32,
    pub limit_mb: u32,
}

fn bytes_to_mb(bytes: f64) -> u32 {
    (bytes / 1024.0 / 1024.0).round().max(0.0) as u32
}

impl From<HeapUsage> for MemoryUsage {
    fn from(heap: HeapUsage) -> Self {
        MemoryUsage {
            used_mb: bytes_to_mb(heap.used_bytes),
            total_mb: bytes_to_mb(heap.total_bytes),
            limit_mb: bytes_to_mb(heap.limit_bytes),
        }
    }
}

/// Thresholds driving the runtime verdict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerThresholds {
    /// Minimum wall-clock time between two samples.
    pub interval_ms: f64,
    /// Below this frame rate the page counts as low-performance.
    pub low_fps: u32,
    /// Below this frame rate reducing motion is suggested as well.
    pub critical_fps: u32,
    /// Above this heap usage the page counts as low-performance.
    pub high_memory_mb: u32,
}

impl Default for SamplerThresholds {
    fn default() -> Self {
        SamplerThresholds {
            interval_ms: 1000.0,
            low_fps: 30,
            critical_fps: 20,
            high_memory_mb: 100,
        }
    }
}

/// A periodic measurement of live performance.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RuntimeSample {
    pub fps: u32,
    /// Used heap in MB, 0 when the runtime does not expose it.
    pub memory_mb: u32,
    pub load_time_ms: f64,
    pub is_low_performance: bool,
    pub suggestions: Vec<String>,
}

impl RuntimeSample {
    /// Build a sample and derive its verdict and suggestions.
    pub fn evaluate(
        fps: u32,
        memory_mb: u32,
        load_time_ms: f64,
        thresholds: &SamplerThresholds,
    ) -> Self {
        let low_fps = fps < thresholds.low_fps;
        let high_memory = memory_mb > thresholds.high_memory_mb;

        let mut suggestions = Vec::new();
        if low_fps {
            suggestions.push("Reduce animation complexity".to_string());
            suggestions.push("Optimize CSS animations".to_string());
        }
        if high_memory {
            suggestions.push("Check for memory leaks".to_string());
            suggestions.push("Optimize image loading".to_string());
        }
        if fps < thresholds.critical_fps {
            suggestions.push("Consider reducing motion".to_string());
        }

        RuntimeSample {
            fps,
            memory_mb,
            load_time_ms,
            is_low_performance: low_fps || high_memory,
            suggestions,
        }
    }
}

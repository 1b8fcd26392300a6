//! Capability tier → animation policy.

use super::types::{
    AnimationOptimizations, AnimationQuality, DeviceCapabilities, EffectQuality, MemoryUsage,
    PerformanceSettings,
};

const LOW_END_DURATION_FACTOR: f64 = 0.5;
const WARNING_HEAP_MB: u32 = 100;

/// Map a capability snapshot to its settings tier. First matching rule wins.
pub fn resolve(caps: &DeviceCapabilities) -> PerformanceSettings {
    if caps.is_low_end {
        return PerformanceSettings {
            enable_animations: false,
            enable_complex_effects: false,
            animation_quality: AnimationQuality::Low,
            effect_quality: EffectQuality::Minimal,
        };
    }

    if caps.is_mobile {
        return PerformanceSettings {
            enable_animations: true,
            enable_complex_effects: false,
            animation_quality: AnimationQuality::Medium,
            effect_quality: EffectQuality::Simple,
        };
    }

    PerformanceSettings {
        enable_animations: true,
        enable_complex_effects: true,
        animation_quality: AnimationQuality::High,
        effect_quality: EffectQuality::Full,
    }
}

pub fn optimize_animations(settings: &PerformanceSettings) -> AnimationOptimizations {
    let low = settings.animation_quality == AnimationQuality::Low;
    AnimationOptimizations {
        reduce_motion: low,
        simplified_effects: settings.effect_quality == EffectQuality::Minimal,
        animation_speed: if low { LOW_END_DURATION_FACTOR } else { 1.0 },
    }
}

/// Scale a nominal animation duration down on low-end devices.
pub fn optimal_duration(caps: &DeviceCapabilities, base: f64) -> f64 {
    if caps.is_low_end {
        base * LOW_END_DURATION_FACTOR
    } else {
        base
    }
}

/// Human-readable warnings about the device and current heap, in display order.
pub fn performance_warnings(caps: &DeviceCapabilities, memory: Option<MemoryUsage>) -> Vec<String> {
    let mut warnings = Vec::new();

    if caps.is_low_end {
        warnings.push("Device detected as low-end. Consider enabling performance mode.".to_string());
    }
    if memory.is_some_and(|m| m.used_mb > WARNING_HEAP_MB) {
        warnings.push("High memory usage detected. Check for memory leaks.".to_string());
    }
    if caps.is_mobile {
        warnings.push("Mobile device detected. Animations may be reduced.".to_string());
    }

    warnings
}

use tracing::debug;

use super::env::{Environment, EnvironmentSignals};
use super::types::DeviceCapabilities;

/// User-agent fragments that mark a handheld device. Matched case-insensitively.
const MOBILE_MARKERS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

const MIN_MEMORY_GB: f64 = 4.0;
const MIN_CPU_CORES: u32 = 4;
const STANDARD_REFRESH_HZ: f64 = 60.0;

pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_lowercase();
    MOBILE_MARKERS.iter().any(|marker| ua.contains(marker))
}

/// Classify the host device.
///
/// Never fails: every signal has a default, and outside a browser the
/// fixed [`DeviceCapabilities::default`] record is returned.
pub fn profile(env: &impl Environment) -> DeviceCapabilities {
    if !env.is_browser() {
        return DeviceCapabilities::default();
    }
    let caps = classify(&EnvironmentSignals::read(env));
    debug!(
        "Device profile: mobile={} low_end={} memory={}GB cores={}",
        caps.is_mobile, caps.is_low_end, caps.memory_gb, caps.cpu_cores
    );
    caps
}

/// Derive capabilities from already-defaulted signals.
pub fn classify(signals: &EnvironmentSignals) -> DeviceCapabilities {
    let is_mobile = is_mobile_user_agent(&signals.user_agent);
    let has_high_refresh_rate = signals
        .refresh_rate_hz
        .is_some_and(|hz| hz > STANDARD_REFRESH_HZ);

    let is_low_end = is_mobile
        || signals.memory_gb < MIN_MEMORY_GB
        || signals.cpu_cores < MIN_CPU_CORES
        || !has_high_refresh_rate;

    DeviceCapabilities {
        is_mobile,
        is_low_end,
        has_high_refresh_rate,
        memory_gb: signals.memory_gb,
        cpu_cores: signals.cpu_cores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perf::env::fake::FakeEnvironment;

    const IPHONE_UA: &str =
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148";

    fn baseline() -> EnvironmentSignals {
        EnvironmentSignals {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64)".to_string(),
            memory_gb: 4.0,
            cpu_cores: 4,
            refresh_rate_hz: Some(120.0),
        }
    }

    #[test]
    fn test_mobile_markers_match_case_insensitively() {
        assert!(is_mobile_user_agent(IPHONE_UA));
        assert!(is_mobile_user_agent("Opera/9.80 (J2ME/MIDP; OPERA MINI/9.80)"));
        assert!(is_mobile_user_agent("Mozilla/5.0 (Linux; android 14; Pixel 8)"));
        assert!(!is_mobile_user_agent("Mozilla/5.0 (Macintosh; Intel Mac OS X 14_5)"));
        assert!(!is_mobile_user_agent(""));
    }

    #[test]
    fn test_boundary_device_is_not_low_end() {
        let caps = classify(&baseline());
        assert!(!caps.is_low_end, "4GB/4 cores/120Hz desktop should not be low-end");
        assert!(!caps.is_mobile);
        assert!(caps.has_high_refresh_rate);
    }

    #[test]
    fn test_each_worse_signal_flips_low_end() {
        let mut mobile = baseline();
        mobile.user_agent = IPHONE_UA.to_string();

        let mut small_memory = baseline();
        small_memory.memory_gb = 2.0;

        let mut few_cores = baseline();
        few_cores.cpu_cores = 2;

        let mut standard_display = baseline();
        standard_display.refresh_rate_hz = Some(60.0);

        for (name, signals) in [
            ("mobile", mobile),
            ("memory", small_memory),
            ("cores", few_cores),
            ("refresh", standard_display),
        ] {
            assert!(classify(&signals).is_low_end, "{} should flip is_low_end", name);
        }
    }

    #[test]
    fn test_unreported_refresh_rate_counts_as_low_end() {
        let env = FakeEnvironment {
            refresh_rate: None,
            ..FakeEnvironment::desktop()
        };
        let caps = profile(&env);
        assert!(!caps.has_high_refresh_rate);
        assert!(caps.is_low_end);
    }

    #[test]
    fn test_non_browser_returns_fixed_record() {
        let env = FakeEnvironment {
            browser: false,
            memory_gb: Some(16.0),
            ..FakeEnvironment::desktop()
        };
        let caps = profile(&env);
        assert_eq!(caps, DeviceCapabilities::default());
        assert_eq!(caps.memory_gb, 0.0);
        assert_eq!(caps.cpu_cores, 0);
        assert!(!caps.is_low_end);
    }

    #[test]
    fn test_desktop_profile_reports_signals() {
        let caps = profile(&FakeEnvironment::desktop());
        assert_eq!(caps.memory_gb, 8.0);
        assert_eq!(caps.cpu_cores, 8);
        assert!(!caps.is_low_end);
    }
}

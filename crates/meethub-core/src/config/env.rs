#[must_use]
pub(super) fn read_env_usize(name: &str, default_value: usize, min_value: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|value| *value >= min_value)
        .unwrap_or(default_value)
}

/// Non-negative finite float, or the default when unset or unparsable.
#[must_use]
pub(super) fn read_env_f32(name: &str, default_value: f32) -> f32 {
    parse_non_negative_f32(std::env::var(name).ok().as_deref()).unwrap_or(default_value)
}

#[must_use]
pub(super) fn parse_non_negative_f32(raw: Option<&str>) -> Option<f32> {
    raw.and_then(|value| value.trim().parse::<f32>().ok())
        .filter(|value| value.is_finite() && *value >= 0.0)
}

#[must_use]
pub(super) fn parse_enabled_default_true(raw: Option<&str>) -> bool {
    !matches!(
        raw.map(|value| value.trim().to_ascii_lowercase())
            .as_deref(),
        Some("off" | "none" | "0" | "false")
    )
}

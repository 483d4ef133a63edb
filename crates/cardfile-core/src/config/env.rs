#[must_use]
pub(super) fn read_env_u32(name: &str, default_value: u32) -> u32 {
    parse_u32(std::env::var(name).ok().as_deref(), default_value)
}

/// Invalid or missing values fall back to the default; weight overrides
/// are tuning, not correctness, so they never fail startup.
#[must_use]
pub(super) fn parse_u32(raw: Option<&str>, default_value: u32) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .unwrap_or(default_value)
}

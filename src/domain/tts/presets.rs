/// Preset names understood by the engine, in advertised order.
pub const PRESETS: [&str; 7] = [
    "single_sample",
    "ultra_fast",
    "very_fast",
    "ultra_fast_old",
    "fast",
    "standard",
    "high_quality",
];

pub fn list_presets() -> Vec<String> {
    PRESETS.iter().map(|p| p.to_string()).collect()
}

//! Tunable constants for the repair pipeline, collected in one place so a
//! host can override them (e.g. from a TOML file via the example CLI)
//! without touching pipeline code.

use serde::{Deserialize, Serialize};

/// Iteration caps, tolerances, and other numeric knobs for [`crate::driver`].
///
/// `Default` reproduces the constants named throughout the component design:
/// `N_nm = 100`, `N_h = 10,000`, a loop search cap of 300, a stuck cap of 50,
/// a quantisation scale of `1e6`, and a progress interval of 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepairConfig {
    /// Max passes of the non-manifold resolver before giving up.
    pub nm_iteration_cap: usize,
    /// Max iterations of the hole-fill convergence loop.
    pub hole_fill_iteration_cap: usize,
    /// Max path length (vertices) explored by a single loop-finder DFS.
    pub loop_search_cap: usize,
    /// Consecutive non-improving hole-fill iterations before stopping.
    pub stuck_cap: usize,
    /// Coordinate quantisation scale for vertex welding (`round(coord * scale)`).
    pub weld_scale: f64,
    /// Emit a progress token every this many hole-fill iterations.
    pub progress_interval: usize,
}

impl Default for RepairConfig {
    fn default() -> Self {
        RepairConfig {
            nm_iteration_cap: 100,
            hole_fill_iteration_cap: 10_000,
            loop_search_cap: 300,
            stuck_cap: 50,
            weld_scale: 1_000_000.0,
            progress_interval: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_spec_constants() {
        let cfg = RepairConfig::default();
        assert_eq!(cfg.nm_iteration_cap, 100);
        assert_eq!(cfg.hole_fill_iteration_cap, 10_000);
        assert_eq!(cfg.loop_search_cap, 300);
        assert_eq!(cfg.stuck_cap, 50);
        assert_eq!(cfg.weld_scale, 1_000_000.0);
        assert_eq!(cfg.progress_interval, 100);
    }

    #[test]
    fn roundtrips_through_toml() {
        let cfg = RepairConfig::default();
        let text = toml::to_string(&cfg).unwrap();
        let back: RepairConfig = toml::from_str(&text).unwrap();
        assert_eq!(cfg, back);
    }
}

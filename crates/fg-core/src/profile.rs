//! Per-vertex runtime profiling records.

/// Handshake statistics gathered for one stream port during a profiling run.
///
/// Produced by an external collector; function-valued constants are computed
/// from an ordered slice of these (one per relevant vertex).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexProfile {
    pub elements: u32,
    pub valids: u32,
    pub readies: u32,
    pub transfers: u32,
    pub packets: u32,
    pub cycles: u32,
}

impl VertexProfile {
    /// Fraction of cycles in which a transfer happened (0 when nothing was measured).
    pub fn utilization(&self) -> f64 {
        if self.cycles == 0 {
            return 0.0;
        }
        f64::from(self.transfers) / f64::from(self.cycles)
    }
}

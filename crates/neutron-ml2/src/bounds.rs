//! Per network type numeric bounds.
//!
//! | Network type | Field     | Min | Max           | Max span  |
//! |--------------|-----------|-----|---------------|-----------|
//! | VLAN         | vlan id   | 1   | 4094          | -         |
//! | VXLAN/GENEVE | VNI       | 1   | 16,777,215    | -         |
//! | GRE          | tunnel id | 0   | 4,294,967,295 | 1,000,000 |
//!
//! GENEVE `max_header_size` is only checked for presence.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Overlay IP versions accepted for `overlay_ip_version`.
pub const OVERLAY_IP_VERSIONS: [u8; 2] = [4, 6];

/// ML2 network types (type driver names).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    Local,
    Flat,
    Vlan,
    Gre,
    Vxlan,
    Geneve,
}

impl NetworkType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            NetworkType::Local => "local",
            NetworkType::Flat => "flat",
            NetworkType::Vlan => "vlan",
            NetworkType::Gre => "gre",
            NetworkType::Vxlan => "vxlan",
            NetworkType::Geneve => "geneve",
        }
    }

    /// Id field whose ranges this network type allocates from.
    pub const fn range_kind(&self) -> Option<RangeKind> {
        match self {
            NetworkType::Vlan => Some(RangeKind::VlanId),
            NetworkType::Gre => Some(RangeKind::TunnelId),
            NetworkType::Vxlan | NetworkType::Geneve => Some(RangeKind::Vni),
            NetworkType::Local | NetworkType::Flat => None,
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "local" => NetworkType::Local,
            "flat" => NetworkType::Flat,
            "vlan" => NetworkType::Vlan,
            "gre" => NetworkType::Gre,
            "vxlan" => NetworkType::Vxlan,
            "geneve" => NetworkType::Geneve,
            other => return Err(format!("Unknown network type: {}", other)),
        })
    }
}

/// Range-valued parameters, one per id space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeKind {
    /// `network_vlan_ranges`
    VlanId,
    /// `tunnel_id_ranges` (GRE)
    TunnelId,
    /// `vni_ranges` (VXLAN and GENEVE)
    Vni,
}

impl RangeKind {
    /// Parameter holding ranges of this kind.
    pub const fn option(&self) -> &'static str {
        match self {
            RangeKind::VlanId => "network_vlan_ranges",
            RangeKind::TunnelId => "tunnel_id_ranges",
            RangeKind::Vni => "vni_ranges",
        }
    }

    /// Message for malformed or inverted ranges.
    pub const fn invalid_message(&self) -> &'static str {
        match self {
            RangeKind::VlanId => "network vlan ranges are invalid.",
            RangeKind::TunnelId => "tunnel id ranges are invalid.",
            RangeKind::Vni => "vni ranges are invalid.",
        }
    }

    /// Message for ranges outside the id space.
    pub const fn out_of_bounds_message(&self) -> &'static str {
        match self {
            RangeKind::VlanId => "vlan id are invalid.",
            RangeKind::TunnelId => "tunnel id ranges are to large.",
            RangeKind::Vni => "vni ranges are invalid.",
        }
    }

    /// Network type reported when a range of this kind is rejected.
    pub const fn network_type(&self) -> NetworkType {
        match self {
            RangeKind::VlanId => NetworkType::Vlan,
            RangeKind::TunnelId => NetworkType::Gre,
            RangeKind::Vni => NetworkType::Vxlan,
        }
    }
}

impl fmt::Display for RangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.option())
    }
}

/// Inclusive id interval, optionally limiting how many ids one range spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub min: u64,
    pub max: u64,
    pub max_span: Option<u64>,
}

impl Bounds {
    pub const fn new(min: u64, max: u64) -> Self {
        Self {
            min,
            max,
            max_span: None,
        }
    }

    pub const fn with_max_span(mut self, max_span: u64) -> Self {
        self.max_span = Some(max_span);
        self
    }

    /// Returns true if `low..=high` is ordered and lies within the bounds.
    pub const fn contains(&self, low: u64, high: u64) -> bool {
        if low > high || low < self.min || high > self.max {
            return false;
        }
        match self.max_span {
            Some(span) => high - low <= span,
            None => true,
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)?;
        if let Some(span) = self.max_span {
            write!(f, " spanning at most {} ids", span)?;
        }
        Ok(())
    }
}

/// Bounds for every range kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundsTable {
    pub vlan_id: Bounds,
    pub tunnel_id: Bounds,
    pub vni: Bounds,
}

/// Global bounds table.
pub static BOUNDS: BoundsTable = BoundsTable {
    // 0 and 4095 are reserved by 802.1Q
    vlan_id: Bounds::new(1, 4094),
    // GRE key is 32 bits wide; a single range may not allocate more than 1M ids
    tunnel_id: Bounds::new(0, u32::MAX as u64).with_max_span(1_000_000),
    // 24-bit VNI
    vni: Bounds::new(1, (1 << 24) - 1),
};

impl BoundsTable {
    pub const fn for_kind(&self, kind: RangeKind) -> Bounds {
        match kind {
            RangeKind::VlanId => self.vlan_id,
            RangeKind::TunnelId => self.tunnel_id,
            RangeKind::Vni => self.vni,
        }
    }

    /// Bounds for a network type; `None` for types without an id space.
    pub const fn for_network_type(&self, network_type: NetworkType) -> Option<Bounds> {
        match network_type.range_kind() {
            Some(kind) => Some(self.for_kind(kind)),
            None => None,
        }
    }

    /// Returns true if `low..=high` is a valid range for `network_type`.
    pub const fn in_bounds(&self, network_type: NetworkType, low: u64, high: u64) -> bool {
        match self.for_network_type(network_type) {
            Some(bounds) => bounds.contains(low, high),
            None => false,
        }
    }
}

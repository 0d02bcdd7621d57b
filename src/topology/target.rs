//! Monitored roles and their addresses.

use std::fmt;

/// A device role in the monitored topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Perimeter firewall.
    Firewall,
    /// Core switch behind the firewall.
    CoreSwitch,
    /// Primary internal datacenter.
    InternalDc1,
    /// Secondary internal datacenter.
    InternalDc2,
    /// DNS forwarder.
    DnsForwarder,
    /// Wireless access point.
    Wap,
    /// WiFi controller.
    WifiController,
    /// Primary external test target.
    ExternalTestIp,
    /// Secondary external test target.
    ExternalTestIp2,
}

impl Role {
    /// Every role, in check order.
    pub const ALL: [Self; 9] = [
        Self::Firewall,
        Self::CoreSwitch,
        Self::InternalDc1,
        Self::InternalDc2,
        Self::DnsForwarder,
        Self::Wap,
        Self::WifiController,
        Self::ExternalTestIp,
        Self::ExternalTestIp2,
    ];

    /// Returns the configuration key and snapshot field name.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Firewall => "firewall",
            Self::CoreSwitch => "core_switch",
            Self::InternalDc1 => "internal_dc1",
            Self::InternalDc2 => "internal_dc2",
            Self::DnsForwarder => "dns_forwarder",
            Self::Wap => "wap",
            Self::WifiController => "wifi_controller",
            Self::ExternalTestIp => "external_test_ip",
            Self::ExternalTestIp2 => "external_test_ip2",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Addresses of all nine roles.
///
/// Built once at startup from validated configuration and never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSet {
    addresses: [String; 9],
}

impl TargetSet {
    /// Creates a target set from a lookup that must answer for every role.
    ///
    /// Returns the first role the lookup has no address for.
    ///
    /// # Errors
    ///
    /// Returns `Err(role)` for the first role (in [`Role::ALL`] order) without an address.
    pub fn try_from_fn<F>(mut lookup: F) -> Result<Self, Role>
    where
        F: FnMut(Role) -> Option<String>,
    {
        let mut addresses: [String; 9] = Default::default();
        for role in Role::ALL {
            addresses[role.index()] = lookup(role).ok_or(role)?;
        }
        Ok(Self { addresses })
    }

    /// Returns the address configured for `role`.
    #[must_use]
    pub fn address(&self, role: Role) -> &str {
        &self.addresses[role.index()]
    }

    /// Iterates over `(role, address)` pairs in check order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &str)> {
        Role::ALL.into_iter().map(|role| (role, self.address(role)))
    }
}

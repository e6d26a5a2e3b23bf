//! Pack variants and the overlay tiers each one is assembled from.

use std::fmt;

/// A named combination of overlay tiers produced for one modloader/game-version pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Giga,
    Nano,
    Server,
}

impl Variant {
    /// Order in which a full build produces the variants.
    pub const BUILD_ORDER: [Variant; 3] = [Variant::Giga, Variant::Nano, Variant::Server];

    /// Directory name used for this variant on disk.
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Giga => "giga",
            Variant::Nano => "nano",
            Variant::Server => "server",
        }
    }

    /// Tiers merged into this variant's output, in merge order.
    ///
    /// Later tiers overwrite earlier ones on file collisions.
    pub fn tiers(self) -> &'static [Tier] {
        match self {
            Variant::Server => &[Tier::Framework, Tier::Server],
            Variant::Nano => &[Tier::Framework, Tier::Server, Tier::Nano],
            Variant::Giga => &[Tier::Framework, Tier::Server, Tier::Nano, Tier::Giga],
        }
    }

    /// Whether this variant ships the client-side menu assets (nano and giga).
    pub fn is_client(self) -> bool {
        matches!(self, Variant::Nano | Variant::Giga)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One overlay layer merged into an output tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// The variant's packwiz tree from the PackFramework checkout.
    Framework,
    /// `mod/<modloader>/all/server`, the common base layer for every variant.
    Server,
    Nano,
    Giga,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Framework => "framework",
            Tier::Server => "server",
            Tier::Nano => "nano",
            Tier::Giga => "giga",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_order() {
        assert_eq!(
            Variant::BUILD_ORDER,
            [Variant::Giga, Variant::Nano, Variant::Server]
        );
    }

    #[test]
    fn test_server_tiers() {
        assert_eq!(Variant::Server.tiers(), &[Tier::Framework, Tier::Server]);
        assert!(!Variant::Server.is_client());
    }

    #[test]
    fn test_giga_tiers_in_precedence_order() {
        assert_eq!(
            Variant::Giga.tiers(),
            &[Tier::Framework, Tier::Server, Tier::Nano, Tier::Giga]
        );
        assert!(Variant::Giga.is_client());
        assert!(Variant::Nano.is_client());
    }

    #[test]
    fn test_display() {
        assert_eq!(Variant::Nano.to_string(), "nano");
        assert_eq!(Tier::Framework.to_string(), "framework");
    }
}

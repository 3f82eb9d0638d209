//! Defines the fixed catalog of motorcycles offered for purchase.

use dioxus::prelude::*;

const NMAX_ICON: Asset = asset!("/assets/icons/nmax.svg");
const ZX25R_ICON: Asset = asset!("/assets/icons/zx25r.svg");
const CBR25_ICON: Asset = asset!("/assets/icons/cbr25.svg");

/// Represents a motorcycle model, containing its name, icon, and unit price.
///
/// The catalog is fixed at compile time; iteration order is the order the
/// models appear on screen.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, strum::EnumIter)]
pub enum Moto {
    Nmax,
    Zx25r,
    Cbr25,
}

impl Moto {
    /// Display name, used in the list, the order summary, and the share text.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Nmax => "NMAX",
            Self::Zx25r => "ZX25R",
            Self::Cbr25 => "CBR25",
        }
    }

    /// Unit price in whole US dollars.
    pub fn price(&self) -> u32 {
        match self {
            Self::Nmax => 2708,
            Self::Zx25r => 6292,
            Self::Cbr25 => 4907,
        }
    }

    /// The list icon for this model.
    pub fn icon(&self) -> Asset {
        match self {
            Self::Nmax => NMAX_ICON,
            Self::Zx25r => ZX25R_ICON,
            Self::Cbr25 => CBR25_ICON,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn catalog_lists_three_models_in_order() {
        let models: Vec<Moto> = Moto::iter().collect();
        assert_eq!(models, vec![Moto::Nmax, Moto::Zx25r, Moto::Cbr25]);
    }

    #[test]
    fn prices_match_the_listing() {
        assert_eq!(Moto::Nmax.price(), 2708);
        assert_eq!(Moto::Zx25r.price(), 6292);
        assert_eq!(Moto::Cbr25.price(), 4907);
    }

    #[test]
    fn names_are_model_codes() {
        assert_eq!(Moto::Nmax.name(), "NMAX");
        assert_eq!(Moto::Zx25r.name(), "ZX25R");
        assert_eq!(Moto::Cbr25.name(), "CBR25");
    }
}

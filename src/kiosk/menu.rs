//! Static menu catalog.
//!
//! Both catalogs are fixed at build time. Selection goes through the [`Plat`]
//! and [`Dessert`] enums, so an order can only ever reference an item that
//! exists.

use std::fmt;

/// A dish as shown on a menu card and in the item detail dialog.
#[derive(Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub name: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub composition: &'static [&'static str],
    pub allergens: &'static [&'static str],
}

impl MenuItem {
    pub fn has_allergens(&self) -> bool {
        !self.allergens.is_empty()
    }
}

static POULET_ROTI: MenuItem = MenuItem {
    name: "Poulet Rôti aux Herbes",
    image: "https://images.unsplash.com/photo-1598103442097-8b74394b95c6?auto=format&fit=crop&w=800&q=80",
    description: "Poulet fermier rôti aux herbes de Provence, accompagné de pommes de terre grenailles et légumes de saison",
    composition: &[
        "Poulet fermier Label Rouge",
        "Herbes de Provence",
        "Pommes de terre grenailles",
        "Carottes",
        "Courgettes",
    ],
    allergens: &[],
};

static GRATIN_DAUPHINOIS: MenuItem = MenuItem {
    name: "Gratin Dauphinois Végétarien",
    image: "https://images.unsplash.com/photo-1568574728383-011f8c185af0?auto=format&fit=crop&w=800&q=80",
    description: "Gratin de pommes de terre et légumes, préparé avec une sauce crémeuse aux trois fromages",
    composition: &[
        "Pommes de terre",
        "Crème fraîche",
        "Emmental",
        "Comté",
        "Gruyère",
        "Oignons",
        "Ail",
    ],
    allergens: &["Lait"],
};

static TARTE_POMMES: MenuItem = MenuItem {
    name: "Tarte aux Pommes",
    image: "https://images.unsplash.com/photo-1568571780765-9276ac8b75a2?auto=format&fit=crop&w=800&q=80",
    description: "Tarte fine aux pommes caramélisées sur une pâte feuilletée maison",
    composition: &[
        "Pommes Golden",
        "Pâte feuilletée",
        "Sucre roux",
        "Cannelle",
        "Beurre",
    ],
    allergens: &["Gluten", "Lait", "Œufs"],
};

static MOUSSE_CHOCOLAT: MenuItem = MenuItem {
    name: "Mousse au Chocolat",
    image: "https://images.unsplash.com/photo-1541783245831-57d6fb0926d3?auto=format&fit=crop&w=800&q=80",
    description: "Mousse aérienne au chocolat noir 70% de cacao",
    composition: &["Chocolat noir 70%", "Œufs", "Sucre", "Crème"],
    allergens: &["Œufs", "Lait", "Soja"],
};

/// Main dishes, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plat {
    PouletRoti,
    GratinDauphinois,
}

impl Plat {
    pub const ALL: [Plat; 2] = [Plat::PouletRoti, Plat::GratinDauphinois];

    pub fn item(self) -> &'static MenuItem {
        match self {
            Plat::PouletRoti => &POULET_ROTI,
            Plat::GratinDauphinois => &GRATIN_DAUPHINOIS,
        }
    }

    pub fn name(self) -> &'static str {
        self.item().name
    }
}

impl fmt::Display for Plat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Desserts, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dessert {
    TarteAuxPommes,
    MousseAuChocolat,
}

impl Dessert {
    pub const ALL: [Dessert; 2] = [Dessert::TarteAuxPommes, Dessert::MousseAuChocolat];

    pub fn item(self) -> &'static MenuItem {
        match self {
            Dessert::TarteAuxPommes => &TARTE_POMMES,
            Dessert::MousseAuChocolat => &MOUSSE_CHOCOLAT,
        }
    }

    pub fn name(self) -> &'static str {
        self.item().name
    }
}

impl fmt::Display for Dessert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Either kind of dish, for the item detail dialog which serves both
/// selection screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Plat(Plat),
    Dessert(Dessert),
}

impl MenuChoice {
    pub fn item(self) -> &'static MenuItem {
        match self {
            MenuChoice::Plat(p) => p.item(),
            MenuChoice::Dessert(d) => d.item(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_names_are_unique() {
        let mut names: Vec<&str> = Plat::ALL.iter().map(|p| p.name()).collect();
        names.extend(Dessert::ALL.iter().map(|d| d.name()));
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_catalog_contents() {
        assert_eq!(Plat::PouletRoti.name(), "Poulet Rôti aux Herbes");
        assert!(!Plat::PouletRoti.item().has_allergens());
        assert_eq!(Plat::GratinDauphinois.item().allergens, &["Lait"]);
        assert_eq!(Dessert::TarteAuxPommes.to_string(), "Tarte aux Pommes");
        assert_eq!(
            Dessert::MousseAuChocolat.item().allergens,
            &["Œufs", "Lait", "Soja"]
        );
        assert_eq!(Plat::GratinDauphinois.item().composition.len(), 7);
    }

    #[test]
    fn test_menu_choice_resolves_item() {
        assert_eq!(
            MenuChoice::Dessert(Dessert::TarteAuxPommes).item().name,
            "Tarte aux Pommes"
        );
        assert_eq!(
            MenuChoice::Plat(Plat::GratinDauphinois).item(),
            Plat::GratinDauphinois.item()
        );
    }
}

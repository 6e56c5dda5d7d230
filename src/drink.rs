//! Bebidas que sirve la maquina
use std::fmt::{ self, Display };

pub const TOTAL_DRINK_KINDS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrinkKind {
    Water,
    Coffee,
    Cappuccino,
    HotChocolate,
}

impl DrinkKind {
    /// Todas las bebidas, en el orden en que aparecen en el menu
    pub const ALL: [DrinkKind; TOTAL_DRINK_KINDS] = [
        DrinkKind::Water,
        DrinkKind::Coffee,
        DrinkKind::Cappuccino,
        DrinkKind::HotChocolate,
    ];

    pub fn identifier(&self) -> &'static str {
        match self {
            DrinkKind::Water => "Water",
            DrinkKind::Coffee => "Coffee",
            DrinkKind::Cappuccino => "Cappuccino",
            DrinkKind::HotChocolate => "HotChocolate",
        }
    }
}

/// Bebida terminada. Solo sabe de que tipo es.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drink {
    pub kind: DrinkKind,
}

impl Drink {
    pub fn new(kind: DrinkKind) -> Drink {
        Drink { kind }
    }

    /// Mensaje con el que se sirve la bebida
    pub fn consume(&self) -> String {
        self.to_string()
    }
}

impl Display for Drink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.kind {
            DrinkKind::Water => "Warm water",
            DrinkKind::Coffee => "Coffee",
            DrinkKind::Cappuccino => "Cappuccino",
            DrinkKind::HotChocolate => "Hot chocolate",
        };
        write!(f, "{} is served.", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serve_coffee() {
        assert_eq!("Coffee is served.", Drink::new(DrinkKind::Coffee).consume());
    }

    #[test]
    fn should_serve_water_as_warm_water() {
        assert_eq!("Warm water is served.", Drink::new(DrinkKind::Water).consume());
    }

    #[test]
    fn should_serve_hot_chocolate() {
        assert_eq!("Hot chocolate is served.", Drink::new(DrinkKind::HotChocolate).consume());
    }

    #[test]
    fn should_list_every_kind_once() {
        for (i, kind) in DrinkKind::ALL.iter().enumerate() {
            assert_eq!(1, DrinkKind::ALL.iter().filter(|k| *k == kind).count());
            assert_eq!(i, DrinkKind::ALL.iter().position(|k| k == kind).unwrap());
        }
    }
}

//! Preparadores de bebidas. Cada uno describe los pasos para preparar su bebida.
use log::debug;

use crate::drink::{ Drink, DrinkKind };

/// Preparador de una bebida
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrinkPreparer {
    kind: DrinkKind,
}

/// Resultado de preparar una bebida: la narracion de los pasos y la bebida lista
#[derive(Debug, PartialEq, Eq)]
pub struct Preparation {
    pub narration: String,
    pub drink: Drink,
}

impl DrinkPreparer {
    pub fn for_kind(kind: DrinkKind) -> DrinkPreparer {
        DrinkPreparer { kind }
    }

    pub fn kind(&self) -> DrinkKind {
        self.kind
    }

    /// Prepara `volume_ml` mililitros de la bebida. El volumen ya viene validado (mayor a cero).
    pub fn prepare(&self, volume_ml: u32) -> Preparation {
        let narration = match self.kind {
            DrinkKind::Water => format!("Pour {} ml hot water in your cup", volume_ml),
            DrinkKind::Coffee => format!("Grind coffee beans and brew {} ml coffee", volume_ml),
            DrinkKind::Cappuccino =>
                format!(
                    "Grind coffee beans, brew {} ml coffee, froth milk, and mix all ingredients for a cappuccino",
                    volume_ml
                ),
            // El chocolate no menciona el volumen
            DrinkKind::HotChocolate =>
                String::from(
                    "Pouring hot water into the cup, then mixing in some chocolate powder then it's ready to serve"
                ),
        };
        debug!("[PREPARER] Prepared {} ml of {:?}", volume_ml, self.kind);
        Preparation {
            narration,
            drink: Drink::new(self.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_brew_coffee_with_the_requested_volume() {
        let preparation = DrinkPreparer::for_kind(DrinkKind::Coffee).prepare(200);
        assert_eq!("Grind coffee beans and brew 200 ml coffee", preparation.narration);
        assert_eq!(Drink::new(DrinkKind::Coffee), preparation.drink);
    }

    #[test]
    fn should_pour_water_with_the_requested_volume() {
        let preparation = DrinkPreparer::for_kind(DrinkKind::Water).prepare(150);
        assert_eq!("Pour 150 ml hot water in your cup", preparation.narration);
        assert_eq!(DrinkKind::Water, preparation.drink.kind);
    }

    #[test]
    fn should_mention_the_volume_for_every_drink_but_hot_chocolate() {
        for kind in DrinkKind::ALL {
            let preparation = DrinkPreparer::for_kind(kind).prepare(4321);
            assert_eq!(kind, preparation.drink.kind);
            assert_eq!(kind != DrinkKind::HotChocolate, preparation.narration.contains("4321"));
        }
    }

    #[test]
    fn should_map_kinds_back_and_forth() {
        for kind in DrinkKind::ALL {
            assert_eq!(kind, DrinkPreparer::for_kind(kind).kind());
        }
    }
}

//! Maquina de bebidas calientes. Arma el registro una vez y atiende un pedido.
use std::io::{ BufRead, Write };

use log::info;

use crate::{ errors::VendingMachineError, order_loop::OrderLoop, registry::PreparerRegistry };

pub struct VendingMachine {
    registry: PreparerRegistry,
}

impl VendingMachine {
    pub fn new() -> VendingMachine {
        let registry = PreparerRegistry::new();
        debug_assert!(!registry.is_empty());
        VendingMachine { registry }
    }

    /// Toma un pedido y sirve la bebida resultante
    pub fn make_drink<R: BufRead, W: Write>(
        &self,
        input: R,
        output: W
    ) -> Result<(), VendingMachineError> {
        let mut order_loop = OrderLoop::new(&self.registry, input, output);
        let drink = order_loop.take_order()?;
        order_loop.serve(drink)?;
        info!("[MACHINE] Served {:?}", drink.kind);
        Ok(())
    }
}

impl Default for VendingMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn should_serve_one_drink_per_order() {
        let machine = VendingMachine::new();
        let mut output = Vec::new();
        machine.make_drink(Cursor::new("2\n200\n1\n100\n"), &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.ends_with("Grind coffee beans and brew 200 ml coffee\nCoffee is served.\n"));
        assert_eq!(1, output.matches("is served.").count());
    }

    #[test]
    fn should_propagate_closed_input() {
        let machine = VendingMachine::new();
        let result = machine.make_drink(Cursor::new("x\n"), Vec::new());
        assert!(matches!(result, Err(VendingMachineError::InputClosed)));
    }
}

//! Ciclo de pedido. Es el unico componente que lee y escribe en consola.
use std::io::{ BufRead, Write };

use log::{ debug, info, warn };

use crate::{
    constants::{ FIRST_MENU_NUMBER, MENU_HEADER, RETRY_MESSAGE, SELECTION_PROMPT, VOLUME_PROMPT },
    drink::Drink,
    errors::VendingMachineError,
    preparer::DrinkPreparer,
    registry::PreparerRegistry,
};

/// Estados del pedido. Cualquier entrada invalida vuelve a `PresentMenu`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OrderState {
    PresentMenu,
    AwaitSelection,
    AwaitVolume(DrinkPreparer),
    Dispense(DrinkPreparer, u32),
}

pub struct OrderLoop<'a, R, W> {
    registry: &'a PreparerRegistry,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> OrderLoop<'a, R, W> {
    pub fn new(registry: &'a PreparerRegistry, input: R, output: W) -> OrderLoop<'a, R, W> {
        OrderLoop { registry, input, output }
    }

    /// Muestra el menu y pide bebida y cantidad hasta que ambas sean validas.
    /// Prepara exactamente una bebida. Si se cierra la entrada devuelve `InputClosed`.
    pub fn take_order(&mut self) -> Result<Drink, VendingMachineError> {
        let registry = self.registry;
        let mut state = OrderState::PresentMenu;
        loop {
            state = match state {
                OrderState::PresentMenu => {
                    self.present_menu()?;
                    OrderState::AwaitSelection
                }
                OrderState::AwaitSelection => {
                    let line = self.read_line()?;
                    match parse_selection(&line, registry.len()) {
                        Ok(selection) =>
                            match registry.get(selection) {
                                Some(preparer) => {
                                    debug!("[ORDER] Selected {}: {:?}", selection, preparer.kind());
                                    OrderState::AwaitVolume(*preparer)
                                }
                                None => self.retry()?,
                            }
                        Err(_) => self.retry()?,
                    }
                }
                OrderState::AwaitVolume(preparer) => {
                    write!(self.output, "{}", VOLUME_PROMPT)?;
                    self.output.flush()?;
                    let line = self.read_line()?;
                    match parse_volume(&line) {
                        Ok(volume_ml) => OrderState::Dispense(preparer, volume_ml),
                        Err(_) => self.retry()?,
                    }
                }
                OrderState::Dispense(preparer, volume_ml) => {
                    let preparation = preparer.prepare(volume_ml);
                    writeln!(self.output, "{}", preparation.narration)?;
                    info!("[ORDER] Dispensed {} ml of {:?}", volume_ml, preparation.drink.kind);
                    return Ok(preparation.drink);
                }
            };
        }
    }

    /// Sirve la bebida mostrando su mensaje
    pub fn serve(&mut self, drink: Drink) -> Result<(), VendingMachineError> {
        writeln!(self.output, "{}", drink.consume())?;
        self.output.flush()?;
        Ok(())
    }

    fn present_menu(&mut self) -> Result<(), VendingMachineError> {
        writeln!(self.output, "{}", MENU_HEADER)?;
        for (index, entry) in self.registry.list().iter().enumerate() {
            writeln!(self.output, "{}: {}", index + FIRST_MENU_NUMBER, entry.display_name)?;
        }
        writeln!(self.output, "{}", SELECTION_PROMPT)?;
        Ok(())
    }

    fn retry(&mut self) -> Result<OrderState, VendingMachineError> {
        writeln!(self.output, "{}", RETRY_MESSAGE)?;
        Ok(OrderState::PresentMenu)
    }

    /// Lee una linea. Los bytes que no son UTF-8 se reemplazan y la linea despues no se puede parsear.
    fn read_line(&mut self) -> Result<String, VendingMachineError> {
        let mut buffer = Vec::new();
        if self.input.read_until(b'\n', &mut buffer)? == 0 {
            warn!("[ORDER] Input closed while waiting for an answer");
            return Err(VendingMachineError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

/// Numero de menu valido: entero entre 1 y la cantidad de bebidas
fn parse_selection(line: &str, entries: usize) -> Result<usize, VendingMachineError> {
    let selection: i32 = line.trim().parse()?;
    usize::try_from(selection)
        .ok()
        .filter(|selection| (FIRST_MENU_NUMBER..FIRST_MENU_NUMBER + entries).contains(selection))
        .ok_or(VendingMachineError::InvalidInput)
}

/// Volumen valido: entero mayor a cero
fn parse_volume(line: &str) -> Result<u32, VendingMachineError> {
    let volume: i32 = line.trim().parse()?;
    u32::try_from(volume)
        .ok()
        .filter(|volume| *volume > 0)
        .ok_or(VendingMachineError::InvalidInput)
}

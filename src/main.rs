pub mod constants;
pub mod drink;
pub mod errors;
pub mod order_loop;
pub mod preparer;
pub mod registry;
pub mod vending_machine;

use std::{ io, process };

use log::{ error, LevelFilter };
use simple_logger::SimpleLogger;

use vending_machine::VendingMachine;

fn main() {
    if let Err(err) = SimpleLogger::new().with_level(LevelFilter::Warn).env().init() {
        eprintln!("Could not start the logger: {}", err);
    }

    let machine = VendingMachine::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = machine.make_drink(stdin.lock(), stdout.lock()) {
        error!("[MACHINE] Order not completed: {}", err);
        process::exit(1);
    }
}

//! Errores de la maquina de bebidas
use std::{ fmt, io };

#[derive(Debug)]
pub enum VendingMachineError {
    /// La entrada no es un numero valido o esta fuera de rango. Se recupera volviendo a preguntar.
    InvalidInput,
    /// Se cerro la entrada estandar mientras se esperaba una respuesta
    InputClosed,
    Io(io::Error),
}

impl fmt::Display for VendingMachineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VendingMachineError::InvalidInput => write!(f, "invalid input"),
            VendingMachineError::InputClosed => write!(f, "input closed before an order was completed"),
            VendingMachineError::Io(err) => write!(f, "console error: {}", err),
        }
    }
}

impl std::error::Error for VendingMachineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VendingMachineError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for VendingMachineError {
    fn from(err: io::Error) -> Self {
        VendingMachineError::Io(err)
    }
}

impl From<std::num::ParseIntError> for VendingMachineError {
    fn from(_: std::num::ParseIntError) -> Self {
        VendingMachineError::InvalidInput
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_parse_errors_into_invalid_input() {
        let err: VendingMachineError = "abc".parse::<i32>().unwrap_err().into();
        assert!(matches!(err, VendingMachineError::InvalidInput));
    }

    #[test]
    fn should_keep_the_io_error_as_source() {
        let err: VendingMachineError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!("console error: closed", err.to_string());
    }
}

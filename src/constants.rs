//! Textos y parametros de la maquina de bebidas calientes

/// Encabezado del menu, se imprime antes de las bebidas numeradas
pub const MENU_HEADER: &str = "This is what we serve today:";

/// Pedido de seleccion, va en su propia linea
pub const SELECTION_PROMPT: &str = "Select a number to continue:";

/// Pedido de cantidad. No termina en salto de linea, la respuesta se escribe a continuacion.
pub const VOLUME_PROMPT: &str = "How much do you want of your product, in ml? ";

/// Mensaje que se muestra ante cualquier entrada invalida antes de volver a mostrar el menu
pub const RETRY_MESSAGE: &str = "Something went wrong with your input, try again.";

/// Primer numero del menu
pub const FIRST_MENU_NUMBER: usize = 1;

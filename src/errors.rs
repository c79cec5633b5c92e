// Archivo: errors.rs
// Propósito: definir el error público del crate y el alias Result<T> usado
// por las APIs. Todo fallo interno (payload, hook, store) se presenta al
// caller como un único `PersisterError` con mensaje y código numérico.
use thiserror::Error;

/// Error único del persister.
///
/// Cualquier fallo de normalización, filtrado, transformación o del store
/// delegado se re-señala como esta única variante, preservando el mensaje
/// y el código numérico del fallo original. No hay reintentos ni estado
/// parcial: la llamada completa falla o tiene éxito.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("error de persistencia: {message} (codigo {code})")]
pub struct PersisterError {
    /// Mensaje del fallo original, sin modificar.
    pub message: String,
    /// Código numérico del fallo original (0 si no aplica).
    pub code: i64,
}

impl PersisterError {
    /// Construye un error con mensaje y código explícitos.
    pub fn new(message: impl Into<String>, code: i64) -> Self {
        Self { message: message.into(), code }
    }

    /// Error por payload no resoluble a un mapa de atributos. El código es
    /// 0 (no hay código subyacente que preservar).
    pub fn invalid_payload(message: impl Into<String>) -> Self {
        Self::new(message, 0)
    }

    /// Mensaje del fallo original.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Código numérico del fallo original.
    pub fn code(&self) -> i64 {
        self.code
    }
}

/// Alias de resultado usado por las APIs del crate.
pub type Result<T> = std::result::Result<T, PersisterError>;

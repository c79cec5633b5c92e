// Archivo: store.rs
// Propósito: definir el trait `ModelStore`, el contrato que deben
// implementar los stores concretos (ORM, base de datos, memoria). El
// persister sólo normaliza y despacha; la persistencia real vive detrás
// de este contrato.
use crate::domain::Attributes;
use crate::errors::PersisterError;
use thiserror::Error;

/// Error interno de un store, con mensaje y código numérico.
///
/// Es la moneda de fallo de los delegados: el persister lo mapea a
/// `PersisterError` en el borde de `persist`, preservando mensaje y código.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct StoreError {
    pub message: String,
    pub code: i64,
}

impl StoreError {
    /// Construye un error de store con mensaje y código.
    pub fn new(message: impl Into<String>, code: i64) -> Self {
        Self { message: message.into(), code }
    }
}

impl From<StoreError> for PersisterError {
    fn from(e: StoreError) -> Self {
        PersisterError::new(e.message, e.code)
    }
}

/// Contrato mínimo del store de modelos.
///
/// Las dos operaciones reciben atributos ya filtrados y transformados; la
/// semántica de retorno (típicamente una referencia al registro persistido)
/// es propiedad del store concreto.
pub trait ModelStore: Send + Sync {
    /// Referencia opaca a un registro ya persistido. El persister nunca la
    /// inspecciona; sólo la pasa a `update`.
    type Handle;
    /// Resultado de create/update, definido por la implementación.
    type Record;
    /// Error interno del store; se mapea a `PersisterError` en el borde.
    type Error: Into<PersisterError>;

    /// Crea un nuevo registro a partir de los atributos.
    fn create(&self, data: Attributes) -> std::result::Result<Self::Record, Self::Error>;

    /// Actualiza el registro referido por `handle` con los atributos.
    fn update(&self, data: Attributes, handle: &Self::Handle) -> std::result::Result<Self::Record, Self::Error>;
}

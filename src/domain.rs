// Archivo: domain.rs
// Propósito: tipos de dominio del persister: el mapa ordenado de atributos,
// la capacidad `Arrayable` (conversión a atributos) y el enum `Payload`,
// que resuelve la entrada una sola vez en el borde de la llamada.
use crate::errors::{PersisterError, Result};
use indexmap::IndexMap;
use serde_json::Value as JsonValue;

/// Mapa ordenado de atributos (clave -> valor JSON).
///
/// Preserva el orden de inserción del payload original; el filtrado por
/// allow-list mantiene el orden relativo de las claves retenidas.
pub type Attributes = IndexMap<String, JsonValue>;

/// Capacidad de conversión a atributos.
///
/// Equivalente a un objeto "array-convertible": una única operación sin
/// argumentos que devuelve el mapa de atributos a persistir.
pub trait Arrayable {
    /// Devuelve la representación del objeto como atributos.
    fn to_attributes(&self) -> Attributes;
}

/// Payload de entrada al persister.
///
/// Sum type resuelto una sola vez mediante pattern matching, en lugar de
/// inspección dinámica de tipos:
/// - `Map`: mapa de atributos ya normalizado.
/// - `Arrayable`: objeto convertible; se invoca `to_attributes` al resolver.
/// - `Json`: valor JSON arbitrario; debe ser un objeto para resolverse.
pub enum Payload<'a> {
    Map(Attributes),
    Arrayable(&'a dyn Arrayable),
    Json(JsonValue),
}

impl Payload<'_> {
    /// Normaliza el payload a `Attributes`.
    ///
    /// Un `Json` que no sea objeto es un error explícito: no se intenta
    /// coerción elemento a elemento de valores arbitrarios.
    pub fn resolve(self) -> Result<Attributes> {
        match self {
            Payload::Map(attrs) => Ok(attrs),
            Payload::Arrayable(obj) => Ok(obj.to_attributes()),
            Payload::Json(JsonValue::Object(map)) => Ok(map.into_iter().collect()),
            Payload::Json(other) => {
                Err(PersisterError::invalid_payload(format!("el payload no es un mapa de atributos: {}",
                                                            kind_of(&other))))
            }
        }
    }
}

/// Nombre del tipo JSON, para mensajes de error.
fn kind_of(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

impl From<Attributes> for Payload<'static> {
    fn from(attrs: Attributes) -> Self {
        Payload::Map(attrs)
    }
}

impl From<JsonValue> for Payload<'static> {
    fn from(value: JsonValue) -> Self {
        Payload::Json(value)
    }
}

impl<'a, T: Arrayable> From<&'a T> for Payload<'a> {
    fn from(obj: &'a T) -> Self {
        Payload::Arrayable(obj)
    }
}

//! Crate `persister` — normalización, filtrado y despacho de persistencia
//!
//! Este crate define los tipos de payload (`Attributes`, `Arrayable`,
//! `Payload`), el contrato de persistencia `ModelStore` y el motor
//! `Persister`, que normaliza la entrada, aplica la allow-list de claves y
//! el hook de transformación por campo, y despacha a `create` (sin handle)
//! o `update` (con handle). Incluye una implementación en memoria útil
//! para pruebas (`InMemoryModelStore`).
//!
//! Diseño resumido:
//! - Payload como sum type: la entrada se resuelve una sola vez en el
//!   borde de la llamada; JSON que no sea objeto es un error explícito.
//! - Store por composición: `create`/`update` son operaciones de un trait
//!   inyectado, no hooks de herencia.
//! - Error único: todo fallo interno se presenta como `PersisterError`,
//!   preservando mensaje y código del fallo original.
//!
//! Ejemplo rápido:
//! ```rust
//! use persister::stubs::InMemoryModelStore;
//! use persister::{Persister, PersisterConfig};
//! use serde_json::json;
//! use std::sync::Arc;
//! let store = Arc::new(InMemoryModelStore::new());
//! let persister = Persister::new(store, PersisterConfig::new());
//! let record = persister.persist(json!({"first_name": "John"}), None).unwrap();
//! assert_eq!(record.attributes["first_name"], json!("John"));
//! ```
pub mod domain;
pub mod errors;
pub mod persister;
pub mod store;
pub mod stubs;

pub use domain::*;
pub use errors::*;
pub use persister::*;
pub use store::*;
pub use stubs::*;

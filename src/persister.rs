// Archivo: persister.rs
// Propósito: implementar el motor `Persister`: normaliza el payload,
// aplica el filtro por allow-list y el hook de transformación, y despacha
// a `create` o `update` del `ModelStore` inyectado. No persiste nada por
// sí mismo.
use crate::domain::{Attributes, Payload};
use crate::errors::Result;
use crate::store::ModelStore;
use log::debug;
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// Hook de transformación por campo.
///
/// Se invoca con `(clave, valor)` para cada entrada retenida tras el
/// filtrado; puede mutar el valor in place. Un error aborta la llamada
/// completa a `persist`.
pub type TransformFn = Box<dyn Fn(&str, &mut JsonValue) -> Result<()> + Send + Sync>;

/// Configuración del persister, fijada en la construcción.
///
/// - `keys`: allow-list de claves a retener. Vacía = sin filtrado.
/// - `transform`: hook por campo opcional. Ausente = no-op.
#[derive(Default)]
pub struct PersisterConfig {
    keys: Vec<String>,
    transform: Option<TransformFn>,
}

impl PersisterConfig {
    /// Configuración vacía: sin filtrado y sin transformación.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fija la allow-list de claves.
    pub fn keys<I, K>(mut self, keys: I) -> Self
        where I: IntoIterator<Item = K>,
              K: Into<String>
    {
        self.keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Fija el hook de transformación por campo.
    pub fn transform<F>(mut self, f: F) -> Self
        where F: Fn(&str, &mut JsonValue) -> Result<()> + Send + Sync + 'static
    {
        self.transform = Some(Box::new(f));
        self
    }
}

/// Motor de persistencia por normalización y despacho.
///
/// Responsabilidades:
/// - Resolver el `Payload` a `Attributes` una sola vez.
/// - Filtrar por la allow-list configurada, preservando el orden relativo.
/// - Aplicar el hook de transformación a cada entrada retenida.
/// - Despachar a `create` (sin handle) o `update` (con handle) del store.
///
/// Nota sobre errores: los fallos del store se mapean a `PersisterError`
/// en el punto de despacho; es el único punto de re-envoltura. Cada
/// llamada a `persist` es independiente y sin estado más allá de la
/// configuración, que es de sólo lectura.
pub struct Persister<S>
    where S: ModelStore
{
    store: Arc<S>,
    config: PersisterConfig,
}

impl<S> Persister<S> where S: ModelStore
{
    /// Crea el persister inyectando el store y la configuración.
    pub fn new(store: Arc<S>, config: PersisterConfig) -> Self {
        Self { store, config }
    }

    /// Allow-list de claves configurada.
    pub fn keys(&self) -> &[String] {
        &self.config.keys
    }

    /// Persiste el payload: crea un registro nuevo o actualiza el referido
    /// por `handle`.
    ///
    /// Input:
    /// - `payload`: mapa de atributos, objeto `Arrayable` o valor JSON
    ///   (debe ser un objeto).
    /// - `handle`: referencia opaca a un registro existente; `None`
    ///   selecciona la rama de creación.
    ///
    /// Output:
    /// - Lo que devuelva `create`/`update` del store, sin modificar.
    /// - `Err(PersisterError)` ante cualquier fallo de normalización,
    ///   transformación o del store, con mensaje y código preservados.
    pub fn persist<'a>(&self, payload: impl Into<Payload<'a>>, handle: Option<&S::Handle>) -> Result<S::Record> {
        let data = payload.into().resolve()?;
        let data = self.filter_data(data)?;

        match handle {
            Some(h) => {
                debug!("persist: update con {} atributos", data.len());
                self.store.update(data, h).map_err(Into::into)
            }
            None => {
                debug!("persist: create con {} atributos", data.len());
                self.store.create(data).map_err(Into::into)
            }
        }
    }

    /// Aplica la allow-list y el hook de transformación.
    ///
    /// El filtrado retiene sólo las claves permitidas manteniendo su orden
    /// relativo original; el hook corre únicamente sobre las entradas
    /// retenidas.
    fn filter_data(&self, mut data: Attributes) -> Result<Attributes> {
        if !self.config.keys.is_empty() {
            data.retain(|key, _| self.config.keys.iter().any(|allowed| allowed == key));
        }

        if let Some(transform) = &self.config.transform {
            for (key, value) in data.iter_mut() {
                transform(key, value)?;
            }
        }

        Ok(data)
    }
}

// Archivo: stubs.rs
// Propósito: implementación en memoria del `ModelStore` para pruebas y
// wiring rápido. No es durable: guarda los registros en un `HashMap`
// protegido por `Mutex` y registra cada llamada a create/update para que
// las pruebas puedan verificar el despacho.
use crate::domain::Attributes;
use crate::store::{ModelStore, StoreError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

/// Registro almacenado por el store en memoria.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredRecord {
    pub id: Uuid,
    pub attributes: Attributes,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Minimal in-memory store for wiring examples and tests (not durable)
pub struct InMemoryModelStore {
    /// Registros indexados por id.
    records: Mutex<HashMap<Uuid, StoredRecord>>,
    /// Atributos recibidos por cada llamada a `create`.
    create_calls: Mutex<Vec<Attributes>>,
    /// Atributos y handle recibidos por cada llamada a `update`.
    update_calls: Mutex<Vec<(Attributes, Uuid)>>,
    /// Fallo inyectado: la próxima operación lo devuelve y lo consume.
    fail_next: Mutex<Option<StoreError>>,
}

impl InMemoryModelStore {
    /// Crea una nueva instancia del store en memoria.
    pub fn new() -> Self {
        Self { records: Mutex::new(HashMap::new()),
               create_calls: Mutex::new(Vec::new()),
               update_calls: Mutex::new(Vec::new()),
               fail_next: Mutex::new(None) }
    }

    /// Helper para mapear `Mutex::lock()` en un `Result` con `StoreError`.
    fn lock<'a, T>(&'a self, m: &'a Mutex<T>) -> std::result::Result<MutexGuard<'a, T>, StoreError> {
        m.lock().map_err(|e| StoreError::new(format!("mutex poisoned: {:?}", e), 0))
    }

    /// Inyecta un fallo: la próxima llamada a create/update lo devuelve.
    pub fn fail_next(&self, error: StoreError) {
        *self.fail_next.lock().unwrap_or_else(|e| e.into_inner()) = Some(error);
    }

    /// Devuelve el registro por id, si existe.
    pub fn get(&self, id: &Uuid) -> Option<StoredRecord> {
        self.records.lock().unwrap_or_else(|e| e.into_inner()).get(id).cloned()
    }

    /// Número de registros almacenados.
    pub fn len(&self) -> usize {
        self.records.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Indica si el store está vacío.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Atributos recibidos por cada llamada a `create`, en orden.
    pub fn create_calls(&self) -> Vec<Attributes> {
        self.create_calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Pares (atributos, handle) recibidos por cada llamada a `update`.
    pub fn update_calls(&self) -> Vec<(Attributes, Uuid)> {
        self.update_calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Consume el fallo inyectado, si existe.
    fn take_failure(&self) -> std::result::Result<(), StoreError> {
        let mut slot = self.lock(&self.fail_next)?;
        match slot.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Default for InMemoryModelStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelStore for InMemoryModelStore {
    type Handle = Uuid;
    type Record = StoredRecord;
    type Error = StoreError;

    /// Crea un registro nuevo: genera el id, sella los timestamps y guarda
    /// los atributos tal cual llegan (ya filtrados/transformados).
    fn create(&self, data: Attributes) -> std::result::Result<StoredRecord, StoreError> {
        self.take_failure()?;

        self.lock(&self.create_calls)?.push(data.clone());

        let now = Utc::now();
        let record = StoredRecord { id: Uuid::new_v4(),
                                    attributes: data,
                                    created_at: now,
                                    updated_at: now };
        self.lock(&self.records)?.insert(record.id, record.clone());
        Ok(record)
    }

    /// Actualiza el registro referido por `handle`: reemplaza los atributos
    /// recibidos y sella `updated_at`. Handle desconocido es un error.
    fn update(&self, data: Attributes, handle: &Uuid) -> std::result::Result<StoredRecord, StoreError> {
        self.take_failure()?;

        self.lock(&self.update_calls)?.push((data.clone(), *handle));

        let mut records = self.lock(&self.records)?;
        let record = records.get_mut(handle)
                            .ok_or_else(|| StoreError::new(format!("registro {} no encontrado", handle), 404))?;
        for (key, value) in data {
            record.attributes.insert(key, value);
        }
        record.updated_at = Utc::now();
        Ok(record.clone())
    }
}

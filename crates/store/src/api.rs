//! The mock backend's public contract.
//!
//! Every operation is a single-step read-snapshot → mutate → write against
//! one whole persisted slot value. An operation either fully applies its
//! mutation and persists, or applies nothing; no other operation observes an
//! intermediate state.

use std::thread;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

use sugarrush_auth::{AuthResponse, Identity, resolve_credentials};
use sugarrush_catalog::{NewProduct, Product, ProductPatch, initial_catalog};
use sugarrush_core::{DomainError, ProductId};

use crate::storage::{Slot, Storage, StorageError};

/// Failure of a store operation.
///
/// Domain failures (`NotFound`, `InsufficientStock`, validation) are the
/// caller-visible contract; storage failures are backend IO trouble.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// The domain failure behind this error, if it is one.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            ApiError::Domain(err) => Some(err),
            ApiError::Storage(_) => None,
        }
    }
}

/// The catalog & session store.
///
/// Owns the single source of truth for inventory state and the active
/// session. Callers (pages, CLI, tests) go through these operations; nothing
/// else writes to the underlying slots.
#[derive(Debug)]
pub struct StoreApi<S: Storage> {
    storage: S,
    latency: Option<Duration>,
}

impl<S: Storage> StoreApi<S> {
    /// Open a store over `storage`, seeding the catalog slot with the fixed
    /// initial set if it has never been written.
    pub fn open(storage: S) -> Result<Self, ApiError> {
        let api = Self {
            storage,
            latency: None,
        };
        if api.storage.read(Slot::Catalog)?.is_none() {
            let seed = initial_catalog();
            info!(products = seed.len(), "seeding catalog");
            api.save_catalog(&seed)?;
        }
        Ok(api)
    }

    /// Inject an artificial delay before every operation.
    ///
    /// Presentation affordance for loading-state demos; carries no semantic
    /// contract and is off by default.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            thread::sleep(latency);
        }
    }

    /// Read the catalog snapshot. Absent or unparseable content is an empty
    /// catalog (defensive default), never an error.
    fn load_catalog(&self) -> Result<Vec<Product>, ApiError> {
        let Some(raw) = self.storage.read(Slot::Catalog)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(products) => Ok(products),
            Err(err) => {
                warn!(slot = %Slot::Catalog, %err, "unparseable catalog slot, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    fn save_catalog(&self, products: &[Product]) -> Result<(), ApiError> {
        let raw = serde_json::to_string(products).map_err(StorageError::from)?;
        self.storage.write(Slot::Catalog, &raw)?;
        Ok(())
    }

    // ─── session ─────────────────────────────────────────────────────────

    /// Authenticate a credential pair and record the session.
    ///
    /// Never fails for bad credentials: unrecognized pairs auto-provision a
    /// fresh customer identity (the demo's documented mock policy).
    pub fn authenticate(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.simulate_latency();
        let response = resolve_credentials(username, password);

        let raw = serde_json::to_string(&response.identity).map_err(StorageError::from)?;
        self.storage.write(Slot::Identity, &raw)?;
        self.storage.write(Slot::Token, &response.token)?;

        info!(
            user = %response.identity.id,
            role = %response.identity.role,
            "session started"
        );
        Ok(response)
    }

    /// Clear the active session. Idempotent, no error conditions.
    pub fn end_session(&self) -> Result<(), ApiError> {
        self.storage.remove(Slot::Identity)?;
        self.storage.remove(Slot::Token)?;
        info!("session ended");
        Ok(())
    }

    /// The active identity, if a session is recorded and parses.
    pub fn current_identity(&self) -> Result<Option<Identity>, ApiError> {
        let Some(raw) = self.storage.read(Slot::Identity)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(identity) => Ok(Some(identity)),
            Err(err) => {
                warn!(slot = %Slot::Identity, %err, "unparseable identity slot, treating as signed out");
                Ok(None)
            }
        }
    }

    // ─── catalog ─────────────────────────────────────────────────────────

    /// The full catalog, in storage order.
    pub fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.simulate_latency();
        self.load_catalog()
    }

    /// Linear lookup by id.
    pub fn get_product(&self, id: &ProductId) -> Result<Option<Product>, ApiError> {
        self.simulate_latency();
        let products = self.load_catalog()?;
        Ok(products.into_iter().find(|p| p.id == *id))
    }

    /// Create a product under a freshly assigned id and persist it.
    pub fn create_product(&self, draft: NewProduct) -> Result<Product, ApiError> {
        self.simulate_latency();
        draft.validate()?;

        let mut products = self.load_catalog()?;
        let product = draft.into_product(ProductId::generate());
        products.push(product.clone());
        self.save_catalog(&products)?;

        info!(product = %product.id, name = %product.name, "product created");
        Ok(product)
    }

    /// Shallow-merge `patch` over the product with the given id.
    pub fn update_product(&self, id: &ProductId, patch: ProductPatch) -> Result<Product, ApiError> {
        self.simulate_latency();
        let mut products = self.load_catalog()?;
        let product = products
            .iter_mut()
            .find(|p| p.id == *id)
            .ok_or(DomainError::NotFound)?;

        patch.apply(product);
        let updated = product.clone();
        self.save_catalog(&products)?;

        info!(product = %updated.id, "product updated");
        Ok(updated)
    }

    /// Remove the product with the given id, if present. Idempotent.
    pub fn delete_product(&self, id: &ProductId) -> Result<(), ApiError> {
        self.simulate_latency();
        let mut products = self.load_catalog()?;
        let before = products.len();
        products.retain(|p| p.id != *id);

        if products.len() == before {
            debug!(product = %id, "delete of absent product, nothing to do");
            return Ok(());
        }

        self.save_catalog(&products)?;
        info!(product = %id, "product deleted");
        Ok(())
    }

    /// Atomically check and decrement stock.
    ///
    /// Fails with `NotFound` for an unknown id and `InsufficientStock` when
    /// `amount` exceeds the available quantity; in both cases the stored
    /// catalog is untouched.
    pub fn purchase(&self, id: &ProductId, amount: u32) -> Result<Product, ApiError> {
        self.simulate_latency();
        let mut products = self.load_catalog()?;
        let product = products
            .iter_mut()
            .find(|p| p.id == *id)
            .ok_or(DomainError::NotFound)?;

        product.take_stock(amount)?;
        let updated = product.clone();
        self.save_catalog(&products)?;

        info!(
            product = %updated.id,
            amount,
            remaining = updated.quantity,
            "purchase completed"
        );
        Ok(updated)
    }
}

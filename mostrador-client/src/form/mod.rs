//! Product create/edit form controller
//!
//! Headless version of the product dialog: it owns the draft, decides
//! create vs edit from the record's identity key, applies the stock
//! projection at submit and reports outcomes through the two parent
//! callbacks. Rendering is someone else's job.

mod draft;

pub use draft::{FieldEdit, ProductoDraft, StockMode};

use shared::Producto;

use crate::api::ProductosApi;
use crate::client::HttpClient;
use crate::error::{ClientError, FormError};

/// Shown when a save fails and the backend supplied no message of its own
const SAVE_ERROR_FALLBACK: &str = "Error al guardar el producto.";

/// Parent-side callback, fired without arguments
pub type Callback = Box<dyn Fn() + Send + Sync>;

/// Create vs edit, derived from the record's identity key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    /// Updating the persisted row with this id
    Edit(i64),
}

/// Controller for the product create/edit dialog
///
/// Owns the draft for exactly one open/close cycle. The parent view owns
/// the persisted record and refreshes itself from `on_success`; nothing
/// here mutates parent state directly.
pub struct ProductoForm<C: HttpClient> {
    api: ProductosApi<C>,
    record: Option<Producto>,
    draft: ProductoDraft,
    categories: Vec<String>,
    submitting: bool,
    error: Option<String>,
    on_close: Callback,
    on_success: Callback,
}

impl<C: HttpClient> ProductoForm<C> {
    /// Open the dialog: edit when the record carries an id, create otherwise
    pub fn new(
        client: C,
        record: Option<Producto>,
        categories: Vec<String>,
        on_close: Callback,
        on_success: Callback,
    ) -> Self {
        let draft = Self::draft_for(&record);
        Self {
            api: ProductosApi::new(client),
            record,
            draft,
            categories,
            submitting: false,
            error: None,
            on_close,
            on_success,
        }
    }

    fn draft_for(record: &Option<Producto>) -> ProductoDraft {
        // only a persisted record populates the draft; anything without
        // an identity key opens as a fresh create
        match record {
            Some(r) if r.id.is_some() => ProductoDraft::from_record(r),
            _ => ProductoDraft::default(),
        }
    }

    /// Point the dialog at another record (or at none, for create) and
    /// rebuild the draft in full. The error slot and the submitting flag
    /// are not part of the draft and stay as they are.
    pub fn set_record(&mut self, record: Option<Producto>) {
        self.draft = Self::draft_for(&record);
        self.record = record;
    }

    /// Apply one field edit from the input layer
    pub fn set_field(&mut self, edit: FieldEdit) {
        self.draft.apply(edit);
    }

    /// Create vs edit. Only the identity key decides; a record without
    /// an id is treated as absent.
    pub fn mode(&self) -> FormMode {
        match self.record.as_ref().and_then(|r| r.id) {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode(), FormMode::Edit(_))
    }

    /// Which stock sub-form should be visible
    pub fn stock_mode(&self) -> StockMode {
        self.draft.stock_mode()
    }

    /// Suggestions for the category input
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn draft(&self) -> &ProductoDraft {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Current inline error, rendered inside the dialog
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Close without saving
    pub fn cancel(&self) {
        (self.on_close)();
    }

    /// Save the draft.
    ///
    /// Returns `Err` only for boundary validation (empty name, bad
    /// price) and re-entrance; those leave the error slot alone. Save
    /// failures of any kind land in [`Self::error`] as a single line,
    /// the backend's own message when it sent one, and are not returned.
    /// On success `on_success` fires exactly once; closing the dialog
    /// stays the parent's decision.
    ///
    /// Dropping the returned future aborts the request; there is no
    /// other cancellation.
    pub async fn submit(&mut self) -> Result<(), FormError> {
        if self.submitting {
            return Err(FormError::SubmitInFlight);
        }
        let payload = self.draft.to_payload()?;

        self.submitting = true;
        self.error = None;

        let result = match self.mode() {
            FormMode::Edit(id) => {
                tracing::info!(id, nombre = %payload.nombre, "Updating product");
                self.api.update(id, &payload).await
            }
            FormMode::Create => {
                tracing::info!(nombre = %payload.nombre, "Creating product");
                self.api.create(&payload).await
            }
        };
        self.submitting = false;

        match result {
            Ok(_) => {
                (self.on_success)();
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Saving product failed: {}", e);
                self.error = Some(display_error(e));
                Ok(())
            }
        }
    }
}

/// Map a save failure to the single line shown inside the dialog
fn display_error(error: ClientError) -> String {
    match error {
        ClientError::Api {
            message: Some(message),
            ..
        } => message,
        ClientError::Api { message: None, .. } => SAVE_ERROR_FALLBACK.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::OneshotHttpClient;
    use crate::credential::Anonymous;
    use axum::Router;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn noop() -> Callback {
        Box::new(|| {})
    }

    fn counting() -> (Callback, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let inner = count.clone();
        let callback: Callback = Box::new(move || {
            inner.fetch_add(1, Ordering::SeqCst);
        });
        (callback, count)
    }

    fn offline_client() -> OneshotHttpClient {
        OneshotHttpClient::new(Router::new(), Arc::new(Anonymous))
    }

    fn create_form() -> ProductoForm<OneshotHttpClient> {
        ProductoForm::new(offline_client(), None, vec![], noop(), noop())
    }

    #[test]
    fn test_create_mode_without_record() {
        let form = create_form();
        assert_eq!(form.mode(), FormMode::Create);
        assert!(!form.is_editing());
        assert_eq!(form.draft().nombre, "");
        assert!(form.error().is_none());
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_edit_mode_needs_identity_key() {
        let with_id = Producto {
            id: Some(42),
            nombre: Some("Harina".into()),
            ..Producto::default()
        };
        let form = ProductoForm::new(offline_client(), Some(with_id), vec![], noop(), noop());
        assert_eq!(form.mode(), FormMode::Edit(42));
        assert!(form.is_editing());

        // a record that was never persisted is treated as absent: create
        // mode, fresh draft
        let without_id = Producto {
            id: None,
            nombre: Some("Harina".into()),
            ..Producto::default()
        };
        let form = ProductoForm::new(offline_client(), Some(without_id), vec![], noop(), noop());
        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.draft(), &ProductoDraft::default());
    }

    #[test]
    fn test_set_record_rebuilds_draft_in_full() {
        let mut form = create_form();
        form.set_field(FieldEdit::Nombre("a medio escribir".into()));
        form.set_field(FieldEdit::PrecioUnitario("99".into()));

        let record = Producto {
            id: Some(1),
            nombre: Some("Fideos".into()),
            ..Producto::default()
        };
        form.set_record(Some(record));
        assert_eq!(form.mode(), FormMode::Edit(1));
        assert_eq!(form.draft().nombre, "Fideos");
        // not merged: the unrelated edit is gone too
        assert_eq!(form.draft().precio_unitario, "");

        form.set_record(None);
        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.draft(), &ProductoDraft::default());
    }

    #[test]
    fn test_stock_mode_follows_toggle() {
        let mut form = create_form();
        assert_eq!(form.stock_mode(), StockMode::Untracked);
        form.set_field(FieldEdit::ControlaStock(true));
        assert_eq!(form.stock_mode(), StockMode::Tracked);
    }

    #[test]
    fn test_categories_are_exposed_for_suggestions() {
        let categories = vec!["Almacén".to_string(), "Bebidas".to_string()];
        let form = ProductoForm::new(offline_client(), None, categories.clone(), noop(), noop());
        assert_eq!(form.categories(), categories.as_slice());
    }

    #[test]
    fn test_cancel_fires_on_close_only() {
        let (on_close, closes) = counting();
        let (on_success, successes) = counting();
        let form = ProductoForm::new(offline_client(), None, vec![], on_close, on_success);

        form.cancel();
        assert_eq!(closes.load(Ordering::SeqCst), 1);
        assert_eq!(successes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_submit_boundary_validation_returns_err() {
        let mut form = create_form();
        let result = form.submit().await;
        assert!(matches!(result, Err(FormError::MissingField("nombre"))));
        // boundary failures never touch the inline slot or the flag
        assert!(form.error().is_none());
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_submit_rejects_reentrance() {
        let mut form = create_form();
        form.set_field(FieldEdit::Nombre("Pan".into()));
        form.set_field(FieldEdit::PrecioUnitario("10".into()));

        form.submitting = true;
        let result = form.submit().await;
        assert!(matches!(result, Err(FormError::SubmitInFlight)));
    }
}

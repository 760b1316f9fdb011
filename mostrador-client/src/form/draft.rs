//! Draft state for the product form

use shared::{Disponibilidad, Producto, ProductoPayload};

use crate::error::FormError;

/// Which stock sub-form is visible
///
/// Pure projection of `controla_stock`. Both stock values stay in the
/// draft whichever mode is active, so toggling loses nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockMode {
    /// Numeric quantity is authoritative, the flag is derived from it
    Tracked,
    /// The flag is entered directly, the quantity is forced to 0 on submit
    Untracked,
}

/// One field edit coming from the input layer
///
/// Text inputs send their raw text; nothing is coerced here.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    CodigoSku(String),
    Nombre(String),
    Descripcion(String),
    PrecioUnitario(String),
    Stock(Disponibilidad),
    ImagenUrl(String),
    Categoria(String),
    ControlaStock(bool),
    StockCantidad(String),
}

/// Unsaved form state for one product
///
/// Numeric fields hold the text as entered; parsing happens once, at
/// submit. The `Default` impl is the empty create dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductoDraft {
    pub codigo_sku: String,
    pub nombre: String,
    pub descripcion: String,
    pub precio_unitario: String,
    pub stock: Disponibilidad,
    pub imagen_url: String,
    pub categoria: String,
    pub controla_stock: bool,
    pub stock_cantidad: String,
}

impl Default for ProductoDraft {
    fn default() -> Self {
        Self {
            codigo_sku: String::new(),
            nombre: String::new(),
            descripcion: String::new(),
            precio_unitario: String::new(),
            stock: Disponibilidad::Si,
            imagen_url: String::new(),
            categoria: String::new(),
            controla_stock: false,
            stock_cantidad: "0".to_string(),
        }
    }
}

impl ProductoDraft {
    /// Build a draft from a stored record, field by field, falling back
    /// to the create defaults for anything the record does not carry.
    pub fn from_record(record: &Producto) -> Self {
        Self {
            codigo_sku: record.codigo_sku.clone().unwrap_or_default(),
            nombre: record.nombre.clone().unwrap_or_default(),
            descripcion: record.descripcion.clone().unwrap_or_default(),
            precio_unitario: record
                .precio_unitario
                .map(|v| v.to_string())
                .unwrap_or_default(),
            stock: record
                .stock
                .as_deref()
                .map(Disponibilidad::from_text)
                .unwrap_or_default(),
            imagen_url: record.imagen_url.clone().unwrap_or_default(),
            categoria: record.categoria.clone().unwrap_or_default(),
            controla_stock: record.controla_stock.unwrap_or(false),
            stock_cantidad: record
                .stock_cantidad
                .map(|v| v.to_string())
                .unwrap_or_else(|| "0".to_string()),
        }
    }

    /// Apply one edit. No validation, no side effects on other fields;
    /// in particular, toggling tracking keeps both stock values.
    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::CodigoSku(v) => self.codigo_sku = v,
            FieldEdit::Nombre(v) => self.nombre = v,
            FieldEdit::Descripcion(v) => self.descripcion = v,
            FieldEdit::PrecioUnitario(v) => self.precio_unitario = v,
            FieldEdit::Stock(v) => self.stock = v,
            FieldEdit::ImagenUrl(v) => self.imagen_url = v,
            FieldEdit::Categoria(v) => self.categoria = v,
            FieldEdit::ControlaStock(v) => self.controla_stock = v,
            FieldEdit::StockCantidad(v) => self.stock_cantidad = v,
        }
    }

    /// Stock sub-form selector
    pub fn stock_mode(&self) -> StockMode {
        if self.controla_stock {
            StockMode::Tracked
        } else {
            StockMode::Untracked
        }
    }

    /// Re-check what the input layer is supposed to guarantee: a name,
    /// and a price that is present and numeric.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.nombre.trim().is_empty() {
            return Err(FormError::MissingField("nombre"));
        }
        if self.precio_unitario.trim().is_empty() {
            return Err(FormError::MissingField("precio_unitario"));
        }
        self.precio_parsed().map(|_| ())
    }

    fn precio_parsed(&self) -> Result<f64, FormError> {
        self.precio_unitario
            .trim()
            .parse::<f64>()
            .map_err(|_| FormError::InvalidPrice(self.precio_unitario.clone()))
    }

    /// Project the draft into the wire payload, applying the stock rule:
    /// when tracking, the quantity is sent as entered (text that does
    /// not parse becomes `null`) and the flag is derived from it; when
    /// not tracking, the quantity is forced to 0 even if one was entered
    /// and the flag goes out as picked.
    pub fn to_payload(&self) -> Result<ProductoPayload, FormError> {
        self.validate()?;
        let precio_unitario = self.precio_parsed()?;

        let (stock, stock_cantidad) = if self.controla_stock {
            let cantidad = self.stock_cantidad.trim().parse::<f64>().ok();
            let stock = match cantidad {
                Some(n) if n > 0.0 => Disponibilidad::Si,
                _ => Disponibilidad::No,
            };
            (stock, cantidad)
        } else {
            (self.stock, Some(0.0))
        };

        Ok(ProductoPayload {
            codigo_sku: self.codigo_sku.clone(),
            nombre: self.nombre.clone(),
            descripcion: self.descripcion.clone(),
            precio_unitario,
            stock,
            imagen_url: self.imagen_url.clone(),
            categoria: self.categoria.clone(),
            controla_stock: self.controla_stock,
            stock_cantidad,
        })
    }
}

//! Producto Model

use serde::{Deserialize, Serialize};

/// Availability flag (`stock` on the wire)
///
/// The backend stores availability as literal text, `"Sí"` or `"No"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Disponibilidad {
    #[default]
    #[serde(rename = "Sí")]
    Si,
    No,
}

impl Disponibilidad {
    /// Wire spelling, accent included
    pub fn as_str(&self) -> &'static str {
        match self {
            Disponibilidad::Si => "Sí",
            Disponibilidad::No => "No",
        }
    }

    /// Narrow stored text to a flag. Only exact `"No"` maps to `No`;
    /// legacy rows with any other spelling load as available.
    pub fn from_text(text: &str) -> Self {
        match text {
            "No" => Disponibilidad::No,
            _ => Disponibilidad::Si,
        }
    }
}

impl std::fmt::Display for Disponibilidad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Producto record as served by the backend
///
/// Lenient read model: every field is optional so partial rows and older
/// API versions still deserialize. Display fallbacks belong to the form
/// layer, not here. A record without `id` has never been persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Producto {
    pub id: Option<i64>,
    pub codigo_sku: Option<String>,
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub precio_unitario: Option<f64>,
    /// Stored as free text; narrowed with [`Disponibilidad::from_text`]
    pub stock: Option<String>,
    pub imagen_url: Option<String>,
    pub categoria: Option<String>,
    pub controla_stock: Option<bool>,
    pub stock_cantidad: Option<f64>,
}

/// Create/update request body for `/productos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductoPayload {
    pub codigo_sku: String,
    pub nombre: String,
    pub descripcion: String,
    pub precio_unitario: f64,
    pub stock: Disponibilidad,
    pub imagen_url: String,
    pub categoria: String,
    pub controla_stock: bool,
    /// `None` when tracking is on but the entered quantity does not parse;
    /// serializes as JSON `null`, which the backend treats as missing
    pub stock_cantidad: Option<f64>,
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Item {
  pub id: i64,
  pub nombre: String,
  pub descripcion: Option<String>,
  pub precio: f64,
  pub disponible: bool,
  pub fecha_creacion: NaiveDateTime,
}

// body of POST /api/items and PUT /api/items/{id}
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ItemCreate {
  pub nombre: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub descripcion: Option<String>,
  pub precio: f64,
  pub disponible: bool,
}

impl ItemCreate {
  pub fn new(nombre: &str, descripcion: &str, precio: f64, disponible: bool) -> ItemCreate {
    ItemCreate {
      nombre: nombre.to_string(),
      descripcion: Some(descripcion.to_string()),
      precio,
      disponible,
    }
  }
}

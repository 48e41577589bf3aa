use serde::{Deserialize, Serialize};

// query of GET /api/items
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ItemFilter {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disponible: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub precio_min: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub precio_max: Option<f64>,
}

// query of PATCH /api/items/{id}/disponibilidad
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AvailabilityParam {
  pub disponible: bool,
}

pub fn to_query<T: Serialize>(param: &T) -> Result<String, serde_urlencoded::ser::Error> {
  serde_urlencoded::to_string(param)
}

use application::{
  api::{to_query, AvailabilityParam, ItemFilter},
  item::ItemCreate,
  json::to_curl_string,
};
use reqwest::Method;
use std::error::Error;

/*
  A few of the example calls, as curl would issue them:

  curl "http://localhost:8000/health"
  curl "http://localhost:8000/api/items?disponible=true"
  curl -X POST "http://localhost:8000/api/items" -H "Content-Type: application/json" \
    -d '{"nombre": "Teclado Mecánico", "descripcion": "Teclado RGB para gaming", "precio": 89.99, "disponible": true}'
  # curl -X DELETE "http://localhost:8000/api/items/3"
*/

// id the server hands out to the first item created in scenario 6
const CREATED_ITEM_ID: i64 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Request {
  pub method: Method,
  pub path: String,
  pub query: Option<String>,
  pub body: Option<String>,
}

impl Request {
  fn new(method: Method, path: &str) -> Request {
    Request {
      method,
      path: path.to_string(),
      query: None,
      body: None,
    }
  }

  fn with_query(mut self, query: String) -> Request {
    self.query = Some(query);
    self
  }

  fn with_body(mut self, body: String) -> Request {
    self.body = Some(body);
    self
  }

  pub fn url(&self, base_url: &str) -> String {
    match &self.query {
      Some(q) if !q.is_empty() => format!("{}{}?{}", base_url, self.path, q),
      _ => format!("{}{}", base_url, self.path),
    }
  }

  pub fn to_curl(&self, base_url: &str) -> String {
    let mut cmd = "curl".to_string();
    if self.method != Method::GET {
      cmd.push_str(&format!(" -X {}", self.method));
    }
    cmd.push_str(&format!(" \"{}\"", self.url(base_url)));
    if let Some(body) = &self.body {
      cmd.push_str(&format!(" -H \"Content-Type: application/json\" -d '{}'", body));
    }
    cmd
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
  pub number: usize,
  pub title: &'static str,
  pub request: Request,
  // shown but never sent
  pub inert: bool,
}

impl Scenario {
  fn new(number: usize, title: &'static str, request: Request) -> Scenario {
    Scenario { number, title, request, inert: false }
  }

  fn inert(number: usize, title: &'static str, request: Request) -> Scenario {
    Scenario { number, title, request, inert: true }
  }

  pub fn heading(&self) -> String {
    format!("=== {}. {} ===", self.number, self.title)
  }

  pub fn command_line(&self, base_url: &str) -> String {
    let cmd = self.request.to_curl(base_url);
    if self.inert {
      format!("# {}", cmd)
    } else {
      cmd
    }
  }
}

pub fn scenarios() -> Result<Vec<Scenario>, Box<dyn Error>> {
  let available = ItemFilter { disponible: Some(true), ..Default::default() };
  let price_range = ItemFilter {
    precio_min: Some(50.0),
    precio_max: Some(500.0),
    ..Default::default()
  };
  let new_item = ItemCreate::new("Teclado Mecánico", "Teclado RGB para gaming", 89.99, true);
  let updated_item = ItemCreate::new("Teclado Mecánico Pro", "Teclado RGB con switches Cherry MX", 129.99, true);
  let item_path = format!("/api/items/{}", CREATED_ITEM_ID);

  Ok(vec![
    Scenario::new(1, "Health check",
      Request::new(Method::GET, "/health")),
    Scenario::new(2, "Obtener todos los items",
      Request::new(Method::GET, "/api/items")),
    Scenario::new(3, "Obtener solo items disponibles",
      Request::new(Method::GET, "/api/items").with_query(to_query(&available)?)),
    Scenario::new(4, "Filtrar items por rango de precio",
      Request::new(Method::GET, "/api/items").with_query(to_query(&price_range)?)),
    Scenario::new(5, "Obtener un item específico",
      Request::new(Method::GET, "/api/items/1")),
    Scenario::new(6, "Crear un nuevo item",
      Request::new(Method::POST, "/api/items").with_body(to_curl_string(&new_item)?)),
    Scenario::new(7, "Actualizar un item completo",
      Request::new(Method::PUT, &item_path).with_body(to_curl_string(&updated_item)?)),
    Scenario::new(8, "Cambiar la disponibilidad de un item",
      Request::new(Method::PATCH, &format!("{}/disponibilidad", item_path))
        .with_query(to_query(&AvailabilityParam { disponible: false })?)),
    Scenario::new(9, "Obtener estadísticas",
      Request::new(Method::GET, "/api/stats")),
    Scenario::inert(10, "Eliminar un item (comentado para no borrar datos)",
      Request::new(Method::DELETE, &item_path)),
  ])
}

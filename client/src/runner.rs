use crate::scenario::{Request, Scenario};
use reqwest::{header::CONTENT_TYPE, StatusCode};
use std::io::{self, Write};

#[derive(Debug)]
pub struct Response {
  pub status: StatusCode,
  pub body: Vec<u8>,
}

pub struct Runner {
  http_client: reqwest::Client,
  base_url: String,
}

impl Runner {
  pub fn new(http_client: reqwest::Client, base_url: &str) -> Runner {
    Runner {
      http_client,
      base_url: base_url.trim_end_matches('/').to_string(),
    }
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  pub async fn send(&self, req: &Request) -> Result<Response, reqwest::Error> {
    let url = req.url(&self.base_url);
    let mut builder = self.http_client.request(req.method.clone(), &url);
    if let Some(body) = &req.body {
      builder = builder
        .header(CONTENT_TYPE, "application/json")
        .body(body.clone());
    }

    let resp = builder.send().await?;
    let status = resp.status();
    let body = resp.bytes().await?.to_vec();
    Ok(Response { status, body })
  }

  /// Prints every scenario's heading and curl line to `out`, followed by the
  /// raw response body, byte for byte. A transport error takes the place of
  /// the response and the run carries on with the next scenario.
  pub async fn run<W: Write>(&self, scenarios: &[Scenario], out: &mut W) -> io::Result<()> {
    for scenario in scenarios {
      let n = scenario.number;
      writeln!(out, "{}", scenario.heading())?;
      writeln!(out, "{}", scenario.command_line(&self.base_url))?;

      if scenario.inert {
        log_info!(n, "Example only, not sent");
      } else {
        let req = &scenario.request;
        match self.send(req).await {
          Ok(res) => {
            if res.status.is_success() {
              log_info!(n, format!("{} {} -> {}", req.method, req.path, res.status));
            } else {
              log_warn!(n, format!("{} {} -> {}", req.method, req.path, res.status));
            }
            out.write_all(&res.body)?;
            writeln!(out)?;
          },
          Err(err) => {
            log_error!(n, format!("Failed to send {} {}: {:?}", req.method, req.path, err));
            writeln!(out, "Error: {}", err)?;
          },
        }
      }

      writeln!(out)?;
      out.flush()?;
    }
    Ok(())
  }
}

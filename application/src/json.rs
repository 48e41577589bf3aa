//! JSON rendering in the style used by the curl examples: one line,
//! `": "` after keys and `", "` between members.

use serde::{ser::Error as _, Serialize};
use serde_json::ser::Formatter;
use std::io;

#[derive(Clone, Copy, Debug, Default)]
pub struct CurlFormatter;

impl Formatter for CurlFormatter {
  fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
  where
    W: ?Sized + io::Write,
  {
    if first {
      Ok(())
    } else {
      writer.write_all(b", ")
    }
  }

  fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
  where
    W: ?Sized + io::Write,
  {
    writer.write_all(b": ")
  }

  fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
  where
    W: ?Sized + io::Write,
  {
    if first {
      Ok(())
    } else {
      writer.write_all(b", ")
    }
  }
}

pub fn to_curl_string<T: ?Sized + Serialize>(value: &T) -> serde_json::Result<String> {
  let mut buf = Vec::with_capacity(128);
  let mut ser = serde_json::Serializer::with_formatter(&mut buf, CurlFormatter);
  value.serialize(&mut ser)?;
  String::from_utf8(buf).map_err(serde_json::Error::custom)
}

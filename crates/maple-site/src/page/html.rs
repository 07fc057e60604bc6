//! Minimal HTML generation on top of `quick-xml`'s writer.
//!
//! Text and attribute values are always escaped; there is no way to emit
//! raw markup through this type.

use std::io::Cursor;

use quick_xml::{
  Writer,
  events::{BytesEnd, BytesStart, BytesText, Event},
};

use crate::error::Error;

pub type Attrs<'a> = &'a [(&'a str, &'a str)];

pub struct HtmlWriter {
  writer: Writer<Cursor<Vec<u8>>>,
}

impl HtmlWriter {
  /// Start a document with `<!DOCTYPE html>`.
  pub fn document() -> Result<Self, Error> {
    let mut html = Self { writer: Writer::new(Cursor::new(Vec::new())) };
    html.event(Event::DocType(BytesText::from_escaped("html")))?;
    Ok(html)
  }

  pub fn open(&mut self, tag: &str, attrs: Attrs<'_>) -> Result<(), Error> {
    self.event(Event::Start(start(tag, attrs)))
  }

  pub fn close(&mut self, tag: &str) -> Result<(), Error> {
    self.event(Event::End(BytesEnd::new(tag)))
  }

  pub fn text(&mut self, text: &str) -> Result<(), Error> {
    self.event(Event::Text(BytesText::new(text)))
  }

  /// `<tag attrs>text</tag>`
  pub fn elem(&mut self, tag: &str, attrs: Attrs<'_>, text: &str) -> Result<(), Error> {
    self.open(tag, attrs)?;
    self.text(text)?;
    self.close(tag)
  }

  /// A void element such as `<img>` or `<input>`.
  pub fn void(&mut self, tag: &str, attrs: Attrs<'_>) -> Result<(), Error> {
    self.event(Event::Empty(start(tag, attrs)))
  }

  /// `<tag attrs>` … `</tag>` around whatever `body` writes.
  pub fn wrap<F>(&mut self, tag: &str, attrs: Attrs<'_>, body: F) -> Result<(), Error>
  where
    F: FnOnce(&mut Self) -> Result<(), Error>,
  {
    self.open(tag, attrs)?;
    body(self)?;
    self.close(tag)
  }

  pub fn finish(self) -> Result<String, Error> {
    String::from_utf8(self.writer.into_inner().into_inner())
      .map_err(|e| Error::Render(e.to_string()))
  }

  fn event(&mut self, event: Event<'_>) -> Result<(), Error> {
    self
      .writer
      .write_event(event)
      .map_err(|e| Error::Render(e.to_string()))
  }
}

fn start<'a>(tag: &'a str, attrs: Attrs<'_>) -> BytesStart<'a> {
  let mut el = BytesStart::new(tag);
  for (k, v) in attrs {
    el.push_attribute((*k, *v));
  }
  el
}

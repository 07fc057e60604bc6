//! Server-rendered landing page.
//!
//! [`render`] produces the whole document for a given [`FormState`]; the
//! contact form reflects its field values, status line and submitting flag.

pub mod content;
pub mod html;

use maple_core::{FieldName, FormState, Status};

use crate::error::Error;
use content::*;
use html::HtmlWriter;

/// Path the stylesheet is served from.
pub const STYLESHEET: &str = "/site.css";

pub fn render(form: &FormState) -> Result<String, Error> {
  let mut h = HtmlWriter::document()?;
  h.wrap("html", &[("lang", "en")], |h| {
    head(h)?;
    h.wrap("body", &[], |h| {
      nav(h)?;
      hero(h)?;
      intro(h)?;
      about(h)?;
      what_we_buy(h)?;
      projects(h)?;
      contact(h, form)?;
      footer(h)
    })
  })?;
  h.finish()
}

fn head(h: &mut HtmlWriter) -> Result<(), Error> {
  h.wrap("head", &[], |h| {
    h.void("meta", &[("charset", "utf-8")])?;
    h.void("meta", &[
      ("name", "viewport"),
      ("content", "width=device-width, initial-scale=1"),
    ])?;
    h.elem("title", &[], TITLE)?;
    h.void("meta", &[("name", "description"), ("content", DESCRIPTION)])?;
    h.void("meta", &[("name", "keywords"), ("content", KEYWORDS)])?;
    h.void("meta", &[("name", "author"), ("content", AUTHOR)])?;
    for (property, content) in OPEN_GRAPH {
      h.void("meta", &[("property", property), ("content", content)])?;
    }
    for (name, content) in TWITTER_CARD {
      h.void("meta", &[("name", name), ("content", content)])?;
    }
    h.void("link", &[("rel", "icon"), ("href", FAVICON)])?;
    h.void("link", &[("rel", "canonical"), ("href", CANONICAL_URL)])?;
    h.void("link", &[("rel", "stylesheet"), ("href", STYLESHEET)])
  })
}

fn nav_links(h: &mut HtmlWriter, class: &str) -> Result<(), Error> {
  h.wrap("div", &[("class", class)], |h| {
    for link in &NAV {
      h.elem("a", &[("href", link.href)], link.label)?;
    }
    Ok(())
  })
}

fn nav(h: &mut HtmlWriter) -> Result<(), Error> {
  h.wrap("nav", &[("class", "site-nav")], |h| {
    h.wrap("a", &[("href", "#"), ("class", "brand")], |h| {
      h.void("img", &[("src", LOGO), ("alt", "Maple Prop Logo"), ("height", "40")])
    })?;
    nav_links(h, "nav-desktop")?;
    // Mobile menu: a disclosure widget, toggled without script.
    h.wrap("details", &[("class", "nav-mobile")], |h| {
      h.elem("summary", &[("aria-label", "Menu")], "Menu")?;
      nav_links(h, "nav-mobile-links")
    })
  })
}

fn hero(h: &mut HtmlWriter) -> Result<(), Error> {
  h.wrap("section", &[("class", "hero")], |h| {
    h.void("img", &[
      ("class", "hero-image"),
      ("src", HERO_IMAGE),
      ("alt", "Family walking in nature"),
    ])?;
    h.wrap("div", &[("class", "hero-content")], |h| {
      h.elem("h1", &[], HERO_HEADLINE)?;
      h.elem("p", &[], HERO_TAGLINE)?;
      h.elem("a", &[("href", "#projects"), ("class", "button")], "See Our Work")
    })
  })
}

fn intro(h: &mut HtmlWriter) -> Result<(), Error> {
  h.wrap("section", &[("class", "intro")], |h| {
    for card in &INTRO {
      h.wrap("div", &[("class", "card")], |h| {
        h.void("img", &[
          ("src", card.icon),
          ("alt", card.title),
          ("width", "48"),
          ("height", "48"),
        ])?;
        h.elem("h3", &[], card.title)?;
        h.elem("p", &[], card.body)
      })?;
    }
    Ok(())
  })
}

fn about(h: &mut HtmlWriter) -> Result<(), Error> {
  h.wrap("section", &[("id", "about")], |h| {
    h.elem("h2", &[], ABOUT_HEADING)?;
    h.elem("p", &[("class", "lead")], ABOUT_LEAD)?;
    h.wrap("div", &[("class", "team")], |h| {
      for member in &TEAM {
        h.wrap("div", &[("class", "member")], |h| {
          h.elem("h3", &[], member.name)?;
          h.elem("div", &[("class", "role")], member.role)?;
          h.elem("p", &[], member.bio)
        })?;
      }
      Ok(())
    })?;
    h.elem("p", &[], ABOUT_CLOSING)?;
    h.void("img", &[
      ("src", ABOUT_IMAGE),
      ("alt", "Urban landscape success story"),
      ("width", "500"),
      ("height", "400"),
    ])
  })
}

fn bullet_list(h: &mut HtmlWriter, items: &[&str]) -> Result<(), Error> {
  h.wrap("ul", &[], |h| {
    for item in items {
      h.elem("li", &[], item)?;
    }
    Ok(())
  })
}

fn what_we_buy(h: &mut HtmlWriter) -> Result<(), Error> {
  h.wrap("section", &[("id", "what-we-buy")], |h| {
    h.elem("h2", &[], BUY_HEADING)?;
    h.wrap("div", &[("class", "criteria")], |h| {
      h.elem("h3", &[], "We're actively seeking:")?;
      bullet_list(h, &SEEKING)?;
      h.elem("h3", &[], "We specialise in buying properties with issues such as:")?;
      bullet_list(h, &ISSUES)
    })?;
    h.elem("p", &[], CASH_BUYER)?;
    h.elem("a", &[("href", "#contact"), ("class", "button")], "Got a property to sell? Get in touch \u{2192}")
  })
}

fn projects(h: &mut HtmlWriter) -> Result<(), Error> {
  h.wrap("section", &[("id", "projects")], |h| {
    h.elem("h2", &[], PROJECTS_HEADING)?;
    h.wrap("div", &[("class", "gallery")], |h| {
      for project in &PROJECTS {
        let url = project.image_url();
        h.wrap("article", &[("class", "project")], |h| {
          h.void("img", &[("src", url.as_str()), ("alt", project.alt), ("loading", "lazy")])?;
          h.elem("h3", &[], project.place)?;
          h.elem("p", &[("class", "kind")], project.kind)?;
          h.elem("p", &[], project.summary)
        })?;
      }
      Ok(())
    })
  })
}

fn contact(h: &mut HtmlWriter, form: &FormState) -> Result<(), Error> {
  h.wrap("section", &[("id", "contact")], |h| {
    h.elem("h2", &[], CONTACT_HEADING)?;
    h.elem("p", &[("class", "lead")], CONTACT_LEAD)?;
    contact_form(h, form)?;
    h.wrap("aside", &[("class", "contact-info")], |h| {
      h.elem("h3", &[], "Contact Information")?;
      let mailto = format!("mailto:{EMAIL}");
      let tel = format!("tel:{PHONE_DIAL}");
      h.elem("a", &[("href", mailto.as_str())], EMAIL)?;
      h.elem("a", &[("href", tel.as_str())], PHONE_DISPLAY)?;
      h.elem("h4", &[], "Why Choose Maple Properties?")?;
      bullet_list(h, &WHY_CHOOSE)
    })
  })
}

fn status_class(status: &Status) -> Option<&'static str> {
  match status {
    Status::Idle => None,
    Status::Sent(_) => Some("status success"),
    Status::Failed(_) => Some("status error"),
  }
}

fn input_type(field: FieldName) -> &'static str {
  match field {
    FieldName::Email => "email",
    FieldName::Phone => "tel",
    _ => "text",
  }
}

fn is_required(field: FieldName) -> bool {
  matches!(field, FieldName::Name | FieldName::Email | FieldName::Message)
}

fn contact_form(h: &mut HtmlWriter, form: &FormState) -> Result<(), Error> {
  h.wrap("form", &[("method", "post"), ("action", "/contact#contact")], |h| {
    if let Some(class) = status_class(&form.status) {
      h.elem("div", &[("class", class), ("role", "status")], form.status_message())?;
    }

    for field in FieldName::ALL {
      let name = field.as_str();
      let value = form.fields.get(field);
      h.wrap("div", &[("class", "field")], |h| {
        h.elem("label", &[("for", name)], field.label())?;

        let mut attrs = vec![("id", name), ("name", name)];
        if is_required(field) {
          attrs.push(("required", "required"));
        }
        if field == FieldName::Message {
          attrs.push(("rows", "4"));
          h.elem("textarea", &attrs, value)
        } else {
          attrs.push(("type", input_type(field)));
          attrs.push(("value", value));
          h.void("input", &attrs)
        }
      })?;
    }

    if form.submitting {
      h.elem("button", &[("type", "submit"), ("disabled", "disabled")], "Sending...")
    } else {
      h.elem("button", &[("type", "submit")], "Send Message")
    }
  })
}

fn footer(h: &mut HtmlWriter) -> Result<(), Error> {
  h.wrap("footer", &[], |h| {
    h.wrap("div", &[("class", "footer-brand")], |h| {
      h.elem("h3", &[], BRAND)?;
      h.elem("p", &[], "Family-run property investment company carrying out projects all over England.")
    })?;
    h.wrap("ul", &[("class", "footer-links")], |h| {
      for link in &FOOTER_LINKS {
        h.wrap("li", &[], |h| h.elem("a", &[("href", link.href)], link.label))?;
      }
      Ok(())
    })?;
    h.wrap("div", &[("class", "footer-contact")], |h| {
      h.elem("p", &[], &format!("Email: {EMAIL}"))?;
      h.elem("p", &[], &format!("Phone: {PHONE_DISPLAY}"))
    })?;
    h.elem("p", &[("class", "copyright")], COPYRIGHT)
  })
}

#[cfg(test)]
mod tests {
  use maple_core::FormFields;

  use super::*;

  #[test]
  fn renders_every_section() {
    let page = render(&FormState::new()).unwrap();
    for id in ["about", "what-we-buy", "projects", "contact"] {
      assert!(page.contains(&format!("id=\"{id}\"")), "missing section {id}");
    }
    for project in &PROJECTS {
      assert!(page.contains(project.place), "missing project {}", project.place);
    }
    assert!(page.contains(EMAIL));
    assert!(page.contains("Send Message"));

    for needle in [
      r#"name="keywords""#,
      r#"name="author""#,
      r#"property="og:title""#,
      r#"property="og:url" content="https://mapleproperties.co.uk""#,
      r#"name="twitter:card" content="summary_large_image""#,
      r#"rel="icon" href="/favicon.ico""#,
      r#"rel="canonical" href="https://mapleproperties.co.uk""#,
    ] {
      assert!(page.contains(needle), "missing head tag {needle}");
    }
  }

  #[test]
  fn idle_form_has_no_status_box() {
    let page = render(&FormState::new()).unwrap();
    assert!(!page.contains("role=\"status\""));
  }

  #[test]
  fn field_values_are_escaped() {
    let form = FormState::with_fields(FormFields {
      name: "<b>Jo</b>".into(),
      message: "</textarea><script>alert(1)</script>".into(),
      ..FormFields::default()
    });
    let page = render(&form).unwrap();
    assert!(!page.contains("<b>Jo</b>"));
    assert!(!page.contains("<script>alert(1)</script>"));
    assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
  }

  #[test]
  fn success_status_uses_success_class() {
    let form = FormState {
      status: Status::Sent("Thank you".into()),
      ..FormState::default()
    };
    let page = render(&form).unwrap();
    assert!(page.contains("class=\"status success\""));
    assert!(page.contains(">Thank you<"));
  }

  #[test]
  fn failure_status_uses_error_class() {
    let form = FormState {
      status: Status::Failed("Network error. Please try again.".into()),
      ..FormState::default()
    };
    let page = render(&form).unwrap();
    assert!(page.contains("class=\"status error\""));
    assert!(page.contains("Network error. Please try again."));
  }

  #[test]
  fn submitting_disables_the_button() {
    let form = FormState { submitting: true, ..FormState::default() };
    let page = render(&form).unwrap();
    assert!(page.contains("Sending..."));
    assert!(page.contains("disabled=\"disabled\""));
    assert!(!page.contains("Send Message"));
  }
}

use std::sync::Arc;
use tera::Tera;

/// Tera instance shared by every page handler.
///
/// All views under `templates/` extend `base.html.tera`, which renders the
/// optional `error_message` and `account` context keys, so form handlers can
/// re-render any page with an inline failure. Templates are parsed once at
/// startup; a missing or broken template fails the boot, not a request.
#[derive(Clone)]
pub struct TemplateEngine {
  tera: Arc<Tera>,
}

impl TemplateEngine {
  pub fn new() -> Result<Self, tera::Error> {
    let mut tera = Tera::new("templates/**/*.html.tera")?;
    tera.autoescape_on(vec!["html.tera"]);

    Ok(Self {
      tera: Arc::new(tera),
    })
  }

  pub fn render(&self, template: &str, context: &tera::Context) -> Result<String, tera::Error> {
    self.tera.render(template, context)
  }
}

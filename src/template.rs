//! Handlebars integration: the `linkify` template helper.
//!
//! Templating layers call `{{linkify some.text}}`. The helper honors the
//! [`SafeHtml`](crate::SafeHtml) marker by writing transformed output
//! verbatim, while passthrough text still goes through the registry's escape
//! function, exactly as an ordinary string value would.

use handlebars::{Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext};
use serde::Serialize;

use crate::error::Result;
use crate::render::linkify;
use crate::safe::Linkified;

/// Name the helper is registered under.
pub const LINKIFY_HELPER_NAME: &str = "linkify";

/// Handlebars helper wrapping [`linkify`].
///
/// A missing, null or non-string parameter is treated as absent input and
/// renders as nothing.
#[derive(Debug, Clone, Copy)]
pub struct LinkifyHelper;

impl HelperDef for LinkifyHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        r: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let text = h.param(0).and_then(|p| p.value().as_str());
        match linkify(text) {
            Linkified::Safe(html) => out.write(html.as_str())?,
            Linkified::Raw(Some(raw)) => out.write(&r.get_escape_fn()(raw))?,
            Linkified::Raw(None) => {}
        }
        Ok(())
    }
}

/// Registers the `linkify` helper into an existing registry.
pub fn register_helpers(registry: &mut Handlebars<'_>) {
    registry.register_helper(LINKIFY_HELPER_NAME, Box::new(LinkifyHelper));
}

/// Renders a one-off template string with the `linkify` helper available.
pub fn render_template<T: Serialize>(template: &str, data: &T) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(false);
    register_helpers(&mut handlebars);
    Ok(handlebars.render_template(template, data)?)
}

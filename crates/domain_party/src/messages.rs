//! Japanese validation messages
//!
//! Messages are kept in a Fluent resource (`locales/ja-JP/validation.ftl`)
//! embedded at compile time. Each thread lazily builds its own bundle, so
//! rendering never touches shared mutable state.

use fluent::{FluentArgs, FluentBundle, FluentResource};
use tracing::warn;
use unic_langid::LanguageIdentifier;

use crate::error::EnrollmentError;

const VALIDATION_FTL: &str = include_str!("../locales/ja-JP/validation.ftl");
const LOCALE: &str = "ja-JP";

thread_local! {
    static CATALOG: Option<MessageCatalog> = match MessageCatalog::load() {
        Ok(catalog) => Some(catalog),
        Err(error) => {
            warn!(%error, "validation messages unavailable, falling back to message ids");
            None
        }
    };
}

/// A parsed message bundle for the ja-JP locale
pub struct MessageCatalog {
    bundle: FluentBundle<FluentResource>,
}

impl MessageCatalog {
    /// Parses the embedded resource into a bundle
    pub fn load() -> Result<Self, EnrollmentError> {
        let locale: LanguageIdentifier = LOCALE
            .parse()
            .map_err(|e| EnrollmentError::Messages(format!("invalid locale {LOCALE}: {e}")))?;

        let resource = FluentResource::try_new(VALIDATION_FTL.to_string())
            .map_err(|(_, errors)| EnrollmentError::Messages(format!("{errors:?}")))?;

        let mut bundle = FluentBundle::new(vec![locale]);
        // Isolation marks would leak into plain-text form messages
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|errors| EnrollmentError::Messages(format!("{errors:?}")))?;

        Ok(Self { bundle })
    }

    /// Returns true if the catalog defines `id`
    pub fn has_message(&self, id: &str) -> bool {
        self.bundle.has_message(id)
    }

    /// Formats message `id`, or returns the id itself when it is missing
    pub fn format(&self, id: &str, args: Option<&FluentArgs>) -> String {
        let Some(pattern) = self.bundle.get_message(id).and_then(|message| message.value()) else {
            warn!(id, "missing validation message");
            return id.to_string();
        };

        let mut errors = Vec::new();
        let text = self.bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            warn!(id, ?errors, "validation message formatted with errors");
        }
        text.into_owned()
    }
}

/// Renders message `id` with the field `label` and any extra arguments
pub fn render(id: &str, label: &str, extra: &[(&'static str, String)]) -> String {
    let mut args = FluentArgs::new();
    args.set("label", label.to_string());
    for (name, value) in extra {
        args.set(*name, value.clone());
    }

    CATALOG.with(|catalog| match catalog {
        Some(catalog) => catalog.format(id, Some(&args)),
        None => id.to_string(),
    })
}

//! Built-in templates compiled into the binary.
//!
//! The `templates/` directory is embedded with `rust-embed`, so the generator
//! works right after `cargo install` without separate template files. Paths
//! keep their `<framework>/<framework>-<stage>.tmpl` layout and double as
//! template names.

use rust_embed::RustEmbed;

use crate::core::error::{Error, Result};

#[derive(RustEmbed)]
#[folder = "templates/"]
#[include = "*.tmpl"]
pub struct EmbeddedTemplates;

/// All embedded templates as `(name, content)` pairs, sorted by name
pub fn embedded_templates() -> Result<Vec<(String, String)>> {
    let mut names: Vec<String> = EmbeddedTemplates::iter().map(|p| p.into_owned()).collect();
    names.sort();

    names
        .into_iter()
        .map(|name| {
            let file = EmbeddedTemplates::get(&name).ok_or_else(|| {
                Error::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("Embedded template disappeared: {name}"),
                ))
            })?;
            let content = String::from_utf8(file.data.into_owned()).map_err(|e| {
                Error::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("Embedded template {name} is not valid UTF-8: {e}"),
                ))
            })?;
            Ok((name, content))
        })
        .collect()
}

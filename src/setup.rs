use log::{debug, trace};

use crate::nuclear;
use crate::theme::ThemeSelection;
use crate::transform::{HighlightOptions, Transformer};

// ---------------------------------------------------------------------------
// HighlighterConfig — theme pair + ordered transformer chain
// ---------------------------------------------------------------------------

/// Highlighter configuration handed to the host framework at setup time.
///
/// Built once, owned by the host for the lifetime of the build session, and
/// never mutated afterwards. Transformers run in registration order.
pub struct HighlighterConfig {
    pub themes: ThemeSelection,
    pub transformers: Vec<Transformer>,
}

impl HighlighterConfig {
    /// Run every transformer's preprocess hook over `code`, in order.
    pub fn preprocess(&self, code: &str, options: &HighlightOptions) -> String {
        let mut code = code.to_string();
        for t in &self.transformers {
            trace!("preprocess: {} ({} bytes)", t.name(), code.len());
            code = t.apply_preprocess(&code, options);
        }
        code
    }

    /// Run every transformer's postprocess hook over `html`, in order.
    pub fn postprocess(&self, html: &str) -> String {
        let mut html = html.to_string();
        for t in &self.transformers {
            trace!("postprocess: {} ({} bytes)", t.name(), html.len());
            html = t.apply_postprocess(&html);
        }
        html
    }
}

/// Build the highlighter configuration for the deck.
///
/// Registers the material theme pair (darker for dark appearance, lighter for
/// light) and the `nuclear-hacker-theme` markup transformer. Pure factory:
/// no parameters, no I/O, identical output on every call.
pub fn shiki_setup() -> HighlighterConfig {
    let config = HighlighterConfig {
        themes: ThemeSelection::default(),
        transformers: vec![nuclear::transformer()],
    };
    debug!(
        "setup: themes dark={} light={}, {} transformer(s)",
        config.themes.dark,
        config.themes.light,
        config.transformers.len()
    );
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_is_deterministic() {
        let a = shiki_setup();
        let b = shiki_setup();
        assert_eq!(a.themes, b.themes);
        assert_eq!(a.themes.dark, "material-theme-darker");
        assert_eq!(a.themes.light, "material-theme-lighter");
    }

    #[test]
    fn factory_registers_single_nuclear_transformer() {
        let config = shiki_setup();
        let names: Vec<_> = config.transformers.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["nuclear-hacker-theme"]);
    }

    #[test]
    fn chain_applies_in_registration_order() {
        let config = HighlighterConfig {
            themes: ThemeSelection::default(),
            transformers: vec![
                Transformer::new("first").with_postprocess(|h| format!("{h}1")),
                Transformer::new("second").with_postprocess(|h| format!("{h}2")),
            ],
        };
        assert_eq!(config.postprocess("x"), "x12");
    }

    #[test]
    fn chain_preprocess_threads_options() {
        let config = HighlighterConfig {
            themes: ThemeSelection::default(),
            transformers: vec![
                Transformer::new("tag-lang").with_preprocess(|code, opts| match &opts.lang {
                    Some(lang) => format!("// {lang}\n{code}"),
                    None => code.to_string(),
                }),
            ],
        };
        let opts = HighlightOptions {
            lang: Some("rust".to_string()),
            line_numbers: false,
        };
        assert_eq!(config.preprocess("fn f() {}", &opts), "// rust\nfn f() {}");
    }

    #[test]
    fn empty_chain_is_identity() {
        let config = HighlighterConfig {
            themes: ThemeSelection::default(),
            transformers: Vec::new(),
        };
        assert_eq!(config.preprocess("a", &HighlightOptions::default()), "a");
        assert_eq!(config.postprocess("<b>a</b>"), "<b>a</b>");
    }
}

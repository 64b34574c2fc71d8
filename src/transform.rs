use serde::{Deserialize, Serialize};

/// Options the host passes alongside source text to `preprocess` hooks.
///
/// Carries whatever the highlighter knows about the block at that point.
/// Hooks may ignore it entirely; the built-in transformer does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightOptions {
    /// Language tag from the fence info string, if any.
    pub lang: Option<String>,
    /// Whether the host renders line numbers for this block.
    pub line_numbers: bool,
}

/// Hook applied to source text before highlighting.
pub type PreprocessFn = dyn Fn(&str, &HighlightOptions) -> String + Send + Sync;

/// Hook applied to rendered markup after highlighting.
pub type PostprocessFn = dyn Fn(&str) -> String + Send + Sync;

/// A named pair of optional hooks around the highlighting step.
///
/// Hooks are pure: no side effects beyond the returned string. `Send + Sync`
/// bounds keep a constructed configuration safe to share across read-only
/// consumers.
pub struct Transformer {
    name: &'static str,
    preprocess: Option<Box<PreprocessFn>>,
    postprocess: Option<Box<PostprocessFn>>,
}

impl Transformer {
    /// New transformer with no hooks (both stages pass through).
    pub fn new(name: &'static str) -> Self {
        Transformer {
            name,
            preprocess: None,
            postprocess: None,
        }
    }

    pub fn with_preprocess(
        mut self,
        hook: impl Fn(&str, &HighlightOptions) -> String + Send + Sync + 'static,
    ) -> Self {
        self.preprocess = Some(Box::new(hook));
        self
    }

    pub fn with_postprocess(
        mut self,
        hook: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.postprocess = Some(Box::new(hook));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run the preprocess hook; identity when absent.
    pub fn apply_preprocess(&self, code: &str, options: &HighlightOptions) -> String {
        match &self.preprocess {
            Some(hook) => hook(code, options),
            None => code.to_string(),
        }
    }

    /// Run the postprocess hook; identity when absent.
    pub fn apply_postprocess(&self, html: &str) -> String {
        match &self.postprocess {
            Some(hook) => hook(html),
            None => html.to_string(),
        }
    }
}

impl std::fmt::Debug for Transformer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transformer")
            .field("name", &self.name)
            .field("preprocess", &self.preprocess.is_some())
            .field("postprocess", &self.postprocess.is_some())
            .finish()
    }
}

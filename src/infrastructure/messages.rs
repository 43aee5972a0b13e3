use crate::domain::messages::DEFAULT_CATALOG;
use crate::domain::ports::MessageResolver;
use std::collections::HashMap;

/// Message catalog held in memory, seeded with the default English texts.
///
/// Templates use positional placeholders `{0}`, `{1}`, ... Unknown keys
/// resolve to the key itself.
#[derive(Debug, Clone)]
pub struct StaticMessageResolver {
    templates: HashMap<String, String>,
}

impl Default for StaticMessageResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticMessageResolver {
    pub fn new() -> Self {
        let templates = DEFAULT_CATALOG
            .iter()
            .map(|(key, text)| (key.to_string(), text.to_string()))
            .collect();
        Self { templates }
    }

    /// Replaces or adds a template, e.g. a localized variant.
    pub fn with_template(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.templates.insert(key.into(), template.into());
        self
    }
}

impl MessageResolver for StaticMessageResolver {
    fn resolve(&self, key: &str, args: &[&str]) -> String {
        match self.templates.get(key) {
            Some(template) => render(template, args),
            None => key.to_string(),
        }
    }
}

/// Fills `{n}` placeholders in one pass over the template. Argument text is
/// copied verbatim, so braces inside an argument are never expanded. A
/// placeholder without a matching argument is kept as written.
fn render(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();

        let arg = if digits > 0 && after[digits..].starts_with('}') {
            after[..digits].parse::<usize>().ok().and_then(|i| args.get(i))
        } else {
            None
        };
        match arg {
            Some(arg) => {
                out.push_str(arg);
                rest = &after[digits + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

//! Model descriptor table.
//!
//! Maps the public model ids the front end offers to the upstream
//! `(driver, model)` pair the provider expects. Built once at startup and
//! consulted read-only; there is deliberately no way to mutate it.

use std::collections::HashMap;

/// Upstream routing target for one public model id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRoute {
    pub driver: String,
    pub model: String,
}

const BUILTIN_MODELS: &[(&str, &str, &str)] = &[
    // OpenAI
    ("gpt-4o", "openai-completion", "gpt-4o"),
    ("gpt-4o-mini", "openai-completion", "gpt-4o-mini"),
    ("gpt-4.5-preview", "openai-completion", "gpt-4-turbo-preview"),
    ("o1", "openai-completion", "o1"),
    ("o1-mini", "openai-completion", "o1-mini"),
    // Anthropic
    ("claude-3-5-sonnet", "anthropic-completion", "claude-3-5-sonnet"),
    // routed to 3-5 until the upstream catalog carries it
    ("claude-3-7-sonnet", "anthropic-completion", "claude-3-5-sonnet"),
    // Google
    ("gemini-2.0-flash", "google-completion", "gemini-2.0-flash"),
    ("gemini-1.5-flash", "google-completion", "gemini-1.5-flash"),
    // Meta
    ("llama-3.1-405b", "meta-completion", "llama-3.1-405b"),
    ("llama-3.1-70b", "meta-completion", "llama-3.1-70b"),
    // DeepSeek
    ("deepseek-v3", "deepseek-completion", "deepseek-v3"),
    ("deepseek-coder", "deepseek-completion", "deepseek-coder"),
    // Mistral
    ("mistral-large", "mistral-completion", "mistral-large"),
    ("mistral-medium", "mistral-completion", "mistral-medium"),
    // X.AI
    ("x-ai/grok-3-beta", "xai-completion", "grok-3-beta"),
];

/// Read-only mapping from public model ids to upstream routes.
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    routes: HashMap<String, ModelRoute>,
    // catalog order, for /health and the docs page
    order: Vec<String>,
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelRegistry {
    pub fn new() -> Self {
        let mut routes = HashMap::with_capacity(BUILTIN_MODELS.len());
        let mut order = Vec::with_capacity(BUILTIN_MODELS.len());
        for (public_id, driver, model) in BUILTIN_MODELS {
            routes.insert(
                (*public_id).to_string(),
                ModelRoute {
                    driver: (*driver).to_string(),
                    model: (*model).to_string(),
                },
            );
            order.push((*public_id).to_string());
        }
        Self { routes, order }
    }

    pub fn resolve(&self, public_id: &str) -> Option<&ModelRoute> {
        self.routes.get(public_id)
    }

    /// Public model ids in catalog order.
    pub fn supported_models(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_model_to_driver_pair() {
        let registry = ModelRegistry::new();
        let route = registry.resolve("gpt-4o").unwrap();
        assert_eq!(route.driver, "openai-completion");
        assert_eq!(route.model, "gpt-4o");
    }

    #[test]
    fn aliased_model_resolves_to_available_variant() {
        let registry = ModelRegistry::new();
        let route = registry.resolve("claude-3-7-sonnet").unwrap();
        assert_eq!(route.model, "claude-3-5-sonnet");
    }

    #[test]
    fn unknown_model_does_not_resolve() {
        let registry = ModelRegistry::new();
        assert!(registry.resolve("gpt-2").is_none());
    }

    #[test]
    fn catalog_order_starts_with_openai() {
        let registry = ModelRegistry::new();
        let first = registry.supported_models().next().unwrap();
        assert_eq!(first, "gpt-4o");
        assert_eq!(registry.len(), BUILTIN_MODELS.len());
    }
}

use super::provider::PaymentProvider;
use crate::error::{PaymentError, Result};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Payment providers by identifier, built once at startup.
///
/// Identifiers are matched case-insensitively.
#[derive(Default, Clone)]
pub struct ProviderRegistry {
    providers: BTreeMap<String, Arc<dyn PaymentProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `provider` under its own name, replacing any previous entry.
    pub fn register(&mut self, provider: Arc<dyn PaymentProvider>) -> Option<Arc<dyn PaymentProvider>> {
        let key = normalize(provider.name());
        self.providers.insert(key, provider)
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn PaymentProvider>> {
        self.providers.get(&normalize(name)).cloned()
    }

    pub fn resolve(&self, name: &str) -> Result<Arc<dyn PaymentProvider>> {
        self.get(name)
            .ok_or_else(|| PaymentError::UnknownProvider(name.to_string()))
    }

    pub fn providers(&self) -> Vec<&str> {
        self.providers.keys().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::outcome::MapOutcome;
    use crate::domain::payment::ChargeContext;
    use async_trait::async_trait;

    struct NamedProvider(&'static str);

    #[async_trait]
    impl PaymentProvider for NamedProvider {
        fn name(&self) -> &str {
            self.0
        }

        async fn authorize(&self, _ctx: &ChargeContext) -> Result<MapOutcome> {
            unimplemented!()
        }

        async fn capture(&self, _ctx: &ChargeContext) -> Result<MapOutcome> {
            unimplemented!()
        }

        async fn refund(&self, _ctx: &ChargeContext) -> Result<MapOutcome> {
            unimplemented!()
        }

        async fn void(&self, _ctx: &ChargeContext) -> Result<MapOutcome> {
            unimplemented!()
        }

        async fn settle_pending(&self, _ctx: &ChargeContext) -> Result<MapOutcome> {
            unimplemented!()
        }
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let mut registry = ProviderRegistry::new();
        assert!(registry.is_empty());
        registry.register(Arc::new(NamedProvider("Amazon_Pay")));

        assert_eq!(registry.resolve(" AMAZON_PAY ").unwrap().name(), "Amazon_Pay");
        assert_eq!(registry.providers(), vec!["amazon_pay"]);
    }

    #[test]
    fn test_unknown_provider() {
        let registry = ProviderRegistry::new();
        assert!(matches!(
            registry.resolve("paypal"),
            Err(PaymentError::UnknownProvider(name)) if name == "paypal"
        ));
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = ProviderRegistry::new();
        assert!(registry.register(Arc::new(NamedProvider("mock"))).is_none());
        assert!(registry.register(Arc::new(NamedProvider("MOCK"))).is_some());
        assert_eq!(registry.providers().len(), 1);
    }
}

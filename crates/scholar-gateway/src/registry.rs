//! Service registry contract and a static implementation.
//!
//! The gateway never addresses the record service directly; it asks a
//! [`Registry`] for an endpoint of the logical service name on every call.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Errors from resolving a service name.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("service '{0}' is not registered")]
    UnknownService(String),

    #[error("service '{0}' has no endpoints")]
    NoEndpoints(String),

    #[error("invalid registry entry '{0}': expected name=url[|url...]")]
    InvalidEntry(String),
}

/// Resolves a logical service name to a base URL.
pub trait Registry: Send + Sync {
    fn resolve(&self, service: &str) -> Result<String, RegistryError>;
}

#[derive(Debug)]
struct ServiceEntry {
    endpoints: Vec<String>,
    next: AtomicUsize,
}

/// Fixed service table, round-robin across each service's endpoints.
#[derive(Debug, Default)]
pub struct StaticRegistry {
    services: HashMap<String, ServiceEntry>,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a service, returning `self` for chaining.
    pub fn with_service(mut self, name: impl Into<String>, endpoints: Vec<String>) -> Self {
        self.services.insert(
            name.into(),
            ServiceEntry {
                endpoints,
                next: AtomicUsize::new(0),
            },
        );
        self
    }

    /// Parses entries of the form `name=url` or `name=url1|url2`.
    ///
    /// Repeating a name appends endpoints to it.
    pub fn parse<S: AsRef<str>>(entries: &[S]) -> Result<Self, RegistryError> {
        let mut table: HashMap<String, Vec<String>> = HashMap::new();
        for entry in entries {
            let entry = entry.as_ref().trim();
            if entry.is_empty() {
                continue;
            }
            let (name, urls) = entry
                .split_once('=')
                .ok_or_else(|| RegistryError::InvalidEntry(entry.to_string()))?;
            let name = name.trim();
            let urls: Vec<String> = urls
                .split('|')
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(str::to_string)
                .collect();
            if name.is_empty() || urls.is_empty() {
                return Err(RegistryError::InvalidEntry(entry.to_string()));
            }
            table.entry(name.to_string()).or_default().extend(urls);
        }

        let mut registry = StaticRegistry::new();
        for (name, endpoints) in table {
            registry = registry.with_service(name, endpoints);
        }
        Ok(registry)
    }

    /// Names of all registered services.
    pub fn services(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.services.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Registry for StaticRegistry {
    fn resolve(&self, service: &str) -> Result<String, RegistryError> {
        let entry = self
            .services
            .get(service)
            .ok_or_else(|| RegistryError::UnknownService(service.to_string()))?;
        if entry.endpoints.is_empty() {
            return Err(RegistryError::NoEndpoints(service.to_string()));
        }
        let i = entry.next.fetch_add(1, Ordering::Relaxed) % entry.endpoints.len();
        Ok(entry.endpoints[i].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_single_endpoint() {
        let registry = StaticRegistry::parse(&["scholar-student=http://127.0.0.1:9999"]).unwrap();
        assert_eq!(
            registry.resolve("scholar-student").unwrap(),
            "http://127.0.0.1:9999"
        );
    }

    #[test]
    fn rotates_through_endpoints() {
        let registry = StaticRegistry::parse(&["svc=http://a|http://b", "svc=http://c"]).unwrap();
        let picked: Vec<String> = (0..6).map(|_| registry.resolve("svc").unwrap()).collect();
        assert_eq!(
            picked,
            vec!["http://a", "http://b", "http://c", "http://a", "http://b", "http://c"]
        );
    }

    #[test]
    fn unknown_service_is_an_error() {
        let registry = StaticRegistry::new();
        assert!(matches!(
            registry.resolve("missing"),
            Err(RegistryError::UnknownService(name)) if name == "missing"
        ));
    }

    #[test]
    fn service_without_endpoints_is_an_error() {
        let registry = StaticRegistry::new().with_service("svc", Vec::new());
        assert!(matches!(registry.resolve("svc"), Err(RegistryError::NoEndpoints(_))));
    }

    #[test]
    fn malformed_entries_are_rejected() {
        assert!(StaticRegistry::parse(&["no-equals-sign"]).is_err());
        assert!(StaticRegistry::parse(&["=http://a"]).is_err());
        assert!(StaticRegistry::parse(&["svc="]).is_err());
    }

    #[test]
    fn blank_entries_are_skipped() {
        let registry = StaticRegistry::parse(&["", "  ", "svc=http://a"]).unwrap();
        assert_eq!(registry.services(), vec!["svc"]);
    }
}

use std::{collections::HashMap, fmt, str::FromStr};

use thiserror::Error;

pub const GATEWAY_URL_VAR: &str = "API_GATEWAY_URL";

/// Logical name of an upstream microservice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    Orders,
    Restaurants,
    Notifications,
    Payments,
    Kitchen,
    Deliveries,
    Couriers,
}

impl Service {
    pub const ALL: [Service; 7] = [
        Service::Orders,
        Service::Restaurants,
        Service::Notifications,
        Service::Payments,
        Service::Kitchen,
        Service::Deliveries,
        Service::Couriers,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Service::Orders => "orders",
            Service::Restaurants => "restaurants",
            Service::Notifications => "notifications",
            Service::Payments => "payments",
            Service::Kitchen => "kitchen",
            Service::Deliveries => "deliveries",
            Service::Couriers => "couriers",
        }
    }

    /// Environment variable holding the service's base URL. Couriers live in the
    /// delivery service, so both names share one variable.
    pub fn env_var(self) -> &'static str {
        match self {
            Service::Orders => "ORDER_SERVICE_URL",
            Service::Restaurants => "RESTAURANT_SERVICE_URL",
            Service::Notifications => "NOTIFICATION_SERVICE_URL",
            Service::Payments => "ACCOUNTING_SERVICE_URL",
            Service::Kitchen => "KITCHEN_SERVICE_URL",
            Service::Deliveries | Service::Couriers => "DELIVERY_SERVICE_URL",
        }
    }

    pub fn default_url(self) -> &'static str {
        match self {
            Service::Orders => "http://localhost:8080",
            Service::Restaurants => "http://localhost:8081",
            Service::Notifications => "http://localhost:8082",
            Service::Payments => "http://localhost:8083",
            Service::Kitchen => "http://localhost:8084",
            Service::Deliveries | Service::Couriers => "http://localhost:8085",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown service: {0}")]
pub struct UnknownService(pub String);

impl FromStr for Service {
    type Err = UnknownService;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Service::ALL
            .into_iter()
            .find(|service| service.name() == s)
            .ok_or_else(|| UnknownService(s.to_string()))
    }
}

/// Resolves logical service names to upstream base URLs.
///
/// `Direct` carries one URL per service; `Gateway` routes every service through
/// a single API gateway, so two services may share a base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceRegistry {
    Direct(HashMap<Service, String>),
    Gateway(String),
}

impl ServiceRegistry {
    /// Builds the registry from a variable lookup. A non-empty gateway URL wins
    /// over any per-service variables; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(gateway) = non_empty(GATEWAY_URL_VAR) {
            return ServiceRegistry::Gateway(normalize(gateway));
        }

        let urls = Service::ALL
            .into_iter()
            .map(|service| {
                let url = non_empty(service.env_var())
                    .unwrap_or_else(|| service.default_url().to_string());
                (service, normalize(url))
            })
            .collect();
        ServiceRegistry::Direct(urls)
    }

    pub fn base_url(&self, service: Service) -> &str {
        match self {
            ServiceRegistry::Gateway(url) => url,
            ServiceRegistry::Direct(urls) => urls
                .get(&service)
                .map(String::as_str)
                .unwrap_or_else(|| service.default_url()),
        }
    }

    /// Joins the service's base URL with an absolute upstream path.
    pub fn url(&self, service: Service, path: &str) -> String {
        format!("{}{}", self.base_url(service), path)
    }

    pub fn resolve(&self, name: &str) -> Result<&str, UnknownService> {
        let service = name.parse::<Service>()?;
        Ok(self.base_url(service))
    }

    pub fn is_gateway(&self) -> bool {
        matches!(self, ServiceRegistry::Gateway(_))
    }
}

fn normalize(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

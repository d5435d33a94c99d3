use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClientId(pub String);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    pub name: String,
    pub email: String,
    pub account_balance: f64,
    pub installed_products: Vec<String>,
    pub sustainability_score: f64,
}

/// Mock customer directory backing the `get_client_info` tool.
#[derive(Clone, Debug, Default)]
pub struct ClientDirectory {
    clients: BTreeMap<ClientId, ClientProfile>,
}

impl ClientDirectory {
    pub fn new(clients: impl IntoIterator<Item = (ClientId, ClientProfile)>) -> Self {
        Self { clients: clients.into_iter().collect() }
    }

    pub fn sample() -> Self {
        let profile = |name: &str, email: &str, balance: f64, products: &[&str], score: f64| {
            ClientProfile {
                name: name.to_string(),
                email: email.to_string(),
                account_balance: balance,
                installed_products: products.iter().map(|product| product.to_string()).collect(),
                sustainability_score: score,
            }
        };

        Self::new([
            (
                ClientId("TV001".to_string()),
                profile(
                    "María González",
                    "maria@ecohome.com",
                    2500.0,
                    &["Solar Panels", "Smart Thermostat"],
                    8.5,
                ),
            ),
            (
                ClientId("TV002".to_string()),
                profile(
                    "Carlos Rodríguez",
                    "carlos@greenbusiness.com",
                    10000.0,
                    &["Energy Management System", "LED Lighting"],
                    9.2,
                ),
            ),
            (
                ClientId("TV003".to_string()),
                profile(
                    "Ana Martínez",
                    "ana@sustainablefuture.org",
                    5000.0,
                    &["Water Conservation System", "Electric Vehicle Charger"],
                    7.8,
                ),
            ),
        ])
    }

    pub fn lookup(&self, client_id: &str) -> Result<&ClientProfile, DomainError> {
        self.clients
            .get(&ClientId(client_id.trim().to_string()))
            .ok_or_else(|| DomainError::ClientNotFound { client_id: client_id.to_string() })
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::ClientDirectory;
    use crate::errors::DomainError;

    #[test]
    fn sample_directory_resolves_known_clients() {
        let directory = ClientDirectory::sample();
        let profile = directory.lookup("TV002").expect("TV002 is seeded");

        assert_eq!(directory.len(), 3);
        assert_eq!(profile.email, "carlos@greenbusiness.com");
        assert_eq!(profile.installed_products.len(), 2);
    }

    #[test]
    fn unknown_client_is_a_domain_error() {
        let error = ClientDirectory::sample().lookup("TV999").expect_err("TV999 is unknown");
        assert_eq!(error, DomainError::ClientNotFound { client_id: "TV999".to_string() });
        assert!(error.to_string().contains("TV999"));
    }
}

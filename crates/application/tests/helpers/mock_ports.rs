#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone};
use dnsrpc_application::ports::{Clock, PublicIpProvider};
use dnsrpc_domain::{DomainError, IpFamily};
use std::net::IpAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::RwLock;

pub struct MockIpProvider {
    name: String,
    address: RwLock<Option<IpAddr>>,
    should_fail: AtomicBool,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockIpProvider {
    pub fn new(name: &str, address: &str) -> Self {
        Self {
            name: name.to_string(),
            address: RwLock::new(Some(address.parse().unwrap())),
            should_fail: AtomicBool::new(false),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(name: &str) -> Self {
        let provider = Self::new(name, "0.0.0.0");
        provider.set_should_fail(true);
        provider
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub async fn set_address(&self, address: &str) {
        *self.address.write().await = Some(address.parse().unwrap());
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PublicIpProvider for MockIpProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_public_ip(&self, _family: IpFamily) -> Result<IpAddr, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::ProviderRequestFailed {
                provider: self.name.clone(),
                reason: "mock failure".to_string(),
            });
        }

        let address = *self.address.read().await;
        address.ok_or_else(|| DomainError::Internal("no address configured".to_string()))
    }
}

pub struct FakeClock {
    now: Mutex<DateTime<Local>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self::at(Local.with_ymd_and_hms(2024, 6, 1, 12, 30, 15).unwrap())
    }

    pub fn at(now: DateTime<Local>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += chrono::Duration::from_std(by).unwrap();
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> DateTime<Local> {
        *self.now.lock().unwrap()
    }
}

pub fn providers(list: &[&Arc<MockIpProvider>]) -> Vec<Arc<dyn PublicIpProvider>> {
    list.iter()
        .map(|p| Arc::clone(*p) as Arc<dyn PublicIpProvider>)
        .collect()
}

use crate::ports::{Clock, PublicIpProvider};
use arc_swap::ArcSwapOption;
use chrono::{DateTime, Local};
use dnsrpc_domain::{DomainError, HandlerResult, IpFamily};
use std::net::IpAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, warn};

struct CacheEntry {
    value: HandlerResult,
    fetched_at: DateTime<Local>,
}

type InflightSender = Arc<watch::Sender<Option<HandlerResult>>>;

struct FamilySlot {
    family: IpFamily,
    providers: Vec<Arc<dyn PublicIpProvider>>,
    entry: ArcSwapOption<CacheEntry>,
    inflight: Mutex<Option<InflightSender>>,
    attempts: AtomicU64,
}

impl FamilySlot {
    fn new(family: IpFamily, providers: Vec<Arc<dyn PublicIpProvider>>) -> Self {
        Self {
            family,
            providers,
            entry: ArcSwapOption::empty(),
            inflight: Mutex::new(None),
            attempts: AtomicU64::new(0),
        }
    }

    fn register_or_join_inflight(&self) -> (bool, watch::Receiver<Option<HandlerResult>>) {
        let mut inflight = self.inflight.lock().unwrap_or_else(|e| e.into_inner());
        match inflight.as_ref() {
            Some(tx) => (false, tx.subscribe()),
            None => {
                let (tx, rx) = watch::channel(None::<HandlerResult>);
                *inflight = Some(Arc::new(tx));
                (true, rx)
            }
        }
    }

    fn take_inflight(&self) -> Option<InflightSender> {
        self.inflight
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take()
    }

    /// Whatever the slot holds now, fresh or not.
    fn current_value(&self) -> HandlerResult {
        match self.entry.load_full() {
            Some(entry) => entry.value.clone(),
            None => HandlerResult::error(DomainError::UpstreamUnavailable(self.family).to_string()),
        }
    }
}

/// Releases the family's in-flight slot if the leader is dropped before it
/// publishes, waking followers with `None`.
struct InflightLeaderGuard<'a> {
    slot: &'a FamilySlot,
}

impl Drop for InflightLeaderGuard<'_> {
    fn drop(&mut self) {
        if let Some(tx) = self.slot.take_inflight() {
            let _ = tx.send(None);
        }
    }
}

/// Time-bounded memo of the host's public addresses, one entry per family.
///
/// Readers never block on a fresh entry. A stale or missing entry is
/// refreshed by a single leader per family; requests arriving meanwhile
/// subscribe to the leader's outcome instead of calling the providers
/// themselves. When every provider fails the previous value is served and
/// its fetch time is left untouched so the next request retries.
pub struct PublicIpCache {
    v4: FamilySlot,
    v6: FamilySlot,
    ttl: Duration,
    provider_timeout: Duration,
    clock: Arc<dyn Clock>,
}

impl PublicIpCache {
    pub fn new(
        v4_providers: Vec<Arc<dyn PublicIpProvider>>,
        v6_providers: Vec<Arc<dyn PublicIpProvider>>,
        ttl: Duration,
        provider_timeout: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            v4: FamilySlot::new(IpFamily::V4, v4_providers),
            v6: FamilySlot::new(IpFamily::V6, v6_providers),
            ttl,
            provider_timeout,
            clock,
        }
    }

    pub async fn get_public_ip(&self, family: IpFamily) -> HandlerResult {
        let slot = self.slot(family);
        let seen_attempts = slot.attempts.load(Ordering::Acquire);
        if let Some(value) = self.fresh_value(slot) {
            return value;
        }

        let (is_leader, rx) = slot.register_or_join_inflight();
        if !is_leader {
            return Self::follow(slot, rx).await;
        }

        let guard = InflightLeaderGuard { slot };

        // A refresh finished between the freshness check and registration.
        if slot.attempts.load(Ordering::Acquire) != seen_attempts {
            debug!(family = %family, "Public IP refreshed by a concurrent request");
            return Self::publish(guard, slot.current_value());
        }

        let value = match self.fetch(slot).await {
            Ok(addr) => {
                let value = to_handler_result(addr);
                slot.entry.store(Some(Arc::new(CacheEntry {
                    value: value.clone(),
                    fetched_at: self.clock.now(),
                })));
                debug!(family = %family, ip = %addr, "Public IP cached");
                value
            }
            Err(e) => match slot.entry.load_full() {
                Some(stale) => {
                    warn!(
                        family = %family,
                        fetched_at = %stale.fetched_at,
                        error = %e,
                        "All public IP providers failed, serving stale value"
                    );
                    stale.value.clone()
                }
                None => HandlerResult::error(e.to_string()),
            },
        };

        slot.attempts.fetch_add(1, Ordering::AcqRel);
        Self::publish(guard, value)
    }

    fn slot(&self, family: IpFamily) -> &FamilySlot {
        match family {
            IpFamily::V4 => &self.v4,
            IpFamily::V6 => &self.v6,
        }
    }

    fn publish(guard: InflightLeaderGuard<'_>, value: HandlerResult) -> HandlerResult {
        if let Some(tx) = guard.slot.take_inflight() {
            let _ = tx.send(Some(value.clone()));
        }
        value
    }

    async fn follow(
        slot: &FamilySlot,
        mut rx: watch::Receiver<Option<HandlerResult>>,
    ) -> HandlerResult {
        if let Ok(()) = rx.changed().await {
            if let Some(value) = rx.borrow().clone() {
                return value;
            }
        }
        debug!(family = %slot.family, "Public IP refresh abandoned by its leader");
        slot.current_value()
    }

    fn fresh_value(&self, slot: &FamilySlot) -> Option<HandlerResult> {
        let guard = slot.entry.load();
        let entry = guard.as_ref()?;
        let age = self
            .clock
            .now()
            .signed_duration_since(entry.fetched_at)
            .to_std()
            .ok()?;
        (age < self.ttl).then(|| entry.value.clone())
    }
    async fn fetch(&self, slot: &FamilySlot) -> Result<IpAddr, DomainError> {
        for provider in &slot.providers {
            let outcome =
                tokio::time::timeout(self.provider_timeout, provider.fetch_public_ip(slot.family))
                    .await
                    .unwrap_or_else(|_| {
                        Err(DomainError::ProviderTimeout {
                            provider: provider.name().to_string(),
                        })
                    });

            match outcome {
                Ok(addr) if slot.family.matches(&addr) => return Ok(addr),
                Ok(addr) => {
                    warn!(
                        provider = provider.name(),
                        family = %slot.family,
                        ip = %addr,
                        "Provider returned an address of the wrong family"
                    );
                }
                Err(e) => {
                    warn!(provider = provider.name(), family = %slot.family, error = %e, "Public IP provider failed");
                }
            }
        }

        Err(DomainError::UpstreamUnavailable(slot.family))
    }
}

fn to_handler_result(addr: IpAddr) -> HandlerResult {
    match addr {
        IpAddr::V4(v4) => HandlerResult::Ipv4(v4),
        IpAddr::V6(v6) => HandlerResult::Ipv6(v6),
    }
}

mod clock;
mod public_ip_provider;

pub use clock::Clock;
pub use public_ip_provider::PublicIpProvider;

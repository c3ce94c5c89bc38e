pub mod public_ip_cache;
pub mod response_synthesizer;

pub use public_ip_cache::PublicIpCache;
pub use response_synthesizer::ResponseSynthesizer;

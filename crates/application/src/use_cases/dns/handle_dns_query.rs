use crate::handlers::{base64_codec, cidr, client_ip, public_ip, time};
use crate::ports::Clock;
use crate::services::{PublicIpCache, ResponseSynthesizer};
use dnsrpc_domain::{Command, DnsAnswer, DnsRequest, DomainError, HandlerResult};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Dispatcher: parses the queried name, runs the matching handler and
/// synthesizes the answer.
pub struct HandleDnsQueryUseCase {
    public_ip: Arc<PublicIpCache>,
    clock: Arc<dyn Clock>,
    synthesizer: ResponseSynthesizer,
}

impl HandleDnsQueryUseCase {
    pub fn new(public_ip: Arc<PublicIpCache>, clock: Arc<dyn Clock>, answer_ttl: u32) -> Self {
        Self {
            public_ip,
            clock,
            synthesizer: ResponseSynthesizer::new(answer_ttl),
        }
    }

    pub async fn execute(&self, request: &DnsRequest) -> Result<DnsAnswer, DomainError> {
        let start = Instant::now();

        let command = Command::parse(&request.labels()).for_record_type(request.record_type);
        if command.is_unknown() {
            debug!(domain = %request.domain, "Unrecognized command");
            return Ok(DnsAnswer::nx_domain());
        }

        if !ResponseSynthesizer::supports(command.family(), request.record_type) {
            debug!(
                domain = %request.domain,
                record_type = %request.record_type,
                command = command.family().as_str(),
                "Record type not supported by command"
            );
            return Ok(DnsAnswer::no_data());
        }

        let result = self.run_handler(&command, request).await;
        let answer =
            self.synthesizer
                .synthesize(&request.domain, &command, request.record_type, result);

        debug!(
            domain = %request.domain,
            record_type = %request.record_type,
            command = command.family().as_str(),
            outcome = answer.outcome.as_str(),
            answers = answer.records.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Query dispatched"
        );

        Ok(answer)
    }

    async fn run_handler(&self, command: &Command, request: &DnsRequest) -> HandlerResult {
        match command {
            Command::Cidr { prefix } => cidr::handle_count(*prefix),
            Command::CidrMask { prefix } => cidr::handle_mask(*prefix),
            Command::Time => time::handle_time(self.clock.now()),
            Command::TimeIp => time::handle_time_ip(self.clock.now()),
            Command::PublicIp => public_ip::handle_public_ip(&self.public_ip, request.record_type).await,
            Command::ClientIp => client_ip::handle_client_ip(request.client_ip, request.record_type),
            Command::Base64Encode { text } => base64_codec::handle_encode(text),
            Command::Base64Decode { data } => base64_codec::handle_decode(data),
            Command::Unknown => HandlerResult::error("unknown command"),
        }
    }
}

use crate::dns::{RecordBuilder, RecordTypeMapper};
use dnsrpc_application::use_cases::HandleDnsQueryUseCase;
use dnsrpc_domain::{DnsAnswer, DnsRequest, ResponseOutcome};
use futures::FutureExt;
use hickory_proto::op::{Header, OpCode, ResponseCode};
use hickory_proto::rr::{Name, Record};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Raw label bytes joined with `.`; hickory's `Display` would escape
    /// characters like `=` and `/` that base64 arguments rely on.
    pub fn name_to_text(name: &Name) -> String {
        let mut text = name
            .iter()
            .map(String::from_utf8_lossy)
            .collect::<Vec<_>>()
            .join(".");
        if name.is_fqdn() {
            text.push('.');
        }
        text
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        if request.op_code() != OpCode::Query {
            warn!(op_code = ?request.op_code(), "Unsupported opcode");
            return send_error_response(request, &mut response_handle, ResponseCode::NotImp).await;
        }

        let request_info = request.request_info();
        let owner = request_info.query.original().name().clone();
        let domain = Self::name_to_text(&owner);
        let hickory_record_type = request_info.query.query_type();
        let client_ip = request_info.src.ip();

        info!(domain = %domain, record_type = ?hickory_record_type, client = %client_ip, "DNS query received");

        let record_type = match RecordTypeMapper::from_hickory(hickory_record_type) {
            Some(rt) => rt,
            None => {
                warn!(record_type = ?hickory_record_type, "Unsupported record type");
                return send_error_response(request, &mut response_handle, ResponseCode::NotImp)
                    .await;
            }
        };

        let dns_request = DnsRequest::new(domain.as_str(), record_type, client_ip);

        let answer = match AssertUnwindSafe(self.use_case.execute(&dns_request))
            .catch_unwind()
            .await
        {
            Ok(Ok(answer)) => answer,
            Ok(Err(e)) => {
                error!(domain = %domain, error = %e, "Query dispatch failed");
                return send_error_response(request, &mut response_handle, ResponseCode::ServFail)
                    .await;
            }
            Err(_) => {
                error!(domain = %domain, "Query dispatch panicked");
                return send_error_response(request, &mut response_handle, ResponseCode::ServFail)
                    .await;
            }
        };

        send_answer(request, &mut response_handle, &owner, &answer).await
    }
}

pub fn response_code(outcome: ResponseOutcome) -> ResponseCode {
    match outcome {
        ResponseOutcome::NoError | ResponseOutcome::NoData => ResponseCode::NoError,
        ResponseOutcome::NxDomain => ResponseCode::NXDomain,
    }
}

async fn send_answer<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    owner: &Name,
    answer: &DnsAnswer,
) -> ResponseInfo {
    let answers: Vec<Record> = RecordBuilder::build_all(owner, &answer.records);

    let mut header = Header::response_from_request(request.header());
    header.set_authoritative(true);
    header.set_recursion_available(false);
    header.set_response_code(response_code(answer.outcome));

    debug!(
        outcome = answer.outcome.as_str(),
        answers = answers.len(),
        "Sending response"
    );

    let builder = MessageResponseBuilder::from_message_request(request);
    let response = builder.build(header, answers.iter(), &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send response");
            ResponseInfo::from(header)
        }
    }
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let response = builder.error_msg(request.header(), code);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            let mut header = Header::response_from_request(request.header());
            header.set_response_code(code);
            ResponseInfo::from(header)
        }
    }
}

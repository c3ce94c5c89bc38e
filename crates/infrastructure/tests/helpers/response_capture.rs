use hickory_proto::op::Message;
use hickory_proto::rr::Record;
use hickory_proto::serialize::binary::BinEncoder;
use hickory_server::authority::MessageResponse;
use hickory_server::server::{ResponseHandler, ResponseInfo};
use std::io;
use std::sync::{Arc, Mutex};

/// Encodes the response to wire format and keeps it for inspection.
#[derive(Clone, Default)]
pub struct CapturingResponseHandler {
    sent: Arc<Mutex<Option<Vec<u8>>>>,
}

impl CapturingResponseHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> Message {
        let bytes = self
            .sent
            .lock()
            .unwrap()
            .clone()
            .expect("no response was sent");
        Message::from_vec(&bytes).unwrap()
    }
}

#[async_trait::async_trait]
impl ResponseHandler for CapturingResponseHandler {
    async fn send_response<'a>(
        &mut self,
        response: MessageResponse<
            '_,
            'a,
            impl Iterator<Item = &'a Record> + Send + 'a,
            impl Iterator<Item = &'a Record> + Send + 'a,
            impl Iterator<Item = &'a Record> + Send + 'a,
            impl Iterator<Item = &'a Record> + Send + 'a,
        >,
    ) -> io::Result<ResponseInfo> {
        let mut buffer = Vec::with_capacity(512);
        let info = {
            let mut encoder = BinEncoder::new(&mut buffer);
            response
                .destructive_emit(&mut encoder)
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?
        };
        *self.sent.lock().unwrap() = Some(buffer);
        Ok(info)
    }
}

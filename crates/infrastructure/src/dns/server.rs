use crate::dns::forwarding::MessageBuilder;
use crate::dns::record_map::{question_from_query, to_hickory_record};
use hickory_proto::op::{Header, Message, ResponseCode};
use hickory_proto::rr::{Name, Record};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use ipecho_application::ports::UpstreamForwarder;
use ipecho_application::use_cases::{EchoOutcome, ResolveEchoQueryUseCase};
use ipecho_domain::{DomainError, Question, SynthesizedRecord};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// hickory-server entry point: answers echo questions and hands everything
/// else to the configured upstream.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<ResolveEchoQueryUseCase>,
    upstream: Option<Arc<dyn UpstreamForwarder>>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<ResolveEchoQueryUseCase>) -> Self {
        Self {
            use_case,
            upstream: None,
        }
    }

    pub fn with_upstream(mut self, upstream: Arc<dyn UpstreamForwarder>) -> Self {
        self.upstream = Some(upstream);
        self
    }

    async fn send_answers<R: ResponseHandler>(
        request: &Request,
        response_handle: &mut R,
        owners: &[(Question, Name)],
        records: &[SynthesizedRecord],
    ) -> ResponseInfo {
        let answers: Vec<Record> = records
            .iter()
            .filter_map(|record| {
                let owner = owners
                    .iter()
                    .find(|(question, _)| *question.name == *record.name())
                    .map(|(_, name)| name.clone());
                match owner {
                    Some(owner) => Some(to_hickory_record(owner, record)),
                    None => {
                        warn!(
                            domain = %record.name(),
                            "Dropping echo record without a matching question"
                        );
                        None
                    }
                }
            })
            .collect();

        debug!(answers = answers.len(), "Sending echo response");

        let builder = MessageResponseBuilder::from_message_request(request);
        let header = Header::response_from_request(request.header());
        let response = builder.build(header, answers.iter(), &[], &[], &[]);

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send echo response");
                ResponseInfo::from(*request.header())
            }
        }
    }

    /// Next-or-failure: relay the upstream answer, or SERVFAIL when there is
    /// no upstream or it cannot be reached.
    async fn fall_through<R: ResponseHandler>(
        &self,
        request: &Request,
        response_handle: &mut R,
    ) -> ResponseInfo {
        let Some(upstream) = &self.upstream else {
            debug!("No upstream configured, answering SERVFAIL");
            return send_error_response(request, response_handle, ResponseCode::ServFail).await;
        };

        let reply = match self.forward(request, upstream.as_ref()).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, upstream = %upstream.upstream(), "Fallthrough failed");
                return send_error_response(request, response_handle, ResponseCode::ServFail)
                    .await;
            }
        };

        let builder = MessageResponseBuilder::from_message_request(request);
        let mut header = Header::response_from_request(request.header());
        header.set_response_code(reply.response_code());
        header.set_authoritative(reply.authoritative());
        header.set_truncated(reply.truncated());
        header.set_recursion_available(reply.recursion_available());
        header.set_authentic_data(reply.authentic_data());

        let response = builder.build(
            header,
            reply.answers().iter(),
            reply.name_servers().iter(),
            &[],
            reply.additionals().iter(),
        );

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to relay upstream response");
                ResponseInfo::from(*request.header())
            }
        }
    }

    async fn forward(
        &self,
        request: &Request,
        upstream: &dyn UpstreamForwarder,
    ) -> Result<Message, DomainError> {
        let id = request.header().id();
        let query = MessageBuilder::encode_request(request)?;

        let bytes = upstream.forward(&query).await?;
        let reply = MessageBuilder::parse_response(&bytes)?;

        if reply.id() != id {
            return Err(DomainError::InvalidDnsMessage(format!(
                "Upstream answered with ID {} for query {}",
                reply.id(),
                id
            )));
        }

        debug!(
            upstream = %upstream.upstream(),
            rcode = ?reply.response_code(),
            answers = reply.answers().len(),
            "Upstream response relayed"
        );
        Ok(reply)
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let owners: Vec<(Question, Name)> = request
            .queries()
            .iter()
            .map(|query| {
                let original = query.original();
                (question_from_query(original), original.name().clone())
            })
            .collect();
        let questions: Vec<Question> = owners.iter().map(|(q, _)| q.clone()).collect();

        debug!(
            questions = questions.len(),
            first = questions.first().map(|q| q.name.as_ref()).unwrap_or(""),
            client = %request.src().ip(),
            "DNS query received"
        );

        match self.use_case.execute(&questions) {
            EchoOutcome::Answered(records) => {
                Self::send_answers(request, &mut response_handle, &owners, &records).await
            }
            EchoOutcome::NotAnswered => self.fall_through(request, &mut response_handle).await,
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
    let mut header = Header::response_from_request(request.header());
    header.set_response_code(code);
    let response = builder.build(header, &[], &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}

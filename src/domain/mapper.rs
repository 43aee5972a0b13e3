use super::gateway::{GatewayReply, GatewayRequest, GatewayResponse, TransportError};
use super::messages;
use super::outcome::{FailureKind, MapOutcome, OutcomeKind};
use super::payment::{PaymentStatus, TransactionMode};
use super::ports::{FailureLoggerBox, MessageResolverBox};
use super::transaction::TransactionRecord;

const CAPTURED_STATE: &str = "Captured";
const AUTHORIZED_STATE: &str = "Authorized";
const IN_PROGRESS_STATES: &[&str] = &["AuthorizationInitiated", "Pending"];

/// Maps gateway replies to local payment transitions.
///
/// Every operation consumes one reply and returns exactly one outcome. Gateway
/// rejections and transport failures become a single entry in
/// `MapOutcome::errors` with the prior status kept; nothing is raised.
pub struct TransactionMapper {
    mode: TransactionMode,
    resolver: MessageResolverBox,
    logger: FailureLoggerBox,
}

impl TransactionMapper {
    pub fn new(mode: TransactionMode, resolver: MessageResolverBox, logger: FailureLoggerBox) -> Self {
        Self {
            mode,
            resolver,
            logger,
        }
    }

    pub fn mode(&self) -> TransactionMode {
        self.mode
    }

    pub fn authorize(
        &self,
        record: &TransactionRecord,
        request: &GatewayRequest,
        reply: GatewayReply,
    ) -> MapOutcome {
        let prior = record.payment_status;
        let response = match reply {
            Ok(response) => response,
            Err(error) => return self.transport_failure(prior, request, &error),
        };
        let text = response.result_text();

        if !response.success {
            return self.declined(prior, &response, messages::AUTHORIZE_FAILED);
        }

        let mut outcome = if response.http_status == 200 {
            let status = if self.mode.captures_on_authorize() {
                PaymentStatus::Paid
            } else {
                PaymentStatus::Authorized
            };
            MapOutcome::new(status, OutcomeKind::Succeeded)
        } else {
            let mut pending = MapOutcome::new(prior, OutcomeKind::PendingAsync);
            pending.note = Some(
                self.resolver
                    .resolve(messages::AUTHORIZE_PENDING, &[response.state.as_str()]),
            );
            pending
        };
        outcome.charge_id = non_empty(&response.transaction_id);
        outcome.permission_id = non_empty(&response.permission_id);
        outcome.with_result_text(text)
    }

    pub fn capture(
        &self,
        record: &TransactionRecord,
        request: &GatewayRequest,
        reply: GatewayReply,
    ) -> MapOutcome {
        let prior = record.payment_status;
        let response = match reply {
            Ok(response) => response,
            Err(error) => return self.transport_failure(prior, request, &error),
        };
        let text = response.result_text();

        if response.success && response.state.eq_ignore_ascii_case(CAPTURED_STATE) {
            return MapOutcome::new(PaymentStatus::Paid, OutcomeKind::Succeeded).with_result_text(text);
        }
        self.rejected(prior, &response, messages::CAPTURE_FAILED)
    }

    pub fn refund(
        &self,
        record: &TransactionRecord,
        is_partial: bool,
        request: &GatewayRequest,
        reply: GatewayReply,
    ) -> MapOutcome {
        let prior = record.payment_status;
        let response = match reply {
            Ok(response) => response,
            Err(error) => return self.transport_failure(prior, request, &error),
        };

        if !response.success {
            return self.rejected(prior, &response, messages::REFUND_FAILED);
        }

        let status = if is_partial {
            PaymentStatus::PartiallyRefunded
        } else {
            PaymentStatus::Refunded
        };
        let mut outcome =
            MapOutcome::new(status, OutcomeKind::Succeeded).with_result_text(response.result_text());
        outcome.refund_id = non_empty(&response.transaction_id);
        outcome
    }

    /// Cancels an open charge. Outside `Pending`/`Authorized` this is a no-op.
    pub fn void(
        &self,
        record: &TransactionRecord,
        request: &GatewayRequest,
        reply: GatewayReply,
    ) -> MapOutcome {
        let prior = record.payment_status;
        if !prior.can_void() {
            return MapOutcome::skipped(prior);
        }
        let response = match reply {
            Ok(response) => response,
            Err(error) => return self.transport_failure(prior, request, &error),
        };

        if !response.success {
            return self.rejected(prior, &response, messages::VOID_FAILED);
        }
        MapOutcome::new(PaymentStatus::Voided, OutcomeKind::Succeeded)
            .with_result_text(response.result_text())
    }

    /// Completes an authorization that was accepted asynchronously, from a
    /// later poll or notification of the charge state.
    pub fn settle_pending(
        &self,
        record: &TransactionRecord,
        request: &GatewayRequest,
        reply: GatewayReply,
    ) -> MapOutcome {
        let prior = record.payment_status;
        if prior != PaymentStatus::Pending {
            return MapOutcome::skipped(prior);
        }
        let response = match reply {
            Ok(response) => response,
            Err(error) => return self.transport_failure(prior, request, &error),
        };
        if !response.success {
            return self.declined(prior, &response, messages::SETTLE_FAILED);
        }

        let state = response.state.as_str();
        let mut outcome = if state.eq_ignore_ascii_case(CAPTURED_STATE) {
            MapOutcome::new(PaymentStatus::Paid, OutcomeKind::Succeeded)
        } else if state.eq_ignore_ascii_case(AUTHORIZED_STATE) {
            MapOutcome::new(PaymentStatus::Authorized, OutcomeKind::Succeeded)
        } else if IN_PROGRESS_STATES.iter().any(|s| state.eq_ignore_ascii_case(s)) {
            let mut pending = MapOutcome::new(prior, OutcomeKind::PendingAsync);
            pending.note = Some(self.resolver.resolve(messages::AUTHORIZE_PENDING, &[state]));
            pending
        } else {
            return self.declined(prior, &response, messages::SETTLE_FAILED);
        };
        outcome.charge_id = non_empty(&response.transaction_id);
        outcome.permission_id = non_empty(&response.permission_id);
        outcome.with_result_text(response.result_text())
    }

    /// Rejection of an authorization, either direct or settled later. Soft
    /// and hard declines get their buyer-facing texts, anything else `key`.
    fn declined(&self, prior: PaymentStatus, response: &GatewayResponse, key: &str) -> MapOutcome {
        let text = response.result_text();
        let kind = FailureKind::from_reason_code(&response.reason_code);
        let message = match kind {
            FailureKind::SoftDecline => self.resolver.resolve(messages::AUTHORIZE_SOFT_DECLINE, &[]),
            FailureKind::HardDecline => self.resolver.resolve(messages::AUTHORIZE_HARD_DECLINE, &[]),
            _ => self.resolver.resolve(key, &[text.as_str()]),
        };
        MapOutcome::failed(prior, kind, message).with_result_text(text)
    }

    fn rejected(&self, prior: PaymentStatus, response: &GatewayResponse, key: &str) -> MapOutcome {
        let text = response.result_text();
        let kind = FailureKind::from_reason_code(&response.reason_code);
        let message = self.resolver.resolve(key, &[text.as_str()]);
        MapOutcome::failed(prior, kind, message).with_result_text(text)
    }

    fn transport_failure(
        &self,
        prior: PaymentStatus,
        request: &GatewayRequest,
        error: &TransportError,
    ) -> MapOutcome {
        let message = self.logger.log_failure(request, error);
        MapOutcome::failed(prior, FailureKind::Transport, message)
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

//! Message keys rendered through [`MessageResolver`](super::ports::MessageResolver).
//!
//! Positional arguments are noted next to each key.

pub const AUTHORIZE_SOFT_DECLINE: &str = "payment.authorize.soft_decline";
pub const AUTHORIZE_HARD_DECLINE: &str = "payment.authorize.hard_decline";
/// `{0}` result text.
pub const AUTHORIZE_FAILED: &str = "payment.authorize.failed";
/// `{0}` gateway state.
pub const AUTHORIZE_PENDING: &str = "payment.authorize.pending";
/// `{0}` result text.
pub const CAPTURE_FAILED: &str = "payment.capture.failed";
/// `{0}` result text.
pub const REFUND_FAILED: &str = "payment.refund.failed";
/// `{0}` result text.
pub const VOID_FAILED: &str = "payment.void.failed";
/// `{0}` result text.
pub const SETTLE_FAILED: &str = "payment.settle.failed";
/// `{0}` operation, `{1}` order id, `{2}` transport error.
pub const TRANSPORT_FAILED: &str = "payment.transport.failed";

pub const DEFAULT_CATALOG: &[(&str, &str)] = &[
    (
        AUTHORIZE_SOFT_DECLINE,
        "Your payment was declined. Please try again or select another payment method.",
    ),
    (
        AUTHORIZE_HARD_DECLINE,
        "Your payment could not be processed. Please select another payment method.",
    ),
    (AUTHORIZE_FAILED, "Payment authorization failed: {0}"),
    (
        AUTHORIZE_PENDING,
        "Payment is being processed ({0}). The order will be updated when it completes.",
    ),
    (CAPTURE_FAILED, "Payment capture failed: {0}"),
    (REFUND_FAILED, "Refund failed: {0}"),
    (VOID_FAILED, "Payment cancellation failed: {0}"),
    (SETTLE_FAILED, "Payment was not completed: {0}"),
    (TRANSPORT_FAILED, "{0} request for order {1} failed: {2}"),
];

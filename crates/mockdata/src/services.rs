//! Canned service doubles.
//!
//! Each double exposes a fixed set of named operations that always succeed and
//! records the operations invoked on it. Failure injection is out of scope;
//! tests that need a failing backend fulfill routes with
//! [`ApiEnvelope::error`](crate::ApiEnvelope::error) instead.

use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};

use crate::records::{mock_payment, mock_user, Payment, PaymentOverrides, User, UserOverrides};

/// Generic success marker returned by write-style operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpStatus {
    pub success: bool,
}

impl OpStatus {
    fn ok() -> Self {
        Self { success: true }
    }
}

/// Stand-in for the application database.
#[derive(Debug, Default)]
pub struct MockDatabase {
    calls: Vec<String>,
}

impl MockDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connect(&mut self) -> bool {
        self.calls.push("connect".to_string());
        true
    }

    pub fn disconnect(&mut self) -> bool {
        self.calls.push("disconnect".to_string());
        true
    }

    pub fn execute(&mut self, query: &str) -> OpStatus {
        self.calls.push(format!("execute:{}", query));
        OpStatus::ok()
    }

    pub fn fetch_one(&mut self) -> User {
        self.calls.push("fetch_one".to_string());
        mock_user(UserOverrides::default())
    }

    pub fn fetch_all(&mut self) -> Vec<User> {
        self.calls.push("fetch_all".to_string());
        (0..5).map(|_| mock_user(UserOverrides::default())).collect()
    }

    /// Operations invoked so far, in call order.
    pub fn calls(&self) -> &[String] {
        &self.calls
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendReceipt {
    pub success: bool,
    pub message_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkSendReceipt {
    pub success: bool,
    pub sent_count: u32,
}

/// Stand-in for the transactional email service.
#[derive(Debug, Default)]
pub struct MockEmailService {
    calls: Vec<String>,
}

impl MockEmailService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn send(&mut self, to: &str) -> SendReceipt {
        self.calls.push(format!("send:{}", to));
        SendReceipt {
            success: true,
            message_id: format!("msg_{}", thread_rng().gen_range(1000..=9999)),
        }
    }

    pub fn send_bulk(&mut self) -> BulkSendReceipt {
        self.calls.push("send_bulk".to_string());
        BulkSendReceipt {
            success: true,
            sent_count: 10,
        }
    }

    pub fn calls(&self) -> &[String] {
        &self.calls
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundReceipt {
    pub success: bool,
    pub refund_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentVerification {
    pub verified: bool,
}

/// Stand-in for the payment gateway, commission handling included.
#[derive(Debug, Default)]
pub struct MockPaymentGateway {
    calls: Vec<String>,
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process_payment(&mut self) -> Payment {
        self.calls.push("process_payment".to_string());
        mock_payment(PaymentOverrides {
            status: Some("completed".to_string()),
            ..Default::default()
        })
    }

    pub fn refund_payment(&mut self) -> RefundReceipt {
        self.calls.push("refund_payment".to_string());
        RefundReceipt {
            success: true,
            refund_id: format!("ref_{}", thread_rng().gen_range(1000..=9999)),
        }
    }

    pub fn verify_payment(&mut self) -> PaymentVerification {
        self.calls.push("verify_payment".to_string());
        PaymentVerification { verified: true }
    }

    pub fn calls(&self) -> &[String] {
        &self.calls
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadReceipt {
    pub success: bool,
    pub url: String,
}

/// Stand-in for blob storage (product images, invoices).
#[derive(Debug, Default)]
pub struct MockStorageService {
    calls: Vec<String>,
}

impl MockStorageService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upload(&mut self, name: &str) -> UploadReceipt {
        self.calls.push(format!("upload:{}", name));
        UploadReceipt {
            success: true,
            url: "https://example.com/uploads/test.jpg".to_string(),
        }
    }

    pub fn download(&mut self) -> Vec<u8> {
        self.calls.push("download".to_string());
        b"mock file content".to_vec()
    }

    pub fn delete(&mut self) -> OpStatus {
        self.calls.push("delete".to_string());
        OpStatus::ok()
    }

    pub fn calls(&self) -> &[String] {
        &self.calls
    }
}

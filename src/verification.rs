/// Typed email verification results
///
/// The verification provider answers with a JSON object whose `status` and
/// `reason` fields are closed sets of strings. They are decoded into enums here
/// so the tool can match on them; anything unrecognized lands in `Unknown`.
use serde::{Deserialize, Serialize};

use crate::domain::trim_line;
use crate::error::Result;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Deliverable,
    Risky,
    Undeliverable,
    #[serde(other)]
    Unknown,
}

impl VerificationStatus {
    pub fn description(self) -> &'static str {
        match self {
            VerificationStatus::Deliverable => "The address exists and is safe to send to",
            VerificationStatus::Risky => "The address may bounce or have low engagement",
            VerificationStatus::Undeliverable => "The address is incorrect or does not exist",
            VerificationStatus::Unknown => "The address could not be verified",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VerificationReason {
    AcceptedEmail,
    LowDeliverability,
    LowQuality,
    InvalidEmail,
    InvalidDomain,
    RejectedEmail,
    DnsError,
    UnavailableSmtp,
    Unsupported,
    Timeout,
    #[serde(other)]
    Unknown,
}

impl VerificationReason {
    pub fn as_str(self) -> &'static str {
        match self {
            VerificationReason::AcceptedEmail => "accepted_email",
            VerificationReason::LowDeliverability => "low_deliverability",
            VerificationReason::LowQuality => "low_quality",
            VerificationReason::InvalidEmail => "invalid_email",
            VerificationReason::InvalidDomain => "invalid_domain",
            VerificationReason::RejectedEmail => "rejected_email",
            VerificationReason::DnsError => "dns_error",
            VerificationReason::UnavailableSmtp => "unavailable_smtp",
            VerificationReason::Unsupported => "unsupported",
            VerificationReason::Timeout => "timeout",
            VerificationReason::Unknown => "unknown",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            VerificationReason::AcceptedEmail => "Email accepted and valid",
            VerificationReason::LowDeliverability => {
                "Email looks deliverable but delivery cannot be guaranteed"
            }
            VerificationReason::LowQuality => "Email has quality issues that make it risky",
            VerificationReason::InvalidEmail => "Email syntax is invalid",
            VerificationReason::InvalidDomain => "Domain does not exist or has no valid DNS records",
            VerificationReason::RejectedEmail => "Email was rejected by the SMTP server",
            VerificationReason::DnsError => "DNS records could not be resolved",
            VerificationReason::UnavailableSmtp => "SMTP server unavailable",
            VerificationReason::Unsupported => "Email provider not supported",
            VerificationReason::Timeout => "Verification timed out",
            VerificationReason::Unknown => "An unexpected error occurred",
        }
    }
}

/// yes / no / unknown flags used throughout the payload
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TriState {
    Yes,
    No,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DomainInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub accept_all: TriState,
    #[serde(default)]
    pub disposable: TriState,
    #[serde(default)]
    pub free: TriState,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    #[serde(default)]
    pub role: TriState,
    #[serde(default)]
    pub disabled: TriState,
    #[serde(default)]
    pub full_mailbox: TriState,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DnsRecordType {
    #[serde(rename = "MX")]
    Mx,
    A,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DnsInfo {
    #[serde(rename = "type")]
    pub kind: DnsRecordType,
    #[serde(default)]
    pub record: String,
}

/// Full verification payload for one address
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmailVerification {
    pub email: String,
    pub status: VerificationStatus,
    pub reason: VerificationReason,
    pub domain: Option<DomainInfo>,
    pub account: Option<AccountInfo>,
    pub dns: Option<DnsInfo>,
    pub provider: Option<String>,
    pub score: Option<f64>,
    pub toxic: Option<String>,
    pub toxicity: Option<f64>,
    pub retry_after: Option<String>,
}

impl EmailVerification {
    pub fn from_json(json: &str) -> Result<EmailVerification> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Per-address checks shown by the email tool
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmailCheckSummary {
    pub email: String,
    pub status: VerificationStatus,
    pub format: bool,
    pub domain: bool,
    pub mx: bool,
    pub disposable: bool,
    pub smtp: bool,
    pub message: String,
}

impl EmailCheckSummary {
    /// Fallback entry for an address whose verification call failed
    pub fn unverified(email: &str, message: &str) -> EmailCheckSummary {
        EmailCheckSummary {
            email: email.to_string(),
            status: VerificationStatus::Unknown,
            format: true,
            domain: false,
            mx: false,
            disposable: false,
            smtp: false,
            message: message.to_string(),
        }
    }
}

impl From<&EmailVerification> for EmailCheckSummary {
    fn from(v: &EmailVerification) -> Self {
        EmailCheckSummary {
            email: v.email.clone(),
            status: v.status,
            format: v.reason != VerificationReason::InvalidEmail,
            domain: v.domain.as_ref().is_some_and(|d| !d.name.is_empty()),
            mx: v.dns.as_ref().is_some_and(|d| d.kind == DnsRecordType::Mx),
            disposable: v
                .domain
                .as_ref()
                .is_some_and(|d| d.disposable == TriState::Yes),
            smtp: v.status == VerificationStatus::Deliverable,
            message: v.reason.as_str().to_string(),
        }
    }
}

/// Decode a provider payload and reduce it to the displayed checks
pub fn summarize(json: &str) -> Result<EmailCheckSummary> {
    let verification = EmailVerification::from_json(json)?;
    log::debug!(
        "Verification for {}: {:?} ({})",
        verification.email,
        verification.status,
        verification.reason.as_str()
    );
    Ok(EmailCheckSummary::from(&verification))
}

/// Addresses from the email tool's textarea, one per line, blanks dropped
pub fn email_list(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(trim_line)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

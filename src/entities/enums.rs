//! Enumerazioni - Tipi enumerati utilizzati nelle entità

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ********************* ENUMERAZIONI UTILI **********************//

/// Risposta alla domanda "will you attend?" del form.
///
/// Sul filo e nel database viaggia come `"yes"` / `"no"`, gli stessi valori
/// dei radio button della pagina.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attendance {
    #[serde(rename = "yes")]
    Attending,
    #[serde(rename = "no")]
    NotAttending,
}

impl Attendance {
    pub fn is_attending(self) -> bool {
        matches!(self, Attendance::Attending)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Attendance::Attending => "yes",
            Attendance::NotAttending => "no",
        }
    }
}

impl FromStr for Attendance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(Attendance::Attending),
            "no" => Ok(Attendance::NotAttending),
            other => Err(format!("unknown attendance value '{}'", other)),
        }
    }
}

/// Which template produced an outbound mail document
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MailKind {
    HostAlert,
    GuestConfirmation,
    AfterPartyInvite,
}

impl MailKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MailKind::HostAlert => "host_alert",
            MailKind::GuestConfirmation => "guest_confirmation",
            MailKind::AfterPartyInvite => "after_party_invite",
        }
    }
}

impl fmt::Display for MailKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MailKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "host_alert" => Ok(MailKind::HostAlert),
            "guest_confirmation" => Ok(MailKind::GuestConfirmation),
            "after_party_invite" => Ok(MailKind::AfterPartyInvite),
            other => Err(format!("unknown mail kind '{}'", other)),
        }
    }
}

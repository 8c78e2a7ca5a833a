//! Token authentication.
//!
//! Two digest derivations, selected by the admin login: admins prove
//! knowledge of the current-hour digest, everyone else of their
//! account/login digest. An admin token therefore stops working at the
//! next hour boundary.

use chrono::{DateTime, Local};
use sha2::{Digest, Sha512};

use crate::requests::MethodRequest;

pub const SALT: &str = "Otus";
pub const ADMIN_LOGIN: &str = "admin";
pub const ADMIN_SALT: &str = "42";

/// Check the envelope token against the digest its credentials derive.
///
/// Runs before any method-specific validation; a failed check must reveal
/// nothing beyond the fixed Forbidden phrase. Absent credentials compare
/// as empty strings and simply fail.
pub fn is_authenticated(request: &MethodRequest) -> bool {
    let digest = if request.is_admin() {
        admin_digest(Local::now())
    } else {
        user_digest(
            request.account.as_deref().unwrap_or(""),
            request.login.as_deref().unwrap_or(""),
        )
    };
    request.token.as_deref() == Some(digest.as_str())
}

/// Admin token for the hour of `now`: SHA-512 of `YYYYMMDDHH` plus the
/// admin salt, independent of account and login.
pub fn admin_digest(now: DateTime<Local>) -> String {
    sha512_hex(&format!("{}{}", now.format("%Y%m%d%H"), ADMIN_SALT))
}

/// Non-admin token: SHA-512 of account, login and the fixed salt.
pub fn user_digest(account: &str, login: &str) -> String {
    sha512_hex(&format!("{account}{login}{SALT}"))
}

fn sha512_hex(message: &str) -> String {
    let mut hasher = Sha512::new();
    hasher.update(message.as_bytes());
    format!("{:x}", hasher.finalize())
}

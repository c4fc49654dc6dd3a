use serde::Deserialize;

/// `GET /api/v1/accounts/{id}` response, reduced to the fields this kit
/// reads. Unknown fields are ignored on decode.
#[derive(Clone, Debug, Deserialize)]
pub struct AccountInfoResponse {
    pub account: Option<String>,
    pub key: Option<AccountKey>,
    pub balance: Option<AccountBalance>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AccountKey {
    /// Key algorithm tag, e.g. `ED25519`.
    #[serde(rename = "_type")]
    pub key_type: Option<String>,
    /// Hex-encoded key material; absent for keyless system accounts.
    pub key: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AccountBalance {
    pub balance: i64,
    pub timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_account_with_key() {
        let body = r#"{
            "account": "0.0.5830192",
            "key": { "_type": "ED25519", "key": "aabbcc" },
            "balance": { "balance": 1000, "timestamp": "1700000000.000000000" },
            "auto_renew_period": 7776000
        }"#;
        let info: AccountInfoResponse = serde_json::from_str(body).unwrap();
        assert_eq!(info.account.as_deref(), Some("0.0.5830192"));
        assert_eq!(info.key.unwrap().key.as_deref(), Some("aabbcc"));
        assert_eq!(info.balance.unwrap().balance, 1000);
    }

    #[test]
    fn decodes_keyless_account() {
        let body = r#"{ "account": "0.0.98", "key": null, "balance": null }"#;
        let info: AccountInfoResponse = serde_json::from_str(body).unwrap();
        assert!(info.key.is_none());
    }
}

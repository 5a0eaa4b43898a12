// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use crate::infrastructure::security::claims::parse_claims;
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, AuthorizerBuilder, Term},
};
use chrono::{DateTime, Utc};
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};

/// Issues and verifies Ed25519-signed biscuit bearer tokens.
#[derive(Clone)]
pub struct BiscuitTokenManager {
    root: Arc<KeyPair>,
    public: PublicKey,
    ttl: Duration,
}

impl BiscuitTokenManager {
    pub fn new(private_key_hex: &str, ttl: Duration) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(format!("invalid root key: {err}")))?;
        let keypair = KeyPair::from(&private);
        let public = keypair.public();

        Ok(Self {
            root: Arc::new(keypair),
            public,
            ttl,
        })
    }
}

fn infra(err: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::infrastructure(err.to_string())
}

fn rejected(err: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::unauthorized(format!("invalid token: {err}"))
}

fn escape_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn authority_block(
    subject: &TokenSubject,
    issued_at: SystemTime,
    expires_at: SystemTime,
) -> (String, HashMap<String, Term>) {
    let mut params: HashMap<String, Term> = HashMap::new();
    params.insert("uid".to_string(), i64::from(subject.user_id).into());
    params.insert("uname".to_string(), subject.username.clone().into());
    params.insert("urole".to_string(), subject.role.as_str().into());
    params.insert("issued".to_string(), issued_at.into());
    params.insert("exp".to_string(), expires_at.into());

    let mut code = String::from(
        r#"
        user({uid}, {uname});
        role({urole});
        issued_at({issued});
        expires_at({exp});
        check if time($now), $now >= {issued};
        check if time($now), $now <= {exp};
        "#,
    );

    if let Some(sid) = subject.session_id.as_ref() {
        code.push_str("session({sid});\n");
        params.insert("sid".to_string(), sid.clone().into());
    }

    let mut rights: Vec<_> = subject.capabilities.iter().collect();
    rights.sort_by(|a, b| (&a.resource, &a.action).cmp(&(&b.resource, &b.action)));
    for cap in rights {
        code.push_str(&format!(
            "right(\"{}\", \"{}\");\n",
            escape_literal(&cap.resource),
            escape_literal(&cap.action)
        ));
    }

    (code, params)
}

fn seal(code: &str, params: HashMap<String, Term>, root: &KeyPair) -> ApplicationResult<String> {
    let token = Biscuit::builder()
        .code_with_params(code, params, HashMap::new())
        .map_err(infra)?
        .build(root)
        .map_err(infra)?;

    token.seal().map_err(infra)?.to_base64().map_err(infra)
}

#[async_trait]
impl TokenManager for BiscuitTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = SystemTime::now();
        let expires_at = issued_at
            .checked_add(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;

        let (code, params) = authority_block(&subject, issued_at, expires_at);
        let token = seal(&code, params, self.root.as_ref())?;

        Ok(AuthTokenDto {
            token,
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
            expires_in: i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX),
            session_id: subject.session_id,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let biscuit = Biscuit::from_base64(token, self.public).map_err(rejected)?;

        // the token's own time checks decide validity; the policy only has to allow
        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .code("allow if true")
            .map_err(infra)?
            .build(&biscuit)
            .map_err(rejected)?;

        authorizer.authorize().map_err(rejected)?;

        let (facts, _, _, _) = authorizer.dump();
        parse_claims(facts)
    }
}

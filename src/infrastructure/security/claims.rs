// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{Capability, Role, UserId};
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::{
    collections::HashSet,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

/// Rebuild the authenticated user from the facts of a verified token.
pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let ctx = ClaimsContext::from_facts(facts);
    ctx.into_user()
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<i64>,
    username: Option<String>,
    role: Option<Role>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
    session_id: Option<String>,
    capabilities: HashSet<Capability>,
}

fn missing(claim: &str) -> ApplicationError {
    ApplicationError::unauthorized(format!("missing {claim}"))
}

fn date(term: Option<&Term>) -> Option<SystemTime> {
    match term {
        Some(Term::Date(seconds)) => Some(UNIX_EPOCH + Duration::from_secs(*seconds)),
        _ => None,
    }
}

impl ClaimsContext {
    fn from_facts(facts: Vec<Fact>) -> Self {
        let mut ctx = Self::default();
        for fact in facts {
            ctx.apply(fact.predicate);
        }
        ctx
    }

    fn apply(&mut self, predicate: Predicate) {
        let terms = predicate.terms.as_slice();
        match (predicate.name.as_str(), terms) {
            ("user", [Term::Integer(id), Term::Str(name)]) => {
                self.user_id = Some(*id);
                self.username = Some(name.clone());
            }
            ("role", [Term::Str(name)]) => {
                self.role = name.parse().ok();
            }
            ("issued_at", [term]) => self.issued_at = date(Some(term)),
            ("expires_at", [term]) => self.expires_at = date(Some(term)),
            ("session", [Term::Str(sid)]) => self.session_id = Some(sid.clone()),
            ("right", [Term::Str(resource), Term::Str(action)]) => {
                self.capabilities
                    .insert(Capability::new(resource.clone(), action.clone()));
            }
            _ => {}
        }
    }

    fn into_user(self) -> ApplicationResult<AuthenticatedUser> {
        let user_id = self.user_id.ok_or_else(|| missing("user id"))?;
        let username = self.username.ok_or_else(|| missing("username"))?;
        let role = self.role.ok_or_else(|| missing("role"))?;
        let issued_at = self.issued_at.ok_or_else(|| missing("issued_at"))?;
        let expires_at = self.expires_at.ok_or_else(|| missing("expires_at"))?;

        Ok(AuthenticatedUser {
            id: UserId::new(user_id)?,
            username,
            role,
            // signed rights only; the role never widens or narrows them
            capabilities: self.capabilities,
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
            session_id: self.session_id,
        })
    }
}

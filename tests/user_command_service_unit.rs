// tests/user_command_service_unit.rs
mod support;

use campus_books::application::{
    commands::users::{LoginUserCommand, RegisterUserCommand},
    error::ApplicationError,
};
use campus_books::domain::user::Role;
use std::sync::Arc;
use support::{PASSWORD, TestApp, YieldingPasswordHasher};

fn registration(email: &str, username: &str) -> RegisterUserCommand {
    RegisterUserCommand {
        email: email.into(),
        username: username.into(),
        password: PASSWORD.into(),
        confirm_password: PASSWORD.into(),
    }
}

fn validation_message(err: ApplicationError) -> String {
    match err {
        ApplicationError::Validation(msg) => msg,
        ApplicationError::Domain(campus_books::domain::errors::DomainError::Validation(msg)) => {
            msg
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn first_account_is_admin_and_later_ones_are_students() {
    let app = TestApp::new();
    let commands = &app.services.user_commands;

    let first = commands
        .register(registration("first@campus.edu", "first"))
        .await
        .unwrap();
    let second = commands
        .register(registration("Second@Campus.edu", "second"))
        .await
        .unwrap();

    assert_eq!(first.user.role, Role::Admin);
    assert!(first.user.is_admin);
    assert_eq!(second.user.role, Role::Student);
    assert_eq!(second.user.email, "second@campus.edu");
    assert!(second.token.session_id.is_some());
    assert_eq!(app.users.all().len(), 2);
}

#[tokio::test]
async fn simultaneous_first_sign_ups_produce_one_admin() {
    let app = TestApp::with_password_hasher(Arc::new(YieldingPasswordHasher));
    let commands = &app.services.user_commands;

    let (alice, bobby) = tokio::join!(
        commands.register(registration("alice@campus.edu", "alice")),
        commands.register(registration("bobby@campus.edu", "bobby")),
    );

    let roles = [alice.unwrap().user.role, bobby.unwrap().user.role];
    assert_eq!(roles.iter().filter(|role| **role == Role::Admin).count(), 1);
    assert_eq!(roles.iter().filter(|role| **role == Role::Student).count(), 1);
}

#[tokio::test]
async fn register_reports_password_problems_in_order() {
    let app = TestApp::new();
    let commands = &app.services.user_commands;

    let mut empty = registration("a@campus.edu", "alice");
    empty.password.clear();
    let err = commands.register(empty).await.unwrap_err();
    assert_eq!(validation_message(err), "Password field empty");

    let mut mismatch = registration("a@campus.edu", "alice");
    mismatch.confirm_password = "something else".into();
    let err = commands.register(mismatch).await.unwrap_err();
    assert_eq!(
        validation_message(err),
        "Password does not match confirmed password"
    );

    let mut short = registration("a@campus.edu", "alice");
    short.password = "short".into();
    short.confirm_password = "short".into();
    assert!(matches!(
        commands.register(short).await,
        Err(ApplicationError::Validation(_))
    ));

    assert!(app.users.all().is_empty());
}

#[tokio::test]
async fn register_rejects_taken_email_and_username() {
    let app = TestApp::new();
    let commands = &app.services.user_commands;
    commands
        .register(registration("taken@campus.edu", "taken"))
        .await
        .unwrap();

    let err = commands
        .register(registration("TAKEN@campus.edu", "other"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(ref msg) if msg == "email already registered"));

    let err = commands
        .register(registration("other@campus.edu", "taken"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(ref msg) if msg == "username already taken"));
}

#[tokio::test]
async fn login_failures_share_one_message() {
    let app = TestApp::new();
    let commands = &app.services.user_commands;
    commands
        .register(registration("reader@campus.edu", "reader"))
        .await
        .unwrap();

    for (email, password) in [
        ("reader@campus.edu", "wrong password"),
        ("nobody@campus.edu", PASSWORD),
        ("not-an-email", PASSWORD),
    ] {
        let err = commands
            .login(LoginUserCommand {
                email: email.into(),
                password: password.into(),
            })
            .await
            .unwrap_err();
        assert!(
            matches!(err, ApplicationError::Unauthorized(ref msg) if msg == "Incorrect password or email"),
            "{email}: {err:?}"
        );
    }

    let ok = commands
        .login(LoginUserCommand {
            email: " Reader@Campus.edu ".into(),
            password: PASSWORD.into(),
        })
        .await
        .unwrap();
    assert_eq!(ok.user.username, "reader");
}

#[tokio::test]
async fn logout_revokes_only_that_session() {
    let app = TestApp::new();
    let commands = &app.services.user_commands;
    let registered = commands
        .register(registration("reader@campus.edu", "reader"))
        .await
        .unwrap();
    let other = commands
        .login(LoginUserCommand {
            email: "reader@campus.edu".into(),
            password: PASSWORD.into(),
        })
        .await
        .unwrap();

    let actor = app
        .services
        .authenticate(&registered.token.token)
        .await
        .unwrap();
    commands.logout(&actor).await.unwrap();

    let err = app
        .services
        .authenticate(&registered.token.token)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthorized(ref msg) if msg == "session revoked"));
    assert!(app.services.authenticate(&other.token.token).await.is_ok());
}

#[tokio::test]
async fn profile_lists_sorted_capabilities() {
    let app = TestApp::new();
    let registered = app
        .services
        .user_commands
        .register(registration("admin@campus.edu", "admin"))
        .await
        .unwrap();
    let actor = app
        .services
        .authenticate(&registered.token.token)
        .await
        .unwrap();

    let profile = app.services.user_queries.get_profile(&actor).await.unwrap();
    let actions: Vec<_> = profile
        .capabilities
        .iter()
        .map(|cap| format!("{}:{}", cap.resource, cap.action))
        .collect();
    assert_eq!(
        actions,
        ["books:create", "books:delete:any", "books:view"]
    );
    assert_eq!(profile.user.username, "admin");
}

use super::*;

#[test]
fn validate_login_input_trims_user_number() {
    assert_eq!(
        validate_login_input("  1234567 ", "student", "secret"),
        Ok(Credentials {
            user_number: "1234567".to_owned(),
            user_type: Role::Student,
            password: "secret".to_owned(),
        })
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    let creds = validate_login_input("1", "admin", " pass ").unwrap();
    assert_eq!(creds.password, " pass ");
    assert_eq!(creds.user_type, Role::Admin);
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "student", "pw"), Err(MISSING_FIELDS));
    assert_eq!(validate_login_input("1234567", "student", ""), Err(MISSING_FIELDS));
}

#[test]
fn validate_login_input_rejects_unknown_role() {
    assert_eq!(validate_login_input("1234567", "guest", "pw"), Err(UNKNOWN_ROLE));
}

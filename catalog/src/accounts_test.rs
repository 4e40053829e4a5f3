use super::*;

fn account(email: &str, name: &str) -> UserAccount {
    UserAccount {
        email: email.to_owned(),
        display_name: name.to_owned(),
        role: "Officer".to_owned(),
        last_login: "1 Jan, 10:00 AM".to_owned(),
    }
}

fn directory() -> AccountDirectory {
    AccountDirectory::new(
        vec![account("admin@gov.in", "Ramesh Gupta"), account("paritosh@gmail.com", "Paritosh")],
        "paritosh@gmail.com",
    )
    .unwrap()
}

#[test]
fn resolve_exact_match() {
    assert_eq!(directory().resolve("admin@gov.in").display_name, "Ramesh Gupta");
}

#[test]
fn resolve_ignores_case() {
    assert_eq!(directory().resolve("ADMIN@Gov.IN").display_name, "Ramesh Gupta");
}

#[test]
fn resolve_unknown_falls_back_to_default() {
    let dir = directory();
    assert_eq!(dir.resolve("someone@else.org"), dir.default_account());
    assert_eq!(dir.resolve("").display_name, "Paritosh");
}

#[test]
fn resolve_does_not_trim_or_partially_match() {
    let dir = directory();
    assert_eq!(dir.resolve(" admin@gov.in").display_name, "Paritosh");
    assert_eq!(dir.resolve("admin").display_name, "Paritosh");
    assert!(dir.find("admin@gov.in.evil").is_none());
}

#[test]
fn new_rejects_empty_list() {
    assert_eq!(AccountDirectory::new(Vec::new(), "x@y.z"), Err(CatalogError::NoAccounts));
}

#[test]
fn new_rejects_unknown_default() {
    let err = AccountDirectory::new(vec![account("a@b.c", "A")], "missing@b.c").unwrap_err();
    assert_eq!(err, CatalogError::UnknownDefaultAccount("missing@b.c".to_owned()));
}

#[test]
fn from_json_reports_parse_errors() {
    let err = AccountDirectory::from_json("{ not json").unwrap_err();
    assert!(matches!(err, CatalogError::Parse { document: "accounts", .. }));
}

#[test]
fn initial_is_first_character() {
    assert_eq!(account("a@b.c", "Ramesh").initial(), "R");
    assert_eq!(account("a@b.c", "").initial(), "");
}

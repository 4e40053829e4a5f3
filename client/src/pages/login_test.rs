use super::*;

#[test]
fn submit_caption_switches_while_pending() {
    assert_eq!(submit_caption(false, "Verify Credentials".to_owned(), "Verifying...".to_owned()), "Verify Credentials");
    assert_eq!(submit_caption(true, "Verify Credentials".to_owned(), "Verifying...".to_owned()), "Verifying...");
}
